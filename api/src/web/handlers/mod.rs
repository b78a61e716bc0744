// api/src/web/handlers/mod.rs

// Declare handler modules
pub mod chocolate_handlers;
pub mod system_handlers;
