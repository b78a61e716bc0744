// src/catalog/seed.rs

//! Sample records inserted by the seed operation.

use crate::catalog::model::Chocolate;

fn sample(
  name: &str,
  description: &str,
  price: f64,
  category: &str,
  cacao_percent: i32,
  image: &str,
  tags: &[&str],
) -> Chocolate {
  Chocolate {
    name: name.to_string(),
    description: description.to_string(),
    price,
    category: category.to_string(),
    cacao_percent: Some(cacao_percent),
    image: Some(image.to_string()),
    tags: tags.iter().map(|t| t.to_string()).collect(),
    in_stock: true,
  }
}

pub fn sample_chocolates() -> Vec<Chocolate> {
  vec![
    sample(
      "Sea Salt Caramel Truffle",
      "Silky caramel center with a kiss of sea salt, enrobed in dark chocolate.",
      3.5,
      "Truffle",
      70,
      "https://images.unsplash.com/photo-1541781774459-bb2af2f05b55?q=80&w=1600&auto=format&fit=crop",
      &["caramel", "salted", "dark"],
    ),
    sample(
      "Hazelnut Praline Bonbon",
      "Roasted hazelnut praline with a creamy finish, dipped in milk chocolate.",
      3.0,
      "Bonbon",
      45,
      "https://images.unsplash.com/photo-1606313564200-e75d5e30476c?q=80&w=1600&auto=format&fit=crop",
      &["hazelnut", "praline", "milk"],
    ),
    sample(
      "Raspberry Velvet Heart",
      "Tart raspberry ganache balanced with rich dark chocolate in a heart shell.",
      3.2,
      "Bonbon",
      64,
      "https://images.unsplash.com/photo-1585145197082-583a1a5b86b8?q=80&w=1600&auto=format&fit=crop",
      &["raspberry", "fruit", "dark"],
    ),
    sample(
      "Almond Crunch Bar",
      "Toasted almond nibs folded into a crisp 72% dark chocolate bar.",
      6.5,
      "Bar",
      72,
      "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?q=80&w=1600&auto=format&fit=crop",
      &["almond", "bar", "dark"],
    ),
  ]
}
