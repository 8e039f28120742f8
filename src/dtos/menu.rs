// src/dtos/menu.rs
use serde::Serialize;

use crate::models::menu_item::MenuItem;
use crate::pricing::to_f64;

#[derive(Debug, Serialize)]
pub struct MenuItemResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

// Convert from Model to Response DTO
impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: to_f64(item.price),
            description: item.description,
            image: item.image,
            category: item.category,
        }
    }
}
