// src/handlers/menu.rs
use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use axum::body::Bytes;
use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use rust_decimal::Decimal;
use sqlx::Error as SqlxError;
use std::str::FromStr;
use tracing::{error, instrument};

use crate::dtos::menu::MenuItemResponse;
use crate::error::AppError;
use crate::models::menu_item::MenuItem;
use crate::state::AppState;

const CATEGORIES: &[&str] = &["food", "drink"];

fn map_unique_violation(err: SqlxError, message: &str) -> AppError {
    match err {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AppError::conflict(message)
        }
        other => other.into(),
    }
}

// GET /menu - List the catalog
#[instrument(skip(state))]
pub async fn list_menu(State(state): State<AppState>) -> Result<Json<Vec<MenuItemResponse>>, AppError> {
    match sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, description, image, category, created_at
         FROM menu_items ORDER BY id"
    )
        .fetch_all(&state.db_pool)
        .await {
        Ok(items) => {
            let response = items.into_iter().map(MenuItemResponse::from).collect();
            Ok(Json(response))
        }
        Err(e) => {
            error!(?e, "Failed to fetch menu");
            Err(e.into())
        }
    }
}

// POST /menu - Create a dish (multipart: name, price, description, category, image?)
#[instrument(skip(state, multipart))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MenuItemResponse>, AppError> {
    let form = collect_form(&mut multipart).await?;

    let name = form
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::validation("name is required"))?;
    let price = form
        .price
        .ok_or_else(|| AppError::validation("price is required"))?;
    if price < Decimal::ZERO {
        return Err(AppError::validation("price cannot be negative"));
    }
    let category = validate_category(
        form.category
            .as_deref()
            .ok_or_else(|| AppError::validation("category is required"))?,
    )?;

    let image = match form.image {
        Some((original_name, data)) => store_image(&name, &original_name, &data).await?,
        None => String::new(),
    };

    let item = sqlx::query_as::<_, MenuItem>(
        "INSERT INTO menu_items (name, price, description, image, category)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id, name, price, description, image, category, created_at"
    )
    .bind(name.trim())
    .bind(price)
    .bind(form.description.unwrap_or_default())
    .bind(&image)
    .bind(&category)
    .fetch_one(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "A dish with that name already exists"))?;

    Ok(Json(MenuItemResponse::from(item)))
}

// PUT /menu/{id} - Update a dish; absent fields keep their value
#[instrument(skip(state, multipart), fields(id))]
pub async fn update_menu_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MenuItemResponse>, AppError> {
    let form = collect_form(&mut multipart).await?;

    if let Some(price) = form.price {
        if price < Decimal::ZERO {
            return Err(AppError::validation("price cannot be negative"));
        }
    }
    let category = match form.category.as_deref() {
        Some(c) => Some(validate_category(c)?),
        None => None,
    };

    let current = sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price, description, image, category, created_at
         FROM menu_items WHERE id = $1"
    )
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found("Menu item not found"))?;

    let image = match form.image {
        Some((original_name, data)) => {
            let dish = form.name.as_deref().unwrap_or(&current.name);
            Some(store_image(dish, &original_name, &data).await?)
        }
        None => None,
    };

    let item = sqlx::query_as::<_, MenuItem>(
        "UPDATE menu_items SET
         name = COALESCE($1, name),
         price = COALESCE($2, price),
         description = COALESCE($3, description),
         image = COALESCE($4, image),
         category = COALESCE($5, category)
         WHERE id = $6
         RETURNING id, name, price, description, image, category, created_at"
    )
    .bind(form.name.map(|n| n.trim().to_string()))
    .bind(form.price)
    .bind(form.description)
    .bind(image)
    .bind(category)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await
    .map_err(|e| map_unique_violation(e, "A dish with that name already exists"))?
    .ok_or_else(|| AppError::not_found("Menu item not found"))?;

    Ok(Json(MenuItemResponse::from(item)))
}

// DELETE /menu/{id}
#[instrument(skip(state), fields(id))]
pub async fn delete_menu_item(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<()>, AppError> {
    let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Menu item not found"));
    }

    Ok(Json(()))
}

#[derive(Default)]
struct MenuItemForm {
    name: Option<String>,
    price: Option<Decimal>,
    description: Option<String>,
    category: Option<String>,
    image: Option<(String, Bytes)>,
}

async fn collect_form(multipart: &mut Multipart) -> Result<MenuItemForm, AppError> {
    let mut form = MenuItemForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => form.name = Some(field_text(field).await?),
            "price" => {
                let raw = field_text(field).await?;
                let price = Decimal::from_str(raw.trim())
                    .map_err(|_| AppError::validation("price must be a decimal number"))?;
                form.price = Some(price);
            }
            "description" => form.description = Some(field_text(field).await?),
            "category" => form.category = Some(field_text(field).await?),
            "image" => {
                let original_name = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read image upload: {e}")))?;
                if !data.is_empty() {
                    form.image = Some((original_name, data));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn field_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart field: {e}")))
}

fn validate_category(category: &str) -> Result<String, AppError> {
    let category = category.trim().to_lowercase();
    if CATEGORIES.contains(&category.as_str()) {
        Ok(category)
    } else {
        Err(AppError::validation("category must be 'food' or 'drink'"))
    }
}

/// Write an uploaded image under UPLOAD_DIR; returns the stored filename.
async fn store_image(dish: &str, original_name: &str, data: &[u8]) -> Result<String, AppError> {
    let extension = std::path::Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin")
        .to_lowercase();
    let file_name = upload_file_name(dish, &extension);

    let dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::internal(format!("Failed to create upload directory: {e}")))?;
    let path = std::path::Path::new(&dir).join(&file_name);
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::internal(format!("Failed to store image: {e}")))?;

    Ok(file_name)
}

/// `<dish-slug>-<timestamp>-<random>.<ext>` keeps names collision-free and
/// readable in the uploads directory.
fn upload_file_name(dish: &str, extension: &str) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!(
        "{}-{}-{}.{}",
        slug(dish),
        Utc::now().format("%Y%m%d%H%M%S"),
        suffix.to_lowercase(),
        extension
    )
}

fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.push(c);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    if out.is_empty() {
        out.push_str("item");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_dashes() {
        assert_eq!(slug("Pollo a la Brasa"), "pollo-a-la-brasa");
    }

    #[test]
    fn slug_collapses_punctuation_runs() {
        assert_eq!(slug("Aji de Gallina (1/2)"), "aji-de-gallina-1-2");
        assert_eq!(slug("  Causa   Limeña  "), "causa-lime-a");
    }

    #[test]
    fn slug_never_empty() {
        assert_eq!(slug("¡¡¡"), "item");
        assert_eq!(slug(""), "item");
    }

    #[test]
    fn category_validation() {
        assert_eq!(validate_category(" Food ").unwrap(), "food");
        assert_eq!(validate_category("drink").unwrap(), "drink");
        assert!(validate_category("dessert").is_err());
    }
}
