use crate::domain::model::{MenuItem, Restaurant};
use crate::utils::error::{EngineError, Result};
use chrono::NaiveTime;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(EngineError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    let valid_formats = ["csv", "json"];
    for format in formats {
        if !valid_formats.contains(&format.as_str()) {
            return Err(EngineError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }
    }
    Ok(())
}

/// 解析 "HH:MM" 格式的預覽時間
pub fn parse_preview_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| EngineError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected HH:MM, got: {}", e),
    })
}

pub fn validate_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::invalid_input(
            field_name,
            value,
            "Price must be a positive number",
        ));
    }
    Ok(())
}

impl Validate for MenuItem {
    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "menu_item.id",
                &self.id,
                "Menu item id cannot be empty",
            ));
        }
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "menu_item.name",
                &self.name,
                "Menu item name cannot be empty",
            ));
        }
        if self.category.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "menu_item.category",
                &self.category,
                "Menu item category cannot be empty",
            ));
        }
        validate_price("menu_item.price", self.price)
    }
}

impl Validate for Restaurant {
    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::invalid_input(
                "restaurant.id",
                &self.id,
                "Restaurant id cannot be empty",
            ));
        }
        for item in &self.menu_items {
            item.validate()?;
        }
        Ok(())
    }
}
