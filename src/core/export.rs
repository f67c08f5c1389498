use crate::domain::model::ProjectedMenuItem;
use crate::domain::ports::Storage;
use crate::utils::error::{EngineError, Result};

pub const CSV_SNAPSHOT_FILE: &str = "menu.csv";
pub const JSON_SNAPSHOT_FILE: &str = "menu.json";

pub fn menu_to_csv(menu: &[ProjectedMenuItem]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "id",
        "name",
        "category",
        "recommendationScore",
        "recommended",
        "dynamicPrice",
        "originalPrice",
    ])?;

    for entry in menu {
        let score = entry.recommendation_score.to_string();
        let recommended = entry.is_recommended().to_string();
        let dynamic_price = format!("{:.2}", entry.dynamic_price);
        let original_price = format!("{:.2}", entry.original_price);
        writer.write_record([
            entry.item.id.as_str(),
            entry.item.name.as_str(),
            entry.item.category.as_str(),
            score.as_str(),
            recommended.as_str(),
            dynamic_price.as_str(),
            original_price.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ProcessingError {
        message: format!("CSV encoding error: {}", e),
    })
}

pub fn menu_to_json(menu: &[ProjectedMenuItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(menu)?)
}

/// 把目前的投影快照寫到輸出儲存；回傳實際寫出的檔名
pub async fn write_menu_snapshot<S: Storage>(
    storage: &S,
    menu: &[ProjectedMenuItem],
    formats: &[String],
) -> Result<Vec<String>> {
    let mut written = Vec::new();

    for format in formats {
        match format.as_str() {
            "csv" => {
                storage
                    .write_file(CSV_SNAPSHOT_FILE, menu_to_csv(menu)?.as_bytes())
                    .await?;
                written.push(CSV_SNAPSHOT_FILE.to_string());
            }
            "json" => {
                storage
                    .write_file(JSON_SNAPSHOT_FILE, menu_to_json(menu)?.as_bytes())
                    .await?;
                written.push(JSON_SNAPSHOT_FILE.to_string());
            }
            other => {
                tracing::warn!("🔶 Unsupported snapshot format: {}", other);
            }
        }
    }

    tracing::debug!("💾 Snapshot written: {}", written.join(", "));
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MenuItem, MenuItemStatus};

    fn projected(id: &str, score: i32, dynamic_price: f64) -> ProjectedMenuItem {
        ProjectedMenuItem {
            item: MenuItem {
                id: id.to_string(),
                name: format!("Dish {}", id),
                description: String::new(),
                price: 10.0,
                category: "Main Course".to_string(),
                is_spicy: false,
                dietary_restrictions: vec![],
                status: MenuItemStatus::Active,
            },
            recommendation_score: score,
            dynamic_price,
            original_price: 10.0,
        }
    }

    #[test]
    fn test_csv_snapshot_structure() {
        let menu = vec![projected("m1", 5, 11.34), projected("m2", 0, 9.23)];
        let csv = menu_to_csv(&menu).unwrap();
        let lines: Vec<&str> = csv.trim_end().split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "id,name,category,recommendationScore,recommended,dynamicPrice,originalPrice"
        );
        assert_eq!(lines[1], "m1,Dish m1,Main Course,5,true,11.34,10.00");
        assert_eq!(lines[2], "m2,Dish m2,Main Course,0,false,9.23,10.00");
    }

    #[test]
    fn test_json_snapshot_round_trips_fields() {
        let menu = vec![projected("m1", 5, 11.34)];
        let json = menu_to_json(&menu).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], "m1");
        assert_eq!(value[0]["recommendationScore"], 5);
        assert_eq!(value[0]["dynamicPrice"], 11.34);
        assert_eq!(value[0]["originalPrice"], 10.0);
    }

    #[test]
    fn test_empty_menu_still_renders_header() {
        let csv = menu_to_csv(&[]).unwrap();
        assert!(csv.starts_with("id,name,category"));
    }
}
