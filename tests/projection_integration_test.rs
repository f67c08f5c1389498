use chrono::NaiveTime;
use dinewise_engine::{
    FileMenuCatalog, FilePreferenceStore, FixedClock, LocalStorage, MenuEngine,
};
use std::fs;
use tempfile::TempDir;

fn write_fixtures(dir: &TempDir) -> (String, String) {
    let catalog_path = dir.path().join("restaurants.json");
    fs::write(
        &catalog_path,
        r#"[
            {
                "id": "r1",
                "businessName": "Green Garden",
                "cuisine": "thai",
                "ratings": [4.5, 5.0],
                "menuItems": [
                    {
                        "id": "m1",
                        "name": "Chili Tofu",
                        "price": 10.0,
                        "category": "Main Course",
                        "isSpicy": true,
                        "dietaryRestrictions": ["Vegan"],
                        "status": "active"
                    },
                    {
                        "id": "m2",
                        "name": "Paneer Wrap",
                        "price": 8.0,
                        "category": "Main Course",
                        "isSpicy": false,
                        "dietaryRestrictions": ["Vegetarian"],
                        "status": "active"
                    },
                    {
                        "id": "m3",
                        "name": "Vegan Brownie",
                        "price": 6.0,
                        "category": "Desserts",
                        "isSpicy": false,
                        "dietaryRestrictions": ["Vegan"],
                        "status": "active"
                    },
                    {
                        "id": "m4",
                        "name": "Secret Special",
                        "price": 12.0,
                        "category": "Specials",
                        "isSpicy": false,
                        "dietaryRestrictions": ["Vegan"],
                        "status": "inactive"
                    }
                ]
            }
        ]"#,
    )
    .unwrap();

    let preferences_path = dir.path().join("preferences.json");
    fs::write(
        &preferences_path,
        r#"{
            "u1": {
                "dietaryRestrictions": ["Vegan"],
                "spicePreference": "hot",
                "favoriteCategories": ["Main Course"]
            },
            "u2": {
                "dietaryRestrictions": ["Halal"],
                "spicePreference": "no_preference",
                "favoriteCategories": []
            }
        }"#,
    )
    .unwrap();

    (
        catalog_path.to_str().unwrap().to_string(),
        preferences_path.to_str().unwrap().to_string(),
    )
}

fn engine_at_one_pm(
    catalog_path: String,
    preferences_path: String,
) -> MenuEngine<FileMenuCatalog, FilePreferenceStore, FixedClock> {
    MenuEngine::new(
        FileMenuCatalog::new(catalog_path),
        FilePreferenceStore::new(preferences_path),
        FixedClock::at_time(NaiveTime::from_hms_opt(13, 0, 0).unwrap()),
    )
}

#[tokio::test]
async fn test_end_to_end_projection_with_file_stores() {
    let dir = TempDir::new().unwrap();
    let (catalog_path, preferences_path) = write_fixtures(&dir);
    let engine = engine_at_one_pm(catalog_path, preferences_path);

    let menu = engine.project_menu("r1", "u1").await.unwrap();

    // m2 飲食限制不符、m4 已停售；m1 分數 7（飲食 +3、辣 +2、類別 +2）領先 m3 的 3
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].id(), "m1");
    assert_eq!(menu[1].id(), "m3");
    assert_eq!(menu[0].recommendation_score, 7);
    assert_eq!(menu[1].recommendation_score, 3);

    // 13:00 尖峰：乘數 ≈ 1.1336
    assert_eq!(menu[0].dynamic_price, 11.34);
    assert_eq!(menu[0].original_price, 10.0);
    assert_eq!(menu[1].dynamic_price, 6.8);

    assert!(menu[0].is_recommended());
    assert!(!menu[1].is_recommended());
}

#[tokio::test]
async fn test_projection_snapshot_export() {
    let dir = TempDir::new().unwrap();
    let (catalog_path, preferences_path) = write_fixtures(&dir);
    let engine = engine_at_one_pm(catalog_path, preferences_path);

    let output_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(output_dir.path().to_str().unwrap().to_string());

    let menu = engine.project_menu("r1", "u1").await.unwrap();
    let formats = vec!["csv".to_string(), "json".to_string()];
    let written = engine
        .export_snapshot(&storage, &menu, &formats)
        .await
        .unwrap();

    assert_eq!(written, vec!["menu.csv".to_string(), "menu.json".to_string()]);

    let csv_content = fs::read_to_string(output_dir.path().join("menu.csv")).unwrap();
    assert!(csv_content.starts_with(
        "id,name,category,recommendationScore,recommended,dynamicPrice,originalPrice"
    ));
    assert!(csv_content.contains("m1,Chili Tofu,Main Course,7,true,11.34,10.00"));

    let json_content = fs::read_to_string(output_dir.path().join("menu.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json_content).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["id"], "m1");
    assert_eq!(value[0]["dynamicPrice"], 11.34);
}

#[tokio::test]
async fn test_no_matching_items_is_an_empty_menu_not_an_error() {
    let dir = TempDir::new().unwrap();
    let (catalog_path, preferences_path) = write_fixtures(&dir);
    let engine = engine_at_one_pm(catalog_path, preferences_path);

    // u2 只吃 Halal，整份菜單都不符合
    let menu = engine.project_menu("r1", "u2").await.unwrap();
    assert!(menu.is_empty());
}

#[tokio::test]
async fn test_unknown_user_preferences_fail_fast() {
    let dir = TempDir::new().unwrap();
    let (catalog_path, preferences_path) = write_fixtures(&dir);
    let engine = engine_at_one_pm(catalog_path, preferences_path);

    let result = engine.project_menu("r1", "ghost").await;
    assert!(result.is_err());
}
