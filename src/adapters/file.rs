use crate::domain::model::{Restaurant, UserPreferences};
use crate::domain::ports::{MenuCatalog, PreferenceStore, Storage};
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// JSON 檔案版的餐廳目錄：檔案內容是 Restaurant 陣列
/// （對應原系統 Firestore 的 restaurants collection）
#[derive(Debug, Clone)]
pub struct FileMenuCatalog {
    path: String,
}

impl FileMenuCatalog {
    pub fn new(path: String) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Vec<Restaurant>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl MenuCatalog for FileMenuCatalog {
    async fn fetch_restaurant(&self, restaurant_id: &str) -> Result<Restaurant> {
        self.load()?
            .into_iter()
            .find(|r| r.id == restaurant_id)
            .ok_or_else(|| EngineError::not_found("Restaurant", restaurant_id))
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        self.load()
    }
}

/// JSON 檔案版的偏好儲存：user id → UserPreferences 的映射
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: String,
}

impl FilePreferenceStore {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn fetch_preferences(&self, user_id: &str) -> Result<UserPreferences> {
        let content = fs::read_to_string(&self.path)?;
        let mut all: HashMap<String, UserPreferences> = serde_json::from_str(&content)?;
        all.remove(user_id)
            .ok_or_else(|| EngineError::not_found("User preferences", user_id))
    }
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
