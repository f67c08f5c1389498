use crate::domain::model::{Restaurant, UserPreferences};
use crate::domain::ports::{MenuCatalog, PreferenceStore};
use crate::utils::error::{EngineError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// 餐廳目錄服務的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct HttpMenuCatalog {
    client: Client,
    base_url: String,
}

impl HttpMenuCatalog {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MenuCatalog for HttpMenuCatalog {
    async fn fetch_restaurant(&self, restaurant_id: &str) -> Result<Restaurant> {
        let url = format!("{}/restaurants/{}", self.base_url, restaurant_id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::not_found("Restaurant", restaurant_id));
        }
        if !response.status().is_success() {
            return Err(EngineError::ProcessingError {
                message: format!("Catalog request failed with status: {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let url = format!("{}/restaurants", self.base_url);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(EngineError::ProcessingError {
                message: format!("Catalog request failed with status: {}", response.status()),
            });
        }

        Ok(response.json().await?)
    }
}

/// 偏好服務的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct HttpPreferenceStore {
    client: Client,
    base_url: String,
}

impl HttpPreferenceStore {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PreferenceStore for HttpPreferenceStore {
    async fn fetch_preferences(&self, user_id: &str) -> Result<UserPreferences> {
        let url = format!("{}/users/{}/preferences", self.base_url, user_id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(EngineError::not_found("User preferences", user_id));
        }
        if !response.status().is_success() {
            return Err(EngineError::ProcessingError {
                message: format!(
                    "Preference request failed with status: {}",
                    response.status()
                ),
            });
        }

        Ok(response.json().await?)
    }
}
