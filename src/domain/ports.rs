use crate::domain::model::{Restaurant, UserPreferences};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

impl Clock for Box<dyn Clock> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn fetch_restaurant(&self, restaurant_id: &str) -> Result<Restaurant>;
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>>;
}

#[async_trait]
impl MenuCatalog for Box<dyn MenuCatalog> {
    async fn fetch_restaurant(&self, restaurant_id: &str) -> Result<Restaurant> {
        (**self).fetch_restaurant(restaurant_id).await
    }

    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        (**self).list_restaurants().await
    }
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    async fn fetch_preferences(&self, user_id: &str) -> Result<UserPreferences>;
}

#[async_trait]
impl PreferenceStore for Box<dyn PreferenceStore> {
    async fn fetch_preferences(&self, user_id: &str) -> Result<UserPreferences> {
        (**self).fetch_preferences(user_id).await
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
