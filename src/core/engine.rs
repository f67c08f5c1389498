use crate::core::export::write_menu_snapshot;
use crate::core::recommendations::recommend_restaurants;
use crate::core::session::DiningSession;
use crate::domain::model::{ProjectedMenuItem, Restaurant};
use crate::domain::ports::{Clock, MenuCatalog, PreferenceStore, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// 引擎的非同步外殼：透過 port 取得目錄、偏好與時間，
/// 核心計算本身保持同步純函數。
pub struct MenuEngine<C: MenuCatalog, P: PreferenceStore, K: Clock> {
    catalog: C,
    preferences: P,
    clock: K,
    monitor: SystemMonitor,
}

impl<C: MenuCatalog, P: PreferenceStore, K: Clock> MenuEngine<C, P, K> {
    pub fn new(catalog: C, preferences: P, clock: K) -> Self {
        Self::new_with_monitoring(catalog, preferences, clock, false)
    }

    pub fn new_with_monitoring(catalog: C, preferences: P, clock: K, monitor_enabled: bool) -> Self {
        Self {
            catalog,
            preferences,
            clock,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn open_session(&self, restaurant_id: &str, user_id: &str) -> Result<DiningSession> {
        tracing::info!(
            "📥 Loading restaurant '{}' and preferences for user '{}'",
            restaurant_id,
            user_id
        );
        let restaurant = self.catalog.fetch_restaurant(restaurant_id).await?;
        let preferences = self.preferences.fetch_preferences(user_id).await?;
        self.monitor.log_stats("Fetch");

        let now = self.clock.now();
        let session = DiningSession::open(restaurant, preferences, &now)?;
        tracing::info!(
            "🍽️ Projected {} of {} menu items for '{}'",
            session.menu().len(),
            session.restaurant().menu_items.len(),
            session.restaurant().business_name
        );
        self.monitor.log_stats("Project");

        Ok(session)
    }

    /// 單次投影：取資料、驗證、投影，不保留會話狀態
    pub async fn project_menu(
        &self,
        restaurant_id: &str,
        user_id: &str,
    ) -> Result<Vec<ProjectedMenuItem>> {
        let session = self.open_session(restaurant_id, user_id).await?;
        Ok(session.into_menu())
    }

    pub async fn recommend_restaurants(&self, user_id: &str) -> Result<Vec<Restaurant>> {
        let preferences = self.preferences.fetch_preferences(user_id).await?;
        let restaurants = self.catalog.list_restaurants().await?;
        let total = restaurants.len();

        let ranked = recommend_restaurants(&restaurants, &preferences);
        tracing::info!("⭐ {} of {} restaurants match user '{}'", ranked.len(), total, user_id);

        Ok(ranked)
    }

    pub async fn export_snapshot<S: Storage>(
        &self,
        storage: &S,
        menu: &[ProjectedMenuItem],
        formats: &[String],
    ) -> Result<Vec<String>> {
        let written = write_menu_snapshot(storage, menu, formats).await?;
        self.monitor.log_stats("Export");
        Ok(written)
    }
}
