use crate::core::cart::CartLedger;
use crate::core::projection::project;
use crate::domain::model::{ProjectedMenuItem, Restaurant, UserPreferences};
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::Validate;
use chrono::Timelike;

/// 一位用戶瀏覽一家餐廳的會話：持有目前的投影與購物車。
/// 每個會話獨立擁有自己的狀態，跨會話不共享可變資料。
#[derive(Debug, Clone)]
pub struct DiningSession {
    restaurant: Restaurant,
    preferences: UserPreferences,
    projection: Vec<ProjectedMenuItem>,
    cart: CartLedger,
}

impl DiningSession {
    /// 開啟會話：先驗證餐廳資料（fail fast），再計算初始投影
    pub fn open(
        restaurant: Restaurant,
        preferences: UserPreferences,
        now: &impl Timelike,
    ) -> Result<Self> {
        restaurant.validate()?;
        let projection = project(&restaurant.menu_items, &preferences, now)?;
        Ok(Self {
            restaurant,
            preferences,
            projection,
            cart: CartLedger::new(),
        })
    }

    /// 定時 tick 或菜單重新載入時呼叫；前一份投影直接被汰換
    pub fn refresh(&mut self, now: &impl Timelike) -> Result<()> {
        self.projection = project(&self.restaurant.menu_items, &self.preferences, now)?;
        Ok(())
    }

    /// 偏好改變時整組替換並重新投影
    pub fn update_preferences(
        &mut self,
        preferences: UserPreferences,
        now: &impl Timelike,
    ) -> Result<()> {
        self.preferences = preferences;
        self.refresh(now)
    }

    pub fn menu(&self) -> &[ProjectedMenuItem] {
        &self.projection
    }

    pub fn into_menu(self) -> Vec<ProjectedMenuItem> {
        self.projection
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// 從目前投影快照一份到購物車；只有看得到的項目才能加入
    pub fn add_to_cart(&mut self, item_id: &str) -> Result<()> {
        let projected = self
            .projection
            .iter()
            .find(|p| p.id() == item_id)
            .cloned()
            .ok_or_else(|| EngineError::not_found("Menu item", item_id))?;
        self.cart.add_item(projected);
        Ok(())
    }

    pub fn remove_from_cart(&mut self, item_id: &str) {
        self.cart.remove_item(item_id);
    }

    pub fn change_quantity(&mut self, item_id: &str, delta: i32) {
        self.cart.update_quantity(item_id, delta);
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn cart_total(&self) -> f64 {
        self.cart.total()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }
}
