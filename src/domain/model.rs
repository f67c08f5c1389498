use serde::{Deserialize, Serialize};
use std::fmt;

/// 展示層的推薦門檻：分數高於此值的項目標記為「推薦」
pub const RECOMMENDED_SCORE_THRESHOLD: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    #[serde(alias = "vegetarian")]
    Vegetarian,
    #[serde(alias = "vegan")]
    Vegan,
    #[serde(rename = "Gluten-Free", alias = "gluten-free", alias = "gluten_free")]
    GlutenFree,
    #[serde(rename = "Dairy-Free", alias = "dairy-free", alias = "dairy_free")]
    DairyFree,
    #[serde(rename = "Nut-Free", alias = "nut-free", alias = "nut_free")]
    NutFree,
    #[serde(alias = "halal")]
    Halal,
    #[serde(alias = "kosher")]
    Kosher,
}

impl fmt::Display for DietaryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DietaryTag::Vegetarian => "Vegetarian",
            DietaryTag::Vegan => "Vegan",
            DietaryTag::GlutenFree => "Gluten-Free",
            DietaryTag::DairyFree => "Dairy-Free",
            DietaryTag::NutFree => "Nut-Free",
            DietaryTag::Halal => "Halal",
            DietaryTag::Kosher => "Kosher",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpicePreference {
    Mild,
    Hot,
    // 問卷的 "medium" / "extra-hot" 折疊為無特殊處理
    #[default]
    #[serde(alias = "medium", alias = "extra-hot", alias = "extra_hot")]
    NoPreference,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub is_spicy: bool,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryTag>,
    #[serde(default)]
    pub status: MenuItemStatus,
}

impl MenuItem {
    pub fn is_active(&self) -> bool {
        self.status == MenuItemStatus::Active
    }

    /// 是否至少符合一項指定的飲食限制
    pub fn matches_any_restriction(&self, restrictions: &[DietaryTag]) -> bool {
        restrictions
            .iter()
            .any(|tag| self.dietary_restrictions.contains(tag))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryTag>,
    #[serde(default)]
    pub spice_preference: SpicePreference,
    #[serde(default)]
    pub favorite_categories: Vec<String>,
}

impl UserPreferences {
    pub fn has_dietary_restrictions(&self) -> bool {
        !self.dietary_restrictions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub business_name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub business_address: String,
    #[serde(default)]
    pub business_phone: String,
    #[serde(default)]
    pub ratings: Vec<f64>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

impl Restaurant {
    /// 平均評分；尚無評分時回傳 None（前端顯示 "New"）
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        Some(self.ratings.iter().sum::<f64>() / self.ratings.len() as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedMenuItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub recommendation_score: i32,
    pub dynamic_price: f64,
    pub original_price: f64,
}

impl ProjectedMenuItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }

    pub fn is_recommended(&self) -> bool {
        self.recommendation_score > RECOMMENDED_SCORE_THRESHOLD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item: ProjectedMenuItem,
    pub quantity: u32,
}
