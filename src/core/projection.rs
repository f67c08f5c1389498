use crate::core::pricing::compute_dynamic_price;
use crate::core::scoring::recommendation_score;
use crate::domain::model::{MenuItem, ProjectedMenuItem, SpicePreference, UserPreferences};
use crate::utils::error::Result;
use chrono::Timelike;

/// 將目錄投影成個人化菜單：過濾 → 評分 → 定價 → 排序。
/// 輸入不會被修改；每次呼叫都產生全新的清單，空結果是正常狀態。
pub fn project(
    catalog: &[MenuItem],
    prefs: &UserPreferences,
    now: &impl Timelike,
) -> Result<Vec<ProjectedMenuItem>> {
    let mut projected = Vec::new();

    for item in catalog {
        if !item.is_active() {
            continue;
        }

        // 有飲食限制時，完全不符合的項目在評分前就被過濾掉
        if prefs.has_dietary_restrictions()
            && !item.matches_any_restriction(&prefs.dietary_restrictions)
        {
            continue;
        }

        // mild 是排除條件（不吃辣）；hot 只透過評分影響排序
        if prefs.spice_preference == SpicePreference::Mild && item.is_spicy {
            continue;
        }

        let dynamic_price = compute_dynamic_price(item.price, &item.category, now)?;
        projected.push(ProjectedMenuItem {
            recommendation_score: recommendation_score(item, prefs),
            dynamic_price,
            original_price: item.price,
            item: item.clone(),
        });
    }

    // 穩定排序：同分項目保留目錄順序
    projected.sort_by(|a, b| b.recommendation_score.cmp(&a.recommendation_score));

    Ok(projected)
}
