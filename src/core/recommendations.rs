use crate::domain::model::{Restaurant, UserPreferences};

/// 依最愛菜系過濾餐廳，再依平均評分排序（穩定排序，未評分者墊底）。
/// 沒有設定最愛菜系時不做過濾。
pub fn recommend_restaurants(
    restaurants: &[Restaurant],
    prefs: &UserPreferences,
) -> Vec<Restaurant> {
    let mut matched: Vec<Restaurant> = restaurants
        .iter()
        .filter(|r| {
            prefs.favorite_categories.is_empty()
                || prefs
                    .favorite_categories
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(&r.cuisine))
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let a_rating = a.average_rating().unwrap_or(f64::NEG_INFINITY);
        let b_rating = b.average_rating().unwrap_or(f64::NEG_INFINITY);
        b_rating
            .partial_cmp(&a_rating)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    matched
}
