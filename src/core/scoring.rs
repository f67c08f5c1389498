use crate::domain::model::{MenuItem, SpicePreference, UserPreferences};

const DIETARY_MATCH_BONUS: i32 = 3;
const DIETARY_MISMATCH_SCORE: i32 = -1;
const SPICE_ALIGNMENT_BONUS: i32 = 2;
const CATEGORY_AFFINITY_BONUS: i32 = 2;

/// 偏好契合度評分。有飲食限制但完全不符合的項目會立即回傳 -1
/// 作為排除訊號；其餘條款相加，沒有上限。
pub fn recommendation_score(item: &MenuItem, prefs: &UserPreferences) -> i32 {
    let mut score = 0;

    if prefs.has_dietary_restrictions() {
        if item.matches_any_restriction(&prefs.dietary_restrictions) {
            score += DIETARY_MATCH_BONUS;
        } else {
            return DIETARY_MISMATCH_SCORE;
        }
    }

    match prefs.spice_preference {
        SpicePreference::Hot if item.is_spicy => score += SPICE_ALIGNMENT_BONUS,
        SpicePreference::Mild if !item.is_spicy => score += SPICE_ALIGNMENT_BONUS,
        _ => {}
    }

    if prefs.favorite_categories.contains(&item.category) {
        score += CATEGORY_AFFINITY_BONUS;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DietaryTag, MenuItemStatus};

    fn item(category: &str, is_spicy: bool, tags: Vec<DietaryTag>) -> MenuItem {
        MenuItem {
            id: "m1".to_string(),
            name: "Test Dish".to_string(),
            description: String::new(),
            price: 10.0,
            category: category.to_string(),
            is_spicy,
            dietary_restrictions: tags,
            status: MenuItemStatus::Active,
        }
    }

    fn prefs(
        restrictions: Vec<DietaryTag>,
        spice: SpicePreference,
        favorites: Vec<&str>,
    ) -> UserPreferences {
        UserPreferences {
            dietary_restrictions: restrictions,
            spice_preference: spice,
            favorite_categories: favorites.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_disjoint_restrictions_return_exclusion_signal() {
        let item = item("Main Course", false, vec![DietaryTag::Halal]);
        let prefs = prefs(vec![DietaryTag::Vegan], SpicePreference::NoPreference, vec![]);
        assert_eq!(recommendation_score(&item, &prefs), -1);
    }

    #[test]
    fn test_exclusion_short_circuits_other_bonuses() {
        // 即使類別與辣度都契合，飲食限制不符就是 -1
        let item = item("Main Course", true, vec![]);
        let prefs = prefs(
            vec![DietaryTag::Vegan],
            SpicePreference::Hot,
            vec!["Main Course"],
        );
        assert_eq!(recommendation_score(&item, &prefs), -1);
    }

    #[test]
    fn test_dietary_match_bonus() {
        let item = item("Main Course", false, vec![DietaryTag::Vegan, DietaryTag::GlutenFree]);
        let prefs = prefs(vec![DietaryTag::Vegan], SpicePreference::NoPreference, vec![]);
        assert_eq!(recommendation_score(&item, &prefs), 3);
    }

    #[test]
    fn test_no_restrictions_means_no_dietary_term() {
        let item = item("Main Course", false, vec![]);
        let prefs = prefs(vec![], SpicePreference::NoPreference, vec![]);
        assert_eq!(recommendation_score(&item, &prefs), 0);
    }

    #[test]
    fn test_spice_alignment() {
        let spicy = item("Main Course", true, vec![]);
        let not_spicy = item("Main Course", false, vec![]);

        let hot = prefs(vec![], SpicePreference::Hot, vec![]);
        assert_eq!(recommendation_score(&spicy, &hot), 2);
        assert_eq!(recommendation_score(&not_spicy, &hot), 0);

        let mild = prefs(vec![], SpicePreference::Mild, vec![]);
        assert_eq!(recommendation_score(&spicy, &mild), 0);
        assert_eq!(recommendation_score(&not_spicy, &mild), 2);

        let neutral = prefs(vec![], SpicePreference::NoPreference, vec![]);
        assert_eq!(recommendation_score(&spicy, &neutral), 0);
    }

    #[test]
    fn test_category_affinity() {
        let item = item("Desserts", false, vec![]);
        let prefs = prefs(vec![], SpicePreference::NoPreference, vec!["Desserts"]);
        assert_eq!(recommendation_score(&item, &prefs), 2);
    }

    #[test]
    fn test_all_bonuses_accumulate() {
        let item = item("Main Course", true, vec![DietaryTag::Halal]);
        let prefs = prefs(
            vec![DietaryTag::Halal],
            SpicePreference::Hot,
            vec!["Main Course"],
        );
        assert_eq!(recommendation_score(&item, &prefs), 7);
    }
}
