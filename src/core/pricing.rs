use crate::utils::error::{EngineError, Result};
use chrono::Timelike;

/// 動態價格乘數的下限（永不低於基礎價格的八折）
pub const MIN_PRICE_MULTIPLIER: f64 = 0.8;

const PEAK_SURCHARGE: f64 = 0.10;
const OFF_PEAK_DISCOUNT: f64 = 0.15;
const INTERVAL_FLUCTUATION_WEIGHT: f64 = 0.05;
const DEMAND_FLUCTUATION_WEIGHT: f64 = 0.03;
const SPECIALS_MARKUP: f64 = 0.05;
const SPECIALS_CATEGORY: &str = "Specials";

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 計算某個時間點的價格乘數。所有條款都是相加的，彼此不互斥；
/// sin 項隨時間連續變化，看似隨機但完全可重現。
pub fn price_multiplier(category: &str, at: &impl Timelike) -> f64 {
    let hour = at.hour();
    let minute = at.minute();
    let mut multiplier = 1.0;

    // 尖峰時段加價（午餐 12-14、晚餐 18-20，含邊界）
    if (12..=14).contains(&hour) || (18..=20).contains(&hour) {
        multiplier += PEAK_SURCHARGE;
    }

    // 離峰折扣（21 點以後與清晨 5 點以前）
    if hour >= 21 || hour <= 5 {
        multiplier -= OFF_PEAK_DISCOUNT;
    }

    // 半小時區間的細粒度波動
    let interval = (minute / 30) as f64;
    multiplier += (interval + f64::from(hour)).sin() * INTERVAL_FLUCTUATION_WEIGHT;

    // 需求波動：以小時內的進度連續變化
    multiplier += (f64::from(hour) + f64::from(minute) / 60.0).sin() * DEMAND_FLUCTUATION_WEIGHT;

    if category == SPECIALS_CATEGORY {
        multiplier += SPECIALS_MARKUP;
    }

    multiplier.max(MIN_PRICE_MULTIPLIER)
}

pub fn compute_dynamic_price(base_price: f64, category: &str, at: &impl Timelike) -> Result<f64> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(EngineError::invalid_input(
            "base_price",
            base_price,
            "Base price must be positive",
        ));
    }

    Ok(round_to_cents(base_price * price_multiplier(category, at)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_peak_hour_example() {
        // 13:00, interval 0: 1 + 0.10 + sin(13)*0.05 + sin(13)*0.03
        let expected = 1.0 + 0.10 + 13.0_f64.sin() * 0.05 + 13.0_f64.sin() * 0.03;
        let multiplier = price_multiplier("Main Course", &at(13, 0));
        assert!((multiplier - expected).abs() < 1e-12);

        let price = compute_dynamic_price(10.0, "Main Course", &at(13, 0)).unwrap();
        assert_eq!(price, 11.34);
    }

    #[test]
    fn test_off_peak_example() {
        // 02:00: 1 - 0.15 + sin(2)*0.05 + sin(2)*0.03 ≈ 0.9227
        let multiplier = price_multiplier("Main Course", &at(2, 0));
        assert!((multiplier - 0.9227437941460546).abs() < 1e-9);

        let price = compute_dynamic_price(10.0, "Main Course", &at(2, 0)).unwrap();
        assert_eq!(price, 9.23);
    }

    #[test]
    fn test_multiplier_clamps_at_minimum() {
        // 04:00: sin(4) 為負，原始乘數 ≈ 0.789，被夾到 0.8
        let raw = 1.0 - 0.15 + 4.0_f64.sin() * 0.05 + 4.0_f64.sin() * 0.03;
        assert!(raw < MIN_PRICE_MULTIPLIER);

        let multiplier = price_multiplier("Main Course", &at(4, 0));
        assert_eq!(multiplier, MIN_PRICE_MULTIPLIER);

        let price = compute_dynamic_price(10.0, "Main Course", &at(4, 0)).unwrap();
        assert_eq!(price, 8.0);
    }

    #[test]
    fn test_clamp_invariant_over_all_hours() {
        for hour in 0..24 {
            for minute in [0, 29, 30, 59] {
                let price = compute_dynamic_price(10.0, "Specials", &at(hour, minute)).unwrap();
                assert!(
                    price >= 10.0 * MIN_PRICE_MULTIPLIER - 1e-9,
                    "price {} below clamp at {:02}:{:02}",
                    price,
                    hour,
                    minute
                );
            }
        }
    }

    #[test]
    fn test_specials_markup() {
        let plain = price_multiplier("Main Course", &at(13, 0));
        let specials = price_multiplier("Specials", &at(13, 0));
        assert!((specials - plain - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_half_hour_interval_shifts_fluctuation() {
        // interval 從 0 變 1，sin(13) 與 sin(14) 權重不同
        let early = compute_dynamic_price(10.0, "Main Course", &at(13, 29)).unwrap();
        let late = compute_dynamic_price(10.0, "Main Course", &at(13, 31)).unwrap();
        assert_ne!(early, late);
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        let first = compute_dynamic_price(19.99, "Desserts", &at(18, 45)).unwrap();
        let second = compute_dynamic_price(19.99, "Desserts", &at(18, 45)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_positive_base_price() {
        assert!(compute_dynamic_price(0.0, "Main Course", &at(13, 0)).is_err());
        assert!(compute_dynamic_price(-5.0, "Main Course", &at(13, 0)).is_err());
        assert!(compute_dynamic_price(f64::NAN, "Main Course", &at(13, 0)).is_err());
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(11.336), 11.34);
        assert_eq!(round_to_cents(4.996), 5.0);
        assert_eq!(round_to_cents(9.2274), 9.23);
        assert_eq!(round_to_cents(8.0), 8.0);
    }
}
