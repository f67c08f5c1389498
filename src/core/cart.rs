use crate::core::pricing::round_to_cents;
use crate::domain::model::{CartLine, ProjectedMenuItem};

/// 單一用餐會話的購物車。行序 = 首次加入順序；同一項目最多一行；
/// 數量歸零的行會被移除，不會以 0 保留。
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入一份。已存在同 id 的行時數量 +1，且以傳入的快照覆蓋
    /// 舊快照（價格可能已隨時間變動，last write wins）。
    pub fn add_item(&mut self, item: ProjectedMenuItem) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.item.id() == item.id())
        {
            Some(line) => {
                line.quantity += 1;
                line.item = item;
            }
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// 整行刪除，不論數量
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item.id() != item_id);
    }

    /// 數量加上 delta（可為負），最低為 0；歸零即移除該行。
    /// 不存在的 id 視為 no-op。
    pub fn update_quantity(&mut self, item_id: &str, delta: i32) {
        if let Some(index) = self.lines.iter().position(|l| l.item.id() == item_id) {
            let updated = (i64::from(self.lines[index].quantity) + i64::from(delta)).max(0);
            if updated == 0 {
                self.lines.remove(index);
            } else {
                self.lines[index].quantity = updated as u32;
            }
        }
    }

    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.item.id() == item_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// 各行以儲存的（已捨入）動態價格 × 數量加總，最後再捨入一次
    /// 以消除浮點累加誤差。
    pub fn total(&self) -> f64 {
        let sum: f64 = self
            .lines
            .iter()
            .map(|l| l.item.dynamic_price * f64::from(l.quantity))
            .sum();
        round_to_cents(sum)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
