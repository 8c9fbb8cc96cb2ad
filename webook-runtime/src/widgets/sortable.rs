//! Reorder-then-check exercise.
//!
//! Items carry their canonical `order` value. The reader rearranges the
//! displayed sequence and commits with "Check"; the answer is right when the
//! displayed `order` values are ascending.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableState {
    orders: Vec<i64>,
    checked: Option<bool>,
}

impl SortableState {
    /// `orders` in display order
    pub fn new(orders: Vec<i64>) -> Self {
        Self {
            orders,
            checked: None,
        }
    }

    pub fn orders(&self) -> &[i64] {
        &self.orders
    }

    /// Move the item at `from` so it ends up at `to` (drag and drop)
    pub fn move_item(&mut self, from: usize, to: usize) {
        if from >= self.orders.len() || to >= self.orders.len() || from == to {
            return;
        }
        let item = self.orders.remove(from);
        self.orders.insert(to, item);
        self.checked = None;
    }

    /// Swap with the neighbour above (`-1`) or below (`1`)
    pub fn nudge(&mut self, index: usize, delta: i64) {
        let target = index as i64 + delta;
        if target < 0 {
            return;
        }
        self.move_item(index, target as usize);
    }

    pub fn check(&mut self) -> bool {
        let ok = self.orders.windows(2).all(|w| w[0] <= w[1]);
        self.checked = Some(ok);
        ok
    }

    /// Result of the last check, cleared by any later move
    pub fn last_check(&self) -> Option<bool> {
        self.checked
    }
}
