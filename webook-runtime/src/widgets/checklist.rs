#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistState {
    done: Vec<bool>,
}

impl ChecklistState {
    pub fn new(done: Vec<bool>) -> Self {
        Self { done }
    }

    /// Flip item `index`; out-of-range indices are ignored
    pub fn toggle(&mut self, index: usize) {
        if let Some(item) = self.done.get_mut(index) {
            *item = !*item;
        }
    }

    pub fn is_done(&self, index: usize) -> bool {
        self.done.get(index).copied().unwrap_or(false)
    }

    pub fn done_count(&self) -> usize {
        self.done.iter().filter(|d| **d).count()
    }

    /// `done/total`, e.g. `1/3`
    pub fn label(&self) -> String {
        format!("{}/{}", self.done_count(), self.done.len())
    }

    /// Fill width in percent
    pub fn percent(&self) -> f64 {
        if self.done.is_empty() {
            0.0
        } else {
            self.done_count() as f64 / self.done.len() as f64 * 100.0
        }
    }
}
