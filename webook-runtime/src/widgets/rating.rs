#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingState {
    max: u32,
    value: u32,
}

impl RatingState {
    pub fn new(max: u32, value: u32) -> Self {
        Self {
            max,
            value: value.min(max),
        }
    }

    /// Click on star `k` (1-based)
    pub fn set(&mut self, k: u32) {
        if (1..=self.max).contains(&k) {
            self.value = k;
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Stars lit for the current value
    pub fn lit(&self) -> Vec<bool> {
        (1..=self.max).map(|k| k <= self.value).collect()
    }

    /// `value / max ★`, or `None` while unrated
    pub fn label(&self) -> Option<String> {
        (self.value > 0).then(|| format!("{} / {} ★", self.value, self.max))
    }
}
