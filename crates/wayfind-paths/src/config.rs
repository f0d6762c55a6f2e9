use wayfind_core::COST_LIMIT;

/// Search tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Partial routes whose accumulated cost reaches this value are pruned.
    pub cost_limit: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            cost_limit: COST_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Replace the pruning threshold.
    pub fn with_cost_limit(mut self, cost_limit: f32) -> Self {
        self.cost_limit = cost_limit;
        self
    }
}
