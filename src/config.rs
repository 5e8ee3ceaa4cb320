use crate::ast::EvaluationMode;

/// Decimal places results are rounded to.
pub const DEFAULT_PRECISION: u32 = 10;

/// Number of history entries kept before the oldest is evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub default_mode: EvaluationMode,
    pub history_capacity: usize,
    pub precision: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_mode: EvaluationMode::Degrees,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl CalculatorConfig {
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.default_mode = mode;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}
