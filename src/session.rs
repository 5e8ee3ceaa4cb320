use crate::ast::{evaluate_unrounded, CalcError, EvaluationMode, Parser};
use crate::config::CalculatorConfig;
use crate::format::{format_result, round_to_decimals};
use crate::history::HistoryStore;
use log::debug;

/// The state a calculator screen keeps between submissions: the DEG/RAD toggle, the
/// history panel and the last answer.
///
/// Evaluation itself stays stateless; the mode is read here and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    mode: EvaluationMode,
    history: HistoryStore,
    answer: Option<String>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            mode: config.default_mode,
            history: HistoryStore::with_capacity(config.history_capacity),
            answer: None,
            config,
        }
    }

    pub fn mode(&self) -> EvaluationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EvaluationMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> EvaluationMode {
        self.mode = self.mode.toggle();
        debug!("Mode switched to {}", self.mode);
        self.mode
    }

    /// Evaluates without touching history or the last answer.
    pub fn preview(&self, expression: &str) -> Result<f64, CalcError> {
        let ast = Parser::parse_expression(expression)?;
        let value = evaluate_unrounded(&ast, self.mode)?;
        Ok(round_to_decimals(value, self.config.precision))
    }

    /// Evaluates `expression`, records it and returns the formatted result.
    ///
    /// On failure history and the last answer are left as they were.
    pub fn submit(&mut self, expression: &str) -> Result<String, CalcError> {
        let expression = expression.trim();
        let result = format_result(self.preview(expression)?);
        self.commit(expression, result)
    }

    /// Records a successful evaluation; the answer only moves once the entry is stored.
    fn commit(&mut self, expression: &str, result: String) -> Result<String, CalcError> {
        self.history.record(expression, result.as_str())?;
        self.answer = Some(result.clone());
        Ok(result)
    }

    /// The last successfully submitted result.
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    /// Expression text of a history entry, for re-populating the input.
    pub fn recall(&self, index: usize) -> Option<&str> {
        self.history
            .get(index)
            .map(|entry| entry.expression.as_str())
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
