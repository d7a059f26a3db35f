//! Cancellable user prompts for element insertion
//!
//! Prompts are modal from the user's perspective but every one can be
//! dismissed; `None` means cancelled, and a cancelled prompt must leave the
//! document unmodified.

/// Solicits insertion parameters from the user.
pub trait InsertPrompt {
    /// Row and column counts for a new table, as entered (clamping happens
    /// in the factory).
    fn table_dimensions(&mut self) -> Option<(i64, i64)>;

    /// The raw chart-type selector (`"1"`..`"4"` or a name).
    fn chart_type(&mut self) -> Option<String>;
}

/// Scripted prompt for tests: answers are consumed in order.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub table_answers: Vec<Option<(i64, i64)>>,
    pub chart_answers: Vec<Option<String>>,
}

impl ScriptedPrompt {
    pub fn tables(answers: Vec<Option<(i64, i64)>>) -> Self {
        Self {
            table_answers: answers,
            ..Self::default()
        }
    }

    pub fn charts(answers: Vec<Option<String>>) -> Self {
        Self {
            chart_answers: answers,
            ..Self::default()
        }
    }
}

impl InsertPrompt for ScriptedPrompt {
    fn table_dimensions(&mut self) -> Option<(i64, i64)> {
        if self.table_answers.is_empty() {
            None
        } else {
            self.table_answers.remove(0)
        }
    }

    fn chart_type(&mut self) -> Option<String> {
        if self.chart_answers.is_empty() {
            None
        } else {
            self.chart_answers.remove(0)
        }
    }
}
