//! Test support: deterministic uniform sources.

use crate::source::UniformSource;

/// Deterministic source replaying a scripted sequence of draws, cycling
/// when the script is exhausted.
pub(crate) struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub(crate) fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub(crate) fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
