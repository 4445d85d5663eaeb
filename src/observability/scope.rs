//! ObservationScope for automatic begin/complete logging around one
//! contract invocation
//!
//! - Logs `{NAME}_BEGIN` on creation
//! - Logs `{NAME}_COMPLETE` or `{NAME}_FAILED` when finished
//! - Logs `{NAME}_INCOMPLETE` if dropped without either

use std::time::Instant;

use super::logger::Logger;

/// A scope that logs the lifecycle of one unit of work.
///
/// ```ignore
/// let scope = ObservationScope::with_fields("CREATE", &[("ledger", "default")]);
/// // ... invoke ...
/// scope.complete(&[("tx_id", &tx_id)]);
/// ```
pub struct ObservationScope {
    name: String,
    fields: Vec<(String, String)>,
    finished: bool,
    timer: Timer,
}

impl ObservationScope {
    /// Opens a scope and logs `{name}_BEGIN`.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_fields(name, &[])
    }

    /// Opens a scope whose fields are repeated on every event it logs.
    pub fn with_fields(name: impl Into<String>, fields: &[(&str, &str)]) -> Self {
        let name = name.into().to_ascii_uppercase();
        Logger::trace(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            finished: false,
            timer: Timer::new(),
        }
    }

    /// Logs `{name}_COMPLETE` at INFO with the scope fields plus `extra`.
    pub fn complete(mut self, extra: &[(&str, &str)]) {
        self.finished = true;
        let elapsed = self.timer.elapsed_ms();
        let mut fields = self.field_refs();
        fields.extend_from_slice(extra);
        fields.push(("elapsed_ms", elapsed.as_str()));
        Logger::info(&format!("{}_COMPLETE", self.name), &fields);
    }

    /// Logs `{name}_FAILED` at ERROR with the failure code and reason.
    pub fn fail(mut self, code: &str, reason: &str) {
        self.finished = true;
        let mut fields = self.field_refs();
        fields.push(("code", code));
        fields.push(("reason", reason));
        Logger::error(&format!("{}_FAILED", self.name), &fields);
    }

    /// Event name prefix
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn field_refs(&self) -> Vec<(&str, &str)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            let mut fields = self.field_refs();
            fields.push(("reason", "scope dropped without completion"));
            Logger::warn(&format!("{}_INCOMPLETE", self.name), &fields);
        }
    }
}

/// Wall-clock duration timer for log fields
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed milliseconds as a string
    pub fn elapsed_ms(&self) -> String {
        self.start.elapsed().as_millis().to_string()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
