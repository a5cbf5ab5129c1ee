//! Validation result accumulator.
//!
//! A [`ValidationResult`] collects every error and warning produced while
//! checking a deck list. Validity is derived from the error list and cannot
//! be set directly, so `is_valid()` always equals `errors().is_empty()`.

use serde::Serialize;

/// Default cap on recorded errors per validation pass.
pub const DEFAULT_MAX_ERRORS: usize = 50;

/// How messages are recorded into a [`ValidationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Promote every warning to an error.
    pub strict_mode: bool,
    /// Stop recording errors once this many are held.
    pub max_errors: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl ValidationPolicy {
    /// Returns a strict copy of this policy.
    #[must_use]
    pub const fn strict(mut self) -> Self {
        self.strict_mode = true;
        self
    }
}

/// Errors and warnings gathered over one or more validation passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    #[serde(skip)]
    policy: ValidationPolicy,
    #[serde(skip)]
    dropped_errors: usize,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new(ValidationPolicy::default())
    }
}

impl ValidationResult {
    /// Creates an empty, valid result recording under `policy`.
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            policy,
            dropped_errors: 0,
        }
    }

    /// Returns `true` when no error has been recorded.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Recorded errors, in emission order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Recorded warnings, in emission order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Number of errors discarded after the error cap was reached.
    #[must_use]
    pub const fn dropped_errors(&self) -> usize {
        self.dropped_errors
    }

    /// Records an error. The result becomes invalid.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        if self.errors.len() >= self.policy.max_errors.max(1) {
            self.dropped_errors += 1;
            return;
        }
        self.errors.push(message.into());
    }

    /// Records a warning, or an error when strict mode is on.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        if self.policy.strict_mode {
            self.add_error(message);
        } else {
            self.warnings.push(message.into());
        }
    }

    /// Folds another result into this one.
    ///
    /// Errors and warnings are appended in order and validity is the logical
    /// AND of both. Messages in `other` were already shaped by its own policy
    /// and are not promoted again.
    pub fn merge(&mut self, other: Self) {
        for error in other.errors {
            self.add_error(error);
        }
        self.dropped_errors += other.dropped_errors;
        if !other.is_valid {
            self.is_valid = false;
        }
        self.warnings.extend(other.warnings);
    }

    /// Appends the notice for errors discarded by the cap, if any.
    ///
    /// Called once by the coordinator when a pass is complete.
    pub fn finish(&mut self) {
        if self.dropped_errors > 0 {
            self.warnings.push(format!(
                "Stopped recording errors after {}; {} further errors were not recorded",
                self.policy.max_errors, self.dropped_errors
            ));
        }
    }

    /// One-line description of the outcome.
    #[must_use]
    pub fn summary(&self) -> String {
        let error_count = self.errors.len() + self.dropped_errors;
        if error_count > 0 {
            format!("{error_count} validation errors found")
        } else if self.warnings.is_empty() {
            "Deck validation passed".to_string()
        } else {
            format!(
                "Deck validation passed with {} warnings",
                self.warnings.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_result_is_valid() {
        let result = ValidationResult::default();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn add_error_changes_validity() {
        let mut result = ValidationResult::default();
        result.add_error("Test error");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Test error"]);
    }

    #[test]
    fn add_warning_preserves_validity() {
        let mut result = ValidationResult::default();
        result.add_warning("Test warning");
        assert!(result.is_valid());
        assert_eq!(result.warnings(), ["Test warning"]);
    }

    #[test]
    fn strict_mode_promotes_warnings() {
        let mut result = ValidationResult::new(ValidationPolicy::default().strict());
        result.add_warning("Looks odd");
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Looks odd"]);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn merge_concatenates_and_ands_validity() {
        let mut first = ValidationResult::default();
        first.add_warning("w1");
        let mut second = ValidationResult::default();
        second.add_error("e1");
        second.add_warning("w2");

        first.merge(second);
        assert!(!first.is_valid());
        assert_eq!(first.errors(), ["e1"]);
        assert_eq!(first.warnings(), ["w1", "w2"]);
    }

    #[test]
    fn merge_does_not_promote_again() {
        let mut strict = ValidationResult::new(ValidationPolicy::default().strict());
        let mut lenient = ValidationResult::default();
        lenient.add_warning("kept as warning");
        strict.merge(lenient);
        assert!(strict.is_valid());
        assert_eq!(strict.warnings(), ["kept as warning"]);
    }

    #[test]
    fn error_cap_drops_excess_and_reports_once() {
        let policy = ValidationPolicy {
            strict_mode: false,
            max_errors: 2,
        };
        let mut result = ValidationResult::new(policy);
        for i in 0..5 {
            result.add_error(format!("error {i}"));
        }
        result.finish();

        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.dropped_errors(), 3);
        assert_eq!(result.warnings().len(), 1);
        assert!(result.warnings()[0].contains("3 further errors"));
        assert_eq!(result.summary(), "5 validation errors found");
    }

    #[test]
    fn summary_variants() {
        let mut result = ValidationResult::default();
        assert_eq!(result.summary(), "Deck validation passed");
        result.add_warning("w");
        assert_eq!(result.summary(), "Deck validation passed with 1 warnings");
    }

    #[test]
    fn serialises_public_fields_only() {
        let mut result = ValidationResult::default();
        result.add_error("bad");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"is_valid": false, "errors": ["bad"], "warnings": []})
        );
    }
}
