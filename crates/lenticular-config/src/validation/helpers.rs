//! Error collection shared by the section validators.

use std::fmt::Display;

/// Accumulates every out-of-range field so one pass reports them all.
#[derive(Debug, Default)]
pub(crate) struct Report {
    errors: Vec<String>,
}

impl Report {
    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// `value` must lie in `[min, max]`.
    pub(crate) fn within<T: PartialOrd + Display>(&mut self, name: &str, value: T, min: T, max: T) {
        if !(value >= min && value <= max) {
            self.push(format!("{name} = {value} is out of range [{min}, {max}]"));
        }
    }

    /// `value` must lie in `(0, max]`.
    pub(crate) fn positive(&mut self, name: &str, value: f64, max: f64) {
        if !(value > 0.0 && value <= max) {
            self.push(format!("{name} = {value} is out of range (0, {max}]"));
        }
    }

    /// `value` must stay finite once narrowed to the f32 the renderer uses.
    pub(crate) fn within_f32(&mut self, name: &str, value: f64) {
        if !(value as f32).is_finite() {
            self.push(format!("{name} = {value} does not fit in an f32"));
        }
    }

    pub(crate) fn finite(&mut self, name: &str, value: f64) {
        if !value.is_finite() {
            self.push(format!("{name} = {value} must be finite"));
        }
    }

    pub(crate) fn into_result(self) -> Result<(), String> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.join("; "))
        }
    }
}
