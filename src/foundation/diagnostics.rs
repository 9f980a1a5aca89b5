use std::fmt;

/// How much attention a [`Diagnostic`] deserves.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Informational; the result is exactly what was asked for.
    Info,
    /// The engine degraded gracefully; the result is usable but not what was asked for.
    Warning,
}

/// Stable machine-readable identifier for a soft condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Arrangement name not recognized; stacked-vertical was used.
    UnknownArrangement,
    /// Base anchor name not recognized; center was used.
    UnknownBasePosition,
    /// Safe-position search found no collision-free point.
    SafePositionExhausted,
    /// Auto-resolver ended with collisions left.
    CollisionsUnresolved,
    /// Column ratios were rescaled or ignored.
    SlotRatios,
    /// Layout validation found overlapping elements.
    LayoutOverlap,
    /// Column slots were stacked vertically for a portrait viewport.
    MobileReflow,
}

/// A soft condition reported alongside a result instead of failing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    /// Severity of the condition.
    pub level: DiagnosticLevel,
    /// Stable identifier.
    pub code: DiagnosticCode,
    /// Human readable description.
    pub message: String,
}

impl Diagnostic {
    /// Build a warning and emit it as a `tracing` event.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(?code, "{message}");
        Self {
            level: DiagnosticLevel::Warning,
            code,
            message,
        }
    }

    /// Build an informational diagnostic and emit it as a `tracing` event.
    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(?code, "{message}");
        Self {
            level: DiagnosticLevel::Info,
            code,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            DiagnosticLevel::Info => "info",
            DiagnosticLevel::Warning => "warning",
        };
        write!(f, "{level}[{:?}]: {}", self.code, self.message)
    }
}

/// A value together with the soft conditions met while computing it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diagnosed<T> {
    /// The computed value; always usable.
    pub value: T,
    /// Conditions met along the way, in the order they occurred.
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Diagnosed<T> {
    /// Wrap a value without diagnostics.
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// Wrap a value with its diagnostics.
    pub fn new(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Whether any diagnostic is a warning.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Warning)
    }

    /// Transform the value, keeping the diagnostics.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Diagnosed<U> {
        Diagnosed {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Split off the value, moving its diagnostics into `sink`.
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }

    /// Split into value and diagnostics.
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/diagnostics.rs"]
mod tests;
