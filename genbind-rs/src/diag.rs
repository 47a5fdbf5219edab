//! Per-line diagnostics.
//!
//! Problems in directive lines never abort a run; they are collected and
//! printed to stderr so the generated output stays parseable on stdout.
//! Two fixed formats:
//!
//! ```text
//! error on line 12: invalid type 'float'
//! warn (gl.cxx:7): no arguments provided to gen_binding #pragma
//! ```
//!
//! Errors name the line only; warnings also carry the source name given on
//! the command line.

/// How serious a diagnostic is.  An error drops the directive that caused
/// it; a warning drops nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One problem tied to a 1-based input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            message: message.into(),
        }
    }

    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            line,
            message: message.into(),
        }
    }

    /// Render for the diagnostics stream.  `source` is the input name shown
    /// in warnings.
    pub fn render(&self, source: &str) -> String {
        match self.severity {
            Severity::Error => format!("error on line {}: {}", self.line, self.message),
            Severity::Warning => format!("warn ({}:{}): {}", source, self.line, self.message),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
