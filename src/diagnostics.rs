// ABOUTME: Diagnostics accumulator for best-effort step failures.
// ABOUTME: Collects warnings that shouldn't stop a run but should be shown to users.

use crate::publish::Step;
use crate::types::ComponentName;

/// Collects non-fatal warnings during a publishing run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning. The caller shows collected warnings to the user,
    /// so tracing only sees it at debug level.
    pub fn warn(&mut self, warning: Warning) {
        tracing::debug!(component = %warning.component, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A best-effort step that failed.
#[derive(Debug, Clone)]
pub struct Warning {
    pub step: Step,
    pub component: ComponentName,
    pub message: String,
}

impl Warning {
    pub fn new(step: Step, component: ComponentName, message: impl Into<String>) -> Self {
        Self {
            step,
            component,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Arch;

    #[test]
    fn diagnostics_starts_empty() {
        let diag = Diagnostics::default();
        assert!(!diag.has_warnings());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::new(
            Step::Pull(Arch::Amd64),
            "nfd".into(),
            "pull failed",
        ));
        diag.warn(Warning::new(Step::Inspect, "nfd".into(), "inspect failed"));

        assert!(diag.has_warnings());
        let warnings = diag.into_warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[1].step, Step::Inspect);
    }
}
