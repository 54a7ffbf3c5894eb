// ABOUTME: Per-step error handling policy for the publishing pipeline.
// ABOUTME: Create and push are fatal; every other step is best effort.

use crate::types::Arch;
use std::fmt;

/// What happens to the run when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// Stop the whole run immediately.
    Fatal,
    /// Record a warning and carry on.
    BestEffort,
}

/// A step performed for each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RemoveLocal,
    DeleteRemote,
    Pull(Arch),
    Create,
    Annotate(Arch),
    Push,
    Inspect,
}

impl Step {
    pub fn policy(&self) -> StepPolicy {
        match self {
            Step::Create | Step::Push => StepPolicy::Fatal,
            Step::RemoveLocal
            | Step::DeleteRemote
            | Step::Pull(_)
            | Step::Annotate(_)
            | Step::Inspect => StepPolicy::BestEffort,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.policy() == StepPolicy::Fatal
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::RemoveLocal => write!(f, "local manifest removal"),
            Step::DeleteRemote => write!(f, "remote manifest deletion"),
            Step::Pull(arch) => write!(f, "{} image pull", arch),
            Step::Create => write!(f, "manifest create"),
            Step::Annotate(arch) => write!(f, "{} annotation", arch),
            Step::Push => write!(f, "manifest push"),
            Step::Inspect => write!(f, "manifest inspect"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_create_and_push_are_fatal() {
        let fatal: Vec<_> = [
            Step::RemoveLocal,
            Step::DeleteRemote,
            Step::Pull(Arch::Amd64),
            Step::Pull(Arch::Arm64),
            Step::Create,
            Step::Annotate(Arch::Amd64),
            Step::Annotate(Arch::Arm64),
            Step::Push,
            Step::Inspect,
        ]
        .into_iter()
        .filter(Step::is_fatal)
        .collect();

        assert_eq!(fatal, vec![Step::Create, Step::Push]);
    }

    #[test]
    fn step_names_include_arch() {
        assert_eq!(Step::Pull(Arch::Arm64).to_string(), "arm64 image pull");
        assert_eq!(Step::Annotate(Arch::Amd64).to_string(), "amd64 annotation");
    }
}
