// ABOUTME: Image references built from prefix, component, version and architecture.
// ABOUTME: Formats like registry/proj/name:v1 and registry/proj/name:v1-arm64.

use super::arch::Arch;
use super::component::ComponentName;
use super::prefix::ImagePrefix;
use std::fmt;

/// A formatted image reference. It is never parsed back or validated;
/// the container CLI is the judge of whether it is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(String);

impl ImageRef {
    /// `{prefix}{component}:{version}`
    pub fn target(prefix: &ImagePrefix, component: &ComponentName, version: &str) -> Self {
        Self(format!("{}{}:{}", prefix, component, version))
    }

    /// `{prefix}{component}:{version}-{arch}`
    pub fn for_arch(
        prefix: &ImagePrefix,
        component: &ComponentName,
        version: &str,
        arch: Arch,
    ) -> Self {
        Self(format!("{}{}:{}-{}", prefix, component, version, arch))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The manifest list reference and its per-architecture sources for one component.
#[derive(Debug, Clone)]
pub struct ComponentRefs {
    pub target: ImageRef,
    pub amd64: ImageRef,
    pub arm64: ImageRef,
}

impl ComponentRefs {
    pub fn new(prefix: &ImagePrefix, component: &ComponentName, version: &str) -> Self {
        Self {
            target: ImageRef::target(prefix, component, version),
            amd64: ImageRef::for_arch(prefix, component, version, Arch::Amd64),
            arm64: ImageRef::for_arch(prefix, component, version, Arch::Arm64),
        }
    }

    pub fn source(&self, arch: Arch) -> &ImageRef {
        match arch {
            Arch::Amd64 => &self.amd64,
            Arch::Arm64 => &self.arm64,
        }
    }

    /// Source images in manifest list order.
    pub fn sources(&self) -> impl Iterator<Item = (Arch, &ImageRef)> {
        Arch::ALL.into_iter().map(move |arch| (arch, self.source(arch)))
    }
}
