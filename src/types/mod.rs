// ABOUTME: Domain types for manifest publishing.
// ABOUTME: Component names, architectures, image prefixes, references and digests.

mod arch;
mod component;
mod digest;
mod image_ref;
mod prefix;

pub use arch::Arch;
pub use component::{ComponentName, DEFAULT_COMPONENTS};
pub use digest::Digest;
pub use image_ref::{ComponentRefs, ImageRef};
pub use prefix::{ImagePrefix, RegistryCoordinates, RemoteRepository};
