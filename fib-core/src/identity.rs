//! Service identity: a fixed name plus a revision string read from a
//! bundled resource.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::warn;

/// The service's human-readable name.
pub const SERVICE_NAME: &str = "Fibonacci Service";

/// Placeholder revision when the bundled resource is absent or unreadable.
pub const UNKNOWN_REVISION: &str = "unknown";

/// Default location of the revision resource in the deployed artifact.
///
/// `scripts/version.sh` regenerates it from `git describe` at build time.
pub const DEFAULT_REVISION_PATH: &str = ".version";

/// Immutable service identity, loaded once at startup and passed into the
/// delivery layer by value rather than kept as a hidden global.
#[derive(Debug, Clone)]
pub struct ServiceIdentity {
    name: String,
    revision: String,
}

impl ServiceIdentity {
    /// Build an identity from explicit parts, for tests and embedding.
    #[must_use]
    pub fn new(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revision: revision.into(),
        }
    }

    /// Load the identity from the default bundled revision resource.
    #[must_use]
    pub fn load() -> Self {
        Self::from_revision_file(Path::new(DEFAULT_REVISION_PATH))
    }

    /// Load the identity, reading the revision from `path`.
    ///
    /// Never fails: a missing, unreadable, or blank file degrades to
    /// [`UNKNOWN_REVISION`] with a warning. The revision is trimmed of
    /// surrounding whitespace.
    #[must_use]
    pub fn from_revision_file(path: &Path) -> Self {
        let revision = match fs::read_to_string(path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    warn!(path = %path.display(), "revision file is blank");
                    UNKNOWN_REVISION.to_owned()
                } else {
                    trimmed.to_owned()
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "revision file not found or unreadable");
                UNKNOWN_REVISION.to_owned()
            }
        };
        Self {
            name: SERVICE_NAME.to_owned(),
            revision,
        }
    }

    /// The service name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The revision string, or [`UNKNOWN_REVISION`] if none was bundled.
    #[must_use]
    pub fn revision(&self) -> &str {
        &self.revision
    }
}

impl fmt::Display for ServiceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.revision)
    }
}
