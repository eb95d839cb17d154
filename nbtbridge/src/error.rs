//! Contains the Error and Result type used by the codec and the registry.
use std::fmt::Display;

use crate::host::HostFault;

/// The broad reason an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No host installed, an unrecognised server release, or a class or
    /// member the running release was expected to have could not be found.
    Lookup,
    /// A resolved constructor, accessor or method faulted, or handed back a
    /// value of the wrong shape.
    Conversion,
    /// The host runtime was installed more than once.
    Install,
}

/// Errors that can occur while resolving bindings or converting tags.
///
/// Errors are `Clone` so that a failed resolution can be memoized and handed
/// to every later caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn no_host() -> Error {
        Error::lookup("no host runtime installed")
    }

    pub(crate) fn unknown_release(package: &str) -> Error {
        Error::lookup(format!("unsupported server release: {:?}", package))
    }

    pub(crate) fn missing_class(path: &str) -> Error {
        Error::lookup(format!("class not found: {}", path))
    }

    pub(crate) fn missing_member(class: &str, member: impl Display) -> Error {
        Error::lookup(format!("member not found: {}.{}", class, member))
    }

    pub(crate) fn fault(what: impl Display, fault: HostFault) -> Error {
        Error {
            kind: ErrorKind::Conversion,
            message: format!("{} failed: {}", what, fault),
        }
    }

    pub(crate) fn unexpected(what: impl Display, expected: &str) -> Error {
        Error {
            kind: ErrorKind::Conversion,
            message: format!("{} did not return {}", what, expected),
        }
    }

    pub(crate) fn already_installed() -> Error {
        Error {
            kind: ErrorKind::Install,
            message: "a host runtime is already installed".to_owned(),
        }
    }

    fn lookup(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::Lookup,
            message: message.into(),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
