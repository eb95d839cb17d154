//! Contains the Error and Result type used when extracting values out of tags.
use std::fmt::Display;

use crate::TagKind;

/// Various errors that can occur when interpreting a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(String);

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error(msg.to_string())
    }
}

impl Error {
    pub(crate) fn invalid_kind(kind: u8) -> Error {
        Error(format!("invalid nbt tag kind: {}", kind))
    }

    pub(crate) fn mismatched_kind(expected: TagKind, found: TagKind) -> Error {
        Error(format!("expected {} tag, found {}", expected, found))
    }

    pub fn bespoke(msg: String) -> Error {
        Error(msg)
    }
}
