//! Validated database identifiers.

use std::fmt;

/// Longest database name the server accepts, counted in characters.
pub const MAX_DATABASE_NAME_LENGTH: usize = 64;

/// A database name that passed identifier validation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatabaseName(String);

/// Reasons a raw value is not a usable database name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidDatabaseName {
    Empty,
    TooLong { length: usize },
    TrailingSpaces,
}

impl fmt::Display for InvalidDatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidDatabaseName::Empty => write!(f, "The database name must not be empty."),
            InvalidDatabaseName::TooLong { length } => write!(
                f,
                "The database name cannot be longer than {} characters (got {}).",
                MAX_DATABASE_NAME_LENGTH, length
            ),
            InvalidDatabaseName::TrailingSpaces => {
                write!(f, "The database name cannot end with a space character.")
            }
        }
    }
}

impl std::error::Error for InvalidDatabaseName {}

impl DatabaseName {
    /// Validate a raw string as a database name.
    pub fn from_value(name: &str) -> Result<Self, InvalidDatabaseName> {
        if name.is_empty() {
            return Err(InvalidDatabaseName::Empty);
        }

        let length = name.chars().count();
        if length > MAX_DATABASE_NAME_LENGTH {
            return Err(InvalidDatabaseName::TooLong { length });
        }

        if name.ends_with(' ') {
            return Err(InvalidDatabaseName::TrailingSpaces);
        }

        Ok(Self(name.to_string()))
    }

    /// Lenient variant for request parameters: absent or invalid input yields `None`.
    pub fn try_from_value(name: Option<&str>) -> Option<Self> {
        name.and_then(|n| Self::from_value(n).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for DatabaseName {
    type Error = InvalidDatabaseName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatabaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
