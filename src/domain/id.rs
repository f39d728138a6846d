//! Identifier newtypes shared by the domain entities

use thiserror::Error;

/// Errors raised when an identifier fails validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdValidationError {
    #[error("{0} ID cannot be empty")]
    Empty(&'static str),

    #[error("{0} ID cannot exceed {1} characters")]
    TooLong(&'static str, usize),

    #[error("{0} ID can only contain alphanumeric characters, '-', '_' and '.'")]
    InvalidCharacters(&'static str),
}

pub const MAX_ID_LENGTH: usize = 64;

/// Validate an identifier for the given entity kind
pub fn validate_id(kind: &'static str, id: &str) -> Result<(), IdValidationError> {
    if id.is_empty() {
        return Err(IdValidationError::Empty(kind));
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(IdValidationError::TooLong(kind, MAX_ID_LENGTH));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(IdValidationError::InvalidCharacters(kind));
    }

    Ok(())
}

/// Defines a validated string identifier usable as a storage key.
///
/// The generated type serializes as a plain string and re-validates on
/// deserialization, so stored documents with malformed ids fail to load.
macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident => $kind:literal;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        $vis struct $Name(String);

        impl $Name {
            /// Create a new id after validation
            pub fn new(id: impl Into<String>) -> Result<Self, $crate::domain::id::IdValidationError> {
                let id = id.into();
                $crate::domain::id::validate_id($kind, &id)?;
                Ok(Self(id))
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $Name {
            type Error = $crate::domain::id::IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$Name> for String {
            fn from(id: $Name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $crate::domain::storage::StorageKey for $Name {
            fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

pub(crate) use define_entity_id;
