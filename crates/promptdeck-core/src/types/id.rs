//! Opaque string identifiers for library entities.
//!
//! Ids are produced by an [`IdGenerator`](crate::traits::IdGenerator) and
//! never parsed; distinct newtypes keep a `PromptId` from being passed
//! where a `FolderId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a folder.
    FolderId
);

define_id!(
    /// Unique identifier for a prompt.
    PromptId
);

/// Reserved id of the "all items" pseudo-folder.
pub const ALL_FOLDER_ID: &str = "all";

/// Id of the folder seeded on first run.
pub const DEFAULT_FOLDER_ID: &str = "default";

impl FolderId {
    /// The "all items" sentinel.
    pub fn all() -> Self {
        Self(ALL_FOLDER_ID.to_string())
    }

    /// The folder seeded on first run.
    pub fn default_folder() -> Self {
        Self(DEFAULT_FOLDER_ID.to_string())
    }

    /// Whether this id is the "all items" sentinel.
    pub fn is_all(&self) -> bool {
        self.0 == ALL_FOLDER_ID
    }
}
