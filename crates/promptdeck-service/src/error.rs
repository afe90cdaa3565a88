//! Typed errors raised by the entity store.

use thiserror::Error;

use promptdeck_core::error::{AppError, ErrorKind};

use crate::order::ReconcileError;

/// A rejected entity store operation. No state was changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Folder name is empty after trimming.
    #[error("folder name must not be empty")]
    EmptyName,
    /// Another real folder already has this name, ignoring case.
    #[error("a folder named '{name}' already exists")]
    DuplicateName {
        /// The rejected name.
        name: String,
    },
    /// The folder is locked.
    #[error("folder '{id}' is locked")]
    Locked {
        /// Folder id.
        id: String,
    },
    /// Prompt content is empty after trimming.
    #[error("prompt content must not be empty")]
    EmptyContent,
    /// The referenced entity does not exist.
    #[error("'{id}' not found")]
    NotFound {
        /// Entity id.
        id: String,
    },
    /// A prompt references a folder that is not a real folder.
    #[error("unknown folder '{id}'")]
    UnknownFolder {
        /// Folder id.
        id: String,
    },
    /// A reorder request did not match its visible subset.
    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl StoreError {
    /// The [`ErrorKind`] this error maps to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName | Self::Locked { .. } | Self::EmptyContent | Self::UnknownFolder { .. } => {
                ErrorKind::Validation
            }
            Self::DuplicateName { .. } => ErrorKind::Conflict,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Reconcile(_) => ErrorKind::Reconciliation,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let kind = err.kind();
        AppError::with_source(kind, err.to_string(), err)
    }
}
