use crate::rules::ValidationError;
use crate::store::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a single store operation. The store is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound {
        kind: &'static str,
        id: EntityId,
    },
    ReferenceNotFound {
        kind: &'static str,
        id: EntityId,
    },
    InvalidReference {
        kind: &'static str,
        id: EntityId,
        reason: String,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::ReferenceNotFound { kind, id } => {
                write!(f, "referenced {kind} does not exist: {id}")
            }
            Self::InvalidReference { kind, id, reason } => {
                write!(f, "referenced {kind} {id} is not allowed here: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::ReferenceNotFound { .. } => None,
            Self::InvalidReference { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}
