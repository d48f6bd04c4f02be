use thiserror::Error;

/// Why a post was rejected. Nothing is stored when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("username is required")]
    MissingUsername,
    #[error("text is required")]
    MissingText,
}
