use thiserror::Error;

/// A location that no route entry matches
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route registered for path `{path}`")]
pub struct NotFound {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Empty or malformed route table, or a route config that failed to parse
    #[error("invalid route configuration: {0}")]
    Configuration(String),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// Host document has no element with the requested id
    #[error("no host element with id `{element_id}`")]
    Mount { element_id: String },

    /// Host refused to update its location
    #[error("failed to set location to `{fragment}`: {reason}")]
    History { fragment: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RouterError>;
