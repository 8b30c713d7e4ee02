use thiserror::Error;

use crate::models::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum TemplatingError {
    #[error("failed to decode message metadata: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid templating definition: {0}")]
    Validation(#[from] ValidationErrors),
}

impl TemplatingError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TemplatingError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, TemplatingError>;
