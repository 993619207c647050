use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("no element with id `{id}`")]
    MissingElement { id: String },
    #[error("page config field `{field}` must be a single token without whitespace")]
    InvalidConfig { field: &'static str },
}

impl PanelError {
    pub fn missing(id: impl Into<String>) -> Self {
        PanelError::MissingElement { id: id.into() }
    }
}

pub type PanelResult<T> = Result<T, PanelError>;
