use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain pattern: {0}")]
    InvalidPattern(String),

    #[error("Unknown geosite category: {0}")]
    UnknownCategory(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("DNS config has neither servers nor hosts")]
    EmptyConfig,

    #[error("Geosite database unavailable: {0}")]
    GeositeUnavailable(String),
}

impl DomainError {
    /// The raw input that caused the error, when there is one.
    pub fn offending_input(&self) -> Option<&str> {
        match self {
            DomainError::InvalidPattern(s)
            | DomainError::UnknownCategory(s)
            | DomainError::InvalidAddress(s) => Some(s),
            _ => None,
        }
    }
}
