//! Error types for the evolutionary core and its JSON helpers.

/// Failure of a core operation. None of these are retried; they surface
/// straight to whoever started the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("EmptyPopulation: cannot take the mean of an empty population")]
    EmptyPopulation,
    #[error("EmptyParentGroup: cannot pair parents. males = {males}, females = {females}")]
    EmptyParentGroup { males: usize, females: usize },
    #[error(
        "InsufficientPopulation: wanted {wanted} per sex, smallest sex group has {available}"
    )]
    InsufficientPopulation { wanted: usize, available: usize },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameters(reason.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("Json: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::invalid("min > mode").to_string(),
            "InvalidParameters: min > mode"
        );
        assert_eq!(
            Error::InsufficientPopulation {
                wanted: 5,
                available: 3
            }
            .to_string(),
            "InsufficientPopulation: wanted 5 per sex, smallest sex group has 3"
        );
    }
}
