use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("cannot convert order {field}: {reason}")]
    Parse { field: &'static str, reason: String },
    #[error("order is malformed: {0}")]
    Validation(String),
    #[error("cannot retrieve orders from marketplace: {0}")]
    Upstream(String),
}

impl DomainError {
    pub fn parse(field: &'static str, reason: impl ToString) -> Self {
        DomainError::Parse {
            field,
            reason: reason.to_string(),
        }
    }
}
