use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InitError {
    #[error("required element `{0}` is missing from the document")]
    MissingElement(&'static str),
    #[error("no browser window available")]
    NoWindow,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("message delivery failed: {0}")]
    Delivery(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_names_the_selector() {
        let err = InitError::MissingElement(".header");
        assert_eq!(
            err.to_string(),
            "required element `.header` is missing from the document"
        );
    }

    #[test]
    fn submit_error_carries_the_reason() {
        let err = SubmitError::Delivery("mailbox unavailable".to_string());
        assert!(err.to_string().contains("mailbox unavailable"));
    }
}
