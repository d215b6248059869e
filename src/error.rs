use status_codes::LookupError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("{0}: {1}")]
    WithContext(String, Box<CliError>),
}

impl CliError {
    pub fn with_context<C: Into<String>>(self, context: C) -> Self {
        Self::WithContext(context.into(), Box::new(self))
    }

    /// Lookups that matched nothing are reported bare, without the error prefix
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Lookup(err) => err.is_not_found(),
            Self::WithContext(_, err) => err.is_not_found(),
            Self::Io(_) => false,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Lookup(err) => err.to_string(),
            Self::WithContext(ctx, err) => format!("{ctx}: {}", err.user_message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_passes_message_through() {
        let err = CliError::from(LookupError::CodeNotFound(999));
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "No description found for code: 999");
    }

    #[test]
    fn test_io_error_with_context() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = CliError::from(io).with_context("Failed to write output");

        assert!(!err.is_not_found());
        assert_eq!(
            err.user_message(),
            "Failed to write output: I/O operation failed: pipe closed"
        );
    }
}
