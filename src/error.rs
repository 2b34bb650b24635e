//! Errors reported by the table constructor and the CSV record source

/// Represents errors that can occur while building or loading a bid table
#[derive(Debug)]
pub enum Error {
    /// Requested bucket count is zero or above [`crate::MAX_BUCKET_COUNT`]
    InvalidConfiguration {
        /// The rejected bucket count
        bucket_count: usize,
    },

    /// A CSV row is missing one of the columns a bid is built from
    MissingColumn {
        /// 1-based data row number (the header row is not counted)
        row: usize,
        /// 0-based column position that was expected
        column: usize,
    },

    /// The CSV reader failed (malformed quoting, invalid UTF-8, ...)
    Csv(csv::Error),

    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfiguration { bucket_count } => write!(
                f,
                "invalid bucket count {bucket_count}: expected 1..={}",
                crate::MAX_BUCKET_COUNT
            ),
            Self::MissingColumn { row, column } => {
                write!(f, "row {row} has no column {column}")
            }
            Self::Csv(e) => write!(f, "CSV error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Csv(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::InvalidConfiguration { .. } | Self::MissingColumn { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Bid table result
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_configuration() {
        let error = Error::InvalidConfiguration { bucket_count: 0 };
        let message = error.to_string();
        assert!(message.starts_with("invalid bucket count 0"), "{message}");
    }

    #[test]
    fn test_io_source_is_kept() {
        let error = Error::from(std::io::Error::other("boom"));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.to_string(), "I/O error: boom");
    }
}
