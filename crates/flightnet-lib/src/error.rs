use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flight network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// Raised when a dataset file is readable but its contents are inconsistent.
    #[error("invalid dataset: {message}")]
    DatasetValidation { message: String },

    /// Raised when an airport code, name, city, or coordinate matched nothing.
    #[error("unknown airport: {query}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        query: String,
        suggestions: Vec<String>,
    },

    /// Raised when an airline code used as a filter is not in the dataset.
    #[error("unknown airline: {code}{}", format_suggestions(.suggestions))]
    UnknownAirline {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a route plan without any option is summarised.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a numeric query parameter is out of range.
    #[error("invalid query bounds: {message}")]
    InvalidQueryBounds { message: String },

    /// Raised when an airport query string cannot be parsed.
    #[error("invalid airport query '{input}': {message}")]
    InvalidQuery { input: String, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_airport_lists_suggestions() {
        let err = Error::UnknownAirport {
            query: "OPP".to_string(),
            suggestions: vec!["OPO".to_string(), "ORY".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown airport: OPP. Did you mean one of: 'OPO', 'ORY'?"
        );
    }

    #[test]
    fn unknown_airport_without_suggestions_is_plain() {
        let err = Error::UnknownAirport {
            query: "ZZZ".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown airport: ZZZ");
    }
}
