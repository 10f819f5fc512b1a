//! Error type for configuration retrieval and parsing.

use std::{
    cmp::{max, min},
    fmt::Write as _,
};

use thiserror::Error;

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced while retrieving or parsing a carousel configuration.
///
/// Every variant carries the location that was being loaded. A caller never
/// receives a partially parsed configuration alongside one of these.
pub enum Error {
    #[error("failed to fetch {location}: {message}")]
    /// Transport or filesystem failure before a response body was available.
    Fetch {
        /// Location being loaded.
        location: String,
        /// Underlying cause.
        message: String,
    },
    #[error("fetching {location} returned status {status}")]
    /// The server answered with a non-success status.
    Status {
        /// Location being loaded.
        location: String,
        /// HTTP status code.
        status: u16,
    },
    #[error("invalid configuration at {location}:{line}:{col}: {message}")]
    /// The body was not valid JSON or did not match the configuration shape.
    Parse {
        /// Location being loaded.
        location: String,
        /// 1-based line number.
        line: usize,
        /// 1-based column number.
        col: usize,
        /// Human-readable error message.
        message: String,
        /// Rendered excerpt including a caret at the error location.
        excerpt: String,
    },
}

impl Error {
    /// Build a parse error from a `serde_json` failure over `source`.
    pub(crate) fn parse(location: &str, source: &str, err: &serde_json::Error) -> Self {
        let (line, col) = (err.line().max(1), err.column().max(1));
        Self::Parse {
            location: location.to_string(),
            line,
            col,
            message: err.to_string(),
            excerpt: excerpt_at(source, line, col),
        }
    }

    /// Location associated with this error.
    pub fn location(&self) -> &str {
        match self {
            Self::Fetch { location, .. }
            | Self::Status { location, .. }
            | Self::Parse { location, .. } => location,
        }
    }

    /// Render a human-friendly message including the excerpt for parse errors.
    pub fn pretty(&self) -> String {
        match self {
            Self::Fetch { location, message } => {
                format!("Config fetch error at {}: {}", location, message)
            }
            Self::Status { location, status } => {
                format!("Config fetch error at {}: HTTP status {}", location, status)
            }
            Self::Parse {
                location,
                line,
                col,
                message,
                excerpt,
            } => format!(
                "Config parse error at {}:{}:{}\n{}\n{}",
                location, line, col, message, excerpt
            ),
        }
    }
}

/// Build a small 2-3 line excerpt with a caret at `(line_no, col_no)`.
pub fn excerpt_at(source: &str, line_no: usize, col_no: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total = lines.len();
    let start = max(1usize, line_no.saturating_sub(2));
    let end = min(total, line_no + 1);

    let mut out = String::new();
    for n in start..=end {
        let text = lines.get(n - 1).copied().unwrap_or("");
        let _ignored = writeln!(out, " {:>4} | {}", n, text);
        if n == line_no {
            let prefix = format!(" {:>4} | ", n);
            let _ignored = writeln!(
                out,
                "{}{}^",
                " ".repeat(prefix.len()),
                " ".repeat(col_no.saturating_sub(1))
            );
        }
    }
    out
}
