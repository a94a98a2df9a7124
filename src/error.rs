use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid price pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("price pattern `{pattern}` must have exactly one capture group, found {found}")]
    CaptureGroupCount { pattern: String, found: usize },

    #[error("template `{0}` does not contain a `1,000` style amount")]
    InvalidTemplate(String),

    #[error("{0} decimals requested, at most {max} are supported", max = crate::formatters::to_fixed::MAX_DECIMALS)]
    TooManyDecimals(usize),

    #[error("invalid CSS selector `{0}`")]
    InvalidSelector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
