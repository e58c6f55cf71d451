use thiserror::Error;

/// Reasons a quick-entry string could not be turned into a transaction.
///
/// None of these are fatal; callers fall back to manual entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("no amount found in '{0}'")]
    MissingAmount(String),

    #[error("no description before the amount in '{0}'")]
    MissingDescription(String),

    #[error("no recognized category keyword in '{0}'")]
    UnknownCategory(String),
}
