use thiserror::Error;

/// A diagnostic produced while scanning a command line.
///
/// At most one is produced per scan: the first failure halts the scan and the
/// records decoded before it are discarded. The `Display` rendering is the
/// complete, caller-facing message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// An abbreviated long option matched two or more table entries that
    /// disagree on code or argument requirement. Carries the token as typed.
    #[error("option '{0}' is ambiguous")]
    AmbiguousOption(String),

    /// A long-option token matched no table entry, exactly or by
    /// abbreviation. Carries the token as typed.
    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    /// A long option declared without an argument was given `=value` syntax.
    /// Carries the resolved name.
    #[error("option '--{0}' doesn't allow an argument")]
    UnexpectedArgument(String),

    /// A long option demanding a value found none to consume: an empty
    /// `=value`, no following token, or an empty following token. Carries the
    /// resolved name.
    #[error("option '--{0}' requires an argument")]
    MissingArgument(String),

    /// A cluster character matched no table entry's code.
    #[error("invalid option -- {0}")]
    InvalidShortOption(char),

    /// A short option demanding a value found none to consume.
    #[error("option requires an argument -- {0}")]
    MissingShortArgument(char),
}
