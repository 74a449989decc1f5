/// Whether an option accepts a value on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasArg {
    /// The option stands alone; supplying `--name=value` is an error.
    No,
    /// The option must be given a value, either attached (`--name=value`,
    /// `-cVALUE`) or as the following token (`--name value`, `-c VALUE`).
    Required,
}

impl std::fmt::Display for HasArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Placement of operands amongst the decoded records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandOrder {
    /// Defer every operand and append them, in their original relative order,
    /// after all option records.
    /// This is the GNU-style default: options and operands may interleave
    /// freely on the command line.
    Trailing,
    /// Emit an operand record immediately at its encountered position.
    InPlace,
}

impl Default for OperandOrder {
    fn default() -> Self {
        OperandOrder::Trailing
    }
}

impl std::fmt::Display for OperandOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The specification of a single recognizable option.
///
/// ### Example
/// ```
/// use argscan::{HasArg, OptionConfig};
///
/// let verbose = OptionConfig::new('v', Some("verbose"), HasArg::No);
/// assert_eq!(verbose.code(), 'v');
/// assert_eq!(verbose.name(), Some("verbose"));
/// assert_eq!(verbose.has_arg(), HasArg::No);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionConfig {
    code: char,
    name: Option<String>,
    has_arg: HasArg,
}

impl OptionConfig {
    /// Create an option specification.
    ///
    /// `code` identifies the option in decoded records and doubles as its
    /// short-option character.
    /// `name` is the long-form spelling matched by `--name` syntax, exactly or
    /// by unambiguous abbreviation; pass `None` for a short-only option.
    ///
    /// A table may contain entries whose names share prefixes, or even
    /// duplicate aliases; collisions are resolved (or diagnosed) per token
    /// during the scan, never rejected up front.
    pub fn new(code: char, name: Option<&str>, has_arg: HasArg) -> Self {
        Self {
            code,
            name: name.map(str::to_string),
            has_arg,
        }
    }

    /// The identifying code.
    pub fn code(&self) -> char {
        self.code
    }

    /// The long-form name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The argument requirement.
    pub fn has_arg(&self) -> HasArg {
        self.has_arg
    }
}
