use crate::model::OptionConfig;

/// One decoded entry of a scanned command line: a recognized option
/// occurrence, or an operand.
///
/// Records are built by [`Invocation::parse`](crate::Invocation::parse) and
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    option: Option<&'a OptionConfig>,
    argument: String,
    rendered: String,
}

impl<'a> Record<'a> {
    pub(crate) fn long(option: &'a OptionConfig, name: &str, argument: impl Into<String>) -> Self {
        Self {
            option: Some(option),
            argument: argument.into(),
            rendered: format!("--{name}"),
        }
    }

    pub(crate) fn short(option: &'a OptionConfig, argument: impl Into<String>) -> Self {
        Self {
            option: Some(option),
            argument: argument.into(),
            rendered: format!("-{}", option.code()),
        }
    }

    pub(crate) fn operand(argument: impl Into<String>) -> Self {
        Self {
            option: None,
            argument: argument.into(),
            rendered: "-".to_string(),
        }
    }

    /// The matched table entry, or `None` for an operand.
    pub fn option(&self) -> Option<&'a OptionConfig> {
        self.option
    }

    /// The matched entry's code, or `None` for an operand.
    pub fn code(&self) -> Option<char> {
        self.option.map(OptionConfig::code)
    }

    /// The option's value (empty when the option takes none), or the operand
    /// text itself.
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// The canonical spelling of the matched option: `--name` with the
    /// resolved table name (even when the command line abbreviated it), or
    /// `-c` with the entry's code.
    ///
    /// For operands this is a meaningless placeholder; use
    /// [`argument`](Record::argument) for the operand text.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Whether this record carries a plain positional argument.
    pub fn is_operand(&self) -> bool {
        self.option.is_none()
    }
}
