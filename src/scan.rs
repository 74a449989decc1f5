use std::env;
use std::slice;

use crate::errors::ParseError;
use crate::model::{OperandOrder, OptionConfig};
use crate::record::Record;
#[cfg(feature = "tracing_debug")]
use tracing::debug;

mod long;
mod short;

/// An argument vector scanned against an option table.
///
/// Scanning never panics and never short-circuits through `Result`: the
/// outcome, whether the ordered record stream or the first diagnostic, is
/// carried by the `Invocation` itself.
///
/// ### Example
/// ```
/// use argscan::{HasArg, Invocation, OperandOrder, OptionConfig};
///
/// let table = vec![
///     OptionConfig::new('v', Some("verbose"), HasArg::No),
///     OptionConfig::new('o', Some("output"), HasArg::Required),
/// ];
///
/// let invocation = Invocation::parse(
///     vec!["program", "--verb", "input.txt", "-o", "out.bin"].as_slice(),
///     &table,
///     OperandOrder::Trailing,
/// );
///
/// assert_eq!(invocation.error(), None);
/// assert_eq!(invocation.get(0).unwrap().rendered(), "--verbose");
/// assert_eq!(invocation.get(1).unwrap().argument(), "out.bin");
/// assert_eq!(invocation.operands().collect::<Vec<_>>(), vec!["input.txt"]);
/// ```
#[derive(Debug)]
pub struct Invocation<'a> {
    records: Vec<Record<'a>>,
    error: Option<ParseError>,
}

impl<'a> Invocation<'a> {
    /// Scan an argument vector against an option table.
    ///
    /// The vector's first token is taken to be the program name and is skipped.
    /// The remaining tokens are consumed left to right:
    /// 1. A token starting with `--` is matched against the table's long names, abbreviation permitted.
    /// 2. A token starting with `-` is walked as a cluster of short codes.
    /// 3. The token `--` terminates option scanning; every later token is an operand.
    /// 4. Any other token is an operand, placed according to `order`.
    ///
    /// Scanning halts at the first diagnostic.
    /// A halted invocation carries no records; the diagnostic is reported through [`Invocation::error`].
    pub fn parse<S: AsRef<str>>(
        argv: &[S],
        table: &'a [OptionConfig],
        order: OperandOrder,
    ) -> Invocation<'a> {
        let mut records: Vec<Record<'a>> = Vec::new();
        let mut deferred: Vec<Record<'a>> = Vec::new();
        let mut error: Option<ParseError> = None;
        let mut cursor = 1;

        while cursor < argv.len() {
            let token = argv[cursor].as_ref();

            if token.len() > 1 && token.starts_with('-') {
                if token == "--" {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token {cursor} is the option terminator.  Scanning the remainder as operands.");
                    }
                    cursor += 1;
                    break;
                }

                let lookahead = argv.get(cursor + 1).map(|next| next.as_ref());
                let consumed_lookahead = if token.starts_with("--") {
                    match long::resolve(token, lookahead, table) {
                        Ok(hit) => {
                            records.push(hit.record);
                            hit.consumed_lookahead
                        }
                        Err(failure) => {
                            error = Some(failure);
                            break;
                        }
                    }
                } else {
                    match short::resolve(token, lookahead, table) {
                        Ok(hit) => {
                            records.extend(hit.records);
                            hit.consumed_lookahead
                        }
                        Err(failure) => {
                            error = Some(failure);
                            break;
                        }
                    }
                };
                cursor += if consumed_lookahead { 2 } else { 1 };
            } else {
                match order {
                    OperandOrder::Trailing => deferred.push(Record::operand(token)),
                    OperandOrder::InPlace => records.push(Record::operand(token)),
                }
                cursor += 1;
            }
        }

        if error.is_some() {
            // A diagnostic invalidates the whole vector; no partial stream
            // escapes.
            #[cfg(feature = "tracing_debug")]
            {
                let discarded = records.len() + deferred.len();
                debug!("Halting at token {cursor}.  Discarding {discarded} records.");
            }
            records.clear();
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                let trailing = argv.len().saturating_sub(cursor);
                let waiting = deferred.len();
                debug!("Scan complete.  Appending {waiting} deferred and {trailing} terminator operands.");
            }
            records.append(&mut deferred);

            while cursor < argv.len() {
                records.push(Record::operand(argv[cursor].as_ref()));
                cursor += 1;
            }
        }

        Invocation { records, error }
    }

    /// Scan the process arguments from [`env::args`].
    ///
    /// Equivalent to [`Invocation::parse`] over the full argument vector, program name included.
    pub fn from_env(table: &'a [OptionConfig], order: OperandOrder) -> Invocation<'a> {
        let argv: Vec<String> = env::args().collect();
        Invocation::parse(&argv, table, order)
    }

    /// The first diagnostic the vector produced, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// The number of scanned records.
    ///
    /// Always `0` when the scan produced a diagnostic.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scan produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, in scan order.
    pub fn get(&self, index: usize) -> Option<&Record<'a>> {
        self.records.get(index)
    }

    /// All records in scan order.
    pub fn records(&self) -> &[Record<'a>] {
        &self.records
    }

    /// Iterate the records in scan order.
    pub fn iter(&self) -> slice::Iter<'_, Record<'a>> {
        self.records.iter()
    }

    /// Iterate the operand arguments in record order.
    ///
    /// ### Example
    /// ```
    /// use argscan::{Invocation, OperandOrder, OptionConfig};
    ///
    /// let table: Vec<OptionConfig> = Vec::default();
    /// let invocation = Invocation::parse(
    ///     vec!["program", "one", "two"].as_slice(),
    ///     &table,
    ///     OperandOrder::InPlace,
    /// );
    ///
    /// assert_eq!(invocation.operands().collect::<Vec<_>>(), vec!["one", "two"]);
    /// ```
    pub fn operands(&self) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .filter(|record| record.is_operand())
            .map(|record| record.argument())
    }

    /// Whether any record matched the option with `code`.
    ///
    /// Operands never count, and a halted invocation reports every code unused.
    ///
    /// ### Example
    /// ```
    /// use argscan::{HasArg, Invocation, OperandOrder, OptionConfig};
    ///
    /// let table = vec![OptionConfig::new('v', Some("verbose"), HasArg::No)];
    /// let invocation = Invocation::parse(
    ///     vec!["program", "--verbose"].as_slice(),
    ///     &table,
    ///     OperandOrder::Trailing,
    /// );
    ///
    /// assert!(invocation.is_used('v'));
    /// assert!(!invocation.is_used('q'));
    /// ```
    pub fn is_used(&self, code: char) -> bool {
        self.records.iter().any(|record| record.code() == Some(code))
    }

    /// Drop every record and any diagnostic, leaving the invocation empty.
    ///
    /// Safe to call repeatedly.
    pub fn clear(&mut self) {
        self.records.clear();
        self.error = None;
    }
}

impl<'a, 'b> IntoIterator for &'b Invocation<'a> {
    type Item = &'b Record<'a>;
    type IntoIter = slice::Iter<'b, Record<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
