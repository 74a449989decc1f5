use crate::errors::ParseError;
use crate::model::{HasArg, OptionConfig};
use crate::record::Record;

#[derive(Debug)]
pub(super) struct LongMatch<'a> {
    pub(super) record: Record<'a>,
    pub(super) consumed_lookahead: bool,
}

/// Resolve a `--name[=value]` token against the table.
///
/// `lookahead` is the next vector token, consumed only when the resolved
/// entry requires a value and the token carried none.
pub(super) fn resolve<'a>(
    token: &str,
    lookahead: Option<&str>,
    table: &'a [OptionConfig],
) -> Result<LongMatch<'a>, ParseError> {
    let body = &token[2..];
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let mut selected: Option<(&'a OptionConfig, &'a str)> = None;
    let mut exact = false;
    let mut ambiguous = false;

    for config in table {
        if let Some(candidate) = config.name() {
            if !candidate.starts_with(name) {
                continue;
            }

            if candidate.len() == name.len() {
                // An exact match wins outright, regardless of table order or
                // any clash amongst earlier abbreviation candidates.
                selected = Some((config, candidate));
                exact = true;
                break;
            }

            match selected {
                None => selected = Some((config, candidate)),
                Some((first, _)) => {
                    // Duplicate aliases (same code, same requirement) are not
                    // ambiguous; any other second candidate is.
                    if first.code() != config.code() || first.has_arg() != config.has_arg() {
                        ambiguous = true;
                    }
                }
            }
        }
    }

    if ambiguous && !exact {
        return Err(ParseError::AmbiguousOption(token.to_string()));
    }

    let (option, resolved) = match selected {
        Some(found) => found,
        None => return Err(ParseError::UnrecognizedOption(token.to_string())),
    };

    match value {
        Some(value) => match option.has_arg() {
            HasArg::No => Err(ParseError::UnexpectedArgument(resolved.to_string())),
            HasArg::Required if value.is_empty() => {
                Err(ParseError::MissingArgument(resolved.to_string()))
            }
            HasArg::Required => Ok(LongMatch {
                record: Record::long(option, resolved, value),
                consumed_lookahead: false,
            }),
        },
        None => match option.has_arg() {
            HasArg::Required => match lookahead {
                Some(next) if !next.is_empty() => Ok(LongMatch {
                    record: Record::long(option, resolved, next),
                    consumed_lookahead: true,
                }),
                _ => Err(ParseError::MissingArgument(resolved.to_string())),
            },
            HasArg::No => Ok(LongMatch {
                record: Record::long(option, resolved, ""),
                consumed_lookahead: false,
            }),
        },
    }
}
