use crate::errors::ParseError;
use crate::model::{HasArg, OptionConfig};
use crate::record::Record;

#[derive(Debug)]
pub(super) struct ClusterMatch<'a> {
    pub(super) records: Vec<Record<'a>>,
    pub(super) consumed_lookahead: bool,
}

/// Resolve a `-abc` cluster token against the table, left to right.
///
/// `lookahead` is the next vector token, consumed only when the cluster's
/// final character requires a value and none was attached.
pub(super) fn resolve<'a>(
    token: &str,
    lookahead: Option<&str>,
    table: &'a [OptionConfig],
) -> Result<ClusterMatch<'a>, ParseError> {
    let cluster = &token[1..];
    let mut records = Vec::new();

    for (at, code) in cluster.char_indices() {
        let option = match table.iter().find(|config| config.code() == code) {
            Some(config) => config,
            // An unknown character aborts the whole token; records from the
            // cluster's earlier characters are abandoned with it.
            None => return Err(ParseError::InvalidShortOption(code)),
        };

        let remainder = &cluster[at + code.len_utf8()..];

        match option.has_arg() {
            HasArg::No => records.push(Record::short(option, "")),
            HasArg::Required if !remainder.is_empty() => {
                // The rest of the cluster is the attached value.
                records.push(Record::short(option, remainder));
                return Ok(ClusterMatch {
                    records,
                    consumed_lookahead: false,
                });
            }
            HasArg::Required => match lookahead {
                Some(next) if !next.is_empty() => {
                    records.push(Record::short(option, next));
                    return Ok(ClusterMatch {
                        records,
                        consumed_lookahead: true,
                    });
                }
                _ => return Err(ParseError::MissingShortArgument(code)),
            },
        }
    }

    Ok(ClusterMatch {
        records,
        consumed_lookahead: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn single_flag() {
        // Setup
        let table = vec![OptionConfig::new('a', Some("archive"), HasArg::No)];

        // Execute
        let hit = resolve("-a", None, &table).unwrap();

        // Verify
        assert_eq!(hit.records.len(), 1);
        assert_eq!(hit.records[0].code(), Some('a'));
        assert_eq!(hit.records[0].argument(), "");
        assert_eq!(hit.records[0].rendered(), "-a");
        assert!(!hit.consumed_lookahead);
    }

    #[test]
    fn cluster_of_flags() {
        // Setup
        let table = vec![
            OptionConfig::new('a', None, HasArg::No),
            OptionConfig::new('b', None, HasArg::No),
        ];

        // Execute
        let hit = resolve("-ab", None, &table).unwrap();

        // Verify
        let codes: Vec<Option<char>> = hit.records.iter().map(Record::code).collect();
        assert_eq!(codes, vec![Some('a'), Some('b')]);
        assert!(!hit.consumed_lookahead);
    }

    #[test]
    fn cluster_with_attached_value() {
        // Setup
        let table = vec![
            OptionConfig::new('a', None, HasArg::No),
            OptionConfig::new('b', None, HasArg::No),
            OptionConfig::new('c', None, HasArg::Required),
        ];

        // Execute
        let hit = resolve("-abcVALUE", None, &table).unwrap();

        // Verify
        assert_eq!(hit.records.len(), 3);
        assert_eq!(hit.records[0].argument(), "");
        assert_eq!(hit.records[1].argument(), "");
        assert_eq!(hit.records[2].code(), Some('c'));
        assert_eq!(hit.records[2].argument(), "VALUE");
        assert!(!hit.consumed_lookahead);
    }

    #[rstest]
    #[case("-cVALUE", "VALUE")]
    #[case("-c=5", "=5")]
    fn attached_value(#[case] token: &str, #[case] expected: &str) {
        // Setup
        let table = vec![OptionConfig::new('c', Some("config"), HasArg::Required)];

        // Execute
        let hit = resolve(token, None, &table).unwrap();

        // Verify
        // The attached form keeps every character after the option, a literal
        // '=' included.
        assert_eq!(hit.records.len(), 1);
        assert_eq!(hit.records[0].argument(), expected);
        assert!(!hit.consumed_lookahead);
    }

    #[rstest]
    #[case("VALUE")]
    #[case("-d")]
    fn separate_value(#[case] lookahead: &str) {
        // Setup
        let table = vec![OptionConfig::new('c', Some("config"), HasArg::Required)];

        // Execute
        let hit = resolve("-c", Some(lookahead), &table).unwrap();

        // Verify
        // The following token is consumed blindly, even when it looks like an
        // option itself.
        assert_eq!(hit.records.len(), 1);
        assert_eq!(hit.records[0].argument(), lookahead);
        assert!(hit.consumed_lookahead);
    }

    #[test]
    fn separate_value_after_flags() {
        // Setup
        let table = vec![
            OptionConfig::new('a', None, HasArg::No),
            OptionConfig::new('c', None, HasArg::Required),
        ];

        // Execute
        let hit = resolve("-ac", Some("VALUE"), &table).unwrap();

        // Verify
        assert_eq!(hit.records.len(), 2);
        assert_eq!(hit.records[0].code(), Some('a'));
        assert_eq!(hit.records[1].argument(), "VALUE");
        assert!(hit.consumed_lookahead);
    }

    #[rstest]
    #[case("-c", None)]
    #[case("-c", Some(""))]
    #[case("-ac", None)]
    fn missing_argument(#[case] token: &str, #[case] lookahead: Option<&str>) {
        // Setup
        let table = vec![
            OptionConfig::new('a', None, HasArg::No),
            OptionConfig::new('c', Some("config"), HasArg::Required),
        ];

        // Execute
        let error = resolve(token, lookahead, &table).unwrap_err();

        // Verify
        assert_eq!(error, ParseError::MissingShortArgument('c'));
    }

    #[rstest]
    #[case("-x")]
    #[case("-ax")]
    #[case("-xa")]
    fn invalid_option(#[case] token: &str) {
        // Setup
        let table = vec![OptionConfig::new('a', None, HasArg::No)];

        // Execute
        let error = resolve(token, None, &table).unwrap_err();

        // Verify
        assert_eq!(error, ParseError::InvalidShortOption('x'));
    }

    #[test]
    fn equals_is_a_plain_character() {
        // Setup
        let table = vec![OptionConfig::new('a', None, HasArg::No)];

        // Execute
        let error = resolve("-a=b", None, &table).unwrap_err();

        // Verify
        // After a valueless option, '=' is looked up like any other cluster
        // character.
        assert_eq!(error, ParseError::InvalidShortOption('='));
    }

    #[test]
    fn first_entry_wins_on_duplicate_code() {
        // Setup
        let table = vec![
            OptionConfig::new('v', Some("verbose"), HasArg::No),
            OptionConfig::new('v', Some("value"), HasArg::Required),
        ];

        // Execute
        let hit = resolve("-v", None, &table).unwrap();

        // Verify
        assert_eq!(hit.records[0].option(), Some(&table[0]));
        assert_eq!(hit.records[0].argument(), "");
    }

    #[test]
    fn multibyte_codes() {
        // Setup
        let table = vec![
            OptionConfig::new('ä', None, HasArg::No),
            OptionConfig::new('o', None, HasArg::Required),
        ];

        // Execute
        let hit = resolve("-äov", None, &table).unwrap();

        // Verify
        assert_eq!(hit.records.len(), 2);
        assert_eq!(hit.records[0].code(), Some('ä'));
        assert_eq!(hit.records[1].argument(), "v");
    }
}
