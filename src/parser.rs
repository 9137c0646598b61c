//! Path tokenizer: converts a path expression into a flat key sequence.

use crate::error::PathError;
use crate::grammar::{self, QUOTE};

/// Parses a path expression into its ordered sequence of access keys.
///
/// Quote style is normalized first, so `a["k"]` and `a['k']` tokenize
/// identically. The empty path yields a single empty key, which the
/// traversal engine treats as a reference to the structure itself.
///
/// Fails with [`PathError::Grammar`] on any syntax violation, reporting
/// the offending character and its 0-based position.
pub fn parse(path: &str) -> Result<Vec<String>, PathError> {
    let path = grammar::normalize(path);
    grammar::validate(&path)?;

    let keys: Vec<String> = path
        .split('.')
        .flat_map(|segment| segment.split('['))
        .map(|piece| {
            let piece = piece.strip_suffix(']').unwrap_or(piece);
            piece.trim_matches(QUOTE).to_string()
        })
        .collect();

    log::trace!("tokenized '{path}' into {} keys", keys.len());
    Ok(keys)
}

/// Rebuilds a path expression from a key sequence.
///
/// Identifier keys are dot-joined, all-digit keys become numeric brackets,
/// and anything else is emitted as a quoted bracket key. Empty keys (the
/// self-reference) contribute nothing. For any sequence produced by
/// [`parse`], the result parses back to the same sequence.
pub fn to_path(keys: &[String]) -> String {
    let mut path = String::new();
    for key in keys {
        if key.is_empty() {
            continue;
        }
        if key.chars().all(|c| c.is_ascii_digit()) {
            path.push('[');
            path.push_str(key);
            path.push(']');
        } else if is_identifier(key) {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(key);
        } else {
            path.push('[');
            path.push(QUOTE);
            path.push_str(key);
            path.push(QUOTE);
            path.push(']');
        }
    }
    path
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(grammar::is_identifier_start)
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dotted_path_into_keys() {
        assert_eq!(parse("a.b.c").unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn splits_numeric_brackets_into_keys() {
        assert_eq!(parse("a[0].b").unwrap(), vec!["a", "0", "b"]);
        assert_eq!(parse("a[10][2]").unwrap(), vec!["a", "10", "2"]);
    }

    #[test]
    fn strips_quotes_from_bracket_keys() {
        assert_eq!(parse("a['x-y']").unwrap(), vec!["a", "x-y"]);
    }

    #[test]
    fn double_and_single_quotes_tokenize_identically() {
        assert_eq!(parse(r#"a["x-y"]"#).unwrap(), parse("a['x-y']").unwrap());
    }

    #[test]
    fn empty_path_yields_the_self_key() {
        assert_eq!(parse("").unwrap(), vec![String::new()]);
    }

    #[test]
    fn leading_index_yields_a_leading_self_key() {
        assert_eq!(parse("[0]").unwrap(), vec!["", "0"]);
    }

    #[test]
    fn single_identifier_yields_one_key() {
        assert_eq!(parse("abc123").unwrap(), vec!["abc123"]);
    }

    #[test]
    fn grammar_errors_surface_unchanged() {
        assert!(matches!(parse(".a"), Err(PathError::Grammar { position: 0, .. })));
        assert!(matches!(parse("a]"), Err(PathError::Grammar { position: 1, .. })));
    }

    #[test]
    fn to_path_rebuilds_each_key_kind() {
        let keys: Vec<String> = ["user", "0", "zip-code", "name"]
            .map(String::from)
            .to_vec();
        assert_eq!(to_path(&keys), "user[0]['zip-code'].name");
    }

    #[test]
    fn to_path_of_the_self_key_is_empty() {
        assert_eq!(to_path(&[String::new()]), "");
    }

    #[test]
    fn round_trips_identifier_sequences() {
        let keys: Vec<String> = ["alpha", "beta2", "_gamma"].map(String::from).to_vec();
        let path = keys.join(".");
        assert_eq!(parse(&path).unwrap(), keys);
        assert_eq!(to_path(&keys), path);
    }

    #[test]
    fn reparsing_a_rebuilt_path_is_identity() {
        for path in ["a.b.c", "a[0].b", "a['x-y']", "users[12].addresses[0]['zip-code']"] {
            let keys = parse(path).unwrap();
            assert_eq!(parse(&to_path(&keys)).unwrap(), keys, "path: {path}");
        }
    }
}
