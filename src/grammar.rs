//! Single-pass grammar validation for path expressions.
//!
//! The scanner walks the path one character at a time with an explicit mode
//! enum and deliberate lookahead, so every rejection can name the exact
//! offending character and its 0-based position.

use crate::error::PathError;

/// The quote character all quoted keys are normalized to before validation.
pub(crate) const QUOTE: char = '\'';

/// Scanner state. At most one bracket context is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    /// Outside any bracket.
    Bare,
    /// Between the opening quote and the closing quote of a `['...']` key.
    QuotedKey,
    /// Between `[` and `]` of a numeric index.
    NumericIndex,
}

/// Rewrites double quotes to the canonical quote character, making both
/// spellings of a quoted key identical to the validator and tokenizer.
pub(crate) fn normalize(path: &str) -> String {
    path.replace('"', "'")
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// The characters legal in bare mode. Quoted-key content is checked by the
/// quoted-mode rules instead, which is what permits keys like `['x-y']`.
fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '[' | ']') || c == QUOTE
}

fn err(path: &str, position: usize, message: impl Into<String>) -> PathError {
    PathError::Grammar {
        path: path.to_string(),
        position,
        message: message.into(),
    }
}

/// Validates a quote-normalized path expression against the grammar.
///
/// Accepts the empty path (the self-reference). Any violation reports the
/// 0-based character position together with what was expected there.
pub(crate) fn validate(path: &str) -> Result<(), PathError> {
    let chars: Vec<char> = path.chars().collect();
    let mut mode = ScanMode::Bare;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match mode {
            ScanMode::Bare => {
                if !is_bare_char(c) {
                    return Err(err(
                        path,
                        i,
                        format!("unexpected character '{c}'; expected a letter, digit, '_', '.', '[' or ']'"),
                    ));
                }
                match c {
                    '.' => {
                        if i == 0 {
                            return Err(err(path, 0, "a path may not begin with '.'"));
                        }
                        match chars.get(i + 1) {
                            Some(&n) if is_identifier_start(n) => {}
                            Some(&n) => {
                                return Err(err(
                                    path,
                                    i + 1,
                                    format!("'{n}' may not follow '.'; expected a letter or '_'"),
                                ));
                            }
                            None => {
                                return Err(err(path, i, "expected a letter or '_' to follow '.'"));
                            }
                        }
                    }
                    '[' => match chars.get(i + 1) {
                        Some(n) if n.is_ascii_digit() => mode = ScanMode::NumericIndex,
                        Some(&QUOTE) => {
                            match chars.get(i + 2) {
                                Some(&n) if is_identifier_start(n) => {}
                                Some(&n) => {
                                    return Err(err(
                                        path,
                                        i + 2,
                                        format!("'{n}' may not start a quoted key; expected a letter or '_'"),
                                    ));
                                }
                                None => {
                                    return Err(err(
                                        path,
                                        i + 1,
                                        "expected a letter or '_' to start a quoted key",
                                    ));
                                }
                            }
                            mode = ScanMode::QuotedKey;
                            // The opening quote is consumed together with the '['.
                            i += 1;
                        }
                        Some(&n) => {
                            return Err(err(
                                path,
                                i + 1,
                                format!("'{n}' may not follow '['; expected a number or a quote"),
                            ));
                        }
                        None => {
                            return Err(err(path, i, "expected a number or a quote to follow '['"));
                        }
                    },
                    ']' => return Err(err(path, i, "expected '[' to precede ']'")),
                    QUOTE => {
                        return Err(err(path, i, "a quote may only appear inside brackets"));
                    }
                    _ => {}
                }
            }
            ScanMode::QuotedKey => match c {
                QUOTE => match chars.get(i + 1) {
                    Some(&']') => {
                        check_after_bracket(path, &chars, i + 1)?;
                        mode = ScanMode::Bare;
                        // The ']' is consumed together with the closing quote.
                        i += 1;
                    }
                    Some(&n) => {
                        return Err(err(
                            path,
                            i + 1,
                            format!("'{n}' may not follow a closing quote; expected ']'"),
                        ));
                    }
                    None => {
                        return Err(err(path, i, "expected ']' to follow the closing quote"));
                    }
                },
                '.' | '[' | ']' => {
                    return Err(err(path, i, format!("'{c}' may not appear inside a quoted key")));
                }
                _ => {}
            },
            ScanMode::NumericIndex => match c {
                ']' => {
                    check_after_bracket(path, &chars, i)?;
                    mode = ScanMode::Bare;
                }
                c if c.is_ascii_digit() => {}
                c => {
                    return Err(err(
                        path,
                        i,
                        format!("number expected inside of brackets, found '{c}'"),
                    ));
                }
            },
        }
        i += 1;
    }

    if mode != ScanMode::Bare {
        return Err(err(path, chars.len(), "unterminated bracket at end of path"));
    }
    Ok(())
}

/// A closing bracket must be followed by '.', '[' or the end of the path.
/// Anything else would smuggle a ']' into the middle of a tokenized key.
fn check_after_bracket(path: &str, chars: &[char], bracket: usize) -> Result<(), PathError> {
    match chars.get(bracket + 1) {
        None | Some(&'.') | Some(&'[') => Ok(()),
        Some(&n) => Err(err(
            path,
            bracket + 1,
            format!("'{n}' may not follow ']'; expected '.', '[' or end of path"),
        )),
    }
}
