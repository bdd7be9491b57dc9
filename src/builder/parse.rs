//! Parser for plain-text transition listings.
//!
//! One transition per line, written `source symbol target` and separated
//! by whitespace. Blank lines are skipped and `#` starts a comment.
//!
//! ```text
//! # arm the system
//! Disarmed arm_home Armed_Home
//! Armed_Home disarm Disarmed
//! ```

use super::error::BuildError;

/// A parsed `(source, symbol, target)` triple.
pub type TransitionLine = (String, String, String);

/// Parse every transition in `text`.
///
/// # Example
///
/// ```rust
/// use dfa_engine::builder::parse_transitions;
///
/// let lines = parse_transitions("q0 a q1\n\n# loop\nq1 a q1").unwrap();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0], ("q0".to_string(), "a".to_string(), "q1".to_string()));
/// ```
pub fn parse_transitions(text: &str) -> Result<Vec<TransitionLine>, BuildError> {
    let mut parsed = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [source, symbol, target] => parsed.push((
                source.to_string(),
                symbol.to_string(),
                target.to_string(),
            )),
            _ => {
                return Err(BuildError::Parse {
                    line: index + 1,
                    content: raw.to_string(),
                    reason: format!("expected 3 fields, found {}", fields.len()),
                })
            }
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triples_and_skips_comments() {
        let text = "
            # security panel
            Disarmed arm_home Armed_Home   # arm
            Armed_Home   disarm Disarmed
        ";

        let lines = parse_transitions(text).unwrap();
        assert_eq!(
            lines,
            vec![
                (
                    "Disarmed".to_string(),
                    "arm_home".to_string(),
                    "Armed_Home".to_string()
                ),
                (
                    "Armed_Home".to_string(),
                    "disarm".to_string(),
                    "Disarmed".to_string()
                ),
            ]
        );
    }

    #[test]
    fn empty_text_parses_to_nothing() {
        assert!(parse_transitions("").unwrap().is_empty());
        assert!(parse_transitions("\n  \n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_count_reports_line() {
        let result = parse_transitions("q0 a q1\nq1 b\n");

        assert_eq!(
            result,
            Err(BuildError::Parse {
                line: 2,
                content: "q1 b".to_string(),
                reason: "expected 3 fields, found 2".to_string(),
            })
        );
    }

    #[test]
    fn parse_error_message() {
        let err = parse_transitions("a b c d").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 1: expected 3 fields, found 4 (got \"a b c d\")"
        );
    }
}
