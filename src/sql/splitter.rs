//! Statement splitting on top-level semicolons.
//!
//! A user-authored blob may hold several semicolon-delimited statements; each
//! must be scanned independently by the safety check. Semicolons inside
//! string literals, quoted identifiers, comments or parenthesized blocks do
//! not split. The scanner is a small state machine, tolerant of malformed
//! input (an unterminated literal simply swallows the rest of the blob into
//! the final statement).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Normal,
    LineComment,
    BlockComment,
    SingleQuote,
    DoubleQuote,
}

/// Split `sql` into individual statement texts.
///
/// Statements are trimmed; empty pieces (e.g. after a trailing semicolon)
/// are dropped. A trailing statement without a terminator is kept. Splitting
/// an already-single statement returns it unchanged aside from whitespace.
pub fn split_statements(sql: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut state = ScanState::Normal;
    let mut depth: usize = 0;
    let mut seg_start = 0;

    let bytes = sql.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            ScanState::Normal => match b {
                b'-' if bytes.get(i + 1) == Some(&b'-') => {
                    state = ScanState::LineComment;
                    i += 2;
                    continue;
                }
                b'/' if bytes.get(i + 1) == Some(&b'*') => {
                    state = ScanState::BlockComment;
                    i += 2;
                    continue;
                }
                b'\'' => state = ScanState::SingleQuote,
                b'"' => state = ScanState::DoubleQuote,
                b'(' => depth += 1,
                b')' => depth = depth.saturating_sub(1),
                b';' if depth == 0 => {
                    let piece = sql[seg_start..i].trim();
                    if !piece.is_empty() {
                        out.push(piece);
                    }
                    seg_start = i + 1;
                }
                _ => {}
            },
            ScanState::LineComment => {
                if b == b'\n' {
                    state = ScanState::Normal;
                }
            }
            ScanState::BlockComment => {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    state = ScanState::Normal;
                    i += 2;
                    continue;
                }
            }
            // Quote toggling also covers the doubled-quote escape: the pair
            // closes and immediately reopens the literal, which leaves any
            // interior semicolon protected either way.
            ScanState::SingleQuote => {
                if b == b'\'' {
                    state = ScanState::Normal;
                }
            }
            ScanState::DoubleQuote => {
                if b == b'"' {
                    state = ScanState::Normal;
                }
            }
        }
        i += 1;
    }

    let tail = sql[seg_start..].trim();
    if !tail.is_empty() {
        out.push(tail);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn splits_on_top_level_semicolons() {
        let sql = "'distraction'; delete from table; SELECT 1+1 AS TWO; drop view foo;";
        assert_eq!(
            split_statements(sql),
            vec![
                "'distraction'",
                "delete from table",
                "SELECT 1+1 AS TWO",
                "drop view foo",
            ]
        );
    }

    #[rstest]
    #[case("SELECT 1")]
    #[case("SELECT * FROM t WHERE a = 'x'")]
    fn single_statement_is_unchanged(#[case] sql: &str) {
        assert_eq!(split_statements(sql), vec![sql]);
    }

    #[test]
    fn trailing_statement_without_terminator_is_kept() {
        assert_eq!(
            split_statements("SELECT 1; SELECT 2"),
            vec!["SELECT 1", "SELECT 2"]
        );
    }

    #[rstest]
    #[case("SELECT 'a;b' FROM t", 1)]
    #[case("SELECT 1 -- no; split\n, 2", 1)]
    #[case("SELECT /* a;b */ 1", 1)]
    #[case("SELECT \"odd;name\" FROM t", 1)]
    #[case("SELECT f(1; 2)", 1)]
    fn protected_semicolons_do_not_split(#[case] sql: &str, #[case] count: usize) {
        assert_eq!(split_statements(sql).len(), count);
    }

    #[test]
    fn doubled_quote_escape_keeps_semicolon_protected() {
        assert_eq!(split_statements("SELECT 'it''s; one'").len(), 1);
    }

    #[test]
    fn rejoin_reconstructs_content() {
        let sql = "SELECT 1; SELECT 2; SELECT 3";
        assert_eq!(split_statements(sql).join("; "), sql);
    }

    #[test]
    fn empty_and_blank_input() {
        assert!(split_statements("").is_empty());
        assert!(split_statements(" ;;  ; ").is_empty());
    }

    #[test]
    fn unterminated_literal_swallows_rest() {
        assert_eq!(split_statements("SELECT 'a; SELECT 2").len(), 1);
    }
}
