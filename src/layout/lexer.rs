//! Line scanner for layout directives using logos

use logos::Logos;

/// Token type for a single layout line
///
/// Anything that isn't a comment or a closed `<...>` span is skipped or
/// surfaces as a lexer error, both of which the scanner ignores.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[^<#\n]+")]
pub enum LineToken<'a> {
    // Double-hash starts a comment running to the end of the line
    #[regex(r"##[^\n]*")]
    Comment,

    // The body may contain single '#' characters but never "##"
    #[regex(r"<(?:[^>#\n]|#[^>#\n])*#?>", |lex| {
        let s = lex.slice();
        &s[1..s.len() - 1]
    })]
    Directive(&'a str),
}

/// Find the body of the first directive on a line, ignoring comments
pub fn scan_directive(line: &str) -> Option<&str> {
    for token in LineToken::lexer(line) {
        match token {
            Ok(LineToken::Directive(body)) => return Some(body),
            Ok(LineToken::Comment) => return None,
            Err(()) => continue,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_directive() {
        assert_eq!(
            scan_directive(r#"<id:"a"; posX:10%>"#),
            Some(r#"id:"a"; posX:10%"#)
        );
    }

    #[test]
    fn test_first_span_wins() {
        assert_eq!(scan_directive("junk <id:a> <id:b>"), Some("id:a"));
        assert_eq!(scan_directive("<id:a<b>"), Some("id:a<b"));
    }

    #[test]
    fn test_comment_cuts_line() {
        assert_eq!(scan_directive("## <id:a>"), None);
        assert_eq!(scan_directive("<id:a> ## trailing"), Some("id:a"));
        // The comment starts before the closing bracket
        assert_eq!(scan_directive("<id:a ## b>"), None);
    }

    #[test]
    fn test_comment_hides_later_directive() {
        assert_eq!(scan_directive("<x ## <id:b>"), None);
        assert_eq!(scan_directive("junk ## <id:b>"), None);
    }

    #[test]
    fn test_single_hash_inside_body() {
        assert_eq!(scan_directive("<id:#a#>"), Some("id:#a#"));
    }

    #[test]
    fn test_non_directives() {
        assert_eq!(scan_directive(""), None);
        assert_eq!(scan_directive("just text"), None);
        assert_eq!(scan_directive("<unterminated"), None);
        assert_eq!(scan_directive("only > closing"), None);
        assert_eq!(scan_directive("# single hash"), None);
    }
}
