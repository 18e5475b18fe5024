// Copyright (C) 2025 practicalace. Licensed under the GNU AGPLv3.
//! Marker-based section location over documents produced by our own
//! templating convention. This is deliberately not a general HTML parser:
//! callers name the exact structural markers they expect, and a miss is an
//! explicit `None` for them to surface.
use std::ops::Range;

/// Byte range of the text between the first `start` marker and the next
/// `end` marker, excluding both markers.
pub fn locate_between(doc: &str, start: &str, end: &str) -> Option<Range<usize>> {
    let from = doc.find(start)? + start.len();
    let to = doc[from..].find(end)? + from;
    Some(from..to)
}

/// Like [`locate_between`], but the range includes both markers.
pub fn locate_enclosing(doc: &str, start: &str, end: &str) -> Option<Range<usize>> {
    let from = doc.find(start)?;
    let inner = from + start.len();
    let to = doc[inner..].find(end)? + inner + end.len();
    Some(from..to)
}

/// Byte range of the body of the first CSS rule whose selector starts with
/// `selector`, excluding the braces.
pub fn locate_rule_body(css: &str, selector: &str) -> Option<Range<usize>> {
    let at = css.find(selector)?;
    let open = css[at..].find('{')? + at + 1;
    let close = css[open..].find('}')? + open;
    Some(open..close)
}

/// Byte range of one CSS declaration inside `range`, from the property name
/// through its terminating semicolon.
pub fn locate_declaration(css: &str, range: Range<usize>, property: &str) -> Option<Range<usize>> {
    let body = &css[range.clone()];
    let from = body.find(property)? + range.start;
    let to = css[from..].find(';')? + from + 1;
    Some(from..to)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "<style>.class-header { color: red; background: blue; }</style><p>hi</p>";

    #[test]
    fn test_locate_between() {
        let range = locate_between(DOC, "<style>", "</style>").unwrap();
        assert_eq!(
            &DOC[range],
            ".class-header { color: red; background: blue; }"
        );
    }

    #[test]
    fn test_locate_enclosing_includes_markers() {
        let range = locate_enclosing(DOC, "<p>", "</p>").unwrap();
        assert_eq!(&DOC[range], "<p>hi</p>");
    }

    #[test]
    fn test_locate_missing_marker() {
        assert!(locate_between(DOC, "<script>", "</script>").is_none());
        assert!(locate_between(DOC, "<p>", "</div>").is_none());
    }

    #[test]
    fn test_locate_rule_body_and_declaration() {
        let body = locate_rule_body(DOC, ".class-header").unwrap();
        assert_eq!(&DOC[body.clone()], " color: red; background: blue; ");

        let decl = locate_declaration(DOC, body, "background:").unwrap();
        assert_eq!(&DOC[decl], "background: blue;");
    }

    #[test]
    fn test_locate_declaration_outside_rule() {
        let body = locate_rule_body(DOC, ".class-header").unwrap();
        assert!(locate_declaration(DOC, body, "border:").is_none());
    }
}
