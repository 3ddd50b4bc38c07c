//! Shared test utilities for inspecting rendered markup.
//!
//! The renderer's output is plain HTML strings; these helpers slice it by
//! section and pull out attributes without an HTML parser. They assume
//! maud's output shape (double-quoted attributes, no whitespace around `=`).
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let html = page_body(Theme::Dark, &Catalog::standard(), &LinksConfig::default()).into_string();
//! let skills = section_html(&html, "skills");
//! assert_eq!(count(skills, "Network Security"), 1);
//! ```

/// The markup of the section (or footer) with `id`, up to its closing tag.
/// Panics if the id is not present.
pub fn section_html<'a>(html: &'a str, id: &str) -> &'a str {
    let marker = format!(r#"id="{id}""#);
    let start = html
        .find(&marker)
        .unwrap_or_else(|| panic!("section '{id}' not found"));
    let rest = &html[start..];
    let end = ["</section>", "</footer>"]
        .iter()
        .filter_map(|close| rest.find(close))
        .min()
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Every `class="..."` attribute value, in document order.
pub fn class_attrs(html: &str) -> Vec<&str> {
    let marker = r#"class=""#;
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(marker) {
        let after = &rest[pos + marker.len()..];
        let Some(end) = after.find('"') else { break };
        values.push(&after[..end]);
        rest = &after[end..];
    }
    values
}

/// Which of `needles` occur in `haystack`, ordered by position.
pub fn ordered_matches<'n>(haystack: &str, needles: &[&'n str]) -> Vec<&'n str> {
    let mut hits: Vec<(usize, &'n str)> = needles
        .iter()
        .flat_map(|needle| haystack.match_indices(*needle).map(move |(i, _)| (i, *needle)))
        .collect();
    hits.sort_by_key(|(i, _)| *i);
    hits.into_iter().map(|(_, n)| n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_html_stops_at_closing_tag() {
        let html = r#"<section id="a"><p>one</p></section><section id="b">two</section>"#;
        assert_eq!(section_html(html, "a"), r#"id="a"><p>one</p>"#);
        assert_eq!(section_html(html, "b"), r#"id="b">two"#);
    }

    #[test]
    fn class_attrs_in_order() {
        let html = r#"<div class="x y"><span class="z"></span></div>"#;
        assert_eq!(class_attrs(html), vec!["x y", "z"]);
    }

    #[test]
    fn ordered_matches_sorts_by_position() {
        assert_eq!(ordered_matches("b a b", &["a", "b"]), vec!["b", "a", "b"]);
    }
}
