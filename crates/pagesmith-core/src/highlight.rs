//! Minimal line-oriented syntax highlighter for the artifact code view.
//!
//! Pure and deterministic: one input line decomposes into a sequence of
//! [`HighlightSpan`]s whose concatenated text reproduces the line exactly.
//! Rules are applied in a fixed order and a later rule never reclaims text
//! already claimed by an earlier one, so e.g. keywords inside string literals
//! stay string-colored.

use std::sync::LazyLock;

use regex::Regex;

/// Token category assigned to a span of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Unclassified text
    Plain,
    /// `// ...` trailing comment or `{/* ... */}` block-comment line
    Comment,
    /// Quoted string literal, quotes included
    Str,
    /// Language keyword (`const`, `return`, ...)
    Keyword,
    /// Capitalized identifier (component-like name)
    Type,
    /// Tag name directly after `<` or `</`
    Tag,
    /// Attribute name directly before `=`
    Attr,
    /// Literal `{` or `}`
    Brace,
}

/// One styled slice of a source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl HighlightSpan {
    fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// The regex crate has no backreferences, so the single-or-double-quote
// literal is an alternation instead of `(['"])(.*?)\1`.
static STRING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap());

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(import|from|export|default|function|return|const|let|var|if|else|switch|case|break|interface|type)\b",
    )
    .unwrap()
});

static TYPE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Z][a-zA-Z0-9]+\b").unwrap());

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?(\w+)").unwrap());

static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([a-zA-Z-]+)=").unwrap());

static BRACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[{}]").unwrap());

/// Decompose one source line into styled spans.
///
/// Rule order (earlier rules win):
/// 1. A line whose trimmed text starts with `{/*` is entirely a comment.
/// 2. A trailing `//` comment is split off at the first occurrence and
///    re-appended as the final span.
/// 3. String literals, keywords, capitalized identifiers, tag names,
///    attribute names, braces -- in that order, over the remaining prefix.
///
/// An empty line yields a single plain span holding one space so the line
/// still occupies a visual row.
pub fn highlight_line(line: &str) -> Vec<HighlightSpan> {
    if line.is_empty() {
        return vec![HighlightSpan::new(SpanKind::Plain, " ")];
    }

    // Block-comment line takes precedence over every other rule.
    if line.trim_start().starts_with("{/*") {
        return vec![HighlightSpan::new(SpanKind::Comment, line)];
    }

    // Hold a trailing line comment aside; only the prefix is tokenized.
    let (code, comment) = match line.find("//") {
        Some(ix) => (&line[..ix], Some(&line[ix..])),
        None => (line, None),
    };

    let mut spans = tokenize(code);
    if let Some(comment) = comment {
        spans.push(HighlightSpan::new(SpanKind::Comment, comment));
    }
    spans
}

/// Apply the ordered token rules to `code` via a byte-claim mask.
///
/// Each rule only claims byte ranges no earlier rule has touched, which is
/// what keeps the categories non-overlapping.
fn tokenize(code: &str) -> Vec<HighlightSpan> {
    let mut mask: Vec<Option<SpanKind>> = vec![None; code.len()];

    claim_matches(code, &mut mask, &STRING_RE, None, SpanKind::Str);
    claim_matches(code, &mut mask, &KEYWORD_RE, None, SpanKind::Keyword);
    claim_matches(code, &mut mask, &TYPE_RE, None, SpanKind::Type);
    claim_matches(code, &mut mask, &TAG_RE, Some(1), SpanKind::Tag);
    claim_matches(code, &mut mask, &ATTR_RE, Some(1), SpanKind::Attr);
    claim_matches(code, &mut mask, &BRACE_RE, None, SpanKind::Brace);

    coalesce(code, &mask)
}

/// Claim every match of `re` (or its capture `group`) that falls entirely on
/// unclaimed bytes.
fn claim_matches(
    code: &str,
    mask: &mut [Option<SpanKind>],
    re: &Regex,
    group: Option<usize>,
    kind: SpanKind,
) {
    for caps in re.captures_iter(code) {
        let m = match group {
            Some(g) => match caps.get(g) {
                Some(m) => m,
                None => continue,
            },
            None => caps.get(0).expect("group 0 always present"),
        };
        let range = m.start()..m.end();
        if mask[range.clone()].iter().all(|k| k.is_none()) {
            for slot in &mut mask[range] {
                *slot = Some(kind);
            }
        }
    }
}

/// Collapse the byte mask into contiguous spans. Mask boundaries always fall
/// on regex match edges, which are char boundaries, so slicing is safe.
fn coalesce(code: &str, mask: &[Option<SpanKind>]) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut start = 0usize;
    while start < code.len() {
        let kind = mask[start];
        let mut end = start + 1;
        while end < code.len() && mask[end] == kind {
            end += 1;
        }
        spans.push(HighlightSpan::new(
            kind.unwrap_or(SpanKind::Plain),
            &code[start..end],
        ));
        start = end;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Concatenated span text must reproduce the input exactly.
    fn reassemble(spans: &[HighlightSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_line_placeholder() {
        let spans = highlight_line("");
        assert_eq!(spans, vec![HighlightSpan::new(SpanKind::Plain, " ")]);
    }

    #[test]
    fn test_whitespace_line_is_not_replaced() {
        let spans = highlight_line("    ");
        assert_eq!(reassemble(&spans), "    ");
    }

    #[test]
    fn test_lossless_reassembly() {
        let lines = [
            "import React from 'react';",
            "export default function AstraMindLanding() {",
            "  <nav className=\"flex items-center\">",
            "    Get Started <ArrowUp className=\"rotate-90\" />",
            "const x = \"hi\"; // note",
            "}",
        ];
        for line in lines {
            assert_eq!(reassemble(&highlight_line(line)), line, "line: {line}");
        }
    }

    #[test]
    fn test_plain_text_single_span() {
        // A line with no markup-triggering tokens stays one plain span.
        let spans = highlight_line("just some words here");
        assert_eq!(
            spans,
            vec![HighlightSpan::new(SpanKind::Plain, "just some words here")]
        );
    }

    #[test]
    fn test_keyword_string_comment_order() {
        let spans = highlight_line("const x = \"hi\"; // note");

        let keyword_ix = spans
            .iter()
            .position(|s| s.kind == SpanKind::Keyword && s.text == "const")
            .expect("keyword span");
        let string_ix = spans
            .iter()
            .position(|s| s.kind == SpanKind::Str && s.text == "\"hi\"")
            .expect("string span");
        let comment_ix = spans
            .iter()
            .position(|s| s.kind == SpanKind::Comment && s.text == "// note")
            .expect("comment span");

        assert!(keyword_ix < string_ix);
        assert!(string_ix < comment_ix);
        // Trailing comment is always the last span.
        assert_eq!(comment_ix, spans.len() - 1);
    }

    #[test]
    fn test_block_comment_precedence() {
        let spans = highlight_line("  {/* Navigation */}");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Comment);
        assert_eq!(spans[0].text, "  {/* Navigation */}");
    }

    #[test]
    fn test_comment_claims_rest_of_line() {
        let spans = highlight_line("let y = 1; // trailing const \"text\"");
        let comment = spans.last().unwrap();
        assert_eq!(comment.kind, SpanKind::Comment);
        // Nothing inside the comment is tokenized further.
        assert_eq!(comment.text, "// trailing const \"text\"");
    }

    #[test]
    fn test_keyword_inside_string_stays_string() {
        let spans = highlight_line("const s = 'return value';");
        let string = spans
            .iter()
            .find(|s| s.kind == SpanKind::Str)
            .expect("string span");
        assert_eq!(string.text, "'return value'");
        // Only the leading `const` is a keyword; `return` was claimed by the
        // string rule first.
        let keywords: Vec<_> = spans.iter().filter(|s| s.kind == SpanKind::Keyword).collect();
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords[0].text, "const");
    }

    #[test]
    fn test_capitalized_identifier_is_type() {
        let spans = highlight_line("return AstraMind;");
        assert!(spans
            .iter()
            .any(|s| s.kind == SpanKind::Type && s.text == "AstraMind"));
    }

    #[test]
    fn test_tag_names() {
        let spans = highlight_line("<div><span>hi</span></div>");
        let tags: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == SpanKind::Tag)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(tags, vec!["div", "span", "span", "div"]);
        // Brackets themselves stay plain.
        assert!(spans
            .iter()
            .any(|s| s.kind == SpanKind::Plain && s.text.contains('<')));
    }

    #[test]
    fn test_capitalized_tag_claimed_as_type() {
        // Type rule runs before the tag rule and wins.
        let spans = highlight_line("<Sparkles />");
        assert!(spans
            .iter()
            .any(|s| s.kind == SpanKind::Type && s.text == "Sparkles"));
        assert!(!spans.iter().any(|s| s.kind == SpanKind::Tag));
    }

    #[test]
    fn test_attribute_name_before_equals() {
        let spans = highlight_line("<a href=\"#\">");
        let attr = spans
            .iter()
            .find(|s| s.kind == SpanKind::Attr)
            .expect("attr span");
        assert_eq!(attr.text, "href");
        // The `=` itself stays plain.
        assert!(spans
            .iter()
            .any(|s| s.kind == SpanKind::Plain && s.text.contains('=')));
    }

    #[test]
    fn test_braces() {
        let spans = highlight_line("function f() { }");
        let braces: Vec<_> = spans
            .iter()
            .filter(|s| s.kind == SpanKind::Brace)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(braces, vec!["{", "}"]);
    }

    #[test]
    fn test_deterministic() {
        let line = "export default function App() { return <App prop=\"x\" />; } // app";
        assert_eq!(highlight_line(line), highlight_line(line));
    }

    #[test]
    fn test_unicode_plain_text() {
        let line = "— dashes and ünïcode –";
        assert_eq!(reassemble(&highlight_line(line)), line);
    }
}
