//! Highlighter properties.

use crate::common::{make_field, strip_highlights};
use proptest::prelude::*;
use serpkit::{highlight, HighlightableText, MatchSpan};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Markup-ish text. No `s`, so the highlight marker cannot occur by chance.
fn markup_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcé తె<>\"=/]{0,40}").unwrap()
}

fn spans_strategy() -> impl Strategy<Value = Vec<MatchSpan>> {
    let length = prop_oneof![
        4 => 0usize..8,
        1 => Just(usize::MAX),
        1 => (usize::MAX - 64)..=usize::MAX,
    ];
    prop::collection::vec((0usize..45, length), 0..6)
        .prop_map(|spans| spans.into_iter().map(|(o, l)| MatchSpan::new(o, l)).collect())
}

/// `(text, first, last)`: text containing an `<a title="...">` start tag
/// occupying character positions `first..last` (the closing `>` excluded).
fn tagged_text() -> impl Strategy<Value = (String, usize, usize)> {
    (
        "[a-z ]{0,10}",
        "[a-z ]{0,10}",
        "[a-z ]{1,10}",
    )
        .prop_map(|(before, title, body)| {
            let tag = format!(r#"<a title="{}">"#, title);
            let first = before.chars().count();
            let last = first + tag.chars().count() - 1;
            (format!("{}{}{}</a>", before, tag, body), first, last)
        })
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_no_spans_is_identity(value in markup_strategy()) {
        prop_assert_eq!(highlight(&HighlightableText::plain(value.clone())), value);
    }

    /// Only markers are ever inserted; removing them restores the input.
    #[test]
    fn prop_highlight_only_inserts_markers(value in markup_strategy(), spans in spans_strategy()) {
        let out = highlight(&HighlightableText::new(value.clone(), spans));
        prop_assert_eq!(strip_highlights(&out), value);
    }

    /// A span starting inside a start tag is never wrapped.
    #[test]
    fn prop_spans_inside_tags_are_skipped(
        (text, first, last) in tagged_text(),
        pick in any::<prop::sample::Index>(),
        length in 1usize..6,
    ) {
        let offset = first + pick.index(last - first);
        let field = make_field(&text, &[(offset, length)]);
        prop_assert_eq!(highlight(&field), text);
    }

    /// Spans in plain text are always wrapped, one marker pair each.
    #[test]
    fn prop_spans_in_plain_text_are_wrapped(
        words in prop::collection::vec("[a-z]{1,6}", 1..8),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..4),
    ) {
        let text = words.join(" ");
        let starts: Vec<usize> = text
            .char_indices()
            .filter(|&(i, c)| c != ' ' && (i == 0 || text.as_bytes()[i - 1] == b' '))
            .map(|(i, _)| i)
            .collect();
        let mut chosen: Vec<usize> = picks.iter().map(|p| starts[p.index(starts.len())]).collect();
        chosen.sort_unstable();
        chosen.dedup();

        let spans: Vec<(usize, usize)> = chosen.iter().map(|&o| (o, 1)).collect();
        let out = highlight(&make_field(&text, &spans));
        prop_assert_eq!(out.matches(r#"<span class="highlight">"#).count(), chosen.len());
    }
}
