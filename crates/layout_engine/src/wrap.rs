//! Greedy text wrapping against measured advance widths
//!
//! Literal newlines are hard breaks: each segment between them is a
//! paragraph, wrapped independently, and an empty segment yields one
//! empty line so blank-line spacing survives. Within a paragraph, break
//! opportunities come from the Unicode line-breaking rules; a single
//! token wider than the bound is split at grapheme-cluster boundaries so
//! every produced line measures within the limit.

use std::collections::VecDeque;

use text_metrics::Font;
use unicode_linebreak::linebreaks;
use unicode_segmentation::UnicodeSegmentation;

/// Wrap `text` to `max_width` points. Outer level: paragraphs, inner
/// level: lines. Deterministic, no side effects.
pub fn wrap(text: &str, max_width: f32, font: Font, size: f32) -> Vec<Vec<String>> {
    wrap_indented(text, max_width, max_width, font, size)
}

/// Wrap with a distinct width for the first line of each paragraph.
///
/// Models the ABNT first-line indent: the indent narrows only the first
/// line, continuation lines use the full paragraph width.
pub fn wrap_indented(
    text: &str,
    first_width: f32,
    rest_width: f32,
    font: Font,
    size: f32,
) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|segment| wrap_segment(segment, first_width, rest_width, font, size))
        .collect()
}

fn wrap_segment(
    segment: &str,
    first_width: f32,
    rest_width: f32,
    font: Font,
    size: f32,
) -> Vec<String> {
    let segment = segment.trim_end();
    if segment.is_empty() {
        return vec![String::new()];
    }

    // Tokens run between consecutive break opportunities, trailing
    // whitespace attached to the preceding token.
    let mut tokens: VecDeque<String> = VecDeque::new();
    let mut prev = 0;
    for (idx, _) in linebreaks(segment) {
        if idx > prev {
            tokens.push_back(segment[prev..idx].to_string());
            prev = idx;
        }
    }
    if prev < segment.len() {
        tokens.push_back(segment[prev..].to_string());
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    while let Some(token) = tokens.pop_front() {
        let available = if lines.is_empty() { first_width } else { rest_width };

        // Whitespace at the start of a line carries no content
        if current.is_empty() && token.trim().is_empty() {
            continue;
        }

        let candidate = format!("{current}{token}");
        if font.measure(candidate.trim_end(), size) <= available {
            current = candidate;
            continue;
        }

        if !current.trim().is_empty() {
            lines.push(current.trim_end().to_string());
            current.clear();
            tokens.push_front(token);
            continue;
        }

        // A lone token wider than the line: split at cluster boundaries
        let (head, tail) = split_to_width(&token, available, font, size);
        lines.push(head.trim_end().to_string());
        if !tail.is_empty() {
            tokens.push_front(tail);
        }
    }

    if !current.trim().is_empty() {
        lines.push(current.trim_end().to_string());
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Split `token` so the head fits `max_width`, keeping at least one
/// grapheme cluster in the head to guarantee progress.
fn split_to_width(token: &str, max_width: f32, font: Font, size: f32) -> (String, String) {
    let clusters: Vec<&str> = token.graphemes(true).collect();
    let mut split_at = 0;
    let mut width = 0.0;
    for (i, cluster) in clusters.iter().enumerate() {
        width += font.measure(cluster, size);
        if width > max_width {
            if i == 0 {
                split_at = 1;
            }
            break;
        }
        split_at = i + 1;
    }
    (
        clusters[..split_at].concat(),
        clusters[split_at..].concat(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SIZE: f32 = 12.0;

    fn all_lines(paragraphs: &[Vec<String>]) -> Vec<&str> {
        paragraphs
            .iter()
            .flat_map(|p| p.iter().map(String::as_str))
            .collect()
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let wrapped = wrap("curto", 200.0, Font::Helvetica, SIZE);
        assert_eq!(wrapped, vec![vec!["curto".to_string()]]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let text = "a linha deve quebrar em espaços quando não couber";
        let wrapped = wrap(text, 80.0, Font::Helvetica, SIZE);
        assert_eq!(wrapped.len(), 1);
        assert!(wrapped[0].len() > 1);
        for line in &wrapped[0] {
            assert!(Font::Helvetica.measure(line, SIZE) <= 80.0 + 1e-3, "line too wide: {line:?}");
            assert!(!line.ends_with(' '), "trailing whitespace kept: {line:?}");
        }
    }

    #[test]
    fn newlines_are_hard_paragraph_breaks() {
        let wrapped = wrap("primeiro\n\nsegundo", 200.0, Font::Helvetica, SIZE);
        assert_eq!(wrapped.len(), 3);
        assert_eq!(wrapped[0], vec!["primeiro".to_string()]);
        assert_eq!(wrapped[1], vec![String::new()]);
        assert_eq!(wrapped[2], vec!["segundo".to_string()]);
    }

    #[test]
    fn over_long_token_is_split_to_fit() {
        let token = "x".repeat(120);
        let wrapped = wrap(&token, 60.0, Font::Helvetica, SIZE);
        assert_eq!(wrapped.len(), 1);
        assert!(wrapped[0].len() > 1);
        for line in &wrapped[0] {
            assert!(Font::Helvetica.measure(line, SIZE) <= 60.0 + 1e-3);
        }
        let rejoined: String = wrapped[0].concat();
        assert_eq!(rejoined, token);
    }

    #[test]
    fn first_line_width_applies_per_paragraph() {
        let text = "palavras repetidas para forçar quebra\noutro parágrafo com mais palavras";
        let wrapped = wrap_indented(text, 60.0, 120.0, Font::TimesRoman, SIZE);
        for paragraph in &wrapped {
            for (i, line) in paragraph.iter().enumerate() {
                let bound = if i == 0 { 60.0 } else { 120.0 };
                assert!(
                    Font::TimesRoman.measure(line, SIZE) <= bound + 1e-3,
                    "line {i} exceeds {bound}: {line:?}"
                );
            }
        }
    }

    #[test]
    fn empty_text_yields_one_empty_line() {
        let wrapped = wrap("", 100.0, Font::Helvetica, SIZE);
        assert_eq!(wrapped, vec![vec![String::new()]]);
    }

    proptest! {
        // Every produced line measures within the bound. The bound stays
        // above the widest single cluster at this size, which is all the
        // cluster splitter can guarantee.
        #[test]
        fn wrapped_lines_fit_the_bound(
            text in "[ -~\\u{00C0}-\\u{024F}\\u{0300}-\\u{036F}]{0,160}",
            max_width in 24.0f32..400.0,
        ) {
            let wrapped = wrap(&text, max_width, Font::Helvetica, SIZE);
            for line in all_lines(&wrapped) {
                prop_assert!(
                    Font::Helvetica.measure(line, SIZE) <= max_width + 1e-3,
                    "line {:?} wider than {}",
                    line,
                    max_width
                );
            }
        }

        #[test]
        fn paragraph_count_matches_newlines(text in "[a-z ]{0,40}(\n[a-z ]{0,40}){0,4}") {
            let wrapped = wrap(&text, 100.0, Font::TimesRoman, SIZE);
            prop_assert_eq!(wrapped.len(), text.split('\n').count());
        }
    }
}
