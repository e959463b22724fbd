//! Font faces and measurement

use crate::widths;
use serde::{Deserialize, Serialize};

/// The built-in faces the exporter draws with.
///
/// Maps 1:1 onto the PDF painter's base-14 font handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
}

impl Font {
    fn table(self) -> &'static [u16; 95] {
        match self {
            // Oblique shares the upright widths
            Font::Helvetica | Font::HelveticaOblique => &widths::HELVETICA,
            Font::HelveticaBold => &widths::HELVETICA_BOLD,
            Font::TimesRoman => &widths::TIMES_ROMAN,
            Font::TimesBold => &widths::TIMES_BOLD,
            Font::TimesItalic => &widths::TIMES_ITALIC,
        }
    }

    /// Width used for characters outside the tables
    fn fallback_width(self) -> u16 {
        match self {
            Font::Helvetica | Font::HelveticaOblique => 556,
            Font::HelveticaBold => 611,
            Font::TimesRoman | Font::TimesItalic => 500,
            Font::TimesBold => 556,
        }
    }

    /// Advance width of one character in 1/1000 em units.
    ///
    /// Latin-1 accented letters fold to their base letter; the AFM
    /// composites carry the same advance as the base glyph. Combining
    /// marks take no advance of their own.
    pub fn char_width(self, ch: char) -> u16 {
        if is_combining_mark(ch) {
            return 0;
        }
        let ch = fold_accent(ch);
        match ch {
            ' '..='~' => self.table()[ch as usize - 32],
            '\u{2022}' => 350, // bullet
            _ => self.fallback_width(),
        }
    }

    /// Measured width of a string at the given size, in points
    pub fn measure(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }

    /// Baseline offset from the top of a line box, in points
    pub fn ascender(self, size: f32) -> f32 {
        match self {
            Font::Helvetica | Font::HelveticaBold | Font::HelveticaOblique => size * 0.718,
            Font::TimesRoman | Font::TimesBold | Font::TimesItalic => size * 0.683,
        }
    }

    /// Longest prefix of `text` whose measured width fits `max_width`.
    ///
    /// Used for single-line clipping (summary entries). Returns the whole
    /// string when it already fits.
    pub fn prefix_fitting(self, text: &str, size: f32, max_width: f32) -> &str {
        if self.measure(text, size) <= max_width {
            return text;
        }
        let mut width = 0.0;
        for (idx, ch) in text.char_indices() {
            width += self.char_width(ch) as f32 * size / 1000.0;
            if width > max_width {
                return &text[..idx];
            }
        }
        text
    }
}

/// Combining marks and variation selectors render onto the preceding
/// base glyph without advancing the pen
fn is_combining_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

/// Fold Latin-1 accented letters to their base letter for width lookup
fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        _ => ch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn measure_is_sum_of_char_widths() {
        // "Hi" in Helvetica: H=722, i=222 => 944/1000 em
        let w = Font::Helvetica.measure("Hi", 10.0);
        assert!((w - 9.44).abs() < 1e-4);
    }

    #[test]
    fn oblique_matches_upright_helvetica() {
        let text = "Fonte: https://example.com";
        assert_eq!(
            Font::Helvetica.measure(text, 12.0),
            Font::HelveticaOblique.measure(text, 12.0)
        );
    }

    #[test]
    fn accented_letters_measure_like_base() {
        assert_eq!(
            Font::TimesRoman.measure("Revolução", 12.0),
            Font::TimesRoman.measure("Revolucao", 12.0)
        );
    }

    #[test]
    fn combining_marks_take_no_advance() {
        // "e" + combining acute measures like the precomposed "é"
        assert_eq!(
            Font::Helvetica.measure("e\u{0301}", 12.0),
            Font::Helvetica.measure("é", 12.0)
        );
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let text = "Industrial";
        assert!(Font::TimesBold.measure(text, 12.0) > Font::TimesRoman.measure(text, 12.0));
    }

    #[test]
    fn prefix_fitting_returns_whole_string_when_it_fits() {
        assert_eq!(Font::Helvetica.prefix_fitting("abc", 12.0, 100.0), "abc");
    }

    #[test]
    fn prefix_fitting_clips_to_width() {
        let text = "aaaaaaaaaa"; // a = 556/1000 em, 6.672pt at 12pt
        let prefix = Font::Helvetica.prefix_fitting(text, 12.0, 20.0);
        assert!(!prefix.is_empty());
        assert!(prefix.len() < text.len());
        assert!(Font::Helvetica.measure(prefix, 12.0) <= 20.0);
    }

    proptest! {
        #[test]
        fn prefix_fitting_never_exceeds_width(text in "\\PC{0,60}", max_width in 10.0f32..200.0) {
            let prefix = Font::Helvetica.prefix_fitting(&text, 12.0, max_width);
            prop_assert!(Font::Helvetica.measure(prefix, 12.0) <= max_width + 1e-3);
        }

        #[test]
        fn measure_is_monotone_in_length(text in "[a-zA-Z ]{0,40}") {
            let full = Font::TimesRoman.measure(&text, 12.0);
            for (idx, _) in text.char_indices() {
                prop_assert!(Font::TimesRoman.measure(&text[..idx], 12.0) <= full + 1e-3);
            }
        }
    }
}
