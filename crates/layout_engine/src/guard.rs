//! Page-overflow guard
//!
//! The guard is the pure half of the pagination contract: it decides
//! whether a block of the given height may start at the current cursor.
//! The stateful half (closing the page, resetting the cursor) belongs to
//! the plan builder in the export pipeline.
//!
//! The guard only prevents *starting* a block that would overflow. A
//! first line or image that still overflows on a fresh page is drawn
//! anyway and runs toward the physical page edge.

use crate::PageConfig;

/// True when a block of `required_height` starting at `cursor_y` would
/// pass the bottom content boundary.
pub fn overflows(cursor_y: f32, required_height: f32, config: &PageConfig) -> bool {
    cursor_y + required_height > config.content_bottom()
}

/// Height estimate for a block of wrapped text lines
pub fn text_block_height(line_count: usize, line_height: f32) -> f32 {
    line_count as f32 * line_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn block_fitting_exactly_does_not_overflow() {
        let config = PageConfig::plain();
        let cursor = config.content_top();
        let remaining = config.content_bottom() - cursor;
        assert!(!overflows(cursor, remaining, &config));
        assert!(overflows(cursor, remaining + 0.1, &config));
    }

    #[test]
    fn cursor_at_bottom_overflows_any_block() {
        let config = PageConfig::abnt();
        assert!(overflows(config.content_bottom(), 1.0, &config));
    }

    #[test]
    fn text_block_height_scales_with_lines() {
        assert_eq!(text_block_height(0, 18.0), 0.0);
        assert_eq!(text_block_height(3, 18.0), 54.0);
    }

    proptest! {
        // Once a height overflows, every larger height does too
        #[test]
        fn overflow_is_monotone_in_height(cursor in 0.0f32..900.0, h in 0.0f32..500.0, extra in 0.0f32..200.0) {
            let config = PageConfig::plain();
            if overflows(cursor, h, &config) {
                prop_assert!(overflows(cursor, h + extra, &config));
            }
        }
    }
}
