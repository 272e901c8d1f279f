//! Text measurement and truncation utilities.

/// Suffix appended to truncated labels.
pub const ELLIPSIS: char = '…';

/// Heuristic: estimate pixel width of text (no font metrics available here).
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    estimate_chars_width_px(text.chars().count(), font_px)
}

/// Same estimate for a character count.
pub fn estimate_chars_width_px(chars: usize, font_px: f64) -> f64 {
    (chars as f64 * font_px * 0.60).ceil()
}

/// Keep at most `max_chars` characters, marking a cut with a trailing ellipsis.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push(ELLIPSIS);
    out
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: f64, max_px: f64) -> String {
    let mut out = String::new();
    let mut count = 0usize;
    for ch in text.chars() {
        if estimate_chars_width_px(count + 1, font_px) > max_px {
            // The ellipsis takes the last visible character's slot.
            if count > 0 {
                out.pop();
                out.push(ELLIPSIS);
            }
            return out;
        }
        out.push(ch);
        count += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_by_chars() {
        assert_eq!(truncate_label("January", 3), "Jan…");
        assert_eq!(truncate_label("Jan", 3), "Jan");
        assert_eq!(truncate_label("Überweisung", 2), "Üb…");
        assert_eq!(truncate_label("", 2), "");
    }

    #[test]
    fn truncate_by_width() {
        // 10px font → 6px per char.
        assert_eq!(truncate_to_width("abcdef", 10.0, 36.0), "abcdef");
        assert_eq!(truncate_to_width("abcdefgh", 10.0, 36.0), "abcde…");
        assert_eq!(truncate_to_width("abc", 10.0, 3.0), "");
    }

    #[test]
    fn width_estimate_scales_with_font() {
        assert_eq!(estimate_text_width_px("abcd", 10.0), 24.0);
        assert!(estimate_text_width_px("abcd", 14.0) > estimate_text_width_px("abcd", 10.0));
    }
}
