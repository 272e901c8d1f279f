//! Natural, locale-style label comparison: case-insensitive at the primary
//! level, digit runs compared by numeric value ("Item 2" < "Item 10"),
//! lower case before upper case only as a final tie-break.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    /// A run of ASCII digits.
    Digits(&'a str),
    Char(char),
}

fn tokens(s: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut iter = s.char_indices().peekable();
    while let Some((start, ch)) = iter.next() {
        if ch.is_ascii_digit() {
            let mut end = start + ch.len_utf8();
            while let Some(&(i, c)) = iter.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                end = i + c.len_utf8();
                iter.next();
            }
            out.push(Token::Digits(&s[start..end]));
        } else {
            out.push(Token::Char(ch));
        }
    }
    out
}

/// Whitespace < punctuation/symbols < digits < letters.
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_ascii_digit() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trim = a.trim_start_matches('0');
    let b_trim = b.trim_start_matches('0');
    a_trim
        .len()
        .cmp(&b_trim.len())
        .then_with(|| a_trim.cmp(b_trim))
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn primary_cmp(a: &str, b: &str) -> Ordering {
    let ta = tokens(a);
    let tb = tokens(b);
    for (x, y) in ta.iter().zip(tb.iter()) {
        let ord = match (x, y) {
            (Token::Digits(da), Token::Digits(db)) => cmp_digit_runs(da, db),
            (Token::Digits(_), Token::Char(c)) => 2.cmp(&char_class(*c)),
            (Token::Char(c), Token::Digits(_)) => char_class(*c).cmp(&2),
            (Token::Char(ca), Token::Char(cb)) => char_class(*ca)
                .cmp(&char_class(*cb))
                .then_with(|| fold(*ca).cmp(&fold(*cb))),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    ta.len().cmp(&tb.len())
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        return match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => ca.cmp(&cb),
        };
    }
    a.len().cmp(&b.len())
}

/// Compare two labels the way a numeric-aware locale collator would.
/// Returns `Equal` only for identical strings.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(a, b)
        .then_with(|| case_cmp(a, b))
        .then_with(|| a.cmp(b))
}

/// Leading-float parse: the longest numeric prefix after optional
/// whitespace (`"12px"` → 12, `"3.5 kg"` → 3.5, `"abc"` → `None`).
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let bytes = t.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    // Optional exponent, only when complete.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    t[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs_compare_numerically() {
        assert_eq!(natural_cmp("Item 2", "Item 10"), Ordering::Less);
        assert_eq!(natural_cmp("Item 10", "Item 9"), Ordering::Greater);
        assert_eq!(natural_cmp("a02", "a2"), Ordering::Less);
    }

    #[test]
    fn case_is_secondary() {
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(natural_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Greater);
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn digits_before_letters_and_spaces_first() {
        assert_eq!(natural_cmp("9", "a"), Ordering::Less);
        assert_eq!(natural_cmp("a b", "ab"), Ordering::Less);
    }

    #[test]
    fn float_prefix() {
        assert_eq!(parse_float_prefix("12px"), Some(12.0));
        assert_eq!(parse_float_prefix("  -3.5 kg"), Some(-3.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("1e3x"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("-"), None);
    }
}
