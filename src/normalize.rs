//! Sign-run folding applied to substituted expression text.

/// Expression text with sign runs folded and any leading sign
/// lifted out into `multiplier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub text: String,
    /// `-1` when an odd number of leading `-` signs was stripped,
    /// otherwise `1`.
    pub multiplier: i64,
}

/// Collapse each run of adjacent `+`/`-` characters into one sign,
/// `-` for an odd count of minuses and `+` otherwise, then strip
/// every leading sign from the trimmed result.
///
/// ```
/// use assigncalc::normalize;
///
/// let n = normalize("--3---2");
/// assert_eq!(n.text, "3-2");
/// assert_eq!(n.multiplier, 1);
/// ```
#[must_use]
pub fn normalize(expression: &str) -> Normalized {
    let mut folded = String::with_capacity(expression.len());
    let mut chars = expression.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '+' && ch != '-' {
            folded.push(ch);
            continue;
        }

        let mut negative = ch == '-';
        while let Some(&next @ ('+' | '-')) = chars.peek() {
            if next == '-' {
                negative = !negative;
            }
            chars.next();
        }
        folded.push(if negative { '-' } else { '+' });
    }

    // Signs split by whitespace survive folding, so keep stripping
    // until the text starts with something else.
    let mut body = folded.trim();
    let mut multiplier = 1;
    loop {
        match body.as_bytes().first() {
            Some(b'+') => body = body[1..].trim_start(),
            Some(b'-') => {
                body = body[1..].trim_start();
                multiplier = -multiplier;
            }
            _ => break,
        }
    }

    Normalized {
        text: body.to_string(),
        multiplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folded(input: &str) -> (String, i64) {
        let n = normalize(input);
        (n.text, n.multiplier)
    }

    #[test]
    fn even_minus_run_is_plus() {
        assert_eq!(folded("3--2"), ("3+2".to_string(), 1));
        assert_eq!(folded("3-+-2"), ("3+2".to_string(), 1));
    }

    #[test]
    fn odd_minus_run_is_minus() {
        assert_eq!(folded("3---2"), ("3-2".to_string(), 1));
        assert_eq!(folded("3+-+2"), ("3-2".to_string(), 1));
    }

    #[test]
    fn plus_run_is_plus() {
        assert_eq!(folded("3+++2"), ("3+2".to_string(), 1));
    }

    #[test]
    fn leading_minus_becomes_multiplier() {
        assert_eq!(folded("-5"), ("5".to_string(), -1));
        assert_eq!(folded("  ---(1+2) "), ("(1+2)".to_string(), -1));
    }

    #[test]
    fn leading_plus_is_dropped() {
        assert_eq!(folded("+-+-7"), ("7".to_string(), 1));
    }

    #[test]
    fn runs_inside_parens() {
        assert_eq!(folded("(--4)*2"), ("(+4)*2".to_string(), 1));
    }

    #[test]
    fn leading_signs_split_by_spaces() {
        assert_eq!(folded("- -5"), ("5".to_string(), 1));
        assert_eq!(folded(" - + - - 5"), ("5".to_string(), -1));
    }

    #[test]
    fn spaced_leading_signs_fold_once() {
        let once = normalize("- -5");
        let twice = normalize(&once.text);
        assert_eq!(twice, Normalized { text: once.text.clone(), multiplier: 1 });
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let once = normalize("-1--2*(3---4)");
        let twice = normalize(&once.text);
        assert_eq!(twice.text, once.text);
        assert_eq!(twice.multiplier, 1);
    }
}
