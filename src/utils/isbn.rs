/// Normalizes an ISBN-10 or ISBN-13 string into its 13-digit form.
///
/// Hyphens and spaces are stripped. ISBN-10s are converted by prefixing
/// `978` and recomputing the EAN-13 check digit; the ISBN-10 check
/// character (including a trailing `X`) is discarded in the process.
/// Returns `None` for anything that is not a plausible ISBN.
pub fn to_isbn_13(raw: &str) -> Option<String> {
    let compact: String = raw.chars().filter(|c| !matches!(c, '-' | ' ')).collect();

    match compact.len() {
        13 => {
            if compact.chars().all(|c| c.is_ascii_digit()) {
                Some(compact)
            } else {
                None
            }
        }
        10 => {
            if !compact.is_ascii() {
                return None;
            }
            let body = &compact[..9];
            if !body.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let last = compact.chars().nth(9)?;
            if !(last.is_ascii_digit() || last == 'X' || last == 'x') {
                return None;
            }
            let prefixed = format!("978{}", body);
            let check = ean13_check_digit(&prefixed)?;
            Some(format!("{}{}", prefixed, check))
        }
        _ => None,
    }
}

fn ean13_check_digit(first12: &str) -> Option<u32> {
    if first12.len() != 12 {
        return None;
    }
    let mut sum = 0;
    for (i, c) in first12.chars().enumerate() {
        let digit = c.to_digit(10)?;
        sum += if i % 2 == 0 { digit } else { 3 * digit };
    }
    Some((10 - (sum % 10)) % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_10_converts_to_13() {
        assert_eq!(to_isbn_13("0441788386"), Some("9780441788385".to_string()));
        assert_eq!(to_isbn_13("0-441-78838-6"), Some("9780441788385".to_string()));
    }

    #[test]
    fn test_isbn_10_with_x_check_character() {
        assert_eq!(to_isbn_13("043942089X"), Some("9780439420891".to_string()));
        assert_eq!(to_isbn_13("043942089x"), Some("9780439420891".to_string()));
    }

    #[test]
    fn test_isbn_13_passes_through_normalized() {
        assert_eq!(
            to_isbn_13("978-0-441-78838-5"),
            Some("9780441788385".to_string())
        );
        assert_eq!(to_isbn_13("9780441788385"), Some("9780441788385".to_string()));
    }

    #[test]
    fn test_invalid_isbns_rejected() {
        assert_eq!(to_isbn_13(""), None);
        assert_eq!(to_isbn_13("12345"), None);
        assert_eq!(to_isbn_13("not-an-isbn!"), None);
        assert_eq!(to_isbn_13("97804417883850"), None);
        assert_eq!(to_isbn_13("04417883X6"), None);
    }
}
