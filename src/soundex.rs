//! American Soundex phonetic codes.
//!
//! The first letter is kept; following letters map to a digit class and a
//! digit is dropped when the preceding input character carries the same
//! class. Letters with no class (vowels, `h`, `w`, `y`) are skipped but
//! still break a run. Codes are padded with `0` or cut to four characters.

use crate::error::{AlgoError, Result};
use itertools::Itertools;

const CODE_LEN: usize = 4;

fn class(ch: char) -> Option<char> {
    let digit = match ch {
        'b' | 'f' | 'p' | 'v' => '1',
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => '2',
        'd' | 't' => '3',
        'l' => '4',
        'm' | 'n' => '5',
        'r' => '6',
        _ => return None,
    };
    Some(digit)
}

pub fn soundex(word: &str) -> Result<String> {
    let lowered = word.trim().to_lowercase();
    let first = lowered
        .chars()
        .next()
        .ok_or_else(|| AlgoError::invalid_input("soundex of an empty word"))?;

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first);

    for (previous, current) in lowered.chars().tuple_windows() {
        let Some(digit) = class(current) else {
            continue;
        };
        if class(previous) == Some(digit) {
            continue;
        }
        code.push(digit);
    }

    let code: String = code
        .chars()
        .pad_using(CODE_LEN, |_| '0')
        .take(CODE_LEN)
        .collect();

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_names() {
        assert_eq!(soundex("Robert").unwrap(), "r163");
        assert_eq!(soundex("Rupert").unwrap(), "r163");
        assert_eq!(soundex("Tymczak").unwrap(), "t522");
        assert_eq!(soundex("Pfister").unwrap(), "p236");
    }

    #[test]
    fn test_padding_and_truncation() {
        assert_eq!(soundex("Lee").unwrap(), "l000");
        assert_eq!(soundex("a").unwrap(), "a000");
        assert_eq!(soundex("Washington").unwrap(), "w252");
    }

    #[test]
    fn test_vowel_breaks_run() {
        // the `a` separates the two `c`s, so the second one is coded
        assert_eq!(soundex("cacb").unwrap(), "c210");
        assert_eq!(soundex("ccb").unwrap(), "c100");
    }

    #[test]
    fn test_input_is_trimmed_and_lowered() {
        assert_eq!(soundex("  ROBERT\n").unwrap(), "r163");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(soundex(""), Err(AlgoError::InvalidInput { .. })));
        assert!(matches!(soundex("   "), Err(AlgoError::InvalidInput { .. })));
    }
}
