//! Character variety section - checks for lowercase, uppercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

/// Punctuation accepted as a special character.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Character classes found in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharacterVariety {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Checks which character classes the password contains.
///
/// Letters and digits are matched against the ASCII ranges `a-z`, `A-Z`
/// and `0-9` only; accented letters count for no class.
pub fn character_variety_section(password: &SecretString) -> CharacterVariety {
    let pwd = password.expose_secret();
    CharacterVariety {
        has_lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        has_digit: pwd.chars().any(|c| c.is_ascii_digit()),
        has_special: pwd.chars().any(is_special),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variety(s: &str) -> CharacterVariety {
        character_variety_section(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_variety_section_lowercase_only() {
        let v = variety("lowercase");
        assert!(v.has_lowercase);
        assert!(!v.has_uppercase);
        assert!(!v.has_digit);
        assert!(!v.has_special);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let v = variety("HasAll123!@#");
        assert_eq!(
            v,
            CharacterVariety {
                has_lowercase: true,
                has_uppercase: true,
                has_digit: true,
                has_special: true,
            }
        );
    }

    #[test]
    fn test_variety_section_every_special_character() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(variety(&c.to_string()).has_special, "{c:?} should be special");
        }
    }

    #[test]
    fn test_variety_section_unlisted_symbols_are_not_special() {
        for s in [" ", "~", "`", "€", "§", "\t", "\u{0}"] {
            assert_eq!(variety(s), CharacterVariety::default(), "{s:?} should match no class");
        }
    }

    #[test]
    fn test_variety_section_non_ascii_letters_and_digits() {
        assert_eq!(variety("ÉÈéçà٣"), CharacterVariety::default());
    }

    #[test]
    fn test_variety_section_empty() {
        assert_eq!(variety(""), CharacterVariety::default());
    }
}
