//! Display text. The meter ships a single hardcoded French locale.

use crate::tier::StrengthTier;

/// Label shown next to the bar for each tier.
pub fn tier_label(tier: StrengthTier) -> &'static str {
    match tier {
        StrengthTier::Empty => "Saisissez un mot de passe",
        StrengthTier::Weak => "Faible",
        StrengthTier::Medium => "Moyen",
        StrengthTier::Strong => "Fort",
        StrengthTier::VeryStrong => "Très fort",
    }
}

/// Text of the length row for the given target length.
pub fn length_hint_text(required_length: usize) -> String {
    format!("Au moins {required_length} caractères")
}

pub const LOWERCASE_CAPTION: &str = "Une lettre minuscule";
pub const UPPERCASE_CAPTION: &str = "Une lettre majuscule";
pub const DIGIT_CAPTION: &str = "Un chiffre";
pub const SPECIAL_CAPTION: &str = "Un caractère spécial";
