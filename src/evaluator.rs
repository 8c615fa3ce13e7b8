//! Password strength evaluator - main classification logic.

use secrecy::SecretString;

use crate::sections::{character_variety_section, length_section, password_length};
use crate::tier::StrengthTier;

/// The five criteria of a password, recomputed from scratch on every evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Criteria {
    /// At least `MIN_LENGTH` characters. Not shown by the presenter, which
    /// tracks a rising length hint instead.
    pub has_min_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl Criteria {
    /// Number of character classes present (0-4). `has_min_length` is not counted.
    pub fn type_count(&self) -> usize {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_special,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvaluationResult {
    pub criteria: Criteria,
    pub tier: StrengthTier,
}

impl EvaluationResult {
    /// Result for the empty password.
    pub fn empty() -> Self {
        Self {
            criteria: Criteria::default(),
            tier: StrengthTier::Empty,
        }
    }
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// Evaluates password strength.
///
/// Total and stateless: every password, including the empty one, yields
/// exactly one result, and the same password always yields the same result.
pub fn evaluate_password_strength(password: &SecretString) -> EvaluationResult {
    let length = password_length(password);
    let variety = character_variety_section(password);

    let criteria = Criteria {
        has_min_length: length_section(password),
        has_lowercase: variety.has_lowercase,
        has_uppercase: variety.has_uppercase,
        has_digit: variety.has_digit,
        has_special: variety.has_special,
    };
    let type_count = criteria.type_count();
    let tier = StrengthTier::classify(length, type_count);

    #[cfg(feature = "tracing")]
    tracing::debug!(length, type_count, ?tier, "password evaluated");

    EvaluationResult { criteria, tier }
}
