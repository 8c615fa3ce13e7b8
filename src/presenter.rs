//! Presenter - turns an evaluation into what the meter shows.
//!
//! [`render`] derives a [`VisualState`] from the password and its
//! evaluation; [`present`] also writes that state to a [`DisplaySurface`].

use std::fmt;

use secrecy::SecretString;

use crate::evaluator::{EvaluationResult, evaluate_password_strength};
use crate::labels::{length_hint_text, tier_label};
use crate::sections::password_length;
use crate::surface::{DisplaySurface, SurfaceError};
use crate::tier::{MEDIUM_LENGTH, STRONG_LENGTH, StrengthTier, VERY_STRONG_LENGTH};

/// Share of the bar earned by length, reached at `VERY_STRONG_LENGTH` characters.
const LENGTH_WEIGHT: f64 = 60.0;
/// Share of the bar earned by character classes, 10 per class.
const VARIETY_WEIGHT: f64 = 40.0;

/// A checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl Criterion {
    /// Rows in display order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Lowercase,
        Criterion::Uppercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier of the row.
    pub fn key(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Lowercase => "lowercase",
            Criterion::Uppercase => "uppercase",
            Criterion::Digit => "number",
            Criterion::Special => "special",
        }
    }
}

/// Icon drawn in a checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Check,
    Cross,
}

impl Glyph {
    pub fn for_validity(valid: bool) -> Self {
        if valid { Glyph::Check } else { Glyph::Cross }
    }

    pub fn symbol(self) -> char {
        match self {
            Glyph::Check => '✓',
            Glyph::Cross => '✗',
        }
    }

    /// Stroke color, as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Glyph::Check => "#16a34a",
            Glyph::Cross => "#ef4444",
        }
    }
}

/// State of one checklist row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CriterionIndicator {
    pub criterion: Criterion,
    pub valid: bool,
    pub glyph: Glyph,
}

impl CriterionIndicator {
    fn new(criterion: Criterion, valid: bool) -> Self {
        Self {
            criterion,
            valid,
            glyph: Glyph::for_validity(valid),
        }
    }
}

/// Fill of the strength bar, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct ProgressPercent(f64);

impl ProgressPercent {
    pub const ZERO: ProgressPercent = ProgressPercent(0.0);
    pub const FULL: ProgressPercent = ProgressPercent(100.0);

    /// Clamps `value` into `0..=100`. NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Formats as a CSS width, e.g. `63.75%` or `100%`.
impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Next length threshold to aim for: 8, then 12, then 16.
pub fn required_length_hint(length: usize) -> usize {
    if length < MEDIUM_LENGTH {
        MEDIUM_LENGTH
    } else if length < STRONG_LENGTH {
        STRONG_LENGTH
    } else {
        VERY_STRONG_LENGTH
    }
}

/// Lowest fill shown for a tier.
fn tier_floor(tier: StrengthTier) -> f64 {
    match tier {
        StrengthTier::Empty => 0.0,
        StrengthTier::Weak => 15.0,
        StrengthTier::Medium => 35.0,
        StrengthTier::Strong => 70.0,
        StrengthTier::VeryStrong => 100.0,
    }
}

/// Bar fill for a password of `length` characters with `type_count`
/// character classes, raised to the floor of `tier`.
pub fn progress_percent(length: usize, type_count: usize, tier: StrengthTier) -> ProgressPercent {
    if length == 0 || tier == StrengthTier::Empty {
        return ProgressPercent::ZERO;
    }
    let length_progress = (length as f64 / VERY_STRONG_LENGTH as f64).min(1.0) * LENGTH_WEIGHT;
    let type_progress = (type_count.min(4) as f64 / 4.0) * VARIETY_WEIGHT;
    let raw = (length_progress + type_progress).min(100.0);

    ProgressPercent::new(raw.max(tier_floor(tier)))
}

/// Everything the meter shows for one password.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub tier: StrengthTier,
    pub label: &'static str,
    pub style_class: Option<&'static str>,
    pub progress: ProgressPercent,
    pub required_length: usize,
    pub length_hint: String,
    /// Rows in [`Criterion::ALL`] order.
    pub indicators: [CriterionIndicator; 5],
}

impl VisualState {
    /// What the meter shows before anything is typed.
    pub fn initial() -> Self {
        Self::from_parts(0, &EvaluationResult::empty())
    }

    fn from_parts(length: usize, result: &EvaluationResult) -> Self {
        let criteria = &result.criteria;
        let required_length = required_length_hint(length);

        // The length row follows the rising hint, not `has_min_length`.
        let length_met = length >= required_length;

        Self {
            tier: result.tier,
            label: tier_label(result.tier),
            style_class: result.tier.style_class(),
            progress: progress_percent(length, criteria.type_count(), result.tier),
            required_length,
            length_hint: length_hint_text(required_length),
            indicators: [
                CriterionIndicator::new(Criterion::Length, length_met),
                CriterionIndicator::new(Criterion::Lowercase, criteria.has_lowercase),
                CriterionIndicator::new(Criterion::Uppercase, criteria.has_uppercase),
                CriterionIndicator::new(Criterion::Digit, criteria.has_digit),
                CriterionIndicator::new(Criterion::Special, criteria.has_special),
            ],
        }
    }

    pub fn indicator(&self, criterion: Criterion) -> &CriterionIndicator {
        &self.indicators[criterion.index()]
    }

    /// Writes this state to `surface`, stopping at the first missing element.
    pub fn apply<S: DisplaySurface + ?Sized>(&self, surface: &mut S) -> Result<(), SurfaceError> {
        surface.set_length_hint(&self.length_hint)?;
        surface.set_strength_text(self.label)?;
        surface.set_strength_class(self.style_class)?;
        surface.set_fill_width(self.progress)?;
        for indicator in &self.indicators {
            surface.set_criterion(indicator.criterion, indicator.valid, indicator.glyph)?;
        }
        Ok(())
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Derives the visual state for `password` and its evaluation.
pub fn render(password: &SecretString, result: &EvaluationResult) -> VisualState {
    VisualState::from_parts(password_length(password), result)
}

/// Renders and writes the state to `surface` immediately.
pub fn present<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    password: &SecretString,
    result: &EvaluationResult,
) -> Result<VisualState, SurfaceError> {
    let state = render(password, result);

    if let Err(e) = state.apply(surface) {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to update password meter: {}", e);
        return Err(e);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(tier = ?state.tier, width = %state.progress, "password meter updated");

    Ok(state)
}

/// Input-change handler: evaluates `password` and presents the result.
pub fn handle_input_change<S: DisplaySurface + ?Sized>(
    surface: &mut S,
    password: &SecretString,
) -> Result<VisualState, SurfaceError> {
    let result = evaluate_password_strength(password);
    present(surface, password, &result)
}
