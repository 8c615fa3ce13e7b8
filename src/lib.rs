//! Real-time password strength meter
//!
//! This library classifies a password into a strength tier, derives the
//! criteria checklist (length, lowercase, uppercase, digit, special
//! character) and reflects both into a progress bar and checklist as the
//! user types.
//!
//! # Features
//!
//! - `async` (default): Enables the live meter loop fed by input-change events
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_strength_meter::{StrengthTier, TextSurface, evaluate_password_strength, present};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefgh1".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.tier, StrengthTier::Medium);
//!
//! let mut surface = TextSurface::new();
//! let state = present(&mut surface, &password, &evaluation).expect("surface is complete");
//! assert_eq!(state.label, "Moyen");
//! println!("{surface}");
//! ```

// Internal modules
mod evaluator;
mod labels;
mod presenter;
mod sections;
mod surface;
mod tier;
mod visibility;

#[cfg(feature = "async")]
mod live;

// Public API
pub use evaluator::{Criteria, EvaluationResult, evaluate_password_strength};
pub use labels::{length_hint_text, tier_label};
pub use presenter::{
    Criterion, CriterionIndicator, Glyph, ProgressPercent, VisualState, handle_input_change,
    present, progress_percent, render, required_length_hint,
};
pub use sections::{MIN_LENGTH, SPECIAL_CHARACTERS};
pub use surface::{DisplaySurface, SurfaceElement, SurfaceError, TextSurface};
pub use tier::StrengthTier;
pub use visibility::Visibility;

#[cfg(feature = "async")]
pub use live::run_live_meter;
