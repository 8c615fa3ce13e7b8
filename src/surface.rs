//! Display surfaces the presenter writes to.
//!
//! A surface owns the label, the bar and the five checklist rows. The
//! presenter is its only writer.

use std::fmt;

use thiserror::Error;

use crate::labels::{DIGIT_CAPTION, LOWERCASE_CAPTION, SPECIAL_CAPTION, UPPERCASE_CAPTION};
use crate::presenter::{Criterion, Glyph, ProgressPercent};

/// Element of a display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceElement {
    /// Text label naming the tier.
    StrengthText,
    /// Container carrying the tier style.
    StrengthLevel,
    /// Bar fill whose width encodes progress.
    StrengthFill,
    /// One checklist row.
    Criterion(Criterion),
}

impl fmt::Display for SurfaceElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceElement::StrengthText => f.write_str("strength-text"),
            SurfaceElement::StrengthLevel => f.write_str("strength-level"),
            SurfaceElement::StrengthFill => f.write_str("strength-fill"),
            SurfaceElement::Criterion(c) => write!(f, "{}-check", c.key()),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Display element not found: {0}")]
    MissingElement(SurfaceElement),
}

/// Output boundary of the meter.
///
/// Every call replaces what the element showed before; nothing is batched.
pub trait DisplaySurface {
    /// Sets the tier label text.
    fn set_strength_text(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Clears the previous tier style from the level container and the bar
    /// fill, then applies `class` to both when present.
    fn set_strength_class(&mut self, class: Option<&'static str>) -> Result<(), SurfaceError>;

    /// Sets the bar fill width.
    fn set_fill_width(&mut self, width: ProgressPercent) -> Result<(), SurfaceError>;

    /// Sets the text of the length row.
    fn set_length_hint(&mut self, text: &str) -> Result<(), SurfaceError>;

    /// Marks a checklist row valid or not valid and draws its glyph.
    fn set_criterion(
        &mut self,
        criterion: Criterion,
        valid: bool,
        glyph: Glyph,
    ) -> Result<(), SurfaceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row {
    valid: bool,
    glyph: Glyph,
}

impl Default for Row {
    fn default() -> Self {
        Self {
            valid: false,
            glyph: Glyph::Cross,
        }
    }
}

const BAR_CELLS: usize = 20;

/// In-memory surface rendered as terminal text through `Display`.
///
/// ```text
/// Moyen [moyen]
/// [#############-------] 63.75%
/// ✗ Au moins 12 caractères
/// ✓ Une lettre minuscule
/// ...
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextSurface {
    strength_text: String,
    strength_class: Option<&'static str>,
    fill_width: ProgressPercent,
    length_hint: String,
    rows: [Row; 5],
    detached: Vec<SurfaceElement>,
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSurface {
    pub fn new() -> Self {
        Self {
            strength_text: String::new(),
            strength_class: None,
            fill_width: ProgressPercent::ZERO,
            length_hint: String::new(),
            rows: [Row::default(); 5],
            detached: Vec::new(),
        }
    }

    /// Removes an element; later writes to it fail with
    /// [`SurfaceError::MissingElement`].
    pub fn detach(&mut self, element: SurfaceElement) {
        if !self.detached.contains(&element) {
            self.detached.push(element);
        }
    }

    pub fn strength_text(&self) -> &str {
        &self.strength_text
    }

    pub fn strength_class(&self) -> Option<&'static str> {
        self.strength_class
    }

    pub fn fill_width(&self) -> ProgressPercent {
        self.fill_width
    }

    pub fn length_hint(&self) -> &str {
        &self.length_hint
    }

    pub fn is_valid(&self, criterion: Criterion) -> bool {
        self.rows[criterion.index()].valid
    }

    pub fn glyph(&self, criterion: Criterion) -> Glyph {
        self.rows[criterion.index()].glyph
    }

    fn require(&self, element: SurfaceElement) -> Result<(), SurfaceError> {
        if self.detached.contains(&element) {
            return Err(SurfaceError::MissingElement(element));
        }
        Ok(())
    }

    fn caption(&self, criterion: Criterion) -> &str {
        match criterion {
            Criterion::Length => self.length_hint.as_str(),
            Criterion::Lowercase => LOWERCASE_CAPTION,
            Criterion::Uppercase => UPPERCASE_CAPTION,
            Criterion::Digit => DIGIT_CAPTION,
            Criterion::Special => SPECIAL_CAPTION,
        }
    }
}

impl DisplaySurface for TextSurface {
    fn set_strength_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.require(SurfaceElement::StrengthText)?;
        self.strength_text = text.to_string();
        Ok(())
    }

    fn set_strength_class(&mut self, class: Option<&'static str>) -> Result<(), SurfaceError> {
        self.require(SurfaceElement::StrengthLevel)?;
        self.require(SurfaceElement::StrengthFill)?;
        self.strength_class = class;
        Ok(())
    }

    fn set_fill_width(&mut self, width: ProgressPercent) -> Result<(), SurfaceError> {
        self.require(SurfaceElement::StrengthFill)?;
        self.fill_width = width;
        Ok(())
    }

    fn set_length_hint(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.require(SurfaceElement::Criterion(Criterion::Length))?;
        self.length_hint = text.to_string();
        Ok(())
    }

    fn set_criterion(
        &mut self,
        criterion: Criterion,
        valid: bool,
        glyph: Glyph,
    ) -> Result<(), SurfaceError> {
        self.require(SurfaceElement::Criterion(criterion))?;
        self.rows[criterion.index()] = Row { valid, glyph };
        Ok(())
    }
}

impl fmt::Display for TextSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strength_class {
            Some(class) => writeln!(f, "{} [{}]", self.strength_text, class)?,
            None => writeln!(f, "{}", self.strength_text)?,
        }

        let filled = (self.fill_width.value() / 100.0 * BAR_CELLS as f64).round() as usize;
        let filled = filled.min(BAR_CELLS);
        writeln!(
            f,
            "[{}{}] {}",
            "#".repeat(filled),
            "-".repeat(BAR_CELLS - filled),
            self.fill_width
        )?;

        for criterion in Criterion::ALL {
            let row = self.rows[criterion.index()];
            writeln!(f, "{} {}", row.glyph.symbol(), self.caption(criterion))?;
        }
        Ok(())
    }
}
