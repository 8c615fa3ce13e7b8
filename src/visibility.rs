//! Masked/plain display mode of the password field.
//!
//! Toggling only changes how the field is drawn; it never reaches the
//! evaluator or the presenter.

use secrecy::{ExposeSecret, SecretString};

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Masked,
    Plain,
}

impl Visibility {
    /// Switches between masked and plain.
    pub fn toggle(&mut self) -> Visibility {
        *self = match self {
            Visibility::Masked => Visibility::Plain,
            Visibility::Plain => Visibility::Masked,
        };
        *self
    }

    /// Input type the field uses in this mode.
    pub fn input_type(self) -> &'static str {
        match self {
            Visibility::Masked => "password",
            Visibility::Plain => "text",
        }
    }

    /// Text the field displays for `password`.
    pub fn display(self, password: &SecretString) -> String {
        let pwd = password.expose_secret();
        match self {
            Visibility::Masked => pwd.chars().map(|_| MASK_CHAR).collect(),
            Visibility::Plain => pwd.to_string(),
        }
    }
}
