//! Password evaluation sections
//!
//! Each section measures a specific aspect of the password. The evaluator
//! combines their outputs into `Criteria`.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_section, password_length};
pub use variety::{SPECIAL_CHARACTERS, character_variety_section};
