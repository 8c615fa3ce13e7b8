//! Length section - measures the password and checks the fixed minimum length.

use secrecy::{ExposeSecret, SecretString};

/// Fixed minimum length behind `Criteria::has_min_length`.
pub const MIN_LENGTH: usize = 8;

/// Returns the password length in UTF-16 code units, as a browser text
/// field reports it. Characters outside the BMP count twice.
pub fn password_length(password: &SecretString) -> usize {
    password.expose_secret().encode_utf16().count()
}

/// Checks if the password meets the fixed minimum length.
///
/// # Returns
/// - `true` if the password has at least [`MIN_LENGTH`] characters
/// - `false` otherwise, including for the empty password
pub fn length_section(password: &SecretString) -> bool {
    password_length(password) >= MIN_LENGTH
}
