//! Short code generation and shape checks.
//!
//! Codes are 6 characters from the URL-safe base64 alphabet
//! (`A-Z a-z 0-9 - _`), produced from 4 bytes of OS entropy.

use base64::Engine as _;

/// Random bytes drawn per code. 4 bytes encode to exactly 6 base64 characters.
const CODE_ENTROPY_BYTES: usize = 4;

/// Length of every short code.
pub const CODE_LENGTH: usize = 6;

/// Codes that would shadow a fixed route of the same shape.
pub const RESERVED_CODES: &[&str] = &["health"];

/// Generates a random 6-character short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_ENTROPY_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    let mut code = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer);
    code.truncate(CODE_LENGTH);
    code
}

/// Returns true if `code` has the shape of a short code: exactly 6 characters
/// from `[A-Za-z0-9_-]`.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
