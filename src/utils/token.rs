//! Opaque session token generation.
//!
//! Tokens are random bytes from the OS generator, encoded as URL-safe
//! base64 without padding. Only the HMAC of a token is ever stored; the raw
//! value lives in the client cookie.

use base64::Engine as _;

/// Random bytes per token before encoding.
const TOKEN_LENGTH_BYTES: usize = 32;

/// Generates a cryptographically secure opaque session token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
