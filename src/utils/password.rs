//! Password digests.
//!
//! Passwords at rest are the lowercase hex MD5 of the plaintext. Every new
//! employee starts with [`DEFAULT_PASSWORD`].

use md5::{Digest, Md5};

pub const DEFAULT_PASSWORD: &str = "123456";

pub fn digest(plaintext: &str) -> String {
    hex::encode(Md5::digest(plaintext.as_bytes()))
}

/// Compare a submitted plaintext against a stored digest.
pub fn matches(plaintext: &str, stored: &str) -> bool {
    digest(plaintext) == stored
}
