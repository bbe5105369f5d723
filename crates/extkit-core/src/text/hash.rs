use md5::{Digest, Md5};

use crate::text::ascii_lossy;

/// MD5 hex digest of the trimmed, lower-cased input, as used for
/// Gravatar-style identifiers.
///
/// Non-ASCII characters are hashed as `?`.
pub fn md5_hex(input: &str) -> String {
    let normalized = input.to_lowercase();
    let bytes: Vec<u8> = ascii_lossy(normalized.trim().chars())
        .map(|c| c as u8)
        .collect();

    hex::encode(Md5::digest(&bytes))
}
