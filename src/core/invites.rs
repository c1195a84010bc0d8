use crate::core::constants::{INVITE_ALPHABET, INVITE_CHUNK_LEN};
use rand::Rng;

/// A fresh `XXXX-XXXX` token drawn from an alphabet without 0/O or 1/I.
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let mut chunk = || -> String {
        (0..INVITE_CHUNK_LEN)
            .map(|_| INVITE_ALPHABET[rng.gen_range(0..INVITE_ALPHABET.len())] as char)
            .collect()
    };
    let first = chunk();
    let second = chunk();
    format!("{}-{}", first, second)
}

/// Tokens are typed by hand, so accept stray whitespace and lowercase.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_uppercase()
}
