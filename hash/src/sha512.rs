use sha2::{Digest, Sha384, Sha512};

use crate::{Hasher, WordArray32, WordArray64};

// Both algorithms compress 1024-bit blocks; they differ only in digest
// length and initial state.
const BLOCK_WORDS: usize = 32;

pub struct Sha512Hasher(Sha512);

impl Sha512Hasher {
    pub fn new() -> Self {
        Sha512Hasher(Sha512::new())
    }
}

impl Default for Sha512Hasher {
    fn default() -> Self {
        Sha512Hasher::new()
    }
}

impl Hasher for Sha512Hasher {
    const BLOCK_SIZE: usize = BLOCK_WORDS;

    fn update(&mut self, data: &WordArray32) {
        self.0.update(data.to_bytes());
    }

    fn finalize(mut self, tail: Option<&WordArray32>) -> WordArray64 {
        if let Some(tail) = tail {
            self.0.update(tail.to_bytes());
        }
        digest_to_words(&self.0.finalize())
    }
}

/// SHA-384 shares SHA-512's compression function and block size, so it slots
/// into the same word-array plumbing with a shorter digest.
pub struct Sha384Hasher(Sha384);

impl Sha384Hasher {
    pub fn new() -> Self {
        Sha384Hasher(Sha384::new())
    }
}

impl Default for Sha384Hasher {
    fn default() -> Self {
        Sha384Hasher::new()
    }
}

impl Hasher for Sha384Hasher {
    const BLOCK_SIZE: usize = BLOCK_WORDS;

    fn update(&mut self, data: &WordArray32) {
        self.0.update(data.to_bytes());
    }

    fn finalize(mut self, tail: Option<&WordArray32>) -> WordArray64 {
        if let Some(tail) = tail {
            self.0.update(tail.to_bytes());
        }
        digest_to_words(&self.0.finalize())
    }
}

fn digest_to_words(digest: &[u8]) -> WordArray64 {
    let mut words = Vec::with_capacity(digest.len() / 8);
    for chunk in digest.chunks_exact(8) {
        words.push(u64::from_be_bytes(chunk.try_into().unwrap()));
    }
    WordArray64::with_sig_bytes(words, digest.len())
}
