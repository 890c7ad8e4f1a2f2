use std::mem;

use zeroize::Zeroize;

use crate::{sha512::Sha512Hasher, Hasher, WordArray32, WordArray64};

// RFC 2104 opad/ipad bytes, repeated across a full 32-bit word.
const OUTER_PAD: u32 = 0x5c5c_5c5c;
const INNER_PAD: u32 = 0x3636_3636;

/// Keyed message authentication over any [`Hasher`].
///
/// The two derived key pads are computed once, so one instance can
/// authenticate any number of messages under the same key: finalizing
/// consumes the running hash state, and [`reset`](Hmac::reset) re-arms the
/// instance for the next message.
pub struct Hmac<H: Hasher> {
    hasher: H,
    i_key: WordArray32,
    o_key: WordArray32,
}

impl<H: Hasher> Hmac<H> {
    /// Derives the inner and outer key pads from `key` and primes the hasher
    /// for the first message.
    ///
    /// Keys longer than one hash block are replaced by their digest first,
    /// per RFC 2104; shorter keys are zero-extended to a full block by the
    /// pad derivation.
    pub fn new<K: Into<WordArray32>>(key: K) -> Self {
        let block_bytes = H::BLOCK_SIZE * 4;

        let mut key = key.into();
        if key.sig_bytes > block_bytes {
            key = H::default().finalize(Some(&key)).to_u32();
        }
        key.clamp();

        let mut o_key = key.clone();
        let mut i_key = key;
        derive_pad(&mut o_key, OUTER_PAD, H::BLOCK_SIZE);
        derive_pad(&mut i_key, INNER_PAD, H::BLOCK_SIZE);

        let mut hmac = Hmac {
            hasher: H::default(),
            i_key,
            o_key,
        };
        hmac.reset();
        hmac
    }

    /// Discards any absorbed message data and re-primes the hasher with the
    /// inner key pad. Idempotent until the first `update`.
    pub fn reset(&mut self) {
        self.hasher.reset();
        self.hasher.update(&self.i_key);
    }

    /// Absorbs a chunk of the message. Chainable.
    pub fn update<D: Into<WordArray32>>(&mut self, data: D) -> &mut Self {
        self.hasher.update(&data.into());
        self
    }

    /// Completes both hash passes and returns the MAC.
    ///
    /// This consumes the running inner hash; the instance computes nothing
    /// meaningful again until [`reset`](Hmac::reset) is called.
    pub fn finalize(&mut self) -> WordArray64 {
        let inner_hash = mem::take(&mut self.hasher).finalize(None);
        let outer_input = self.o_key.clone().concat(&inner_hash.to_u32());
        H::default().finalize(Some(&outer_input))
    }

    /// [`update`](Hmac::update) with `tail`, then [`finalize`](Hmac::finalize).
    pub fn finalize_with<D: Into<WordArray32>>(&mut self, tail: D) -> WordArray64 {
        self.update(tail);
        self.finalize()
    }
}

impl<H: Hasher> Drop for Hmac<H> {
    fn drop(&mut self) {
        self.i_key.zeroize();
        self.o_key.zeroize();
    }
}

fn derive_pad(key: &mut WordArray32, pad: u32, block_words: usize) {
    key.words.resize(block_words, 0);
    for word in &mut key.words {
        *word ^= pad;
    }
    key.sig_bytes = block_words * 4;
}

/// One-shot HMAC-SHA512 of `data` under `key`.
pub fn compute_hmac_sha512(key: &[u8], data: &[u8]) -> WordArray64 {
    Hmac::<Sha512Hasher>::new(key).finalize_with(data)
}
