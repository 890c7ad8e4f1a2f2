//! Keyed message authentication (HMAC) over hash functions of the SHA-512
//! family, together with the 64-bit word-array representation their digests
//! use and its conversion to 32-bit words.

pub use self::{
    hmac::{compute_hmac_sha512, Hmac},
    sha512::{Sha384Hasher, Sha512Hasher},
    word_array::{WordArray32, WordArray64},
};

mod hmac;
#[cfg(feature = "serde-derive")]
mod serde_derive;
mod sha512;
mod word_array;

/// An incremental hash primitive whose internal arithmetic runs on 64-bit
/// words. Input is absorbed as 32-bit word arrays, the digest comes back as
/// a 64-bit word array.
pub trait Hasher: Default {
    /// Input block size in 32-bit words.
    const BLOCK_SIZE: usize;

    /// Reverts the chaining state to the algorithm's initial values,
    /// discarding any buffered input.
    fn reset(&mut self) {
        *self = Self::default();
    }

    /// Absorbs the significant bytes of `data`, buffering any partial block.
    fn update(&mut self, data: &WordArray32);

    /// Absorbs the optional tail, applies the padding rule and drains the
    /// remaining state. Consuming the hasher here is what makes a digest a
    /// read-once operation; start from a fresh instance for the next one.
    fn finalize(self, tail: Option<&WordArray32>) -> WordArray64;

    #[must_use]
    fn chain(mut self, data: &WordArray32) -> Self {
        self.update(data);
        self
    }
}
