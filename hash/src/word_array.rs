use std::{
    fmt::{Debug, Display, Error, Formatter},
    str::FromStr,
};

use hex::FromHex;
use zeroize::Zeroize;

/// An ordered sequence of 32-bit words plus the count of leading bytes that
/// are significant. Bytes are big-endian within each word; bits past
/// `sig_bytes` carry no meaning until [`clamp`](WordArray32::clamp) zeroes
/// them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WordArray32 {
    pub words: Vec<u32>,
    pub sig_bytes: usize,
}

impl WordArray32 {
    /// Creates an array in which every byte of every word is significant.
    pub fn new(words: Vec<u32>) -> Self {
        let sig_bytes = words.len() * 4;
        WordArray32 { words, sig_bytes }
    }

    pub fn with_sig_bytes(words: Vec<u32>, sig_bytes: usize) -> Self {
        WordArray32 { words, sig_bytes }
    }

    /// Zeroes all bits past `sig_bytes` and drops words wholly past it.
    pub fn clamp(&mut self) {
        self.words.truncate((self.sig_bytes + 3) / 4);
        let partial = self.sig_bytes % 4;
        if partial != 0 {
            if let Some(word) = self.words.get_mut(self.sig_bytes / 4) {
                *word &= u32::MAX << (32 - 8 * partial);
            }
        }
    }

    /// Appends the significant bytes of `other`. The receiver is clamped
    /// first so that stale bits cannot leak into the appended region.
    pub fn concat(mut self, other: &WordArray32) -> WordArray32 {
        self.clamp();
        for i in 0..other.sig_bytes {
            self.push_byte(other.byte(i));
        }
        self
    }

    /// Copies out the significant bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        (0..self.sig_bytes).map(|i| self.byte(i)).collect()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    fn byte(&self, index: usize) -> u8 {
        let word = self.words.get(index / 4).copied().unwrap_or(0);
        (word >> (24 - 8 * (index % 4))) as u8
    }

    fn push_byte(&mut self, byte: u8) {
        let index = self.sig_bytes;
        while index / 4 >= self.words.len() {
            self.words.push(0);
        }
        self.words[index / 4] |= u32::from(byte) << (24 - 8 * (index % 4));
        self.sig_bytes += 1;
    }
}

impl<'a> From<&'a [u8]> for WordArray32 {
    fn from(bytes: &'a [u8]) -> Self {
        let mut words = vec![0u32; (bytes.len() + 3) / 4];
        for (i, &byte) in bytes.iter().enumerate() {
            words[i / 4] |= u32::from(byte) << (24 - 8 * (i % 4));
        }
        WordArray32 {
            words,
            sig_bytes: bytes.len(),
        }
    }
}

impl<const N: usize> From<&[u8; N]> for WordArray32 {
    fn from(bytes: &[u8; N]) -> Self {
        WordArray32::from(&bytes[..])
    }
}

impl From<Vec<u8>> for WordArray32 {
    fn from(bytes: Vec<u8>) -> Self {
        WordArray32::from(bytes.as_slice())
    }
}

impl<'a> From<&'a str> for WordArray32 {
    fn from(text: &'a str) -> Self {
        WordArray32::from(text.as_bytes())
    }
}

impl From<String> for WordArray32 {
    fn from(text: String) -> Self {
        WordArray32::from(text.as_bytes())
    }
}

impl<'a> From<&'a WordArray32> for WordArray32 {
    fn from(array: &'a WordArray32) -> Self {
        array.clone()
    }
}

impl Debug for WordArray32 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.to_hex())
    }
}

impl Display for WordArray32 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for WordArray32 {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Vec::from_hex(s)?;
        Ok(WordArray32::from(bytes.as_slice()))
    }
}

impl Zeroize for WordArray32 {
    fn zeroize(&mut self) {
        self.words.zeroize();
        self.sig_bytes.zeroize();
    }
}

/// The 64-bit counterpart used for SHA-512-family state and digests. One
/// word covers eight bytes, most significant byte first.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WordArray64 {
    pub words: Vec<u64>,
    pub sig_bytes: usize,
}

impl WordArray64 {
    pub fn new(words: Vec<u64>) -> Self {
        let sig_bytes = words.len() * 8;
        WordArray64 { words, sig_bytes }
    }

    pub fn with_sig_bytes(words: Vec<u64>, sig_bytes: usize) -> Self {
        WordArray64 { words, sig_bytes }
    }

    /// Splits every 64-bit word into its high half followed by its low half,
    /// preserving word order and `sig_bytes`. Lossless; grouping consecutive
    /// pairs of the result reproduces the original words.
    pub fn to_u32(&self) -> WordArray32 {
        let mut words = Vec::with_capacity(self.words.len() * 2);
        for &word in &self.words {
            words.push((word >> 32) as u32);
            words.push(word as u32);
        }
        WordArray32::with_sig_bytes(words, self.sig_bytes)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        (0..self.sig_bytes).map(|i| self.byte(i)).collect()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    fn byte(&self, index: usize) -> u8 {
        let word = self.words.get(index / 8).copied().unwrap_or(0);
        (word >> (56 - 8 * (index % 8))) as u8
    }
}

impl<'a> From<&'a [u8]> for WordArray64 {
    fn from(bytes: &'a [u8]) -> Self {
        let mut words = vec![0u64; (bytes.len() + 7) / 8];
        for (i, &byte) in bytes.iter().enumerate() {
            words[i / 8] |= u64::from(byte) << (56 - 8 * (i % 8));
        }
        WordArray64 {
            words,
            sig_bytes: bytes.len(),
        }
    }
}

impl Debug for WordArray64 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.to_hex())
    }
}

impl Display for WordArray64 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for WordArray64 {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Vec::from_hex(s)?;
        Ok(WordArray64::from(bytes.as_slice()))
    }
}

impl Zeroize for WordArray64 {
    fn zeroize(&mut self) {
        self.words.zeroize();
        self.sig_bytes.zeroize();
    }
}
