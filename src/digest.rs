//! # Streaming MD5 digest engine
//!
//! Incremental MD5 over byte chunks of arbitrary size: feed input with
//! [`Md5::process`], finalize once with [`Md5::finish`], then query the raw
//! digest or its hex rendering as often as needed. One-shot helpers
//! ([`md5_digest`], [`md5_hex`]) cover the common hash-a-buffer case.
//!
//! Input split across any sequence of `process` calls (zero-length chunks
//! included) produces the same digest as a single call with the concatenated
//! bytes. Whole 64-byte blocks are compressed straight from the caller's
//! slice; only a partial trailing block is buffered.
//!
//! **Note**: MD5 is cryptographically broken. This implementation exists for
//! checksum and compatibility purposes only; for anything security-sensitive
//! use a vetted modern hash (e.g. SHA-2 or SHA-3 from RustCrypto).

use core::convert::TryInto;

use log::trace;

use crate::error::{Md5Error, Result};
use crate::hex::digest_to_hex;

/// The size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const MD5_OUTPUT_SIZE: usize = 16;

/// The size of one compression-function input block in bytes (512 bits).
pub const BLOCK_SIZE: usize = 64;

/// The initial values for (A, B, C, D) from the MD5 specification.
static INIT_A: u32 = 0x67452301;
static INIT_B: u32 = 0xefcdab89;
static INIT_C: u32 = 0x98badcfe;
static INIT_D: u32 = 0x10325476;

/// The sine table constants (K) in MD5 (32 bits).
/// K[i] = floor(2^32 * abs(sin(i+1))) for i=0..63
static K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// The amount of left rotation performed in each MD5 round, grouped by step.
static S: [u32; 64] = [
    // Round 1
    7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,  7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,   5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,  4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,  6, 10, 15, 21,
];

/// A streaming MD5 context.
///
/// Each instance is an independent, plain mutable value; share one across
/// threads only behind external synchronization.
#[derive(Debug, Clone)]
pub struct Md5 {
    /// State (A, B, C, D) each 32 bits.
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    /// Partial-block buffer; never holds a full 64 bytes.
    buffer: [u8; BLOCK_SIZE],
    /// Valid bytes currently in `buffer` (0..=63).
    buffer_len: usize,
    /// Total message length in bytes, as two 32-bit halves with explicit
    /// carry from low into high. The halves are composed into the padded
    /// trailer's 64-bit bit count at finalization.
    length_low: u32,
    length_high: u32,
    /// Set by `finish`; the context accepts no further input afterwards.
    finished: bool,
    /// Finalization output, valid only once `finished` is set.
    digest: [u8; MD5_OUTPUT_SIZE],
    hex: String,
}

impl Md5 {
    /// Creates a new MD5 context.
    pub fn new() -> Self {
        Self {
            a: INIT_A,
            b: INIT_B,
            c: INIT_C,
            d: INIT_D,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            length_low: 0,
            length_high: 0,
            finished: false,
            digest: [0u8; MD5_OUTPUT_SIZE],
            hex: String::new(),
        }
    }

    /// Feeds `data` into the context.
    ///
    /// May be called any number of times with chunks of any size; the digest
    /// depends only on the concatenation of the bytes fed. Fails with
    /// [`Md5Error::AlreadyFinished`] once [`Md5::finish`] has run.
    pub fn process(&mut self, data: &[u8]) -> Result<()> {
        if self.finished {
            return Err(Md5Error::AlreadyFinished);
        }
        self.update(data);
        Ok(())
    }

    /// Finalizes the digest: pads the trailing partial block, appends the
    /// encoded bit length, and runs the last one or two compression rounds.
    ///
    /// Returns the 16-byte digest. Fails with [`Md5Error::AlreadyFinished`]
    /// on a second call; the first call's result stays available through
    /// [`Md5::digest`] and [`Md5::hex_string`].
    pub fn finish(&mut self) -> Result<[u8; MD5_OUTPUT_SIZE]> {
        if self.finished {
            return Err(Md5Error::AlreadyFinished);
        }
        Ok(self.finalize())
    }

    /// Copies out the 16-byte digest.
    ///
    /// Fails with [`Md5Error::NotFinished`] before [`Md5::finish`] has run.
    pub fn digest(&self) -> Result<[u8; MD5_OUTPUT_SIZE]> {
        if !self.finished {
            return Err(Md5Error::NotFinished);
        }
        Ok(self.digest)
    }

    /// Returns the 32-character lowercase hex rendering of the digest.
    ///
    /// Fails with [`Md5Error::NotFinished`] before [`Md5::finish`] has run.
    pub fn hex_string(&self) -> Result<String> {
        if !self.finished {
            return Err(Md5Error::NotFinished);
        }
        Ok(self.hex.clone())
    }

    fn update(&mut self, data: &[u8]) {
        let mut rest = data;

        // Complete a previously buffered partial block first.
        if self.buffer_len > 0 && self.buffer_len + rest.len() >= BLOCK_SIZE {
            let take = BLOCK_SIZE - self.buffer_len;
            self.buffer[self.buffer_len..].copy_from_slice(&rest[..take]);
            rest = &rest[take..];
            self.buffer_len = 0;
            let block = self.buffer;
            self.compress(&block);
        }

        // Whole blocks go through the compression function straight from the
        // input slice.
        while rest.len() >= BLOCK_SIZE {
            let (block, tail) = rest.split_at(BLOCK_SIZE);
            self.compress(block);
            rest = tail;
        }

        // A partial tail waits in the buffer for the next call.
        if !rest.is_empty() {
            self.buffer[self.buffer_len..self.buffer_len + rest.len()].copy_from_slice(rest);
            self.buffer_len += rest.len();
        }
    }

    fn finalize(&mut self) -> [u8; MD5_OUTPUT_SIZE] {
        // The compression function only counts whole blocks; fold in the
        // still-buffered tail before encoding the length.
        let leftover = self.buffer_len;
        self.add_length(leftover as u32);
        let (size_low, size_high) = self.length_words();

        let mut scratch = [0u8; 2 * BLOCK_SIZE];
        scratch[..leftover].copy_from_slice(&self.buffer[..leftover]);
        scratch[leftover] = 0x80;

        // Pad so the occupied length is 56 mod 64, wrapping into a second
        // block when the leftover bytes already reach past that boundary.
        let mut pad = (BLOCK_SIZE - 8) as isize - leftover as isize;
        if pad <= 0 {
            pad += BLOCK_SIZE as isize;
        }
        let length_at = leftover + pad as usize;

        scratch[length_at..length_at + 4].copy_from_slice(&size_low.to_le_bytes());
        scratch[length_at + 4..length_at + 8].copy_from_slice(&size_high.to_le_bytes());
        let total = length_at + 8;

        self.compress(&scratch[..BLOCK_SIZE]);
        if total > BLOCK_SIZE {
            self.compress(&scratch[BLOCK_SIZE..]);
        }

        let mut digest = [0u8; MD5_OUTPUT_SIZE];
        digest[0..4].copy_from_slice(&self.a.to_le_bytes());
        digest[4..8].copy_from_slice(&self.b.to_le_bytes());
        digest[8..12].copy_from_slice(&self.c.to_le_bytes());
        digest[12..16].copy_from_slice(&self.d.to_le_bytes());

        self.digest = digest;
        self.hex = digest_to_hex(&digest);
        self.finished = true;
        trace!("finalized digest {}", self.hex);
        digest
    }

    /// Processes a 512-bit (64-byte) block, updating the internal state.
    /// The block is divided into 16 32-bit words in little-endian.
    fn compress(&mut self, block: &[u8]) {
        self.add_length(BLOCK_SIZE as u32);

        let mut w = [0u32; 16];
        for i in 0..16 {
            w[i] = u32::from_le_bytes(block[4 * i..4 * i + 4].try_into().unwrap());
        }

        let (mut a, mut b, mut c, mut d) = (self.a, self.b, self.c, self.d);

        for i in 0..64 {
            let (f, g) = if i < 16 {
                // F function
                ((b & c) | ((!b) & d), i)
            } else if i < 32 {
                // G function
                ((b & d) | (c & (!d)), (5 * i + 1) % 16)
            } else if i < 48 {
                // H function
                (b ^ c ^ d, (3 * i + 5) % 16)
            } else {
                // I function
                (c ^ (b | (!d)), (7 * i) % 16)
            };

            let temp = a.wrapping_add(f).wrapping_add(w[g]).wrapping_add(K[i]);
            let temp = temp.rotate_left(S[i]).wrapping_add(b);

            a = d;
            d = c;
            c = b;
            b = temp;
        }

        self.a = self.a.wrapping_add(a);
        self.b = self.b.wrapping_add(b);
        self.c = self.c.wrapping_add(c);
        self.d = self.d.wrapping_add(d);
    }

    /// Adds `bytes` to the two-half message length counter, carrying from
    /// the low half into the high half on wraparound.
    fn add_length(&mut self, bytes: u32) {
        let (low, carried) = self.length_low.overflowing_add(bytes);
        self.length_low = low;
        if carried {
            self.length_high = self.length_high.wrapping_add(1);
        }
    }

    /// Composes the byte count into the two little-endian 32-bit words of
    /// the padded trailer's bit count: the low half shifts up by 3 and its
    /// top 3 bits fold into the high word.
    fn length_words(&self) -> (u32, u32) {
        let low = (self.length_low & 0x1FFF_FFFF) << 3;
        let high = (self.length_high << 3) | ((self.length_low & 0xE000_0000) >> 29);
        (low, high)
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to compute the MD5 digest of `data` in a single shot.
pub fn md5_digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let mut hasher = Md5::new();
    hasher.update(data);
    hasher.finalize()
}

/// Convenience function returning the 32-character lowercase hex digest of
/// `data`.
pub fn md5_hex(data: &[u8]) -> String {
    digest_to_hex(&md5_digest(data))
}
