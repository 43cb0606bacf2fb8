//! Streaming MD5 message digest.
//!
//! The [`Md5`] context accepts input in chunks of arbitrary size, finalizes
//! into a 16-byte digest, and renders it as 32 lowercase hex characters.
//! [`md5_digest`] and [`md5_hex`] hash a single buffer in one shot;
//! [`digest_to_hex`] and [`hex_to_digest`] convert between the raw and
//! printable digest forms.
//!
//! ```
//! use md5_stream::{digest_to_hex, md5_hex, Md5};
//!
//! let mut hasher = Md5::new();
//! hasher.process(b"message ")?;
//! hasher.process(b"digest")?;
//! let digest = hasher.finish()?;
//! assert_eq!(digest_to_hex(&digest), "f96b697d7cb7938d525a2f31aaf161d0");
//!
//! assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
//! # Ok::<(), md5_stream::Md5Error>(())
//! ```
//!
//! MD5 is cryptographically broken; this crate reproduces the classical
//! algorithm for checksum and compatibility purposes only. Do not use it
//! where collision or preimage resistance matters.

pub mod digest;
pub mod error;
pub mod hex;

pub use digest::{md5_digest, md5_hex, Md5, BLOCK_SIZE, MD5_OUTPUT_SIZE};
pub use error::{Md5Error, Result};
pub use hex::{digest_to_hex, hex_to_digest, MD5_HEX_SIZE};
