//! Correctness tests for the md5-stream public API, cross-checked against
//! the RustCrypto `md-5` implementation.

use md5::Digest as _;
use md5_stream::{digest_to_hex, hex_to_digest, md5_digest, md5_hex, Md5, MD5_OUTPUT_SIZE};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn reference_digest(data: &[u8]) -> [u8; MD5_OUTPUT_SIZE] {
    let mut hasher = md5::Md5::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[test]
fn matches_rfc1321_vectors() {
    let vectors: &[(&[u8], &str)] = &[
        (b"", "d41d8cd98f00b204e9800998ecf8427e"),
        (b"a", "0cc175b9c0f1b6a831c399e269772661"),
        (b"abc", "900150983cd24fb0d6963f7d28e17f72"),
        (b"message digest", "f96b697d7cb7938d525a2f31aaf161d0"),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            "c3fcd3d76192e4007dfb496cca67e13b",
        ),
        (
            b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
            "d174ab98d277d9f5a5611c2c9f419d9f",
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            "57edf4a22be3c955ac49da2e2107b67a",
        ),
    ];

    for (input, expected) in vectors {
        assert_eq!(&md5_hex(input), expected, "input {input:?}");
    }
}

#[test]
fn padding_boundary_lengths_match_reference() {
    // Lengths around the pad-to-56-mod-64 threshold and the block size,
    // covering both the single-block and dual-block finalization paths.
    for len in [
        0usize, 1, 2, 54, 55, 56, 57, 63, 64, 65, 119, 120, 121, 127, 128, 129,
    ] {
        let data: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        assert_eq!(
            md5_digest(&data),
            reference_digest(&data),
            "length {len} mismatch"
        );
    }
}

#[test]
fn random_inputs_match_reference() {
    let mut rng = StdRng::seed_from_u64(0x5f3759df);
    for _ in 0..32 {
        let len = rng.gen_range(0..4096);
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        assert_eq!(md5_digest(&data), reference_digest(&data));
    }
}

#[test]
fn chunking_is_invariant() {
    let mut rng = StdRng::seed_from_u64(0xdeadbeef);
    let data: Vec<u8> = (0..10_000).map(|_| rng.gen()).collect();
    let expected = md5_digest(&data);
    assert_eq!(expected, reference_digest(&data));

    for _ in 0..16 {
        let mut hasher = Md5::new();
        let mut offset = 0;
        while offset < data.len() {
            // Zero-length chunks included on purpose.
            let take = rng.gen_range(0..=200).min(data.len() - offset);
            hasher.process(&data[offset..offset + take]).unwrap();
            offset += take;
        }
        assert_eq!(hasher.finish().unwrap(), expected);
    }
}

#[test]
fn hex_round_trip_random_digests() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..64 {
        let digest: [u8; MD5_OUTPUT_SIZE] = rng.gen();
        let hex = digest_to_hex(&digest);
        assert_eq!(hex.len(), 32);
        assert_eq!(hex_to_digest(&hex).unwrap(), digest);
    }
}

#[test]
fn large_input_matches_reference() {
    let data = vec![0xa5u8; 1024 * 1024];
    assert_eq!(md5_digest(&data), reference_digest(&data));

    let mut hasher = Md5::new();
    for chunk in data.chunks(4096) {
        hasher.process(chunk).unwrap();
    }
    let streamed = hasher.finish().unwrap();
    assert_eq!(streamed, reference_digest(&data));
    assert_eq!(hasher.hex_string().unwrap(), hex::encode(streamed));
}

#[test]
fn hex_string_matches_digest_rendering() {
    let mut hasher = Md5::new();
    hasher.process(b"Hola").unwrap();
    let digest = hasher.finish().unwrap();

    assert_eq!(hasher.hex_string().unwrap(), digest_to_hex(&digest));
    assert_eq!(hasher.hex_string().unwrap(), hex::encode(digest));
    assert_eq!(digest, reference_digest(b"Hola"));
}
