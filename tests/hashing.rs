// Unit tests for src/xxhash.rs and src/buffer/hashing.rs:
//   - XXH3-64 reference vectors (as produced by `xxhsum -H3`)
//   - streaming state agreeing with one-shot hashing
//   - the hashing sink: position counting, finalize-then-continue, reset
//   - little-endian normalization of fixed-width writes
//   - SHA-256 vectors through the same sink

use pbwire::buffer::{ByteOrder, HashingData, SequentialData, WritableSequentialData};
use pbwire::xxhash;

// ─────────────────────────────────────────────────────────────────────────────
// XXH3-64 reference vectors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn oneshot_reference_vectors() {
    assert_eq!(xxhash::xxh3_64(b""), 0x2D06_8005_38D3_94C2);
    assert_eq!(xxhash::xxh3_64(b"hello world"), 0xD447_B1EA_40E6_988B);
    assert_eq!(xxhash::xxh3_64(&[0xCA, 0xFE, 0xBA, 0xBE]), 0x36AF_B8D0_770D_97EA);
    assert_eq!(xxhash::xxh3_64(b"abc"), 0x78AF_5F94_892F_3950);
}

#[test]
fn streaming_state_matches_oneshot() {
    let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
    let mut state = xxhash::streaming();
    for chunk in data.chunks(97) {
        state.update(chunk);
    }
    assert_eq!(state.digest(), xxhash::xxh3_64(&data));
}

// ─────────────────────────────────────────────────────────────────────────────
// Hashing sink over XXH3-64
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sink_hashes_what_it_is_fed() {
    let mut sink = HashingData::xxh3();
    sink.write_slice(b"hello ").expect("write");
    sink.write_slice(b"world").expect("write");
    assert_eq!(sink.position(), 11);
    assert_eq!(sink.hash(), xxhash::xxh3_64(b"hello world"));
}

#[test]
fn finalize_does_not_disturb_the_running_state() {
    let mut sink = HashingData::xxh3();
    sink.write_slice(b"hello").expect("write");
    let early = sink.hash();
    assert_eq!(early, xxhash::xxh3_64(b"hello"));

    sink.write_slice(b" world").expect("write");
    assert_eq!(
        sink.hash(),
        xxhash::xxh3_64(b"hello world"),
        "writes after a finalize stay coherent"
    );
}

#[test]
fn reset_restores_a_fresh_hasher() {
    let mut sink = HashingData::xxh3();
    sink.write_slice(b"garbage").expect("write");
    sink.reset();
    assert_eq!(sink.position(), 0);
    sink.write_slice(b"abc").expect("write");
    assert_eq!(sink.hash(), xxhash::xxh3_64(b"abc"));
}

#[test]
fn sink_is_unbounded() {
    let sink = HashingData::xxh3();
    assert_eq!(sink.capacity(), u64::MAX);
    assert_eq!(sink.limit(), u64::MAX);
    assert!(sink.has_remaining());
}

#[test]
fn skip_hashes_zero_fill() {
    let mut skipped = HashingData::xxh3();
    skipped.skip(130).expect("skip");
    assert_eq!(skipped.position(), 130);

    let mut written = HashingData::xxh3();
    written.write_slice(&[0u8; 130]).expect("write");
    assert_eq!(skipped.hash(), written.hash());
}

// ─────────────────────────────────────────────────────────────────────────────
// Little-endian normalization
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fixed_width_writes_hash_little_endian_whatever_the_caller_asks() {
    let mut big = HashingData::xxh3();
    big.write_i32(0x0102_0304, ByteOrder::BigEndian).expect("be");

    let mut little = HashingData::xxh3();
    little
        .write_i32(0x0102_0304, ByteOrder::LittleEndian)
        .expect("le");

    let mut bytewise = HashingData::xxh3();
    bytewise.write_slice(&[0x04, 0x03, 0x02, 0x01]).expect("raw");

    assert_eq!(big.hash(), little.hash());
    assert_eq!(big.hash(), bytewise.hash());
    assert_eq!(big.hash(), xxhash::xxh3_64(&[0x04, 0x03, 0x02, 0x01]));
}

#[test]
fn word_and_bytewise_i64_agree() {
    let v = -0x1122_3344_5566_7788i64;
    let mut word = HashingData::xxh3();
    word.write_i64(v, ByteOrder::BigEndian).expect("word");

    let mut bytewise = HashingData::xxh3();
    for b in v.to_le_bytes() {
        bytewise.write_byte(b).expect("byte");
    }
    assert_eq!(word.hash(), bytewise.hash());
}

#[test]
fn varints_reach_the_hasher_as_their_wire_bytes() {
    let mut sink = HashingData::xxh3();
    sink.write_var_u64(300).expect("varint");
    assert_eq!(sink.position(), 2);
    assert_eq!(sink.hash(), xxhash::xxh3_64(&[0xAC, 0x02]));
}

// ─────────────────────────────────────────────────────────────────────────────
// SHA-256 variant
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sha256_empty_vector() {
    let sink = HashingData::sha256();
    assert_eq!(
        sink.hash().as_slice(),
        hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
            .unwrap()
            .as_slice()
    );
}

#[test]
fn sha256_abc_vector() {
    let mut sink = HashingData::sha256();
    sink.write_slice(b"abc").expect("write");
    assert_eq!(
        sink.hash().as_slice(),
        hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
            .unwrap()
            .as_slice()
    );
}

#[test]
fn sha256_finalize_then_continue() {
    let mut sink = HashingData::sha256();
    sink.write_slice(b"ab").expect("write");
    let _early = sink.hash();
    sink.write_slice(b"c").expect("write");
    assert_eq!(
        sink.hash().as_slice(),
        hex::decode("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
            .unwrap()
            .as_slice()
    );
}
