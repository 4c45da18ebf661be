// Unit tests for src/varint.rs plus the sequential varint paths of the
// buffer layer:
//   - encoded bytes agree with size_of_* for the full value range
//   - zig-zag and plain encodings round-trip through buffers and streams
//   - negative int32 values take the 10-byte sign-extended form
//   - the contiguous fast path and the per-byte stream path agree

use pbwire::buffer::{
    BufferedData, ReadStream, ReadableSequentialData, SequentialData, WritableSequentialData,
};
use pbwire::varint;
use proptest::prelude::*;

fn encode_var_int(v: i32, zigzag: bool) -> Vec<u8> {
    let mut buf = BufferedData::allocate(varint::MAX_VARINT_LEN);
    buf.write_var_int(v, zigzag).expect("write");
    let n = buf.position() as usize;
    buf.flip();
    buf.read_bytes(n).expect("read").to_vec()
}

fn encode_var_long(v: i64, zigzag: bool) -> Vec<u8> {
    let mut buf = BufferedData::allocate(varint::MAX_VARINT_LEN);
    buf.write_var_long(v, zigzag).expect("write");
    let n = buf.position() as usize;
    buf.flip();
    buf.read_bytes(n).expect("read").to_vec()
}

// ─────────────────────────────────────────────────────────────────────────────
// Size agreement
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn written_length_matches_size_of_varint32() {
    for v in [0, 1, 127, 128, 300, i32::MAX, -1, -128, i32::MIN] {
        assert_eq!(
            encode_var_int(v, false).len(),
            varint::size_of_varint32(v),
            "value {v}"
        );
        assert_eq!(
            encode_var_int(v, true).len(),
            varint::size_of_zigzag32(v),
            "zigzag value {v}"
        );
    }
}

#[test]
fn written_length_matches_size_of_varint64() {
    for v in [0i64, 1, 127, 128, 1 << 21, i64::MAX, -1, i64::MIN] {
        assert_eq!(
            encode_var_long(v, false).len(),
            varint::size_of_varint64(v),
            "value {v}"
        );
        assert_eq!(
            encode_var_long(v, true).len(),
            varint::size_of_zigzag64(v),
            "zigzag value {v}"
        );
    }
}

#[test]
fn negative_int32_uses_the_ten_byte_form() {
    assert_eq!(
        encode_var_int(-1, false),
        vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01],
        "-1 is sign-extended to 64 bits on the wire"
    );
    assert_eq!(encode_var_int(-1, true), vec![0x01], "zig-zag keeps it short");
}

// ─────────────────────────────────────────────────────────────────────────────
// Fast path vs. stream path
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn buffered_and_stream_decoders_agree() {
    for v in [0i64, 1, 127, 128, 16_384, -1, i64::MIN, i64::MAX] {
        for zigzag in [false, true] {
            let raw = encode_var_long(v, zigzag);

            let mut buffered = BufferedData::wrap(raw.clone());
            assert_eq!(buffered.read_var_long(zigzag).expect("buffered"), v);

            let mut stream = ReadStream::new(raw.as_slice());
            assert_eq!(stream.read_var_long(zigzag).expect("stream"), v);
        }
    }
}

#[test]
fn decode_rejects_what_encode_never_produces() {
    // Continuation bit on every one of 10 bytes.
    let mut unterminated = BufferedData::wrap(vec![0x80; 10]);
    assert!(unterminated.read_var_long(false).is_err());

    // Truncated after the continuation bit.
    let mut truncated = BufferedData::wrap(vec![0x80]);
    assert!(truncated.read_var_long(false).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Property sweep
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn round_trip_i32(v in any::<i32>(), zigzag in any::<bool>()) {
        let raw = encode_var_int(v, zigzag);
        let expected = if zigzag {
            varint::size_of_zigzag32(v)
        } else {
            varint::size_of_varint32(v)
        };
        prop_assert_eq!(raw.len(), expected);

        let mut buf = BufferedData::wrap(raw);
        prop_assert_eq!(buf.read_var_int(zigzag).unwrap(), v);
        prop_assert!(!buf.has_remaining());
    }

    #[test]
    fn round_trip_i64(v in any::<i64>(), zigzag in any::<bool>()) {
        let raw = encode_var_long(v, zigzag);
        let expected = if zigzag {
            varint::size_of_zigzag64(v)
        } else {
            varint::size_of_varint64(v)
        };
        prop_assert_eq!(raw.len(), expected);

        let mut buf = BufferedData::wrap(raw);
        prop_assert_eq!(buf.read_var_long(zigzag).unwrap(), v);
        prop_assert!(!buf.has_remaining());
    }

    #[test]
    fn slice_decode_agrees_with_sequential_decode(v in any::<u64>()) {
        let mut scratch = [0u8; varint::MAX_VARINT_LEN];
        let n = varint::encode(v, &mut scratch);
        let (decoded, consumed) = varint::decode(&scratch[..n]).unwrap();
        prop_assert_eq!(decoded, v);
        prop_assert_eq!(consumed, n);
        prop_assert_eq!(n, varint::size_of_unsigned(v));
    }
}
