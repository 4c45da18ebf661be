// Unit tests for src/buffer/stream.rs:
//   - clean EOF vs. truncation semantics on reads
//   - the limit as a hard consumption bound
//   - skip draining the underlying reader
//   - WriteStream position tracking, zero-fill skip and lowered limits
//   - a real file behind ReadStream/WriteStream

use std::io::{Read, Seek, SeekFrom, Write};

use pbwire::buffer::{
    ReadStream, ReadableSequentialData, SequentialData, WritableSequentialData, WriteStream,
};
use pbwire::error::WireError;

// ─────────────────────────────────────────────────────────────────────────────
// ReadStream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn clean_eof_is_none_truncation_is_underflow() {
    let mut input = ReadStream::new(&[0x42u8][..]);
    assert_eq!(input.try_read_byte().expect("byte"), Some(0x42));
    assert_eq!(input.try_read_byte().expect("eof"), None);
    assert!(matches!(input.read_byte(), Err(WireError::BufferUnderflow)));
}

#[test]
fn read_slice_fails_when_the_stream_runs_dry() {
    let mut input = ReadStream::new(&[1u8, 2, 3][..]);
    let mut dst = [0u8; 4];
    assert!(matches!(
        input.read_slice(&mut dst),
        Err(WireError::BufferUnderflow)
    ));
}

#[test]
fn limit_caps_consumption() {
    let mut input = ReadStream::new(&[1u8, 2, 3, 4, 5][..]);
    input.set_limit(2);
    assert_eq!(input.remaining(), 2);
    assert_eq!(input.read_byte().unwrap(), 1);
    assert_eq!(input.read_byte().unwrap(), 2);
    assert_eq!(
        input.try_read_byte().expect("at limit"),
        None,
        "the limit reads like end of data"
    );

    input.set_limit(u64::MAX);
    assert_eq!(input.read_byte().unwrap(), 3, "raising the limit resumes");
}

#[test]
fn set_limit_below_position_clamps_to_position() {
    let mut input = ReadStream::new(&[0u8; 8][..]);
    input.skip(4).expect("skip");
    input.set_limit(1);
    assert_eq!(input.limit(), 4);
    assert_eq!(input.remaining(), 0);
}

#[test]
fn skip_consumes_the_underlying_reader() {
    let data = (0u8..100).collect::<Vec<_>>();
    let mut input = ReadStream::new(data.as_slice());
    assert_eq!(input.skip(64).expect("skip"), 64);
    assert_eq!(input.read_byte().unwrap(), 64);
    assert_eq!(input.skip(1000).expect("tail skip"), 35);
    assert_eq!(input.position(), 100);
}

#[test]
fn varints_decode_through_the_per_byte_path() {
    // 300 = AC 02, then u64::MAX as ten bytes.
    let mut raw = vec![0xAC, 0x02];
    raw.extend([0xFF; 9]);
    raw.push(0x01);
    let mut input = ReadStream::new(raw.as_slice());
    assert_eq!(input.read_var_u64().expect("small"), 300);
    assert_eq!(input.read_var_u64().expect("large"), u64::MAX);
}

// ─────────────────────────────────────────────────────────────────────────────
// WriteStream
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn write_stream_tracks_position_and_grows() {
    let mut out = WriteStream::new(Vec::new());
    out.write_slice(b"abc").expect("write");
    out.write_byte(b'!').expect("write");
    assert_eq!(out.position(), 4);
    assert_eq!(out.into_inner(), b"abc!");
}

#[test]
fn write_stream_skip_emits_zeros() {
    let mut out = WriteStream::new(Vec::new());
    out.write_byte(0xAA).expect("write");
    out.skip(3).expect("skip");
    out.write_byte(0xBB).expect("write");
    assert_eq!(out.into_inner(), vec![0xAA, 0, 0, 0, 0xBB]);
}

#[test]
fn lowered_limit_turns_writes_into_overflow() {
    let mut out = WriteStream::new(Vec::new());
    out.set_limit(2);
    out.write_slice(b"ab").expect("fits");
    assert!(matches!(
        out.write_byte(b'c'),
        Err(WireError::BufferOverflow)
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Real files
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn file_backed_round_trip() {
    let mut file = tempfile::tempfile().expect("tempfile");
    {
        let mut out = WriteStream::new(&mut file);
        out.write_u32_le(0xDEAD_BEEF).expect("word");
        out.write_var_u64(5678).expect("varint");
        out.flush().expect("flush");
    }

    file.seek(SeekFrom::Start(0)).expect("rewind");
    let mut input = ReadStream::new(&mut file);
    assert_eq!(input.read_u32_le().expect("word"), 0xDEAD_BEEF);
    assert_eq!(input.read_var_u64().expect("varint"), 5678);
    assert_eq!(input.try_read_byte().expect("eof"), None);
}

#[test]
fn read_stream_wraps_any_reader() {
    // A chained reader: the stream layer only sees `Read`.
    let chained = (&[0x01u8][..]).chain(&[0x02u8, 0x03][..]);
    let mut input = ReadStream::new(chained);
    let mut dst = [0u8; 3];
    input.read_slice(&mut dst).expect("read across sources");
    assert_eq!(dst, [1, 2, 3]);
}

#[test]
fn write_stream_passes_through_to_any_writer() {
    let mut sink = Vec::new();
    {
        let mut out = WriteStream::new(&mut sink);
        out.write_utf8("wire").expect("utf8");
    }
    let mut copy = Vec::new();
    copy.write_all(&sink).expect("copy");
    assert_eq!(copy, b"wire");
}
