//! E2E Test Suite 04: Stream-backed parse and write.
//!
//! The same generated codecs that run over buffers must run over
//! `std::io` streams: write to a real file through `WriteStream`, parse it
//! back through `ReadStream`, and bound stream consumption with the limit.

mod models {
    include!("models.rs");
}

use std::io::{Seek, SeekFrom, Write};

use models::*;
use pbwire::buffer::{ReadStream, ReadableSequentialData, SequentialData, WriteStream};
use pbwire::codec::{Codec, DEFAULT_MAX_DEPTH};

#[test]
fn file_write_then_file_parse_round_trips() {
    let m = everything_sample();
    let size = EVERYTHING.measure_record(&m);

    let mut file = tempfile::tempfile().expect("tempfile");
    {
        let mut out = WriteStream::new(&mut file);
        EVERYTHING.write(&m, &mut out).expect("write");
        assert_eq!(out.position(), size as u64);
        out.flush().expect("flush");
    }

    file.seek(SeekFrom::Start(0)).expect("rewind");
    let mut input = ReadStream::new(&mut file);
    let back = EVERYTHING
        .parse(&mut input, false, true, DEFAULT_MAX_DEPTH)
        .expect("parse");
    assert_eq!(back, m);
    assert_eq!(input.position(), size as u64);
}

#[test]
fn stream_parse_agrees_with_buffer_parse() {
    let m = everything_sample();
    let encoded = EVERYTHING.to_bytes(&m).expect("encode");

    let mut stream = ReadStream::new(encoded.as_slice());
    let from_stream = EVERYTHING
        .parse(&mut stream, false, true, DEFAULT_MAX_DEPTH)
        .expect("stream parse");
    let from_bytes = EVERYTHING.parse_bytes(&encoded).expect("bytes parse");
    assert_eq!(from_stream, from_bytes);
}

#[test]
fn limit_stops_the_parse_before_trailing_garbage() {
    let ts = Timestamp {
        seconds: 5678,
        nanos: 1234,
    };
    let encoded = TIMESTAMP.to_bytes(&ts).expect("encode");
    let mut raw = encoded.to_vec();
    raw.extend_from_slice(&[0xFF; 16]); // garbage a bounded parse must not touch

    let mut input = ReadStream::new(raw.as_slice());
    input.set_limit(encoded.len() as u64);
    let back = TIMESTAMP
        .parse(&mut input, false, true, DEFAULT_MAX_DEPTH)
        .expect("bounded parse");
    assert_eq!(back, ts);
    assert_eq!(input.position(), encoded.len() as u64);
}

#[test]
fn stream_skip_reports_actual_bytes_at_eof() {
    let mut input = ReadStream::new(&[1u8, 2, 3][..]);
    assert_eq!(input.skip(10).expect("skip"), 3);
    assert_eq!(input.position(), 3);
    assert!(input.try_read_byte().expect("eof probe").is_none());
}

#[test]
fn write_stream_grows_with_the_sink() {
    let m = everything_sample();
    let mut out = WriteStream::new(Vec::new());
    EVERYTHING.write(&m, &mut out).expect("write");
    EVERYTHING.write(&m, &mut out).expect("second record");
    let bytes = out.into_inner();
    assert_eq!(bytes.len(), 2 * EVERYTHING.measure_record(&m));
}

#[test]
fn two_length_prefixed_records_parse_off_one_stream() {
    // Length-prefixed framing over a single stream, the way a transport
    // would deliver consecutive records.
    let a = Timestamp {
        seconds: 1,
        nanos: 2,
    };
    let b = Timestamp {
        seconds: 5678,
        nanos: 1234,
    };
    let mut raw = Vec::new();
    for ts in [&a, &b] {
        let body = TIMESTAMP.to_bytes(ts).unwrap();
        raw.write_all(&[body.len() as u8]).unwrap();
        raw.write_all(body.as_slice()).unwrap();
    }

    let mut input = ReadStream::new(raw.as_slice());
    let mut parsed = Vec::new();
    for _ in 0..2 {
        let len = input.read_byte().expect("length prefix") as u64;
        let end = input.position() + len;
        input.set_limit(end);
        parsed.push(
            TIMESTAMP
                .parse(&mut input, false, true, DEFAULT_MAX_DEPTH)
                .expect("framed parse"),
        );
        input.set_limit(u64::MAX);
    }
    assert_eq!(parsed, vec![a, b]);
}
