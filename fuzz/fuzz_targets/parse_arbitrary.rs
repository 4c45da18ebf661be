#![no_main]
use libfuzzer_sys::fuzz_target;
use pbwire::codec::{Codec, DEFAULT_MAX_DEPTH};
use pbwire::Bytes;

mod models {
    include!("../../e2e/models.rs");
}

fuzz_target!(|data: &[u8]| {
    let input = Bytes::copy_from_slice(data);

    // Lenient parsing of arbitrary bytes must never panic; errors are the
    // expected outcome for almost every input.
    let Ok(parsed) = models::EVERYTHING.parse(&mut input.open(), false, true, DEFAULT_MAX_DEPTH)
    else {
        return;
    };

    // Whatever survived the parse must re-encode to exactly its measured
    // size and round-trip into an equal message.
    let encoded = models::EVERYTHING
        .to_bytes(&parsed)
        .expect("re-encoding a parsed message cannot fail");
    assert_eq!(encoded.len(), models::EVERYTHING.measure_record(&parsed));

    // Compare at the byte level: NaN payloads are legal and would defeat a
    // structural comparison.
    let reparsed = models::EVERYTHING
        .parse_bytes(&encoded)
        .expect("re-parsing our own encoding cannot fail");
    let reencoded = models::EVERYTHING.to_bytes(&reparsed).expect("encode");
    assert_eq!(reencoded, encoded, "round-trip must be stable");
});
