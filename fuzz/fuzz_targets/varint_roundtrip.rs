#![no_main]
use libfuzzer_sys::fuzz_target;
use pbwire::varint;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic.
    if let Ok((value, consumed)) = varint::decode(data) {
        assert!(consumed >= 1 && consumed <= varint::MAX_VARINT_LEN);

        // Re-encoding the decoded value is canonical: it never takes more
        // bytes than the input spent, and decodes back to the same value.
        let mut buf = [0u8; varint::MAX_VARINT_LEN];
        let n = varint::encode(value, &mut buf);
        assert!(n <= consumed);
        assert_eq!(n, varint::size_of_unsigned(value));
        let (back, m) = varint::decode(&buf[..n]).expect("canonical form decodes");
        assert_eq!(back, value);
        assert_eq!(m, n);
    }

    // An eight-byte prefix always encodes and decodes losslessly.
    if data.len() >= 8 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&data[..8]);
        let value = u64::from_le_bytes(word);
        let mut buf = [0u8; varint::MAX_VARINT_LEN];
        let n = varint::encode(value, &mut buf);
        let (back, _) = varint::decode(&buf[..n]).expect("decode");
        assert_eq!(back, value);
    }
});
