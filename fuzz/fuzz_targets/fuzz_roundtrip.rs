#![no_main]
use libfuzzer_sys::fuzz_target;
use ppmconv::{ConvertRequest, DecodeRequest, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };

    // If the input decodes, re-encoding it in its own format and decoding
    // again must produce identical pixels and header.
    let Ok(decoded) = DecodeRequest::new(data).with_limits(&limits).decode() else {
        return;
    };

    let reencoded = ConvertRequest::new(data, decoded.header.format)
        .with_limits(&limits)
        .convert()
        .expect("decodable input failed to convert");

    let decoded2 = DecodeRequest::new(&reencoded)
        .decode()
        .expect("re-encoded data failed to decode");

    assert_eq!(decoded.header, decoded2.header, "roundtrip header mismatch");
    assert_eq!(
        decoded.pixels(),
        decoded2.pixels(),
        "roundtrip pixel mismatch"
    );
});
