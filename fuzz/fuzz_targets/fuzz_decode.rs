#![no_main]
use libfuzzer_sys::fuzz_target;
use ppmconv::{ConvertRequest, DecodeRequest, Header, Limits, PpmFormat};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };

    // Probe, decode, and convert arbitrary input — must never panic
    let _ = Header::from_bytes(data);
    let _ = DecodeRequest::new(data).with_limits(&limits).decode();
    let _ = ConvertRequest::new(data, PpmFormat::Ascii)
        .with_limits(&limits)
        .convert();
    let _ = ConvertRequest::new(data, PpmFormat::Binary)
        .with_limits(&limits)
        .convert();
});
