//! Conversion and format-grammar tests: cross-encoding equivalence, comment
//! handling, truncation detection, and unsupported-variant rejection.

use ppmconv::*;

#[test]
fn p3_to_p6_and_back_is_lossless() {
    let p3: &[u8] = b"P3\n2 1\n255\n255 0 0 0 255 0\n";

    let p6 = ConvertRequest::new(p3, PpmFormat::Binary).convert().unwrap();
    assert_eq!(&p6[..], b"P6\n2 1\n255\n\xff\x00\x00\x00\xff\x00");

    let p3_again = ConvertRequest::new(&p6, PpmFormat::Ascii)
        .convert()
        .unwrap();
    assert_eq!(&p3_again[..], b"P3\n2 1\n255\n255\n0\n0\n0\n255\n0\n");

    // Pixel-for-pixel identical through the intermediate
    let first = DecodeRequest::new(p3).decode().unwrap();
    let second = DecodeRequest::new(&p3_again).decode().unwrap();
    assert_eq!(first.pixels(), second.pixels());
    assert_eq!(
        first.header,
        second.header.with_format(first.header.format)
    );
}

#[test]
fn comments_skipped_before_width_and_maxval() {
    let mut src = b"P6\n# note\n3 2\n# another\n255\n".to_vec();
    let body: Vec<u8> = (1..=18).collect();
    src.extend_from_slice(&body);

    let decoded = DecodeRequest::new(&src).decode().unwrap();
    assert_eq!(decoded.header.width, 3);
    assert_eq!(decoded.header.height, 2);
    assert_eq!(decoded.header.maxval, 255);
    assert_eq!(decoded.pixels(), &body[..]);
}

#[test]
fn commented_header_parses_like_plain_header() {
    let plain = b"P3\n2 2\n255\n1 2 3 4 5 6 7 8 9 10 11 12\n";
    let commented =
        b"P3\n# a\n# b\n2 # c\n2\n# d\n# e\n255\n1 2 3 4 5 6 7 8 9 10 11 12\n";

    let a = DecodeRequest::new(plain).decode().unwrap();
    let b = DecodeRequest::new(commented).decode().unwrap();
    assert_eq!(a.header, b.header);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn ascii_reader_is_layout_tolerant() {
    // Same image, three whitespace layouts
    let one_line = b"P3\n2 1\n255\n10 20 30 40 50 60\n";
    let per_channel = b"P3\n2 1\n255\n10\n20\n30\n40\n50\n60\n";
    let ragged = b"P3\n2 1\n255\n  10\t20\n30 40\r\n50     60";

    let expected = [10u8, 20, 30, 40, 50, 60];
    for src in [&one_line[..], &per_channel[..], &ragged[..]] {
        let decoded = DecodeRequest::new(src).decode().unwrap();
        assert_eq!(decoded.pixels(), &expected);
    }
}

#[test]
fn converting_to_same_format_normalizes() {
    let src = b"P3\n# comment\n1 1\n255\n1\n2\n3\n";
    let out = ConvertRequest::new(src, PpmFormat::Ascii).convert().unwrap();
    assert_eq!(&out[..], b"P3\n1 1\n255\n1\n2\n3\n");
}

#[test]
fn ascii_truncation_detected() {
    // Far too few values for 2x2
    let short = b"P3\n2 2\n255\n1 2 3\n";
    assert!(matches!(
        DecodeRequest::new(short).decode(),
        Err(PpmError::UnexpectedEof)
    ));

    // Enough bytes to pass the up-front size bound, but not enough tokens
    let padded = b"P3\n2 1\n255\n1 2 3 4 5        \n";
    assert!(matches!(
        DecodeRequest::new(padded).decode(),
        Err(PpmError::UnexpectedEof)
    ));
}

#[test]
fn binary_truncation_detected() {
    let mut src = b"P6\n2 2\n255\n".to_vec();
    src.extend_from_slice(&[0u8; 11]); // needs 12
    assert!(matches!(
        DecodeRequest::new(&src).decode(),
        Err(PpmError::UnexpectedEof)
    ));
}

#[test]
fn maxval_boundary() {
    let ok = b"P3\n1 1\n255\n255 255 255\n";
    assert!(DecodeRequest::new(ok).decode().is_ok());

    let too_deep = b"P3\n1 1\n256\n255 255 255\n";
    match DecodeRequest::new(too_deep).decode().unwrap_err() {
        PpmError::UnsupportedVariant(msg) => assert!(msg.contains("256")),
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn unsupported_magic_numbers_rejected_before_pixel_read() {
    // A P5 stream whose "pixel data" would be readable if the magic number
    // check were skipped.
    let mut p5 = b"P5\n2 2\n255\n".to_vec();
    p5.extend_from_slice(&[0u8; 4]);
    match ConvertRequest::new(&p5, PpmFormat::Binary)
        .convert()
        .unwrap_err()
    {
        PpmError::UnsupportedVariant(msg) => assert!(msg.contains("P5")),
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }

    let p7 = b"P7\n2 2\n255\n";
    assert!(matches!(
        DecodeRequest::new(p7).decode(),
        Err(PpmError::UnsupportedVariant(_))
    ));
}

#[test]
fn garbage_input_rejected() {
    assert!(matches!(
        DecodeRequest::new(b"BM not a ppm").decode(),
        Err(PpmError::UnrecognizedFormat)
    ));
    assert!(matches!(
        DecodeRequest::new(b"").decode(),
        Err(PpmError::UnexpectedEof)
    ));
}

#[test]
fn channel_value_above_maxval_rejected() {
    let over_declared_max = b"P3\n1 1\n100\n200 0 0\n";
    assert!(matches!(
        DecodeRequest::new(over_declared_max).decode(),
        Err(PpmError::InvalidData(_))
    ));

    let over_byte = b"P3\n1 1\n255\n300 0 0\n";
    assert!(matches!(
        DecodeRequest::new(over_byte).decode(),
        Err(PpmError::InvalidData(_))
    ));
}

#[test]
fn zero_dimensions_rejected() {
    assert!(matches!(
        DecodeRequest::new(b"P6\n0 4\n255\n").decode(),
        Err(PpmError::InvalidHeader(_))
    ));
}

#[test]
fn oversized_dimensions_rejected() {
    let src = b"P6\n4294967295 4294967295\n255\n";
    assert!(matches!(
        DecodeRequest::new(src).decode(),
        Err(PpmError::DimensionsTooLarge { .. })
    ));
}

#[test]
fn maxval_passes_through_conversion() {
    let src = b"P3\n1 1\n100\n100 0 50\n";
    let p6 = ConvertRequest::new(src, PpmFormat::Binary).convert().unwrap();
    assert_eq!(&p6[..], b"P6\n1 1\n100\n\x64\x00\x32");
}
