//! PPM writers: P3 (ASCII) and P6 (binary).

use crate::error::PpmError;
use crate::ppm::{Header, PpmFormat};

/// Encode a raster to PPM under `header`.
///
/// The raster must hold at least width * height * 3 bytes in row-major
/// R, G, B order. Channel values are written through unchanged, and maxval
/// is taken verbatim from the header.
pub(crate) fn encode_ppm(pixels: &[u8], header: &Header) -> Result<Vec<u8>, PpmError> {
    let expected = header.pixel_bytes()?;
    if pixels.len() < expected {
        return Err(PpmError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }
    if header.maxval == 0 || header.maxval > 255 {
        return Err(PpmError::UnsupportedVariant(format!(
            "max color {} cannot be encoded",
            header.maxval
        )));
    }

    match header.format {
        PpmFormat::Ascii => Ok(encode_ascii(&pixels[..expected], header)),
        PpmFormat::Binary => Ok(encode_binary(&pixels[..expected], header)),
    }
}

fn header_line(header: &Header) -> String {
    format!(
        "P{}\n{} {}\n{}\n",
        header.format.magic(),
        header.width,
        header.height,
        header.maxval
    )
}

fn encode_ascii(pixels: &[u8], header: &Header) -> Vec<u8> {
    let prefix = header_line(header);
    // Worst case per channel: three digits and a newline.
    let mut out = Vec::with_capacity(prefix.len() + pixels.len() * 4);
    out.extend_from_slice(prefix.as_bytes());

    // One channel value per line. Readers accept any whitespace-delimited
    // layout, but this is the layout we commit to producing.
    for &value in pixels {
        out.extend_from_slice(format!("{value}\n").as_bytes());
    }

    out
}

fn encode_binary(pixels: &[u8], header: &Header) -> Vec<u8> {
    let prefix = header_line(header);
    let mut out = Vec::with_capacity(prefix.len() + pixels.len());
    out.extend_from_slice(prefix.as_bytes());
    out.extend_from_slice(pixels);
    out
}
