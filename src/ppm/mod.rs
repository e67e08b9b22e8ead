//! PPM subset: P3 (ASCII) and P6 (binary), maxval up to 255.

mod decode;
mod encode;

use crate::decode::DecodeOutput;
use crate::error::PpmError;
use crate::limits::Limits;

/// Which PPM pixel encoding to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PpmFormat {
    /// P3 — decimal ASCII channel values.
    Ascii,
    /// P6 — raw bytes, three per pixel.
    Binary,
}

impl PpmFormat {
    /// The magic number written after `P` in the header.
    pub fn magic(self) -> u8 {
        match self {
            PpmFormat::Ascii => 3,
            PpmFormat::Binary => 6,
        }
    }

    pub fn from_magic(magic: u32) -> Option<Self> {
        match magic {
            3 => Some(PpmFormat::Ascii),
            6 => Some(PpmFormat::Binary),
            _ => None,
        }
    }
}

/// Validated PPM header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub format: PpmFormat,
    pub width: u32,
    pub height: u32,
    /// Maximum channel intensity, in 1..=255.
    pub maxval: u32,
}

impl Header {
    /// Parse and validate the header of a PPM byte stream without touching
    /// pixel data.
    ///
    /// ```
    /// use ppmconv::{Header, PpmFormat};
    ///
    /// let header = Header::from_bytes(b"P6\n# probe me\n3 2\n255\n").unwrap();
    /// assert_eq!(header.format, PpmFormat::Binary);
    /// assert_eq!((header.width, header.height, header.maxval), (3, 2, 255));
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self, PpmError> {
        let raw = decode::parse_header(data)?;
        validate_header(&raw)
    }

    /// Copy of this header with only the encoding replaced. Width, height,
    /// and maxval pass through unchanged.
    pub fn with_format(self, format: PpmFormat) -> Self {
        Header { format, ..self }
    }

    /// Raster size in bytes (width * height * 3), overflow-checked.
    pub(crate) fn pixel_bytes(&self) -> Result<usize, PpmError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|px| px.checked_mul(3))
            .ok_or(PpmError::DimensionsTooLarge {
                width: self.width,
                height: self.height,
            })
    }
}

/// Semantic checks on a syntactically parsed header. Runs before any pixel
/// data is read, so unsupported inputs never reach the pixel readers.
fn validate_header(raw: &decode::RawHeader) -> Result<Header, PpmError> {
    if raw.maxval > 255 {
        return Err(PpmError::UnsupportedVariant(format!(
            "max color {} (only values up to 255 are supported)",
            raw.maxval
        )));
    }
    if raw.maxval == 0 {
        return Err(PpmError::InvalidHeader(
            "max color must be at least 1".into(),
        ));
    }
    if raw.width == 0 || raw.height == 0 {
        return Err(PpmError::InvalidHeader(format!(
            "image dimensions must be nonzero, got {}x{}",
            raw.width, raw.height
        )));
    }

    let format = PpmFormat::from_magic(raw.magic).ok_or_else(|| {
        PpmError::UnsupportedVariant(format!(
            "input magic number P{} (only P3 and P6 are supported)",
            raw.magic
        ))
    })?;

    Ok(Header {
        format,
        width: raw.width,
        height: raw.height,
        maxval: raw.maxval,
    })
}

/// Decode PPM data (called from DecodeRequest).
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
) -> Result<DecodeOutput<'a>, PpmError> {
    let raw = decode::parse_header(data)?;
    let header = validate_header(&raw)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(header.pixel_bytes()?)?;
    }

    match header.format {
        PpmFormat::Ascii => {
            let pixels = decode::decode_ascii(data, raw.data_offset, &header)?;
            Ok(DecodeOutput::owned(pixels, header))
        }
        PpmFormat::Binary => {
            let pixels = decode::decode_binary(data, raw.data_offset, &header)?;
            Ok(DecodeOutput::borrowed(pixels, header))
        }
    }
}

/// Encode a raster under `header` (called from EncodeRequest and convert).
pub(crate) fn encode(pixels: &[u8], header: &Header) -> Result<Vec<u8>, PpmError> {
    encode::encode_ppm(pixels, header)
}
