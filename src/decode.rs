use std::borrow::Cow;

use rgb::AsPixels as _;

use crate::error::PpmError;
use crate::limits::Limits;
use crate::ppm::Header;

/// A PPM decode operation.
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Apply resource limits to this decode.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode the full raster.
    ///
    /// P6 input decodes zero-copy: the raster borrows the input buffer.
    /// P3 input is tokenized into an owned raster.
    pub fn decode(self) -> Result<DecodeOutput<'a>, PpmError> {
        crate::ppm::decode(self.data, self.limits)
    }
}

/// Decoded raster. Pixels may be borrowed (zero-copy) or owned.
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    /// Header of the stream the raster came from.
    pub header: Header,
}

impl<'a> DecodeOutput<'a> {
    /// Raster bytes, row-major R, G, B.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Raster as typed RGB pixels, indexed by `row * width + col`.
    pub fn as_pixels(&self) -> &[rgb::RGB8] {
        self.pixels().as_pixels()
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: Cow::Owned(self.pixels.into_owned()),
            header: self.header,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    pub(crate) fn borrowed(data: &'a [u8], header: Header) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            header,
        }
    }

    pub(crate) fn owned(data: Vec<u8>, header: Header) -> Self {
        Self {
            pixels: Cow::Owned(data),
            header,
        }
    }
}
