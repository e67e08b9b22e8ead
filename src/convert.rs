use crate::error::PpmError;
use crate::limits::Limits;
use crate::ppm::PpmFormat;

/// A full P3/P6 conversion: decode, re-tag the header, encode.
///
/// The output header is a copy of the input header with only the encoding
/// replaced; width, height, and maxval pass through unchanged. Nothing is
/// produced unless the whole raster decodes.
pub struct ConvertRequest<'a> {
    data: &'a [u8],
    target: PpmFormat,
    limits: Option<&'a Limits>,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(data: &'a [u8], target: PpmFormat) -> Self {
        Self {
            data,
            target,
            limits: None,
        }
    }

    /// Apply resource limits to the decode half of the conversion.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the conversion and return the re-encoded stream.
    ///
    /// Converting to the encoding the input already uses is allowed and
    /// normalizes the stream (comments dropped, canonical header layout).
    pub fn convert(self) -> Result<Vec<u8>, PpmError> {
        let decoded = crate::ppm::decode(self.data, self.limits)?;
        let out_header = decoded.header.with_format(self.target);
        crate::ppm::encode(decoded.pixels(), &out_header)
    }
}
