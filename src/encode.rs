use crate::error::PpmError;
use crate::ppm::{Header, PpmFormat};

/// A PPM encode operation.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: PpmFormat,
}

impl EncodeRequest {
    pub fn new(format: PpmFormat) -> Self {
        Self { format }
    }

    /// Encode a raster of `width * height` RGB pixels (3 bytes each,
    /// row-major) with the given maxval.
    pub fn encode(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        maxval: u32,
    ) -> Result<Vec<u8>, PpmError> {
        let header = Header {
            format: self.format,
            width,
            height,
            maxval,
        };
        crate::ppm::encode(pixels, &header)
    }
}
