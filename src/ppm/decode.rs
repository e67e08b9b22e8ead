//! PPM header parser and P3/P6 pixel readers.

use crate::error::PpmError;
use crate::ppm::Header;

/// Header fields as parsed off the wire, before semantic validation.
///
/// The magic number is kept as the raw integer token: the grammar accepts any
/// non-negative integer here, and rejecting numbers other than 3 and 6 is the
/// orchestrator's job, not the parser's.
#[derive(Debug)]
pub(crate) struct RawHeader {
    pub magic: u32,
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    /// Byte offset of the first pixel datum.
    pub data_offset: usize,
}

/// Parse the PPM header and locate the start of pixel data.
///
/// Grammar: literal `P`, an integer magic token, then width, height, and
/// maxval as whitespace-delimited integer tokens. Any number of `#` comment
/// lines may sit before each of the three dimension tokens. After maxval,
/// exactly one separator byte is discarded without inspection.
pub(crate) fn parse_header(data: &[u8]) -> Result<RawHeader, PpmError> {
    let mut cursor = Cursor::new(data);

    match cursor.bump() {
        Some(b'P') => {}
        Some(_) => return Err(PpmError::UnrecognizedFormat),
        None => return Err(PpmError::UnexpectedEof),
    }

    let magic = cursor.read_int().map_err(IntError::into_header_error)?;

    cursor.skip_comments()?;
    let width = cursor.read_int().map_err(IntError::into_header_error)?;

    cursor.skip_comments()?;
    let height = cursor.read_int().map_err(IntError::into_header_error)?;

    cursor.skip_comments()?;
    let maxval = cursor.read_int().map_err(IntError::into_header_error)?;

    // The single mandatory separator before pixel data. It is consumed
    // unconditionally, whatever byte it is.
    let _ = cursor.bump();

    Ok(RawHeader {
        magic,
        width,
        height,
        maxval,
        data_offset: cursor.pos,
    })
}

/// Read width*height P3 pixels as decimal tokens starting at `offset`.
pub(crate) fn decode_ascii(
    data: &[u8],
    offset: usize,
    header: &Header,
) -> Result<Vec<u8>, PpmError> {
    let count = header.pixel_bytes()?;
    let remaining = data.len().saturating_sub(offset);

    // Each channel value is at least one digit plus a separating byte, so a
    // stream with fewer than 2n-1 bytes cannot hold n values. Checking up
    // front keeps a lying header from reserving an absurd raster.
    if remaining < count.saturating_mul(2).saturating_sub(1) {
        return Err(PpmError::UnexpectedEof);
    }

    let mut cursor = Cursor { data, pos: offset };
    let mut out = Vec::with_capacity(count);

    for _ in 0..count {
        let value = cursor.read_int().map_err(IntError::into_data_error)?;
        if value > header.maxval {
            return Err(PpmError::InvalidData(format!(
                "channel value {value} exceeds max color {}",
                header.maxval
            )));
        }
        out.push(value as u8);
    }

    Ok(out)
}

/// Locate the raw P6 pixel bytes starting at `offset`. Zero-copy: returns a
/// slice of the input.
pub(crate) fn decode_binary<'a>(
    data: &'a [u8],
    offset: usize,
    header: &Header,
) -> Result<&'a [u8], PpmError> {
    let count = header.pixel_bytes()?;
    let pixel_data = data.get(offset..).ok_or(PpmError::UnexpectedEof)?;

    if pixel_data.len() < count {
        return Err(PpmError::UnexpectedEof);
    }

    Ok(&pixel_data[..count])
}

// ── Cursor over &[u8] ───────────────────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

/// Why an integer token could not be read.
enum IntError {
    Eof,
    Unexpected(u8),
    Overflow,
}

impl IntError {
    fn into_header_error(self) -> PpmError {
        match self {
            IntError::Eof => PpmError::UnexpectedEof,
            IntError::Unexpected(b) => PpmError::InvalidHeader(format!(
                "expected integer, found byte {:#04x}",
                b
            )),
            IntError::Overflow => {
                PpmError::InvalidHeader("integer token overflows 32 bits".into())
            }
        }
    }

    fn into_data_error(self) -> PpmError {
        match self {
            IntError::Eof => PpmError::UnexpectedEof,
            IntError::Unexpected(b) => PpmError::InvalidData(format!(
                "expected integer, found byte {:#04x}",
                b
            )),
            IntError::Overflow => {
                PpmError::InvalidData("integer token overflows 32 bits".into())
            }
        }
    }
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and any run of `#` comment lines.
    ///
    /// A comment runs up to and including its terminating newline; reaching
    /// end of input inside one is an error. Called at the three points of the
    /// header grammar where comments may appear.
    fn skip_comments(&mut self) -> Result<(), PpmError> {
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'#') {
                return Ok(());
            }
            loop {
                match self.bump() {
                    Some(b'\n') => break,
                    Some(_) => {}
                    None => {
                        return Err(PpmError::InvalidHeader(
                            "comment not terminated before end of input".into(),
                        ));
                    }
                }
            }
        }
    }

    /// Read one decimal integer token: skip leading whitespace, then consume
    /// digits until the first non-digit byte.
    fn read_int(&mut self) -> Result<u32, IntError> {
        self.skip_whitespace();

        let mut value: u32 = 0;
        let mut seen_digit = false;

        while let Some(b) = self.peek() {
            if !b.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(b - b'0')))
                .ok_or(IntError::Overflow)?;
            seen_digit = true;
            self.pos += 1;
        }

        if !seen_digit {
            return match self.peek() {
                None => Err(IntError::Eof),
                Some(b) => Err(IntError::Unexpected(b)),
            };
        }
        Ok(value)
    }
}
