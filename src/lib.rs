//! # ppmconv
//!
//! Lossless conversion between the two canonical PPM pixel encodings:
//! P3 (decimal ASCII) and P6 (packed binary).
//!
//! ## Zero-Copy Decoding
//!
//! P6 input decodes to a borrowed slice of the input buffer — no allocation
//! or copy. P3 input is tokenized into an owned raster.
//!
//! ## Supported Formats
//!
//! - **P3** (PPM ASCII) — RGB, maxval up to 255
//! - **P6** (PPM binary) — RGB, maxval up to 255
//!
//! ## Non-Goals
//!
//! - The P1/P2/P4/P5 bitmap and grayscale variants, and P7 (PAM)
//! - maxval above 255 (16-bit channels)
//! - Any pixel processing beyond re-encoding — no scaling or requantizing
//!
//! ## Usage
//!
//! ```
//! use ppmconv::{ConvertRequest, Header, PpmFormat};
//!
//! let p3 = b"P3\n2 1\n255\n255 0 0 0 255 0\n";
//!
//! // Probe the header without decoding pixel data
//! let header = Header::from_bytes(p3)?;
//! assert_eq!((header.width, header.height), (2, 1));
//!
//! // Rewrite as binary P6
//! let p6 = ConvertRequest::new(p3, PpmFormat::Binary).convert()?;
//! assert!(p6.starts_with(b"P6\n2 1\n255\n"));
//! # Ok::<(), ppmconv::PpmError>(())
//! ```

#![forbid(unsafe_code)]

mod convert;
mod decode;
mod encode;
mod error;
mod limits;
mod ppm;

// Re-exports
pub use convert::ConvertRequest;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use error::PpmError;
pub use limits::Limits;
pub use ppm::{Header, PpmFormat};
pub use rgb::RGB8;
