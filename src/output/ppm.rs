//! PPM (P6) output encoder and header reader.
//!
//! The binary PPM container carries a three-line ASCII header (`P6`,
//! `<width> <height>`, `255`) followed by one (R, G, B) byte triple per
//! pixel, rows top to bottom. Writing matches the canvas buffer's row-major
//! layout exactly; the read path validates the header only.

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// The P6 signature, the first two bytes of every binary PPM file.
const PPM_MAGIC: &[u8; 2] = b"P6";

/// PPM encoder for canvas output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a canvas to a PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(canvas: &Canvas, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&Self::to_bytes(canvas))?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a canvas to PPM bytes.
    #[must_use]
    pub fn to_bytes(canvas: &Canvas) -> Vec<u8> {
        let (width, height) = (canvas.width(), canvas.height());
        let mut out = Vec::with_capacity(width * height * 3 + 32);
        out.extend_from_slice(format!("P6\n{width} {height}\n255\n").as_bytes());
        // Rows outer, columns inner: the buffer's row-major order.
        for row in canvas.pixels().chunks_exact(width) {
            for pixel in row {
                out.extend_from_slice(&pixel.to_array());
            }
        }
        out
    }
}

/// Parsed PPM header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Maximum channel value (255 for everything this crate writes).
    pub max_value: u32,
}

/// PPM header reader.
///
/// Validates the container without decoding pixel data. Failures are
/// distinct per kind: a missing file, an unsupported extension and a wrong
/// signature each surface as their own error.
pub struct PpmDecoder;

impl PpmDecoder {
    /// Read and validate the header of a PPM file.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] if the path does not exist,
    /// [`Error::UnsupportedFormat`] for an extension other than `ppm`,
    /// [`Error::BadMagic`] if the signature is not `P6`, and [`Error::Io`]
    /// for malformed header fields or underlying read failures.
    pub fn read_header<P: AsRef<Path>>(path: P) -> Result<PpmHeader> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if extension != "ppm" {
            return Err(Error::UnsupportedFormat { extension });
        }

        let mut reader = BufReader::new(File::open(path)?);
        let mut magic = [0u8; 2];
        reader.read_exact(&mut magic)?;
        if &magic != PPM_MAGIC {
            return Err(Error::BadMagic);
        }

        let width = read_header_field(&mut reader)?;
        let height = read_header_field(&mut reader)?;
        let max_value = read_header_field(&mut reader)? as u32;

        Ok(PpmHeader {
            width,
            height,
            max_value,
        })
    }
}

/// Read one whitespace-delimited decimal field from the header.
fn read_header_field<R: Read>(reader: &mut R) -> Result<usize> {
    let mut byte = [0u8; 1];
    let mut value: Option<usize> = None;

    loop {
        if reader.read(&mut byte)? == 0 {
            break;
        }
        match byte[0] {
            b'0'..=b'9' => {
                let digit = usize::from(byte[0] - b'0');
                value = Some(value.unwrap_or(0) * 10 + digit);
            }
            b' ' | b'\t' | b'\r' | b'\n' => {
                if value.is_some() {
                    break;
                }
            }
            _ => {
                return Err(malformed_header());
            }
        }
    }

    value.ok_or_else(malformed_header)
}

fn malformed_header() -> Error {
    Error::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "malformed PPM header field",
    ))
}
