//! Image loading helper
//!
//! Reads a PNG or JPEG file and re-encodes it into an in-memory buffer in
//! the same format.

use std::io::Cursor;
use std::path::Path;

use bytes::Bytes;
use image::{ImageReader, ImageResult};

/// Load the image at `path` and re-encode it in its detected format
///
/// Open, decode and encode errors are returned as-is.
pub fn get_image_bytes(path: impl AsRef<Path>) -> ImageResult<Bytes> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode()?;

    let mut buf = Cursor::new(Vec::new());
    if let Some(format) = format {
        img.write_to(&mut buf, format)?;
    }

    Ok(Bytes::from(buf.into_inner()))
}
