//! Raster file I/O.
//!
//! Decoding sniffs the format from the file content and honors JPEG EXIF
//! orientation; encoding picks the codec from the target extension. Codec
//! work is delegated to the `image` crate; this module only adapts it to
//! [`Raster`](crate::Raster) buffers and the editor's error taxonomy.

mod decode;
mod encode;

pub use decode::{decode_bytes, read_raster, DecodeError};
pub use encode::{
    encode_bmp, encode_jpeg, encode_png, write_raster, EncodeError, JPEG_SAVE_QUALITY,
};
