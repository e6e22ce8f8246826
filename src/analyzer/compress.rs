//! Compressed size measurement
//!
//! Only the compressed length is kept; the compressed bytes are discarded.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};

/// Brotli quality used for measurement (maximum)
pub const BROTLI_QUALITY: u32 = 11;

/// Brotli window size (log2) used for measurement
pub const BROTLI_WINDOW: u32 = 22;

const BROTLI_BUFFER: usize = 4096;

/// Size of `bytes` after gzip at the default level
///
/// # Examples
///
/// ```
/// use artifact_size::analyzer::compress::gzip_size;
///
/// let size = gzip_size(&[b'a'; 1000]).unwrap();
/// assert!(size > 0 && size < 1000);
/// ```
pub fn gzip_size(bytes: &[u8]) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?.len() as u64)
}

/// Size of `bytes` after brotli at maximum quality
pub fn brotli_size(bytes: &[u8]) -> io::Result<u64> {
    let mut writer =
        brotli::CompressorWriter::new(Vec::new(), BROTLI_BUFFER, BROTLI_QUALITY, BROTLI_WINDOW);
    writer.write_all(bytes)?;
    // into_inner finishes the stream
    Ok(writer.into_inner().len() as u64)
}
