//! Filesystem helpers shared across the library and its front ends.

use std::io::{self, Read, Write};

/// Size of the intermediate buffer used when importing cartridge images.
pub const IMPORT_BUFFER_BYTES: usize = 4096;

/// Copy `reader` into `writer` through a fixed-size stack buffer.
///
/// Returns the number of bytes copied. Interrupted reads are retried; any
/// other error aborts the copy and leaves whatever was already written in
/// place.
pub fn copy_buffered<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<u64> {
    let mut buf = [0u8; IMPORT_BUFFER_BYTES];
    let mut total = 0u64;
    loop {
        let len = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(len) => len,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..len])?;
        total += len as u64;
    }
    writer.flush()?;
    Ok(total)
}
