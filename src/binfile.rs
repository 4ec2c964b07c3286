// ABOUTME: Fixed-width binary file primitives shared by the pool and subscriber codecs
//
// Both data files use the same conventions: little-endian i32 scalars and
// fixed-width NUL-padded byte fields, so a record always occupies the same
// number of bytes regardless of content.

use std::io::{Read, Write};
use thiserror::Error;

/// Errors raised while encoding or decoding a data file
#[derive(Debug, Error)]
pub enum CodecError {
    /// Underlying file could not be opened, read, or written
    #[error("data file i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// File header carries a version this build does not understand
    #[error("unsupported data file version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the file header
        found: i32,
        /// Version this build writes and reads
        expected: i32,
    },

    /// File contents violate the record layout
    #[error("corrupt data file: {0}")]
    Corrupt(&'static str),
}

/// Write a little-endian i32 scalar
pub fn write_i32<W: Write>(w: &mut W, value: i32) -> Result<(), CodecError> {
    w.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Read a little-endian i32 scalar
pub fn read_i32<R: Read>(r: &mut R) -> Result<i32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Write a string into a fixed-width field, NUL-padded on the right.
///
/// Strings longer than the field are truncated at a character boundary so the
/// field never contains a torn UTF-8 sequence.
pub fn write_str_field<W: Write>(w: &mut W, value: &str, width: usize) -> Result<(), CodecError> {
    let mut field = vec![0u8; width];
    let mut end = 0;
    for (idx, ch) in value.char_indices() {
        let next = idx + ch.len_utf8();
        if next > width {
            break;
        }
        end = next;
    }
    field[..end].copy_from_slice(&value.as_bytes()[..end]);
    w.write_all(&field)?;
    Ok(())
}

/// Read a fixed-width NUL-padded string field
pub fn read_str_field<R: Read>(r: &mut R, width: usize) -> Result<String, CodecError> {
    let mut field = vec![0u8; width];
    r.read_exact(&mut field)?;
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8(field[..end].to_vec())
        .map_err(|_| CodecError::Corrupt("string field is not valid UTF-8"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_i32_round_trip() {
        let mut buf = Vec::new();
        write_i32(&mut buf, -1).unwrap();
        write_i32(&mut buf, 1_000_000).unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_i32(&mut cursor).unwrap(), -1);
        assert_eq!(read_i32(&mut cursor).unwrap(), 1_000_000);
    }

    #[test]
    fn test_str_field_pads_and_strips_nul() {
        let mut buf = Vec::new();
        write_str_field(&mut buf, "138", 12).unwrap();
        assert_eq!(buf.len(), 12);

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_str_field(&mut cursor, 12).unwrap(), "138");
    }

    #[test]
    fn test_str_field_truncates_at_char_boundary() {
        let mut buf = Vec::new();
        // 4 two-byte characters into a 7-byte field: only 3 fit cleanly
        write_str_field(&mut buf, "éééé", 7).unwrap();
        assert_eq!(buf.len(), 7);

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_str_field(&mut cursor, 7).unwrap(), "ééé");
    }

    #[test]
    fn test_short_read_is_io_error() {
        let mut cursor = Cursor::new(vec![0u8; 2]);
        assert!(matches!(read_i32(&mut cursor), Err(CodecError::Io(_))));
    }
}
