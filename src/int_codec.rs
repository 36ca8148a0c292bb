use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::error::{Error, Result};

/// Widest integer the codec can represent.
const MAX_WIDTH: usize = std::mem::size_of::<u64>();

fn check_bounds(buf_len: usize, index: usize, width: usize) -> Result<()> {
    if width < 1 || width > MAX_WIDTH {
        return Err(Error::OutOfRange(format!(
            "integer width must be between 1 and {} bytes, got {}",
            MAX_WIDTH, width
        )));
    }
    match index.checked_add(width) {
        Some(end) if end <= buf_len => Ok(()),
        _ => Err(Error::OutOfRange(format!(
            "{} bytes at index {} exceed buffer of length {}",
            width, index, buf_len
        ))),
    }
}

/// Read |width| bytes starting at |index| of |buf| as an unsigned integer. When |big_endian| is
/// set the byte at |index| is the most significant one, otherwise it is the least significant.
pub fn read_int(buf: &[u8], index: usize, width: usize, big_endian: bool) -> Result<u64> {
    check_bounds(buf.len(), index, width)?;
    let bytes = &buf[index..index + width];
    let value = if big_endian {
        BigEndian::read_uint(bytes, width)
    } else {
        LittleEndian::read_uint(bytes, width)
    };
    Ok(value)
}

/// Write the low-order |width| bytes of |value| into |buf| at |index|, using the same byte order
/// rule as |read_int|. Bits of |value| above |width| bytes are dropped.
pub fn write_int(
    buf: &mut [u8],
    index: usize,
    width: usize,
    value: u64,
    big_endian: bool,
) -> Result<()> {
    check_bounds(buf.len(), index, width)?;
    // byteorder rejects values wider than |width|, so drop the high bytes first
    let value = if width == MAX_WIDTH {
        value
    } else {
        value & ((1u64 << (width * 8)) - 1)
    };
    let bytes = &mut buf[index..index + width];
    if big_endian {
        BigEndian::write_uint(bytes, value, width);
    } else {
        LittleEndian::write_uint(bytes, value, width);
    }
    Ok(())
}
