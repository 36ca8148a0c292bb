use crate::byte_buffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::int_codec::{read_int, write_int};

/// Fixed-width 32-bit integer helpers. Byte order follows the buffer's |big_endian| setting.
pub trait ByteBufferExts {
    /// Consume 4 bytes and interpret them as a two's-complement signed integer.
    fn get_int32(&mut self) -> Result<i32>;
    /// Consume 4 bytes and interpret them as an unsigned integer.
    fn get_uint32(&mut self) -> Result<u32>;
    /// Append |value| as 4 bytes. Fails if |value| doesn't fit in an i32.
    fn put_int32(&mut self, value: i64) -> Result<()>;
    /// Append |value| as 4 bytes. Fails if |value| doesn't fit in a u32.
    fn put_uint32(&mut self, value: i64) -> Result<()>;
}

impl ByteBufferExts for ByteBuffer {
    fn get_int32(&mut self) -> Result<i32> {
        Ok(self.get_uint32()? as i32)
    }

    fn get_uint32(&mut self) -> Result<u32> {
        let big_endian = self.big_endian();
        let bytes = self.get(4)?;
        Ok(read_int(bytes, 0, 4, big_endian)? as u32)
    }

    fn put_int32(&mut self, value: i64) -> Result<()> {
        if value < i32::MIN as i64 || value > i32::MAX as i64 {
            return Err(Error::InvalidArgument(format!(
                "{} does not fit in a 32-bit signed integer",
                value
            )));
        }
        put_u32(self, value as u32)
    }

    fn put_uint32(&mut self, value: i64) -> Result<()> {
        if value < 0 || value > u32::MAX as i64 {
            return Err(Error::InvalidArgument(format!(
                "{} does not fit in a 32-bit unsigned integer",
                value
            )));
        }
        put_u32(self, value as u32)
    }
}

fn put_u32(buf: &mut ByteBuffer, value: u32) -> Result<()> {
    let mut bytes = [0u8; 4];
    write_int(&mut bytes, 0, 4, value as u64, buf.big_endian())?;
    buf.put(&bytes);
    Ok(())
}
