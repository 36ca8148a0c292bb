//! A growable byte buffer with independent read and write cursors, |lseek|-style positioning and
//! endian-aware fixed-width integer packing.

pub mod byte_buffer;
pub mod byte_buffer_exts;
pub mod error;
pub mod int_codec;
pub mod whence;

pub use byte_buffer::ByteBuffer;
pub use byte_buffer_exts::ByteBufferExts;
pub use error::{Error, Result};
pub use int_codec::{read_int, write_int};
pub use whence::Whence;
