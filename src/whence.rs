use std::convert::TryFrom;

use crate::error::Error;

/// Origin a seek offset is measured from, in the spirit of |lseek|'s |whence| argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Whence {
    /// Offset is an absolute position.
    Beg,
    /// Offset is relative to the cursor being moved.
    Cur,
    /// Offset is relative to the end: the write cursor for |seekg|, the storage length for
    /// |seekp|.
    End,
}

/// Accepts the integer constants older callers pass around: 1 for |Beg|, 0 for |Cur| and -1 for
/// |End|.
impl TryFrom<i32> for Whence {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Whence::Beg),
            0 => Ok(Whence::Cur),
            -1 => Ok(Whence::End),
            other => Err(Error::InvalidArgument(format!(
                "unrecognized seek mode: {}",
                other
            ))),
        }
    }
}
