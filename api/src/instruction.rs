use crate::error::CodecError;

/// Instruction set of the counter program.
///
/// Wire layout is a single tag byte followed by an operand whose presence and
/// size depend only on the tag: `Set` carries a little-endian u32 immediately
/// after the tag, the other variants carry nothing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CounterInstruction {
    Increment,
    Decrement,
    Set(u32),
}

impl CounterInstruction {
    pub const INCREMENT_TAG: u8 = 0;
    pub const DECREMENT_TAG: u8 = 1;
    pub const SET_TAG: u8 = 2;

    pub fn pack(&self) -> Vec<u8> {
        match self {
            Self::Increment => vec![Self::INCREMENT_TAG],
            Self::Decrement => vec![Self::DECREMENT_TAG],
            Self::Set(value) => {
                let mut data = Vec::with_capacity(5);
                data.push(Self::SET_TAG);
                data.extend_from_slice(&value.to_le_bytes());
                data
            }
        }
    }

    pub fn unpack(input: &[u8]) -> Result<Self, CodecError> {
        let (&tag, rest) = input.split_first().ok_or(CodecError::TruncatedInput)?;
        match tag {
            Self::INCREMENT_TAG => Ok(Self::Increment),
            Self::DECREMENT_TAG => Ok(Self::Decrement),
            Self::SET_TAG => {
                let value = rest
                    .get(..4)
                    .and_then(|bytes| bytes.try_into().ok())
                    .map(u32::from_le_bytes)
                    .ok_or(CodecError::TruncatedInput)?;
                Ok(Self::Set(value))
            }
            unknown => Err(CodecError::UnknownTag(unknown)),
        }
    }
}
