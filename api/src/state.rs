use borsh::{BorshDeserialize, BorshSerialize};

use crate::error::CodecError;

/// On-chain record held by the counter account: a single little-endian u32.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Counter {
    pub count: u32,
}

impl Counter {
    /// Serialized size of the record; the data account is allocated with
    /// exactly this many bytes.
    pub const SIZE: usize = 4;

    /// Decodes a record from raw account data. Trailing bytes beyond
    /// [`Counter::SIZE`] are ignored; shorter input is rejected.
    pub fn try_from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        let mut prefix = data.get(..Self::SIZE).ok_or(CodecError::TruncatedInput)?;
        Self::deserialize(&mut prefix).map_err(|_| CodecError::TruncatedInput)
    }

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.count.to_le_bytes()
    }
}
