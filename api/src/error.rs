use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("input shorter than the declared layout")]
    TruncatedInput,
    #[error("unknown instruction tag: {0}")]
    UnknownTag(u8),
}

impl From<CodecError> for ProgramError {
    fn from(_: CodecError) -> Self {
        ProgramError::InvalidInstructionData
    }
}
