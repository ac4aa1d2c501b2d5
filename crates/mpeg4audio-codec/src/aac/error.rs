use thiserror::Error;

use crate::bitstream::BitstreamError;


#[derive(Debug, Error)]
pub enum AacError {
    #[error("unexpected end of input")]
    EndOfInput,

    #[error("unsupported type: {0}")]
    UnsupportedType(u32),

    #[error("invalid sample rate index ({0})")]
    InvalidSampleRateIndex(u8),

    #[error("invalid channel configuration ({0})")]
    InvalidChannelConfiguration(u8),

    /// Channel configuration 0, which defers the layout to a program config element.
    #[error("not yet supported")]
    ChannelConfigurationNotSupported,

    #[error("sample rate {0} cannot be encoded")]
    UnencodableSampleRate(u32),

    #[error("channel count {0} cannot be encoded")]
    UnencodableChannelCount(u8),

    #[error(transparent)]
    Bitstream(BitstreamError),
}

impl From<BitstreamError> for AacError {
    fn from(err: BitstreamError) -> Self {
        match err {
            BitstreamError::EndOfInput => Self::EndOfInput,
            other => Self::Bitstream(other),
        }
    }
}
