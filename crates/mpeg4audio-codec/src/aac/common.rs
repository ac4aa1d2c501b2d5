use std::convert::TryFrom;
use std::fmt;

use super::AacError;


// See ISO/IEC 14496-3 Table 1.18
const SAMPLE_RATES: [u32; 13] = [
    96_000, 88_200, 64_000, 48_000, 44_100, 32_000, 24_000, 22_050, 16_000, 12_000, 11_025, 8_000,
    7_350,
];

// See ISO/IEC 14496-3 Table 1.19, indexed by configuration - 1
const CHANNEL_COUNTS: [u8; 7] = [1, 2, 3, 4, 5, 6, 8];


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingFrequencyIndex(u8);

impl SamplingFrequencyIndex {
    /// Signals a 24 bit sample rate following the index.
    pub const EXPLICIT: Self = Self(0x0F);

    pub fn from_sample_rate(rate: u32) -> Option<Self> {
        SAMPLE_RATES
            .iter()
            .position(|&r| r == rate)
            .map(|idx| Self(idx as u8))
    }

    pub fn is_explicit(self) -> bool {
        self == Self::EXPLICIT
    }

    /// Table rate for this index, `None` for the explicit marker.
    pub fn sample_rate(self) -> Option<u32> {
        SAMPLE_RATES.get(usize::from(self.0)).copied()
    }

    fn is_reserved(val: u8) -> bool {
        matches!(val, 0x0D | 0x0E)
    }
}

impl From<SamplingFrequencyIndex> for u8 {
    fn from(val: SamplingFrequencyIndex) -> Self {
        val.0
    }
}

impl TryFrom<u8> for SamplingFrequencyIndex {
    type Error = AacError;

    fn try_from(val: u8) -> Result<Self, AacError> {
        if Self::is_reserved(val) || val > 0x0F {
            return Err(AacError::InvalidSampleRateIndex(val));
        }

        Ok(Self(val))
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfiguration(u8);

impl ChannelConfiguration {
    pub fn from_channel_count(count: u8) -> Option<Self> {
        CHANNEL_COUNTS
            .iter()
            .position(|&c| c == count)
            .map(|idx| Self(idx as u8 + 1))
    }

    pub fn channel_count(self) -> u8 {
        CHANNEL_COUNTS[usize::from(self.0) - 1]
    }
}

impl From<ChannelConfiguration> for u8 {
    fn from(val: ChannelConfiguration) -> Self {
        val.0
    }
}

impl TryFrom<u8> for ChannelConfiguration {
    type Error = AacError;

    fn try_from(val: u8) -> Result<Self, AacError> {
        match val {
            0 => Err(AacError::ChannelConfigurationNotSupported),
            1..=7 => Ok(Self(val)),
            _ => Err(AacError::InvalidChannelConfiguration(val)),
        }
    }
}


// See [MPEG-4 Audio Object Types][audio_object_types]
//
// [audio_object_types]: https://en.wikipedia.org/wiki/MPEG-4_Part_3#MPEG-4_Audio_Object_Types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AudioObjectType {
    AacLowComplexity = 2,
}

impl AudioObjectType {
    /// Base type value announcing a 6 bit extension field.
    pub const ESCAPE: u32 = 31;
}

impl From<AudioObjectType> for u32 {
    fn from(val: AudioObjectType) -> Self {
        val as u32
    }
}

impl TryFrom<u32> for AudioObjectType {
    type Error = AacError;

    fn try_from(value: u32) -> Result<Self, AacError> {
        Ok(match value {
            2 => Self::AacLowComplexity,
            _ => return Err(AacError::UnsupportedType(value)),
        })
    }
}

impl fmt::Display for AudioObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AacLowComplexity => f.write_str("AAC-LC"),
        }
    }
}
