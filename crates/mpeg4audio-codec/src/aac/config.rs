use std::convert::TryFrom;
use std::fmt;

use tracing::{debug, trace};

use super::common::{AudioObjectType, ChannelConfiguration, SamplingFrequencyIndex};
use super::AacError;
use crate::bitstream::{BitReader, BitWriter};


// Bits | Description
// ---- | -----------
// 5    | Audio object type
// 6    | Audio object type extension (only if type is 31)
// 4    | Sampling frequency index
// 24   | Sampling frequency (only if index is 15)
// 4    | Channel configuration
// AOT specific section (ignored)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpecificConfiguration {
    pub object_type: AudioObjectType,
    pub sample_rate: u32,
    pub channel_count: u8,
}

impl AudioSpecificConfiguration {
    const MAX_EXPLICIT_SAMPLE_RATE: u32 = 0x00FF_FFFF;

    pub fn decode(input: &[u8]) -> Result<Self, AacError> {
        let mut reader = BitReader::new(input);

        let object_type = match reader.read_bits(5)? {
            AudioObjectType::ESCAPE => 32 + reader.read_bits(6)?,
            base => base,
        };
        let object_type = AudioObjectType::try_from(object_type)?;

        let sampling_frequency_index = SamplingFrequencyIndex::try_from(reader.read_bits(4)? as u8)?;
        let sample_rate = match sampling_frequency_index.sample_rate() {
            Some(rate) => rate,
            None => reader.read_bits(24)?,
        };

        let channel_configuration = ChannelConfiguration::try_from(reader.read_bits(4)? as u8)?;
        let channel_count = channel_configuration.channel_count();

        trace!(
            %object_type,
            sampling_frequency_index = u8::from(sampling_frequency_index),
            sample_rate,
            channel_configuration = u8::from(channel_configuration),
            "Decoded audio specific config"
        );

        if reader.remaining_bits() > 0 {
            debug!(
                "Ignoring {} trailing bits after {} decoded bits",
                reader.remaining_bits(),
                reader.position()
            );
        }

        Ok(Self {
            object_type,
            sample_rate,
            channel_count,
        })
    }

    /// Writes the shortest config describing this record, padded to a full byte.
    pub fn encode(&self) -> Result<Vec<u8>, AacError> {
        let sampling_frequency_index = match SamplingFrequencyIndex::from_sample_rate(self.sample_rate) {
            Some(index) => index,
            None if self.sample_rate > 0 && self.sample_rate <= Self::MAX_EXPLICIT_SAMPLE_RATE => {
                SamplingFrequencyIndex::EXPLICIT
            }
            None => return Err(AacError::UnencodableSampleRate(self.sample_rate)),
        };

        let channel_configuration = ChannelConfiguration::from_channel_count(self.channel_count)
            .ok_or(AacError::UnencodableChannelCount(self.channel_count))?;

        let mut writer = BitWriter::new();
        writer.write_bits(5, self.object_type.into())?;
        writer.write_bits(4, u8::from(sampling_frequency_index).into())?;
        if sampling_frequency_index.is_explicit() {
            writer.write_bits(24, self.sample_rate)?;
        }
        writer.write_bits(4, u8::from(channel_configuration).into())?;

        Ok(writer.finish()?)
    }

    /// Codecs parameter as defined by RFC 6381, e.g. `mp4a.40.2`.
    pub fn rfc6381_codec(&self) -> String {
        format!("mp4a.40.{}", u32::from(self.object_type))
    }
}

impl TryFrom<&[u8]> for AudioSpecificConfiguration {
    type Error = AacError;

    fn try_from(val: &[u8]) -> Result<Self, Self::Error> {
        Self::decode(val)
    }
}

impl fmt::Display for AudioSpecificConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} Hz, {} channels",
            self.object_type, self.sample_rate, self.channel_count
        )
    }
}
