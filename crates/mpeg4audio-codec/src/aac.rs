pub mod common;
pub mod config;
pub mod error;


pub use self::common::{AudioObjectType, ChannelConfiguration, SamplingFrequencyIndex};
pub use self::config::AudioSpecificConfiguration;
pub use self::error::AacError;
