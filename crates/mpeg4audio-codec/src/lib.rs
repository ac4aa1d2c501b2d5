//! Decoding of MPEG-4 audio specific configs (ISO/IEC 14496-3 section 1.6.2.1),
//! as carried out of band for AAC streams, e.g. in the `config` parameter of
//! an SDP `fmtp` attribute.

#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

pub mod aac;
pub mod bitstream;


pub use self::aac::{AacError, AudioObjectType, AudioSpecificConfiguration};
pub use self::bitstream::BitstreamError;
