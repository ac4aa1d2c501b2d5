use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::ValueEnum;
use serde::Deserialize;


/// How a config is written down in a session description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Hex,
    Base64,
}

impl Encoding {
    pub fn decode(self, text: &str) -> Result<Vec<u8>> {
        let text = text.trim();

        match self {
            Self::Hex => hex::decode(text).with_context(|| format!("Invalid hex config {:?}", text)),
            Self::Base64 => STANDARD
                .decode(text)
                .with_context(|| format!("Invalid base64 config {:?}", text)),
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Hex => hex::encode(bytes),
            Self::Base64 => STANDARD.encode(bytes),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hex_in_any_case() {
        assert_eq!(Encoding::Hex.decode("1190").unwrap(), vec![0x11, 0x90]);
        assert_eq!(Encoding::Hex.decode(" 12080056E500\n").unwrap(), vec![
            0x12, 0x08, 0x00, 0x56, 0xE5, 0x00
        ]);
    }

    #[test]
    fn decodes_base64() {
        assert_eq!(Encoding::Base64.decode("EZA=").unwrap(), vec![0x11, 0x90]);
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(Encoding::Hex.decode("119").is_err());
        assert!(Encoding::Hex.decode("zz").is_err());
        assert!(Encoding::Base64.decode("E!A=").is_err());
    }

    #[test]
    fn encodes_lowercase_hex_and_padded_base64() {
        assert_eq!(Encoding::Hex.encode(&[0x11, 0xB8]), "11b8");
        assert_eq!(Encoding::Base64.encode(&[0x11, 0x90]), "EZA=");
    }
}
