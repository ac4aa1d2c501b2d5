use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::encoding::Encoding;


#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    #[arg(short, long, default_value = "./", global = true)]
    pub config_dir: PathBuf,

    /// Text encoding of configs, overrides the configured default
    #[arg(short, long, value_enum, global = true)]
    pub encoding: Option<Encoding>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode an audio specific config, e.g. the `config` value of an SDP fmtp line
    Decode {
        config: String,
    },
    /// Build an AAC-LC audio specific config
    Encode {
        #[arg(long, required = true)]
        sample_rate: u32,
        #[arg(long, required = true)]
        channels: u8,
    },
}


#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_decode_with_encoding_override() {
        let args = Args::parse_from(["mpeg4audio", "decode", "EZA=", "--encoding", "base64"]);

        assert_eq!(args.encoding, Some(Encoding::Base64));
        assert!(matches!(args.cmd, Command::Decode { config } if config == "EZA="));
    }

    #[test]
    fn parses_encode() {
        let args = Args::parse_from([
            "mpeg4audio",
            "encode",
            "--sample-rate",
            "48000",
            "--channels",
            "2",
        ]);

        assert_eq!(args.encoding, None);
        assert!(matches!(
            args.cmd,
            Command::Encode { sample_rate: 48000, channels: 2 }
        ));
    }
}
