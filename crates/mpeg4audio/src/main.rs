#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

mod args;
mod config;
mod encoding;


use anyhow::{Context, Result};
use clap::Parser;
use mpeg4audio_codec::{AudioObjectType, AudioSpecificConfiguration};
use tracing::{debug, Level};

use self::args::{Args, Command};
use self::config::Config;
use self::encoding::Encoding;


fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_from_path(&args.config_dir)?;

    if let Err(why) = init_tracing(config.log_level.as_deref()) {
        eprintln!("Failed to initialize logger: {}", why);
    };

    let encoding = args.encoding.unwrap_or(config.encoding);
    debug!(?encoding, "Using config encoding");

    match args.cmd {
        Command::Decode { config: text } => {
            decode(&text, encoding)?;
        }
        Command::Encode {
            sample_rate,
            channels,
        } => {
            encode(sample_rate, channels, encoding)?;
        }
    }

    Ok(())
}

fn decode(text: &str, encoding: Encoding) -> Result<()> {
    let raw = encoding.decode(text)?;
    let asc = AudioSpecificConfiguration::decode(&raw)
        .with_context(|| format!("Failed to decode audio specific config {:?}", text.trim()))?;

    println!("type: {}", asc.object_type);
    println!("sample_rate: {}", asc.sample_rate);
    println!("channel_count: {}", asc.channel_count);
    println!("codec: {}", asc.rfc6381_codec());

    Ok(())
}

fn encode(sample_rate: u32, channel_count: u8, encoding: Encoding) -> Result<()> {
    let asc = AudioSpecificConfiguration {
        object_type: AudioObjectType::AacLowComplexity,
        sample_rate,
        channel_count,
    };

    let raw = asc
        .encode()
        .with_context(|| format!("Failed to encode {}", asc))?;

    println!("{}", encoding.encode(&raw));

    Ok(())
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    use tracing_subscriber::filter::Targets;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let max_level = match log_level {
        Some(level) => level
            .parse::<Level>()
            .with_context(|| format!("Invalid log level {:?}", level))?,
        None if cfg!(debug_assertions) => Level::TRACE,
        None => Level::INFO,
    };

    let filter_layer = Targets::new()
        .with_target("mpeg4audio", max_level)
        .with_target("mpeg4audio_codec", max_level)
        .with_default(Level::ERROR);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr))
        .with(filter_layer)
        .try_init()?;

    Ok(())
}
