use std::path::PathBuf;
use anyhow::Result;
use clap::Parser;
use jack_portnames::hal::{CardHandle, LookupConfig, PortNameResolver, ProcCard};

/// Show the port names the JACK ALSA driver would register for a card
#[derive(Parser, Debug)]
#[command(name = "jack-portnames", version)]
struct Args {
    /// ALSA card index, name read from /proc/asound/cards
    #[arg(long, conflicts_with = "card_name")]
    card_index: Option<u32>,

    /// Card display name, used as given
    #[arg(long)]
    card_name: Option<String>,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48000)]
    rate: u32,

    /// Number of capture channels
    #[arg(long, default_value_t = 2)]
    capture: usize,

    /// Number of playback channels
    #[arg(long, default_value_t = 2)]
    playback: usize,

    /// Lookup configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Home directory for per-user port files
    #[arg(long)]
    home: Option<PathBuf>,

    /// Directory for system-wide port files
    #[arg(long)]
    system_dir: Option<PathBuf>,

    /// Print the table as JSON
    #[arg(long)]
    json: bool,
}

/// Card known only by name
struct NamedCard {
    name: Option<String>,
    sample_rate: u32,
    capture_channels: usize,
    playback_channels: usize,
}

impl CardHandle for NamedCard {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn capture_channels(&self) -> usize {
        self.capture_channels
    }

    fn playback_channels(&self) -> usize {
        self.playback_channels
    }

    fn card_name(&self) -> Result<String> {
        self.name
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No card name given"))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => LookupConfig::load(path)?,
        None => LookupConfig::from_env(),
    };
    if args.home.is_some() {
        config.home_dir = args.home.clone();
    }
    if let Some(dir) = &args.system_dir {
        config.system_dir = dir.clone();
    }

    let card: Box<dyn CardHandle> = match args.card_index {
        Some(index) => Box::new(ProcCard::new(index, args.rate, args.capture, args.playback)),
        None => Box::new(NamedCard {
            name: args.card_name.clone(),
            sample_rate: args.rate,
            capture_channels: args.capture,
            playback_channels: args.playback,
        }),
    };

    let resolver = PortNameResolver::new(config);
    let names = resolver.resolve(card.as_ref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    for (i, name) in names.capture().iter().enumerate() {
        println!("capture_{}\t{}", i + 1, name);
    }
    for (i, name) in names.playback().iter().enumerate() {
        println!("playback_{}\t{}", i + 1, name);
    }

    Ok(())
}
