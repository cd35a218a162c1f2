use std::fs;
use std::path::PathBuf;
use anyhow::{Result, Context};
use crate::hal::traits::CardHandle;

/// ALSA card list exposed by the kernel
pub const PROC_CARDS_PATH: &str = "/proc/asound/cards";

/// ALSA card identified by its index.
///
/// Channel counts and sample rate come from the caller's hardware setup; the
/// display name is read from the kernel card list, e.g.
///
/// ```text
///  0 [PCH            ]: HDA-Intel - HDA Intel PCH
///                       HDA Intel PCH at 0xf7f10000 irq 32
/// ```
pub struct ProcCard {
    index: u32,
    sample_rate: u32,
    capture_channels: usize,
    playback_channels: usize,
    cards_file: PathBuf,
}

impl ProcCard {
    pub fn new(index: u32, sample_rate: u32, capture_channels: usize, playback_channels: usize) -> Self {
        Self {
            index,
            sample_rate,
            capture_channels,
            playback_channels,
            cards_file: PathBuf::from(PROC_CARDS_PATH),
        }
    }

    /// Read card names from another file with the `/proc/asound/cards` layout
    pub fn with_cards_file(mut self, path: PathBuf) -> Self {
        self.cards_file = path;
        self
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Short name of card `index` in a `/proc/asound/cards` listing
fn find_card_name(listing: &str, index: u32) -> Option<String> {
    listing.lines().find_map(|line| {
        let (number, rest) = line.trim_start().split_once(' ')?;
        if number.parse::<u32>().ok()? != index {
            return None;
        }

        // "[id   ]: driver - short name"
        let (_, description) = rest.split_once("]:")?;
        let (_, name) = description.split_once(" - ")?;
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    })
}

impl CardHandle for ProcCard {
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
        let listing = fs::read_to_string(&self.cards_file)
            .context(format!("Failed to read card list from {:?}", self.cards_file))?;

        find_card_name(&listing, self.index)
            .ok_or_else(|| anyhow::anyhow!("Card {} not found in {:?}", self.index, self.cards_file))
    }
}
