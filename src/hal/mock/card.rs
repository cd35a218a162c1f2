use crate::hal::CardHandle;
use anyhow::{anyhow, Result};

/// In-memory card with fixed properties
#[derive(Debug, Clone)]
pub struct MockCard {
    name: Option<String>,
    sample_rate: u32,
    capture_channels: usize,
    playback_channels: usize,
}

impl MockCard {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            sample_rate: 48000,
            capture_channels: 2,
            playback_channels: 2,
        }
    }

    /// Card whose name query fails
    pub fn unnamed() -> Self {
        Self {
            name: None,
            ..Self::new("")
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_channels(mut self, capture: usize, playback: usize) -> Self {
        self.capture_channels = capture;
        self.playback_channels = playback;
        self
    }
}

impl CardHandle for MockCard {
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
            .ok_or_else(|| anyhow!("Card info not available"))
    }
}
