use anyhow::Result;

/// Capability interface of an opened sound card, as seen by the port name lookup
pub trait CardHandle {
    /// Configured sample rate in Hz
    fn sample_rate(&self) -> u32;

    /// Number of capture channels
    fn capture_channels(&self) -> usize;

    /// Number of playback channels
    fn playback_channels(&self) -> usize;

    /// Display name of the card (e.g. "Fireface 800")
    fn card_name(&self) -> Result<String>;
}
