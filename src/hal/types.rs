use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sample-rate tier used to pick speed-specific port files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedClass {
    Single,  // up to 48 kHz
    Double,  // up to 96 kHz
    Quad,    // above 96 kHz
}

impl SpeedClass {
    /// Classify a sample rate. Both thresholds are exclusive.
    pub fn from_sample_rate(sample_rate: u32) -> Self {
        if sample_rate > 96_000 {
            SpeedClass::Quad
        } else if sample_rate > 48_000 {
            SpeedClass::Double
        } else {
            SpeedClass::Single
        }
    }

    /// Short tag used in file names (`ss`, `ds`, `qs`)
    pub fn tag(&self) -> &'static str {
        match self {
            SpeedClass::Single => "ss",
            SpeedClass::Double => "ds",
            SpeedClass::Quad => "qs",
        }
    }
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Channel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Capture,
    Playback,
}

impl Direction {
    /// File name suffix of the port files for this direction
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Direction::Capture => "ports.in",
            Direction::Playback => "ports.out",
        }
    }
}

/// Window of one direction inside the shared name table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortGroup {
    pub offset: usize,
    pub size: usize,
}

impl PortGroup {
    pub fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// Table slot for a 1-based channel position, if it belongs to this group
    pub fn slot(&self, position: usize) -> Option<usize> {
        if position >= 1 && position <= self.size {
            Some(self.offset + position - 1)
        } else {
            None
        }
    }
}

/// Pattern for generated port names, e.g. `capture_{}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NameTemplate {
    prefix: String,
    suffix: String,
}

impl NameTemplate {
    const PLACEHOLDER: &'static str = "{}";

    /// Parse a template containing exactly one `{}` placeholder
    pub fn new(pattern: &str) -> Result<Self> {
        let count = pattern.matches(Self::PLACEHOLDER).count();
        if count != 1 {
            anyhow::bail!(
                "Name template {:?} must contain exactly one {} placeholder, found {}",
                pattern,
                Self::PLACEHOLDER,
                count
            );
        }

        let (prefix, suffix) = pattern
            .split_once(Self::PLACEHOLDER)
            .unwrap_or((pattern, ""));

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    pub fn capture() -> Self {
        Self {
            prefix: "capture_".to_string(),
            suffix: String::new(),
        }
    }

    pub fn playback() -> Self {
        Self {
            prefix: "playback_".to_string(),
            suffix: String::new(),
        }
    }

    /// Render the name for a 1-based position
    pub fn render(&self, position: usize) -> String {
        format!("{}{}{}", self.prefix, position, self.suffix)
    }
}

impl TryFrom<String> for NameTemplate {
    type Error = anyhow::Error;

    fn try_from(pattern: String) -> Result<Self> {
        Self::new(&pattern)
    }
}

impl From<NameTemplate> for String {
    fn from(template: NameTemplate) -> Self {
        format!("{}{}{}", template.prefix, NameTemplate::PLACEHOLDER, template.suffix)
    }
}

/// Name table under construction: one optional name per channel,
/// capture channels first, then playback channels.
#[derive(Debug, Clone, Default)]
pub struct PortNameTable {
    slots: Vec<Option<String>>,
}

impl PortNameTable {
    /// Allocate an empty table, reporting allocation failure instead of aborting
    pub fn with_len(len: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|e| anyhow::anyhow!("Not enough memory for {} port names: {}", len, e))?;
        slots.resize(len, None);
        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Store a name unless the slot already holds one.
    /// Returns true if the name was stored.
    pub fn fill(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_none() => {
                *slot = Some(name.into());
                true
            }
            _ => false,
        }
    }

    /// Finish the table. Fails if any slot is still empty or
    /// `capture_count` exceeds the table length.
    pub fn finish(self, capture_count: usize) -> Result<PortNames> {
        if capture_count > self.slots.len() {
            anyhow::bail!(
                "Capture count {} exceeds {} port names",
                capture_count,
                self.slots.len()
            );
        }

        let mut names = Vec::with_capacity(self.slots.len());
        for (index, slot) in self.slots.into_iter().enumerate() {
            match slot {
                Some(name) => names.push(name),
                None => anyhow::bail!("Port name {} was never assigned", index),
            }
        }

        Ok(PortNames {
            names,
            capture_count,
        })
    }
}

/// Resolved port names, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortNames {
    names: Vec<String>,
    capture_count: usize,
}

impl PortNames {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn capture(&self) -> &[String] {
        &self.names[..self.capture_count]
    }

    pub fn playback(&self) -> &[String] {
        &self.names[self.capture_count..]
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_class_thresholds() {
        assert_eq!(SpeedClass::from_sample_rate(44_100), SpeedClass::Single);
        assert_eq!(SpeedClass::from_sample_rate(48_000), SpeedClass::Single);
        assert_eq!(SpeedClass::from_sample_rate(48_001), SpeedClass::Double);
        assert_eq!(SpeedClass::from_sample_rate(96_000), SpeedClass::Double);
        assert_eq!(SpeedClass::from_sample_rate(96_001), SpeedClass::Quad);
        assert_eq!(SpeedClass::from_sample_rate(192_000).tag(), "qs");
    }

    #[test]
    fn test_group_slot() {
        let group = PortGroup::new(4, 2);
        assert_eq!(group.slot(0), None);
        assert_eq!(group.slot(1), Some(4));
        assert_eq!(group.slot(2), Some(5));
        assert_eq!(group.slot(3), None);
    }

    #[test]
    fn test_name_template() {
        let template = NameTemplate::new("in {} (left)").unwrap();
        assert_eq!(template.render(3), "in 3 (left)");
        assert_eq!(NameTemplate::capture().render(3), "capture_3");
        assert_eq!(String::from(NameTemplate::playback()), "playback_{}");

        assert!(NameTemplate::new("capture").is_err());
        assert!(NameTemplate::new("{}_{}").is_err());
    }

    #[test]
    fn test_table_allocation_failure() {
        assert!(PortNameTable::with_len(usize::MAX).is_err());
        assert!(PortNameTable::with_len(usize::MAX / 2).is_err());
    }

    #[test]
    fn test_table_first_writer_wins() {
        let mut table = PortNameTable::with_len(2).unwrap();
        assert!(table.fill(0, "first"));
        assert!(!table.fill(0, "second"));
        assert!(!table.fill(7, "outside"));
        assert_eq!(table.get(0), Some("first"));
        assert!(!table.is_filled(1));
        assert!(table.clone().finish(1).is_err());

        table.fill(1, "other");
        assert!(table.clone().finish(3).is_err());
        let names = table.finish(1).unwrap();
        assert_eq!(names.capture(), &["first".to_string()]);
        assert_eq!(names.playback(), &["other".to_string()]);
    }
}
