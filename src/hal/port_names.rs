use std::path::{Path, PathBuf};
use anyhow::Result;
use super::config::LookupConfig;
use super::defaults::fill_default_names;
use super::portfile::load_portfile;
use super::traits::CardHandle;
use super::types::{Direction, NameTemplate, PortGroup, PortNameTable, PortNames, SpeedClass};

/// Card name used when the card cannot report one
pub const FALLBACK_CARD_NAME: &str = "noname";

/// Builds the port name table for a card from the user and system port files
pub struct PortNameResolver {
    config: LookupConfig,
}

impl PortNameResolver {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Port files for one direction, most specific first:
    /// user speed-specific, user generic, system speed-specific, system generic.
    pub fn candidate_paths(&self, card_name: &str, speed: SpeedClass, direction: Direction) -> [PathBuf; 4] {
        let suffix = direction.file_suffix();
        let specific = format!("{}.{}.{}", card_name, speed.tag(), suffix);
        let generic = format!("{}.{}", card_name, suffix);

        let user_dir = self.config.user_dir();
        let system_dir = &self.config.system_dir;

        [
            card_file(&user_dir, &specific),
            card_file(&user_dir, &generic),
            card_file(system_dir, &specific),
            card_file(system_dir, &generic),
        ]
    }

    /// Resolve a name for every capture and playback channel of `card`.
    ///
    /// Capture names come first in the result, followed by playback names.
    /// Fails only if the table cannot be allocated.
    pub fn resolve(&self, card: &dyn CardHandle) -> Result<PortNames> {
        let speed = SpeedClass::from_sample_rate(card.sample_rate());

        let card_name = card.card_name().unwrap_or_else(|e| {
            log::debug!("Card name unavailable ({}), using {:?}", e, FALLBACK_CARD_NAME);
            FALLBACK_CARD_NAME.to_string()
        });

        let capture_count = card.capture_channels();
        let playback_count = card.playback_channels();

        log::info!(
            "Looking up port names for {:?} at {} Hz ({})",
            card_name,
            card.sample_rate(),
            speed
        );

        let Some(total) = capture_count.checked_add(playback_count) else {
            let e = anyhow::anyhow!(
                "Not enough memory for {} + {} port names",
                capture_count,
                playback_count
            );
            log::error!("{}", e);
            return Err(e);
        };
        let mut table = PortNameTable::with_len(total).map_err(|e| {
            log::error!("{}", e);
            e
        })?;

        let groups = [
            (Direction::Capture, PortGroup::new(0, capture_count), &self.config.capture_template),
            (Direction::Playback, PortGroup::new(capture_count, playback_count), &self.config.playback_template),
        ];

        for (direction, group, template) in groups {
            self.resolve_group(&mut table, &card_name, speed, direction, group, template);
        }

        table.finish(capture_count)
    }

    fn resolve_group(
        &self,
        table: &mut PortNameTable,
        card_name: &str,
        speed: SpeedClass,
        direction: Direction,
        group: PortGroup,
        template: &NameTemplate,
    ) {
        for path in self.candidate_paths(card_name, speed, direction) {
            load_portfile(&path, table, group, self.config.max_line_len);
        }

        fill_default_names(table, group, template);
    }
}

/// `<dir>/<file>`, appended as text so a card name never escapes `dir`
fn card_file(dir: &Path, file: &str) -> PathBuf {
    let mut path = dir.as_os_str().to_os_string();
    path.push("/");
    path.push(file);
    PathBuf::from(path)
}

impl Default for PortNameResolver {
    fn default() -> Self {
        Self::new(LookupConfig::from_env())
    }
}
