pub mod config;
pub mod defaults;
pub mod drivers;
pub mod mock;
pub mod port_names;
pub mod portfile;
pub mod traits;
pub mod types;

pub use config::{LookupConfig, DEFAULT_MAX_LINE_LEN, SYSTEM_CARDS_DIR, USER_CARDS_SUBDIR};
pub use defaults::fill_default_names;
pub use drivers::ProcCard;
pub use port_names::{PortNameResolver, FALLBACK_CARD_NAME};
pub use portfile::{load_portfile, PortfileStatus};
pub use traits::CardHandle;
pub use types::{Direction, NameTemplate, PortGroup, PortNameTable, PortNames, SpeedClass};
