pub mod hal;

pub use hal::{CardHandle, LookupConfig, PortNameResolver, PortNames};
