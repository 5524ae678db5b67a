pub mod config;
pub mod consts;
pub mod env;
pub mod error;
pub mod keycodes;
pub mod overrides;

pub use config::{Config, DrawConfig, ParseConfig};
pub use error::{KdResult, KeymapDrawerError};
pub use overrides::Overrides;
