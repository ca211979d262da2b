mod charset;
pub(crate) mod config;
mod config_builder;
mod header_id;
mod id;

pub use self::charset::*;
pub use config::{HeaderCfg, NewLine};
pub use config_builder::*;
pub use header_id::*;
pub use id::ObserverId;
pub(crate) use id::OBSERVER_ID;
