pub mod config;
pub mod dispatch;
pub mod error;
pub mod request;
pub mod resources;
pub mod transport;

pub use config::{AdminConfig, KongConfig};
pub use error::{KongError, Result};
pub use resources::plugin::{PluginResource, PluginScope};
pub use transport::{AdminTransport, HttpTransport};
