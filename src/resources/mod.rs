pub mod plugin;

pub use plugin::{PluginResource, PluginScope};
