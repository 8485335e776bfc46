pub mod dto;
pub mod implementation;

pub use dto::PluginScope;
pub use implementation::PluginResource;
