pub mod aggregate;
pub mod config;
pub mod engine;
pub mod guide;
pub mod property;

pub use config::EngineConfig;
pub use engine::GuidanceEngine;
pub use property::message::NavigationMessage;
