pub mod config;
pub mod controller;
pub mod messages;
pub mod request;
pub mod slider;
pub mod table;

pub use config::ViewerConfig;
pub use controller::{Command, Viewer};
