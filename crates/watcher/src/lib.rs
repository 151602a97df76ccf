pub mod client;
pub mod logging;
pub mod response;
pub mod status;
pub mod watcher;
