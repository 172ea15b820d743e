// Library exports for testing
pub mod config;
pub mod events;
pub mod logging;
pub mod responses;
pub mod theme;
pub mod timefmt;
pub mod toast;
