pub mod connector;
pub mod models;

// Re-export the primary DB types and connect helpers as `database::connect()`
pub use connector::{DB, connect, connect_with_settings, ping};
