pub mod cache;
pub mod connection;

pub use connection::{init_db, Database};
