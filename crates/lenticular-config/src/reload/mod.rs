//! Live config reload: file watcher plus validated loading, published on a
//! `tokio::sync::watch` channel.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::{load_validated, ReloadManager};
