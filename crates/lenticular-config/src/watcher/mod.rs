//! File watcher for live config reload, built on `notify` with a 500 ms
//! debounce.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
