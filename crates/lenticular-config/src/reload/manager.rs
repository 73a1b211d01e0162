//! Watches the config file and republishes it whenever a valid edit lands.

use std::path::{Path, PathBuf};

use lenticular_common::ConfigError;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::schema::LenticularConfig;
use crate::watcher::ConfigWatcher;
use crate::{toml_loader, validation};

/// Load and validate the config at `path`.
pub fn load_validated(path: &Path) -> Result<LenticularConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Live reload of one config file.
///
/// Subscribers see a new value only when the file parses, validates and
/// differs from the last published config. Rejected edits keep the previous
/// value in place.
pub struct ReloadManager {
    path: PathBuf,
    published: LenticularConfig,
}

impl ReloadManager {
    /// Load `path` and start watching it in a background task.
    ///
    /// Returns the initial config (defaults if the file is missing or
    /// invalid) and a receiver for later configs. The task stops once every
    /// receiver is dropped.
    pub async fn start(path: PathBuf) -> (LenticularConfig, watch::Receiver<LenticularConfig>) {
        let initial = load_validated(&path).unwrap_or_else(|e| {
            warn!("config at {} unusable ({e}); starting from defaults", path.display());
            LenticularConfig::default()
        });
        let (tx, rx) = watch::channel(initial.clone());
        let manager = Self {
            path,
            published: initial.clone(),
        };
        tokio::spawn(manager.run(tx));
        (initial, rx)
    }

    async fn run(mut self, tx: watch::Sender<LenticularConfig>) {
        let watcher = match ConfigWatcher::new(self.path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("config reload disabled: {e}");
                return;
            }
        };
        let (signal_tx, mut signal_rx) = broadcast::channel::<()>(8);
        let watch_task = tokio::spawn(async move {
            if let Err(e) = watcher.watch(signal_tx).await {
                error!("config watcher stopped: {e}");
            }
        });

        loop {
            tokio::select! {
                _ = tx.closed() => {
                    debug!("no config subscribers left");
                    break;
                }
                signal = signal_rx.recv() => match signal {
                    // A lagged receiver still means the file changed.
                    Ok(()) | Err(RecvError::Lagged(_)) => {
                        self.refresh(&tx);
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }
        watch_task.abort();
    }

    /// Re-read the file and publish it if it is valid and new. Returns
    /// whether a config was published.
    pub(super) fn refresh(&mut self, tx: &watch::Sender<LenticularConfig>) -> bool {
        match load_validated(&self.path) {
            Ok(config) if config == self.published => {
                debug!("config file touched without changes");
                false
            }
            Ok(config) => {
                info!("config reloaded from {}", self.path.display());
                self.published = config.clone();
                tx.send_replace(config);
                true
            }
            Err(e) => {
                warn!("config edit rejected: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
impl ReloadManager {
    pub(super) fn for_test(path: PathBuf, published: LenticularConfig) -> Self {
        Self { path, published }
    }
}
