//! Debounced config file watcher.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lenticular_common::ConfigError;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Quiet period after the last filesystem event before a reload is signalled.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches one config file and signals when it settles after a change.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// The file need not exist yet; its creation counts as a change.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if path.file_name().is_none() {
            return Err(ConfigError::WatchError(format!(
                "{} does not name a file",
                path.display()
            )));
        }
        if !path.exists() {
            debug!("{} does not exist yet, waiting for it", path.display());
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Send `()` on `tx` once per burst of changes to the file.
    ///
    /// The parent directory is watched, so editors that save by writing a
    /// temporary file and renaming it over the original are seen too.
    /// Returns when the underlying notify channel closes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self.path.file_name().unwrap_or_default().to_os_string();

        let (event_tx, mut event_rx) = mpsc::channel::<()>(16);
        let mut watcher = RecommendedWatcher::new(
            move |result: notify::Result<Event>| match result {
                Ok(event) if touches(&event, &file_name) => {
                    // A full channel already holds a pending wake-up.
                    let _ = event_tx.try_send(());
                }
                Ok(_) => {}
                Err(e) => warn!("filesystem watch error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("cannot create watcher: {e}")))?;
        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(|e| ConfigError::WatchError(format!("cannot watch {}: {e}", dir.display())))?;

        info!("watching {}", self.path.display());
        while event_rx.recv().await.is_some() {
            if !quiet_for(&mut event_rx, DEBOUNCE).await {
                break;
            }
            debug!("{} settled after change", self.path.display());
            let _ = tx.send(());
        }
        Ok(())
    }
}

/// Whether `event` creates or modifies a file called `file_name`.
pub(crate) fn touches(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}

/// Wait until `rx` has been silent for `quiet`. Returns `false` if the
/// channel closed first.
async fn quiet_for(rx: &mut mpsc::Receiver<()>, quiet: Duration) -> bool {
    loop {
        match tokio::time::timeout(quiet, rx.recv()).await {
            Err(_elapsed) => return true,
            Ok(Some(())) => continue,
            Ok(None) => return false,
        }
    }
}

#[cfg(test)]
pub(crate) async fn quiet_for_test(rx: &mut mpsc::Receiver<()>, quiet: Duration) -> bool {
    quiet_for(rx, quiet).await
}
