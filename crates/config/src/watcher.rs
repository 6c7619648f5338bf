use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches `pulse.toml` and sends a notification whenever it is written,
/// created or replaced.
///
/// The parent directory is watched rather than the file itself so that
/// editors which save via rename-over are still picked up.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that fires on every detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `true` if a filesystem event touches the watched config file.
fn touches(event: &notify::Event, path: &Path) -> bool {
    use notify::EventKind::*;
    matches!(event.kind, Modify(_) | Create(_)) && event.paths.iter().any(|p| p == path)
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let Some(dir) = path.parent().filter(|d| d.exists()) else {
        warn!("Config directory for '{}' does not exist; live reload disabled", path.display());
        return;
    };

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if touches(&e, &path) => {
                // A full channel already holds a pending reload.
                if let Err(mpsc::error::TrySendError::Closed(_)) = tx.try_send(()) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, EventKind, ModifyKind};

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn write_to_config_file_is_detected() {
        let path = Path::new("/cfg/pulse/pulse.toml");
        let e = event(EventKind::Modify(ModifyKind::Any), "/cfg/pulse/pulse.toml");
        assert!(touches(&e, path));
    }

    #[test]
    fn sibling_files_are_ignored() {
        let path = Path::new("/cfg/pulse/pulse.toml");
        let e = event(EventKind::Create(CreateKind::File), "/cfg/pulse/other.toml");
        assert!(!touches(&e, path));
    }

    #[test]
    fn access_events_are_ignored() {
        let path = Path::new("/cfg/pulse/pulse.toml");
        let e = event(EventKind::Access(notify::event::AccessKind::Any), "/cfg/pulse/pulse.toml");
        assert!(!touches(&e, path));
    }
}
