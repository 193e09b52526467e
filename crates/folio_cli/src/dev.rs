//! Live preview loop
//!
//! Keeps one page mounted against the system clock and rewrites the output
//! document whenever the date label refreshes or a watched file changes. A
//! change to folio.toml remounts the page with the new config.

use anyhow::{Context, Result};
use folio_core::{Clock, SystemClock};
use folio_site::Page;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::{interval, Interval};
use tracing::{debug, info, warn};

use crate::config::{config_path, FolioConfig};
use crate::{project_root, write_document};

pub fn run(dir: &Path) -> Result<()> {
    // Page state is single-threaded, so the loop runs on the current thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the dev runtime")?;
    runtime.block_on(dev_loop(dir))
}

struct Session {
    config: FolioConfig,
    page: Page,
    output: PathBuf,
    refresh: Duration,
}

impl Session {
    fn load(dir: &Path, root: &Path) -> Result<Self> {
        Self::load_with_clock(dir, root, Rc::new(SystemClock))
    }

    fn load_with_clock(dir: &Path, root: &Path, clock: Rc<dyn Clock>) -> Result<Self> {
        let config = FolioConfig::load_from_dir(dir)?;
        let refresh = Duration::from_secs(config.dev.refresh_secs.max(1));
        let page = Page::mount_with_refresh(config.page.clone(), clock, refresh)?;
        let output = config.output_path(root);
        Ok(Self {
            config,
            page,
            output,
            refresh,
        })
    }

    /// Advance the page by one refresh period and rewrite the output
    ///
    /// Every ticker tick is exactly one period of page time, so the date
    /// interval fires on each tick.
    fn refresh(&mut self) -> Result<()> {
        self.page.advance(self.refresh);
        self.write()
    }

    fn write(&self) -> Result<()> {
        write_document(&self.output, &self.page.render_document())?;
        debug!(
            "wrote {} (date: {})",
            self.output.display(),
            self.page.date_label()
        );
        Ok(())
    }

    /// Ticker for this session's refresh period, past its immediate first tick
    async fn ticker(&self) -> Interval {
        let mut ticker = interval(self.refresh);
        ticker.tick().await;
        ticker
    }

    /// Watch folio.toml plus the session's `dev.watch` paths
    fn watcher(
        &self,
        config_file: &Path,
        root: &Path,
        tx: UnboundedSender<notify::Event>,
    ) -> Result<RecommendedWatcher> {
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
            if let Ok(event) = res {
                let _ = tx.send(event);
            }
        })
        .context("Failed to start the file watcher")?;

        watcher
            .watch(config_file, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", config_file.display()))?;
        for extra in &self.config.dev.watch {
            let path = root.join(extra);
            if let Err(err) = watcher.watch(&path, RecursiveMode::Recursive) {
                warn!("Not watching {}: {err}", path.display());
            }
        }
        Ok(watcher)
    }
}

async fn dev_loop(dir: &Path) -> Result<()> {
    let root = project_root(dir);
    let config_file = config_path(dir);
    let mut session = Session::load(dir, &root)?;
    session.write()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut watcher = session.watcher(&config_file, &root, tx.clone())?;
    let mut ticker = session.ticker().await;

    info!(
        "Watching {} - writing {} (Ctrl+C to stop)",
        config_file.display(),
        session.output.display()
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                session.refresh()?;
            }
            Some(event) = rx.recv() => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    continue;
                }
                debug!(paths = ?event.paths, "change detected");
                match Session::load(dir, &root) {
                    Ok(next) => {
                        session = next;
                        session.write()?;
                        // Old watcher drops here, releasing the previous watch list
                        watcher = session.watcher(&config_file, &root, tx.clone())?;
                        ticker = session.ticker().await;
                        info!("Reloaded {}", config_file.display());
                    }
                    Err(err) => warn!("Keeping previous page: {err:#}"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping");
                break;
            }
        }
    }

    drop(watcher);
    session.page.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::create_project;
    use chrono::NaiveDate;
    use folio_core::ManualClock;
    use std::fs;

    fn late_evening() -> ManualClock {
        let instant = NaiveDate::from_ymd_opt(2026, 1, 14)
            .and_then(|d| d.and_hms_opt(23, 59, 30))
            .unwrap();
        ManualClock::at(instant)
    }

    #[test]
    fn every_refresh_recomputes_the_date() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        create_project(dir, "portfolio").unwrap();

        let clock = late_evening();
        let mut session = Session::load_with_clock(dir, dir, Rc::new(clock.clone())).unwrap();
        session.write().unwrap();
        let html = fs::read_to_string(&session.output).unwrap();
        assert!(html.contains("Wed, Jan 14 2026"));

        clock.advance(session.refresh);
        session.refresh().unwrap();
        assert_eq!(session.page.date_label(), "Thu, Jan 15 2026");
        let html = fs::read_to_string(&session.output).unwrap();
        assert!(html.contains("Thu, Jan 15 2026"));
    }

    #[test]
    fn reload_picks_up_new_refresh_period() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        create_project(dir, "portfolio").unwrap();

        let session = Session::load_with_clock(dir, dir, Rc::new(late_evening())).unwrap();
        assert_eq!(session.refresh, Duration::from_secs(60));

        let config = fs::read_to_string(dir.join("folio.toml")).unwrap();
        fs::write(
            dir.join("folio.toml"),
            config.replace("refresh_secs = 60", "refresh_secs = 5"),
        )
        .unwrap();

        let session = Session::load_with_clock(dir, dir, Rc::new(late_evening())).unwrap();
        assert_eq!(session.refresh, Duration::from_secs(5));
        assert_eq!(session.config.dev.refresh_secs, 5);
    }
}
