//! Shared test utilities for integration tests
//!
//! Provides a recording file host, a run-context builder over a temp snapshot, and
//! isolated XDG directories for config tests.

use labeltree::cli::RunContext;
use labeltree::config::LabeltreeConfig;
use labeltree::FileHost;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize XDG environment variable access across all tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// File host double: listed paths exist, every open is recorded.
#[derive(Clone, Default)]
pub struct RecordingHost {
    existing: HashSet<String>,
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingHost {
    pub fn with_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            existing: paths.into_iter().map(str::to_string).collect(),
            opened: Rc::default(),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl FileHost for RecordingHost {
    fn path_exists(&self, path: &str) -> bool {
        self.existing.contains(path)
    }

    fn open(&self, path: &str) -> std::io::Result<()> {
        self.opened.borrow_mut().push(path.to_string());
        Ok(())
    }
}

pub fn snapshot_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("state").join("namespace.json")
}

/// Run context over default config and a snapshot inside `temp_dir`.
pub fn run_context(temp_dir: &TempDir, host: &RecordingHost) -> RunContext {
    RunContext::with_host(
        temp_dir.path().to_path_buf(),
        LabeltreeConfig::default(),
        Some(snapshot_path(temp_dir)),
        Box::new(host.clone()),
    )
    .unwrap()
}

/// Environment variable state to restore after test
struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        match self.home {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
        match self.xdg_config_home {
            Some(orig) => std::env::set_var("XDG_CONFIG_HOME", orig),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointing inside `test_dir`.
///
/// Returns the config home so the test can place a global config file in it.
pub fn with_xdg_config_home<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let config_home = test_dir.path().join("config");
    let home = test_dir.path().join("home");
    std::fs::create_dir_all(&config_home).unwrap();
    std::fs::create_dir_all(&home).unwrap();

    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);

    let result = f(&config_home);

    env_state.restore();
    result
}
