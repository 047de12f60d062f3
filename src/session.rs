//! Session Module
//!
//! Scoped ownership of a [`StudentStore`]: opening loads the data file,
//! ending the session writes it back.
//!
//! ## Lifecycle
//! 1. `Session::open` loads the store from `config.data_file`
//! 2. Callers work on the store through `Deref`/`DerefMut`
//! 3. `Session::close` saves and reports the save result
//!
//! A session that is never closed (early `return`, `?`, panic unwind) still
//! saves when dropped; failures on that path can only be logged.
//! [`Session::run`] wraps all three steps for a closure.

use std::ops::{Deref, DerefMut};
use std::path::Path;

use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::store::StudentStore;

/// A loaded store that is saved when the session ends
pub struct Session {
    config: Config,
    store: StudentStore,

    /// Set once `close` has run, so `Drop` does not save twice
    closed: bool,
}

impl Session {
    /// Open a session, loading the configured data file
    pub fn open(config: Config) -> Result<Self> {
        let mut store = StudentStore::new(&config.data_file);
        let report = store.load()?;

        info!(
            path = %config.data_file.display(),
            file_found = report.file_found,
            loaded = report.records_loaded,
            skipped = report.lines_skipped,
            "session opened"
        );

        Ok(Self {
            config,
            store,
            closed: false,
        })
    }

    /// Open with the default config and the given data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_file = path.to_path_buf();
        Self::open(config)
    }

    /// Run `f` against a freshly opened store, then close the session
    ///
    /// The store is saved whether `f` succeeds or fails. If both `f` and the
    /// save fail, the error from `f` is returned and the save error is
    /// logged.
    pub fn run<T, F>(config: Config, f: F) -> Result<T>
    where
        F: FnOnce(&mut StudentStore) -> Result<T>,
    {
        let mut session = Self::open(config)?;
        let outcome = f(&mut session.store);

        match (outcome, session.close()) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(save_err)) => Err(save_err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(save_err)) => {
                error!(error = %save_err, "save after failed operation also failed");
                Err(err)
            }
        }
    }

    /// End the session, saving if `save_on_close` is set
    pub fn close(mut self) -> Result<()> {
        self.closed = true;
        if self.config.save_on_close {
            self.store.save()?;
        }
        info!(path = %self.config.data_file.display(), "session closed");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Deref for Session {
    type Target = StudentStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl DerefMut for Session {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.closed || !self.config.save_on_close {
            return;
        }
        if let Err(e) = self.store.save() {
            error!(
                path = %self.config.data_file.display(),
                error = %e,
                "failed to save store while dropping an unclosed session"
            );
        }
    }
}
