//! Filesystem save surface.
//!
//! Bytes are staged in a temporary file inside the target directory and
//! persisted under the trigger's file name. Existing files are never
//! overwritten: `apple.png` becomes `apple (1).png`, `apple (2).png`, ...

use std::collections::HashSet;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use iconsmith_core::{SaveError, SaveSurface, SaveTrigger};
use tempfile::NamedTempFile;
use tracing::debug;
use uuid::Uuid;

/// Upper bound on ` (n)` suffixes tried for one name.
const MAX_DUPLICATES: usize = 10_000;

#[derive(Debug)]
pub struct DirectorySurface {
    dir: PathBuf,
    attached: Mutex<HashSet<Uuid>>,
}

impl DirectorySurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            attached: Mutex::default(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Triggers currently attached. Zero once every export has finished.
    pub fn attached_count(&self) -> usize {
        self.attached().len()
    }

    fn attached(&self) -> std::sync::MutexGuard<'_, HashSet<Uuid>> {
        self.attached.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `name`, then `stem (1).ext`, `stem (2).ext`, ...
fn candidate(filename: &str, attempt: usize) -> String {
    if attempt == 0 {
        return filename.to_string();
    }
    let path = Path::new(filename);
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem} ({attempt}).{ext}"),
        None => format!("{stem} ({attempt})"),
    }
}

impl SaveSurface for DirectorySurface {
    fn attach(&self, trigger: &SaveTrigger) -> Result<(), SaveError> {
        std::fs::create_dir_all(&self.dir)?;
        if !self.attached().insert(trigger.id()) {
            return Err(SaveError::AlreadyAttached(trigger.id()));
        }
        debug!(id = %trigger.id(), filename = trigger.filename(), "Attached save trigger");
        Ok(())
    }

    fn activate(&self, trigger: &SaveTrigger) -> Result<PathBuf, SaveError> {
        if !self.attached().contains(&trigger.id()) {
            return Err(SaveError::NotAttached(trigger.id()));
        }

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(trigger.bytes())?;
        staged.flush()?;

        for attempt in 0..MAX_DUPLICATES {
            let target = self.dir.join(candidate(trigger.filename(), attempt));
            match staged.persist_noclobber(&target) {
                Ok(_) => {
                    debug!(path = %target.display(), "Saved asset");
                    return Ok(target);
                }
                Err(err) if err.error.kind() == ErrorKind::AlreadyExists => staged = err.file,
                Err(err) => return Err(err.error.into()),
            }
        }

        Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("no free name for {} in {}", trigger.filename(), self.dir.display()),
        )
        .into())
    }

    fn detach(&self, trigger: &SaveTrigger) {
        self.attached().remove(&trigger.id());
    }
}
