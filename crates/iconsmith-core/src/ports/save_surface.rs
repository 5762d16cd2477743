//! Local save surface port.
//!
//! A save surface is where a [`SaveTrigger`] lives for the duration of one
//! export: it is attached, activated once, then detached. The trigger owns
//! the local-only copy of the retrieved bytes; dropping the trigger releases
//! them.

use std::path::PathBuf;

use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

use super::assets::RetrievedAsset;

/// Single-use handle that starts a local save of in-memory bytes.
///
/// Never shared between exports and never reused.
#[derive(Debug)]
pub struct SaveTrigger {
    id: Uuid,
    filename: String,
    object: RetrievedAsset,
}

impl SaveTrigger {
    pub fn new(object: RetrievedAsset, filename: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            object,
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Suggested download name.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub const fn bytes(&self) -> &Bytes {
        &self.object.bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.object.content_type.as_deref()
    }

    /// Drop the local copy of the bytes.
    pub fn release(self) {
        tracing::trace!(trigger = %self.id, len = self.object.bytes.len(), "Released local object");
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save trigger {0} is already attached")]
    AlreadyAttached(Uuid),

    #[error("save trigger {0} is not attached")]
    NotAttached(Uuid),

    #[error("I/O error while saving: {0}")]
    Io(#[from] std::io::Error),
}

/// The document a save trigger is attached to.
#[cfg_attr(test, mockall::automock)]
pub trait SaveSurface: Send + Sync {
    /// Make the trigger part of the surface.
    fn attach(&self, trigger: &SaveTrigger) -> Result<(), SaveError>;

    /// Start the save. Returns where the bytes ended up.
    fn activate(&self, trigger: &SaveTrigger) -> Result<PathBuf, SaveError>;

    /// Remove the trigger. Must be safe to call after a failed activation.
    fn detach(&self, trigger: &SaveTrigger);
}
