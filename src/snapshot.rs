//! JSON snapshot persistence adapter.
//!
//! The core services never touch the filesystem; the binary calls into this
//! module after mutations and at startup. A snapshot is a plain JSON
//! document of the whole aggregate.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::AppResult,
    models::{Book, User},
    repository::Library,
};

/// Serialized form of the library state.
///
/// Both sequences keep the in-memory iteration order, so a save/load round
/// trip preserves catalog order, registration order and loan order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub available: Vec<Book>,
    pub users: Vec<User>,
}

impl Snapshot {
    pub fn capture(library: &Library) -> Self {
        Self {
            available: library.available_books().cloned().collect(),
            users: library.users().cloned().collect(),
        }
    }

    pub fn into_library(self) -> Library {
        Library::restore(self.available, self.users)
    }
}

/// Load a library from a snapshot file.
///
/// A missing file is not an error: the first run starts with an empty
/// library.
pub fn load(path: &Path) -> AppResult<Library> {
    if !path.exists() {
        tracing::info!("No snapshot at {}, starting empty", path.display());
        return Ok(Library::new());
    }
    let contents = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&contents)?;
    let library = snapshot.into_library();
    tracing::info!(
        "Snapshot loaded from {} ({} available, {} users)",
        path.display(),
        library.available_count(),
        library.user_count()
    );
    Ok(library)
}

/// Save the library state to a snapshot file.
///
/// Writes a sibling temp file and renames it into place; an interrupted
/// write leaves the previous snapshot intact.
pub fn save(library: &Library, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let snapshot = Snapshot::capture(library);
    let contents = serde_json::to_string_pretty(&snapshot)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    tracing::debug!("Snapshot saved to {}", path.display());
    Ok(())
}
