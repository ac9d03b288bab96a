//! JSON documents on disk
//!
//! Settings and the local store are small JSON files rewritten whole on every
//! save. A save goes through a sibling `.json.tmp` file that is synced and
//! renamed over the target, so a crash leaves either the old or the new file.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpenseError;

fn storage_err(action: &str, path: &Path, e: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Storage(format!("{} {}: {}", action, path.display(), e))
}

/// Load `path` as JSON; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, ExpenseError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("read", path, e)),
    };

    serde_json::from_str(&text).map_err(|e| storage_err("parse", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_err("encode", path, e))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_err("create", dir, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let result = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|_| fs::rename(&staging, path));

    result.map_err(|e| {
        let _ = fs::remove_file(&staging);
        storage_err("write", path, e)
    })
}
