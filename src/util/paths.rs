// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Resource path resolution.
//!
//! Music and jacket paths stored in a memon file are relative to the
//! directory holding that file, not to the process working directory.

use std::path::{Path, PathBuf};

/// Resolve a resource path against the directory of the document file.
///
/// Absolute resource paths are returned unchanged. Nothing is checked on
/// disk here; a missing file shows up when the decoder tries to open it.
pub fn resolve(document_path: &Path, resource_path: &str) -> PathBuf {
    let base = document_path.parent().unwrap_or_else(|| Path::new(""));
    base.join(resource_path)
}

/// Make a path absolute without touching the filesystem.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
