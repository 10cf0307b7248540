// SPDX-License-Identifier: MPL-2.0
//! Filesystem script-loader adapter.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::port::script::{ScriptError, ScriptLoader};

/// Loads scripts from the game install directory.
///
/// A successful read counts as a completed load; executing the script is
/// the embedding client's concern.
#[derive(Debug, Clone)]
pub struct FsScriptLoader {
    root: PathBuf,
}

impl FsScriptLoader {
    /// Loader rooted at the game install directory.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl ScriptLoader for FsScriptLoader {
    async fn load(&self, script: &str) -> Result<(), ScriptError> {
        let path = self.root.join(script);
        match tokio::fs::read(&path).await {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ScriptError::NotFound(script.to_string()))
            }
            Err(err) => Err(ScriptError::Io {
                script: script.to_string(),
                message: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_succeeds_for_existing_script() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::write(dir.path().join("ru.js"), "// overlay").expect("failed to write script");

        let loader = FsScriptLoader::new(dir.path().to_path_buf());
        assert!(loader.load("ru.js").await.is_ok());
    }

    #[tokio::test]
    async fn load_reports_missing_script() {
        let dir = tempdir().expect("failed to create temp dir");
        let loader = FsScriptLoader::new(dir.path().to_path_buf());

        match loader.load("ru.js").await {
            Err(ScriptError::NotFound(script)) => assert_eq!(script, "ru.js"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
