//! Local file document source

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{DocumentSource, LoadError, LoadResult, SourceResponse};

/// Reads the document from disk.
///
/// A missing file answers 404, the way a static host would.
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self { path, location }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl DocumentSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> LoadResult<SourceResponse> {
        match tokio::fs::read(&self.path).await {
            Ok(body) => Ok(SourceResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(SourceResponse {
                    status: 404,
                    body: Vec::new(),
                })
            }
            Err(e) => Err(LoadError::Io {
                path: self.path.clone(),
                error: e.to_string(),
            }),
        }
    }
}
