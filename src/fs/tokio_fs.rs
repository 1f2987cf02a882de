use crate::error::Result;
use crate::fs::{DirEntry, EntryKind, FileSystemProvider};
use std::future::Future;
use std::path::Path;

/// Реализация доступа к файловой системе поверх tokio::fs
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Создает новый экземпляр
    pub fn new() -> Self {
        Self
    }
}

impl FileSystemProvider for TokioFileSystem {
    fn read_dir(&self, path: &Path) -> impl Future<Output = Result<Vec<DirEntry>>> + Send {
        let path = path.to_path_buf();
        async move {
            let mut entries = Vec::new();
            let mut read_dir = tokio::fs::read_dir(&path).await?;

            while let Some(entry) = read_dir.next_entry().await? {
                let file_type = entry.file_type().await?;
                let kind = if file_type.is_dir() {
                    EntryKind::Directory
                } else {
                    EntryKind::File
                };
                entries.push(DirEntry::new(entry.file_name().to_string_lossy(), kind));
            }

            Ok(entries)
        }
    }

    fn read_to_string(&self, path: &Path) -> impl Future<Output = Result<String>> + Send {
        let path = path.to_path_buf();
        async move { Ok(tokio::fs::read_to_string(&path).await?) }
    }
}
