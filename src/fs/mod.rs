use crate::error::Result;
use std::future::Future;
use std::path::Path;

mod tokio_fs;

pub use tokio_fs::TokioFileSystem;

/// Тип записи в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Обычный файл
    File,
    /// Подкаталог
    Directory,
}

/// Запись каталога: имя и тип
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Имя записи без пути
    pub name: String,
    /// Тип записи
    pub kind: EntryKind,
}

impl DirEntry {
    /// Создает новую запись каталога
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Проверяет, является ли запись файлом
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Проверяет, является ли запись каталогом
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Интерфейс доступа к файловой системе
///
/// Построитель индекса использует только две операции: перечисление
/// записей каталога и чтение текстового содержимого файла. Спуск в
/// подкаталог выполняется соединением путей на стороне вызывающего.
pub trait FileSystemProvider: Send + Sync {
    /// Возвращает записи каталога в порядке, предоставляемом хранилищем
    fn read_dir(&self, path: &Path) -> impl Future<Output = Result<Vec<DirEntry>>> + Send;

    /// Читает текстовое содержимое файла
    fn read_to_string(&self, path: &Path) -> impl Future<Output = Result<String>> + Send;
}
