use crate::error::Result;
use crate::fs::{DirEntry, FileSystemProvider};
use crate::index::models::{ClipRecord, ProjectIndex};
use crate::logging::{log_debug, log_info};
use crate::srt::TimestampExtractor;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

/// Расширение файлов субтитров
const SUBTITLE_EXTENSION: &str = ".srt";

/// Расширения видео файлов, участвующих в сопоставлении
const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".mov", ".avi", ".mkv"];

/// Построитель индекса каталога записей
///
/// Рекурсивно обходит дерево каталогов, сопоставляет каждому файлу
/// субтитров одноименный видео файл в том же каталоге и извлекает
/// диапазон абсолютного времени из субтитров. Любая ошибка чтения или
/// извлечения прерывает весь обход: частичный индекс не создается.
pub struct IndexBuilder;

impl IndexBuilder {
    /// Создает новый построитель индекса
    pub fn new() -> Self {
        Self
    }

    /// Строит индекс для корневого каталога
    ///
    /// Клипы в результате отсортированы по возрастанию времени начала;
    /// при равном времени сохраняется порядок обнаружения (сортировка
    /// стабильна).
    pub async fn build<F: FileSystemProvider>(&self, fs: &F, root: &Path) -> Result<ProjectIndex> {
        let project_path = root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());

        log_info(&format!("Начало индексации каталога: {}", project_path));

        let mut clips = self
            .scan_directory(fs, root.to_path_buf(), String::new())
            .await?;

        clips.sort_by_key(|clip| clip.start_timestamp);

        log_info(&format!(
            "Индексация завершена: найдено {} клипов",
            clips.len()
        ));

        Ok(ProjectIndex::new(project_path, clips))
    }

    /// Рекурсивно сканирует каталог, накапливая записи в порядке обнаружения
    ///
    /// Записи каталога обрабатываются в порядке, предоставляемом файловой
    /// системой; подкаталоги обходятся в момент обнаружения (обход в глубину).
    fn scan_directory<'a, F: FileSystemProvider>(
        &'a self,
        fs: &'a F,
        dir: PathBuf,
        prefix: String,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ClipRecord>>> + Send + 'a>> {
        Box::pin(async move {
            let entries = fs.read_dir(&dir).await?;
            let mut clips = Vec::new();

            for entry in &entries {
                if entry.is_directory() {
                    let child_dir = dir.join(&entry.name);
                    let child_prefix = format!("{}/{}", prefix, entry.name);
                    let nested = self.scan_directory(fs, child_dir, child_prefix).await?;
                    clips.extend(nested);
                } else if entry.is_file() && is_subtitle_file(&entry.name) {
                    let subtitle_path = format!("{}/{}", prefix, entry.name);

                    let video = match find_matching_video(&entry.name, &entries) {
                        Some(video) => video,
                        None => {
                            log_debug(&format!(
                                "Пропущены субтитры без парного видео: {}",
                                subtitle_path
                            ));
                            continue;
                        }
                    };

                    let content = fs.read_to_string(&dir.join(&entry.name)).await?;
                    let range = TimestampExtractor::extract_str(&content)?;

                    let video_path = format!("{}/{}", prefix, video.name);
                    let record = ClipRecord::new(video_path, subtitle_path, &range)?;

                    log_debug(&format!(
                        "Проиндексирован клип: {} [{} - {}]",
                        record.video_path, record.start_time, record.end_time
                    ));

                    clips.push(record);
                }
            }

            Ok(clips)
        })
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Проверяет, является ли имя файлом субтитров
fn is_subtitle_file(name: &str) -> bool {
    name.to_lowercase().ends_with(SUBTITLE_EXTENSION)
}

/// Проверяет, является ли имя видео файлом
fn is_video_file(name: &str) -> bool {
    let lowered = name.to_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// Возвращает имя файла без последнего расширения
fn base_name(name: &str) -> &str {
    name.rfind('.').map(|i| &name[..i]).unwrap_or(name)
}

/// Ищет в записях каталога видео файл с тем же базовым именем
fn find_matching_video<'a>(subtitle_name: &str, entries: &'a [DirEntry]) -> Option<&'a DirEntry> {
    let subtitle_base = base_name(subtitle_name);
    entries.iter().find(|entry| {
        entry.is_file() && is_video_file(&entry.name) && base_name(&entry.name) == subtitle_base
    })
}
