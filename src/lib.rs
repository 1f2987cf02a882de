pub mod error;
pub mod filter;
pub mod fs;
pub mod index;
pub mod logging;
pub mod progress;
pub mod srt;
pub mod timeline;

pub use error::{Error, ErrorType, Result};
pub use filter::TimeRangeFilter;
pub use fs::{DirEntry, EntryKind, FileSystemProvider, TokioFileSystem};
pub use index::{ClipRecord, IndexBuilder, ProjectIndex};
pub use logging::{setup_logging, setup_test_logging, log_debug, log_error, log_info, log_warning};
pub use progress::{ProgressCallback, ProgressTracker};
pub use srt::{SubtitleTimeRange, TimestampExtractor};
pub use timeline::{TimelineGenerator, FRAME_RATE};

use std::path::Path;

/// Настройки индексации и генерации таймлайна
#[derive(Debug, Clone)]
pub struct ClipSyncOptions {
    /// Имя события в библиотеке FCPXML
    pub event_name: String,

    /// Имя проекта в библиотеке FCPXML
    pub project_name: String,

    /// Форматировать ли JSON индекса с отступами при сохранении
    pub pretty_index: bool,

    /// Уровень логирования
    pub log_level: log::LevelFilter,
}

impl Default for ClipSyncOptions {
    fn default() -> Self {
        Self {
            event_name: "Video Project".to_string(),
            project_name: "Video Sequence".to_string(),
            pretty_index: true,
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Основной интерфейс индексации записей и генерации таймлайна
///
/// Объединяет три этапа конвейера: построение индекса по каталогу записей,
/// фильтрацию клипов по диапазону времени и генерацию FCPXML таймлайна
/// для отфильтрованных клипов.
pub struct ClipSync {
    options: ClipSyncOptions,
    progress_tracker: ProgressTracker,
}

impl ClipSync {
    /// Создает новый экземпляр ClipSync с заданными настройками
    pub fn new(options: ClipSyncOptions) -> Self {
        #[cfg(test)]
        {
            setup_test_logging(options.log_level);
        }
        #[cfg(not(test))]
        {
            setup_logging(options.log_level);
        }

        log_info(&format!("Создан новый экземпляр ClipSync с настройками: {:?}", options));

        Self {
            options,
            progress_tracker: ProgressTracker::new(),
        }
    }

    /// Создает новый экземпляр ClipSync с настройками по умолчанию
    pub fn default() -> Self {
        Self::new(ClipSyncOptions::default())
    }

    /// Устанавливает функцию обратного вызова для отслеживания прогресса
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        log_debug("Установлена функция обратного вызова для отслеживания прогресса");
        self.progress_tracker = ProgressTracker::with_callback(callback);
        self
    }

    /// Устанавливает имя события в библиотеке FCPXML
    pub fn with_event_name(mut self, event_name: impl Into<String>) -> Self {
        self.options.event_name = event_name.into();
        self
    }

    /// Устанавливает имя проекта в библиотеке FCPXML
    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.options.project_name = project_name.into();
        self
    }

    /// Строит индекс каталога через произвольную файловую систему
    pub async fn build_index<F: FileSystemProvider>(
        &self,
        fs: &F,
        root: &Path,
    ) -> Result<ProjectIndex> {
        self.progress_tracker.update(0.0, "Сканирование каталога записей")?;

        let builder = IndexBuilder::new();
        let index = match builder.build(fs, root).await {
            Ok(index) => index,
            Err(e) => {
                log_error::<(), _>(&e, "Ошибка при построении индекса")?;
                return Err(e);
            }
        };

        self.progress_tracker.update(100.0, "Индекс построен")?;
        Ok(index)
    }

    /// Строит индекс каталога локальной файловой системы
    pub async fn index_directory(&self, root: &Path) -> Result<ProjectIndex> {
        let fs = TokioFileSystem::new();
        self.build_index(&fs, root).await
    }

    /// Сохраняет индекс в файл согласно настройкам форматирования
    pub async fn save_index<P: AsRef<Path>>(&self, index: &ProjectIndex, path: P) -> Result<()> {
        index.save_to_file(path, self.options.pretty_index).await?;
        log_info(&format!("Индекс сохранен: {} клипов", index.len()));
        Ok(())
    }

    /// Загружает ранее сохраненный индекс из файла
    pub async fn load_index<P: AsRef<Path>>(&self, path: P) -> Result<ProjectIndex> {
        let index = ProjectIndex::load_from_file(path).await?;
        log_info(&format!("Индекс загружен: {} клипов", index.len()));
        Ok(index)
    }

    /// Возвращает клипы индекса, пересекающиеся с интервалом [start_ms, end_ms]
    pub fn filter_by_time_range(
        &self,
        index: &ProjectIndex,
        start_ms: i64,
        end_ms: i64,
    ) -> Vec<ClipRecord> {
        TimeRangeFilter::filter(index, start_ms, end_ms)
    }

    /// Генерирует FCPXML таймлайн для списка клипов
    pub fn generate_timeline(&self, clips: &[ClipRecord], root_dir: &str) -> Result<String> {
        let generator =
            TimelineGenerator::with_names(&self.options.event_name, &self.options.project_name);
        generator.generate(clips, root_dir)
    }

    /// Генерирует FCPXML таймлайн для клипов индекса в заданном диапазоне
    ///
    /// Сквозная операция: фильтрация клипов индекса и генерация таймлайна
    /// для результата. Пустой результат фильтрации приводит к ошибке
    /// генерации, как и пустой индекс.
    pub fn generate_timeline_for_range(
        &self,
        index: &ProjectIndex,
        start_ms: i64,
        end_ms: i64,
        root_dir: &str,
    ) -> Result<String> {
        self.progress_tracker.update(0.0, "Фильтрация клипов")?;
        let clips = self.filter_by_time_range(index, start_ms, end_ms);

        self.progress_tracker.update(50.0, "Генерация таймлайна")?;
        let xml = self.generate_timeline(&clips, root_dir)?;

        self.progress_tracker.update(100.0, "Таймлайн готов")?;
        Ok(xml)
    }

    /// Генерирует таймлайн и сохраняет его в файл
    pub async fn export_timeline<P: AsRef<Path>>(
        &self,
        clips: &[ClipRecord],
        root_dir: &str,
        output_path: P,
    ) -> Result<()> {
        let xml = self.generate_timeline(clips, root_dir)?;
        tokio::fs::write(&output_path, xml).await?;

        log_info(&format!(
            "Таймлайн сохранен в файл: {}",
            output_path.as_ref().display()
        ));
        Ok(())
    }
}
