use crate::error::{Error, ErrorType, Result};
use crate::srt::SubtitleTimeRange;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Запись индекса: пара видео + субтитры с границами абсолютного времени
///
/// Текстовые поля хранят время в каноническом ISO формате, числовые -
/// те же мгновения в миллисекундах с начала эпохи. Оба представления
/// задаются при создании записи и далее не изменяются.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecord {
    /// Путь к видео файлу относительно корня индексации
    pub video_path: String,
    /// Путь к файлу субтитров относительно корня индексации
    pub subtitle_path: String,
    /// Время начала клипа в ISO формате
    pub start_time: String,
    /// Время окончания клипа в ISO формате
    pub end_time: String,
    /// Время начала клипа в миллисекундах с начала эпохи
    pub start_timestamp: i64,
    /// Время окончания клипа в миллисекундах с начала эпохи
    pub end_timestamp: i64,
}

impl ClipRecord {
    /// Создает новую запись из путей и извлеченного диапазона времени
    ///
    /// Возвращает ошибку, если начало диапазона позже его окончания.
    pub fn new(
        video_path: impl Into<String>,
        subtitle_path: impl Into<String>,
        range: &SubtitleTimeRange,
    ) -> Result<Self> {
        if range.start > range.end {
            return Err(Error::new(
                ErrorType::InvalidParameters,
                &format!(
                    "Время начала клипа позже времени окончания: {} > {}",
                    range.start_iso(),
                    range.end_iso()
                ),
            ));
        }

        Ok(Self {
            video_path: video_path.into(),
            subtitle_path: subtitle_path.into(),
            start_time: range.start_iso(),
            end_time: range.end_iso(),
            start_timestamp: range.start_millis(),
            end_timestamp: range.end_millis(),
        })
    }

    /// Возвращает длительность клипа в миллисекундах
    pub fn duration_millis(&self) -> i64 {
        self.end_timestamp - self.start_timestamp
    }

    /// Проверяет пересечение клипа с закрытым интервалом [start_ms, end_ms]
    ///
    /// Касание границ считается пересечением.
    pub fn overlaps(&self, start_ms: i64, end_ms: i64) -> bool {
        self.start_timestamp <= end_ms && self.end_timestamp >= start_ms
    }
}

/// Индекс каталога записей: упорядоченный список клипов
///
/// Клипы отсортированы по возрастанию времени начала. Индекс неизменяем
/// после построения и сериализуется в JSON без пересчета полей.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIndex {
    /// Отображаемое имя корневого каталога
    pub project_path: String,
    /// Клипы, упорядоченные по возрастанию startTimestamp
    pub videos: Vec<ClipRecord>,
    /// Время создания индекса в ISO формате
    pub generated_at: String,
}

impl ProjectIndex {
    /// Создает новый индекс из уже отсортированного списка клипов
    pub fn new(project_path: impl Into<String>, videos: Vec<ClipRecord>) -> Self {
        Self {
            project_path: project_path.into(),
            videos,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Возвращает количество клипов в индексе
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Проверяет, пуст ли индекс
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Сериализует индекс в JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// Восстанавливает индекс из JSON без пересчета полей
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Сохраняет индекс в файл
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let json = self.to_json(pretty)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Загружает индекс из файла
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }
}
