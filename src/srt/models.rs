use chrono::{DateTime, SecondsFormat, Utc};

/// Диапазон абсолютного времени, извлечённый из файла субтитров
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtitleTimeRange {
    /// Время первой записи субтитров
    pub start: DateTime<Utc>,
    /// Время последней записи субтитров
    pub end: DateTime<Utc>,
}

impl SubtitleTimeRange {
    /// Создает новый диапазон времени
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Возвращает время начала в каноническом ISO формате с миллисекундами
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Возвращает время окончания в каноническом ISO формате с миллисекундами
    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Возвращает время начала в миллисекундах с начала эпохи
    pub fn start_millis(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// Возвращает время окончания в миллисекундах с начала эпохи
    pub fn end_millis(&self) -> i64 {
        self.end.timestamp_millis()
    }

    /// Возвращает длительность диапазона в миллисекундах
    pub fn duration_millis(&self) -> i64 {
        self.end_millis() - self.start_millis()
    }
}
