use crate::error::{Error, ErrorType, Result};
use crate::srt::models::SubtitleTimeRange;
use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Предварительный фильтр для строк, похожих на абсолютную дату-время
/// вида "2024-11-23 09:58:17.237"
static ABSOLUTE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}")
        .expect("Некорректное регулярное выражение для даты-времени")
});

/// Форматы абсолютной даты-времени, встречающиеся в субтитрах записей
const ABSOLUTE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Экстрактор абсолютных временных меток из SRT субтитров
///
/// Записи экрана сопровождаются SRT файлами, в которых строка тайминга
/// каждого блока начинается с абсолютной даты-времени до первой запятой.
/// Экстрактор возвращает самую раннюю и самую позднюю метку файла.
pub struct TimestampExtractor;

impl TimestampExtractor {
    /// Извлекает диапазон абсолютного времени из содержимого субтитров
    ///
    /// Начальная метка берется из первого блока (сканирование строк сверху
    /// вниз), конечная - из последнего блока, содержащего распознаваемую
    /// метку (сканирование блоков с конца).
    pub fn extract_str(content: &str) -> Result<SubtitleTimeRange> {
        // Нормализуем переводы строк и разбиваем на непустые блоки
        let content = content.replace("\r\n", "\n").replace('\r', "\n");
        let blocks: Vec<&str> = content
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .collect();

        if blocks.is_empty() {
            return Err(Error::new(
                ErrorType::TimestampExtraction,
                "Субтитры не содержат ни одного блока",
            ));
        }

        // Первая метка берется только из первого блока
        let first_timestamp = Self::extract_from_block(blocks[0]);

        // Последняя метка - из последнего блока, где она распознается
        let mut last_timestamp = None;
        for block in blocks.iter().rev() {
            last_timestamp = Self::extract_from_block(block);
            if last_timestamp.is_some() {
                break;
            }
        }

        match (first_timestamp, last_timestamp) {
            (Some(start), Some(end)) => Ok(SubtitleTimeRange::new(start, end)),
            _ => Err(Error::new(
                ErrorType::TimestampExtraction,
                "Не удалось извлечь временные метки из файла субтитров",
            )),
        }
    }

    /// Извлекает первую распознаваемую метку из одного блока субтитров
    ///
    /// Строки сканируются попарно: строка i считается маркером записи,
    /// а в строке i+1 до первой запятой ожидается абсолютная дата-время.
    /// Нераспознаваемые кандидаты пропускаются без ошибки.
    fn extract_from_block(block: &str) -> Option<DateTime<Utc>> {
        let lines: Vec<&str> = block.lines().collect();

        for i in 0..lines.len() {
            if i + 1 >= lines.len() {
                break;
            }
            let candidate = lines[i + 1].split(',').next().unwrap_or("");
            if let Some(timestamp) = Self::parse_absolute_time(candidate) {
                return Some(timestamp);
            }
        }

        None
    }

    /// Парсит абсолютную дату-время, возвращая None для нераспознаваемого текста
    fn parse_absolute_time(text: &str) -> Option<DateTime<Utc>> {
        let trimmed = text.trim();
        if !ABSOLUTE_TIME_RE.is_match(trimmed) {
            return None;
        }

        for format in ABSOLUTE_TIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Some(naive.and_utc());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_time() {
        let parsed = TimestampExtractor::parse_absolute_time("2024-11-23 09:58:17.237").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1732355897237);

        // Вариант с разделителем T
        let parsed = TimestampExtractor::parse_absolute_time("2024-11-23T09:58:17.237").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1732355897237);

        // Без миллисекунд
        let parsed = TimestampExtractor::parse_absolute_time("2024-11-23 09:58:17").unwrap();
        assert_eq!(parsed.timestamp_millis(), 1732355897000);
    }

    #[test]
    fn test_parse_absolute_time_rejects_garbage() {
        assert!(TimestampExtractor::parse_absolute_time("").is_none());
        assert!(TimestampExtractor::parse_absolute_time("not a date").is_none());
        assert!(TimestampExtractor::parse_absolute_time("00:00:01").is_none());
        assert!(TimestampExtractor::parse_absolute_time("2024-13-45 99:99:99").is_none());
    }

    #[test]
    fn test_extract_single_block() {
        let content = "1\n2024-11-23 09:58:17.237,000 --> 2024-11-23 09:58:19.000,000\ntext";
        let range = TimestampExtractor::extract_str(content).unwrap();

        assert_eq!(range.start_iso(), "2024-11-23T09:58:17.237Z");
        assert_eq!(range.end_iso(), "2024-11-23T09:58:17.237Z");
    }

    #[test]
    fn test_extract_multiple_blocks() {
        let content = "1\n2024-11-23 09:58:17.237,000\nfirst\n\n2\n2024-11-23 10:05:00.000,000\nlast";
        let range = TimestampExtractor::extract_str(content).unwrap();

        assert_eq!(range.start_iso(), "2024-11-23T09:58:17.237Z");
        assert_eq!(range.end_iso(), "2024-11-23T10:05:00.000Z");
        assert!(range.start_millis() <= range.end_millis());
    }

    #[test]
    fn test_extract_skips_unparseable_trailing_block() {
        // Последний блок без метки пропускается, метка берется из предыдущего
        let content = "1\n2024-11-23 09:58:17.000,000\nfirst\n\n2\n2024-11-23 10:00:00.000,000\nmiddle\n\njust text\nwithout timestamp";
        let range = TimestampExtractor::extract_str(content).unwrap();

        assert_eq!(range.end_iso(), "2024-11-23T10:00:00.000Z");
    }

    #[test]
    fn test_extract_short_block_is_skipped() {
        // Блок из одной строки не дает пары строк и не вызывает паники
        let content = "lonely\n\n1\n2024-11-23 09:58:17.000,000\ntext";
        let result = TimestampExtractor::extract_str(content);

        // Первый блок не содержит метки - извлечение завершается ошибкой
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_no_timestamps() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\nrelative timings only";
        let result = TimestampExtractor::extract_str(content);

        assert!(matches!(result, Err(Error::TimestampExtraction(_))));
    }

    #[test]
    fn test_extract_empty_content() {
        assert!(TimestampExtractor::extract_str("").is_err());
        assert!(TimestampExtractor::extract_str("\n\n\n").is_err());
    }
}
