use clip_sync::{Error, TimestampExtractor};

#[test]
fn test_extract_single_block_start_equals_end() {
    // Единственный блок: начало и конец совпадают
    let content = "1\n2024-11-23 09:58:17.237,000 --> 2024-11-23 09:58:20.000,000\ntext";
    let range = TimestampExtractor::extract_str(content).unwrap();

    assert_eq!(range.start_iso(), "2024-11-23T09:58:17.237Z");
    assert_eq!(range.end_iso(), "2024-11-23T09:58:17.237Z");
}

#[test]
fn test_extract_realistic_recording() {
    // Типичный файл субтитров записи экрана: несколько блоков с
    // абсолютными метками в строке тайминга
    let content = "\
1
2024-11-23 09:58:17.237,000 --> 2024-11-23 09:58:19.500,000
Opening the project

2
2024-11-23 09:58:21.000,000 --> 2024-11-23 09:58:24.000,000
Editing the file

3
2024-11-23 10:02:45.900,000 --> 2024-11-23 10:02:50.000,000
Running the tests
";
    let range = TimestampExtractor::extract_str(content).unwrap();

    assert_eq!(range.start_iso(), "2024-11-23T09:58:17.237Z");
    assert_eq!(range.end_iso(), "2024-11-23T10:02:45.900Z");
    // Извлеченный диапазон монотонен
    assert!(range.start_millis() <= range.end_millis());
    assert_eq!(range.start_millis(), 1732355897237);
}

#[test]
fn test_extract_end_skips_blocks_without_timestamp() {
    // Последние блоки без распознаваемых меток пропускаются при поиске
    // конечной метки
    let content = "\
1
2024-11-23 09:00:00.000,000
first

2
2024-11-23 09:30:00.000,000
middle

trailing notes
no timestamp here
";
    let range = TimestampExtractor::extract_str(content).unwrap();

    assert_eq!(range.start_iso(), "2024-11-23T09:00:00.000Z");
    assert_eq!(range.end_iso(), "2024-11-23T09:30:00.000Z");
}

#[test]
fn test_extract_crlf_line_endings() {
    let content = "1\r\n2024-11-23 09:58:17.237,000\r\ntext\r\n\r\n2\r\n2024-11-23 09:59:00.000,000\r\ntext";
    let range = TimestampExtractor::extract_str(content).unwrap();

    assert_eq!(range.start_iso(), "2024-11-23T09:58:17.237Z");
    assert_eq!(range.end_iso(), "2024-11-23T09:59:00.000Z");
}

#[test]
fn test_extract_relative_timings_fail() {
    // Обычный SRT с относительными таймингами не содержит абсолютных меток
    let content = "\
1
00:00:01,000 --> 00:00:04,000
Hello, world!

2
00:00:05,000 --> 00:00:08,000
This is a test.
";
    let result = TimestampExtractor::extract_str(content);

    assert!(matches!(result, Err(Error::TimestampExtraction(_))));
}

#[test]
fn test_extract_empty_content_fails() {
    assert!(TimestampExtractor::extract_str("").is_err());
    assert!(TimestampExtractor::extract_str("\n\n \n\n").is_err());
}

#[test]
fn test_extract_start_only_from_first_block() {
    // Первый блок без метки означает ошибку, даже если метки есть дальше
    let content = "just a header\n\n1\n2024-11-23 09:58:17.000,000\ntext";
    let result = TimestampExtractor::extract_str(content);

    assert!(result.is_err());
}
