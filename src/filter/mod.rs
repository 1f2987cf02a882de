use crate::index::{ClipRecord, ProjectIndex};
use crate::logging::log_debug;

/// Фильтр клипов индекса по диапазону времени
///
/// Выбирает клипы, пересекающиеся с закрытым интервалом запроса.
/// Фильтрация чистая, сохраняет порядок клипов индекса и не пересортировывает
/// результат; пустой результат - нормальный исход, а не ошибка.
pub struct TimeRangeFilter;

impl TimeRangeFilter {
    /// Возвращает клипы, пересекающиеся с интервалом [start_ms, end_ms]
    pub fn filter(index: &ProjectIndex, start_ms: i64, end_ms: i64) -> Vec<ClipRecord> {
        let filtered: Vec<ClipRecord> = index
            .videos
            .iter()
            .filter(|clip| clip.overlaps(start_ms, end_ms))
            .cloned()
            .collect();

        log_debug(&format!(
            "Фильтрация по диапазону [{}, {}]: выбрано {} из {} клипов",
            start_ms,
            end_ms,
            filtered.len(),
            index.len()
        ));

        filtered
    }

    /// Возвращает клипы для необязательного диапазона
    ///
    /// Отсутствующий диапазон дает пустой результат.
    pub fn filter_optional(index: &ProjectIndex, range: Option<(i64, i64)>) -> Vec<ClipRecord> {
        match range {
            Some((start_ms, end_ms)) => Self::filter(index, start_ms, end_ms),
            None => Vec::new(),
        }
    }
}
