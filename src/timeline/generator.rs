use crate::error::{Error, ErrorType, Result};
use crate::index::ClipRecord;
use crate::logging::{log_debug, log_info};
use std::fmt::Write;

/// Частота кадров таймлайна (формат 1080p30)
pub const FRAME_RATE: i64 = 30;

/// Идентификатор ресурса формата в FCPXML документе
const FORMAT_ID: &str = "r301";

/// Генератор FCPXML таймлайна из списка клипов
///
/// Клипы размещаются на общей относительной оси времени: нулевой точкой
/// служит самое раннее время начала среди клипов, поэтому промежутки и
/// пересечения клипов по реальному времени сохраняются на таймлайне.
/// Все значения времени квантуются по сетке кадров 30 fps.
pub struct TimelineGenerator {
    /// Имя события в библиотеке FCPXML
    event_name: String,
    /// Имя проекта в библиотеке FCPXML
    project_name: String,
}

impl TimelineGenerator {
    /// Создает генератор с именами события и проекта по умолчанию
    pub fn new() -> Self {
        Self {
            event_name: "Video Project".to_string(),
            project_name: "Video Sequence".to_string(),
        }
    }

    /// Создает генератор с заданными именами события и проекта
    pub fn with_names(event_name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            project_name: project_name.into(),
        }
    }

    /// Генерирует FCPXML документ для списка клипов
    ///
    /// Клипы выводятся в порядке входного списка; вызывающая сторона
    /// отвечает за хронологическую сортировку и фильтрацию. Пустой список
    /// клипов является нарушением предусловия.
    pub fn generate(&self, clips: &[ClipRecord], root_dir: &str) -> Result<String> {
        if clips.is_empty() {
            return Err(Error::new(
                ErrorType::EmptyTimeline,
                "Невозможно построить таймлайн без клипов",
            ));
        }

        // Нулевая точка таймлайна - самое раннее начало среди клипов
        let epoch = clips
            .iter()
            .map(|clip| clip.start_timestamp)
            .min()
            .unwrap_or(0);

        log_info(&format!(
            "Генерация таймлайна: {} клипов, нулевая точка {} мс",
            clips.len(),
            epoch
        ));

        let resources = self.render_resources(clips, root_dir);
        let spine = self.render_spine(clips, epoch);

        // Общая длительность считается от первого до последнего клипа
        // входного списка, как в существующем формате index-проектов
        let first = &clips[0];
        let last = &clips[clips.len() - 1];
        let total_duration_ms = last.end_timestamp - first.start_timestamp;
        let total_duration = format_frame_time(total_duration_ms);

        let mut xml = String::new();
        let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(xml, "<!DOCTYPE fcpxml>");
        let _ = writeln!(xml, r#"<fcpxml version="1.8">"#);
        let _ = writeln!(xml, "    <resources>");
        let _ = writeln!(
            xml,
            r#"        <format id="{}" name="FFVideoFormat1080p30" frameDuration="1/30s" width="1920" height="1080" />"#,
            FORMAT_ID
        );
        let _ = writeln!(
            xml,
            r#"        <text-style id="ts1" font="Helvetica" fontSize="72" color="1 1 1 1" />"#
        );
        xml.push_str(&resources);
        let _ = writeln!(xml, "    </resources>");
        let _ = writeln!(xml, "    <library>");
        let _ = writeln!(xml, r#"        <event name="{}">"#, self.event_name);
        let _ = writeln!(xml, r#"            <project name="{}">"#, self.project_name);
        let _ = writeln!(
            xml,
            r#"                <sequence format="{}" duration="{}">"#,
            FORMAT_ID, total_duration
        );
        let _ = writeln!(xml, "                    <spine>");
        xml.push_str(&spine);
        let _ = writeln!(xml, "                    </spine>");
        let _ = writeln!(xml, "                </sequence>");
        let _ = writeln!(xml, "            </project>");
        let _ = writeln!(xml, "        </event>");
        let _ = writeln!(xml, "    </library>");
        let _ = writeln!(xml, "</fcpxml>");

        Ok(xml)
    }

    /// Формирует список ресурсов: по одному asset на клип
    fn render_resources(&self, clips: &[ClipRecord], root_dir: &str) -> String {
        let mut xml = String::new();

        for (i, clip) in clips.iter().enumerate() {
            let _ = writeln!(xml, r#"        <asset id="r{}">"#, i + 1);
            let _ = writeln!(xml, "            <media>");
            let _ = writeln!(xml, "                <video>");
            let _ = writeln!(
                xml,
                r#"                    <asset-clip format="{}" src="file://{}{}" />"#,
                FORMAT_ID, root_dir, clip.video_path
            );
            let _ = writeln!(xml, "                </video>");
            let _ = writeln!(xml, "            </media>");
            let _ = writeln!(xml, "        </asset>");
        }

        xml
    }

    /// Формирует размещение клипов на таймлайне
    fn render_spine(&self, clips: &[ClipRecord], epoch: i64) -> String {
        let mut xml = String::new();

        for (i, clip) in clips.iter().enumerate() {
            let relative_start_ms = clip.start_timestamp - epoch;
            let duration_ms = clip.duration_millis();

            let start = format_frame_time(relative_start_ms);
            let duration = format_frame_time(duration_ms);

            log_debug(&format!(
                "Клип {}: смещение {}, длительность {}",
                i + 1,
                start,
                duration
            ));

            let _ = writeln!(
                xml,
                r#"                        <asset-clip name="Clip {}" ref="r{}" start="{}" duration="{}" format="{}">"#,
                i + 1,
                i + 1,
                start,
                duration,
                FORMAT_ID
            );
            let _ = writeln!(
                xml,
                r#"                            <adjust-transform position="0 0" anchor="0 0" />"#
            );
            let _ = writeln!(xml, "                        </asset-clip>");
        }

        xml
    }
}

impl Default for TimelineGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Квантует миллисекунды по сетке кадров
///
/// Эквивалентно floor(seconds * 30), но целочисленно и без потери точности.
pub(crate) fn quantize_to_frames(millis: i64) -> i64 {
    millis * FRAME_RATE / 1000
}

/// Кодирует миллисекунды как "целые_секунды/остаток_кадровs"
///
/// Время сериализуется рациональной парой секунд и кадров, а не
/// десятичной дробью: 10.5 секунды дает "10/15s".
pub(crate) fn format_frame_time(millis: i64) -> String {
    let total_frames = quantize_to_frames(millis);
    format!("{}/{}s", total_frames / FRAME_RATE, total_frames % FRAME_RATE)
}
