use crate::error::Result;
use std::sync::{Arc, Mutex};

/// Тип для функций обратного вызова прогресса
pub type ProgressCallback = Box<dyn Fn(f32, &str) + Send + 'static>;

/// Трекер прогресса этапов индексации и генерации таймлайна
#[derive(Clone)]
pub struct ProgressTracker {
    /// Текущий прогресс (от 0.0 до 100.0)
    progress: Arc<Mutex<f32>>,
    /// Текущий статус
    status: Arc<Mutex<String>>,
    /// Функция обратного вызова для отслеживания прогресса
    callback: Option<Arc<ProgressCallback>>,
}

impl ProgressTracker {
    /// Создает новый трекер прогресса
    pub fn new() -> Self {
        Self {
            progress: Arc::new(Mutex::new(0.0)),
            status: Arc::new(Mutex::new(String::new())),
            callback: None,
        }
    }

    /// Создает новый трекер прогресса с функцией обратного вызова
    pub fn with_callback(callback: ProgressCallback) -> Self {
        Self {
            progress: Arc::new(Mutex::new(0.0)),
            status: Arc::new(Mutex::new(String::new())),
            callback: Some(Arc::new(callback)),
        }
    }

    /// Обновляет прогресс и статус
    pub fn update(&self, progress: f32, status: &str) -> Result<()> {
        let clamped_progress = progress.clamp(0.0, 100.0);

        {
            let mut p = self.progress.lock().unwrap();
            *p = clamped_progress;
        }

        {
            let mut s = self.status.lock().unwrap();
            *s = status.to_string();
        }

        if let Some(callback) = &self.callback {
            callback(clamped_progress, status);
        }

        Ok(())
    }

    /// Возвращает текущий прогресс
    pub fn get_progress(&self) -> f32 {
        *self.progress.lock().unwrap()
    }

    /// Возвращает текущий статус
    pub fn get_status(&self) -> String {
        self.status.lock().unwrap().clone()
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
