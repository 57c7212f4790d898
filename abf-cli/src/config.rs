use std::path::PathBuf;

use abf_core::{EncoderConfig, InstrumentScaleMode};

/// Полная конфигурация запуска abf-write.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// JSON с данными каналов
    pub input_path: PathBuf,
    /// Путь к выходному .abf файлу
    pub output_path: PathBuf,
    /// Частота дискретизации (Гц)
    pub sample_rate_hz: f64,
    /// Единицы по каналам (пусто = значение библиотеки по умолчанию)
    pub units: Vec<String>,
    /// Режим записи множителей инструмента
    pub instrument_scale: InstrumentScaleMode,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl CliConfig {
    /// Конфигурация кодировщика для этого запуска.
    pub fn encoder_config(&self) -> EncoderConfig {
        EncoderConfig {
            units: (!self.units.is_empty()).then(|| self.units.clone()),
            instrument_scale: self.instrument_scale,
        }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("samples.json"),
            output_path: PathBuf::from("recording.abf"),
            sample_rate_hz: 10_000.0,
            units: Vec::new(),
            instrument_scale: InstrumentScaleMode::PerChannel,
        }
    }
}

/// Парсит строку частоты дискретизации в герцы.
///
/// Поддерживает суффиксы: `MHz`, `kHz`, `Hz` (регистронезависимо).
///
/// # Примеры
/// ```
/// use abf_cli::config::parse_rate_hz;
/// assert_eq!(parse_rate_hz("10kHz").unwrap(), 10_000.0);
/// assert_eq!(parse_rate_hz("20000").unwrap(), 20_000.0);
/// ```
pub fn parse_rate_hz(s: &str) -> Result<f64, String> {
    let s = s.trim();
    let lower = s.to_lowercase();

    let (num_str, mult) = if let Some(v) = lower.strip_suffix("mhz") {
        (v.trim(), 1_000_000_f64)
    } else if let Some(v) = lower.strip_suffix("khz") {
        (v.trim(), 1_000_f64)
    } else if let Some(v) = lower.strip_suffix("hz") {
        (v.trim(), 1_f64)
    } else {
        (lower.as_str(), 1_f64)
    };

    let n: f64 = num_str
        .parse()
        .map_err(|e| format!("Invalid sample rate '{s}': {e}"))?;

    let hz = n * mult;

    if !hz.is_finite() || hz <= 0.0 {
        return Err(format!("Sample rate must be positive, got '{s}'"));
    }

    Ok(hz)
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
