use abf_types::{AbfError, AbfResult, UnitLabel, DEFAULT_UNIT};

/// Что писать в поканальные слоты fInstrumentScaleFactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstrumentScaleMode {
    /// Каждый канал получает собственный множитель.
    #[default]
    PerChannel,
    /// Во все 16 слотов пишется множитель последнего канала. Байт-в-байт
    /// совпадает со старым инструментом, но многоканальные файлы с разными
    /// амплитудами читаются с неверным масштабом.
    SharedLast,
}

/// Конфигурация кодировщика.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Единицы измерения по каналам. `None` = "mV" для каждого канала.
    pub units: Option<Vec<String>>,
    /// Режим записи множителей инструмента
    pub instrument_scale: InstrumentScaleMode,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl EncoderConfig {
    /// Конфигурация с явным списком единиц измерения.
    pub fn with_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            units: Some(units.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Метки единиц для первых `channel_count` каналов.
    ///
    /// Лишние строки игнорируются, нехватка строк - ошибка формы.
    pub fn unit_labels(
        &self,
        channel_count: usize,
    ) -> AbfResult<Vec<UnitLabel>> {
        match &self.units {
            None => Ok(vec![UnitLabel::new(DEFAULT_UNIT); channel_count]),
            Some(units) if units.len() < channel_count => Err(AbfError::shape(format!(
                "{} unit labels supplied for {channel_count} channels",
                units.len()
            ))),
            Some(units) => Ok(units
                .iter()
                .take(channel_count)
                .map(|u| UnitLabel::new(u))
                .collect()),
        }
    }
}

/// Проверяет частоту дискретизации: конечное положительное число.
pub fn validate_sample_rate(sample_rate_hz: f64) -> AbfResult<()> {
    if sample_rate_hz.is_finite() && sample_rate_hz > 0.0 {
        Ok(())
    } else {
        Err(AbfError::invalid_config(format!(
            "sample rate must be a positive finite number, got {sample_rate_hz}"
        )))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Общие реализации трейтов для InstrumentScaleMode
////////////////////////////////////////////////////////////////////////////////

impl std::fmt::Display for InstrumentScaleMode {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            InstrumentScaleMode::PerChannel => write!(f, "per-channel"),
            InstrumentScaleMode::SharedLast => write!(f, "shared-last"),
        }
    }
}

impl std::str::FromStr for InstrumentScaleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "per-channel" | "per_channel" | "channel" => Ok(InstrumentScaleMode::PerChannel),
            "shared-last" | "shared_last" | "legacy" => Ok(InstrumentScaleMode::SharedLast),
            _ => Err(format!(
                "Unknown instrument scale mode: '{s}'. Use: per-channel, shared-last"
            )),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
