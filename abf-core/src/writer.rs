use std::path::Path;

use abf_types::{AbfResult, ChannelMatrix, ChannelScale, UnitLabel};
use log::{debug, info};

use crate::{
    assembler::{assemble, persist_atomic},
    config::{validate_sample_rate, EncoderConfig},
    format::data_blocks,
    header::HeaderBuilder,
    interleave::interleave,
    quantize::quantize,
    scale::select_scales,
};

/// Кодировщик ABF1: матрица каналов -> образ файла -> диск.
#[derive(Debug, Clone, Default)]
pub struct AbfWriter {
    config: EncoderConfig,
}

/// Результат кодирования: готовый образ файла и выбранные масштабы.
#[derive(Debug, Clone)]
pub struct EncodedAbf {
    bytes: Vec<u8>,
    channel_count: usize,
    sample_count: usize,
    scales: Vec<ChannelScale>,
    units: Vec<UnitLabel>,
}

impl AbfWriter {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Кодирует матрицу в памяти, без ввода/вывода.
    pub fn encode(
        &self,
        matrix: &ChannelMatrix,
        sample_rate_hz: f64,
    ) -> AbfResult<EncodedAbf> {
        validate_sample_rate(sample_rate_hz)?;

        let channel_count = matrix.channel_count();
        let sample_count = matrix.sample_count();
        let units = self.config.unit_labels(channel_count)?;
        let scales = select_scales(matrix)?;

        let header = HeaderBuilder::new(
            sample_count,
            sample_rate_hz,
            &units,
            &scales,
            self.config.instrument_scale,
        )?
        .build();

        let samples = quantize(&interleave(matrix), &scales)?;
        let bytes = assemble(&header, &samples);

        debug!(
            "encoded {channel_count} ch x {sample_count} samples @ {sample_rate_hz} Hz, \
             instrument scale mode: {}",
            self.config.instrument_scale
        );

        Ok(EncodedAbf {
            bytes,
            channel_count,
            sample_count,
            scales,
            units,
        })
    }

    /// Кодирует матрицу и атомарно записывает файл в `path`.
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        matrix: &ChannelMatrix,
        sample_rate_hz: f64,
    ) -> AbfResult<EncodedAbf> {
        let path = path.as_ref();
        let encoded = self.encode(matrix, sample_rate_hz)?;

        persist_atomic(path, encoded.bytes())?;

        info!(
            "Written {:?}: {} channels, {} samples/channel, {} bytes",
            path,
            encoded.channel_count,
            encoded.sample_count,
            encoded.bytes.len()
        );

        Ok(encoded)
    }
}

impl EncodedAbf {
    /// Полный образ файла.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    /// Выборок в каждом канале.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn total_samples(&self) -> usize {
        self.channel_count * self.sample_count
    }

    /// Масштабы по каналам в порядке каналов.
    pub fn scales(&self) -> &[ChannelScale] {
        &self.scales
    }

    pub fn units(&self) -> &[UnitLabel] {
        &self.units
    }

    /// Количество блоков секции данных.
    pub fn data_blocks(&self) -> usize {
        data_blocks(self.total_samples())
    }
}

/// Convenience: кодирует и пишет файл с конфигурацией по умолчанию.
///
/// `units = None` даёт "mV" для каждого канала.
pub fn write_abf<P: AsRef<Path>>(
    path: P,
    matrix: &ChannelMatrix,
    sample_rate_hz: f64,
    units: Option<&[&str]>,
) -> AbfResult<EncodedAbf> {
    let config = match units {
        Some(units) => EncoderConfig::with_units(units.iter().copied()),
        None => EncoderConfig::default(),
    };

    AbfWriter::new(config).write(path, matrix, sample_rate_hz)
}
