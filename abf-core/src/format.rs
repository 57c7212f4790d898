//! Раскладка файла ABF1 (episodic, 16-битные целые отсчёты)
//!
//! Файл состоит из блоков по 512 байт: 4 блока заголовка, затем блоки данных.
//! Все многобайтовые числа хранятся в порядке little-endian.
//!
//! ```text
//! [0..2048)      заголовок, поля по фиксированным смещениям (см. [`field`])
//! [2048..)       отсчёты i16, чередование по каналам: s0c0 s0c1 .. s1c0 ..
//! ```

use std::{marker::PhantomData, ops::Range};

pub use abf_types::{MAX_CHANNELS, UNIT_LABEL_LEN};

use crate::binary::WriteLe;

/// Сигнатура файла: b"ABF "
pub const ABF_SIGNATURE: [u8; 4] = *b"ABF ";

/// Версия формата, записываемая в заголовок
pub const ABF_VERSION: f32 = 1.3;

/// Размер блока (байт)
pub const ABF_BLOCK_SIZE: usize = 512;

/// Количество блоков заголовка
pub const ABF_HEADER_BLOCKS: usize = 4;

/// Размер заголовка (2048 байт)
pub const ABF_HEADER_SIZE: usize = ABF_BLOCK_SIZE * ABF_HEADER_BLOCKS;

/// Смещение начала данных в файле
pub const ABF_DATA_OFFSET: usize = ABF_HEADER_SIZE;

/// Размер одного отсчёта в секции данных
pub const BYTES_PER_SAMPLE: usize = 2;

/// Режим работы: 5 = episodic
pub const OPERATION_MODE_EPISODIC: i16 = 5;

/// Формат данных: 0 = 16-битные целые
pub const DATA_FORMAT_INT16: i16 = 0;

/// Разрешение АЦП: 16 бит со знаком = +/- 32768
pub const ADC_RESOLUTION: i32 = 32_768;

/// Номинальный диапазон АЦП (В)
pub const ADC_RANGE: f32 = 10.0;

/// Максимальный модуль квантованного значения при подборе масштаба
pub const SAMPLE_LIMIT: i16 = i16::MAX;

/// Число шагов ослабления (10^-1 .. 10^-10)
pub const MAX_ATTENUATION_STEPS: u8 = 10;

/// Заглушка для неиспользуемых слотов каналов
pub const UNUSED_CHANNEL: i16 = -1;

/// Поле заголовка: имя, смещение, число слотов и тип значения.
///
/// Поканальные поля занимают [`MAX_CHANNELS`] слотов подряд, шаг равен ширине
/// типа.
#[derive(Debug, Clone, Copy)]
pub struct HeaderField<T> {
    pub name: &'static str,
    pub offset: usize,
    pub slots: usize,
    _value: PhantomData<fn() -> T>,
}

/// Описание поля без типа значения (для проверки раскладки).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub span: Range<usize>,
}

impl<T: WriteLe> HeaderField<T> {
    pub const fn scalar(
        name: &'static str,
        offset: usize,
    ) -> Self {
        Self {
            name,
            offset,
            slots: 1,
            _value: PhantomData,
        }
    }

    pub const fn per_channel(
        name: &'static str,
        offset: usize,
    ) -> Self {
        Self {
            name,
            offset,
            slots: MAX_CHANNELS,
            _value: PhantomData,
        }
    }

    /// Смещение слота `slot` в заголовке.
    ///
    /// # Panics
    ///
    /// Паникует, если `slot` не меньше числа слотов поля.
    pub fn slot_offset(
        &self,
        slot: usize,
    ) -> usize {
        assert!(slot < self.slots, "{}: slot {slot} out of range", self.name);
        self.offset + slot * T::WIDTH
    }

    /// Диапазон байт, занимаемый всеми слотами поля.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.slots * T::WIDTH
    }

    pub fn layout(&self) -> FieldLayout {
        FieldLayout {
            name: self.name,
            span: self.span(),
        }
    }
}

/// Таблица полей заголовка ABF1, которые заполняет кодировщик.
///
/// Имена совпадают с документацией формата, чтобы по ним можно было сверяться
/// со сторонними читателями.
pub mod field {
    use super::HeaderField;
    use crate::format::UNIT_LABEL_LEN;

    pub const SIGNATURE: HeaderField<[u8; 4]> = HeaderField::scalar("fFileSignature", 0);
    pub const FORMAT_VERSION: HeaderField<f32> = HeaderField::scalar("fFileVersionNumber", 4);
    pub const OPERATION_MODE: HeaderField<i16> = HeaderField::scalar("nOperationMode", 8);
    pub const ACTUAL_ACQ_LENGTH: HeaderField<i32> = HeaderField::scalar("lActualAcqLength", 10);
    pub const EPISODE_COUNT: HeaderField<i32> = HeaderField::scalar("lActualEpisodes", 16);
    pub const DATA_SECTION_PTR: HeaderField<i32> = HeaderField::scalar("lDataSectionPtr", 40);
    pub const DATA_FORMAT: HeaderField<i16> = HeaderField::scalar("nDataFormat", 100);
    pub const CHANNEL_COUNT: HeaderField<i16> = HeaderField::scalar("nADCNumChannels", 120);
    pub const SAMPLE_INTERVAL: HeaderField<f32> = HeaderField::scalar("fADCSampleInterval", 122);
    pub const SAMPLES_PER_EPISODE: HeaderField<i32> =
        HeaderField::scalar("lNumSamplesPerEpisode", 138);
    pub const ADC_RANGE: HeaderField<f32> = HeaderField::scalar("fADCRange", 244);
    pub const ADC_RESOLUTION: HeaderField<i32> = HeaderField::scalar("lADCResolution", 252);

    pub const CHANNEL_MAP: HeaderField<i16> = HeaderField::per_channel("nADCPtoLChannelMap", 378);
    pub const SAMPLING_SEQUENCE: HeaderField<i16> =
        HeaderField::per_channel("nADCSamplingSeq", 410);
    pub const UNIT_LABELS: HeaderField<[u8; UNIT_LABEL_LEN]> =
        HeaderField::per_channel("sADCUnits", 602);
    pub const PROGRAMMABLE_GAIN: HeaderField<f32> =
        HeaderField::per_channel("fADCProgrammableGain", 730);
    pub const INSTRUMENT_SCALE: HeaderField<f32> =
        HeaderField::per_channel("fInstrumentScaleFactor", 922);
    pub const SIGNAL_GAIN: HeaderField<f32> = HeaderField::per_channel("fSignalGain", 1050);
}

/// Раскладка всех полей таблицы в порядке смещений.
pub fn header_layout() -> Vec<FieldLayout> {
    vec![
        field::SIGNATURE.layout(),
        field::FORMAT_VERSION.layout(),
        field::OPERATION_MODE.layout(),
        field::ACTUAL_ACQ_LENGTH.layout(),
        field::EPISODE_COUNT.layout(),
        field::DATA_SECTION_PTR.layout(),
        field::DATA_FORMAT.layout(),
        field::CHANNEL_COUNT.layout(),
        field::SAMPLE_INTERVAL.layout(),
        field::SAMPLES_PER_EPISODE.layout(),
        field::ADC_RANGE.layout(),
        field::ADC_RESOLUTION.layout(),
        field::CHANNEL_MAP.layout(),
        field::SAMPLING_SEQUENCE.layout(),
        field::UNIT_LABELS.layout(),
        field::PROGRAMMABLE_GAIN.layout(),
        field::INSTRUMENT_SCALE.layout(),
        field::SIGNAL_GAIN.layout(),
    ]
}

/// Количество блоков данных для `total_samples` отсчётов.
///
/// Всегда на один блок больше целой части, даже если данные ровно кратны
/// размеру блока.
pub fn data_blocks(total_samples: usize) -> usize {
    total_samples * BYTES_PER_SAMPLE / ABF_BLOCK_SIZE + 1
}

/// Полный размер файла в байтах.
pub fn file_size(total_samples: usize) -> usize {
    (data_blocks(total_samples) + ABF_HEADER_BLOCKS) * ABF_BLOCK_SIZE
}
