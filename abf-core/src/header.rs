use abf_types::{AbfError, AbfResult, ChannelScale, UnitLabel, MAX_CHANNELS};
use log::warn;

use crate::{
    binary::{write_at, WriteLe},
    config::InstrumentScaleMode,
    format::{
        field, HeaderField, ABF_HEADER_BLOCKS, ABF_HEADER_SIZE, ABF_SIGNATURE, ABF_VERSION,
        ADC_RANGE, ADC_RESOLUTION, DATA_FORMAT_INT16, OPERATION_MODE_EPISODIC, UNUSED_CHANNEL,
    },
};

/// Заголовок ABF1: 4 блока по 512 байт.
///
/// Поля пишутся только через таблицу [`field`], незаполненные байты остаются
/// нулями.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderBuffer {
    buf: [u8; ABF_HEADER_SIZE],
}

impl HeaderBuffer {
    pub fn new() -> Self {
        Self {
            buf: [0u8; ABF_HEADER_SIZE],
        }
    }

    /// Записывает значение в слот `slot` поля `field`.
    pub fn put<T: WriteLe>(
        &mut self,
        field: &HeaderField<T>,
        slot: usize,
        val: T,
    ) {
        write_at(&mut self.buf, field.slot_offset(slot), val);
    }

    /// Записывает скалярное поле.
    pub fn put_scalar<T: WriteLe>(
        &mut self,
        field: &HeaderField<T>,
        val: T,
    ) {
        self.put(field, 0, val);
    }

    pub fn as_bytes(&self) -> &[u8; ABF_HEADER_SIZE] {
        &self.buf
    }
}

impl Default for HeaderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HeaderBuffer {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("HeaderBuffer")
            .field("len", &self.buf.len())
            .finish()
    }
}

/// Значения заголовка, уже разложенные по 16 слотам каналов.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    channel_count: i16,
    total_samples: i32,
    sample_interval_us: f32,
    channel_map: [i16; MAX_CHANNELS],
    units: [UnitLabel; MAX_CHANNELS],
    instrument_scales: [f32; MAX_CHANNELS],
}

impl HeaderBuilder {
    /// Готовит поля заголовка.
    ///
    /// `units` и `scales` содержат ровно по одному элементу на канал. Слоты за
    /// последним каналом получают `-1` в карте каналов и повторяют метку и
    /// множитель последнего канала.
    pub fn new(
        sample_count: usize,
        sample_rate_hz: f64,
        units: &[UnitLabel],
        scales: &[ChannelScale],
        mode: InstrumentScaleMode,
    ) -> AbfResult<Self> {
        let channel_count = scales.len();

        if channel_count == 0 || channel_count > MAX_CHANNELS {
            return Err(AbfError::shape(format!(
                "channel count {channel_count} is outside 1..={MAX_CHANNELS}"
            )));
        }

        if units.len() != channel_count {
            return Err(AbfError::shape(format!(
                "{} unit labels for {channel_count} channels",
                units.len()
            )));
        }

        let total_samples = sample_count
            .checked_mul(channel_count)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| {
                AbfError::shape(format!(
                    "{sample_count} samples x {channel_count} channels exceed the i32 header field"
                ))
            })?;

        let last = channel_count - 1;
        let channel_map =
            std::array::from_fn(|ch| if ch < channel_count { ch as i16 } else { UNUSED_CHANNEL });
        let unit_slots = std::array::from_fn(|ch| units[ch.min(last)]);

        let instrument_scales = match mode {
            InstrumentScaleMode::PerChannel => {
                std::array::from_fn(|ch| scales[ch.min(last)].instrument_scale as f32)
            }
            InstrumentScaleMode::SharedLast => {
                if scales
                    .iter()
                    .any(|s| s.instrument_scale != scales[last].instrument_scale)
                {
                    warn!(
                        "Shared instrument scale: channels with different scale steps will \
                         decode with wrong amplitudes"
                    );
                }
                [scales[last].instrument_scale as f32; MAX_CHANNELS]
            }
        };

        let sample_interval_us = ((1e6 / sample_rate_hz) / channel_count as f64) as f32;
        if !(sample_interval_us.is_finite() && sample_interval_us > 0.0) {
            return Err(AbfError::invalid_config(format!(
                "sample rate {sample_rate_hz} Hz gives interval {sample_interval_us} us, \
                 not representable as f32"
            )));
        }

        Ok(Self {
            channel_count: channel_count as i16,
            total_samples,
            sample_interval_us,
            channel_map,
            units: unit_slots,
            instrument_scales,
        })
    }

    /// Раскладывает значения по смещениям таблицы полей.
    pub fn build(&self) -> HeaderBuffer {
        let mut h = HeaderBuffer::new();

        h.put_scalar(&field::SIGNATURE, ABF_SIGNATURE);
        h.put_scalar(&field::FORMAT_VERSION, ABF_VERSION);
        h.put_scalar(&field::OPERATION_MODE, OPERATION_MODE_EPISODIC);
        h.put_scalar(&field::ACTUAL_ACQ_LENGTH, self.total_samples);
        h.put_scalar(&field::EPISODE_COUNT, 1);
        h.put_scalar(&field::DATA_SECTION_PTR, ABF_HEADER_BLOCKS as i32);
        h.put_scalar(&field::DATA_FORMAT, DATA_FORMAT_INT16);
        h.put_scalar(&field::CHANNEL_COUNT, self.channel_count);
        h.put_scalar(&field::SAMPLE_INTERVAL, self.sample_interval_us);
        h.put_scalar(&field::SAMPLES_PER_EPISODE, self.total_samples);
        h.put_scalar(&field::ADC_RANGE, ADC_RANGE);
        h.put_scalar(&field::ADC_RESOLUTION, ADC_RESOLUTION);

        for ch in 0..MAX_CHANNELS {
            h.put(&field::CHANNEL_MAP, ch, self.channel_map[ch]);
            h.put(&field::SAMPLING_SEQUENCE, ch, self.channel_map[ch]);
            h.put(&field::UNIT_LABELS, ch, *self.units[ch].as_bytes());
            h.put(&field::PROGRAMMABLE_GAIN, ch, 1.0);
            h.put(&field::INSTRUMENT_SCALE, ch, self.instrument_scales[ch]);
            h.put(&field::SIGNAL_GAIN, ch, 1.0);
        }

        h
    }

    /// Интервал между соседними отсчётами в потоке (мкс).
    pub fn sample_interval_us(&self) -> f32 {
        self.sample_interval_us
    }

    /// Множители инструмента по всем 16 слотам.
    pub fn instrument_scales(&self) -> &[f32; MAX_CHANNELS] {
        &self.instrument_scales
    }
}
