use abf_types::{AbfError, AbfResult, ChannelMatrix, ChannelScale};
use log::debug;

use crate::format::{ADC_RANGE, ADC_RESOLUTION, MAX_ATTENUATION_STEPS, SAMPLE_LIMIT};

/// Подбирает масштаб квантования для одного канала.
///
/// Перебирает множитель инструмента 10^-1 .. 10^-10 и берёт первый (самый
/// мелкий шаг квантования), при котором `max |sample| * scale <= 32767`.
/// Множитель получается последовательным делением на 10, как в исходном
/// инструменте, чтобы значения в заголовке совпадали побитово.
pub fn select_scale(
    channel: usize,
    samples: &[f64],
) -> AbfResult<ChannelScale> {
    let mut max_abs = 0.0_f64;

    for &s in samples {
        if !s.is_finite() {
            return Err(AbfError::ScaleOverflow {
                channel,
                max_abs: s.abs(),
            });
        }
        max_abs = max_abs.max(s.abs());
    }

    let mut instrument_scale = 1.0_f64;

    for step in 1..=MAX_ATTENUATION_STEPS {
        instrument_scale /= 10.0;

        let value_scale = ADC_RESOLUTION as f64 / ADC_RANGE as f64 * instrument_scale;
        let max_deviation = SAMPLE_LIMIT as f64 / value_scale;

        if max_deviation >= max_abs {
            debug!(
                "channel {channel}: max |x| = {max_abs}, step {step}, scale {value_scale}, \
                 instrument factor {instrument_scale:e}"
            );

            return Ok(ChannelScale {
                value_scale,
                instrument_scale,
                step,
            });
        }
    }

    Err(AbfError::ScaleOverflow { channel, max_abs })
}

/// Масштабы для всех каналов матрицы, по одному на канал.
pub fn select_scales(matrix: &ChannelMatrix) -> AbfResult<Vec<ChannelScale>> {
    matrix
        .channels()
        .enumerate()
        .map(|(ch, samples)| select_scale(ch, samples))
        .collect()
}
