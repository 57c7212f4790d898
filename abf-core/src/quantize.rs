use abf_types::{AbfError, AbfResult, ChannelScale};

/// Квантует чередующийся поток в i16.
///
/// Канал позиции `p` равен `p % scales.len()`. Значение умножается на масштаб
/// своего канала и усекается к нулю. Выход за диапазон i16 - ошибка, а не
/// насыщение.
pub fn quantize(
    interleaved: &[f64],
    scales: &[ChannelScale],
) -> AbfResult<Vec<i16>> {
    let channel_count = scales.len();

    if channel_count == 0 {
        return Err(AbfError::shape("no channel scales supplied"));
    }

    interleaved
        .iter()
        .enumerate()
        .map(|(p, &x)| {
            let ch = p % channel_count;
            let value = scales[ch].quantize(x);

            if (i16::MIN as f64..=i16::MAX as f64).contains(&value) {
                Ok(value as i16)
            } else {
                Err(AbfError::Overflow {
                    channel: ch,
                    index: p / channel_count,
                    value,
                })
            }
        })
        .collect()
}
