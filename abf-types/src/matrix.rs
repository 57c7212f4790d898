use crate::{AbfError, AbfResult};

/// Максимальное число каналов в файле ABF1.
pub const MAX_CHANNELS: usize = 16;

/// Многоканальные данные в порядке channel-major (строка = канал).
///
/// Инварианты: 1..=16 каналов, у всех каналов одинаковое ненулевое число
/// выборок. Проверяются при создании, дальше матрица неизменяема.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMatrix {
    channels: Vec<Vec<f64>>,
}

impl ChannelMatrix {
    /// Одномерные данные: один канал из `samples.len()` выборок.
    pub fn from_samples(samples: Vec<f64>) -> AbfResult<Self> {
        Self::from_channels(vec![samples])
    }

    /// Двумерные данные формы (C, N), каждая строка - отдельный канал.
    pub fn from_channels(channels: Vec<Vec<f64>>) -> AbfResult<Self> {
        if channels.is_empty() {
            return Err(AbfError::shape("no channels in input"));
        }

        if channels.len() > MAX_CHANNELS {
            return Err(AbfError::shape(format!(
                "{} channels exceed the ABF1 limit of {MAX_CHANNELS}",
                channels.len()
            )));
        }

        let sample_count = channels[0].len();

        if let Some((ch, row)) = channels
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != sample_count)
        {
            return Err(AbfError::shape(format!(
                "channel {ch} has {} samples, channel 0 has {sample_count}",
                row.len()
            )));
        }

        if sample_count == 0 {
            return Err(AbfError::shape("sample count is zero"));
        }

        Ok(Self { channels })
    }

    /// Данные произвольного ранга: плоский буфер в порядке row-major + форма.
    ///
    /// Допускаются только ранги 1 и 2, как у [`from_samples`] и
    /// [`from_channels`].
    ///
    /// [`from_samples`]: ChannelMatrix::from_samples
    /// [`from_channels`]: ChannelMatrix::from_channels
    pub fn from_shape(
        shape: &[usize],
        data: Vec<f64>,
    ) -> AbfResult<Self> {
        match shape {
            &[n] => {
                if data.len() != n {
                    return Err(AbfError::shape(format!(
                        "shape ({n},) does not match {} values",
                        data.len()
                    )));
                }
                Self::from_samples(data)
            }
            &[c, n] => {
                let expected = c
                    .checked_mul(n)
                    .ok_or_else(|| AbfError::shape(format!("shape ({c}, {n}) is too large")))?;

                if data.len() != expected {
                    return Err(AbfError::shape(format!(
                        "shape ({c}, {n}) does not match {} values",
                        data.len()
                    )));
                }

                if n == 0 {
                    return Err(AbfError::shape("sample count is zero"));
                }

                Self::from_channels(data.chunks(n).map(<[f64]>::to_vec).collect())
            }
            _ => Err(AbfError::shape(format!(
                "expected 1-D or 2-D input, got rank {}",
                shape.len()
            ))),
        }
    }

    /// Количество каналов.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Количество выборок в каждом канале.
    pub fn sample_count(&self) -> usize {
        self.channels[0].len()
    }

    /// Общее число выборок по всем каналам.
    pub fn total_samples(&self) -> usize {
        self.channel_count() * self.sample_count()
    }

    /// Выборки канала `ch`.
    pub fn channel(
        &self,
        ch: usize,
    ) -> Option<&[f64]> {
        self.channels.get(ch).map(Vec::as_slice)
    }

    /// Итератор по каналам в исходном порядке.
    pub fn channels(&self) -> impl ExactSizeIterator<Item = &[f64]> {
        self.channels.iter().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_dimensional_is_single_channel() {
        let m = ChannelMatrix::from_samples(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.channel_count(), 1);
        assert_eq!(m.sample_count(), 3);
        assert_eq!(m.total_samples(), 3);
        assert_eq!(m.channel(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert!(m.channel(1).is_none());
    }

    #[test]
    fn test_rank_one_equals_single_row() {
        let a = ChannelMatrix::from_samples(vec![0.5, -0.5, 4.0]).unwrap();
        let b = ChannelMatrix::from_channels(vec![vec![0.5, -0.5, 4.0]]).unwrap();
        let c = ChannelMatrix::from_shape(&[1, 3], vec![0.5, -0.5, 4.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_from_shape_row_major() {
        let m = ChannelMatrix::from_shape(&[2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.channel_count(), 2);
        assert_eq!(m.channel(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(m.channel(1).unwrap(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_rank_above_two_rejected() {
        let err = ChannelMatrix::from_shape(&[2, 2, 2], vec![0.0; 8]).unwrap_err();
        assert!(matches!(err, AbfError::Shape(_)));
        assert!(err.to_string().contains("rank 3"));

        let err = ChannelMatrix::from_shape(&[], vec![1.0]).unwrap_err();
        assert!(matches!(err, AbfError::Shape(_)));
    }

    #[test]
    fn test_shape_length_mismatch() {
        assert!(ChannelMatrix::from_shape(&[4], vec![0.0; 3]).is_err());
        assert!(ChannelMatrix::from_shape(&[2, 3], vec![0.0; 5]).is_err());
        assert!(ChannelMatrix::from_shape(&[usize::MAX, 2], vec![]).is_err());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            ChannelMatrix::from_samples(vec![]),
            Err(AbfError::Shape(_))
        ));
        assert!(matches!(
            ChannelMatrix::from_channels(vec![]),
            Err(AbfError::Shape(_))
        ));
        assert!(matches!(
            ChannelMatrix::from_channels(vec![vec![], vec![]]),
            Err(AbfError::Shape(_))
        ));
        assert!(matches!(
            ChannelMatrix::from_shape(&[2, 0], vec![]),
            Err(AbfError::Shape(_))
        ));
    }

    #[test]
    fn test_channel_limit() {
        let ok = ChannelMatrix::from_channels(vec![vec![0.0]; MAX_CHANNELS]).unwrap();
        assert_eq!(ok.channel_count(), 16);

        let err = ChannelMatrix::from_channels(vec![vec![0.0]; MAX_CHANNELS + 1]).unwrap_err();
        assert!(err.to_string().contains("17 channels"));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ChannelMatrix::from_channels(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(err.to_string().contains("channel 1"));
    }
}
