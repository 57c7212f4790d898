use abf_types::ChannelMatrix;

/// Переводит данные из channel-major в sample-major порядок.
///
/// `out[i * channel_count + ch] = matrix[ch][i]` - так отсчёты лежат в
/// секции данных многоканального episodic файла.
pub fn interleave(matrix: &ChannelMatrix) -> Vec<f64> {
    let channel_count = matrix.channel_count();
    let mut out = vec![0.0; matrix.total_samples()];

    for (ch, samples) in matrix.channels().enumerate() {
        for (i, &x) in samples.iter().enumerate() {
            out[i * channel_count + ch] = x;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_channel_unchanged() {
        let m = ChannelMatrix::from_samples(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(interleave(&m), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_round_robin_order() {
        let m = ChannelMatrix::from_channels(vec![
            vec![0.0, 1.0, 2.0],
            vec![10.0, 11.0, 12.0],
            vec![20.0, 21.0, 22.0],
        ])
        .unwrap();

        assert_eq!(
            interleave(&m),
            vec![0.0, 10.0, 20.0, 1.0, 11.0, 21.0, 2.0, 12.0, 22.0]
        );
    }

    #[test]
    fn test_position_law() {
        let channels: Vec<Vec<f64>> = (0..5)
            .map(|ch| (0..7).map(|i| (ch * 100 + i) as f64).collect())
            .collect();
        let m = ChannelMatrix::from_channels(channels).unwrap();
        let flat = interleave(&m);

        for ch in 0..5 {
            for i in 0..7 {
                assert_eq!(flat[i * 5 + ch], (ch * 100 + i) as f64);
            }
        }
    }
}
