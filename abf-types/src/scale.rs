/// Масштаб квантования одного канала.
///
/// `value_scale` переводит физическое значение в отсчёт АЦП,
/// `instrument_scale` - степень десяти, которая пишется в заголовок
/// (fInstrumentScaleFactor), `step` - номер шага ослабления (1..=10).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelScale {
    pub value_scale: f64,
    pub instrument_scale: f64,
    pub step: u8,
}

impl ChannelScale {
    /// Квантование с усечением к нулю. Результат ещё не проверен на диапазон
    /// i16.
    pub fn quantize(
        &self,
        sample: f64,
    ) -> f64 {
        (sample * self.value_scale).trunc()
    }

    /// Обратное преобразование отсчёта АЦП в физическое значение.
    pub fn descale(
        &self,
        raw: i16,
    ) -> f64 {
        raw as f64 / self.value_scale
    }

    /// Шаг квантования в физических единицах.
    pub fn resolution(&self) -> f64 {
        1.0 / self.value_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_truncates_toward_zero() {
        let s = ChannelScale {
            value_scale: 327.68,
            instrument_scale: 0.1,
            step: 1,
        };
        assert_eq!(s.quantize(1.0), 327.0);
        assert_eq!(s.quantize(-1.0), -327.0);
        assert_eq!(s.quantize(0.001), 0.0);
        assert!((s.descale(327) - 0.99792).abs() < 1e-4);
        assert!((s.resolution() - 1.0 / 327.68).abs() < 1e-12);
    }
}
