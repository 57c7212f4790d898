use thiserror::Error;

/// Результат для операций кодирования ABF.
pub type AbfResult<T> = std::result::Result<T, AbfError>;

/// Типы ошибок кодировщика ABF.
#[derive(Debug, Error)]
pub enum AbfError {
    /// Некорректная форма входных данных (ранг, пустые данные, число каналов)
    #[error("Shape error: {0}")]
    Shape(String),

    /// Амплитуда канала не помещается в 16 бит даже после 10 шагов ослабления
    #[error("Scale overflow on channel {channel}: max |sample| = {max_abs} cannot be represented")]
    ScaleOverflow { channel: usize, max_abs: f64 },

    /// Квантованное значение вышло за диапазон i16
    #[error("Quantization overflow on channel {channel}, sample {index}: {value} is out of i16 range")]
    Overflow {
        channel: usize,
        index: usize,
        value: f64,
    },

    /// Ошибки ввода/вывода (автоконвертируются из std::io::Error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Некорректные параметры кодирования (частота дискретизации и т.п.)
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl AbfError {
    /// Удобные конструкторы
    pub fn shape<S: Into<String>>(s: S) -> Self {
        Self::Shape(s.into())
    }

    pub fn invalid_config<S: Into<String>>(s: S) -> Self {
        Self::InvalidConfig(s.into())
    }

    /// Индекс канала, к которому относится ошибка (если есть).
    pub fn channel(&self) -> Option<usize> {
        match self {
            AbfError::ScaleOverflow { channel, .. } | AbfError::Overflow { channel, .. } => {
                Some(*channel)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let e = AbfError::ScaleOverflow {
            channel: 3,
            max_abs: 1e12,
        };
        let msg = e.to_string();
        assert!(msg.contains("channel 3"));
        assert!(msg.contains("1000000000000"));
        assert_eq!(e.channel(), Some(3));

        let e = AbfError::Overflow {
            channel: 1,
            index: 7,
            value: 40_000.0,
        };
        assert!(e.to_string().contains("sample 7"));
        assert_eq!(e.channel(), Some(1));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: AbfError = io.into();
        assert!(matches!(e, AbfError::Io(_)));
        assert!(e.to_string().starts_with("I/O error"));
        assert_eq!(e.channel(), None);
    }
}
