use log::warn;

/// Ширина поля единиц измерения в заголовке (байт).
pub const UNIT_LABEL_LEN: usize = 8;

/// Единицы измерения по умолчанию.
pub const DEFAULT_UNIT: &str = "mV";

/// Метка единиц измерения канала: 8 байт ASCII, дополненные пробелами.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitLabel([u8; UNIT_LABEL_LEN]);

impl UnitLabel {
    /// Строит метку из произвольной строки.
    ///
    /// Не-ASCII символы заменяются на `?`, длинные строки обрезаются до 8
    /// байт, короткие дополняются пробелами.
    pub fn new(unit: &str) -> Self {
        let mut buf = [b' '; UNIT_LABEL_LEN];
        let ascii: Vec<u8> = unit
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
            .collect();

        if ascii.len() > UNIT_LABEL_LEN {
            warn!("Unit label '{unit}' truncated to {UNIT_LABEL_LEN} bytes");
        }

        let n = ascii.len().min(UNIT_LABEL_LEN);
        buf[..n].copy_from_slice(&ascii[..n]);

        Self(buf)
    }

    /// Сырые байты в том виде, в каком они попадают в заголовок.
    pub fn as_bytes(&self) -> &[u8; UNIT_LABEL_LEN] {
        &self.0
    }

    /// Метка как строка (с завершающими пробелами).
    pub fn as_str(&self) -> &str {
        // всегда ASCII
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Метка без завершающих пробелов.
    pub fn trimmed(&self) -> &str {
        self.as_str().trim_end_matches(' ')
    }
}

impl Default for UnitLabel {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT)
    }
}

impl std::fmt::Display for UnitLabel {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.trimmed())
    }
}

impl From<&str> for UnitLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
