use byteorder::{ByteOrder, LittleEndian};

/// Значение, которое умеет записать себя в little-endian байты фиксированной
/// ширины.
pub trait WriteLe: Copy {
    /// Ширина поля в байтах.
    const WIDTH: usize;

    /// `dst.len()` всегда равна `WIDTH`.
    fn write_le(
        self,
        dst: &mut [u8],
    );
}

impl WriteLe for i16 {
    const WIDTH: usize = 2;

    fn write_le(
        self,
        dst: &mut [u8],
    ) {
        LittleEndian::write_i16(dst, self);
    }
}

impl WriteLe for i32 {
    const WIDTH: usize = 4;

    fn write_le(
        self,
        dst: &mut [u8],
    ) {
        LittleEndian::write_i32(dst, self);
    }
}

impl WriteLe for f32 {
    const WIDTH: usize = 4;

    fn write_le(
        self,
        dst: &mut [u8],
    ) {
        LittleEndian::write_f32(dst, self);
    }
}

// ASCII-поля фиксированной ширины пишутся как есть
impl<const N: usize> WriteLe for [u8; N] {
    const WIDTH: usize = N;

    fn write_le(
        self,
        dst: &mut [u8],
    ) {
        dst.copy_from_slice(&self);
    }
}

/// Записывает `val` по смещению `off`.
pub fn write_at<T: WriteLe>(
    buf: &mut [u8],
    off: usize,
    val: T,
) {
    val.write_le(&mut buf[off..off + T::WIDTH]);
}

/// Записывает отсчёты i16 подряд в little-endian. `dst.len()` должна быть
/// ровно `2 * samples.len()`.
pub fn write_i16_slice_le(
    dst: &mut [u8],
    samples: &[i16],
) {
    LittleEndian::write_i16_into(samples, dst);
}
