//! Пример: запись ABF1-файла с синтетическими данными
//!
//! Демонстрирует:
//! - сборку двухканальной матрицы
//! - независимый подбор масштаба для каналов с разной амплитудой
//! - атомарную запись через AbfWriter

use abf_core::{AbfWriter, EncoderConfig};
use abf_types::ChannelMatrix;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = std::env::temp_dir().join("abf_example.abf");
    let sample_rate_hz = 20_000.0;
    let samples = 20_000;

    // --- Канал 0: потенциал (мВ), канал 1: ток (пА) ---
    let voltage: Vec<f64> = (0..samples)
        .map(|i| {
            let t = i as f64 / sample_rate_hz;
            -70.0 + 5.0 * (2.0 * std::f64::consts::PI * 10.0 * t).sin()
        })
        .collect();
    let current: Vec<f64> = (0..samples)
        .map(|i| {
            let t = i as f64 / sample_rate_hz;
            1_500.0 * (2.0 * std::f64::consts::PI * 50.0 * t).cos()
        })
        .collect();

    let matrix = ChannelMatrix::from_channels(vec![voltage, current])?;

    let writer = AbfWriter::new(EncoderConfig::with_units(["mV", "pA"]));
    let encoded = writer.write(&output_path, &matrix, sample_rate_hz)?;

    println!("✓ Записано: {}", output_path.display());
    println!("  Channels : {}", encoded.channel_count());
    println!("  Samples  : {}", encoded.sample_count());
    println!("  Bytes    : {}", encoded.bytes().len());
    for (ch, s) in encoded.scales().iter().enumerate() {
        println!("  ch{ch}      : step {}, factor {:e}", s.step, s.instrument_scale);
    }

    Ok(())
}
