use std::path::{Path, PathBuf};

use abf_core::EncodedAbf;
use serde::Serialize;

/// Итог записи одного файла (для лога и вывода `--json`).
#[derive(Debug, Clone, Serialize)]
pub struct EncodeSummary {
    pub output: PathBuf,
    pub channels: usize,
    pub samples_per_channel: usize,
    pub data_blocks: usize,
    pub file_bytes: usize,
    pub scales: Vec<ChannelSummary>,
}

/// Масштаб и единицы одного канала.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelSummary {
    pub channel: usize,
    pub unit: String,
    pub step: u8,
    pub instrument_scale: f64,
    pub value_scale: f64,
}

impl EncodeSummary {
    pub fn new(
        output: &Path,
        encoded: &EncodedAbf,
    ) -> Self {
        let scales = encoded
            .scales()
            .iter()
            .zip(encoded.units())
            .enumerate()
            .map(|(channel, (scale, unit))| ChannelSummary {
                channel,
                unit: unit.to_string(),
                step: scale.step,
                instrument_scale: scale.instrument_scale,
                value_scale: scale.value_scale,
            })
            .collect();

        Self {
            output: output.to_path_buf(),
            channels: encoded.channel_count(),
            samples_per_channel: encoded.sample_count(),
            data_blocks: encoded.data_blocks(),
            file_bytes: encoded.bytes().len(),
            scales,
        }
    }
}

impl std::fmt::Display for EncodeSummary {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        writeln!(f, "  Output        : {:?}", self.output)?;
        writeln!(f, "  Channels      : {}", self.channels)?;
        writeln!(f, "  Samples/ch    : {}", self.samples_per_channel)?;
        writeln!(f, "  Data blocks   : {}", self.data_blocks)?;
        write!(f, "  File size     : {} bytes", self.file_bytes)?;

        for s in &self.scales {
            write!(
                f,
                "\n  ch{:<2} [{}]     : step {}, instrument factor {:e}",
                s.channel, s.unit, s.step, s.instrument_scale
            )?;
        }

        Ok(())
    }
}
