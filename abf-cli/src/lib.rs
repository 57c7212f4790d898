pub mod config;
pub mod error;
pub mod input;
pub mod summary;

pub use config::*;
pub use error::*;
pub use input::*;
pub use summary::*;

use abf_core::AbfWriter;

/// Читает входной JSON, кодирует и пишет файл. Блокируется до завершения
/// записи.
pub fn run(config: &CliConfig) -> CliResult<EncodeSummary> {
    let matrix = load_matrix(&config.input_path)?;
    let writer = AbfWriter::new(config.encoder_config());
    let encoded = writer.write(&config.output_path, &matrix, config.sample_rate_hz)?;

    Ok(EncodeSummary::new(&config.output_path, &encoded))
}
