use std::path::PathBuf;

use abf_cli::{parse_rate_hz, run, CliConfig};
use abf_core::InstrumentScaleMode;
use clap::Parser;
use log::{error, info, LevelFilter};

#[derive(Parser, Debug)]
#[command(
    name = "abf-write",
    version = env!("CARGO_PKG_VERSION"),
    about = "Encode multi-channel samples from a JSON file into an ABF1 file",
    long_about = None,
)]
struct Cli {
    /// JSON с данными: [x, ...] или [[ch0...], [ch1...], ...]
    #[arg(short, long)]
    input: PathBuf,
    /// Путь к выходному файлу
    #[arg(short, long, default_value = "recording.abf")]
    output: PathBuf,
    /// Частота дискретизации (10kHz, 20000)
    #[arg(short = 'r', long, default_value = "10kHz")]
    rate: String,
    /// Единицы измерения канала, по одному флагу на канал (по умолчанию mV)
    #[arg(short = 'u', long = "unit")]
    units: Vec<String>,
    /// Множители инструмента: per-channel, shared-last
    #[arg(long, default_value = "per-channel")]
    instrument_scale: String,
    /// Вывести итог в JSON на stdout
    #[arg(long)]
    json: bool,
    /// Тихий режим (только ошибки)
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    let level = if cli.quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_secs()
        .init();

    let sample_rate_hz = match parse_rate_hz(&cli.rate) {
        Ok(r) => r,
        Err(e) => {
            error!("--rate: {e}");
            std::process::exit(1);
        }
    };

    let instrument_scale: InstrumentScaleMode = match cli.instrument_scale.parse() {
        Ok(m) => m,
        Err(e) => {
            error!("--instrument-scale: {e}");
            std::process::exit(1);
        }
    };

    let config = CliConfig {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
        sample_rate_hz,
        units: cli.units.clone(),
        instrument_scale,
    };

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Input         : {:?}", config.input_path);
    info!("  Sample rate   : {:.3} kHz", sample_rate_hz / 1e3);
    info!("  Scale mode    : {instrument_scale}");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let summary = match run(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Encoding failed: {e}");
            std::process::exit(1);
        }
    };

    info!("\n{summary}");

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                error!("Failed to serialize summary: {e}");
                std::process::exit(1);
            }
        }
    }

    info!("✓ Written: {:?}", cli.output);
}
