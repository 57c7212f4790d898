//! Библиотека кодирования ABF1
//!
//! Эталонная реализация записи многоканальных записей в формат ABF1
//! (episodic, 16-битные целые отсчёты), который читают сторонние программы
//! анализа электрофизиологии.
//!
//! Конвейер: подбор масштаба по каналам -> заголовок -> чередование каналов
//! -> квантование в i16 -> сборка образа файла и атомарная запись.
//!
//! # Быстрый старт
//!
//! ```no_run
//! use abf_core::{write_abf, AbfWriter, EncoderConfig};
//! use abf_types::ChannelMatrix;
//!
//! let data = ChannelMatrix::from_channels(vec![
//!     vec![0.0, 1.5, -2.25, 3.0],
//!     vec![10.0, -20.0, 30.0, -40.0],
//! ])?;
//!
//! write_abf("recording.abf", &data, 10_000.0, Some(&["mV", "pA"]))?;
//!
//! let writer = AbfWriter::new(EncoderConfig::default());
//! let encoded = writer.encode(&data, 10_000.0)?;
//! assert_eq!(encoded.channel_count(), 2);
//! # Ok::<(), abf_types::AbfError>(())
//! ```

pub mod assembler;
pub mod binary;
pub mod config;
pub mod format;
pub mod header;
pub mod interleave;
pub mod quantize;
pub mod scale;
pub mod writer;

pub use abf_types::{AbfError, AbfResult, ChannelMatrix, ChannelScale, UnitLabel};
pub use assembler::*;
pub use config::*;
pub use format::*;
pub use header::*;
pub use interleave::*;
pub use quantize::*;
pub use scale::*;
pub use writer::*;

/// Версия библиотеки.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
