use std::{
    io::Write,
    path::{Path, PathBuf},
};

use abf_types::{AbfError, AbfResult};
use log::debug;
use tempfile::NamedTempFile;

use crate::{
    binary::write_i16_slice_le,
    format::{data_blocks, file_size, ABF_DATA_OFFSET, ABF_HEADER_SIZE, BYTES_PER_SAMPLE},
    header::HeaderBuffer,
};

/// Собирает образ файла: заголовок + данные, дополненные нулями до границы
/// блока.
pub fn assemble(
    header: &HeaderBuffer,
    samples: &[i16],
) -> Vec<u8> {
    let mut buf = vec![0u8; file_size(samples.len())];

    buf[..ABF_HEADER_SIZE].copy_from_slice(header.as_bytes());

    let data_end = ABF_DATA_OFFSET + samples.len() * BYTES_PER_SAMPLE;
    write_i16_slice_le(&mut buf[ABF_DATA_OFFSET..data_end], samples);

    debug!(
        "assembled {} bytes: {} data blocks, {} samples",
        buf.len(),
        data_blocks(samples.len()),
        samples.len()
    );

    buf
}

/// Атомарно записывает `bytes` в `path`.
///
/// Данные пишутся во временный файл в том же каталоге, синхронизируются и
/// переименовываются поверх `path`. При ошибке временный файл удаляется, а
/// `path` остаётся нетронутым.
pub fn persist_atomic(
    path: &Path,
    bytes: &[u8],
) -> AbfResult<()> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(&dir)?;

    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| AbfError::Io(e.error))?;

    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::format::ABF_BLOCK_SIZE;

    #[test]
    fn test_assemble_layout() {
        let mut header = HeaderBuffer::new();
        header.put_scalar(&crate::format::field::SIGNATURE, *b"ABF ");

        let buf = assemble(&header, &[1, -1, 256]);

        assert_eq!(buf.len(), 5 * ABF_BLOCK_SIZE);
        assert_eq!(&buf[0..4], b"ABF ");
        assert_eq!(&buf[2048..2054], &[0x01, 0x00, 0xFF, 0xFF, 0x00, 0x01]);
        assert!(buf[2054..].iter().all(|&b| b == 0), "хвост блока - нули");
    }

    #[test]
    fn test_assemble_exact_block_gets_extra_block() {
        let buf = assemble(&HeaderBuffer::new(), &[7; 256]);
        assert_eq!(buf.len(), (4 + 2) * ABF_BLOCK_SIZE);
    }

    #[test]
    fn test_persist_atomic_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.abf");

        persist_atomic(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");

        // перезапись существующего файла
        persist_atomic(&path, b"world!").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"world!");

        // временных файлов не осталось
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_persist_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.abf");

        let err = persist_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, AbfError::Io(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_persist_failed_rename_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("occupied");
        std::fs::create_dir(&path).unwrap();

        // временный файл создаётся, падает только переименование
        let err = persist_atomic(&path, b"data").unwrap_err();
        assert!(matches!(err, AbfError::Io(_)));

        assert!(path.is_dir());
        assert_eq!(std::fs::read_dir(&path).unwrap().count(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_parent_dir_of_bare_file_name() {
        assert_eq!(parent_dir(Path::new("out.abf")), PathBuf::from("."));
        assert_eq!(parent_dir(Path::new("a/out.abf")), PathBuf::from("a"));
    }
}
