use std::{fs::File, io::BufReader, path::Path};

use abf_types::{AbfError, ChannelMatrix};
use log::debug;
use serde_json::Value;

use crate::{CliError, CliResult};

/// Читает матрицу каналов из JSON файла.
///
/// Массив чисел - один канал, массив массивов - каналы построчно.
pub fn load_matrix(path: &Path) -> CliResult<ChannelMatrix> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;

    matrix_from_json(&value)
}

/// Превращает вложенные JSON массивы в матрицу.
///
/// Форма берётся по первым элементам на каждом уровне вложенности. Ранг выше
/// двух отклоняется до разбора значений, остальное проверяет
/// [`ChannelMatrix::from_shape`].
pub fn matrix_from_json(value: &Value) -> CliResult<ChannelMatrix> {
    let shape = infer_shape(value);

    if shape.len() > 2 {
        return Err(AbfError::shape(format!(
            "input has rank {}, expected 1 or 2",
            shape.len()
        ))
        .into());
    }

    // ёмкость не резервируется: форма ещё не проверена на рваные массивы
    let mut data = Vec::new();

    flatten(value, &shape, &mut data)?;

    debug!("input shape {shape:?}, {} values", data.len());

    Ok(ChannelMatrix::from_shape(&shape, data)?)
}

fn infer_shape(value: &Value) -> Vec<usize> {
    let mut shape = Vec::new();
    let mut cur = value;

    while let Value::Array(items) = cur {
        shape.push(items.len());
        match items.first() {
            Some(first) => cur = first,
            None => break,
        }
    }

    shape
}

fn flatten(
    value: &Value,
    shape: &[usize],
    out: &mut Vec<f64>,
) -> CliResult<()> {
    match (value, shape.split_first()) {
        (Value::Array(items), Some((&len, rest))) => {
            if items.len() != len {
                return Err(CliError::Input(format!(
                    "ragged array: expected {len} elements, found {}",
                    items.len()
                )));
            }
            items.iter().try_for_each(|item| flatten(item, rest, out))
        }
        (Value::Number(n), None) => {
            let x = n
                .as_f64()
                .ok_or_else(|| CliError::Input(format!("{n} is not representable as f64")))?;
            out.push(x);
            Ok(())
        }
        (Value::Array(_), None) => Err(CliError::Input("ragged array: unexpected nesting".into())),
        (other, _) => Err(CliError::Input(format!("expected a number or array, found {other}"))),
    }
}
