//! Table encoders: delimited text (header row, no index column) and pickle.
use crate::codec::pickle;
use crate::kernel::error::Result;
use crate::storage::error::StorageSystemError;
use crate::value::{Cell, Table};

const CSV: &str = "csv";

/// Write the table as CSV: one header row of column names, then one record
/// per row, columns in table order.
pub fn encode_csv(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // A table without columns is an empty file
    if table.n_cols() > 0 {
        writer
            .write_record(table.column_names())
            .map_err(|e| StorageSystemError::serialization(CSV, e))?;
        for index in 0..table.n_rows() {
            let record = table
                .columns()
                .iter()
                .map(|column| column.values()[index].to_field());
            writer
                .write_record(record)
                .map_err(|e| StorageSystemError::serialization(CSV, e))?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| StorageSystemError::serialization(CSV, e.to_string()).into())
}

/// Parse CSV written by [`encode_csv`] (or any headed CSV). Cell types are
/// inferred per field.
pub fn decode_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader
        .headers()
        .map_err(|e| StorageSystemError::deserialization(CSV, e))?
        .clone();

    let mut columns: Vec<Vec<Cell>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| StorageSystemError::deserialization(CSV, e))?;
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.push(Cell::infer(field));
        }
    }

    let mut table = Table::new();
    for (name, values) in headers.iter().zip(columns) {
        table.push_column(name, values)?;
    }
    Ok(table)
}

pub fn encode_pickle(table: &Table) -> Result<Vec<u8>> {
    pickle::encode(table)
}

pub fn decode_pickle(bytes: &[u8]) -> Result<Table> {
    let table: Table = pickle::decode(bytes)?;
    table.validate()?;
    Ok(table)
}
