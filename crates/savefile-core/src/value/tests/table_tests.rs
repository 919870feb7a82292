use crate::kernel::error::{Error, Result};
use crate::storage::error::StorageSystemError;
use crate::value::{Cell, Table};

fn is_invalid_table(err: &Error) -> bool {
    matches!(err, Error::StorageSystem(StorageSystemError::InvalidTable { .. }))
}

#[test]
fn test_build_table_keeps_column_order() -> Result<()> {
    let table = Table::new()
        .with_column("B", [3, 4])?
        .with_column("A", [1, 2])?;

    assert_eq!(table.column_names(), vec!["B", "A"]);
    assert_eq!(table.n_cols(), 2);
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.column("A"), Some(&[Cell::Int(1), Cell::Int(2)][..]));
    assert_eq!(table.row(1), Some(vec![&Cell::Int(4), &Cell::Int(2)]));
    assert_eq!(table.row(2), None);

    Ok(())
}

#[test]
fn test_ragged_column_rejected() -> Result<()> {
    let table = Table::new().with_column("A", [1, 2])?;
    let err = table.with_column("B", [1]).unwrap_err();
    assert!(is_invalid_table(&err), "unexpected error: {:?}", err);
    Ok(())
}

#[test]
fn test_duplicate_column_rejected() -> Result<()> {
    let mut table = Table::new().with_column("A", [1])?;
    let err = table.push_column("A", [2]).unwrap_err();
    assert!(is_invalid_table(&err), "unexpected error: {:?}", err);
    assert_eq!(table.n_cols(), 1);
    Ok(())
}

#[test]
fn test_validate_catches_decoded_ragged_table() {
    let ragged: Table = serde_json::from_str(
        r#"{"columns":[{"name":"A","values":[1,2]},{"name":"B","values":[1]}]}"#,
    )
    .expect("structure parses");
    let err = ragged.validate().unwrap_err();
    assert!(is_invalid_table(&err));
}

#[test]
fn test_empty_table() {
    let table = Table::new();
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 0);
    assert!(table.validate().is_ok());
}

#[test]
fn test_cell_field_rendering() {
    assert_eq!(Cell::Null.to_field(), "");
    assert_eq!(Cell::Bool(true).to_field(), "True");
    assert_eq!(Cell::Bool(false).to_field(), "False");
    assert_eq!(Cell::Int(-7).to_field(), "-7");
    assert_eq!(Cell::Float(3.0).to_field(), "3.0");
    assert_eq!(Cell::Float(2.5).to_field(), "2.5");
    assert_eq!(Cell::Text("a b".into()).to_field(), "a b");
}

#[test]
fn test_cell_inference() {
    assert_eq!(Cell::infer(""), Cell::Null);
    assert_eq!(Cell::infer("True"), Cell::Bool(true));
    assert_eq!(Cell::infer("false"), Cell::Bool(false));
    assert_eq!(Cell::infer("42"), Cell::Int(42));
    assert_eq!(Cell::infer("-3"), Cell::Int(-3));
    assert_eq!(Cell::infer("3.0"), Cell::Float(3.0));
    assert_eq!(Cell::infer("1e3"), Cell::Float(1000.0));
    assert_eq!(Cell::infer("abc"), Cell::Text("abc".into()));
}

#[test]
fn test_cell_conversions() {
    assert_eq!(Cell::from(Some(5)), Cell::Int(5));
    assert_eq!(Cell::from(None::<i64>), Cell::Null);
    assert_eq!(Cell::from("x"), Cell::Text("x".into()));
    assert_eq!(Cell::from(1.5), Cell::Float(1.5));
    assert_eq!(Cell::from(true), Cell::Bool(true));
}
