use anyhow::Result;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;
use vehicle_validator::{validate_file, ErrorKind, ValidationError, REQUIRED_KEYS};

fn vehicle(id: Value) -> Value {
    json!({
        "id": id,
        "make": "Mercedes-Benz",
        "model": "G 63",
        "price": 12500000,
        "year": 2023,
        "mileage": 0,
        "image": "assets/images/g63.jpg",
        "tags": ["New", "Featured"],
        "type": "SUV",
        "specs": [
            {"label": "Engine", "value": "4.0L V8"},
            {"label": "Power", "value": "577 hp"}
        ]
    })
}

fn write_doc(dir: &TempDir, doc: &Value) -> Result<PathBuf> {
    let path = dir.path().join("vehicles.json");
    std::fs::write(&path, serde_json::to_vec_pretty(doc)?)?;
    Ok(path)
}

#[test]
fn test_valid_inventory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_doc(&temp_dir, &json!([vehicle(json!(1)), vehicle(json!(2))]))?;

    let summary = validate_file(&path)?;
    assert_eq!(summary.records, 2);
    assert_eq!(summary.spec_entries, 4);
    Ok(())
}

#[test]
fn test_extra_keys_and_null_values_are_allowed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut record = vehicle(json!(1));
    record["image"] = Value::Null;
    record["featured"] = json!(true);
    record["specs"] = json!([{"label": null, "value": 3, "unit": "l"}]);
    let path = write_doc(&temp_dir, &json!([record]))?;

    assert!(validate_file(&path).is_ok());
    Ok(())
}

#[test]
fn test_missing_file_kind() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.json");

    let err = validate_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
    assert_eq!(
        err.to_string(),
        format!("Error: File not found at {}", path.display())
    );
}

#[test]
fn test_scalar_roots_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for root in [json!(7), json!("vehicles"), json!({"id": 1})] {
        let path = write_doc(&temp_dir, &root)?;
        let err = validate_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRootType);
        assert!(err.kind().is_structural());
    }
    Ok(())
}

#[test]
fn test_first_bad_record_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut second = vehicle(json!(2));
    let second_obj = second.as_object_mut().unwrap();
    second_obj.remove("year");
    second_obj.remove("tags");
    let mut third = vehicle(json!(3));
    third.as_object_mut().unwrap().remove("id");
    let path = write_doc(&temp_dir, &json!([vehicle(json!(1)), second, third]))?;

    match validate_file(&path) {
        Err(ValidationError::MissingFields { index, keys }) => {
            assert_eq!(index, 1);
            assert_eq!(keys, vec!["year", "tags"]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_keys_listed_in_required_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_doc(&temp_dir, &json!([{}]))?;

    match validate_file(&path) {
        Err(ValidationError::MissingFields { index, keys }) => {
            assert_eq!(index, 0);
            assert_eq!(keys, REQUIRED_KEYS.to_vec());
        }
        other => panic!("unexpected result: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_string_id_in_specs_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut record = vehicle(json!("byd-seal-2024"));
    record["specs"] = json!({"label": "Range", "value": "570 km"});
    let path = write_doc(&temp_dir, &json!([record]))?;

    let err = validate_file(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Error: 'specs' must be a list for vehicle ID byd-seal-2024"
    );
    Ok(())
}

#[test]
fn test_spec_entry_missing_value() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut record = vehicle(json!(10));
    record["specs"] = json!([{"label": "Engine", "value": "V8"}, {"label": "Seats"}]);
    let path = write_doc(&temp_dir, &json!([vehicle(json!(9)), record]))?;

    let err = validate_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSpecEntry);
    assert_eq!(err.to_string(), "Error: Invalid spec format in vehicle ID 10");
    Ok(())
}

#[test]
fn test_file_left_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_doc(&temp_dir, &json!([{"id": 1}]))?;
    let before = std::fs::read(&path)?;

    let first = validate_file(&path).unwrap_err().to_string();
    let second = validate_file(&path).unwrap_err().to_string();

    assert_eq!(first, second);
    assert_eq!(std::fs::read(&path)?, before);
    Ok(())
}
