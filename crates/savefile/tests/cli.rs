use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

// Keep every invocation away from the real default directory
fn savefile(home: &std::path::Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("savefile")?;
    cmd.env("SAVEFILE_DIR", home.join("default"));
    Ok(cmd)
}

#[test]
fn test_formats_lists_extensions() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    savefile(temp_dir.path())?
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains(".csv"))
        .stdout(predicate::str::contains(".npy"))
        .stdout(predicate::str::contains(".svg"));

    Ok(())
}

#[test]
fn test_save_text_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let out = temp_dir.path().join("out");

    savefile(temp_dir.path())?
        .args(["save", "note.txt", "--dir"])
        .arg(&out)
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("note.txt"));

    assert_eq!(std::fs::read_to_string(out.join("note.txt"))?, "hello");

    Ok(())
}

#[test]
fn test_save_json_zipped_then_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    savefile(temp_dir.path())?
        .args(["save", "data", "--as", "json", "--zip"])
        .write_stdin("[1, 2, 3]")
        .assert()
        .success()
        .stdout(predicate::str::contains("data.json.zip"));

    savefile(temp_dir.path())?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::eq("data.json.zip\n"));

    Ok(())
}

#[test]
fn test_save_csv_from_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let input = temp_dir.path().join("input.csv");
    std::fs::write(&input, "A,B\n1,3\n2,4\n")?;

    savefile(temp_dir.path())?
        .args(["save", "frame.pkl", "--as", "csv", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("frame.pkl"));

    assert!(temp_dir.path().join("default").join("frame.pkl").is_file());

    Ok(())
}

#[test]
fn test_incompatible_extension_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    savefile(temp_dir.path())?
        .args(["save", "note.csv"])
        .write_stdin("plain text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'.csv'"))
        .stderr(predicate::str::contains(".txt"));

    assert!(!temp_dir.path().join("default").join("note.csv").exists());

    Ok(())
}

#[test]
fn test_delete_reports_both_outcomes() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;

    savefile(temp_dir.path())?
        .args(["delete", "missing.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File 'missing.txt' does not exist in"));

    savefile(temp_dir.path())?
        .args(["save", "present.txt"])
        .write_stdin("x")
        .assert()
        .success();

    savefile(temp_dir.path())?
        .args(["delete", "present.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File 'present.txt' has been deleted from"));

    Ok(())
}

#[test]
fn test_config_file_sets_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = tempdir()?;
    let configured = temp_dir.path().join("configured");
    let config = temp_dir.path().join("savefile.json");
    std::fs::write(
        &config,
        format!("{{\"base_dir\": {}}}", serde_json::to_string(&configured)?),
    )?;

    let mut cmd = Command::cargo_bin("savefile")?;
    cmd.env_remove("SAVEFILE_DIR")
        .arg("--config")
        .arg(&config)
        .args(["save", "cfg.txt"])
        .write_stdin("configured")
        .assert()
        .success();

    assert!(configured.join("cfg.txt").is_file());

    Ok(())
}
