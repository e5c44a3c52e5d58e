use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn prodcat(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prodcat").unwrap();
    cmd.env("PRODCAT_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("PRODCAT_LOG");
    cmd
}

fn add_mouse(home: &Path) {
    prodcat(home)
        .args([
            "add",
            "--name",
            "Mouse Wireless",
            "--price",
            "99000",
            "--category",
            "elektronik",
            "--release-date",
            "2024-01-01",
            "--stock",
            "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added."))
        .stdout(predicate::str::contains("Mouse Wireless"));
}

#[test]
fn test_list_shows_seed_products() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop Gaming"))
        .stdout(predicate::str::contains("Kaos Polos"))
        .stdout(predicate::str::contains("Rp 15.000.000"));

    // Reading alone never creates the storage file.
    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn test_list_survives_undecodable_storage_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("products.json"), b"\xff\xfe[]").unwrap();

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop Gaming"));
}

#[test]
fn test_bare_invocation_lists() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop Gaming"));
}

#[test]
fn test_add_puts_product_first() {
    let temp = TempDir::new().unwrap();
    add_mouse(temp.path());

    let output = prodcat(temp.path()).arg("ls").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let mouse = stdout.find("Mouse Wireless").unwrap();
    let laptop = stdout.find("Laptop Gaming").unwrap();
    assert!(mouse < laptop, "new product should be listed first:\n{}", stdout);
    assert!(temp.path().join("products.json").exists());
}

#[test]
fn test_add_duplicate_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args([
            "add",
            "--name",
            "  laptop gaming ",
            "--price",
            "10",
            "--category",
            "Elektronik",
            "--release-date",
            "2024-01-01",
            "--stock",
            "1",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "A product with this name already exists.",
        ))
        .stderr(predicate::str::contains("Error:"));

    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn test_add_reports_every_bad_field() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["add", "--price", "-5", "--stock", "1.5", "--category", "Mainan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product name is required."))
        .stderr(predicate::str::contains("Price must be a number greater than 0."))
        .stderr(predicate::str::contains(
            "Stock must be a whole number of at least 0.",
        ))
        .stderr(predicate::str::contains("Category must be one of:"))
        .stderr(predicate::str::contains("Release date is required."));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["edit", "1", "--stock", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product updated."));

    prodcat(temp.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stock:        5"))
        .stdout(predicate::str::contains("Laptop Gaming"))
        .stdout(predicate::str::contains("Rp 15.000.000"));
}

#[test]
fn test_edit_can_deactivate() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["e", "2", "--inactive"])
        .assert()
        .success();

    prodcat(temp.path())
        .args(["v", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status:       Inactive"));
}

#[test]
fn test_edit_without_changes_does_nothing() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["edit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to change."));
    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn test_edit_unknown_id_is_a_silent_no_op() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path())
        .args(["edit", "999", "--stock", "1"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn test_show_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path())
        .args(["show", "42"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_delete_with_yes() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted."));

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kaos Polos").not());
}

#[test]
fn test_delete_prompt_requires_capital_y() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["rm", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    prodcat(temp.path())
        .args(["rm", "1"])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Product deleted."));

    prodcat(temp.path())
        .arg("list")
        .assert()
        .stdout(predicate::str::contains("Laptop Gaming").not());
}

#[test]
fn test_delete_unknown_id_is_a_no_op() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["delete", "999", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
    assert!(!temp.path().join("products.json").exists());
}

#[test]
fn test_categories() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("Elektronik\nPakaian\nMakanan\nMinuman\nLainnya\n");
}

#[test]
fn test_path_points_at_storage_file() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("products.json\n"));
}

#[test]
fn test_config_set_and_get() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["config", "preview-chars", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("preview-chars set to 12"));

    prodcat(temp.path())
        .args(["config", "preview-chars"])
        .assert()
        .success()
        .stdout("12\n");

    prodcat(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Laptop denga…"));
}

#[test]
fn test_config_storage_key_switches_slot() {
    let temp = TempDir::new().unwrap();

    prodcat(temp.path())
        .args(["config", "storage-key", "shop"])
        .assert()
        .success();

    prodcat(temp.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("shop.json\n"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    prodcat(temp.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}
