use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn store() -> TempDir {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("passwords")).unwrap();
    dir
}

fn entry_path(dir: &Path, name: &str) -> PathBuf {
    dir.join("passwords").join(format!("{}.age", name))
}

fn put(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(entry_path(dir, name), bytes).unwrap();
}

fn pa(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pa").unwrap();
    cmd.env("PA_DIR", dir).env_remove("PA_LOG").env_remove("PA_ALIGN");
    cmd
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("pa")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("rename"))
        .stdout(predicate::str::contains("--length"));
}

#[test]
fn config_shows_paths() {
    let dir = store();
    pa(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().join("passwords").display().to_string()))
        .stdout(predicate::str::contains("Password length:   50"));
}

#[test]
fn list_shows_entries_and_skips_key_files() {
    let dir = store();
    put(dir.path(), "github.com:octocat", b"x");
    put(dir.path(), "acme.com:alice", b"x");
    fs::write(dir.path().join("passwords").join("identities"), b"key").unwrap();
    fs::write(dir.path().join("passwords").join("stray.txt"), b"x").unwrap();

    pa(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("acme.com     alice\ngithub.com   octocat\n");
}

#[test]
fn list_empty_store() {
    let dir = tempdir().unwrap();
    pa(dir.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
    assert!(dir.path().join("passwords").is_dir());
}

#[test]
fn add_rejects_whitespace_identifier() {
    let dir = store();
    pa(dir.path())
        .args(["add", "a b", "c", "--generate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid identifier"));
    assert!(fs::read_dir(dir.path().join("passwords")).unwrap().next().is_none());
}

#[test]
fn delete_confirmed_removes_file() {
    let dir = store();
    put(dir.path(), "site:acct", b"ciphertext");

    pa(dir.path())
        .args(["delete", "site", "acct"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted site:acct"));
    assert!(!entry_path(dir.path(), "site:acct").exists());
}

#[test]
fn delete_declined_keeps_file() {
    let dir = store();
    put(dir.path(), "site:acct", b"ciphertext");

    pa(dir.path())
        .args(["del", "site", "acct"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted."));
    assert_eq!(fs::read(entry_path(dir.path(), "site:acct")).unwrap(), b"ciphertext");
}

#[test]
fn delete_missing_entry_fails() {
    let dir = store();
    pa(dir.path())
        .args(["delete", "site", "acct"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: site:acct"));
}

#[test]
fn rename_moves_ciphertext() {
    let dir = store();
    put(dir.path(), "a:one", b"ciphertext");

    pa(dir.path())
        .args(["mv", "a", "one", "b", "two"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed a:one to b:two"));
    assert!(!entry_path(dir.path(), "a:one").exists());
    assert_eq!(fs::read(entry_path(dir.path(), "b:two")).unwrap(), b"ciphertext");
}

#[test]
fn rename_onto_existing_fails() {
    let dir = store();
    put(dir.path(), "a:one", b"1");
    put(dir.path(), "b:two", b"2");

    pa(dir.path())
        .args(["rename", "a", "one", "b", "two"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry already exists: b:two"));
    assert_eq!(fs::read(entry_path(dir.path(), "a:one")).unwrap(), b"1");
    assert_eq!(fs::read(entry_path(dir.path(), "b:two")).unwrap(), b"2");
}

#[test]
fn zero_length_setting_is_rejected() {
    let dir = store();
    pa(dir.path())
        .env("PA_LENGTH", "0")
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password length"));
}

#[cfg(unix)]
mod with_fake_tool {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Stand-in for age that passes bytes through unchanged
    fn fake_age(dir: &Path) -> String {
        let path = dir.join("fake-age");
        fs::write(&path, "#!/bin/sh\ncat\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    #[test]
    fn add_generated_writes_ciphertext() {
        let dir = store();
        fs::write(dir.path().join("recipients"), b"age1example").unwrap();
        let tool = fake_age(dir.path());

        pa(dir.path())
            .env("PA_AGE", &tool)
            .env("PA_LENGTH", "24")
            .args(["add", "acme.com", "alice", "--generate"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Added acme.com:alice with a generated password",
            ));

        let written = fs::read_to_string(entry_path(dir.path(), "acme.com:alice")).unwrap();
        assert_eq!(written.chars().count(), 24);
        assert!(written
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }

    #[test]
    fn add_without_recipients_writes_nothing() {
        let dir = store();
        let tool = fake_age(dir.path());

        pa(dir.path())
            .env("PA_AGE", &tool)
            .args(["add", "acme.com", "alice", "--generate"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Encryption tool failed"));
        assert!(!entry_path(dir.path(), "acme.com:alice").exists());
    }
}
