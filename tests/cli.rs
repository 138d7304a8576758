use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn gitrc(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitrc").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("GITCONFIG")
        .env_remove("GITCONFIGS")
        .env_remove("USERPROFILE")
        .env_remove("GITRC_LOG");
    cmd
}

fn link(home: &Path) -> PathBuf {
    home.join(".gitconfig")
}

fn profile(home: &Path, name: &str) -> PathBuf {
    home.join(".gitconfigs").join(name)
}

/// Home directory that has already been through first-run setup
fn initialised_home() -> TempDir {
    let temp = TempDir::new().unwrap();
    gitrc(temp.path()).assert().success();
    temp
}

#[test]
fn help_shows_usage() {
    let temp = TempDir::new().unwrap();
    gitrc(temp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switch to profile"))
        .stdout(predicate::str::contains("gitrc -n [name]"));

    assert!(!temp.path().join(".gitconfigs").exists());
}

#[test]
fn unknown_option_shows_usage() {
    let temp = TempDir::new().unwrap();
    gitrc(temp.path())
        .arg("-x")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown option: -x"))
        .stdout(predicate::str::contains("gitrc -d [name]"));
}

#[test]
fn bootstrap_empty_home() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    gitrc(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialising gitrc!"));

    assert_eq!(fs::read_to_string(profile(home, "default")).unwrap(), "");
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "default"));
}

#[test]
fn bootstrap_adopts_existing_gitconfig() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(link(home), "X").unwrap();

    gitrc(home).assert().success();

    assert_eq!(fs::read_to_string(profile(home, "default")).unwrap(), "X");
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "default"));
}

#[cfg(unix)]
#[test]
fn bootstrap_adopts_relative_symlink() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::create_dir(home.join("dotfiles")).unwrap();
    fs::write(home.join("dotfiles/gitconfig"), "[user]\n").unwrap();
    std::os::unix::fs::symlink("dotfiles/gitconfig", link(home)).unwrap();

    gitrc(home).assert().success();

    assert_eq!(fs::read_to_string(profile(home, "default")).unwrap(), "[user]\n");
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "default"));

    gitrc(home)
        .assert()
        .success()
        .stdout(predicate::str::contains(" > default"));
    gitrc(home)
        .arg("default")
        .assert()
        .success()
        .stdout(predicate::str::contains("already"));
}

#[test]
fn bootstrap_skips_requested_action() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();

    gitrc(home).args(["-n", "work"]).assert().success();

    assert!(profile(home, "default").exists());
    assert!(!profile(home, "work").exists());
}

#[test]
fn create_and_list() {
    let temp = initialised_home();
    let home = temp.path();

    gitrc(home).args(["-n", "work"]).assert().success();

    assert_eq!(fs::metadata(profile(home, "work")).unwrap().len(), 0);
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "default"));

    gitrc(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Available .gitconfig files:"))
        .stdout(predicate::str::contains(" > default"))
        .stdout(predicate::str::contains("   work"));
}

#[test]
fn create_existing_fails() {
    let temp = initialised_home();
    let home = temp.path();
    fs::write(profile(home, "work"), "[user]\n").unwrap();

    gitrc(home)
        .args(["-n", "work"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(profile(home, "work")).unwrap(), "[user]\n");
}

#[test]
fn create_and_delete_need_a_name() {
    let temp = initialised_home();
    let home = temp.path();

    gitrc(home)
        .arg("-n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("What do you want to call"));

    gitrc(home)
        .arg("-d")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("What .gitconfig file did you want to delete?"));

    let names: Vec<_> = fs::read_dir(home.join(".gitconfigs")).unwrap().collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn switch_is_idempotent() {
    let temp = initialised_home();
    let home = temp.path();
    fs::write(profile(home, "work"), "").unwrap();

    gitrc(home)
        .arg("work")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replacing old .gitconfig (default)"))
        .stdout(predicate::str::contains("Activated .gitconfig: \"work\""));
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "work"));

    gitrc(home)
        .arg("work")
        .assert()
        .success()
        .stdout(predicate::str::contains("is already \"work\""));
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "work"));
}

#[test]
fn switch_to_missing_profile_fails() {
    let temp = initialised_home();
    let home = temp.path();

    gitrc(home)
        .arg("ghost")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"ghost\" doesn't exist"));

    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "default"));
}

#[test]
fn switch_refuses_regular_gitconfig() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::create_dir(home.join(".gitconfigs")).unwrap();
    fs::write(profile(home, "work"), "").unwrap();
    fs::write(link(home), "X").unwrap();

    gitrc(home)
        .arg("work")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a symbolic link"));

    assert_eq!(fs::read_to_string(link(home)).unwrap(), "X");
}

#[test]
fn delete_active_profile_clears_link() {
    let temp = initialised_home();
    let home = temp.path();
    fs::write(profile(home, "work"), "").unwrap();
    gitrc(home).arg("work").assert().success();

    gitrc(home)
        .args(["-d", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current active config was deleted."));

    assert!(fs::symlink_metadata(link(home)).is_err());
    assert!(!profile(home, "work").exists());

    gitrc(home)
        .assert()
        .success()
        .stdout(predicate::str::contains("   default"))
        .stdout(predicate::str::contains(">").not());
}

#[test]
fn delete_inactive_profile_keeps_link() {
    let temp = initialised_home();
    let home = temp.path();
    fs::write(profile(home, "work"), "").unwrap();

    gitrc(home).args(["-d", "work"]).assert().success();

    assert!(!profile(home, "work").exists());
    assert_eq!(fs::read_link(link(home)).unwrap(), profile(home, "default"));
}

#[test]
fn delete_missing_profile_fails() {
    let temp = initialised_home();

    gitrc(temp.path())
        .args(["-d", "ghost"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn profiles_path_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let home = temp.path();
    fs::write(home.join(".gitconfigs"), "").unwrap();

    gitrc(home)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("is not a directory"));
}

#[test]
fn env_overrides_locations() {
    let temp = TempDir::new().unwrap();
    let custom_link = temp.path().join("etc").join("gitconfig");
    let custom_dir = temp.path().join("profiles");

    gitrc(temp.path())
        .env("GITCONFIG", &custom_link)
        .env("GITCONFIGS", &custom_dir)
        .assert()
        .success();

    assert_eq!(fs::read_link(&custom_link).unwrap(), custom_dir.join("default"));
    assert!(!link(temp.path()).exists());
}
