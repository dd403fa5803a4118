//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn mic_memo_bin() -> Command {
    Command::cargo_bin("mic-memo").expect("binary exists")
}

/// Point the config store at a throwaway directory
fn with_temp_config(cmd: &mut Command, dir: &tempfile::TempDir) {
    cmd.env("XDG_CONFIG_HOME", dir.path());
    cmd.env("HOME", dir.path());
}

#[test]
fn help_output() {
    mic_memo_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("voice memo"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--sample-rate"))
        .stdout(predicate::str::contains("--channels"));
}

#[test]
fn version_output() {
    mic_memo_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mic-memo"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_help() {
    mic_memo_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = mic_memo_bin();
    with_temp_config(&mut cmd, &dir);

    cmd.args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mic-memo"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();

    let mut set = mic_memo_bin();
    with_temp_config(&mut set, &dir);
    set.args(["config", "set", "output", "/tmp/memo.wav"])
        .assert()
        .success();

    let mut get = mic_memo_bin();
    with_temp_config(&mut get, &dir);
    get.args(["config", "get", "output"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/memo.wav"));
}

#[test]
fn config_list_unset_values() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = mic_memo_bin();
    with_temp_config(&mut cmd, &dir);

    cmd.args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output = (not set)"))
        .stdout(predicate::str::contains("sample_rate = (not set)"));
}

#[test]
fn config_set_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = mic_memo_bin();
    with_temp_config(&mut cmd, &dir);

    cmd.args(["config", "set", "api_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_sample_rate_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = mic_memo_bin();
    with_temp_config(&mut cmd, &dir);

    cmd.args(["config", "set", "sample_rate", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample_rate"));
}

#[test]
fn config_set_out_of_range_channels_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = mic_memo_bin();
    with_temp_config(&mut cmd, &dir);

    cmd.args(["config", "set", "channels", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("channels"));
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = mic_memo_bin();
    with_temp_config(&mut first, &dir);
    first.args(["config", "init"]).assert().success();

    let mut second = mic_memo_bin();
    with_temp_config(&mut second, &dir);
    second
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
