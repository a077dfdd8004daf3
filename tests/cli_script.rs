use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("cash_run_cli")
        .unwrap()
        .env("CASH_RUN_CLI_SCRIPT", "1")
        .env("CASH_RUN_HOME", home.path())
        .env("RUST_LOG", "off")
        .write_stdin(input)
        .assert()
}

#[test]
fn script_mode_runs_budget_flow() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "register ana pw\nset salary 300.000\ncompute\ndays 15\nexit\n",
    )
    .success()
    .stdout(contains("Registered and logged in as `ana`."))
    .stdout(contains("$ 300.000"))
    .stdout(contains("You can spend $ 20.000 per day for the next 15 days."));

    assert!(home.path().join("store").join("usuarios_registrados.json").exists());
    assert!(home.path().join("config").join("config.json").exists());
}

#[test]
fn state_survives_between_runs() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "register ana pw\ngoal create Trip 1.000.000 200.000\nsaving record 100.000 payday\n",
    )
    .success();

    script(
        &home,
        "login ana pw\nsaving pending\nsaving assign 1 Trip\ngoal list\n",
    )
    .success()
    .stdout(contains("Entry assigned. Goal total: $ 300.000."))
    .stdout(contains("1. Trip: $ 300.000 of $ 1.000.000 (30%)"));
}

#[test]
fn commands_need_a_session_and_report_errors() {
    let home = TempDir::new().unwrap();
    script(&home, "summary\nlogin ghost pw\nsumary\n")
        .success()
        .stdout(contains("Not logged in."))
        .stdout(contains("User `ghost` not found."))
        .stdout(contains("Suggestion: `summary`?"));
}

#[test]
fn days_before_compute_is_rejected() {
    let home = TempDir::new().unwrap();
    script(&home, "register ana pw\ndays 10\n")
        .success()
        .stdout(contains("Finances not computed yet."));
}
