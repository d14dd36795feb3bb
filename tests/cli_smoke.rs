use predicates::str::{contains, diff};

#[test]
fn mmc_output_is_stable() {
    let expected = concat!(
        "M/M/1 metrics:\n",
        "rho: 0.8000\n",
        "stable: true\n",
        "P0: 0.2000\n",
        "Lq: 3.2000\n",
        "L: 4.0000\n",
        "Wq: 0.8000\n",
        "W: 1.0000\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["mmc", "--lambda", "4", "--mu", "5", "--servers", "1"]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn mmc_overload_reports_unbounded() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["mmc", "--lambda", "10", "--mu", "2"]);
    cmd.assert()
        .success()
        .stdout(contains("stable: false"))
        .stdout(contains("L: unbounded"));
}

#[test]
fn show_config_echoes_resolved_parameters() {
    let expected = concat!(
        "Arrival: poisson (rate: 4)\n",
        "Service: normal (mean: 30, std_dev: 5)\n",
        "Servers: 2\n",
        "Priority: enabled (3 levels)\n",
        "Seed: 42\n",
    );

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "show-config",
        "--arrival",
        "poisson:4",
        "--service",
        "normal:30:5",
        "--servers",
        "2",
        "--priority",
        "--priority-levels",
        "3",
        "--seed",
        "42",
    ]);
    cmd.assert().success().stdout(diff(expected));
}

#[test]
fn run_summary_prints_totals_and_servers() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "poisson:4",
        "--service",
        "exponential:0.3",
        "--servers",
        "2",
        "--seed",
        "7",
        "--format",
        "summary",
    ]);
    cmd.assert()
        .success()
        .stdout(contains("Totals:"))
        .stdout(contains("Averages:"))
        .stdout(contains("server 0:"))
        .stdout(contains("server 1:"));
}

#[test]
fn run_is_deterministic_for_a_seed() {
    let args = [
        "run",
        "--arrival",
        "poisson:3",
        "--service",
        "uniform:1:6",
        "--servers",
        "2",
        "--priority",
        "--priority-levels",
        "2",
        "--seed",
        "99",
        "--format",
        "json",
    ];

    let mut first = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    first.args(args);
    let first_out = first.assert().success().get_output().stdout.clone();

    let mut second = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    second.args(args);
    second
        .assert()
        .success()
        .stdout(diff(String::from_utf8(first_out).expect("output should be utf-8")));
}

#[test]
fn run_json_is_parseable() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "exponential:2",
        "--service",
        "exponential:0.5",
        "--servers",
        "1",
        "--seed",
        "11",
        "--format",
        "json",
    ]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("output should be valid JSON");
    assert!(parsed.get("customers").is_some());
    assert!(parsed.get("servers").is_some());
    assert!(parsed.get("averages").is_some());
}
