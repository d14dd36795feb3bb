use predicates::str::contains;

#[test]
fn zero_servers_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "poisson:4",
        "--service",
        "exponential:0.5",
        "--servers",
        "0",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: server count must be greater than 0"));
}

#[test]
fn non_positive_rate_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "poisson:0",
        "--service",
        "exponential:0.5",
        "--servers",
        "1",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: rate must be > 0 (got 0)"));
}

#[test]
fn inverted_uniform_bounds_fail() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "uniform:9:3",
        "--service",
        "exponential:0.5",
        "--servers",
        "1",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: uniform bounds must satisfy b > a"));
}

#[test]
fn unknown_distribution_kind_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "gamma:2",
        "--service",
        "exponential:0.5",
        "--servers",
        "1",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: invalid distribution 'gamma:2'"));
}

#[test]
fn missing_arrival_flag_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["run", "--service", "exponential:0.5", "--servers", "1"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: missing --arrival"));
}

#[test]
fn zero_priority_levels_fail() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args([
        "run",
        "--arrival",
        "poisson:4",
        "--service",
        "exponential:0.5",
        "--servers",
        "1",
        "--priority",
        "--priority-levels",
        "0",
    ]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: priority levels must be greater than 0"));
}

#[test]
fn mmc_zero_servers_fails() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("queue-sim");
    cmd.args(["mmc", "--lambda", "4", "--mu", "5", "--servers", "0"]);
    cmd.assert()
        .failure()
        .stderr(contains("Error: server count must be greater than 0"));
}
