use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::*;

#[test]
fn test_formats_lists_every_provider() {
    ecx()
        .arg("formats")
        .assert()
        .success()
        .stdout(contains("BFS (--provider bfs)"))
        .stdout(contains("Cigna Life (--provider cigna-life)"))
        .stdout(contains("Dental, Medical, Vision"))
        .stdout(contains("Customer Number, SSN"));
}

#[test]
fn test_report_bfs_prints_output_path() {
    let dir = temp_dir("cli_report_bfs");
    let config = write_config(&dir, &test_config(&dir));

    let adp = dir.join("adp.xlsx");
    write_adp(
        &adp,
        &[adp_row("Doe, Jane", 10000, 20000, None, "Employee Life", "Active", "")],
    );
    let bfs = dir.join("bfs.xlsx");
    write_bfs(&bfs, &[bfs_row("Jane", "Doe", 10000, 20000, None)]);

    ecx()
        .arg("--config")
        .arg(&config)
        .args(["report", "--provider", "bfs", "--plan", "employee-life"])
        .arg("--adp")
        .arg(&adp)
        .arg("--insurance")
        .arg(&bfs)
        .assert()
        .success()
        .stdout(contains("StatusReport_BFS_EmployeeLife_"))
        .stdout(contains("1 report rows, 1 good matches"));

    let written: Vec<_> = fs::read_dir(dir.join("reports"))
        .expect("reports folder")
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "xlsx"))
        .collect();
    assert_eq!(written.len(), 1);
}

#[test]
fn test_report_multi_extract_counts_rows_good_in_every_file() {
    let dir = temp_dir("cli_report_multi_good");
    let config = write_config(&dir, &test_config(&dir));

    let adp = dir.join("adp.xlsx");
    write_adp(
        &adp,
        &[
            adp_row("Doe, Jane", 10000, 20000, None, "Employee Life", "Active", ""),
            adp_row("Roe, John", 11000, 20500, None, "Employee Life", "Active", ""),
        ],
    );
    let jan = dir.join("bfs_jan.xlsx");
    write_bfs(
        &jan,
        &[
            bfs_row("Jane", "Doe", 10000, 20000, None),
            bfs_row("John", "Roe", 11000, 20500, None),
        ],
    );
    let feb = dir.join("bfs_feb.xlsx");
    write_bfs(
        &feb,
        &[
            bfs_row("Jane", "Doe", 10000, 20000, None),
            bfs_row("John", "Roe", 11000, 20501, None),
        ],
    );

    ecx()
        .arg("--config")
        .arg(&config)
        .args(["report", "--provider", "bfs", "--plan", "employee-life"])
        .arg("--adp")
        .arg(&adp)
        .arg("--insurance")
        .arg(&jan)
        .arg("--insurance")
        .arg(&feb)
        .assert()
        .success()
        .stdout(contains("2 report rows, 1 good matches"))
        .stdout(contains("1 rows need review"));
}

#[test]
fn test_report_output_flag_overrides_config() {
    let dir = temp_dir("cli_report_output");
    let config = write_config(&dir, &test_config(&dir));
    let out = dir.join("elsewhere");

    let adp = dir.join("adp.xlsx");
    write_adp(
        &adp,
        &[adp_row("Doe, Jane", 10000, 20000, None, "Employee Life", "Active", "")],
    );
    let bss = dir.join("bss.xlsx");
    write_bss(&bss, &[bss_row("Jane", "Doe", 10000, 20001, None)]);

    ecx()
        .arg("--config")
        .arg(&config)
        .args(["report", "--provider", "bss", "--plan", "employee-life", "--csv"])
        .arg("--adp")
        .arg(&adp)
        .arg("--insurance")
        .arg(&bss)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("StatusReport_BSS_EmployeeLife_"));

    assert!(out.is_dir());
    assert!(!dir.join("reports").exists());
}

#[test]
fn test_report_unsupported_combination() {
    let dir = temp_dir("cli_unsupported");
    let config = write_config(&dir, &test_config(&dir));

    ecx()
        .arg("--config")
        .arg(&config)
        .args([
            "report",
            "--provider",
            "cigna-life",
            "--plan",
            "dental",
            "--adp",
            "adp.xlsx",
            "--insurance",
            "life.xlsx",
        ])
        .assert()
        .failure()
        .stderr(contains(
            "No report available for provider Cigna Life and plan type Dental",
        ));
}

#[test]
fn test_report_missing_files_listed() {
    let dir = temp_dir("cli_missing_files");
    let config = write_config(&dir, &test_config(&dir));

    ecx()
        .arg("--config")
        .arg(&config)
        .args(["report", "--provider", "cigna", "--plan", "vision"])
        .arg("--adp")
        .arg(dir.join("adp.xlsx"))
        .arg("--insurance")
        .arg(dir.join("billing.xlsx"))
        .assert()
        .failure()
        .stderr(contains("Cannot generate report"))
        .stderr(contains("- ADP file not found").and(contains("- ID file is required for Cigna.")));
}

#[test]
fn test_report_requires_insurance_flag() {
    ecx()
        .args(["report", "--provider", "bfs", "--plan", "dental", "--adp", "a.xlsx"])
        .assert()
        .failure()
        .stderr(contains("--insurance"));
}

#[test]
fn test_malformed_config_is_an_error() {
    let dir = temp_dir("cli_bad_config");
    let config = dir.join("enrollcheck.conf");
    fs::write(&config, "overwrite: [not, a, bool]\n").unwrap();

    ecx()
        .arg("--config")
        .arg(&config)
        .arg("formats")
        .assert()
        .failure()
        .stderr(contains("Invalid YAML"));
}

#[test]
fn test_init_then_print_config() {
    let dir = temp_dir("cli_init");
    let config = dir.join("conf").join("enrollcheck.conf");

    ecx()
        .env("HOME", &dir)
        .env("APPDATA", &dir)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Config file created"));

    assert!(config.exists());

    ecx()
        .env("HOME", &dir)
        .env("APPDATA", &dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("date_format: '%m/%d/%Y'").or(contains("date_format: \"%m/%d/%Y\"")))
        .stdout(contains("adp_sheet: Employee Enrollments"))
        .stdout(contains("overwrite: true"));

    // a second init keeps the file
    ecx()
        .env("HOME", &dir)
        .env("APPDATA", &dir)
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already exists"));
}

fn batch_inputs(
    dir: &std::path::Path,
) -> (std::path::PathBuf, std::path::PathBuf, std::path::PathBuf) {
    let adp = dir.join("adp.xlsx");
    write_adp(
        &adp,
        &[
            adp_row("Doe, Jane", 10000, 20000, None, "Employee Life", "Active", ""),
            adp_row("Doe, Jane", 10000, 20000, None, "Dental", "Active", ""),
        ],
    );
    let bfs = dir.join("bfs.xlsx");
    write_bfs(&bfs, &[bfs_row("Jane", "Doe", 10000, 20000, None)]);
    let bss = dir.join("bss.xlsx");
    write_bss(&bss, &[bss_row("Jane", "Doe", 10000, 20000, None)]);
    (adp, bfs, bss)
}

#[test]
fn test_batch_runs_all_jobs() {
    let dir = temp_dir("cli_batch_ok");
    let config = write_config(&dir, &test_config(&dir));
    let (adp, bfs, bss) = batch_inputs(&dir);

    let jobs = dir.join("jobs.yaml");
    fs::write(
        &jobs,
        format!(
            "jobs:\n\
             \x20 - provider: bfs\n    plan: dental\n    adp: {adp}\n    insurance: [{bfs}]\n\
             \x20 - provider: bfs\n    plan: employee-life\n    adp: {adp}\n    insurance: [{bfs}]\n\
             \x20 - provider: bss\n    plan: employee-life\n    adp: {adp}\n    insurance: [{bss}]\n",
            adp = adp.display(),
            bfs = bfs.display(),
            bss = bss.display(),
        ),
    )
    .unwrap();

    ecx()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg("--jobs")
        .arg(&jobs)
        .assert()
        .success()
        .stdout(contains("Job 1 (BFS / Dental)"))
        .stdout(contains("StatusReport_BSS_EmployeeLife_"));

    let xlsx = fs::read_dir(dir.join("reports"))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|x| x == "xlsx"))
        .count();
    assert_eq!(xlsx, 3);
}

#[test]
fn test_batch_reports_failed_jobs() {
    let dir = temp_dir("cli_batch_fail");
    let config = write_config(&dir, &test_config(&dir));
    let (adp, bfs, _) = batch_inputs(&dir);

    let jobs = dir.join("jobs.yaml");
    fs::write(
        &jobs,
        format!(
            "jobs:\n\
             \x20 - provider: bfs\n    plan: dental\n    adp: {adp}\n    insurance: [{bfs}]\n\
             \x20 - provider: bss\n    plan: dental\n    adp: {adp}\n    insurance: [{bfs}]\n",
            adp = adp.display(),
            bfs = bfs.display(),
        ),
    )
    .unwrap();

    ecx()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg("--jobs")
        .arg(&jobs)
        .assert()
        .failure()
        .stderr(contains("1 of 2 batch jobs failed"));
}

#[test]
fn test_batch_rejects_colliding_jobs() {
    let dir = temp_dir("cli_batch_collide");
    let config = write_config(&dir, &test_config(&dir));
    let (adp, bfs, _) = batch_inputs(&dir);

    let jobs = dir.join("jobs.yaml");
    fs::write(
        &jobs,
        format!(
            "jobs:\n\
             \x20 - provider: bfs\n    plan: dental\n    adp: {adp}\n    insurance: [{bfs}]\n\
             \x20 - provider: bfs\n    plan: dental\n    adp: {adp}\n    insurance: [{bfs}]\n",
            adp = adp.display(),
            bfs = bfs.display(),
        ),
    )
    .unwrap();

    ecx()
        .arg("--config")
        .arg(&config)
        .arg("batch")
        .arg("--jobs")
        .arg(&jobs)
        .assert()
        .failure()
        .stderr(contains("Job 2: another job already writes BFS / Dental"));
}
