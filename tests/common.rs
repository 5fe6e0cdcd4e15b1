#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use enrollcheck::config::Config;
use enrollcheck::sheet::Cell;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ADP_SHEET: &str = "Employee Enrollments";

pub const ADP_HEADERS: [&str; 9] = [
    "NAME",
    "COMPANY CODE",
    "DATE OF BIRTH",
    "HIRE DATE",
    "TERMINATION DATE",
    "PLAN TYPE",
    "ENROLLMENT STATUS",
    "EMPLOYEE STATUS",
    "SSN",
];

pub const BFS_HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Date of Birth",
    "Date of Hire",
    "Termination Date",
];

pub const BSS_HEADERS: [&str; 5] = [
    "Last Name",
    "First Name",
    "Date of Birth",
    "Date of Hire",
    "Termination Date",
];

pub const CIGNA_LIFE_HEADERS: [&str; 5] = [
    "Customer Number",
    "full name",
    "Date of Birth",
    "Date of Hire",
    "Termination Date",
];

pub const BILLING_HEADERS: [&str; 6] = [
    "Customer Number",
    "Name",
    "Relationship",
    "Dental",
    "Medical",
    "Vision",
];

pub const ID_HEADERS: [&str; 2] = ["Customer Number", "SSN"];

pub fn ecx() -> Command {
    cargo_bin_cmd!("enrollcheck")
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("enrollcheck_{name}"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Config writing reports (and their CSV twins) into `dir`
pub fn test_config(dir: &Path) -> Config {
    Config {
        output_folder: dir.join("reports").to_string_lossy().to_string(),
        csv_mirror: true,
        ..Config::default()
    }
}

/// Save `cfg` as `dir/enrollcheck.conf` and return the path, for `--config`
pub fn write_config(dir: &Path, cfg: &Config) -> PathBuf {
    let path = dir.join("enrollcheck.conf");
    cfg.save(&path).expect("save config");
    path
}

/// Write one sheet with a two-line title block above the header,
/// as the real exports have.
pub fn write_sheet(path: &Path, sheet: &str, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).expect("sheet name");

    worksheet
        .write(0, 0, "Benefits Enrollment Extract")
        .expect("title");

    let header_row = 2;
    for (c, h) in headers.iter().enumerate() {
        worksheet
            .write(header_row, c as u16, *h)
            .expect("header");
    }

    for (r, row) in rows.iter().enumerate() {
        let r = header_row + 1 + r as u32;
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    worksheet.write(r, c as u16, s.as_str()).expect("text");
                }
                Cell::Number(n) => {
                    worksheet.write(r, c as u16, *n).expect("number");
                }
            }
        }
    }

    workbook.save(path).expect("save workbook");
}

/// ADP sheet whose date columns are real, date-formatted cells
/// (what payroll exports deliver), not plain numbers.
pub fn write_adp_native_dates(
    path: &Path,
    name: &str,
    dob: (u16, u8, u8),
    hire: (u16, u8, u8),
    plan: &str,
) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(ADP_SHEET).expect("sheet name");
    let date_format = Format::new().set_num_format("mm/dd/yyyy");

    for (c, h) in ADP_HEADERS.iter().enumerate() {
        worksheet.write(0, c as u16, *h).expect("header");
    }

    worksheet.write(1, 0, name).expect("name");
    for (col, (y, m, d)) in [(2u16, dob), (3u16, hire)] {
        let dt = ExcelDateTime::from_ymd(y, m, d).expect("valid date");
        worksheet
            .write_datetime_with_format(1, col, &dt, &date_format)
            .expect("date");
    }
    worksheet.write(1, 5, plan).expect("plan");
    worksheet.write(1, 6, "Active").expect("status");

    workbook.save(path).expect("save workbook");
}

pub fn date(serial: i64) -> Cell {
    Cell::Number(serial as f64)
}

pub fn text(s: &str) -> Cell {
    Cell::from(s)
}

/// ADP enrollment line; `term` of `None` leaves the cell blank.
pub fn adp_row(
    name: &str,
    dob: i64,
    hire: i64,
    term: Option<i64>,
    plan: &str,
    status: &str,
    ssn: &str,
) -> Vec<Cell> {
    vec![
        text(name),
        text("C01"),
        date(dob),
        date(hire),
        term.map(date).unwrap_or_default(),
        text(plan),
        text(status),
        text("Active"),
        text(ssn),
    ]
}

/// Provider line with separate name columns, in BFS column order
pub fn bfs_row(first: &str, last: &str, dob: i64, hire: i64, term: Option<i64>) -> Vec<Cell> {
    vec![
        text(first),
        text(last),
        date(dob),
        date(hire),
        term.map(date).unwrap_or_default(),
    ]
}

/// Provider line in BSS column order (last name first)
pub fn bss_row(first: &str, last: &str, dob: i64, hire: i64, term: Option<i64>) -> Vec<Cell> {
    vec![
        text(last),
        text(first),
        date(dob),
        date(hire),
        term.map(date).unwrap_or_default(),
    ]
}

pub fn cigna_life_row(customer: &str, full_name: &str, dob: i64, hire: i64) -> Vec<Cell> {
    vec![text(customer), text(full_name), date(dob), date(hire), Cell::Empty]
}

pub fn billing_row(
    customer: &str,
    name: &str,
    rel: &str,
    dental: Cell,
    medical: Cell,
    vision: Cell,
) -> Vec<Cell> {
    vec![text(customer), text(name), text(rel), dental, medical, vision]
}

pub fn write_adp(path: &Path, rows: &[Vec<Cell>]) {
    write_sheet(path, ADP_SHEET, &ADP_HEADERS, rows);
}

pub fn write_bfs(path: &Path, rows: &[Vec<Cell>]) {
    write_sheet(path, "BFS Census", &BFS_HEADERS, rows);
}

pub fn write_bss(path: &Path, rows: &[Vec<Cell>]) {
    write_sheet(path, "BSS Census", &BSS_HEADERS, rows);
}

pub fn write_cigna_life(path: &Path, rows: &[Vec<Cell>]) {
    write_sheet(path, "Life", &CIGNA_LIFE_HEADERS, rows);
}

pub fn write_billing(path: &Path, rows: &[Vec<Cell>]) {
    write_sheet(path, "Billing", &BILLING_HEADERS, rows);
}

pub fn write_ids(path: &Path, rows: &[Vec<Cell>]) {
    write_sheet(path, "IDs", &ID_HEADERS, rows);
}

/// Parse the CSV twin of a report into (header, rows)
pub fn read_report_csv(xlsx: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let csv_path = xlsx.with_extension("csv");
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&csv_path)
        .expect("open csv twin");

    let headers = rdr
        .headers()
        .expect("csv headers")
        .iter()
        .map(str::to_string)
        .collect();
    let rows = rdr
        .records()
        .map(|r| r.expect("csv record").iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

/// Comments column (last) of every CSV row
pub fn comments(rows: &[Vec<String>]) -> Vec<String> {
    rows.iter()
        .map(|r| r.last().cloned().unwrap_or_default())
        .collect()
}
