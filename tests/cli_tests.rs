mod common;

use common::{read_part, row, setup_dir, shs, write_docx, write_shift_docx};
use predicates::str::contains;
use std::fs;

#[test]
fn test_convert_directory_writes_xlsx_per_document() {
    let dir = setup_dir("cli_convert");
    let input = dir.join("in");
    let output = dir.join("out");
    let config = dir.join("shiftsheet.conf");
    fs::create_dir_all(&input).unwrap();

    write_shift_docx(
        &input.join("june.report.docx"),
        &[
            row(&["Ivanov", "", "1.6.23", "8:00", "09:00 - 18:00", "JIRA-1"]),
            row(&["Petrov", "", "05.06.2023", "3:30", "20:00 - 23:30", "JIRA-7"]),
        ],
    );

    shs()
        .args(["--config"])
        .arg(&config)
        .args(["convert", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Сохранено в файл"));

    let xlsx = output.join("june.report.xlsx");
    assert!(xlsx.exists());

    let strings = read_part(&xlsx, "xl/sharedStrings.xml");
    for expected in [
        "Сотрудник",
        "01.06.2023",
        "05.06.2023",
        "Способ компенсации",
        "Период работы",
        "Задача JIRA",
        "Ivanov",
        "Обычная",
        "Повышенная",
        "20:00 - 22:00",
        "22:00 - 23:30",
        "1:30",
    ] {
        assert!(strings.contains(expected), "missing {expected}");
    }

    let styles = read_part(&xlsx, "xl/styles.xml");
    assert!(styles.contains("FFC7CE"));

    let sheet = read_part(&xlsx, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<cols>"));
}

#[test]
fn test_batch_continues_after_bad_documents() {
    let dir = setup_dir("cli_batch_isolation");
    let input = dir.join("in");
    let output = dir.join("out");
    let config = dir.join("shiftsheet.conf");
    fs::create_dir_all(&input).unwrap();

    // a: malformed time range, b: only one table, c: fine, d: not a docx at all
    write_shift_docx(
        &input.join("a.docx"),
        &[row(&["Ivanov", "", "1.6.23", "8:00", "09:00", "JIRA-1"])],
    );
    write_docx(&input.join("b.docx"), &[vec![row(&["only", "table"])]]);
    write_shift_docx(
        &input.join("c.docx"),
        &[row(&["Sidorov", "", "03.06.2023", "4", "10:00-14:00", "OPS-1"])],
    );
    fs::write(input.join("d.txt"), "not a document").unwrap();
    fs::write(input.join("~$c.docx"), "lock").unwrap();

    shs()
        .arg("--config")
        .arg(&config)
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Таблица не найдена"))
        .stdout(contains("сохранено: 1"))
        .stderr(contains("Ошибка обработки"));

    assert!(output.join("c.xlsx").exists());
    assert!(!output.join("a.xlsx").exists());
    assert!(!output.join("b.xlsx").exists());
    assert!(!output.join("d.xlsx").exists());
    assert!(!output.join("~$c.xlsx").exists());
}

#[test]
fn test_table_index_override() {
    let dir = setup_dir("cli_table_index");
    let doc = dir.join("single.docx");
    let out = dir.join("single.xlsx");
    let config = dir.join("shiftsheet.conf");

    let mut table = vec![common::header_row()];
    table.push(row(&["Ivanov", "", "1.6.23", "8:00", "09:00 - 18:00", "JIRA-1"]));
    write_docx(&doc, &[table]);

    // default index 1 does not exist
    shs()
        .arg("--config")
        .arg(&config)
        .arg("file")
        .arg(&doc)
        .assert()
        .success()
        .stdout(contains("Таблица не найдена"));
    assert!(!out.exists());

    shs()
        .arg("--config")
        .arg(&config)
        .arg("file")
        .arg(&doc)
        .args(["--table", "0", "--force"])
        .assert()
        .success()
        .stdout(contains("Сохранено в файл"));
    assert!(out.exists());
}

#[test]
fn test_file_with_format_error_fails() {
    let dir = setup_dir("cli_file_error");
    let doc = dir.join("bad.docx");
    let config = dir.join("shiftsheet.conf");

    write_shift_docx(&doc, &[row(&["Ivanov", "", "1.6", "8:00", "09:00-18:00", "JIRA-1"])]);

    shs()
        .arg("--config")
        .arg(&config)
        .arg("file")
        .arg(&doc)
        .arg("-f")
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_config_from_file_is_applied() {
    let dir = setup_dir("cli_config_file");
    let input = dir.join("in");
    let output = dir.join("out");
    let config = dir.join("shiftsheet.conf");
    fs::create_dir_all(&input).unwrap();

    fs::write(
        &config,
        "night_cutoff: \"20:00\"\ncompensation_elevated: \"Ночная\"\nheader_color: \"00FF00\"\n",
    )
    .unwrap();

    write_shift_docx(
        &input.join("x.docx"),
        &[row(&["Ivanov", "", "06.06.2023", "3", "18:00-21:00", "J"])],
    );

    shs()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let xlsx = output.join("x.xlsx");
    let strings = read_part(&xlsx, "xl/sharedStrings.xml");
    assert!(strings.contains("18:00 - 20:00"));
    assert!(strings.contains("20:00 - 21:00"));
    assert!(strings.contains("Ночная"));
    assert!(read_part(&xlsx, "xl/styles.xml").contains("00FF00"));
}

#[test]
fn test_invalid_config_aborts_batch() {
    let dir = setup_dir("cli_invalid_config");
    let input = dir.join("in");
    let config = dir.join("shiftsheet.conf");
    fs::create_dir_all(&input).unwrap();
    fs::write(&config, "night_cutoff: \"late\"\n").unwrap();

    shs()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    shs()
        .arg("--config")
        .arg(&config)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stdout(contains("night_cutoff"));
}

#[test]
fn test_init_and_print_config() {
    let dir = setup_dir("cli_init");
    let config = dir.join("nested").join("shiftsheet.conf");

    shs()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success();
    assert!(config.exists());

    let yaml = fs::read_to_string(&config).unwrap();
    assert!(yaml.contains("night_cutoff"));
    assert!(yaml.contains("12.06.2023"));

    // second init keeps the file
    shs()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("--force"));

    shs()
        .arg("--config")
        .arg(&config)
        .args(["config", "--print", "--check"])
        .assert()
        .success()
        .stdout(contains("compensation_elevated"))
        .stdout(contains("Configuration OK"));
}

#[test]
fn test_inspect_lists_tables() {
    let dir = setup_dir("cli_inspect");
    let doc = dir.join("doc.docx");
    let config = dir.join("shiftsheet.conf");
    write_shift_docx(&doc, &[row(&["A", "", "06.06.2023", "1", "10:00-11:00", "T"])]);

    shs()
        .arg("--config")
        .arg(&config)
        .arg("inspect")
        .arg(&doc)
        .assert()
        .success()
        .stdout(contains("таблиц 2"))
        .stdout(contains("[1] строк: 2"));
}

#[test]
fn test_duplicate_column_labels_abort_conversion() {
    let dir = setup_dir("cli_duplicate_labels");
    let input = dir.join("in");
    let output = dir.join("out");
    let doc = input.join("x.docx");
    let config = dir.join("shiftsheet.conf");
    fs::create_dir_all(&input).unwrap();
    fs::write(&config, "column_method: \"Задача JIRA\"\n").unwrap();

    write_shift_docx(&doc, &[row(&["Ivanov", "", "06.06.2023", "3", "10:00-13:00", "J"])]);

    shs()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(contains("Configuration error"))
        .stderr(contains("used more than once"));
    assert!(!output.join("x.xlsx").exists());

    shs()
        .arg("--config")
        .arg(&config)
        .arg("file")
        .arg(&doc)
        .arg("-f")
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
    assert!(!input.join("x.xlsx").exists());
}

#[test]
fn test_date_equal_to_column_label_fails_document() {
    let dir = setup_dir("cli_date_label_collision");
    let input = dir.join("in");
    let output = dir.join("out");
    let config = dir.join("shiftsheet.conf");
    fs::create_dir_all(&input).unwrap();
    fs::write(&config, "column_task: \"01.06.2023\"\n").unwrap();

    write_shift_docx(
        &input.join("x.docx"),
        &[row(&["Ivanov", "", "1.6.23", "8:00", "09:00 - 18:00", "JIRA-1"])],
    );

    shs()
        .arg("--config")
        .arg(&config)
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("с ошибками: 1"))
        .stderr(contains("matches a fixed column label"));
    assert!(!output.join("x.xlsx").exists());
}
