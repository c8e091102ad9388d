//! End-to-end integration tests
//!
//! These tests validate the complete export pipeline using predefined CSV
//! fixtures. Each test:
//! 1. Reads input.csv (an account listing) from a fixture directory
//! 2. Exports the accounts to a temporary file
//! 3. Compares the export with expected.csv
//!
//! Fixtures are located in tests/fixtures/ and cover:
//! - A mixed account tree with hidden and placeholder accounts
//! - An empty listing (header only)
//! - Malformed rows, which are skipped
//! - Short rows and lower-case account types
//!
//! `expected.csv` files use `,`; other separators are checked by swapping the
//! delimiter in the expected text, which works because no fixture value in
//! those cases contains a comma.

#[cfg(test)]
mod tests {
    use gnc_account_export::export::{CsvAccountExporter, ExportConfig, ExportDestination};
    use gnc_account_export::io::AccountReader;
    use gnc_account_export::AccountRecord;
    use rstest::rstest;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::tempdir;

    /// Read a fixture listing, skipping malformed rows like the CLI does
    fn load_accounts(input_path: &str) -> Vec<AccountRecord> {
        AccountReader::new(Path::new(input_path))
            .unwrap_or_else(|e| panic!("Failed to open {}: {}", input_path, e))
            .filter_map(Result::ok)
            .collect()
    }

    /// Export a fixture with `separator` and compare with expected.csv
    fn run_test_fixture(fixture_name: &str, separator: char) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let accounts = load_accounts(&input_path);

        let dir = tempdir().expect("Failed to create temp dir");
        let output_path = dir.path().join("export.csv");
        let config = ExportConfig::new(separator, ExportDestination::File(output_path.clone()));
        let exporter = CsvAccountExporter::new(config).expect("Invalid export config");

        let files = exporter
            .export_to_destination(&accounts)
            .unwrap_or_else(|e| panic!("Failed to export accounts: {}", e));
        assert_eq!(files, vec![output_path.clone()]);

        let actual_output = fs::read_to_string(&output_path)
            .unwrap_or_else(|e| panic!("Failed to read export file: {}", e));

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e))
            .replace(',', &separator.to_string());

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (separator: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, separator, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("empty_listing")]
    #[case("malformed_rows")]
    #[case("short_rows")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture, ',');
    }

    #[rstest]
    #[case("happy_path")]
    #[case("empty_listing")]
    #[case("short_rows")]
    fn test_fixtures_with_separator(
        #[case] fixture: &str,
        #[values(';', '\t', '|')] separator: char,
    ) {
        run_test_fixture(fixture, separator);
    }

    #[test]
    fn test_cli_writes_export_to_stdout() {
        let output = Command::new(env!("CARGO_BIN_EXE_gnc-account-export"))
            .args(["--separator", ";", "tests/fixtures/happy_path/input.csv"])
            .output()
            .expect("Failed to run binary");

        assert!(output.status.success());

        let expected = fs::read_to_string("tests/fixtures/happy_path/expected.csv")
            .unwrap()
            .replace(',', ";");
        assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
    }

    #[test]
    fn test_cli_writes_export_to_file() {
        let dir = tempdir().unwrap();
        let output_path = dir.path().join("export.csv");

        let status = Command::new(env!("CARGO_BIN_EXE_gnc-account-export"))
            .arg("--output")
            .arg(&output_path)
            .arg("tests/fixtures/malformed_rows/input.csv")
            .status()
            .expect("Failed to run binary");

        assert!(status.success());
        assert_eq!(
            fs::read_to_string(&output_path).unwrap(),
            fs::read_to_string("tests/fixtures/malformed_rows/expected.csv").unwrap()
        );
    }

    #[rstest]
    #[case::missing_input(&["tests/fixtures/no_such_fixture/input.csv"], "File not found")]
    #[case::line_break_separator(
        &["--separator", "\n", "tests/fixtures/happy_path/input.csv"],
        "separator must not be a line break"
    )]
    fn test_cli_reports_fatal_errors(#[case] args: &[&str], #[case] expected: &str) {
        let output = Command::new(env!("CARGO_BIN_EXE_gnc-account-export"))
            .args(args)
            .output()
            .expect("Failed to run binary");

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains(expected), "stderr: {}", stderr);
        assert!(output.stdout.is_empty());
    }
}
