//! Integration tests for directory conversion workflow

#[cfg(test)]
mod directory_conversion_tests {
    use std::fs;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_csvconv(args: &[&str]) -> (bool, String, String) {
        let output = Command::new(env!("CARGO_BIN_EXE_csvconv"))
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run csvconv");

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        (output.status.success(), stdout, stderr)
    }

    #[test]
    fn test_directory_conversion_creates_output_files() {
        let input_dir = tempdir().unwrap();
        let nested = input_dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();

        fs::write(input_dir.path().join("a.csv"), "name\nAlice\n").unwrap();
        fs::write(nested.join("b.CSV"), "name\nBob\n").unwrap();
        fs::write(input_dir.path().join("ignore.txt"), "not csv").unwrap();

        let output_dir = tempdir().unwrap();
        let args = [
            input_dir.path().to_str().unwrap(),
            "--output",
            output_dir.path().to_str().unwrap(),
            "--recursive",
        ];
        let (success, stdout, stderr) = run_csvconv(&args);

        assert!(success, "stderr: {}", stderr);
        assert!(stderr.is_empty(), "No error expected: {}", stderr);
        assert!(stdout.contains("Found 2 CSV files"));

        let out1 = output_dir.path().join("a.json");
        let contents: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out1).unwrap()).unwrap();
        assert_eq!(contents, serde_json::json!([{"name": "Alice"}]));

        let out2 = output_dir.path().join("sub/b.json");
        assert!(out2.exists(), "Expected output sub/b.json to exist");
        assert!(fs::read_to_string(out2).unwrap().contains("Bob"));
        assert!(!output_dir.path().join("ignore.json").exists());
    }

    #[test]
    fn test_non_recursive_skips_subdirectories() {
        let input_dir = tempdir().unwrap();
        fs::create_dir_all(input_dir.path().join("sub")).unwrap();
        fs::write(input_dir.path().join("top.csv"), "x\n1\n").unwrap();
        fs::write(input_dir.path().join("sub/deep.csv"), "x\n2\n").unwrap();

        let output_dir = tempdir().unwrap();
        let (success, _, _) = run_csvconv(&[
            input_dir.path().to_str().unwrap(),
            "-o",
            output_dir.path().to_str().unwrap(),
            "--quiet",
        ]);

        assert!(success);
        assert!(output_dir.path().join("top.json").exists());
        assert!(!output_dir.path().join("sub/deep.json").exists());
    }
}
