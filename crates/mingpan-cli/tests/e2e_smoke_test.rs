use std::{fs, path::PathBuf};

use tempfile::tempdir;

use mingpan_cli::Args;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args_for(input: &PathBuf, output: &PathBuf, config: Option<PathBuf>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: config.map(|path| path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_demos = collect_json_files(demos_dir());
    assert!(!valid_demos.is_empty(), "No valid demos found in demos/");

    let mut failed_demos = Vec::new();

    for demo_path in &valid_demos {
        let output_filename = format!(
            "{}.png",
            demo_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match mingpan_cli::run(&args_for(demo_path, &output_path, None)) {
            Ok(()) => {
                let png = fs::read(&output_path).expect("Output file should exist");
                assert!(png.starts_with(b"\x89PNG"), "{} is not a PNG", output_path.display());
            }
            Err(e) => failed_demos.push((demo_path.clone(), e)),
        }
    }

    if !failed_demos.is_empty() {
        eprintln!("\nValid demos that failed:");
        for (path, err) in &failed_demos {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid demo(s) failed unexpectedly", failed_demos.len());
    }

    println!("✅ All {} valid demos passed", valid_demos.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_demos = collect_json_files(demos_dir().join("errors"));
    assert!(!error_demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_passed = Vec::new();

    for demo_path in &error_demos {
        let output_path = temp_dir.path().join("error.png");

        if mingpan_cli::run(&args_for(demo_path, &output_path, None)).is_ok() {
            unexpectedly_passed.push(demo_path.clone());
        }
        assert!(!output_path.exists(), "No output should be written on error");
    }

    if !unexpectedly_passed.is_empty() {
        eprintln!("\nError demos that passed unexpectedly:");
        for path in &unexpectedly_passed {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) passed unexpectedly",
            unexpectedly_passed.len()
        );
    }
}

#[test]
fn e2e_smoke_test_with_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("themed.png");

    let args = args_for(
        &demos_dir().join("sample.json"),
        &output_path,
        Some(demos_dir().join("theme.toml")),
    );
    mingpan_cli::run(&args).expect("Themed render should succeed");

    assert!(output_path.exists());
}

#[test]
fn e2e_smoke_test_missing_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &temp_dir.path().join("absent.json"),
        &temp_dir.path().join("out.png"),
        None,
    );

    assert!(matches!(
        mingpan_cli::run(&args),
        Err(mingpan::MingpanError::Io(_))
    ));
}
