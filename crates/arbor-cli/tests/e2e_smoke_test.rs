use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use arbor_cli::{Args, Command, run};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Collects all files with `extension` from a directory
fn collect_files(dir: PathBuf, extension: &str) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension)
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn layout_args(input: &Path, output: &Path, save: Option<&Path>, response: bool) -> Args {
    Args {
        command: Command::Layout {
            input: input.to_string_lossy().to_string(),
            output: output.to_string_lossy().to_string(),
            save: save.map(|p| p.to_string_lossy().to_string()),
            response,
        },
        config: None,
        log_level: "off".to_string(),
    }
}

fn output_path(dir: &Path, input: &Path, extension: &str) -> PathBuf {
    dir.join(format!(
        "{}.{extension}",
        input.file_stem().unwrap().to_string_lossy()
    ))
}

#[test]
fn e2e_smoke_test_valid_trees() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let trees = collect_files(fixtures_dir().join("trees"), "json");

    assert!(!trees.is_empty(), "No tree fixtures found");

    let mut failed = Vec::new();

    for tree_path in &trees {
        let svg_path = output_path(temp_dir.path(), tree_path, "svg");
        let args = layout_args(tree_path, &svg_path, None, false);

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&svg_path).expect("SVG was not written");
                assert!(svg.contains("<svg"), "{} is not SVG", svg_path.display());
            }
            Err(e) => failed.push((tree_path.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nTree fixtures that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} tree fixture(s) failed unexpectedly", failed.len());
    }

    println!("✅ All {} tree fixtures passed", trees.len());
}

#[test]
fn e2e_smoke_test_responses() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let responses = collect_files(fixtures_dir().join("responses"), "txt");

    assert!(!responses.is_empty(), "No response fixtures found");

    for response_path in &responses {
        let svg_path = output_path(temp_dir.path(), response_path, "svg");

        // The prose around the fence is not JSON on its own.
        let as_tree = layout_args(response_path, &svg_path, None, false);
        assert!(run(&as_tree).is_err());

        let as_response = layout_args(response_path, &svg_path, None, true);
        run(&as_response).unwrap_or_else(|e| panic!("{}: {e}", response_path.display()));
        assert!(svg_path.exists());
    }
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let errors = collect_files(fixtures_dir().join("errors"), "json");

    assert!(!errors.is_empty(), "No error fixtures found");

    let mut unexpectedly_succeeded = Vec::new();

    for error_path in &errors {
        let svg_path = output_path(temp_dir.path(), error_path, "svg");
        let args = layout_args(error_path, &svg_path, None, false);

        if run(&args).is_ok() {
            unexpectedly_succeeded.push(error_path.clone());
        }
        assert!(!svg_path.exists(), "no SVG is written for invalid input");
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_save_then_render() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let tree_path = fixtures_dir().join("trees").join("rust.json");
    let first_svg = temp_dir.path().join("first.svg");
    let map_path = temp_dir.path().join("rust.map.json");

    run(&layout_args(&tree_path, &first_svg, Some(&map_path), false)).unwrap();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&map_path).unwrap()).unwrap();
    assert_eq!(saved["nodes"].as_array().unwrap().len(), 14);
    assert_eq!(saved["connections"].as_array().unwrap().len(), 13);
    assert_eq!(saved["root"], 0);

    let second_svg = temp_dir.path().join("second.svg");
    let render = Args {
        command: Command::Render {
            map: map_path.to_string_lossy().to_string(),
            output: second_svg.to_string_lossy().to_string(),
        },
        config: None,
        log_level: "off".to_string(),
    };
    run(&render).unwrap();

    assert_eq!(
        fs::read_to_string(&first_svg).unwrap(),
        fs::read_to_string(&second_svg).unwrap()
    );
}

#[test]
fn e2e_config_file_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[style]\nbackground_color = \"#102030\"\nconnector = \"straight\"\n",
    )
    .unwrap();

    let tree_path = fixtures_dir().join("trees").join("rust.json");
    let svg_path = temp_dir.path().join("styled.svg");
    let mut args = layout_args(&tree_path, &svg_path, None, false);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).unwrap();

    let svg = fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("fill=\"#102030\""));
    assert!(!svg.contains(" Q "));
}

#[test]
fn e2e_invalid_layout_config_stops_before_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[layout]\nmin_node_distance = nan\n").unwrap();

    let tree_path = fixtures_dir().join("trees").join("rust.json");
    let svg_path = temp_dir.path().join("never.svg");
    let mut args = layout_args(&tree_path, &svg_path, None, false);
    args.config = Some(config_path.to_string_lossy().to_string());

    let err = run(&args).unwrap_err();
    assert!(
        matches!(&err, arbor::ArborError::Config(msg) if msg.contains("min_node_distance")),
        "unexpected error: {err}"
    );
    assert!(!svg_path.exists());
}

#[test]
fn e2e_missing_input_is_an_io_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = layout_args(
        &temp_dir.path().join("absent.json"),
        &temp_dir.path().join("absent.svg"),
        None,
        false,
    );

    assert!(matches!(run(&args), Err(arbor::ArborError::Io(_))));
}
