//! Fixture-driven keyword tests. Every file under `tests/suite/` holds an
//! array of groups `{description, schema, tests: [{description, data, valid}]}`;
//! each group's schema is compiled once and every test instance is checked
//! against it.
use schemapool::Context;
use serde_json::Value;
use std::{fs, path::PathBuf};

fn load_file(path: &PathBuf) -> Value {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|error| panic!("cannot read {}: {}", path.display(), error));
    serde_json::from_str(&content)
        .unwrap_or_else(|error| panic!("cannot parse {}: {}", path.display(), error))
}

fn run_file(path: &PathBuf) {
    let document = load_file(path);
    let groups = document
        .as_array()
        .unwrap_or_else(|| panic!("{} must hold an array of groups", path.display()));
    for group in groups {
        let description = group["description"].as_str().unwrap_or("<group>");
        let schema = &group["schema"];

        let mut context = Context::new();
        let root = context.compile_value(schema).unwrap_or_else(|error| {
            panic!("{}: '{}': schema failed to compile: {}", path.display(), description, error)
        });
        context.resolve_refs(root).unwrap_or_else(|error| {
            panic!("{}: '{}': refs failed to resolve: {}", path.display(), description, error)
        });
        context.set_root(root);

        let tests = group["tests"]
            .as_array()
            .unwrap_or_else(|| panic!("'{}' has no tests array", description));
        for test in tests {
            let case = test["description"].as_str().unwrap_or("<case>");
            let expected = test["valid"]
                .as_bool()
                .unwrap_or_else(|| panic!("'{}'/'{}' has no validity flag", description, case));
            let result = context.validate_value(&test["data"], root);
            assert_eq!(
                result.is_ok(),
                expected,
                "{}: '{}': '{}': got {:?}, expected valid={}",
                path.display(),
                description,
                case,
                result,
                expected
            );
        }
    }
}

#[test]
fn suite_files_pass() {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("tests/suite");
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .expect("tests/suite must exist")
        .map(|entry| entry.expect("readable dir entry").path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixture files found");
    for path in &paths {
        run_file(path);
    }
}
