use std::path::{Path, PathBuf};

use bridge_diagnostic::emitter::ColorMode;
use bridge_gen::GenProblem;
use pretty_assertions::assert_eq;

use super::{parse_generate_options, run_generate, summary, GenerateOptions};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

const MODEL: &str = r#"{
  "declarations": [
    {
      "name": "app.di.MainScope",
      "kind": "class",
      "supertypes": ["bridgegen.runtime.ScopeProvider"],
      "annotations": { "exported_scope_provider": true }
    },
    {
      "name": "app.Repo",
      "kind": "class",
      "members": [{ "name": "refresh", "suspend": true }],
      "annotations": {
        "native_class": { "launch_on_scope": "app.di.MainScope" },
        "native_interface": {}
      }
    }
  ]
}"#;

fn write_model(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("model.json");
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_parse_defaults() {
    let options = parse_generate_options(&[]);
    assert_eq!(options, GenerateOptions::default());
    assert_eq!(options.out_dir, PathBuf::from("generated"));
    assert_eq!(options.config(), bridge_gen::GenConfig::default());
}

#[test]
fn test_parse_all_flags() {
    let options = parse_generate_options(&args(&[
        "--out=build/gen",
        "--class-suffix=Bridge",
        "--interface-suffix=Contract",
        "--runtime-package=com.acme.rt",
        "--dry-run",
        "--color=never",
    ]));
    assert_eq!(options.out_dir, PathBuf::from("build/gen"));
    assert!(options.dry_run);
    assert_eq!(options.color, ColorMode::Never);

    let config = options.config();
    assert_eq!(config.class_suffix, "Bridge");
    assert_eq!(config.interface_suffix, "Contract");
    assert_eq!(config.runtime.package, "com.acme.rt");
    assert_eq!(config.runtime.suspend_wrapper, "SuspendWrapper");
}

#[test]
fn test_invalid_values_keep_defaults() {
    let options = parse_generate_options(&args(&["--color=sometimes", "--class-suffix=", "--bogus"]));
    assert_eq!(options.color, ColorMode::Auto);
    assert_eq!(options.class_suffix, None);
}

#[test]
fn test_run_generate_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(dir.path(), MODEL);
    let options = GenerateOptions {
        out_dir: dir.path().join("out"),
        ..GenerateOptions::default()
    };

    let report = run_generate(&model, &options).unwrap();
    assert_eq!(report.paths.len(), 3);
    assert!(report.paths.iter().all(|p| p.is_file()));
    assert!(options.out_dir.join("app/RepoNative.kt").is_file());
    assert!(options.out_dir.join("app/RepoNativeProtocol.kt").is_file());
    assert!(options
        .out_dir
        .join("app/di/exportedScopeProvider_mainScope.kt")
        .is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(dir.path(), MODEL);
    let options = GenerateOptions {
        out_dir: dir.path().join("out"),
        dry_run: true,
        ..GenerateOptions::default()
    };

    let report = run_generate(&model, &options).unwrap();
    assert_eq!(report.paths.len(), 3);
    assert!(!options.out_dir.exists());
    assert_eq!(
        summary(&report, &options),
        format!(
            "would generate 3 files (1 accessor, 1 interface, 1 class) in {}",
            options.out_dir.display()
        )
    );
}

#[test]
fn test_failed_generation_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_model(
        dir.path(),
        r#"{"declarations":[
            {"name":"app.Ok","kind":"interface","annotations":{"native_interface":{}}},
            {"name":"app.Repo","kind":"class",
             "annotations":{"native_class":{"launch_on_scope":"app.Missing"}}}
        ]}"#,
    );
    let options = GenerateOptions {
        out_dir: dir.path().join("out"),
        ..GenerateOptions::default()
    };

    let err = run_generate(&model, &options).unwrap_err();
    assert!(matches!(err, GenProblem::UnknownScopeProvider { .. }));
    assert!(!options.out_dir.exists());
}

#[test]
fn test_missing_model() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_generate(&dir.path().join("nope.json"), &GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, GenProblem::ModelLoad { .. }));
}
