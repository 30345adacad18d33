//! End-to-end generation tests over real temporary trees.

use std::fs;
use std::path::Path;

use barrelgen_core::Generator;
use tempfile::TempDir;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "export const placeholder = 0;\n").unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

#[test]
fn generates_subdirectory_and_root_barrels() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/login.ts"));
    touch(&root.join("auth/login.client.ts"));
    touch(&root.join("data-io/reader.ts"));
    fs::write(root.join("data-io/index.ts"), "// stale\n").unwrap();

    let report = Generator::new(root).generate().unwrap();

    assert_eq!(report.modules, vec!["auth".to_string(), "data-io".to_string()]);
    assert_eq!(report.root_barrel, root.join("index.ts"));

    assert_eq!(read(root, "auth/index.ts"), "export * from './login';\n");
    assert_eq!(read(root, "data-io/index.ts"), "export * from './reader';\n");

    let expected_root = "\
// This file is generated automatically. Do not edit it manually.

// auth
export * as auth from './auth';

// data-io
export * as data_io from './data-io';
";
    assert_eq!(read(root, "index.ts"), expected_root);
}

#[test]
fn nested_modules_use_forward_slash_relative_paths() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/forms/reset.ts"));
    touch(&root.join("auth/login.ts"));

    Generator::new(root).generate().unwrap();

    assert_eq!(
        read(root, "auth/index.ts"),
        "export * from './forms/reset';\nexport * from './login';\n"
    );
}

#[test]
fn barrel_files_are_never_re_exported() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/login.ts"));
    touch(&root.join("auth/forms/widget.ts"));
    fs::write(root.join("auth/forms/index.ts"), "// hand-written\n").unwrap();

    Generator::new(root).generate().unwrap();

    let barrel = read(root, "auth/index.ts");
    assert_eq!(
        barrel,
        "export * from './forms/widget';\nexport * from './login';\n"
    );
    assert!(!barrel.contains("index"));
}

#[test]
fn client_only_modules_are_never_re_exported() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/login.ts"));
    touch(&root.join("auth/session.client.ts"));
    touch(&root.join("auth/forms/upload.client.ts"));

    Generator::new(root).generate().unwrap();

    let barrel = read(root, "auth/index.ts");
    assert_eq!(barrel, "export * from './login';\n");
    assert!(!barrel.contains("client"));
}

#[test]
fn empty_subdirectory_still_gets_a_barrel() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir(root.join("empty")).unwrap();
    touch(&root.join("auth/login.ts"));

    Generator::new(root).generate().unwrap();

    assert_eq!(read(root, "empty/index.ts"), "");

    let root_index = read(root, "index.ts");
    assert!(root_index.contains("export * as empty from './empty';"));
}

#[test]
fn runs_are_idempotent_on_an_unchanged_tree() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/login.ts"));
    touch(&root.join("data-io/reader.ts"));

    Generator::new(root).generate().unwrap();
    let first = (
        read(root, "index.ts"),
        read(root, "auth/index.ts"),
        read(root, "data-io/index.ts"),
    );

    Generator::new(root).generate().unwrap();
    let second = (
        read(root, "index.ts"),
        read(root, "auth/index.ts"),
        read(root, "data-io/index.ts"),
    );

    assert_eq!(first, second);
}

#[test]
fn missing_root_scans_as_empty() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("no-such-root");

    let dirs = barrelgen_core::find_directories(&missing).unwrap();
    assert!(dirs.is_empty());

    // A full run still completes, leaving only the header in the root barrel.
    let report = Generator::new(&missing).generate().unwrap();
    assert!(report.modules.is_empty());
    assert_eq!(
        fs::read_to_string(report.root_barrel).unwrap(),
        format!("{}\n", barrelgen_core::GENERATED_HEADER)
    );
}

#[test]
fn preview_matches_what_generate_writes() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/login.ts"));
    touch(&root.join("data-io/reader.ts"));

    let previews = Generator::new(root).preview().unwrap();
    Generator::new(root).generate().unwrap();

    assert_eq!(previews.len(), 3);
    for preview in &previews {
        assert_eq!(read(root, &preview.path), preview.content);
    }
}

#[test]
fn preview_does_not_touch_the_filesystem() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("auth/login.ts"));

    Generator::new(root).preview().unwrap();

    assert!(!root.join("index.ts").exists());
    assert!(!root.join("auth/index.ts").exists());
}

#[test]
fn root_barrel_has_one_line_per_subdirectory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    touch(&root.join("alpha/a.ts"));
    touch(&root.join("beta/b.ts"));
    touch(&root.join("gamma-ray/c.ts"));

    Generator::new(root).generate().unwrap();

    let root_index = read(root, "index.ts");
    let namespace_lines: Vec<_> = root_index
        .lines()
        .filter(|line| line.starts_with("export * as "))
        .collect();
    assert_eq!(
        namespace_lines,
        vec![
            "export * as alpha from './alpha';",
            "export * as beta from './beta';",
            "export * as gamma_ray from './gamma-ray';",
        ]
    );
}
