// crates/find_source_files/tests/walk.rs

use find_source_files::find_source_files;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, "int x;\n").unwrap();
}

#[test]
fn finds_recognised_files_recursively_in_order() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(root, "Makefile");
    touch(root, "kernel/kernel.c");
    touch(root, "kernel/utils.h");
    touch(root, "kernel/boot.S");
    touch(root, "kernel/linker.ld");
    touch(root, "kernel/README.md");
    touch(root, "scripts/build.sh");
    fs::create_dir_all(root.join("empty.c.d")).unwrap();

    let found = find_source_files(root).unwrap();
    let rel: Vec<String> = found
        .iter()
        .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(
        rel,
        vec![
            "Makefile",
            "kernel/boot.S",
            "kernel/kernel.c",
            "kernel/linker.ld",
            "kernel/utils.h",
        ]
    );
}

#[test]
fn directories_with_source_names_are_not_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("weird.c")).unwrap();
    assert!(find_source_files(dir.path()).unwrap().is_empty());
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(find_source_files(&missing).is_err());
}

#[cfg(unix)]
#[test]
fn links_to_source_files_are_found_but_linked_dirs_are_not_walked() {
    use std::os::unix::fs::symlink;

    let outside = TempDir::new().unwrap();
    touch(outside.path(), "real.c");
    touch(outside.path(), "lib/inner.c");

    let dir = TempDir::new().unwrap();
    let root = dir.path();
    touch(root, "main.c");
    symlink(outside.path().join("real.c"), root.join("secret.c")).unwrap();
    symlink(outside.path().join("lib"), root.join("linked.h")).unwrap();
    symlink(outside.path().join("lib"), root.join("vendor")).unwrap();

    let found = find_source_files(root).unwrap();
    assert_eq!(found, vec![root.join("main.c"), root.join("secret.c")]);
}

#[cfg(unix)]
#[test]
fn dangling_link_to_source_file_is_an_error() {
    use std::os::unix::fs::symlink;

    let dir = TempDir::new().unwrap();
    symlink(dir.path().join("gone.c"), dir.path().join("broken.c")).unwrap();
    assert!(find_source_files(dir.path()).is_err());
}
