use super::*;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
}

fn exts(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn test_discover_filters_extensions() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/api.ts");
    touch(temp.path(), "src/App.tsx");
    touch(temp.path(), "src/style.css");
    touch(temp.path(), "src/legacy.JS");

    let files = discover_files(&[temp.path().join("src")], &exts(&["ts", ".tsx"]), &[]);
    assert_eq!(relative(temp.path(), &files), vec!["src/App.tsx", "src/api.ts"]);
}

#[test]
fn test_discover_skips_default_and_configured_dirs() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/ok.ts");
    touch(temp.path(), "src/node_modules/pkg/index.ts");
    touch(temp.path(), "src/dist/bundle.ts");
    touch(temp.path(), "src/.next/server.ts");
    touch(temp.path(), "src/generated/client.ts");

    let files = discover_files(
        &[temp.path().join("src")],
        &exts(&["ts"]),
        &["generated".to_string()],
    );
    assert_eq!(relative(temp.path(), &files), vec!["src/ok.ts"]);
}

#[test]
fn test_excluded_name_as_root_is_still_walked() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "build/routes.ts");
    let files = discover_files(&[temp.path().join("build")], &exts(&["ts"]), &[]);
    assert_eq!(files.len(), 1);
}

#[test]
fn test_overlapping_roots_deduplicated() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/routes/cv.ts");
    let files = discover_files(
        &[temp.path().join("src"), temp.path().join("src/routes")],
        &exts(&["ts"]),
        &[],
    );
    assert_eq!(relative(temp.path(), &files), vec!["src/routes/cv.ts"]);
}

#[test]
fn test_missing_root_yields_nothing() {
    let temp = TempDir::new().unwrap();
    let files = discover_files(&[temp.path().join("nope")], &exts(&["ts"]), &[]);
    assert!(files.is_empty());
}
