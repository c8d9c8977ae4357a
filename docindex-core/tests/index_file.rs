use std::fs;

use docindex_core::config::RewriteRule;
use docindex_core::index_file::IndexFile;
use docindex_core::rewrite::Rewriter;
use tempfile::tempdir;

#[test]
fn create_truncates_and_append_extends() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, "old content that is longer than the new one").unwrap();

    let mut index = IndexFile::create(&path, "one\n").unwrap();
    index.append("two\n").unwrap();
    index.append("three\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\nthree\n");
    assert_eq!(index.size().unwrap(), 14);
}

#[test]
fn rewrite_edits_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    let mut index = IndexFile::create(&path, "<a href=\"/src/target/x.go\">x</a>\n").unwrap();

    let rewriter =
        Rewriter::compile(&[RewriteRule::literal("/src/target", "https://example.org/")]).unwrap();
    let counts = index.rewrite(&rewriter).unwrap();

    assert_eq!(counts[0].replacements, 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<a href=\"https://example.org//x.go\">x</a>\n"
    );
    // Only the target remains; the temporary file was renamed over it.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);

    index.append("tail\n").unwrap();
    assert!(fs::read_to_string(&path).unwrap().ends_with("</a>\ntail\n"));
}

#[test]
fn rewrite_without_matches_is_a_no_op() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    let mut index = IndexFile::create(&path, "nothing here\n").unwrap();

    let rewriter = Rewriter::compile(&[RewriteRule::literal("absent", "present")]).unwrap();
    let counts = index.rewrite(&rewriter).unwrap();

    assert_eq!(counts[0].replacements, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "nothing here\n");
}

#[test]
fn rewrite_keeps_invalid_utf8_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("index.html");
    fs::write(&path, b"\xff/src/target\xfe\n").unwrap();
    let mut index = IndexFile::open(&path).unwrap();

    let rewriter = Rewriter::compile(&[RewriteRule::literal("/src/target", "/x")]).unwrap();
    let counts = index.rewrite(&rewriter).unwrap();

    assert_eq!(counts[0].replacements, 1);
    assert_eq!(fs::read(&path).unwrap(), b"\xff/x\xfe\n".to_vec());
}

#[test]
fn open_requires_an_existing_file() {
    let dir = tempdir().unwrap();
    assert!(IndexFile::open(dir.path().join("missing.html")).is_err());
    assert!(IndexFile::open(dir.path()).is_err());

    let path = dir.path().join("page.html");
    fs::write(&path, "x").unwrap();
    let index = IndexFile::open(&path).unwrap();
    assert_eq!(index.path(), path.as_path());
}

#[test]
fn create_does_not_make_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc").join("index.html");
    assert!(IndexFile::create(&path, "x").is_err());
    assert!(!dir.path().join("doc").exists());
}
