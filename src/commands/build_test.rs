use super::*;
use tempfile::TempDir;

#[test]
fn write_site_emits_page_and_stylesheets() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");

    write_site(&out, "<!DOCTYPE html>\n").unwrap();

    assert!(out.join("index.html").exists());
    for (file, _) in STYLESHEETS {
        assert!(out.join("css").join(file).exists(), "missing css/{}", file);
    }
}

#[test]
fn write_site_overwrites_previous_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("site");

    write_site(&out, "v1").unwrap();
    write_site(&out, "v2").unwrap();

    assert_eq!(
        std::fs::read_to_string(out.join("index.html")).unwrap(),
        "v2"
    );
}
