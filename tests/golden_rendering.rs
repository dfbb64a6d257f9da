use std::fs;
use std::path::PathBuf;

use dicthtml::{document_digest, render_page, PageDescription};
use pretty_assertions::assert_eq;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_document_matches_fixture() {
    let source = fs::read_to_string("tests/goldens/pages/page1.json").expect("read fixture");
    let page = PageDescription::from_json_str(&source).expect("parse fixture");
    let html = render_page(&page).expect("render fixture");
    let digest = document_digest(&html);

    let expected_path = golden_path("page1.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        fs::write(golden_path("page1.html"), &html).expect("write golden document");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let document_path = golden_path("page1.html");
    if document_path.exists() {
        let expected_html = fs::read_to_string(&document_path).expect("unable to read golden document");
        assert_eq!(html, expected_html);
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}

#[test]
fn golden_digest_is_stable_across_renders() {
    let source = fs::read_to_string("tests/goldens/pages/page1.json").expect("read fixture");
    let page = PageDescription::from_json_str(&source).expect("parse fixture");
    let first = document_digest(&render_page(&page).unwrap());
    let second = document_digest(&render_page(&page).unwrap());
    assert_eq!(first, second);
    assert_eq!(first.len(), 64);
}
