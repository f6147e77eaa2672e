//! Shared fixtures for CLI integration tests.

use std::io::Write;

use assert_cmd::Command;
use textsel::{Document, Page, TextPage};

pub fn cmd() -> Command {
    Command::cargo_bin("textsel").unwrap()
}

/// Page 1: "Hello  World" / "second line"; page 2: "hello again".
///
/// Characters are 10 units wide starting at x=0; lines are 20 units apart.
pub fn sample_document() -> Document {
    let mut b = TextPage::builder();
    b.block();
    b.line().push_str("Hello  World", 0.0, 0.0, 10.0, 12.0);
    b.line().push_str("second line", 0.0, 20.0, 10.0, 12.0);
    let first = Page::new(0, 612.0, 792.0, b.build());

    let mut b = TextPage::builder();
    b.line().push_str("hello again", 0.0, 0.0, 10.0, 12.0);
    let second = Page::new(1, 612.0, 792.0, b.build());

    Document::new(vec![first, second])
}

/// Write `doc` as JSON into a temp file that lives as long as the handle.
pub fn document_file(doc: &Document) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(doc.to_json_string().unwrap().as_bytes())
        .unwrap();
    tmp
}
