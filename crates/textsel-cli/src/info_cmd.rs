use std::path::Path;

use crate::cli::TextFormat;
use crate::shared::{open_document, print_json};

pub fn run(file: &Path, format: &TextFormat) -> Result<(), i32> {
    let doc = open_document(file)?;

    match format {
        TextFormat::Text => {
            println!("Pages: {}", doc.page_count());
            for (idx, page) in doc.pages().iter().enumerate() {
                let text = page.text_page();
                println!(
                    "Page {}: {:.2} x {:.2}, {} blocks, {} lines, {} chars",
                    idx + 1,
                    page.width(),
                    page.height(),
                    text.blocks.len(),
                    text.line_count(),
                    text.char_count(),
                );
            }
            Ok(())
        }
        TextFormat::Json => {
            let pages: Vec<serde_json::Value> = doc
                .pages()
                .iter()
                .enumerate()
                .map(|(idx, page)| {
                    let text = page.text_page();
                    serde_json::json!({
                        "page": idx + 1,
                        "width": page.width(),
                        "height": page.height(),
                        "blocks": text.blocks.len(),
                        "lines": text.line_count(),
                        "chars": text.char_count(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "page_count": doc.page_count(),
                "pages": pages,
            }))
        }
    }
}
