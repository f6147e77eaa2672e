use std::path::Path;

use crate::cli::TextFormat;
use crate::shared::{open_document, print_json, resolve_pages, resolve_rect};

pub fn run(
    file: &Path,
    rect: Option<&str>,
    pages: Option<&str>,
    format: &TextFormat,
) -> Result<(), i32> {
    let selection = rect.map(resolve_rect).transpose()?;
    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;

    let mut texts = Vec::with_capacity(page_indices.len());
    for &idx in &page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;
        let text = page
            .copy_selection(selection.unwrap_or_else(|| page.bbox()))
            .map_err(|e| {
                eprintln!("Error: page {}: {e}", idx + 1);
                1
            })?;
        texts.push((idx + 1, text));
    }

    match format {
        TextFormat::Text => {
            for (i, (page, text)) in texts.iter().enumerate() {
                if page_indices.len() > 1 {
                    if i > 0 {
                        println!();
                    }
                    println!("--- Page {page} ---");
                }
                println!("{text}");
            }
            Ok(())
        }
        TextFormat::Json => {
            let values = texts
                .iter()
                .map(|(page, text)| serde_json::json!({ "page": page, "text": text }))
                .collect();
            print_json(&serde_json::Value::Array(values))
        }
    }
}
