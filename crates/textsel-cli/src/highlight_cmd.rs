use std::path::Path;

use textsel::HitOptions;

use crate::cli::OutputFormat;
use crate::shared::{open_document, print_json, rect_json, resolve_pages, resolve_rect};

pub fn run(
    file: &Path,
    rect: &str,
    pages: Option<&str>,
    max_hits: usize,
    format: &OutputFormat,
) -> Result<(), i32> {
    let selection = resolve_rect(rect)?;
    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;
    let opts = HitOptions { max_hits };

    let mut rows = Vec::new();
    for &idx in &page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;
        rows.extend(
            page.highlight(selection, &opts)
                .into_iter()
                .map(|bbox| (idx + 1, bbox)),
        );
    }

    match format {
        OutputFormat::Text => {
            println!("page\tx0\ttop\tx1\tbottom");
            for (page, b) in &rows {
                println!(
                    "{page}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
                    b.x0, b.top, b.x1, b.bottom
                );
            }
            Ok(())
        }
        OutputFormat::Json => {
            let values = rows.iter().map(|(page, b)| rect_json(*page, b)).collect();
            print_json(&serde_json::Value::Array(values))
        }
        OutputFormat::Csv => {
            println!("page,x0,top,x1,bottom");
            for (page, b) in &rows {
                println!(
                    "{page},{:.2},{:.2},{:.2},{:.2}",
                    b.x0, b.top, b.x1, b.bottom
                );
            }
            Ok(())
        }
    }
}
