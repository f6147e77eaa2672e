use std::path::Path;

use textsel::{BBox, Document};

use crate::cli::OutputFormat;
use crate::shared::{csv_escape, open_document, print_json, resolve_pages};

/// One output row: the matched page text and one of its hit rectangles.
struct Hit {
    page: usize,
    text: String,
    bbox: BBox,
}

pub fn run(
    file: &Path,
    needle: &str,
    pages: Option<&str>,
    max_hits: usize,
    format: &OutputFormat,
) -> Result<(), i32> {
    let doc = open_document(file)?;
    let page_indices = resolve_pages(pages, doc.page_count())?;
    let hits = collect_hits(&doc, &page_indices, needle, max_hits)?;

    match format {
        OutputFormat::Text => {
            println!("page\ttext\tx0\ttop\tx1\tbottom");
            for h in &hits {
                println!(
                    "{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
                    h.page, h.text, h.bbox.x0, h.bbox.top, h.bbox.x1, h.bbox.bottom,
                );
            }
            Ok(())
        }
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = hits
                .iter()
                .map(|h| {
                    serde_json::json!({
                        "page": h.page,
                        "text": h.text,
                        "x0": h.bbox.x0,
                        "top": h.bbox.top,
                        "x1": h.bbox.x1,
                        "bottom": h.bbox.bottom,
                    })
                })
                .collect();
            print_json(&serde_json::Value::Array(rows))
        }
        OutputFormat::Csv => {
            println!("page,text,x0,top,x1,bottom");
            for h in &hits {
                println!(
                    "{},{},{:.2},{:.2},{:.2},{:.2}",
                    h.page,
                    csv_escape(&h.text),
                    h.bbox.x0,
                    h.bbox.top,
                    h.bbox.x1,
                    h.bbox.bottom,
                );
            }
            Ok(())
        }
    }
}

/// Gather hit rectangles page by page, keeping at most `max_hits` per page in
/// the same order the capped search would return them.
fn collect_hits(
    doc: &Document,
    page_indices: &[usize],
    needle: &str,
    max_hits: usize,
) -> Result<Vec<Hit>, i32> {
    let mut hits = Vec::new();

    for &idx in page_indices {
        let page = doc.page(idx).map_err(|e| {
            eprintln!("Error reading page {}: {e}", idx + 1);
            1
        })?;

        let rows = page
            .search_matches(needle)
            .into_iter()
            .flat_map(|m| {
                let text = m.text;
                m.rects.into_iter().map(move |bbox| Hit {
                    page: idx + 1,
                    text: text.clone(),
                    bbox,
                })
            })
            .take(max_hits);
        hits.extend(rows);
    }

    Ok(hits)
}
