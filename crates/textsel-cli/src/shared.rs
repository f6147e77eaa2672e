use std::path::Path;

use textsel::{BBox, Document};

use crate::page_range::parse_page_range;

/// Open a document JSON file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or does not hold a valid document.
pub fn open_document(file: &Path) -> Result<Document, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    Document::from_json_file(file).map_err(|e| {
        eprintln!("Error: failed to open document: {e}");
        1
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// If `pages` is `None`, returns all pages (0..page_count).
/// If `pages` is `Some`, parses the range string and validates against page_count.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}

/// Parse a rectangle given as `x0,top,x1,bottom`.
pub fn parse_rect(input: &str) -> Result<BBox, String> {
    let coords = input
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("invalid coordinate: '{}'", part.trim()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    match coords.as_slice() {
        [x0, top, x1, bottom] => Ok(BBox::new(*x0, *top, *x1, *bottom)),
        _ => Err(format!(
            "rectangle needs 4 comma-separated values (x0,top,x1,bottom), got {}",
            coords.len()
        )),
    }
}

/// Like [`parse_rect`], printing the error and mapping it to exit code 1.
pub fn resolve_rect(input: &str) -> Result<BBox, i32> {
    parse_rect(input).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// JSON object for one rectangle on a 1-indexed page.
pub fn rect_json(page: usize, bbox: &BBox) -> serde_json::Value {
    serde_json::json!({
        "page": page,
        "x0": bbox.x0,
        "top": bbox.top,
        "x1": bbox.x1,
        "bottom": bbox.bottom,
    })
}

/// Print a JSON value on stdout, mapping serialization failure to exit code 1.
pub fn print_json(value: &serde_json::Value) -> Result<(), i32> {
    let json_str = serde_json::to_string(value).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

/// Install a stderr log subscriber.
///
/// With `verbose`, query summaries from the library are shown at debug level;
/// otherwise only warnings. `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    use std::io::IsTerminal;
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rect_valid() {
        assert_eq!(
            parse_rect("1,2.5,30,40").unwrap(),
            BBox::new(1.0, 2.5, 30.0, 40.0)
        );
        assert_eq!(
            parse_rect(" -5 , 0 , 10 , 20 ").unwrap(),
            BBox::new(-5.0, 0.0, 10.0, 20.0)
        );
    }

    #[test]
    fn parse_rect_wrong_arity() {
        let err = parse_rect("1,2,3").unwrap_err();
        assert!(err.contains("4 comma-separated values"));
    }

    #[test]
    fn parse_rect_bad_number() {
        let err = parse_rect("1,2,x,4").unwrap_err();
        assert_eq!(err, "invalid coordinate: 'x'");
    }

    #[test]
    fn resolve_rect_error_code() {
        assert_eq!(resolve_rect("nope").unwrap_err(), 1);
    }

    #[test]
    fn csv_escape_plain_text() {
        assert_eq!(csv_escape("hello"), "hello");
    }

    #[test]
    fn csv_escape_with_comma() {
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
    }

    #[test]
    fn csv_escape_with_quotes() {
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_escape_with_newline() {
        assert_eq!(csv_escape("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn rect_json_fields() {
        let v = rect_json(2, &BBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v["page"], 2);
        assert_eq!(v["x0"], 1.0);
        assert_eq!(v["bottom"], 4.0);
    }

    #[test]
    fn open_document_file_not_found() {
        let result = open_document(Path::new("/nonexistent/doc.json"));
        assert_eq!(result.unwrap_err(), 1);
    }

    #[test]
    fn resolve_pages_none_returns_all() {
        let pages = resolve_pages(None, 5).unwrap();
        assert_eq!(pages, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn resolve_pages_with_range() {
        let pages = resolve_pages(Some("1,3"), 5).unwrap();
        assert_eq!(pages, vec![0, 2]);
    }

    #[test]
    fn resolve_pages_invalid_range() {
        let result = resolve_pages(Some("0"), 5);
        assert_eq!(result.unwrap_err(), 1);
    }
}
