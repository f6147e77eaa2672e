//! Copy-selection: plain text of the chars touched by a rectangle.

use crate::error::SelectionError;
use crate::geometry::BBox;
use crate::text::TextPage;

/// Replacement for control characters (code points below 32) in copied text.
pub const CONTROL_PLACEHOLDER: char = '?';

/// Extract the text of every char touched by `rect`, in document order.
///
/// A `'\n'` is written before a span when the previous span emitted text and
/// was the last span of its line. Nothing is written after the final span,
/// but the break itself is not deferred: if the span after an emitting line
/// contributes no text, the output still ends with `'\n'`. Control
/// characters are replaced by [`CONTROL_PLACEHOLDER`].
///
/// # Errors
///
/// Returns [`SelectionError::OutOfMemory`] if the output buffer cannot grow.
pub fn copy_selection(page: &TextPage, rect: BBox) -> Result<String, SelectionError> {
    let mut out = String::new();
    let mut pending_break = false;

    for line in page.lines() {
        let span_count = line.spans.len();
        for (span_num, span) in line.spans.iter().enumerate() {
            if pending_break {
                push_char(&mut out, '\n')?;
            }

            let mut seen = false;
            for ch in &span.chars {
                if ch.bbox.touches(&rect) {
                    let c = if (ch.c as u32) < 32 {
                        CONTROL_PLACEHOLDER
                    } else {
                        ch.c
                    };
                    push_char(&mut out, c)?;
                    seen = true;
                }
            }

            pending_break = seen && span_num + 1 == span_count;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(?rect, bytes = out.len(), "copy_selection");

    Ok(out)
}

fn push_char(out: &mut String, c: char) -> Result<(), SelectionError> {
    out.try_reserve(c.len_utf8())?;
    out.push(c);
    Ok(())
}
