//!
//! Builds the text that would result from an edit.
//!

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Returns the text after replacing the selection with `input`.
///
/// All positions count grapheme clusters, as the text widgets do.
///
/// * The selection is removed first, clamped to the text.
/// * `input` is inserted at `caret`, which is interpreted in the text
///   *after* the removal and clamped to its length.
///
/// Usually the caret is the start of the selection.
pub fn candidate_text(text: &str, selection: Range<usize>, caret: usize, input: &str) -> String {
    let graphemes = text.graphemes(true).collect::<Vec<_>>();
    let len = graphemes.len();

    let sel_start = selection.start.min(len);
    let sel_len = selection.end.saturating_sub(selection.start);
    let sel_len = sel_len.min(len - sel_start);

    let remaining = graphemes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i < sel_start || *i >= sel_start + sel_len)
        .map(|(_, g)| *g)
        .collect::<Vec<_>>();

    let caret = caret.min(remaining.len());

    let mut buf = String::with_capacity(text.len() + input.len());
    for g in &remaining[..caret] {
        buf.push_str(g);
    }
    buf.push_str(input);
    for g in &remaining[caret..] {
        buf.push_str(g);
    }
    buf
}
