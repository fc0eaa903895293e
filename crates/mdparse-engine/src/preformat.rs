//! Canonicalizes raw input before any grammar pass sees it.

use crate::element::CHUNK_DELIMITER;

pub const TAB_STOP: usize = 4;

/// Expands tabs to the next multiple-of-four column and appends a blank line.
///
/// The column counter resets after every `\n` and advances by one per
/// character. The trailing `"\n\n"` guarantees the last block is followed by a
/// blank line. Any [`CHUNK_DELIMITER`] already present in the input is
/// replaced with U+FFFD so it cannot be mistaken for a list-chunk boundary.
pub fn preformat_text(text: &str) -> String {
    let mut buffer = String::with_capacity(text.len() + 2);
    let mut column = 0usize;

    for ch in text.chars() {
        match ch {
            '\t' => {
                let width = TAB_STOP - column % TAB_STOP;
                buffer.extend(std::iter::repeat_n(' ', width));
                column += width;
            }
            '\n' => {
                buffer.push('\n');
                column = 0;
            }
            CHUNK_DELIMITER => {
                buffer.push(char::REPLACEMENT_CHARACTER);
                column += 1;
            }
            other => {
                buffer.push(other);
                column += 1;
            }
        }
    }

    buffer.push_str("\n\n");
    buffer
}
