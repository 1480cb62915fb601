//! Reusable TUI components

mod text_area;
mod text_input;

pub use text_area::TextArea;
pub use text_input::TextInput;

/// First visible column when a box `width` columns wide must keep `cursor` in view
fn scroll_offset(cursor: usize, width: usize) -> usize {
    cursor.saturating_sub(width.saturating_sub(1))
}

/// Up to `width` characters of `text`, starting at character column `start`
fn visible_slice(text: &str, start: usize, width: usize) -> &str {
    let from = byte_offset(text, start);
    let rest = &text[from..];
    &rest[..byte_offset(rest, width)]
}

/// Byte offset of character column `col`, or the end of the string
fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Screen position `offset` cells past `origin`, pinned to the terminal range
fn screen_offset(origin: u16, offset: usize) -> u16 {
    origin.saturating_add(u16::try_from(offset).unwrap_or(u16::MAX))
}
