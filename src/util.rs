use ratatui::buffer::{Buffer, Cell};

/// Convert the contents of a rendered buffer into lines of text, one per row,
/// with trailing whitespace removed
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let width = usize::from(buf.area.width);
    if width == 0 {
        return Vec::new();
    }
    buf.content
        .chunks(width)
        .map(|row| {
            let mut line = row.iter().map(Cell::symbol).collect::<String>();
            line.truncate(line.trim_end().len());
            line
        })
        .collect()
}
