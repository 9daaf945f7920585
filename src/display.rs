use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

/// A character grid a menu can print onto.
///
/// Coordinates are cells relative to the surface's top-left corner.
/// A `None` color leaves the cell's current color in place.
pub trait Surface {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    fn print_text(&mut self, x: u16, y: u16, text: &str, fg: Option<Color>, bg: Option<Color>);
}

impl Surface for Buffer {
    fn width(&self) -> u16 {
        self.area.width
    }

    fn height(&self) -> u16 {
        self.area.height
    }

    fn print_text(&mut self, x: u16, y: u16, text: &str, fg: Option<Color>, bg: Option<Color>) {
        if x >= self.area.width || y >= self.area.height {
            return;
        }

        let mut style = Style::default();
        if let Some(fg) = fg {
            style = style.fg(fg);
        }
        if let Some(bg) = bg {
            style = style.bg(bg);
        }

        let max_width = usize::from(self.area.width - x);
        self.set_stringn(self.area.x + x, self.area.y + y, text, max_width, style);
    }
}

/// An off-screen console that is drawn on, then pasted onto the frame
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    buffer: Buffer,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
        }
    }

    /// Resets every cell to a blank, default-colored space
    pub fn clear(&mut self) {
        self.buffer.reset();
    }

    #[must_use]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Symbols of one row, concatenated
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        (0..self.buffer.area.width)
            .filter_map(|x| self.buffer.cell((x, y)))
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }
}

impl Surface for Canvas {
    fn width(&self) -> u16 {
        self.buffer.area.width
    }

    fn height(&self) -> u16 {
        self.buffer.area.height
    }

    fn print_text(&mut self, x: u16, y: u16, text: &str, fg: Option<Color>, bg: Option<Color>) {
        self.buffer.print_text(x, y, text, fg, bg);
    }
}

/// Copies a canvas onto `target` with its top-left corner at `position`.
///
/// `position` is in the target's own cell coordinates, like every other
/// ratatui buffer position. Cells that would land outside the target's
/// area are dropped.
pub fn paste_onto(canvas: &Canvas, target: &mut Buffer, position: (u16, u16)) {
    let (left, top) = position;
    let source = canvas.buffer();

    for y in 0..source.area.height {
        for x in 0..source.area.width {
            let Some(cell) = source.cell((x, y)) else {
                continue;
            };
            let (Some(tx), Some(ty)) = (left.checked_add(x), top.checked_add(y)) else {
                continue;
            };
            if let Some(slot) = target.cell_mut((tx, ty)) {
                *slot = cell.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_text_with_colors() {
        let mut canvas = Canvas::new(10, 2);
        canvas.print_text(1, 1, "hi", Some(Color::Black), Some(Color::White));

        assert_eq!(canvas.row_text(1), " hi       ");
        let cell = canvas.buffer().cell((1, 1)).unwrap();
        assert_eq!(cell.fg, Color::Black);
        assert_eq!(cell.bg, Color::White);
    }

    #[test]
    fn test_print_text_default_colors_untouched() {
        let mut canvas = Canvas::new(4, 1);
        canvas.print_text(0, 0, "ab", None, None);
        let cell = canvas.buffer().cell((0, 0)).unwrap();
        assert_eq!(cell.fg, Color::Reset);
        assert_eq!(cell.bg, Color::Reset);
    }

    #[test]
    fn test_print_text_clips() {
        let mut canvas = Canvas::new(4, 1);
        canvas.print_text(2, 0, "long label", None, None);
        canvas.print_text(0, 5, "off the grid", None, None);
        canvas.print_text(9, 0, "right of grid", None, None);
        assert_eq!(canvas.row_text(0), "  lo");
    }

    #[test]
    fn test_clear_resets_cells() {
        let mut canvas = Canvas::new(3, 1);
        canvas.print_text(0, 0, "abc", Some(Color::Red), None);
        canvas.clear();
        assert_eq!(canvas.row_text(0), "   ");
        assert_eq!(canvas.buffer().cell((0, 0)).unwrap().fg, Color::Reset);
    }

    #[test]
    fn test_paste_onto_offsets_and_clips() {
        let mut canvas = Canvas::new(3, 2);
        canvas.print_text(0, 0, "abc", None, None);
        canvas.print_text(0, 1, "def", None, None);

        let mut target = Buffer::empty(Rect::new(0, 0, 4, 2));
        paste_onto(&canvas, &mut target, (2, 1));

        let row: String = (0..4)
            .map(|x| target.cell((x, 1)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(row, "  ab");
        let top: String = (0..4)
            .map(|x| target.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(top, "    ");
    }

    #[test]
    fn test_paste_onto_target_not_at_origin() {
        let mut canvas = Canvas::new(2, 1);
        canvas.print_text(0, 0, "xy", None, None);

        let mut target = Buffer::empty(Rect::new(5, 5, 4, 2));
        paste_onto(&canvas, &mut target, (7, 6));

        assert_eq!(target.cell((7u16, 6u16)).unwrap().symbol(), "x");
        assert_eq!(target.cell((8u16, 6u16)).unwrap().symbol(), "y");
        assert_eq!(target.cell((5u16, 5u16)).unwrap().symbol(), " ");

        // Partly left of the target's area: only the overlapping cell lands
        let mut shifted = Buffer::empty(Rect::new(5, 5, 4, 2));
        paste_onto(&canvas, &mut shifted, (4, 5));
        assert_eq!(shifted.cell((5u16, 5u16)).unwrap().symbol(), "y");
    }
}
