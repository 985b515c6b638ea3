use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_showcase_core::example::Example;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Renders the live preview of the current example.
///
/// The widget decides when a preview is drawn and which example it shows;
/// turning markup into actual output is the host's business. `rtl` asks for
/// a right-to-left rendition of the same content.
pub trait PreviewRenderer {
    fn render(&mut self, example: &Example, rtl: bool, area: Rect, buf: &mut Buffer, theme: &Theme);
}

/// Fallback preview showing the example source as plain text,
/// right-aligned in RTL mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourcePreview;

impl PreviewRenderer for SourcePreview {
    fn render(&mut self, example: &Example, rtl: bool, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for (row, line) in example
            .source
            .lines()
            .take(area.height as usize)
            .enumerate()
        {
            let line = line.replace('\t', "    ");
            let y = area.y + row as u16;
            let x = if rtl {
                let w = UnicodeWidthStr::width(line.as_str()) as u16;
                area.x + area.width.saturating_sub(w)
            } else {
                area.x
            };
            buf.set_stringn(x, y, line, area.width as usize, theme.text_primary);
        }
    }
}
