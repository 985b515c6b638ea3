use ratatui::style::Style;
use ratatui::text::Span;

/// Tokenizes source lines into styled spans.
///
/// Highlighting backends live outside this crate; the widget only hands
/// them the language tag and the visible lines.
pub trait Highlighter {
    fn highlight_lines(&self, language: Option<&str>, lines: &[&str]) -> Vec<Vec<Span<'static>>>;
}

/// Backend that styles nothing.
pub struct PlainText;

impl Highlighter for PlainText {
    fn highlight_lines(&self, _language: Option<&str>, lines: &[&str]) -> Vec<Vec<Span<'static>>> {
        lines
            .iter()
            .map(|l| vec![Span::styled((*l).to_string(), Style::default())])
            .collect()
    }
}
