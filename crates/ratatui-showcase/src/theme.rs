use ratatui::style::Style;

#[derive(Clone, Debug)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub code: Style,
    pub tab: Style,
    pub tab_active: Style,
    pub button: Style,
    pub focus: Style,
}

impl Default for Theme {
    fn default() -> Self {
        use ratatui::style::Stylize;

        Self {
            text_primary: Style::default(),
            text_muted: Style::default().dark_gray(),
            accent: Style::default().cyan(),
            code: Style::default().cyan(),
            tab: Style::default().dark_gray(),
            tab_active: Style::default().reversed(),
            button: Style::default(),
            focus: Style::default().underlined(),
        }
    }
}
