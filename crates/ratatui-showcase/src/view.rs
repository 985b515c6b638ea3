use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui_showcase_core::input::InputEvent;
use ratatui_showcase_core::input::KeyCode;
use ratatui_showcase_core::input::KeyEvent;
use ratatui_showcase_core::input::KeyModifiers;
use ratatui_showcase_core::input::MouseButton;
use ratatui_showcase_core::input::MouseEvent;
use ratatui_showcase_core::input::MouseEventKind;
use ratatui_showcase_core::keymap;
use ratatui_showcase_core::showcase::ResizeDirection;
use ratatui_showcase_core::showcase::Showcase;
use unicode_width::UnicodeWidthStr;

use crate::highlight::Highlighter;
use crate::preview::PreviewRenderer;
use crate::preview::SourcePreview;
use crate::theme::Theme;

/// One focusable affordance of the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    FrameworkTab(usize),
    ShowCode,
    Copy,
    Rtl,
    Sandbox,
    ResizeHandle,
}

/// Key bindings for the control surface.
///
/// `Left`/`Right` are not bound here: they resize, and only while the
/// resize handle holds focus.
#[derive(Clone, Debug)]
pub struct ShowcaseBindings {
    pub toggle_code: Vec<KeyEvent>,
    pub copy: Vec<KeyEvent>,
    pub rtl: Vec<KeyEvent>,
    pub sandbox: Vec<KeyEvent>,
    pub focus_next: Vec<KeyEvent>,
    pub focus_prev: Vec<KeyEvent>,
    pub activate: Vec<KeyEvent>,
    pub blur: Vec<KeyEvent>,
}

impl Default for ShowcaseBindings {
    fn default() -> Self {
        Self {
            toggle_code: vec![keymap::key_char('s')],
            copy: vec![keymap::key_char('y')],
            rtl: vec![keymap::key_char('r')],
            sandbox: vec![keymap::key_char('o')],
            focus_next: vec![keymap::key(KeyCode::Tab)],
            focus_prev: vec![
                keymap::key(KeyCode::BackTab),
                KeyEvent::new(KeyCode::Tab).with_modifiers(KeyModifiers {
                    shift: true,
                    ctrl: false,
                    alt: false,
                }),
            ],
            activate: vec![keymap::key(KeyCode::Enter), keymap::key_char(' ')],
            blur: vec![keymap::key(KeyCode::Esc)],
        }
    }
}

fn matches_any(list: &[KeyEvent], key: &KeyEvent) -> bool {
    list.iter().any(|p| keymap::key_event_matches(p, key))
}

#[derive(Clone, Debug)]
struct Slot {
    control: Control,
    rect: Rect,
    label: String,
}

#[derive(Clone, Debug, Default)]
struct Layout {
    tabs: Vec<Slot>,
    buttons: Vec<Slot>,
    preview: Option<Rect>,
    handle: Option<Rect>,
    code: Option<Rect>,
}

/// The control surface: tabs, preview, revealed source, and the button
/// toolbar, all bound one-way to the controller state and re-read from the
/// live configuration on every render.
pub struct ShowcaseView {
    showcase: Showcase,
    bindings: ShowcaseBindings,
    focus: Option<Control>,
    highlighter: Option<Arc<dyn Highlighter + Send + Sync>>,
    preview: Box<dyn PreviewRenderer>,
}

impl ShowcaseView {
    pub fn new(showcase: Showcase) -> Self {
        Self {
            showcase,
            bindings: ShowcaseBindings::default(),
            focus: None,
            highlighter: None,
            preview: Box::new(SourcePreview),
        }
    }

    pub fn with_bindings(mut self, bindings: ShowcaseBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn showcase(&self) -> &Showcase {
        &self.showcase
    }

    pub fn showcase_mut(&mut self) -> &mut Showcase {
        &mut self.showcase
    }

    pub fn set_highlighter(
        &mut self,
        highlighter: Option<Arc<dyn Highlighter + Send + Sync>>,
    ) {
        self.highlighter = highlighter;
    }

    pub fn set_preview_renderer(&mut self, preview: impl PreviewRenderer + 'static) {
        self.preview = Box::new(preview);
    }

    pub fn focus(&self) -> Option<Control> {
        self.focus
    }

    /// Moves focus to `control` if it is currently visible.
    pub fn focus_control(&mut self, control: Control) -> bool {
        if self.visible_controls().contains(&control) {
            self.focus = Some(control);
            true
        } else {
            false
        }
    }

    /// Visible affordances in focus order. Empty when no examples were
    /// supplied, regardless of configuration.
    fn visible_controls(&self) -> Vec<Control> {
        let mut controls = Vec::new();
        if self.showcase.examples().is_empty() {
            return controls;
        }
        let config = self.showcase.config();
        if self.showcase.framework_tabs_visible() {
            for i in 0..self.showcase.examples().len() {
                controls.push(Control::FrameworkTab(i));
            }
        }
        if !config.show_code_button.hide {
            controls.push(Control::ShowCode);
        }
        if !config.copy_button.hide {
            controls.push(Control::Copy);
        }
        if !config.rtl_button.hide {
            controls.push(Control::Rtl);
        }
        if !config.sandbox_button.hide {
            controls.push(Control::Sandbox);
        }
        if !config.preview.hide {
            controls.push(Control::ResizeHandle);
        }
        controls
    }

    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => false,
        }
    }

    pub fn handle_event_in_area(&mut self, area: Rect, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(m) => self.handle_mouse(area, m),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Any input ends the copied-label flash.
        let redraw = self.showcase.clear_copied();

        if self.focus == Some(Control::ResizeHandle) && key.modifiers == KeyModifiers::none() {
            match key.code {
                KeyCode::Left => {
                    self.showcase.resize(ResizeDirection::Narrower);
                    return true;
                }
                KeyCode::Right => {
                    self.showcase.resize(ResizeDirection::Wider);
                    return true;
                }
                _ => {}
            }
        }

        if matches_any(&self.bindings.focus_next, &key) {
            self.cycle_focus(1);
            return true;
        }
        if matches_any(&self.bindings.focus_prev, &key) {
            self.cycle_focus(-1);
            return true;
        }
        if matches_any(&self.bindings.blur, &key) {
            return self.focus.take().is_some() || redraw;
        }
        if matches_any(&self.bindings.activate, &key) {
            // A control hidden after it took focus no longer activates.
            if let Some(control) = self.focus
                && self.visible_controls().contains(&control)
            {
                self.activate(control);
                return true;
            }
            return redraw;
        }

        // Direct hotkeys are alternate affordances for the buttons, so they
        // honor the same hide flags.
        let config = self.showcase.config();
        let show_code_hidden = config.show_code_button.hide;
        let copy_hidden = config.copy_button.hide;
        let rtl_hidden = config.rtl_button.hide;
        let sandbox_hidden = config.sandbox_button.hide;

        if matches_any(&self.bindings.toggle_code, &key) {
            if !show_code_hidden {
                self.showcase.toggle_code();
                return true;
            }
            return redraw;
        }
        if matches_any(&self.bindings.copy, &key) {
            if !copy_hidden {
                self.showcase.copy_code();
                return true;
            }
            return redraw;
        }
        if matches_any(&self.bindings.rtl, &key) {
            if !rtl_hidden {
                self.showcase.toggle_rtl();
                return true;
            }
            return redraw;
        }
        if matches_any(&self.bindings.sandbox, &key) {
            if !sandbox_hidden {
                self.showcase.open_sandbox();
                return true;
            }
            return redraw;
        }

        redraw
    }

    fn handle_mouse(&mut self, area: Rect, event: MouseEvent) -> bool {
        let redraw = self.showcase.clear_copied();
        if !matches!(event.kind, MouseEventKind::Down(MouseButton::Left)) {
            return redraw;
        }

        let layout = self.layout(area);
        for slot in layout.tabs.iter().chain(layout.buttons.iter()) {
            if rect_contains(slot.rect, event.x, event.y) {
                self.focus = Some(slot.control);
                self.activate(slot.control);
                return true;
            }
        }
        if let Some(handle) = layout.handle
            && rect_contains(handle, event.x, event.y)
        {
            self.focus = Some(Control::ResizeHandle);
            return true;
        }
        redraw
    }

    fn cycle_focus(&mut self, dir: i32) {
        let controls = self.visible_controls();
        if controls.is_empty() {
            self.focus = None;
            return;
        }
        let next = match self
            .focus
            .and_then(|c| controls.iter().position(|&x| x == c))
        {
            Some(i) => {
                let len = controls.len() as i32;
                (((i as i32 + dir) % len + len) % len) as usize
            }
            None if dir >= 0 => 0,
            None => controls.len() - 1,
        };
        self.focus = Some(controls[next]);
    }

    fn activate(&mut self, control: Control) {
        match control {
            Control::FrameworkTab(i) => {
                let language = self
                    .showcase
                    .examples()
                    .languages()
                    .nth(i)
                    .map(str::to_string);
                if let Some(language) = language {
                    self.showcase.set_language(&language);
                }
            }
            Control::ShowCode => self.showcase.toggle_code(),
            Control::Copy => {
                self.showcase.copy_code();
            }
            Control::Rtl => self.showcase.toggle_rtl(),
            Control::Sandbox => self.showcase.open_sandbox(),
            Control::ResizeHandle => {}
        }
    }

    fn layout(&self, area: Rect) -> Layout {
        let mut layout = Layout::default();
        if area.width == 0 || area.height == 0 || self.showcase.examples().is_empty() {
            return layout;
        }
        let config = self.showcase.config();
        let mut top = area.y;
        let mut bottom = area.y + area.height;
        let right = area.x + area.width;

        let mut toolbar: Vec<(Control, String)> = Vec::new();
        if !config.show_code_button.hide {
            let label = if self.showcase.is_open() {
                config.show_code_button.opened_label.clone()
            } else {
                config.show_code_button.closed_label.clone()
            };
            toolbar.push((Control::ShowCode, label));
        }
        if !config.copy_button.hide {
            let label = if self.showcase.just_copied() {
                config.copy_button.copied_label.clone()
            } else {
                config.copy_button.label.clone()
            };
            toolbar.push((Control::Copy, label));
        }
        if !config.rtl_button.hide {
            toolbar.push((Control::Rtl, config.rtl_button.label.clone()));
        }
        if !config.sandbox_button.hide {
            toolbar.push((Control::Sandbox, config.sandbox_button.label.clone()));
        }
        if !toolbar.is_empty() && bottom > top {
            bottom -= 1;
            let mut x = area.x;
            for (control, label) in toolbar {
                let w = (UnicodeWidthStr::width(label.as_str()) as u16).saturating_add(2);
                if x + w > right {
                    break;
                }
                layout.buttons.push(Slot {
                    control,
                    rect: Rect::new(x, bottom, w, 1),
                    label,
                });
                x += w + 1;
            }
        }

        if self.showcase.framework_tabs_visible() && top < bottom {
            let mut x = area.x;
            for (i, language) in self.showcase.examples().languages().enumerate() {
                let label = config.framework_buttons.label.for_framework(language);
                let w = (UnicodeWidthStr::width(label.as_str()) as u16).saturating_add(2);
                if x + w > right {
                    break;
                }
                layout.tabs.push(Slot {
                    control: Control::FrameworkTab(i),
                    rect: Rect::new(x, top, w, 1),
                    label,
                });
                x += w + 1;
            }
            top += 1;
        }

        // Revealed source takes the lower half of what remains.
        if self.showcase.is_open() && bottom > top {
            let code_h = ((bottom - top) / 2).max(1);
            layout.code = Some(Rect::new(area.x, bottom - code_h, area.width, code_h));
            bottom -= code_h;
        }

        // Preview fills the rest, capped at the resizable width, with the
        // handle column on its right edge.
        if !config.preview.hide && bottom > top {
            let preview_h = bottom - top;
            let preview_w = self.showcase.max_width().min(area.width.saturating_sub(1));
            layout.preview = Some(Rect::new(area.x, top, preview_w, preview_h));
            layout.handle = Some(Rect::new(area.x + preview_w, top, 1, preview_h));
        }

        layout
    }

    pub fn render_ref(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = self.layout(area);

        for slot in &layout.tabs {
            let Control::FrameworkTab(i) = slot.control else {
                continue;
            };
            let pressed =
                self.showcase.examples().languages().nth(i) == self.showcase.selected_framework();
            let mut style = if pressed { theme.tab_active } else { theme.tab };
            if self.focus == Some(slot.control) {
                style = style.patch(theme.focus);
            }
            buf.set_stringn(
                slot.rect.x,
                slot.rect.y,
                format!(" {} ", slot.label),
                slot.rect.width as usize,
                style,
            );
        }

        if let Some(preview_area) = layout.preview
            && let Some(example) = self.showcase.current_example()
        {
            self.preview
                .render(example, self.showcase.is_rtl(), preview_area, buf, theme);
        }

        if let Some(handle) = layout.handle {
            let style = if self.focus == Some(Control::ResizeHandle) {
                theme.accent
            } else {
                theme.text_muted
            };
            for dy in 0..handle.height {
                buf.set_stringn(handle.x, handle.y + dy, "│", 1, style);
            }
        }

        if let Some(code_area) = layout.code {
            self.render_code(code_area, buf, theme);
        }

        for slot in &layout.buttons {
            let mut style = theme.button;
            if self.focus == Some(slot.control) {
                style = style.patch(theme.focus);
            }
            buf.set_stringn(
                slot.rect.x,
                slot.rect.y,
                format!("[{}]", slot.label),
                slot.rect.width as usize,
                style,
            );
        }
    }

    fn render_code(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let Some(example) = self.showcase.current_example() else {
            return;
        };
        let lines: Vec<String> = example
            .source
            .lines()
            .take(area.height as usize)
            .map(|l| l.replace('\t', "    "))
            .collect();

        if let Some(highlighter) = self.highlighter.as_ref() {
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            let highlighted = highlighter.highlight_lines(Some(&example.language), &refs);
            for (row, spans) in highlighted.into_iter().enumerate() {
                let line = Line::from(spans);
                buf.set_line(area.x, area.y + row as u16, &line, area.width);
            }
        } else {
            for (row, text) in lines.iter().enumerate() {
                buf.set_stringn(
                    area.x,
                    area.y + row as u16,
                    text,
                    area.width as usize,
                    theme.code,
                );
            }
        }
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
