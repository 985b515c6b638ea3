use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui_showcase::clipboard::CopyError;
use ratatui_showcase::config::ComponentPatch;
use ratatui_showcase::config::ConfigPatch;
use ratatui_showcase::config::FrameworkButtonsPatch;
use ratatui_showcase::config::FrameworkLabel;
use ratatui_showcase::crossterm_input::input_event_from_crossterm;
use ratatui_showcase::example::Example;
use ratatui_showcase::hooks::Hooks;
use ratatui_showcase::registry::Registration;
use ratatui_showcase::registry::Registry;
use ratatui_showcase::theme::Theme;
use ratatui_showcase::view::ShowcaseView;
use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

const SAMPLE_MARKDOWN: &str = r#"
```html
<button appearance="accent">Accent</button>
<button appearance="neutral">Neutral</button>
<button appearance="lightweight">Lightweight</button>
```

```jsx
export default () => {
  return (
    <>
      <button appearance="accent">Accent</button>
      <button appearance="neutral">Neutral</button>
      <button appearance="lightweight">Lightweight</button>
    </>
  );
};
```
"#;

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let theme = Theme::default();
    let status = Arc::new(Mutex::new(String::from(
        "Tab focuses controls, Enter activates, s/y/r/o are hotkeys, q quits",
    )));

    let mut registry = Registry::new();
    registry
        .register(Registration::with_tag(
            "docs-showcase",
            ConfigPatch {
                component: ComponentPatch {
                    framework_buttons: FrameworkButtonsPatch {
                        label: Some(FrameworkLabel::derive(|f| f.to_uppercase())),
                        ..FrameworkButtonsPatch::default()
                    },
                    ..ComponentPatch::default()
                },
                ..ConfigPatch::default()
            },
        ))
        .map_err(io::Error::other)?;

    let mut showcase = registry
        .instantiate("docs-showcase", SAMPLE_MARKDOWN)
        .map_err(io::Error::other)?;

    let copy_status = status.clone();
    showcase.set_clipboard(move |text: &str| -> Result<(), CopyError> {
        *copy_status.lock().unwrap() = format!("copied {} bytes", text.len());
        Ok(())
    });
    let sandbox_status = status.clone();
    showcase.set_sandbox(move |example: &Example| {
        *sandbox_status.lock().unwrap() = format!("sandbox request sent for {}", example.language);
    });

    let hook_status = status.clone();
    showcase.update_config(ConfigPatch {
        hooks: Hooks {
            on_language_change: Some(Arc::new(move |language: &str| {
                *hook_status.lock().unwrap() = format!("switched to {language}");
            })),
            ..Hooks::default()
        },
        ..ConfigPatch::default()
    });

    let mut view = ShowcaseView::new(showcase);

    loop {
        let mut panel_area = ratatui::layout::Rect::default();
        terminal.draw(|f| {
            let [main, footer] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(f.area());

            let block = Block::default()
                .title("ratatui-showcase")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);
            panel_area = inner;
            view.render_ref(inner, f.buffer_mut(), &theme);

            let line = status.lock().unwrap().clone();
            f.render_widget(Paragraph::new(line).style(theme.text_muted), footer);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }

        let ev = crossterm::event::read()?;
        if let crossterm::event::Event::Key(key) = &ev
            && key.kind == crossterm::event::KeyEventKind::Press
            && key.code == crossterm::event::KeyCode::Char('q')
        {
            return Ok(());
        }
        if let Some(event) = input_event_from_crossterm(ev) {
            view.handle_event_in_area(panel_area, event);
        }
    }
}
