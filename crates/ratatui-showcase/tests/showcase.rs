use std::sync::Arc;
use std::sync::Mutex;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_showcase::clipboard::CopyError;
use ratatui_showcase::config::ComponentPatch;
use ratatui_showcase::config::ConfigPatch;
use ratatui_showcase::config::CopyButtonPatch;
use ratatui_showcase::config::ShowCodeButtonPatch;
use ratatui_showcase::hooks::Hooks;
use ratatui_showcase::input::InputEvent;
use ratatui_showcase::input::KeyCode;
use ratatui_showcase::keymap;
use ratatui_showcase::registry::Registration;
use ratatui_showcase::registry::Registry;
use ratatui_showcase::theme::Theme;
use ratatui_showcase::view::Control;
use ratatui_showcase::view::ShowcaseView;

const TWO_VARIANTS: &str = "```html\n<button appearance=\"accent\">Accent</button>\n```\n\n```jsx\nexport default () => <button appearance=\"accent\">Accent</button>;\n```\n";

fn rendered(view: &mut ShowcaseView, w: u16, h: u16) -> String {
    let mut buf = Buffer::empty(Rect::new(0, 0, w, h));
    view.render_ref(Rect::new(0, 0, w, h), &mut buf, &Theme::default());
    let mut out = String::new();
    for y in 0..h {
        for x in 0..w {
            out.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn registry_variant_drives_a_full_interaction_round() {
    let mut registry = Registry::new();
    registry
        .register(Registration::with_tag(
            "docs-showcase",
            ConfigPatch {
                component: ComponentPatch {
                    show_code_button: ShowCodeButtonPatch {
                        closed_label: Some("Display Code".to_string()),
                        ..ShowCodeButtonPatch::default()
                    },
                    ..ComponentPatch::default()
                },
                ..ConfigPatch::default()
            },
        ))
        .unwrap();

    let mut showcase = registry.instantiate("docs-showcase", TWO_VARIANTS).unwrap();

    let copied_texts = Arc::new(Mutex::new(Vec::new()));
    let sink = copied_texts.clone();
    showcase.set_clipboard(move |text: &str| -> Result<(), CopyError> {
        sink.lock().unwrap().push(text.to_string());
        Ok(())
    });

    let show_code_calls = Arc::new(Mutex::new(Vec::new()));
    let languages_seen = Arc::new(Mutex::new(Vec::new()));
    let show_sink = show_code_calls.clone();
    let lang_sink = languages_seen.clone();
    showcase.update_config(ConfigPatch {
        hooks: Hooks {
            on_show_code: Some(Arc::new(move |is_open| {
                show_sink.lock().unwrap().push(is_open);
            })),
            on_language_change: Some(Arc::new(move |language: &str| {
                lang_sink.lock().unwrap().push(language.to_string());
            })),
            ..Hooks::default()
        },
        ..ConfigPatch::default()
    });

    let mut view = ShowcaseView::new(showcase);

    // Registration defaults reach the rendered labels.
    let out = rendered(&mut view, 70, 10);
    assert!(out.contains("[Display Code]"));
    assert!(out.contains(" html "));
    assert!(out.contains(" jsx "));

    // Reveal the source, then switch variants through the public entry point.
    view.handle_event(InputEvent::Key(keymap::key_char('s')));
    assert!(view.showcase().is_open());
    view.showcase_mut().set_language("jsx");
    let out = rendered(&mut view, 70, 10);
    assert!(out.contains("[Hide Code]"));
    assert!(out.contains("export default"));

    // Copy goes through the clipboard collaborator with the jsx source.
    view.handle_event(InputEvent::Key(keymap::key_char('y')));
    assert_eq!(
        copied_texts.lock().unwrap().as_slice(),
        &["export default () => <button appearance=\"accent\">Accent</button>;\n".to_string()]
    );

    assert_eq!(show_code_calls.lock().unwrap().as_slice(), &[true]);
    assert_eq!(
        languages_seen.lock().unwrap().as_slice(),
        &["jsx".to_string()]
    );
}

fn default_view() -> ShowcaseView {
    let mut registry = Registry::new();
    registry.register(Registration::default()).unwrap();
    ShowcaseView::new(registry.instantiate("showcase", TWO_VARIANTS).unwrap())
}

#[test]
fn cumulative_updates_compose_and_survive_re_renders() {
    let mut view = default_view();

    view.showcase_mut().update_config(ConfigPatch {
        component: ComponentPatch {
            copy_button: CopyButtonPatch {
                label: Some("Yank".to_string()),
                ..CopyButtonPatch::default()
            },
            ..ComponentPatch::default()
        },
        ..ConfigPatch::default()
    });
    view.showcase_mut().update_config(ConfigPatch {
        component: ComponentPatch {
            copy_button: CopyButtonPatch {
                copied_label: Some("Yanked".to_string()),
                ..CopyButtonPatch::default()
            },
            ..ComponentPatch::default()
        },
        ..ConfigPatch::default()
    });

    let out = rendered(&mut view, 70, 10);
    assert!(out.contains("[Yank]"));

    view.showcase_mut()
        .set_clipboard(|_: &str| -> Result<(), CopyError> { Ok(()) });
    view.handle_event(InputEvent::Key(keymap::key_char('y')));
    assert!(rendered(&mut view, 70, 10).contains("[Yanked]"));
}

#[test]
fn resize_round_trip_through_the_focused_handle() {
    let mut view = default_view();
    view.showcase_mut().set_max_width(160);

    assert!(view.focus_control(Control::ResizeHandle));
    view.handle_event(InputEvent::Key(keymap::key(KeyCode::Right)));
    view.handle_event(InputEvent::Key(keymap::key(KeyCode::Right)));
    view.handle_event(InputEvent::Key(keymap::key(KeyCode::Left)));
    assert_eq!(view.showcase().max_width(), 170);
}
