use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use parley_client::InputEdit;
use parley_client::widget::PRESET_PROMPTS;
use ratatui::layout::Rect;

use crate::app::App;
use crate::tui::AppEvent;
use crate::ui;

const PAGE: u16 = 10;
const WHEEL: u16 = 3;

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        // Redrawn on the next loop iteration
        AppEvent::Resize => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // AltGr arrives as CONTROL | ALT and still types a character.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    if ctrl {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.submit(),
        KeyCode::F(n @ 1..=3) => select_preset(app, usize::from(n - 1)),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::Backspace => app.session.edit(InputEdit::Backspace),
        KeyCode::Delete => app.session.edit(InputEdit::Delete),
        KeyCode::Left => app.session.edit(InputEdit::Left),
        KeyCode::Right => app.session.edit(InputEdit::Right),
        KeyCode::Home => app.session.edit(InputEdit::Home),
        KeyCode::End => app.session.edit(InputEdit::End),
        KeyCode::Char(c) => app.session.edit(InputEdit::Insert(c)),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let areas = ui::layout(app.viewport);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if hit(areas.send, mouse.column, mouse.row) {
                app.submit();
            } else if let Some(i) = areas
                .presets
                .iter()
                .position(|area| hit(*area, mouse.column, mouse.row))
            {
                select_preset(app, i);
            }
        }
        MouseEventKind::ScrollUp => app.scroll_up(WHEEL),
        MouseEventKind::ScrollDown => app.scroll_down(WHEEL),
        _ => {}
    }
}

fn select_preset(app: &mut App, index: usize) {
    if let Some(prompt) = PRESET_PROMPTS.get(index) {
        app.session.select_preset(prompt);
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
