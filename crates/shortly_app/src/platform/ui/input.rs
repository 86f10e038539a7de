use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shortly_core::{FormViewModel, Msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press to a form message, given what is currently on screen.
pub fn map_key(key: KeyEvent, view: &FormViewModel) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => KeyAction::Quit,
        KeyCode::Char('y') if ctrl => copy(view),
        KeyCode::F(2) => copy(view),
        KeyCode::Char('u') if ctrl => edit(view, String::new()),
        KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::Esc if view.alert.is_some() => KeyAction::Dispatch(Msg::DismissErrorClicked),
        KeyCode::Backspace => {
            let mut text = view.input_text.clone();
            if text.pop().is_none() {
                return KeyAction::Ignore;
            }
            edit(view, text)
        }
        KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = view.input_text.clone();
            text.push(ch);
            edit(view, text)
        }
        _ => KeyAction::Ignore,
    }
}

/// Appends pasted text to the input, dropping line breaks.
pub fn map_paste(pasted: &str, view: &FormViewModel) -> KeyAction {
    let cleaned: String = pasted.chars().filter(|ch| *ch != '\n' && *ch != '\r').collect();
    if cleaned.is_empty() {
        return KeyAction::Ignore;
    }
    edit(view, format!("{}{}", view.input_text, cleaned))
}

fn edit(view: &FormViewModel, text: String) -> KeyAction {
    if !view.input_enabled {
        return KeyAction::Ignore;
    }
    KeyAction::Dispatch(Msg::InputChanged(text))
}

fn copy(view: &FormViewModel) -> KeyAction {
    if view.copy_enabled {
        KeyAction::Dispatch(Msg::CopyClicked)
    } else {
        KeyAction::Ignore
    }
}
