//! Key and mouse mapping from terminal events to session commands.

use crate::types::{
    ConfigChange, Intent, BASE_SPEED_MAX_MS, BASE_SPEED_MIN_MS, BASE_SPEED_STEP_MS, HEIGHT_MAX,
    HEIGHT_MIN, HEIGHT_STEP, WIDTH_MAX, WIDTH_MIN, WIDTH_STEP,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Current field settings the configuration keys step from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSettings {
    pub width: u8,
    pub height: u8,
    pub base_speed_ms: u32,
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        // Movement
        KeyCode::Left if shift => Some(Intent::MoveToLeftWall),
        KeyCode::Right if shift => Some(Intent::MoveToRightWall),
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Intent::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Intent::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Intent::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Intent::RotateCw),
        KeyCode::Char('z')
        | KeyCode::Char('Z')
        | KeyCode::Char('y')
        | KeyCode::Char('Y') => Some(Intent::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(Intent::HardDrop),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Intent::Hold),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(Intent::ToggleFreeze)
        }

        // Session
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(Intent::Start),
        KeyCode::Esc | KeyCode::Char('.') => Some(Intent::Stop),

        _ => None,
    }
}

/// Map mouse input to intents. Only button presses and wheel ticks count.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Intent::MoveToLeftWall),
        MouseEventKind::Down(MouseButton::Right) => Some(Intent::MoveToRightWall),
        MouseEventKind::Down(MouseButton::Middle) => Some(Intent::HardDrop),
        MouseEventKind::ScrollUp => Some(Intent::RotateCw),
        MouseEventKind::ScrollDown => Some(Intent::RotateCcw),
        _ => None,
    }
}

/// Map a configuration key to a stepped change of the current settings.
///
/// Returns None for other keys and for steps that would leave the range.
pub fn handle_config_key(key: KeyEvent, current: FieldSettings) -> Option<ConfigChange> {
    match key.code {
        KeyCode::Char('[') => current
            .width
            .checked_sub(WIDTH_STEP)
            .filter(|w| *w >= WIDTH_MIN)
            .map(ConfigChange::Width),
        KeyCode::Char(']') => current
            .width
            .checked_add(WIDTH_STEP)
            .filter(|w| *w <= WIDTH_MAX)
            .map(ConfigChange::Width),
        KeyCode::Char('{') => current
            .height
            .checked_sub(HEIGHT_STEP)
            .filter(|h| *h >= HEIGHT_MIN)
            .map(ConfigChange::Height),
        KeyCode::Char('}') => current
            .height
            .checked_add(HEIGHT_STEP)
            .filter(|h| *h <= HEIGHT_MAX)
            .map(ConfigChange::Height),
        KeyCode::Char('-') => current
            .base_speed_ms
            .checked_sub(BASE_SPEED_STEP_MS)
            .filter(|ms| *ms >= BASE_SPEED_MIN_MS)
            .map(ConfigChange::BaseSpeedMs),
        KeyCode::Char('=') | KeyCode::Char('+') => current
            .base_speed_ms
            .checked_add(BASE_SPEED_STEP_MS)
            .filter(|ms| *ms <= BASE_SPEED_MAX_MS)
            .map(ConfigChange::BaseSpeedMs),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
