use macroquad::prelude::*;
use crate::application::{Command, Config};

/// Key -> command table
const KEY_BINDINGS: [(KeyCode, Command); 5] = [
    (KeyCode::Space, Command::StepOnce),
    (KeyCode::Enter, Command::TogglePlay),
    (KeyCode::P, Command::TogglePlay),
    (KeyCode::C, Command::Clear),
    (KeyCode::R, Command::Randomize),
];

/// Translate a click at raw pixel position into a cell toggle.
/// Clicks that land outside the grid are discarded.
pub fn map_click(px: f32, py: f32, cell_size: f32, grid_size: usize) -> Option<Command> {
    if px < 0.0 || py < 0.0 {
        return None;
    }
    let x = (px / cell_size) as usize;
    let y = (py / cell_size) as usize;
    (x < grid_size && y < grid_size).then_some(Command::ToggleCell { x, y })
}

/// Look up the command bound to a key, if any
pub fn map_key(key: KeyCode) -> Option<Command> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, command)| *command)
}

/// Collect the commands produced by input since the last frame
pub fn poll_commands(config: &Config) -> Vec<Command> {
    let mut commands: Vec<Command> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (px, py) = mouse_position();
        commands.extend(map_click(px, py, config.cell_size, config.grid_size()));
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_maps_to_cell() {
        assert_eq!(map_click(0.0, 0.0, 60.0, 10), Some(Command::ToggleCell { x: 0, y: 0 }));
        assert_eq!(map_click(125.0, 599.0, 60.0, 10), Some(Command::ToggleCell { x: 2, y: 9 }));
        assert_eq!(map_click(59.9, 60.0, 60.0, 10), Some(Command::ToggleCell { x: 0, y: 1 }));
    }

    #[test]
    fn test_click_outside_grid_is_discarded() {
        assert_eq!(map_click(600.0, 10.0, 60.0, 10), None);
        assert_eq!(map_click(10.0, 640.0, 60.0, 10), None);
        assert_eq!(map_click(-1.0, 10.0, 60.0, 10), None);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(map_key(KeyCode::Space), Some(Command::StepOnce));
        assert_eq!(map_key(KeyCode::Enter), Some(Command::TogglePlay));
        assert_eq!(map_key(KeyCode::P), Some(Command::TogglePlay));
        assert_eq!(map_key(KeyCode::C), Some(Command::Clear));
        assert_eq!(map_key(KeyCode::R), Some(Command::Randomize));
        assert_eq!(map_key(KeyCode::Q), None);
    }
}
