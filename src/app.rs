//! Application state and input routing
//!
//! Owns the puzzle state and the mask layer, and translates raw input events
//! into mutations on them. Once the board is solved the session enters a
//! terminal locked state: every event short-circuits and only the quit
//! signal (handled by the event loop) does anything.

use sdl2::keyboard::Keycode;

use crate::display::InputEvent;
use crate::game::Game;
use crate::mask::MaskLayer;
use crate::render::{CELL_SIZE, GRID_SIZE};

pub struct App {
    pub game: Game,
    pub mask: MaskLayer,
}

impl App {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            mask: MaskLayer::new(),
        }
    }

    /// Terminal state: the puzzle is solved and input is disabled
    pub fn locked(&self) -> bool {
        self.game.all_solved()
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        if self.locked() {
            return;
        }

        match event {
            InputEvent::MouseMove { x, y } => {
                self.game.set_hover(cell_at(*x, *y));
            },
            InputEvent::MouseDown { x, y, .. } => match cell_at(*x, *y) {
                Some((row, col)) => self.game.select(row, col),
                None => self.game.clear_selection(),
            },
            InputEvent::KeyDown(key) => self.handle_key(*key),
            _ => {},
        }
    }

    fn handle_key(&mut self, key: Keycode) {
        if let Some(digit) = digit_from_key(key) {
            self.enter_digit(digit);
        } else if key == Keycode::Backspace || key == Keycode::Delete {
            self.clear_digit();
        }
    }

    fn enter_digit(&mut self, digit: u8) {
        let Some((row, col)) = self.game.selected() else {
            return;
        };

        // A wrong digit covers the cell again even if an earlier correct
        // entry had revealed it: the mask tracks the latest entry only.
        if self.game.enter_digit(digit) {
            self.mask.reveal(row, col);
        } else {
            self.mask.rehide(row, col);
        }
        self.after_mutation();
    }

    fn clear_digit(&mut self) {
        let Some((row, col)) = self.game.selected() else {
            return;
        };

        if self.game.clear_digit() {
            self.mask.rehide(row, col);
        }
        self.after_mutation();
    }

    fn after_mutation(&mut self) {
        if self.game.check_solved() {
            self.mask.reveal_all();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Hit-test window coordinates against the 9x9 board area
fn cell_at(x: i32, y: i32) -> Option<(usize, usize)> {
    let grid = GRID_SIZE as i32;
    if x < 0 || y < 0 || x >= grid || y >= grid {
        return None;
    }
    let cell = CELL_SIZE as i32;
    Some(((y / cell) as usize, (x / cell) as usize))
}

/// Top-row digit keys only; the keypad is not recognized
fn digit_from_key(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(1),
        Keycode::Num2 => Some(2),
        Keycode::Num3 => Some(3),
        Keycode::Num4 => Some(4),
        Keycode::Num5 => Some(5),
        Keycode::Num6 => Some(6),
        Keycode::Num7 => Some(7),
        Keycode::Num8 => Some(8),
        Keycode::Num9 => Some(9),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MouseButtonKind;
    use crate::game::BOARD_SIZE;

    const DIGIT_KEYS: [Keycode; 9] = [
        Keycode::Num1,
        Keycode::Num2,
        Keycode::Num3,
        Keycode::Num4,
        Keycode::Num5,
        Keycode::Num6,
        Keycode::Num7,
        Keycode::Num8,
        Keycode::Num9,
    ];

    fn click(app: &mut App, row: usize, col: usize) {
        let cell = CELL_SIZE as i32;
        app.handle_event(&InputEvent::MouseDown {
            x: col as i32 * cell + cell / 2,
            y: row as i32 * cell + cell / 2,
            button: MouseButtonKind::Left,
        });
    }

    fn press(app: &mut App, key: Keycode) {
        app.handle_event(&InputEvent::KeyDown(key));
    }

    /// Drive the whole board to solved through input events
    fn solve_by_input(app: &mut App) {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if !app.game.is_given(r, c) {
                    // Find the digit by trying until the cell is revealed
                    click(app, r, c);
                    for key in DIGIT_KEYS {
                        press(app, key);
                        if app.mask.is_revealed(r, c) {
                            break;
                        }
                    }
                    assert!(app.mask.is_revealed(r, c));
                }
            }
        }
    }

    #[test]
    fn test_wrong_digit_leaves_cell_hidden() {
        // Cell (0,2) is editable; its solution digit is 4
        let mut app = App::new();
        click(&mut app, 0, 2);
        press(&mut app, Keycode::Num5);

        assert_eq!(app.game.value(0, 2), 5);
        assert!(!app.mask.is_revealed(0, 2));
    }

    #[test]
    fn test_correct_digit_reveals_cell() {
        let mut app = App::new();
        click(&mut app, 0, 2);
        press(&mut app, Keycode::Num4);

        assert_eq!(app.game.value(0, 2), 4);
        assert!(app.mask.is_revealed(0, 2));
    }

    #[test]
    fn test_delete_rehides_a_revealed_cell() {
        let mut app = App::new();
        click(&mut app, 0, 2);
        press(&mut app, Keycode::Num4);
        assert!(app.mask.is_revealed(0, 2));

        press(&mut app, Keycode::Delete);
        assert_eq!(app.game.value(0, 2), 0);
        assert!(!app.mask.is_revealed(0, 2));
    }

    #[test]
    fn test_wrong_overwrite_rehides_previously_revealed_cell() {
        let mut app = App::new();
        click(&mut app, 0, 2);
        press(&mut app, Keycode::Num4);
        assert!(app.mask.is_revealed(0, 2));

        press(&mut app, Keycode::Num5);
        assert_eq!(app.game.value(0, 2), 5);
        assert!(!app.mask.is_revealed(0, 2));
    }

    #[test]
    fn test_backspace_clears_like_delete() {
        let mut app = App::new();
        click(&mut app, 0, 2);
        press(&mut app, Keycode::Num5);
        press(&mut app, Keycode::Backspace);
        assert_eq!(app.game.value(0, 2), 0);
    }

    #[test]
    fn test_click_on_given_cell_clears_selection() {
        let mut app = App::new();
        click(&mut app, 0, 2);
        assert_eq!(app.game.selected(), Some((0, 2)));

        click(&mut app, 0, 0); // given "5"
        assert_eq!(app.game.selected(), None);
    }

    #[test]
    fn test_click_outside_grid_clears_selection() {
        let mut app = App::new();
        click(&mut app, 0, 2);

        // Bottom margin, below the board
        app.handle_event(&InputEvent::MouseDown {
            x: 10,
            y: GRID_SIZE as i32 + 20,
            button: MouseButtonKind::Left,
        });
        assert_eq!(app.game.selected(), None);
    }

    #[test]
    fn test_keypad_digits_are_ignored() {
        let mut app = App::new();
        click(&mut app, 0, 2);
        press(&mut app, Keycode::Kp4);
        assert_eq!(app.game.value(0, 2), 0);
    }

    #[test]
    fn test_digit_without_selection_is_ignored() {
        let mut app = App::new();
        press(&mut app, Keycode::Num4);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if !app.game.is_given(r, c) {
                    assert_eq!(app.game.value(r, c), 0);
                }
            }
        }
    }

    #[test]
    fn test_hover_tracks_pointer_and_clears_outside() {
        let mut app = App::new();
        app.handle_event(&InputEvent::MouseMove { x: 125, y: 65 });
        assert_eq!(app.game.hovered(), Some((1, 2)));

        app.handle_event(&InputEvent::MouseMove {
            x: 10,
            y: GRID_SIZE as i32 + 30,
        });
        assert_eq!(app.game.hovered(), None);
    }

    #[test]
    fn test_solving_reveals_everything_and_locks() {
        let mut app = App::new();
        solve_by_input(&mut app);

        assert!(app.locked());
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                assert!(app.mask.is_revealed(r, c));
            }
        }
    }

    #[test]
    fn test_locked_state_absorbs_all_input() {
        let mut app = App::new();
        solve_by_input(&mut app);

        let selected = app.game.selected();
        let hovered = app.game.hovered();

        click(&mut app, 0, 2);
        press(&mut app, Keycode::Num1);
        press(&mut app, Keycode::Delete);
        app.handle_event(&InputEvent::MouseMove { x: 5, y: 5 });

        assert_eq!(app.game.selected(), selected);
        assert_eq!(app.game.hovered(), hovered);
        assert_eq!(app.game.value(0, 2), 4);
        assert!(app.mask.is_revealed(0, 2));
        assert!(app.locked());
    }

    #[test]
    fn test_cell_at_boundaries() {
        assert_eq!(cell_at(0, 0), Some((0, 0)));
        let edge = GRID_SIZE as i32 - 1;
        assert_eq!(cell_at(edge, edge), Some((8, 8)));
        assert_eq!(cell_at(GRID_SIZE as i32, 0), None);
        assert_eq!(cell_at(0, GRID_SIZE as i32), None);
        assert_eq!(cell_at(-1, 0), None);
    }
}
