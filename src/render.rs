//! Frame composition
//!
//! Draws the whole frame from current state in a fixed layer order:
//! photo, mask patches, hover guide, same-value highlight, digits,
//! selection highlight, grid lines. Later layers occlude earlier ones.
//! Rendering reads state and never mutates it; drawing the same state twice
//! produces identical frames.

use crate::app::App;
use crate::display::{digit_height, digit_width, draw_digit_scaled, PixelBuffer};
use crate::game::BOARD_SIZE;
use crate::theme::Theme;

/// Board area in pixels (the window adds a bottom margin below it)
pub const GRID_SIZE: u32 = 540;
pub const CELL_SIZE: u32 = GRID_SIZE / BOARD_SIZE as u32;

/// 5x7 glyphs at this scale sit comfortably inside a 60px cell
const DIGIT_SCALE: u32 = 5;

pub struct Renderer {
    theme: Theme,
    /// Transient layer for the hover guide, reused across frames. The row and
    /// column bands are overwritten onto it and composited in one pass, so
    /// their intersection keeps single-layer alpha.
    guide: PixelBuffer,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            guide: PixelBuffer::with_size(GRID_SIZE, GRID_SIZE),
        }
    }

    pub fn draw(&mut self, frame: &mut PixelBuffer, app: &App, background: &PixelBuffer) {
        let fill = self.theme.margin_fill;
        frame.clear(fill[0], fill[1], fill[2]);
        frame.blit(background, 0, 0);

        self.draw_mask(frame, app);
        self.draw_hover_guide(frame, app);
        self.draw_same_value(frame, app);
        self.draw_digits(frame, app);
        self.draw_selection(frame, app);
        self.draw_grid_lines(frame);
    }

    /// Near-opaque patch over every covered cell; revealed cells draw nothing
    fn draw_mask(&self, frame: &mut PixelBuffer, app: &App) {
        let [r, g, b] = self.theme.overlay;
        let a = self.theme.overlay_alpha;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !app.mask.is_revealed(row, col) {
                    let (x, y) = cell_origin(row, col);
                    frame.fill_rect_blend(x, y, CELL_SIZE, CELL_SIZE, r, g, b, a);
                }
            }
        }
    }

    fn draw_hover_guide(&mut self, frame: &mut PixelBuffer, app: &App) {
        if app.locked() {
            return;
        }
        let Some((row, col)) = app.game.hovered() else {
            return;
        };

        let [r, g, b] = self.theme.hover_guide;
        let a = self.theme.hover_guide_alpha;
        let (x, y) = cell_origin(row, col);

        self.guide.clear_rgba(0, 0, 0, 0);
        self.guide.fill_rect_rgba(0, y, GRID_SIZE, CELL_SIZE, r, g, b, a);
        self.guide.fill_rect_rgba(x, 0, CELL_SIZE, GRID_SIZE, r, g, b, a);
        frame.composite(&self.guide, 0, 0);
    }

    /// Tint every cell showing the same digit as the selected cell
    fn draw_same_value(&self, frame: &mut PixelBuffer, app: &App) {
        if app.locked() {
            return;
        }
        let Some(value) = app.game.selected_value() else {
            return;
        };

        let [r, g, b] = self.theme.same_value;
        let a = self.theme.same_value_alpha;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if app.game.value(row, col) == value {
                    let (x, y) = cell_origin(row, col);
                    frame.fill_rect_blend(x, y, CELL_SIZE, CELL_SIZE, r, g, b, a);
                }
            }
        }
    }

    fn draw_digits(&self, frame: &mut PixelBuffer, app: &App) {
        let dx = ((CELL_SIZE - digit_width(DIGIT_SCALE)) / 2) as i32;
        let dy = ((CELL_SIZE - digit_height(DIGIT_SCALE)) / 2) as i32;

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = app.game.value(row, col);
                if value == 0 {
                    continue;
                }

                let [r, g, b] = if app.game.is_given(row, col) {
                    self.theme.given_digit
                } else {
                    self.theme.player_digit
                };

                let (x, y) = cell_origin(row, col);
                draw_digit_scaled(frame, x + dx, y + dy, value, DIGIT_SCALE, r, g, b);
            }
        }
    }

    fn draw_selection(&self, frame: &mut PixelBuffer, app: &App) {
        if app.locked() {
            return;
        }
        let Some((row, col)) = app.game.selected() else {
            return;
        };

        let [r, g, b] = self.theme.selection;
        let a = self.theme.selection_alpha;
        let (x, y) = cell_origin(row, col);
        frame.fill_rect_blend(x, y, CELL_SIZE, CELL_SIZE, r, g, b, a);
    }

    /// 10 + 10 lines; every 3rd (borders included) thicker to mark the boxes
    fn draw_grid_lines(&self, frame: &mut PixelBuffer) {
        let [r, g, b] = self.theme.grid_line;
        for i in 0..=BOARD_SIZE {
            let thickness: u32 = if i % 3 == 0 { 3 } else { 1 };
            let offset = (thickness / 2) as i32;
            let pos = (i as u32 * CELL_SIZE) as i32 - offset;

            frame.fill_rect(0, pos, GRID_SIZE, thickness, r, g, b);
            frame.fill_rect(pos, 0, thickness, GRID_SIZE, r, g, b);
        }
    }
}

/// Top-left pixel of a cell
fn cell_origin(row: usize, col: usize) -> (i32, i32) {
    (
        (col as u32 * CELL_SIZE) as i32,
        (row as u32 * CELL_SIZE) as i32,
    )
}
