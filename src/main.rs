// Some drawing and event primitives are exercised only by tests
#![allow(dead_code)]

mod app;
mod background;
mod display;
mod game;
mod mask;
mod render;
mod theme;

use app::App;
use display::{Display, InputEvent, PixelBuffer, RenderTarget};
use render::{Renderer, GRID_SIZE};
use theme::Theme;

const WINDOW_WIDTH: u32 = GRID_SIZE;
// Bottom margin below the board, reserved for future status display
const WINDOW_HEIGHT: u32 = GRID_SIZE + 60;

fn main() -> Result<(), String> {
    // The chooser and the decode both finish before the window opens
    let Some(path) = background::pick_background() else {
        println!("No background selected, exiting.");
        return Ok(());
    };
    let background = background::load_background(&path)?;

    let theme = Theme::load("theme.json").unwrap_or_else(|_| Theme::default());

    let (mut display, texture_creator) = Display::new("Picdoku", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut target = RenderTarget::with_size(&texture_creator, WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut frame = PixelBuffer::with_size(WINDOW_WIDTH, WINDOW_HEIGHT);

    let mut app = App::new();
    let mut renderer = Renderer::new(theme);

    println!("=== picdoku ===");
    println!("Background: {}", path.display());
    println!("Controls:");
    println!("  Click              - Select an empty cell");
    println!("  1-9                - Enter a digit (correct digits uncover the photo)");
    println!("  Backspace/Delete   - Clear the selected cell");
    println!("Solve the whole board to reveal the picture. Close the window to quit.");

    'main: loop {
        for event in display.poll_events() {
            if matches!(event, InputEvent::Quit) {
                break 'main;
            }
            app.handle_event(&event);
        }

        renderer.draw(&mut frame, &app, &background);
        display.present(&mut target, &frame)?;
    }

    Ok(())
}
