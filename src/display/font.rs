//! Bitmap digit glyphs
//!
//! 5x7 glyphs for the digits 0-9, drawn scaled onto a `PixelBuffer`.
//! Each glyph row is a bitmask with the most significant of the low 5 bits
//! being the leftmost column.

use super::PixelBuffer;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

#[rustfmt::skip]
const DIGIT_GLYPHS: [[u8; GLYPH_HEIGHT as usize]; 10] = [
    // 0
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    // 1
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    // 2
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    // 3
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    // 4
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    // 5
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    // 6
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    // 7
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    // 8
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    // 9
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

/// Rendered glyph width at the given scale
pub fn digit_width(scale: u32) -> u32 {
    GLYPH_WIDTH * scale
}

/// Rendered glyph height at the given scale
pub fn digit_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Draw a single digit (0-9) with its top-left corner at (x, y), each glyph
/// bit expanded to a scale x scale block. Digits above 9 are ignored.
pub fn draw_digit_scaled(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    digit: u8,
    scale: u32,
    r: u8,
    g: u8,
    b: u8,
) {
    let Some(glyph) = DIGIT_GLYPHS.get(digit as usize) else {
        return;
    };

    for (row, bits) in glyph.iter().copied().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if u32::from(bits) & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                buffer.fill_rect(
                    x + (col * scale) as i32,
                    y + (row as u32 * scale) as i32,
                    scale,
                    scale,
                    r,
                    g,
                    b,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyphs_fit_five_columns() {
        for glyph in &DIGIT_GLYPHS {
            for &row in glyph {
                assert_eq!(row & !0b11111u8, 0);
            }
        }
    }

    #[test]
    fn test_draw_digit_marks_only_glyph_pixels() {
        let mut buf = PixelBuffer::with_size(8, 8);
        buf.clear(0, 0, 0);
        draw_digit_scaled(&mut buf, 0, 0, 1, 1, 255, 255, 255);

        // Top row of "1" is 0b00100: only column 2 set
        assert_eq!(buf.get_pixel(2, 0), Some((255, 255, 255)));
        assert_eq!(buf.get_pixel(0, 0), Some((0, 0, 0)));
        assert_eq!(buf.get_pixel(4, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_draw_digit_scales_blocks() {
        let mut buf = PixelBuffer::with_size(20, 30);
        buf.clear(0, 0, 0);
        draw_digit_scaled(&mut buf, 0, 0, 1, 3, 200, 0, 0);

        // Column 2 of the glyph becomes a 3x3 block at x 6..9
        for dy in 0..3 {
            for dx in 6..9 {
                assert_eq!(buf.get_pixel(dx, dy), Some((200, 0, 0)));
            }
        }
        assert_eq!(buf.get_pixel(5, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let mut buf = PixelBuffer::with_size(8, 8);
        buf.clear(0, 0, 0);
        draw_digit_scaled(&mut buf, 0, 0, 12, 1, 255, 255, 255);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(buf.get_pixel(x, y), Some((0, 0, 0)));
            }
        }
    }
}
