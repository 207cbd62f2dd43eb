//! Pixel-level drawing primitives.
//!
//! All primitives write straight into an `RgbaImage` and replace whatever
//! was there before, including the alpha channel. There is no blending: a
//! fill whose color carries alpha 50 leaves alpha 50 in the canvas.
//! Coordinates are inclusive on both ends.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Write a pixel, ignoring coordinates that fall outside the image.
fn put(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + t * (b as f32 - a as f32)) as u8
}

/// Fill the rows of (`x0`,`y0`)–(`x1`,`y1`) with opaque colors interpolated
/// channel-wise from `top` on the first row to `bottom` on the last.
pub fn fill_vertical_gradient(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    top: [u8; 3],
    bottom: [u8; 3],
) {
    let span = (y1 - y0) as f32;
    for y in y0..=y1 {
        let factor = (y - y0) as f32 / span;
        let color = Rgba([
            lerp(top[0], bottom[0], factor),
            lerp(top[1], bottom[1], factor),
            lerp(top[2], bottom[2], factor),
            255,
        ]);
        for x in x0..=x1 {
            put(img, x, y, color);
        }
    }
}

/// Draw a line from (`x0`,`y0`) to (`x1`,`y1`). Each rasterized point is
/// expanded into a `width`×`width` block anchored at its top-left, so a
/// width-2 stroke covers the anchor pixel plus one pixel right and below.
pub fn draw_line(
    img: &mut RgbaImage,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgba<u8>,
    width: i32,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        for ox in 0..width {
            for oy in 0..width {
                put(img, x + ox, y + oy, color);
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// One-pixel rectangle outline with inclusive corners.
pub fn draw_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    for x in x0..=x1 {
        put(img, x, y0, color);
        put(img, x, y1, color);
    }
    for y in y0..=y1 {
        put(img, x0, y, color);
        put(img, x1, y, color);
    }
}

/// Filled rectangle with inclusive corners.
pub fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            put(img, x, y, color);
        }
    }
}

/// Filled disc of radius `r` centered on (`cx`,`cy`).
pub fn fill_circle(img: &mut RgbaImage, cx: i32, cy: i32, r: i32, color: Rgba<u8>) {
    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r * r {
                put(img, x, y, color);
            }
        }
    }
}

fn edge(p: (i32, i32), a: (i32, i32), b: (i32, i32)) -> i32 {
    (p.0 - b.0) * (a.1 - b.1) - (a.0 - b.0) * (p.1 - b.1)
}

/// Filled triangle. Pixels on the edges count as inside.
pub fn fill_triangle(
    img: &mut RgbaImage,
    a: (i32, i32),
    b: (i32, i32),
    c: (i32, i32),
    color: Rgba<u8>,
) {
    let min_x = a.0.min(b.0).min(c.0);
    let max_x = a.0.max(b.0).max(c.0);
    let min_y = a.1.min(b.1).min(c.1);
    let max_y = a.1.max(b.1).max(c.1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let d1 = edge((x, y), a, b);
            let d2 = edge((x, y), b, c);
            let d3 = edge((x, y), c, a);
            let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
            let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
            if !(has_neg && has_pos) {
                put(img, x, y, color);
            }
        }
    }
}

/// Render `text` with the embedded 8×8 font, top-left glyph corner at
/// (`x`,`y`), advancing 8 px per character. Characters without a glyph are
/// skipped but still advance the cursor.
pub fn draw_text(img: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
    let mut cx = x;
    for ch in text.chars() {
        if let Some(glyph) = BASIC_FONTS.get(ch) {
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..8 {
                    if bits & (1 << col) != 0 {
                        put(img, cx + col, y + row as i32, color);
                    }
                }
            }
        }
        cx += 8;
    }
}
