//! The seven hardware component icons.
//!
//! Every icon starts from the same 150×100 transparent canvas: a vertical
//! gradient body over (10,10)–(140,90) and a one-pixel black frame, with
//! the component-specific structure painted on top. All geometry and
//! colors are fixed constants; nothing here takes runtime input.

use crate::draw::{
    draw_line, draw_rect, draw_text, fill_circle, fill_rect, fill_triangle,
    fill_vertical_gradient,
};
use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ColorType, ImageEncoder, Rgba, RgbaImage};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Canvas width shared by every icon.
pub const ICON_WIDTH: u32 = 150;
/// Canvas height shared by every icon.
pub const ICON_HEIGHT: u32 = 100;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Output file name and renderer for each icon, in generation order.
pub const ICONS: [(&str, fn() -> RgbaImage); 7] = [
    ("cpu.png", cpu_icon),
    ("l2cache.png", l2cache_icon),
    ("l3cache.png", l3cache_icon),
    ("bus.png", bus_icon),
    ("memory.png", memory_icon),
    ("dma.png", dma_icon),
    ("tracer.png", tracer_icon),
];

/// Render all seven icons into `out_dir`, creating the directory if needed.
/// Existing files of the same names are overwritten.
pub fn generate_icons(out_dir: &Path) -> Result<()> {
    create_dir_all(out_dir).context("Can't create output directory")?;

    for (name, render) in ICONS {
        let image = render();
        save_png(&image, &out_dir.join(name))?;
        println!("  ✓ Generated {name}");
    }

    println!("✓ Generated {} icons in {}", ICONS.len(), out_dir.display());
    Ok(())
}

/// Gradient body plus the one-pixel frame every icon starts from.
fn framed_canvas(top: [u8; 3], bottom: [u8; 3]) -> RgbaImage {
    let mut img = RgbaImage::new(ICON_WIDTH, ICON_HEIGHT);
    fill_vertical_gradient(&mut img, 10, 10, 140, 90, top, bottom);
    draw_rect(&mut img, 10, 10, 140, 90, BLACK);
    img
}

/// CPU: a large core block beside its two private cache banks, with
/// package pins along the bottom edge.
pub fn cpu_icon() -> RgbaImage {
    let mut img = framed_canvas([65, 105, 225], [65, 105, 185]);

    let bank = Rgba([200, 200, 200, 255]);
    draw_rect(&mut img, 20, 20, 70, 80, WHITE);
    draw_rect(&mut img, 80, 20, 130, 45, bank);
    draw_rect(&mut img, 80, 55, 130, 80, bank);

    draw_text(&mut img, 45, 50, "Core", WHITE);
    draw_text(&mut img, 105, 30, "L1", WHITE);
    draw_text(&mut img, 105, 65, "L2", WHITE);

    for x in (20..140).step_by(10) {
        draw_line(&mut img, x, 90, x, 95, Rgba([100, 100, 100, 255]), 1);
    }

    img
}

/// L2 cache: a 4×6 grid of cache lines; lines holding data carry a
/// translucent white fill.
pub fn l2cache_icon() -> RgbaImage {
    let mut img = framed_canvas([60, 179, 113], [40, 139, 83]);

    for row in 0..4 {
        for col in 0..6 {
            let x = 20 + col * 20;
            let y = 20 + row * 18;
            draw_rect(&mut img, x, y, x + 16, y + 14, WHITE);
            if (row + col) % 3 == 0 {
                fill_rect(&mut img, x + 1, y + 1, x + 15, y + 13, Rgba([255, 255, 255, 50]));
            }
        }
    }

    img
}

/// L3 cache: same idea as L2 but a denser 5×8 grid of smaller lines.
pub fn l3cache_icon() -> RgbaImage {
    let mut img = framed_canvas([106, 90, 205], [86, 70, 175]);

    for row in 0..5 {
        for col in 0..8 {
            let x = 15 + col * 15;
            let y = 15 + row * 15;
            draw_rect(&mut img, x, y, x + 12, y + 12, WHITE);
            if (row + col) % 4 == 0 {
                fill_rect(&mut img, x + 1, y + 1, x + 11, y + 11, Rgba([255, 255, 255, 50]));
            }
        }
    }

    img
}

/// Bus: crossing horizontal and vertical lanes with a junction dot at
/// every intersection.
pub fn bus_icon() -> RgbaImage {
    let mut img = framed_canvas([255, 165, 0], [225, 135, 0]);

    for i in 0..4 {
        let y = 25 + i * 15;
        draw_line(&mut img, 20, y, 130, y, WHITE, 2);
    }
    for j in 0..5 {
        let x = 30 + j * 20;
        draw_line(&mut img, x, 25, x, 70, WHITE, 2);
    }
    for i in 0..4 {
        for j in 0..5 {
            fill_circle(&mut img, 30 + j * 20, 25 + i * 15, 3, WHITE);
        }
    }

    img
}

/// Memory: a DIMM silhouette with two rows of chips and gold contact pins.
pub fn memory_icon() -> RgbaImage {
    let mut img = framed_canvas([186, 85, 211], [156, 65, 181]);

    fill_rect(&mut img, 25, 20, 125, 80, Rgba([220, 220, 220, 255]));
    draw_rect(&mut img, 25, 20, 125, 80, WHITE);

    for i in 0..4 {
        for j in 0..2 {
            let x = 35 + i * 25;
            let y = 30 + j * 30;
            fill_rect(&mut img, x, y, x + 15, y + 15, Rgba([50, 50, 50, 255]));
        }
    }

    for k in 0..20 {
        let x = 30 + k * 5;
        draw_line(&mut img, x, 80, x, 85, Rgba([212, 175, 55, 255]), 2);
    }

    img
}

/// DMA: a controller box with one transfer lane in each direction.
pub fn dma_icon() -> RgbaImage {
    let mut img = framed_canvas([30, 144, 255], [30, 114, 215]);

    draw_rect(&mut img, 30, 20, 120, 80, WHITE);

    draw_line(&mut img, 30, 40, 120, 40, WHITE, 2);
    draw_line(&mut img, 120, 60, 30, 60, WHITE, 2);
    fill_triangle(&mut img, (110, 35), (120, 40), (110, 45), WHITE);
    fill_triangle(&mut img, (40, 55), (30, 60), (40, 65), WHITE);

    draw_text(&mut img, 60, 30, "DMA", WHITE);

    img
}

/// Tracer: a dark monitor screen with axes and a sampled event trace.
pub fn tracer_icon() -> RgbaImage {
    let mut img = framed_canvas([250, 128, 114], [210, 98, 84]);

    fill_rect(&mut img, 25, 15, 125, 85, Rgba([20, 20, 20, 255]));
    draw_rect(&mut img, 25, 15, 125, 85, WHITE);

    let axis = Rgba([100, 100, 100, 255]);
    draw_line(&mut img, 25, 50, 125, 50, axis, 1);
    draw_line(&mut img, 25, 15, 25, 85, axis, 1);

    let trace = [
        (25, 50),
        (40, 40),
        (55, 60),
        (70, 30),
        (85, 70),
        (100, 20),
        (125, 50),
    ];
    for pair in trace.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        draw_line(&mut img, x0, y0, x1, y1, Rgba([0, 255, 0, 255]), 2);
    }

    img
}

/// Encode the canvas as RGBA8 PNG. Encoder settings are pinned so repeated
/// runs produce byte-identical files.
fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    out.flush()?;
    Ok(())
}
