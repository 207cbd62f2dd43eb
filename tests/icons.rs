use hwicon_gen::icons::{
    bus_icon, cpu_icon, dma_icon, l2cache_icon, l3cache_icon, memory_icon, tracer_icon,
    ICON_HEIGHT, ICON_WIDTH, ICONS,
};
use image::{Rgba, RgbaImage};

fn all_icons() -> Vec<(&'static str, RgbaImage)> {
    ICONS.iter().map(|&(name, render)| (name, render())).collect()
}

/// Every icon has the fixed canvas size, an opaque black frame, and a
/// transparent margin outside the painted region.
#[test]
fn every_icon_is_framed_150x100() {
    for (name, img) in all_icons() {
        assert_eq!(img.width(), ICON_WIDTH, "{name} width");
        assert_eq!(img.height(), ICON_HEIGHT, "{name} height");

        // Frame pixels (top edge and both sides; the bottom edge carries
        // pins on some icons).
        for (x, y) in [(10, 10), (75, 10), (140, 10), (10, 50), (140, 50)] {
            assert_eq!(
                img.get_pixel(x, y),
                &Rgba([0, 0, 0, 255]),
                "{name} frame pixel at ({x}, {y})"
            );
        }

        // Corners and the left margin stay fully transparent.
        for (x, y) in [(0, 0), (149, 0), (0, 99), (149, 99), (5, 50)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "{name} margin pixel at ({x}, {y})");
        }
    }
}

/// The gradient body keeps the fixed channels constant and darkens the
/// interpolated channel from top to bottom.
#[test]
fn cpu_gradient_interpolates_down_the_canvas() {
    let img = cpu_icon();

    // x=75 sits between the core block and the cache banks, clear of any
    // structure.
    let top = img.get_pixel(75, 11);
    let bottom = img.get_pixel(75, 89);

    assert_eq!((top[0], top[1], top[3]), (65, 105, 255));
    assert_eq!((bottom[0], bottom[1], bottom[3]), (65, 105, 255));
    assert!(top[2] > bottom[2], "blue channel should fade with depth");
}

/// Rendering the same icon twice yields identical pixel buffers.
#[test]
fn rendering_is_deterministic() {
    for (name, render) in ICONS {
        assert_eq!(render().as_raw(), render().as_raw(), "{name} should be deterministic");
    }
}

/// Cells satisfying (row + col) % 3 == 0 are highlighted with a
/// translucent fill; the count is fixed by the grid geometry.
#[test]
fn l2cache_highlights_eight_cells() {
    let img = l2cache_icon();

    let mut highlighted = 0;
    for row in 0..4u32 {
        for col in 0..6u32 {
            // Sample the cell center: translucent fill means alpha 50,
            // plain gradient means alpha 255.
            let x = 20 + col * 20 + 8;
            let y = 20 + row * 18 + 7;
            match img.get_pixel(x, y)[3] {
                50 => highlighted += 1,
                255 => {}
                a => panic!("unexpected alpha {a} at cell ({row}, {col})"),
            }
        }
    }

    assert_eq!(highlighted, 8);
}

/// Same rule for L3 with (row + col) % 4 == 0 on the denser grid.
#[test]
fn l3cache_highlights_ten_cells() {
    let img = l3cache_icon();

    let mut highlighted = 0;
    for row in 0..5u32 {
        for col in 0..8u32 {
            let x = 15 + col * 15 + 6;
            let y = 15 + row * 15 + 6;
            match img.get_pixel(x, y)[3] {
                50 => highlighted += 1,
                255 => {}
                a => panic!("unexpected alpha {a} at cell ({row}, {col})"),
            }
        }
    }

    assert_eq!(highlighted, 10);
}

/// Junction dots sit on every lane crossing of the bus.
#[test]
fn bus_draws_junction_dots() {
    let img = bus_icon();

    for i in 0..4u32 {
        for j in 0..5u32 {
            let x = 30 + j * 20;
            let y = 25 + i * 15;
            assert_eq!(
                img.get_pixel(x, y),
                &Rgba([255, 255, 255, 255]),
                "junction at ({x}, {y})"
            );
        }
    }
}

/// The memory module body, chip blocks, and contact pins all land where
/// the geometry table says.
#[test]
fn memory_module_structure() {
    let img = memory_icon();

    // Module body between the chip rows.
    assert_eq!(img.get_pixel(60, 25), &Rgba([220, 220, 220, 255]));
    // First chip block.
    assert_eq!(img.get_pixel(40, 35), &Rgba([50, 50, 50, 255]));
    // A contact pin below the module.
    assert_eq!(img.get_pixel(30, 83), &Rgba([212, 175, 55, 255]));
}

/// The DMA label renders white glyph pixels inside the controller box.
#[test]
fn dma_label_is_printed() {
    let img = dma_icon();

    let white = (60..84)
        .flat_map(|x| (30..38).map(move |y| (x, y)))
        .filter(|&(x, y)| img.get_pixel(x, y) == &Rgba([255, 255, 255, 255]))
        .count();

    assert!(white > 0, "expected white glyph pixels in the label area");
}

/// The tracer screen is dark with the trace drawn in green on top.
#[test]
fn tracer_screen_and_trace() {
    let img = tracer_icon();

    // Screen interior, clear of the axes and the trace.
    assert_eq!(img.get_pixel(30, 20), &Rgba([20, 20, 20, 255]));
    // A trace vertex.
    assert_eq!(img.get_pixel(40, 40), &Rgba([0, 255, 0, 255]));
}
