use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "resources/cpu.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Inspecting icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    // The painted region starts at (10, 10); everything outside it should
    // still be transparent.
    println!("\nCanvas corners:");
    for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
        let p = rgba_img.get_pixel(x, y);
        println!("  ({x}, {y}): RGBA [{}, {}, {}, {}]", p[0], p[1], p[2], p[3]);
    }

    // Sample the top edge of the frame.
    let frame = rgba_img.get_pixel(width / 2, 10);
    println!("\nFrame sample (x={}, y=10):", width / 2);
    println!("  RGBA: [{}, {}, {}, {}]", frame[0], frame[1], frame[2], frame[3]);

    if frame[0] == 0 && frame[1] == 0 && frame[2] == 0 && frame[3] == 255 {
        println!("✓ Frame is opaque black");
    } else {
        println!("⚠ Frame sample is not opaque black");
    }
}
