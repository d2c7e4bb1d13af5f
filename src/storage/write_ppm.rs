use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

/// Writes the buffer as binary PPM. The format has no alpha channel, so the
/// constant opaque alpha byte is dropped from each pixel.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.canvas().width();
    let height = buffer.canvas().height();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;

    for pixel in buffer.buffer().chunks_exact(4) {
        file.write_all(&pixel[..3])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas::CanvasSize;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn test_written_file_has_header_and_rgb_payload() {
        let canvas = CanvasSize::new(2, 1).unwrap();
        let mut buffer = PixelBuffer::new(canvas);
        buffer
            .set_pixel(Point { x: 0, y: 0 }, Colour { r: 255, g: 0, b: 0 })
            .unwrap();
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 0, g: 0, b: 255 })
            .unwrap();

        let dir = std::env::temp_dir();
        let path = dir.join("fractal_painter_write_ppm_test.ppm");
        write_ppm(&buffer, &path).unwrap();

        let contents = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&contents[..header.len()], header);
        assert_eq!(&contents[header.len()..], &[255, 0, 0, 0, 0, 255]);
    }
}
