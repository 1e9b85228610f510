//! Plain-text PPM (P3) output.

use std::io::{self, Write};

use crate::ImageBuffer;

/// Write an image as ASCII PPM.
///
/// Header `P3`, dimensions, max value 255, then one `r g b` line per pixel in
/// output order. Wrap the writer in a `BufWriter` for large images.
pub fn write_ppm<W: Write>(writer: &mut W, image: &ImageBuffer) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for [r, g, b] in image.to_rgb8() {
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, RenderConfig};
    use sheen_core::{Scene, Sphere};
    use sheen_math::{Color, Vec3};

    fn to_string(image: &ImageBuffer) -> String {
        let mut out = Vec::new();
        write_ppm(&mut out, image).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_pixel_lines() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::new(-3.0, 0.1, 7.0));

        assert_eq!(to_string(&image), "P3\n2 1\n255\n255 0 127\n0 25 255\n");
    }

    #[test]
    fn test_line_count_matches_resolution() {
        let image = ImageBuffer::new(3, 5);
        let text = to_string(&image);

        assert_eq!(text.lines().count(), 3 + 3 * 5);
        assert!(text.lines().skip(3).all(|line| line == "0 0 0"));
    }

    #[test]
    fn test_single_sphere_scene_is_byte_identical() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.75, Color::new(0.3, 0.6, 0.9), 0.0)
            .unwrap();
        let scene: Scene = vec![sphere].into_iter().collect();
        let config = RenderConfig::new()
            .with_resolution(4, 4)
            .with_eye(Vec3::new(0.0, 0.0, 2.0));

        let first = to_string(&render(&scene, &config).unwrap());
        let second = to_string(&render(&scene, &config).unwrap());

        assert_eq!(first, second);
        assert!(first.starts_with("P3\n4 4\n255\n"));
        assert_eq!(first.lines().count(), 3 + 16);

        for line in first.lines().skip(3) {
            let channels: Vec<u16> = line.split(' ').map(|c| c.parse().unwrap()).collect();
            assert_eq!(channels.len(), 3);
            assert!(channels.iter().all(|&c| c <= 255));
        }
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let image = ImageBuffer::new(2, 2);
        let err = write_ppm(&mut Broken, &image).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
