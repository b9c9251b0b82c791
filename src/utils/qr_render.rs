use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

/// Quiet zone width in modules, per the QR standard's recommendation.
const QUIET_ZONE_MODULES: u32 = 4;

/// Render a QR code for `value` as an SVG document with the theme colors
/// applied. Unparsable colors fall back to black on white.
pub fn render_svg(value: &str, foreground: &str, background: &str, size: u32) -> Result<String> {
    let code = QrCode::with_error_correction_level(value.as_bytes(), EcLevel::M)
        .context("QR code generation failed")?;

    let dark = normalize_color(foreground, "#000000");
    let light = normalize_color(background, "#ffffff");

    let svg = code
        .render::<svg::Color>()
        .min_dimensions(size, size)
        .quiet_zone(true)
        .dark_color(svg::Color(&dark))
        .light_color(svg::Color(&light))
        .build();

    Ok(svg)
}

/// Rasterize a QR code for `value` into a PNG with the theme colors applied.
/// The module matrix is scaled up to roughly `size` pixels including the
/// quiet zone; unparsable colors fall back to black on white.
pub fn render_png(value: &str, foreground: &str, background: &str, size: u32) -> Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(value.as_bytes(), EcLevel::M)
        .context("QR code generation failed")?;

    let dark = parse_hex_color(foreground).unwrap_or(Rgb([0, 0, 0]));
    let light = parse_hex_color(background).unwrap_or(Rgb([255, 255, 255]));

    let width = code.width() as u32;
    let total_modules = width + 2 * QUIET_ZONE_MODULES;
    let scale = (size / total_modules).max(1);
    let dimension = total_modules * scale;

    let mut img = RgbImage::from_pixel(dimension, dimension, light);
    for (y, row) in code.to_colors().chunks(width as usize).enumerate() {
        for (x, module) in row.iter().enumerate() {
            if *module != qrcode::Color::Dark {
                continue;
            }
            let px = (x as u32 + QUIET_ZONE_MODULES) * scale;
            let py = (y as u32 + QUIET_ZONE_MODULES) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(px + dx, py + dy, dark);
                }
            }
        }
    }

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .context("PNG encoding failed")?;
    Ok(buffer.into_inner())
}

/// Parse a `#rrggbb` hex color. Theme colors are unvalidated strings, so
/// anything unparsable is rejected here and the caller falls back.
fn parse_hex_color(value: &str) -> Option<Rgb<u8>> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb([r, g, b]))
}

fn normalize_color(value: &str, fallback: &str) -> String {
    match parse_hex_color(value) {
        Some(Rgb([r, g, b])) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUE: &str = "upi://pay?pa=alice@bank&pn=Alice%20Doe&am=100";

    #[test]
    fn svg_embeds_normalized_theme_colors() {
        let svg = render_svg(VALUE, "#1E40AF", "#EFF6FF", 200).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#1e40af"));
        assert!(svg.contains("#eff6ff"));
    }

    #[test]
    fn svg_falls_back_on_bad_colors() {
        let svg = render_svg(VALUE, "\"><script>", "nope", 200).unwrap();
        assert!(svg.contains("#000000"));
        assert!(!svg.contains("script"));
    }

    #[test]
    fn png_output_has_png_signature() {
        let png = render_png(VALUE, "#000000", "#FFFFFF", 400).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn png_never_scales_below_one_pixel_per_module() {
        // A size smaller than the module count still produces an image
        let png = render_png(VALUE, "#000000", "#FFFFFF", 10).unwrap();
        assert!(!png.is_empty());
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_hex_color("#ff8000"), Some(Rgb([255, 128, 0])));
        assert_eq!(parse_hex_color("ff8000"), Some(Rgb([255, 128, 0])));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }
}
