//! Unit tests for sampling, character mapping and output generation.
//!
//! These tests verify the core rendering behaviour:
//! - Luminance of sampled cells
//! - Grid shape and edge dropping
//! - Grayscale and colored glyph selection
//! - Markup and glyph-image output

use ascii_canvas::ascii::*;
use ascii_canvas::surface::{Context2d, Surface, TextStyle};
use ascii_canvas::{AsciiArtCanvas, Canvas, Error};
use image::imageops;
use image::{Rgba, RgbaImage};

const EPSILON: f64 = 1e-9;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> AsciiArtCanvas {
    let data = rgba.repeat((width * height) as usize);
    AsciiArtCanvas::from_rgba(width, height, data).unwrap()
}

fn charset(s: &str) -> Charset {
    s.parse().unwrap()
}

// ==================== Luminance Tests ====================

#[test]
fn test_black_surface_luminance_zero() {
    let art = solid(10, 10, [0, 0, 0, 255]);
    let grid = art.sampled_map(5).unwrap();
    assert!(grid.cells().iter().all(|c| c.luminance == 0.0));
}

#[test]
fn test_white_surface_luminance_one() {
    let art = solid(10, 10, [255, 255, 255, 255]);
    let grid = art.sampled_map(5).unwrap();
    assert!(grid
        .cells()
        .iter()
        .all(|c| (c.luminance - 1.0).abs() < EPSILON));
}

#[test]
fn test_uniform_red_round_trip() {
    let art = solid(100, 100, [255, 0, 0, 255]);
    let grid = art.sampled_map(10).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (10, 10));
    for cell in grid.cells() {
        assert_eq!((cell.r, cell.g, cell.b, cell.a), (255, 0, 0, 255));
        assert!((cell.luminance - 0.2126).abs() < EPSILON);
    }
}

// ==================== Grid Shape Tests ====================

#[test]
fn test_grid_shape_follows_unit() {
    // unit = floor(250 / 100) = 2
    let art = solid(250, 121, [0, 0, 0, 255]);
    let grid = art.sampled_map(100).unwrap();
    assert_eq!(grid.cols(), 125);
    assert_eq!(grid.rows(), 60);
    assert!(grid.iter_rows().all(|row| row.len() == 125));
}

#[test]
fn test_grid_shape_portrait() {
    // unit = floor(90 / 20) = 4; 30 / 4 = 7 columns, 90 / 4 = 22 rows
    let art = solid(30, 90, [0, 0, 0, 255]);
    let grid = art.sampled_map(20).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (7, 22));
}

#[test]
fn test_unit_one_keeps_every_pixel() {
    let art = solid(105, 105, [1, 2, 3, 4]);
    let grid = art.sampled_map(100).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (105, 105));
    assert_eq!(grid.len(), 105 * 105);
}

#[test]
fn test_surface_smaller_than_grid_size_fails() {
    let art = solid(99, 99, [0, 0, 0, 255]);
    let err = art.sampled_map(100).unwrap_err();
    assert!(matches!(err, Error::InvalidSize { .. }));
}

#[test]
fn test_zero_grid_size_fails() {
    let art = solid(10, 10, [0, 0, 0, 255]);
    assert!(matches!(art.sampled_map(0), Err(Error::InvalidGridSize)));
}

#[test]
fn test_partial_block_average_excluded() {
    // 5x4 at grid size 2: unit 2, the fifth column is dropped
    let mut data = [0u8, 0, 0, 255].repeat(20);
    for y in 0..4 {
        let idx = (y * 5 + 4) * 4;
        data[idx] = 255;
    }
    let art = AsciiArtCanvas::from_rgba(5, 4, data).unwrap();
    let grid = art.sampled_map(2).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (2, 2));
    assert!(grid.cells().iter().all(|c| c.r == 0));
}

// ==================== Character Mapping Tests ====================

#[test]
fn test_grayscale_index_monotonic() {
    let len = MONOCHROME_CHARSET.len();
    let mut previous = 0;
    for step in 0..=1000 {
        let luminance = step as f64 / 1000.0;
        let index = grayscale_index(luminance, len).unwrap();
        assert!(index >= previous, "index decreased at {}", luminance);
        previous = index;
    }
    assert_eq!(previous, len - 1);
}

#[test]
fn test_grayscale_darkest_and_lightest() {
    let set = Charset::monochrome();
    assert_eq!(grayscale_glyph(0.0, &set), '@');
    assert_eq!(grayscale_glyph(1.0, &set), ' ');
}

// ==================== Markup Tests ====================

#[test]
fn test_grayscale_markup_rows_joined_by_newline() {
    let art = solid(4, 4, [0, 0, 0, 255]);
    let html = art
        .to_grayscale_html(&HtmlOptions {
            grid_size: 2,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(html, "@@\n@@");
}

#[test]
fn test_grayscale_markup_white_is_lightest_glyph() {
    let art = solid(2, 1, [255, 255, 255, 255]);
    let html = art
        .to_grayscale_html(&HtmlOptions {
            grid_size: 2,
            charset: Some(charset("#.")),
            container: false,
        })
        .unwrap();
    assert_eq!(html, "..");
}

#[test]
fn test_grayscale_markup_escapes_glyphs() {
    let art = solid(2, 1, [0, 0, 0, 255]);
    let html = art
        .to_grayscale_html(&HtmlOptions {
            grid_size: 2,
            charset: Some(charset("<>")),
            container: false,
        })
        .unwrap();
    assert_eq!(html, "&lt;&lt;");
}

#[test]
fn test_grayscale_markup_container() {
    let art = solid(2, 2, [0, 0, 0, 255]);
    let html = art
        .to_grayscale_html(&HtmlOptions {
            grid_size: 2,
            charset: None,
            container: true,
        })
        .unwrap();
    assert_eq!(
        html,
        "<div class=\"ascii-art-container\" style=\"display: grid; grid-template-columns: repeat(2, 1fr); --char-width: 2; --char-height: 2;\"><span>@</span><span>@</span><span>@</span><span>@</span></div>"
    );
}

#[test]
fn test_colored_markup_styles_each_cell() {
    let data = vec![255, 0, 0, 255, 0, 0, 255, 128];
    let art = AsciiArtCanvas::from_rgba(2, 1, data).unwrap();
    let html = art
        .to_colored_html(&HtmlOptions {
            grid_size: 2,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(
        html,
        "<span style=\"color: rgba(255, 0, 0, 1.00);\">@</span><span style=\"color: rgba(0, 0, 255, 0.50);\">@</span>"
    );
}

#[test]
fn test_colored_markup_container_has_no_row_separator() {
    let art = solid(2, 2, [0, 0, 0, 255]);
    let html = art
        .to_colored_html(&HtmlOptions {
            grid_size: 2,
            charset: None,
            container: true,
        })
        .unwrap();
    assert!(html.starts_with("<div class=\"ascii-art-container\""));
    assert!(html.contains("--char-width: 2; --char-height: 2;"));
    assert!(!html.contains('\n'));
    assert_eq!(html.matches("<span").count(), 4);
}

/// Glyphs of a colored markup string, in order.
fn markup_glyphs(html: &str) -> Vec<char> {
    html.split("</span>")
        .filter_map(|part| part.rsplit('>').next())
        .filter_map(|glyph| glyph.chars().next())
        .collect()
}

#[test]
fn test_colored_markup_cycles_2x2() {
    let art = solid(4, 4, [0, 0, 0, 255]);
    let html = art
        .to_colored_html(&HtmlOptions {
            grid_size: 2,
            charset: Some(charset("@#*")),
            container: false,
        })
        .unwrap();
    assert_eq!(markup_glyphs(&html), vec!['@', '#', '*', '@']);
}

#[test]
fn test_colored_markup_counter_runs_across_rows() {
    // 2 columns x 4 rows: counter 0..8 modulo 3
    let art = solid(4, 8, [0, 0, 0, 255]);
    let html = art
        .to_colored_html(&HtmlOptions {
            grid_size: 4,
            charset: Some(charset("@#*")),
            container: false,
        })
        .unwrap();
    let expected: Vec<char> = (0..8)
        .map(|i| ['@', '#', '*'][markup_cycle_index(i, 3)])
        .collect();
    assert_eq!(expected, vec!['@', '#', '*', '@', '#', '*', '@', '#']);
    assert_eq!(markup_glyphs(&html), expected);
}

// ==================== Glyph Image Tests ====================

const FONT_SIZE: u32 = 10;
const GAP: u32 = 4;
const PITCH: u32 = FONT_SIZE + GAP;

/// Render `glyph` alone into a cell-sized bitmap.
fn reference_cell(glyph: char, color: Rgba<u8>) -> RgbaImage {
    let mut canvas = Canvas::new(PITCH, PITCH);
    let ctx = canvas.context();
    canvas.fill_text(&ctx, glyph, 0, FONT_SIZE as i32, &TextStyle::new(FONT_SIZE, color));
    canvas.into_image()
}

/// Identify which glyph of `glyphs` was drawn in each cell.
fn identify_cells(image: &RgbaImage, cols: u32, rows: u32, glyphs: &[char], color: Rgba<u8>) -> Vec<char> {
    let references: Vec<(char, RgbaImage)> =
        glyphs.iter().map(|&g| (g, reference_cell(g, color))).collect();
    let mut found = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let cell = imageops::crop_imm(image, col * PITCH, row * PITCH, PITCH, PITCH).to_image();
            let glyph = references
                .iter()
                .find(|(_, reference)| *reference == cell)
                .map(|(g, _)| *g)
                .expect("cell matches no reference glyph");
            found.push(glyph);
        }
    }
    found
}

#[test]
fn test_glyph_image_dimensions() {
    let art = solid(40, 20, [0, 0, 0, 255]);
    let canvas = art
        .to_grayscale_glyphs(&GlyphOptions {
            grid_size: 4,
            charset: None,
            font_size: 10,
            gap: 2,
        })
        .unwrap();
    // 4x2 cells at a pitch of 12
    assert_eq!((canvas.width(), canvas.height()), (48, 24));
}

#[test]
fn test_glyph_image_oversized_font_is_error() {
    let art = solid(4, 4, [0, 0, 0, 255]);
    let options = GlyphOptions {
        grid_size: 2,
        font_size: u32::MAX / 2,
        ..Default::default()
    };
    assert!(matches!(
        art.to_grayscale_glyphs(&options),
        Err(Error::GlyphImageTooLarge { .. })
    ));
    assert!(matches!(
        art.to_colored_glyphs(&options),
        Err(Error::GlyphImageTooLarge { .. })
    ));
}

#[test]
fn test_glyph_image_rejects_block_preset() {
    let art = solid(4, 4, [128, 128, 128, 255]);
    let options = GlyphOptions {
        grid_size: 2,
        charset: Some(Preset::Blocks.into()),
        ..Default::default()
    };
    let err = art.to_grayscale_glyphs(&options).unwrap_err();
    assert!(matches!(err, Error::UnsupportedGlyph('░')));
    assert!(err.to_string().contains("printable ASCII"));

    // Markup output can still use the block preset
    let html = art
        .to_grayscale_html(&HtmlOptions {
            grid_size: 2,
            charset: Some(Preset::Blocks.into()),
            container: false,
        })
        .unwrap();
    assert!(html.chars().all(|c| BLOCKS_CHARSET.contains(&c) || c == '\n'));
}

#[test]
fn test_grayscale_glyphs_are_black() {
    let art = solid(20, 20, [0, 0, 0, 255]);
    let canvas = art
        .to_grayscale_glyphs(&GlyphOptions {
            grid_size: 2,
            ..Default::default()
        })
        .unwrap();
    let image = canvas.as_image();
    assert!(image.pixels().any(|p| p.0 == [0, 0, 0, 255]));
    assert!(image
        .pixels()
        .all(|p| p.0 == [0, 0, 0, 255] || p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_grayscale_glyphs_white_surface_is_blank() {
    // Lightest glyph of the default ramp is a space
    let art = solid(20, 20, [255, 255, 255, 255]);
    let canvas = art
        .to_grayscale_glyphs(&GlyphOptions {
            grid_size: 2,
            ..Default::default()
        })
        .unwrap();
    assert!(canvas.as_image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_grayscale_glyphs_select_by_luminance() {
    let black = Rgba([0, 0, 0, 255]);
    let art = solid(4, 4, [0, 0, 0, 255]);
    let canvas = art
        .to_grayscale_glyphs(&GlyphOptions {
            grid_size: 2,
            charset: Some(charset("#*")),
            font_size: FONT_SIZE,
            gap: GAP,
        })
        .unwrap();
    let found = identify_cells(canvas.as_image(), 2, 2, &['#', '*'], black);
    assert_eq!(found, vec!['#'; 4]);
}

#[test]
fn test_colored_glyphs_use_cell_color() {
    let art = solid(20, 20, [10, 200, 30, 255]);
    let canvas = art
        .to_colored_glyphs(&GlyphOptions {
            grid_size: 2,
            ..Default::default()
        })
        .unwrap();
    let image = canvas.as_image();
    assert!(image.pixels().any(|p| p.0 == [10, 200, 30, 255]));
    assert!(image
        .pixels()
        .all(|p| p.0 == [10, 200, 30, 255] || p.0 == [0, 0, 0, 0]));
}

#[test]
fn test_colored_glyphs_cycle_2x2() {
    let color = Rgba([0, 0, 0, 255]);
    let art = solid(4, 4, color.0);
    let canvas = art
        .to_colored_glyphs(&GlyphOptions {
            grid_size: 2,
            charset: Some(charset("@#*")),
            font_size: FONT_SIZE,
            gap: GAP,
        })
        .unwrap();
    let found = identify_cells(canvas.as_image(), 2, 2, &['@', '#', '*'], color);
    // (row * 2 + col) % 3
    assert_eq!(found, vec!['@', '#', '*', '@']);
}

#[test]
fn test_colored_glyphs_index_uses_grid_size_as_row_width() {
    // 2 columns x 4 rows at grid size 4: index = (row * 4 + col) % 3
    let color = Rgba([0, 0, 0, 255]);
    let art = solid(4, 8, color.0);
    let canvas = art
        .to_colored_glyphs(&GlyphOptions {
            grid_size: 4,
            charset: Some(charset("@#*")),
            font_size: FONT_SIZE,
            gap: GAP,
        })
        .unwrap();
    let glyphs = ['@', '#', '*'];
    let expected: Vec<char> = (0..4)
        .flat_map(|row| (0..2).map(move |col| glyphs[glyph_cycle_index(row, col, 4, 3)]))
        .collect();
    assert_eq!(expected, vec!['@', '#', '#', '*', '*', '@', '@', '#']);
    assert_eq!(identify_cells(canvas.as_image(), 2, 4, &glyphs, color), expected);
}

#[test]
fn test_glyph_zero_font_size_fails() {
    let art = solid(4, 4, [0, 0, 0, 255]);
    let err = art
        .to_colored_glyphs(&GlyphOptions {
            grid_size: 2,
            font_size: 0,
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFontSize));
}

// ==================== Determinism Tests ====================

#[test]
fn test_render_is_deterministic() {
    let mut data = Vec::new();
    for i in 0..(32u32 * 32) {
        data.extend_from_slice(&[(i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8, 255]);
    }
    let art = AsciiArtCanvas::from_rgba(32, 32, data).unwrap();
    let html = HtmlOptions {
        grid_size: 8,
        ..Default::default()
    };
    let glyphs = GlyphOptions {
        grid_size: 8,
        ..Default::default()
    };

    assert_eq!(art.to_colored_html(&html).unwrap(), art.to_colored_html(&html).unwrap());
    assert_eq!(art.to_grayscale_html(&html).unwrap(), art.to_grayscale_html(&html).unwrap());
    assert_eq!(
        art.to_colored_glyphs(&glyphs).unwrap().as_image(),
        art.to_colored_glyphs(&glyphs).unwrap().as_image()
    );
    assert_eq!(
        art.to_grayscale_glyphs(&glyphs).unwrap().as_image(),
        art.to_grayscale_glyphs(&glyphs).unwrap().as_image()
    );
}

// ==================== Surface Contract Tests ====================

/// A surface whose pixel buffer disagrees with its reported size.
#[derive(Debug)]
struct TruncatedSurface;

impl Surface for TruncatedSurface {
    fn id(&self) -> &str {
        "truncated"
    }
    fn width(&self) -> u32 {
        4
    }
    fn height(&self) -> u32 {
        4
    }
    fn set_size(&mut self, _width: u32, _height: u32) {}
    fn context(&self) -> Context2d {
        Context2d::default()
    }
    fn validate(&self) -> Result<(), String> {
        Err("pixel buffer holds 0 bytes, expected 64".to_string())
    }
    fn get_image_data(&self, _ctx: &Context2d, _x: u32, _y: u32, _w: u32, _h: u32) -> Vec<u8> {
        Vec::new()
    }
    fn clear_rect(&mut self, _x: u32, _y: u32, _w: u32, _h: u32) {}
    fn fill_text(&mut self, _ctx: &Context2d, _glyph: char, _x: i32, _y: i32, _style: &TextStyle) {}
    fn draw_image(&mut self, _image: &RgbaImage, _dx: i64, _dy: i64) {}
    fn draw_image_scaled(&mut self, _image: &RgbaImage, _dx: i64, _dy: i64, _dw: u32, _dh: u32) {}
}

#[test]
fn test_invalid_surface_rejected() {
    let err = AsciiArtCanvas::with_surface(TruncatedSurface).unwrap_err();
    assert!(matches!(err, Error::InvalidSurface(ref msg) if msg.contains("64")));
}

#[test]
fn test_valid_surface_accepted() {
    let art = AsciiArtCanvas::with_surface(Canvas::new(8, 8)).unwrap();
    assert_eq!(art.width(), 8);
}

#[test]
fn test_mismatched_rgba_rejected() {
    let err = AsciiArtCanvas::from_rgba(3, 3, vec![0; 10]).unwrap_err();
    assert!(matches!(err, Error::InvalidSurface(_)));
}

// ==================== Serialization Tests ====================

#[test]
fn test_sampled_cell_serializes_fields() {
    let cell = SampledCell::new(255, 0, 0, 255);
    let value = serde_json::to_value(cell).unwrap();
    assert_eq!(value["r"], 255);
    assert_eq!(value["g"], 0);
    assert_eq!(value["b"], 0);
    assert_eq!(value["a"], 255);
    assert!((value["luminance"].as_f64().unwrap() - 0.2126).abs() < EPSILON);
}
