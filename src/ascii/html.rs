//! Markup output for sampled grids.

use super::charset::Charset;
use super::downsample::{SampledCell, SampledGrid, DEFAULT_GRID_SIZE};
use super::mapping::{grayscale_glyph, markup_cycle_index, FALLBACK_GLYPH};

/// Class attribute of the grid-layout wrapper element.
pub const CONTAINER_CLASS: &str = "ascii-art-container";

/// Options for the markup renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Bound on the longer side of the grid, in cells. Default: 100
    pub grid_size: u32,
    /// Glyphs to render with. Default: `@` for colored output, the
    /// monochrome ramp for grayscale output
    pub charset: Option<Charset>,
    /// Wrap the cells in a CSS grid container element. Default: false
    pub container: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            charset: None,
            container: false,
        }
    }
}

/// CSS color of a cell: `rgba(r, g, b, alpha)` with alpha to two decimals.
pub fn rgba_css(cell: &SampledCell) -> String {
    format!(
        "rgba({}, {}, {}, {:.2})",
        cell.r,
        cell.g,
        cell.b,
        f64::from(cell.a) / 255.0
    )
}

/// Append `glyph` to `out`, escaping HTML-significant characters.
pub fn push_escaped(out: &mut String, glyph: char) {
    match glyph {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        c => out.push(c),
    }
}

/// Wrap rendered cells in a grid-layout element sized `cols × rows`.
///
/// The dimensions are also exposed as the `--char-width` and
/// `--char-height` custom properties.
pub fn wrap_in_container(inner: &str, cols: usize, rows: usize) -> String {
    format!(
        "<div class=\"{}\" style=\"display: grid; grid-template-columns: repeat({}, 1fr); --char-width: {}; --char-height: {};\">{}</div>",
        CONTAINER_CLASS, cols, cols, rows, inner
    )
}

/// Render each cell as a glyph colored with the cell's RGBA value.
///
/// Glyphs cycle through `charset` with a counter that advances once per
/// cell in scan order. Rows are separated by `\n`, or laid out by the grid
/// container when `container` is set.
pub fn colored_markup(grid: &SampledGrid, charset: &Charset, container: bool) -> String {
    let mut output = String::new();
    let mut counter = 0;

    for (row_index, row) in grid.iter_rows().enumerate() {
        if row_index > 0 && !container {
            output.push('\n');
        }
        for cell in row {
            let glyph = charset
                .get(markup_cycle_index(counter, charset.len()))
                .unwrap_or(FALLBACK_GLYPH);
            counter += 1;

            output.push_str(&format!("<span style=\"color: {};\">", rgba_css(cell)));
            push_escaped(&mut output, glyph);
            output.push_str("</span>");
        }
    }

    if container {
        wrap_in_container(&output, grid.cols(), grid.rows())
    } else {
        output
    }
}

/// Render each cell as the grayscale glyph for its luminance.
///
/// Without a container the output is plain text, one line per row. With a
/// container every glyph becomes a `<span>` grid item.
pub fn grayscale_markup(grid: &SampledGrid, charset: &Charset, container: bool) -> String {
    let mut output = String::new();

    for (row_index, row) in grid.iter_rows().enumerate() {
        if row_index > 0 && !container {
            output.push('\n');
        }
        for cell in row {
            let glyph = grayscale_glyph(cell.luminance, charset);
            if container {
                output.push_str("<span>");
                push_escaped(&mut output, glyph);
                output.push_str("</span>");
            } else {
                push_escaped(&mut output, glyph);
            }
        }
    }

    if container {
        wrap_in_container(&output, grid.cols(), grid.rows())
    } else {
        output
    }
}
