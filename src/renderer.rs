//! The bitmap-to-text renderer component.
//!
//! [`AsciiArtCanvas`] owns a drawing surface and turns its content into
//! ASCII art: colored or grayscale markup, or a bitmap of glyphs.

use std::borrow::Cow;
use std::cell::{OnceCell, RefCell};
use std::path::Path;
use std::rc::{Rc, Weak};

use image::RgbaImage;

use crate::ascii::{self, Charset, GlyphOptions, HtmlOptions, SampledGrid};
use crate::error::{Error, Result};
use crate::mount::Container;
use crate::surface::{Canvas, Context2d, Surface};

/// Renders the content of a drawing surface as ASCII art.
///
/// Every render call re-samples the surface, so output always reflects
/// the current pixels.
#[derive(Debug)]
pub struct AsciiArtCanvas<S: Surface = Canvas> {
    surface: S,
    ctx: OnceCell<Context2d>,
    parent: Option<Weak<RefCell<dyn Container>>>,
}

impl AsciiArtCanvas<Canvas> {
    /// Create a renderer over a fresh 300x150 transparent canvas.
    pub fn new() -> Self {
        Self::from_surface(Canvas::default())
    }

    /// Create a renderer over a bitmap given as straight RGBA bytes.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Canvas::from_rgba(width, height, data).map(Self::from_surface)
    }

    /// Create a renderer over a decoded image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Canvas::open(path).map(Self::from_surface)
    }
}

impl Default for AsciiArtCanvas<Canvas> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> AsciiArtCanvas<S> {
    fn from_surface(surface: S) -> Self {
        Self {
            surface,
            ctx: OnceCell::new(),
            parent: None,
        }
    }

    /// Create a renderer over a caller-supplied surface.
    ///
    /// Fails with [`Error::InvalidSurface`] if the surface does not pass
    /// its own validation.
    pub fn with_surface(surface: S) -> Result<Self> {
        surface.validate().map_err(Error::InvalidSurface)?;
        Ok(Self::from_surface(surface))
    }

    /// Drawing context of the surface, created on first use.
    pub fn ctx(&self) -> &Context2d {
        self.ctx.get_or_init(|| self.surface.context())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn set_width(&mut self, width: u32) {
        let height = self.surface.height();
        self.surface.set_size(width, height);
    }

    pub fn set_height(&mut self, height: u32) {
        let width = self.surface.width();
        self.surface.set_size(width, height);
    }

    /// Resize the surface, discarding its content.
    ///
    /// A `width` of 0 keeps the current width. A missing or zero `height`
    /// makes the surface square.
    pub fn resize(&mut self, width: u32, height: Option<u32>) -> &mut Self {
        let width = if width == 0 { self.width() } else { width };
        let height = height.filter(|&h| h != 0).unwrap_or(width);
        self.surface.set_size(width, height);
        self
    }

    /// Attach the surface to `container`.
    ///
    /// Containers that cannot hold children are left untouched. Mounting
    /// into a new container detaches the surface from the previous one.
    pub fn mount<C>(&mut self, container: &Rc<RefCell<C>>) -> &mut Self
    where
        C: Container + 'static,
    {
        let appended = match container.try_borrow_mut() {
            Ok(mut c) => c.append_child(self.surface.id()),
            Err(_) => {
                log::debug!("container busy, not mounting {}", self.surface.id());
                return self;
            }
        };
        if !appended {
            log::debug!("container rejected child {}", self.surface.id());
            return self;
        }

        let weak: Weak<RefCell<C>> = Rc::downgrade(container);
        let weak: Weak<RefCell<dyn Container>> = weak;
        if let Some(previous) = self.parent.replace(weak.clone()) {
            if !previous.ptr_eq(&weak) {
                detach(&previous, self.surface.id());
            }
        }
        self
    }

    /// Whether the surface is currently attached to a live container.
    pub fn is_mounted(&self) -> bool {
        self.parent
            .as_ref()
            .is_some_and(|parent| parent.strong_count() > 0)
    }

    /// Erase all pixel content.
    pub fn clear(&mut self) -> &mut Self {
        let (width, height) = (self.width(), self.height());
        self.surface.clear_rect(0, 0, width, height);
        self
    }

    /// Remove the surface from its container.
    pub fn destroy(&mut self) -> &mut Self {
        if let Some(parent) = self.parent.take() {
            detach(&parent, self.surface.id());
        }
        self
    }

    /// Composite `image` onto the surface at `(dx, dy)`.
    pub fn draw_image(&mut self, image: &RgbaImage, dx: i64, dy: i64) -> &mut Self {
        self.surface.draw_image(image, dx, dy);
        self
    }

    /// Composite `image` scaled to `dw × dh` onto the surface at `(dx, dy)`.
    pub fn draw_image_scaled(
        &mut self,
        image: &RgbaImage,
        dx: i64,
        dy: i64,
        dw: u32,
        dh: u32,
    ) -> &mut Self {
        self.surface.draw_image_scaled(image, dx, dy, dw, dh);
        self
    }

    /// Sample the surface into a grid whose longer side has at most
    /// `grid_size` cells.
    pub fn sampled_map(&self, grid_size: u32) -> Result<SampledGrid> {
        ascii::sample(&self.surface, self.ctx(), grid_size)
    }

    /// Render the surface as colored markup.
    pub fn to_colored_html(&self, options: &HtmlOptions) -> Result<String> {
        let grid = self.sampled_map(options.grid_size)?;
        let charset = charset_or(options.charset.as_ref(), Charset::colored);
        Ok(ascii::colored_markup(&grid, &charset, options.container))
    }

    /// Render the surface as grayscale markup.
    pub fn to_grayscale_html(&self, options: &HtmlOptions) -> Result<String> {
        let grid = self.sampled_map(options.grid_size)?;
        let charset = charset_or(options.charset.as_ref(), Charset::monochrome);
        Ok(ascii::grayscale_markup(&grid, &charset, options.container))
    }

    /// Render the surface as a bitmap of glyphs in each cell's color.
    pub fn to_colored_glyphs(&self, options: &GlyphOptions) -> Result<Canvas> {
        let grid = self.sampled_map(options.grid_size)?;
        let charset = charset_or(options.charset.as_ref(), Charset::colored);
        ascii::colored_glyphs(
            &grid,
            &charset,
            options.grid_size as usize,
            options.font_size,
            options.gap,
        )
    }

    /// Render the surface as a bitmap of black grayscale glyphs.
    pub fn to_grayscale_glyphs(&self, options: &GlyphOptions) -> Result<Canvas> {
        let grid = self.sampled_map(options.grid_size)?;
        let charset = charset_or(options.charset.as_ref(), Charset::monochrome);
        ascii::grayscale_glyphs(&grid, &charset, options.font_size, options.gap)
    }
}

fn charset_or(charset: Option<&Charset>, default: fn() -> Charset) -> Cow<'_, Charset> {
    charset.map_or_else(|| Cow::Owned(default()), Cow::Borrowed)
}

fn detach(parent: &Weak<RefCell<dyn Container>>, id: &str) {
    let Some(parent) = parent.upgrade() else {
        return;
    };
    match parent.try_borrow_mut() {
        Ok(mut container) => container.remove_child(id),
        Err(_) => log::warn!("container busy, could not detach {}", id),
    };
}
