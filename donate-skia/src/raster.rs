use donate_core::Color;

use crate::{Error, SkiaCanvas, SkiaPainter};

/// A CPU backed surface frames are drawn into.
pub struct RasterSurface {
    surface:      skia_safe::Surface,
    width:        u32,
    height:       u32,
    scale_factor: f32,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        Ok(Self {
            surface: Self::create_surface(width, height)?,
            width,
            height,
            scale_factor: 1.0,
        })
    }

    fn create_surface(width: u32, height: u32) -> Result<skia_safe::Surface, Error> {
        let size = skia_safe::ISize::new(
            width.max(1) as i32,
            height.max(1) as i32,
        );

        skia_safe::surfaces::raster_n32_premul(size).ok_or(Error::Surface { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Physical pixels per logical pixel used by [`RasterSurface::draw`].
    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if self.width == width && self.height == height {
            return Ok(());
        }

        self.surface = Self::create_surface(width, height)?;
        self.width = width;
        self.height = height;

        tracing::debug!(width, height, "raster surface resized");

        Ok(())
    }

    /// Clear to `clear_color` and draw a frame with `f`.
    pub fn draw<T>(
        &mut self,
        painter: &mut SkiaPainter,
        clear_color: Color,
        f: impl FnOnce(&mut SkiaCanvas) -> T,
    ) -> T {
        let canvas = self.surface.canvas();

        canvas.reset_matrix();
        canvas.scale((self.scale_factor, self.scale_factor));
        canvas.clear(skia_safe::Color4f::new(
            clear_color.r,
            clear_color.g,
            clear_color.b,
            clear_color.a,
        ));

        let mut canvas = SkiaCanvas { painter, canvas };
        f(&mut canvas)
    }

    /// The last frame as a PNG file.
    pub fn png(&mut self) -> Result<Vec<u8>, Error> {
        let pixmap = self.surface.peek_pixels().ok_or(Error::ReadPixels)?;
        let mut bytes = Vec::new();

        if !skia_safe::png_encoder::encode(&pixmap, &mut bytes, &Default::default()) {
            tracing::error!("png encoding failed");
            return Err(Error::Encode);
        }

        Ok(bytes)
    }

    /// The last frame as unpremultiplied RGBA, row by row.
    pub fn pixels(&mut self) -> Result<Vec<u8>, Error> {
        let width = self.width.max(1) as usize;
        let height = self.height.max(1) as usize;

        let info = skia_safe::ImageInfo::new(
            (width as i32, height as i32),
            skia_safe::ColorType::RGBA8888,
            skia_safe::AlphaType::Unpremul,
            None,
        );

        let mut pixels = vec![0; width * height * 4];

        if !self.surface.read_pixels(&info, &mut pixels, width * 4, (0, 0)) {
            return Err(Error::ReadPixels);
        }

        Ok(pixels)
    }
}
