#![warn(clippy::unwrap_used)]

mod canvas;
mod painter;
mod raster;

pub use canvas::SkiaCanvas;
pub use painter::SkiaPainter;
pub use raster::RasterSurface;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("surface error: could not allocate {width}x{height} pixels")]
    Surface { width: u32, height: u32 },

    #[error("encode error: png encoding failed")]
    Encode,

    #[error("read error: pixels could not be read back")]
    ReadPixels,
}
