#[cfg(feature = "skia")]
mod app;

#[cfg(feature = "skia")]
pub use app::App;

pub use donate_core::*;

#[cfg(feature = "skia")]
pub use donate_skia::{Error, RasterSurface, SkiaCanvas, SkiaPainter};

pub mod prelude {
    pub use donate_core::widgets::{Caption, DonateButton, DonateStyle, DonateTimings, Phase};
    pub use donate_core::{Color, Point, PointerButton, PointerId, Root, RootSignal, Size};

    #[cfg(feature = "skia")]
    pub use crate::App;
}
