mod canvas;
mod curve;
mod list;
mod paint;
mod painter;
mod text;

pub use canvas::{Canvas, Clip};
pub use curve::{Curve, CurveData, CurveSegment, Fill, WeakCurve};
pub use list::{DisplayList, DrawCommand, EstimatePainter};
pub use paint::{Blend, Paint, Shader};
pub use painter::Painter;
pub use text::{FontWeight, Paragraph, ParagraphData, TextAlign, TextStyle, WeakParagraph};
