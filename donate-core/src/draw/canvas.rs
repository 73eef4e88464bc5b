use crate::{Affine, CornerRadius, Curve, Offset, Paint, Painter, Paragraph, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum Clip {
    Rect(Rect, CornerRadius),
}

impl From<Rect> for Clip {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect, CornerRadius::ZERO)
    }
}

impl Clip {
    pub const fn bounds(&self) -> Rect {
        match self {
            Clip::Rect(rect, _) => *rect,
        }
    }
}

/// Drawing surface handed to widgets.
///
/// Scoped operations (`transform`, `layer`, `clip`) only apply to what is
/// drawn inside `f`.
pub trait Canvas {
    fn painter(&mut self) -> &mut dyn Painter;

    fn transform(&mut self, affine: Affine, f: &mut dyn FnMut(&mut dyn Canvas));

    /// Draw `f` into an offscreen layer composited with `opacity`.
    fn layer(&mut self, opacity: f32, f: &mut dyn FnMut(&mut dyn Canvas));

    fn clip(&mut self, clip: &Clip, f: &mut dyn FnMut(&mut dyn Canvas));

    fn fill(&mut self, paint: &Paint);

    fn draw_curve(&mut self, curve: &Curve, paint: &Paint);

    fn draw_rect(&mut self, rect: Rect, corners: CornerRadius, paint: &Paint);

    fn draw_text(&mut self, paragraph: &Paragraph, max_width: f32, offset: Offset);
}
