use donate_core::{Affine, Canvas, Clip, CornerRadius, Curve, Offset, Paint, Painter, Paragraph, Rect};

use crate::painter::SkiaPainter;

pub struct SkiaCanvas<'a> {
    pub(crate) painter: &'a mut SkiaPainter,
    pub(crate) canvas:  &'a skia_safe::Canvas,
}

fn skia_rect(rect: Rect) -> skia_safe::Rect {
    skia_safe::Rect::new(rect.min.x, rect.min.y, rect.max.x, rect.max.y)
}

fn skia_rrect(rect: Rect, radius: CornerRadius) -> skia_safe::RRect {
    skia_safe::RRect::new_rect_radii(
        skia_rect(rect),
        &[
            skia_safe::Point::new(radius.top_left, radius.top_left),
            skia_safe::Point::new(radius.top_right, radius.top_right),
            skia_safe::Point::new(radius.bottom_right, radius.bottom_right),
            skia_safe::Point::new(radius.bottom_left, radius.bottom_left),
        ],
    )
}

impl Canvas for SkiaCanvas<'_> {
    fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    fn transform(&mut self, affine: Affine, f: &mut dyn FnMut(&mut dyn Canvas)) {
        let [a, b, c, d] = affine.matrix.matrix;

        let matrix = skia_safe::Matrix::new_all(
            a,
            b,
            affine.offset.x,
            c,
            d,
            affine.offset.y,
            0.0,
            0.0,
            1.0,
        );

        self.canvas.save();
        self.canvas.concat(&matrix);

        f(self);

        self.canvas.restore();
    }

    fn layer(&mut self, opacity: f32, f: &mut dyn FnMut(&mut dyn Canvas)) {
        self.canvas.save_layer_alpha_f(None, opacity.clamp(0.0, 1.0));
        f(self);
        self.canvas.restore();
    }

    fn clip(&mut self, clip: &Clip, f: &mut dyn FnMut(&mut dyn Canvas)) {
        self.canvas.save();

        match clip {
            Clip::Rect(rect, radius) if radius.is_zero() => {
                self.canvas.clip_rect(
                    skia_rect(*rect),
                    skia_safe::ClipOp::Intersect,
                    true, // enable anti aliasing
                );
            }

            Clip::Rect(rect, radius) => {
                self.canvas.clip_rrect(
                    skia_rrect(*rect, *radius),
                    skia_safe::ClipOp::Intersect,
                    true, // enable anti aliasing
                );
            }
        }

        f(self);

        self.canvas.restore();
    }

    fn fill(&mut self, paint: &Paint) {
        let paint = self.painter.create_paint(paint);
        self.canvas.draw_paint(paint);
    }

    fn draw_curve(&mut self, curve: &Curve, paint: &Paint) {
        let path = self.painter.create_path(curve).clone();
        let paint = self.painter.create_paint(paint);

        self.canvas.draw_path(&path, paint);
    }

    fn draw_rect(&mut self, rect: Rect, radius: CornerRadius, paint: &Paint) {
        let paint = self.painter.create_paint(paint);

        if radius.is_zero() {
            self.canvas.draw_rect(skia_rect(rect), paint);
        } else {
            self.canvas.draw_rrect(skia_rrect(rect, radius), paint);
        }
    }

    fn draw_text(&mut self, paragraph: &Paragraph, max_width: f32, offset: Offset) {
        let paragraph = self.painter.create_paragraph(paragraph, max_width + 1.0);
        paragraph.paint(self.canvas, (offset.x, offset.y));
    }
}
