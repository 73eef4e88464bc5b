use crate::{
    Affine, Canvas, Clip, CornerRadius, Curve, Offset, Paint, Painter, Paragraph, Rect, Size,
};

/// A recorded draw call, with the transform and opacity in effect.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill {
        paint:     Paint,
        transform: Affine,
        opacity:   f32,
        clip:      Option<Clip>,
    },
    Curve {
        curve:     Curve,
        paint:     Paint,
        transform: Affine,
        opacity:   f32,
    },
    Rect {
        rect:      Rect,
        corners:   CornerRadius,
        paint:     Paint,
        transform: Affine,
        opacity:   f32,
    },
    Text {
        text:      String,
        offset:    Offset,
        max_width: f32,
        transform: Affine,
        opacity:   f32,
    },
}

impl DrawCommand {
    pub const fn transform(&self) -> Affine {
        match self {
            DrawCommand::Fill { transform, .. }
            | DrawCommand::Curve { transform, .. }
            | DrawCommand::Rect { transform, .. }
            | DrawCommand::Text { transform, .. } => *transform,
        }
    }

    pub const fn opacity(&self) -> f32 {
        match self {
            DrawCommand::Fill { opacity, .. }
            | DrawCommand::Curve { opacity, .. }
            | DrawCommand::Rect { opacity, .. }
            | DrawCommand::Text { opacity, .. } => *opacity,
        }
    }
}

/// Measures text from the font size alone.
///
/// Every glyph is `0.5 * font_size` wide and a line is `1.2 * font_size`
/// tall, which is enough for headless layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimatePainter;

impl Painter for EstimatePainter {
    fn measure_text(&mut self, paragraph: &Paragraph, max_width: f32) -> Size {
        let width = paragraph.text.chars().count() as f32 * paragraph.style.font_size * 0.5;

        Size::new(
            width.min(max_width),
            paragraph.style.font_size * 1.2,
        )
    }
}

/// A [`Canvas`] that records what is drawn instead of rasterizing it.
pub struct DisplayList<P = EstimatePainter> {
    painter:   P,
    commands:  Vec<DrawCommand>,
    transform: Affine,
    opacity:   f32,
    clip:      Option<Clip>,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new(EstimatePainter)
    }
}

impl<P: Painter> DisplayList<P> {
    pub fn new(painter: P) -> Self {
        Self {
            painter,
            commands: Vec::new(),
            transform: Affine::IDENTITY,
            opacity: 1.0,
            clip: None,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded text runs, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn scoped(
        &mut self,
        transform: Affine,
        opacity: f32,
        clip: Option<Clip>,
        f: &mut dyn FnMut(&mut dyn Canvas),
    ) {
        let saved = (self.transform, self.opacity, self.clip.take());

        self.transform = transform;
        self.opacity = opacity;
        self.clip = clip.or_else(|| saved.2.clone());

        f(self);

        (self.transform, self.opacity, self.clip) = saved;
    }
}

impl<P: Painter> Canvas for DisplayList<P> {
    fn painter(&mut self) -> &mut dyn Painter {
        &mut self.painter
    }

    fn transform(&mut self, affine: Affine, f: &mut dyn FnMut(&mut dyn Canvas)) {
        self.scoped(self.transform * affine, self.opacity, None, f);
    }

    fn layer(&mut self, opacity: f32, f: &mut dyn FnMut(&mut dyn Canvas)) {
        self.scoped(self.transform, self.opacity * opacity, None, f);
    }

    fn clip(&mut self, clip: &Clip, f: &mut dyn FnMut(&mut dyn Canvas)) {
        self.scoped(self.transform, self.opacity, Some(clip.clone()), f);
    }

    fn fill(&mut self, paint: &Paint) {
        self.commands.push(DrawCommand::Fill {
            paint:     paint.clone(),
            transform: self.transform,
            opacity:   self.opacity,
            clip:      self.clip.clone(),
        });
    }

    fn draw_curve(&mut self, curve: &Curve, paint: &Paint) {
        self.commands.push(DrawCommand::Curve {
            curve:     curve.clone(),
            paint:     paint.clone(),
            transform: self.transform,
            opacity:   self.opacity,
        });
    }

    fn draw_rect(&mut self, rect: Rect, corners: CornerRadius, paint: &Paint) {
        self.commands.push(DrawCommand::Rect {
            rect,
            corners,
            paint: paint.clone(),
            transform: self.transform,
            opacity: self.opacity,
        });
    }

    fn draw_text(&mut self, paragraph: &Paragraph, max_width: f32, offset: Offset) {
        self.commands.push(DrawCommand::Text {
            text: paragraph.text.clone(),
            offset,
            max_width,
            transform: self.transform,
            opacity: self.opacity,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Affine, Canvas, Clip, Color, CornerRadius, DisplayList, DrawCommand, Offset, Paint,
        Point, Rect, Size,
    };

    #[test]
    fn scopes_restore_state() {
        let mut list = DisplayList::default();
        let rect = Rect::min_size(Point::ORIGIN, Size::new(10.0, 10.0));

        list.transform(Affine::translate(Offset::new(5.0, 0.0)), &mut |canvas| {
            canvas.layer(0.5, &mut |canvas| {
                canvas.draw_rect(rect, CornerRadius::ZERO, &Paint::from(Color::WHITE));
            });
        });

        list.draw_rect(rect, CornerRadius::ZERO, &Paint::from(Color::BLUE));

        let [inner, outer] = list.commands() else {
            panic!("expected two commands");
        };

        assert_eq!(inner.opacity(), 0.5);
        assert_eq!(inner.transform(), Affine::translate(Offset::new(5.0, 0.0)));
        assert_eq!(outer.opacity(), 1.0);
        assert_eq!(outer.transform(), Affine::IDENTITY);
    }

    #[test]
    fn fills_remember_clip() {
        let mut list = DisplayList::default();
        let clip = Clip::Rect(
            Rect::min_size(Point::ORIGIN, Size::new(4.0, 4.0)),
            CornerRadius::all(2.0),
        );

        list.clip(&clip, &mut |canvas| canvas.fill(&Paint::from(Color::WHITE)));
        list.fill(&Paint::from(Color::BLACK));

        assert!(matches!(
            &list.commands()[0],
            DrawCommand::Fill { clip: Some(c), .. } if *c == clip
        ));
        assert!(matches!(
            &list.commands()[1],
            DrawCommand::Fill { clip: None, .. }
        ));
    }
}
