use crate::{Paragraph, Size};

/// Backend services needed during layout.
pub trait Painter {
    fn measure_text(&mut self, paragraph: &Paragraph, max_width: f32) -> Size;
}
