use std::{collections::HashMap, hash::BuildHasherDefault};

use donate_core::{
    Blend, Curve, CurveSegment, Fill, Paint, Painter, Paragraph, Shader, Size, TextAlign,
    TextStyle, WeakCurve, WeakParagraph,
};

type SeaHasher = BuildHasherDefault<seahash::SeaHasher>;

// max width the paragraph was last laid out with
type CachedParagraph = (f32, skia_safe::textlayout::Paragraph);

/// Skia resources for the shared handles widgets draw with.
pub struct SkiaPainter {
    pub(crate) provider:   skia_safe::textlayout::TypefaceFontProvider,
    pub(crate) manager:    skia_safe::FontMgr,
    pub(crate) fonts:      skia_safe::textlayout::FontCollection,
    pub(crate) paragraphs: HashMap<WeakParagraph, CachedParagraph, SeaHasher>,
    pub(crate) paths:      HashMap<WeakCurve, skia_safe::Path, SeaHasher>,
    pub(crate) paints:     HashMap<Paint, skia_safe::Paint, SeaHasher>,
}

impl Default for SkiaPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaPainter {
    pub fn new() -> Self {
        let provider = skia_safe::textlayout::TypefaceFontProvider::new();
        let manager = skia_safe::FontMgr::new();
        let mut fonts = skia_safe::textlayout::FontCollection::new();
        fonts.set_dynamic_font_manager(skia_safe::FontMgr::clone(&provider));
        fonts.set_default_font_manager(manager.clone(), None);

        Self {
            provider,
            manager,
            fonts,
            paragraphs: HashMap::default(),
            paths: HashMap::default(),
            paints: HashMap::default(),
        }
    }

    /// Drop resources whose handles are gone.
    pub fn cleanup(&mut self) {
        self.paragraphs.retain(|k, _| k.strong_count() > 0);
        self.paths.retain(|k, _| k.strong_count() > 0);
        self.paints.clear();
    }

    pub fn load_font(&mut self, bytes: &[u8], alias: Option<&str>) {
        if let Some(typeface) = self.manager.new_from_data(bytes, None) {
            self.provider.register_typeface(typeface, alias);
        } else {
            tracing::warn!("loading font failed");
        }
    }

    fn create_font_style(style: &TextStyle) -> skia_safe::FontStyle {
        skia_safe::FontStyle::new(
            skia_safe::font_style::Weight::from(style.font_weight.0 as i32),
            skia_safe::font_style::Width::NORMAL,
            skia_safe::font_style::Slant::Upright,
        )
    }

    pub(crate) fn create_paragraph(
        &mut self,
        paragraph: &Paragraph,
        max_width: f32,
    ) -> &mut skia_safe::textlayout::Paragraph {
        let weak = Paragraph::downgrade(paragraph);
        let fonts = &self.fonts;

        let (laid_out, skia) = self
            .paragraphs
            .entry(weak)
            .or_insert_with(|| (f32::NAN, build_paragraph(fonts, paragraph)));

        if *laid_out != max_width {
            skia.layout(max_width);
            *laid_out = max_width;
        }

        skia
    }

    pub(crate) fn create_path(&mut self, curve: &Curve) -> &skia_safe::Path {
        let weak = Curve::downgrade(curve);

        self.paths.entry(weak).or_insert_with(|| {
            let mut path = skia_safe::PathBuilder::new();

            let fill_type = match curve.fill {
                Fill::Winding => skia_safe::PathFillType::Winding,
                Fill::EvenOdd => skia_safe::PathFillType::EvenOdd,
            };

            path.set_fill_type(fill_type);

            for segment in curve.iter() {
                match segment {
                    CurveSegment::Move(p) => {
                        path.move_to(skia_safe::Point::new(p.x, p.y));
                    }

                    CurveSegment::Line(p) => {
                        path.line_to(skia_safe::Point::new(p.x, p.y));
                    }

                    CurveSegment::Close => {
                        path.close();
                    }
                }
            }

            path.into()
        })
    }

    pub(crate) fn create_paint(&mut self, paint: &Paint) -> &skia_safe::Paint {
        self.paints
            .entry(paint.clone())
            .or_insert_with(|| build_paint(paint))
    }
}

fn build_paint(paint: &Paint) -> skia_safe::Paint {
    let mut skia_paint = skia_safe::Paint::default();
    skia_paint.set_anti_alias(true);

    match paint.shader {
        Shader::Solid(color) => {
            skia_paint.set_color4f(
                skia_safe::Color4f::new(color.r, color.g, color.b, color.a),
                None,
            );
        }
    }

    let blend = match paint.blend {
        Blend::Clear => skia_safe::BlendMode::Clear,
        Blend::Src => skia_safe::BlendMode::Src,
        Blend::SrcOver => skia_safe::BlendMode::SrcOver,
        Blend::DstOver => skia_safe::BlendMode::DstOver,
    };

    skia_paint.set_blend_mode(blend);

    skia_paint
}

fn build_paragraph(
    fonts: &skia_safe::textlayout::FontCollection,
    paragraph: &Paragraph,
) -> skia_safe::textlayout::Paragraph {
    let mut style = skia_safe::textlayout::ParagraphStyle::new();

    let align = match paragraph.align {
        TextAlign::Start => skia_safe::textlayout::TextAlign::Start,
        TextAlign::Center => skia_safe::textlayout::TextAlign::Center,
        TextAlign::End => skia_safe::textlayout::TextAlign::End,
    };

    style.set_text_align(align);
    style.set_max_lines(1);

    let mut builder = skia_safe::textlayout::ParagraphBuilder::new(&style, fonts);
    let mut skia_style = skia_safe::textlayout::TextStyle::new();

    skia_style.set_subpixel(true);
    skia_style.set_font_size(paragraph.style.font_size);
    skia_style.set_font_families(&[&paragraph.style.font_family]);
    skia_style.set_font_style(SkiaPainter::create_font_style(&paragraph.style));
    skia_style.set_foreground_paint(&build_paint(&Paint::from(paragraph.style.color)));

    builder.push_style(&skia_style);
    builder.add_text(&paragraph.text);
    builder.pop();

    builder.build()
}

impl Painter for SkiaPainter {
    fn measure_text(&mut self, paragraph: &Paragraph, max_width: f32) -> Size {
        let mut min_height = 0.0;

        let typefaces = self.fonts.find_typefaces(
            &[&paragraph.style.font_family],
            Self::create_font_style(&paragraph.style),
        );

        if let Some(typeface) = typefaces.first() {
            let font = skia_safe::Font::new(typeface, paragraph.style.font_size);
            let (_, metrics) = font.metrics();

            min_height = metrics.descent - metrics.ascent + metrics.leading;
        }

        let paragraph = self.create_paragraph(paragraph, max_width);

        Size {
            width:  paragraph.max_intrinsic_width(),
            height: paragraph.height().max(min_height),
        }
    }
}
