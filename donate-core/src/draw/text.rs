use std::{
    hash::{Hash, Hasher},
    ops::Deref,
    sync::{Arc, Weak},
};

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const BOLD: Self = Self(700);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size:   f32,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub color:       Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size:   16.0,
            font_family: String::from("sans-serif"),
            font_weight: FontWeight::NORMAL,
            color:       Color::BLACK,
        }
    }
}

/// A single-style block of text, shared between a widget and backend caches.
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    data: Arc<ParagraphData>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphData {
    pub text:  String,
    pub style: TextStyle,
    pub align: TextAlign,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: TextStyle, align: TextAlign) -> Self {
        Self {
            data: Arc::new(ParagraphData {
                text: text.into(),
                style,
                align,
            }),
        }
    }

    pub fn downgrade(this: &Self) -> WeakParagraph {
        WeakParagraph {
            data: Arc::downgrade(&this.data),
        }
    }
}

impl Deref for Paragraph {
    type Target = ParagraphData;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[derive(Clone, Debug)]
pub struct WeakParagraph {
    data: Weak<ParagraphData>,
}

impl WeakParagraph {
    pub fn strong_count(&self) -> usize {
        self.data.strong_count()
    }
}

impl PartialEq for WeakParagraph {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for WeakParagraph {}

impl Hash for WeakParagraph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.as_ptr().hash(state);
    }
}
