use std::hash::{DefaultHasher, Hash, Hasher};

pub use cursor_icon::CursorIcon;

use crate::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Down(PointerButtonEvent),
    Up(PointerButtonEvent),
    Move(PointerMoveEvent),
    Leave(PointerId),
}

impl PointerEvent {
    pub const fn pointer(&self) -> PointerId {
        match self {
            PointerEvent::Down(event) | PointerEvent::Up(event) => event.pointer,
            PointerEvent::Move(event) => event.pointer,
            PointerEvent::Leave(pointer) => *pointer,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerButtonEvent {
    pub pointer:  PointerId,
    pub button:   PointerButton,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerMoveEvent {
    pub pointer:  PointerId,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Tertiary,
    Other(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPropagate {
    Bubble,
    Handled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pointer {
    pub id:       PointerId,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId {
    data: u64,
}

impl PointerId {
    pub fn from_hash(hash: impl Hash) -> Self {
        let mut hasher = DefaultHasher::new();
        hash.hash(&mut hasher);

        Self {
            data: hasher.finish(),
        }
    }

    pub const fn from_u64(data: u64) -> Self {
        Self { data }
    }
}
