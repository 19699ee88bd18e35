use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
}

/// A named texture region, resolved by the renderer at draw time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub name: String,
}

impl Sprite {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The drawable image slot of a UI element: a sprite plus a tint color.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub sprite: Sprite,
    pub color: Color,
}

impl IconImage {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            color: Color::WHITE,
        }
    }
}
