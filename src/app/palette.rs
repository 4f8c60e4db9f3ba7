use crate::basic::Face;
use crate::color::Color;

/// Colors the renderer paints the scene with, faces are addressed by
/// [`Face::index`] so each side can be given its own color
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub face_colors: [Color; Face::COUNT],
    pub grid_color: Color,
    pub snake_color: Color,
    pub food_color: Color,
    pub background_color: Color,
}

impl Palette {
    pub fn lime() -> Self {
        Self {
            face_colors: [Color::from_rgb(50, 205, 50); Face::COUNT],
            grid_color: Color::BLACK,
            snake_color: Color::from_rgb(0, 100, 0),
            food_color: Color::RED,
            background_color: Color::from_rgb(100, 149, 237),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::lime()
    }
}
