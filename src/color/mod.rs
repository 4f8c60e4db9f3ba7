/// RGBA color with channels in 0..=1, handed to the renderer as is
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);
    pub const RED: Self = Self::new(1., 0., 0., 1.);

    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255., g as f32 / 255., b as f32 / 255., 1.)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let channel = |c: f32| (c.clamp(0., 1.) * 255.).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }
}

#[test]
fn test_rgb_round_trip() {
    for (r, g, b) in [(50, 205, 50), (0, 100, 0), (100, 149, 237), (255, 0, 0)] {
        assert_eq!(Color::from_rgb(r, g, b).to_rgba8(), [r, g, b, 255]);
    }
}
