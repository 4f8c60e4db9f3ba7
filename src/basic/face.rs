use std::fmt::{self, Debug, Display, Formatter};

use rand::Rng;
use Face::*;

/// One of the six sides of the cube, the discriminant is the index
/// the renderer uses to address the face
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Face {
    Front = 0,
    Back = 1,
    Right = 2,
    Left = 3,
    Top = 4,
    Bottom = 5,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Display, Error)]
#[display(fmt = "{} is not a face index (expected 0..6)", index)]
pub struct InvalidFace {
    pub index: u8,
}

impl TryFrom<u8> for Face {
    type Error = InvalidFace;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(index as usize).copied().ok_or(InvalidFace { index })
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Face {
    pub const COUNT: usize = 6;
    pub const ALL: [Self; Self::COUNT] = [Front, Back, Right, Left, Top, Bottom];

    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        Self::ALL.iter().copied()
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::COUNT)]
    }
}

#[test]
fn test_face_index_round_trip() {
    for face in Face::iter() {
        assert_eq!(Face::try_from(face as u8), Ok(face));
    }
    assert_eq!(Face::try_from(6), Err(InvalidFace { index: 6 }));
}
