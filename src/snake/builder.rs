use super::*;
use std::fmt::{Display, Formatter};

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        write!(f, "builder: {:?}", self.0)
    }
}

/// Builds a straight snake lying on a single face, the head at `pos`
/// and the rest of the body trailing behind it, opposite to `dir`
#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub pos: Option<Cell>,
    pub dir: Option<Dir>,
    pub len: Option<usize>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Cell) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn len(mut self, value: usize) -> Self {
        self.len = Some(value);
        self
    }

    pub fn build(&self, topology: &CubeTopology) -> Result<Snake, BuilderError> {
        let pos = self
            .pos
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `pos`"))?;
        let dir = self
            .dir
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `dir`"))?;
        let len = self
            .len
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `len`"))?;

        if len == 0 {
            return Err(BuilderError(Box::new(self.clone()), "`len` must be at least 1"));
        }

        let mut body = VecDeque::with_capacity(len);
        let mut cell = pos;
        for _ in 0..len {
            if !cell.in_bounds(topology.grid_size()) {
                return Err(BuilderError(
                    Box::new(self.clone()),
                    "snake does not fit on the starting face",
                ));
            }
            body.push_back(cell);
            cell = cell.translate(-dir);
        }

        log::debug!("spawn snake at {:?} going {:?} with length {}", pos, dir, len);

        Ok(Snake { body })
    }
}
