use serde::{Deserialize, Serialize};
use crate::error::Error;

/// Coordinate convention added to every width, height and overlap extent.
///
/// `Continuous` treats `x2 - x1` as the width; `Inclusive` counts both edge
/// pixels, so a box from 0 to 9 is 10 wide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CoordOffset {
    #[default] Continuous,
    Inclusive,
}

impl CoordOffset {
    pub fn value(&self) -> f32 {
        match self {
            CoordOffset::Continuous => 0.0,
            CoordOffset::Inclusive => 1.0,
        }
    }
}

impl TryFrom<i32> for CoordOffset {
    type Error = Error;

    fn try_from(offset: i32) -> Result<Self, Self::Error> {
        match offset {
            0 => Ok(CoordOffset::Continuous),
            1 => Ok(CoordOffset::Inclusive),
            other => Err(Error::InvalidOffset(other)),
        }
    }
}

impl From<CoordOffset> for i32 {
    fn from(offset: CoordOffset) -> Self {
        match offset {
            CoordOffset::Continuous => 0,
            CoordOffset::Inclusive => 1,
        }
    }
}
