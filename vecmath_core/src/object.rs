//! Plain-object shapes used for interchange.
//!
//! These are the `{x, y[, z][, w]}` records produced by `to_object` and
//! accepted by `from_object`. They are also the JSON shape of every vector
//! type in the crate.

use serde::{Deserialize, Serialize};

/// Named components of a 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

/// Named components of a 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Named components of a 4D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Xyzw {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Xy {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Xyzw {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

impl From<[f64; 2]> for Xy {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Xy> for [f64; 2] {
    fn from(o: Xy) -> Self {
        [o.x, o.y]
    }
}

impl From<[f64; 3]> for Xyz {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Xyz> for [f64; 3] {
    fn from(o: Xyz) -> Self {
        [o.x, o.y, o.z]
    }
}

impl From<[f64; 4]> for Xyzw {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Xyzw> for [f64; 4] {
    fn from(o: Xyzw) -> Self {
        [o.x, o.y, o.z, o.w]
    }
}
