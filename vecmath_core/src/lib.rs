//! `vecmath_core`
//!
//! Fixed-dimension vector algebra in two flavors that share one numeric core:
//!
//! - [`tuple`]: stateless functions over `[f64; N]` arrays.
//! - [`Vec2`], [`Vec3`], [`Vec4`]: mutable vectors with a cached magnitude
//!   and chainable methods, plus pure module-level counterparts
//!   (`vec2::add(&a, &b)`).
//!
//! Also: frozen [`snapshot`]s, shortest-arc angle interpolation in
//! [`slerp`], and injectable [`random`] sources.
//!
//! Numeric operations never fail or panic. Degenerate inputs produce
//! `inf`/`NaN`, which callers check with `is_nan`/`is_infinite`.

pub mod error;
pub mod object;
pub mod random;
pub mod slerp;
pub mod snapshot;
mod text;
pub mod tuple;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use error::VectorParseError;
pub use object::{Xy, Xyz, Xyzw};
pub use snapshot::{Snapshot2, Snapshot3, Snapshot4, VectorFlags};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::object::*;
    pub use crate::slerp::{slerp, slerp_degrees};
    pub use crate::snapshot::*;
    pub use crate::tuple::{Vector2, Vector3, Vector4, DEFAULT_EPSILON};
    pub use crate::{Vec2, Vec3, Vec4, VectorParseError};
}
