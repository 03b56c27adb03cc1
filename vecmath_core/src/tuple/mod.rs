//! Stateless vector math over fixed-size arrays.
//!
//! Every function takes its inputs by value and returns a fresh array; none
//! of them mutate. Functions suffixed `_with` accept magnitudes the caller
//! has already computed, which is how the cached-magnitude types in this
//! crate avoid repeated square roots.
//!
//! ```
//! use vecmath_core::tuple::d2;
//!
//! assert_eq!(d2::add([1.0, 2.0], [3.0, 4.0]), [4.0, 6.0]);
//! assert_eq!(d2::magnitude([3.0, 4.0]), 5.0);
//! ```

pub mod d2;
pub mod d3;
pub mod d4;

pub use d2::Vector2;
pub use d3::Vector3;
pub use d4::Vector4;

/// Default tolerance for `is_equal_approx`.
pub const DEFAULT_EPSILON: f64 = f64::EPSILON;
