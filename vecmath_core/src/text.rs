//! Text form of vectors: `Vec2(x, y)`, `Vec3(x, y, z)`, `Vec4(x, y, z, w)`.

use std::fmt;

use tracing::trace;

use crate::error::VectorParseError;

/// Display adapter for a single component.
///
/// Integral values print without a fractional part, `-0` prints as `0`,
/// infinities print as `Infinity`/`-Infinity`. Magnitudes of `1e21` and
/// above or below `1e-6` switch to exponent form (`1e+300`, `1.5e-7`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct Component(pub f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        if c.is_nan() {
            f.write_str("NaN")
        } else if c == f64::INFINITY {
            f.write_str("Infinity")
        } else if c == f64::NEG_INFINITY {
            f.write_str("-Infinity")
        } else if c == 0.0 {
            f.write_str("0")
        } else if c.abs() >= 1e21 || c.abs() < 1e-6 {
            let exp = format!("{:e}", c);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, power)
                }
                _ => f.write_str(&exp),
            }
        } else {
            write!(f, "{}", c)
        }
    }
}

/// Writes `name(c1, c2, ...)`.
pub(crate) fn write_vector(f: &mut fmt::Formatter<'_>, name: &str, components: &[f64]) -> fmt::Result {
    write!(f, "{}(", name)?;
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", Component(*c))?;
    }
    f.write_str(")")
}

/// Parses `name(c1, c2, ...)` with exactly `N` components.
pub(crate) fn parse_vector<const N: usize>(s: &str, name: &str) -> Result<[f64; N], VectorParseError> {
    let inner = s
        .trim()
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(VectorParseError::InvalidFormat)?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != N {
        trace!(name, expected = N, found = parts.len(), "Component count mismatch");
        return Err(VectorParseError::WrongArity {
            expected: N,
            found: parts.len(),
        });
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_component(part)?;
    }
    Ok(out)
}

fn parse_component(s: &str) -> Result<f64, VectorParseError> {
    match s {
        "Infinity" => Ok(f64::INFINITY),
        "-Infinity" => Ok(f64::NEG_INFINITY),
        "NaN" => Ok(f64::NAN),
        _ => s
            .parse::<f64>()
            .map_err(|_| VectorParseError::InvalidComponent(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_formatting() {
        assert_eq!(Component(1.0).to_string(), "1");
        assert_eq!(Component(0.6).to_string(), "0.6");
        assert_eq!(Component(-2.5).to_string(), "-2.5");
        assert_eq!(Component(-0.0).to_string(), "0");
        assert_eq!(Component(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Component(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Component(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(Component(1e300).to_string(), "1e+300");
        assert_eq!(Component(-1e21).to_string(), "-1e+21");
        assert_eq!(Component(1.5e-7).to_string(), "1.5e-7");
        assert_eq!(Component(1e20).to_string(), "100000000000000000000");
        assert_eq!(Component(0.000001).to_string(), "0.000001");

        let v = [1e300, 2.5e-9, -7.25e22];
        let text = format!("Vec3({}, {}, {})", Component(v[0]), Component(v[1]), Component(v[2]));
        assert_eq!(parse_vector::<3>(&text, "Vec3").unwrap(), v);
    }

    #[test]
    fn parse_accepts_written_form() {
        let v: [f64; 3] = parse_vector("Vec3(1, -2.5, Infinity)", "Vec3").unwrap();
        assert_eq!(v, [1.0, -2.5, f64::INFINITY]);

        let v: [f64; 2] = parse_vector("  Vec2(0,0)  ", "Vec2").unwrap();
        assert_eq!(v, [0.0, 0.0]);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            parse_vector::<2>("Vec3(1, 2)", "Vec2"),
            Err(VectorParseError::InvalidFormat)
        );
        assert_eq!(
            parse_vector::<2>("Vec2(1, 2, 3)", "Vec2"),
            Err(VectorParseError::WrongArity { expected: 2, found: 3 })
        );
        assert_eq!(
            parse_vector::<2>("Vec2(1, x)", "Vec2"),
            Err(VectorParseError::InvalidComponent("x".into()))
        );
        assert_eq!(
            parse_vector::<2>("Vec2(1, 2", "Vec2"),
            Err(VectorParseError::InvalidFormat)
        );
    }
}
