use std::fmt;

use super::Tag;

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Byte(v) => write!(f, "{}b", v),
            Tag::Short(v) => write!(f, "{}s", v),
            Tag::Int(v) => write!(f, "{}", v),
            Tag::Long(v) => write!(f, "{}l", v),
            Tag::Float(v) => write!(f, "{}f", Decimal::from(*v)),
            Tag::Double(v) => write!(f, "{}", Decimal::from(*v)),
            Tag::String(v) => f.write_str(v),
            Tag::ByteArray(v) => v.fmt(f),
            Tag::IntArray(v) => v.fmt(f),
            Tag::LongArray(v) => v.fmt(f),
            Tag::List(v) => v.fmt(f),
            Tag::Compound(v) => v.fmt(f),
        }
    }
}

/// Renders a float the way the server platform prints its own floats:
/// integral values keep `.0`, and anything at or above 10^7 or below 10^-3
/// switches to `E` notation.
pub(crate) struct Decimal {
    magnitude: f64,
    plain: String,
    scientific: String,
}

impl From<f32> for Decimal {
    fn from(v: f32) -> Self {
        // Formatting goes through the f32 itself so the shortest round-trip
        // digits are those of the f32, not of its f64 widening.
        Decimal {
            magnitude: (v as f64).abs(),
            plain: format!("{:?}", v),
            scientific: format!("{:e}", v),
        }
    }
}

impl From<f64> for Decimal {
    fn from(v: f64) -> Self {
        Decimal {
            magnitude: v.abs(),
            plain: format!("{:?}", v),
            scientific: format!("{:e}", v),
        }
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.magnitude;
        if m.is_nan() {
            return f.write_str("NaN");
        }
        if m.is_infinite() {
            let sign = if self.plain.starts_with('-') { "-" } else { "" };
            return write!(f, "{}Infinity", sign);
        }
        if m == 0.0 || (1e-3..1e7).contains(&m) {
            return f.write_str(&self.plain);
        }

        let (mantissa, exponent) = self
            .scientific
            .split_once('e')
            .unwrap_or((self.scientific.as_str(), "0"));
        if mantissa.contains('.') {
            write!(f, "{}E{}", mantissa, exponent)
        } else {
            write!(f, "{}.0E{}", mantissa, exponent)
        }
    }
}
