use core::fmt;

/// A decoded key column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Null,
    Int(i64),
    Uint(u64),
    Float(f64),
    Bytes(Vec<u8>),
    /// Nanoseconds.
    Duration(i64),
    MaxValue,
}

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Plain decimal in `[1e-4, 1e21)`, otherwise `1.5e+21` / `1e-07` style.
fn fmt_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let abs = v.abs();
    if !v.is_finite() || abs == 0.0 || (1e-4..1e21).contains(&abs) {
        return write!(f, "{v}");
    }
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.write_str(&sci);
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

fn fmt_duration(f: &mut fmt::Formatter<'_>, nanos: i64) -> fmt::Result {
    let sign = if nanos < 0 { "-" } else { "" };
    let abs = nanos.unsigned_abs();
    let secs = abs / NANOS_PER_SEC;
    let micros = (abs % NANOS_PER_SEC) / NANOS_PER_MICRO;
    write!(
        f,
        "{sign}{:02}:{:02}:{:02}.{micros:06}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Float(v) => fmt_float(f, *v),
            Self::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Self::Duration(ns) => fmt_duration(f, *ns),
            Self::MaxValue => f.write_str("MaxValue"),
        }
    }
}
