//! Byte-count humanisation.

/// Decimal places used when none are requested explicitly.
pub const DEFAULT_DECIMAL_PLACES: usize = 1;

const DECIMAL_SUFFIXES: [&str; 8] = ["kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BINARY_SUFFIXES: [&str; 8] = ["KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];

/// Unit system for [`humanize_bytes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteUnits {
    /// Powers of 1000 (`kB`, `MB`, ...).
    Decimal,
    /// Powers of 1024 (`KiB`, `MiB`, ...).
    Binary,
}

impl ByteUnits {
    /// Returns the step between consecutive units.
    #[must_use]
    pub const fn threshold(self) -> u64 {
        match self {
            Self::Decimal => 1000,
            Self::Binary => 1024,
        }
    }

    /// Returns unit suffixes, smallest first.
    #[must_use]
    pub const fn suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Decimal => &DECIMAL_SUFFIXES,
            Self::Binary => &BINARY_SUFFIXES,
        }
    }
}

/// Formats a byte count with one decimal place.
#[must_use]
pub fn humanize_bytes(bytes: i64, units: ByteUnits) -> String {
    humanize_bytes_with_precision(bytes, units, DEFAULT_DECIMAL_PLACES)
}

/// Formats a byte count with `decimal_places` digits after the point.
///
/// Counts below the threshold render as whole bytes (`"999 B"`). Larger
/// counts are divided by the threshold until the value, rounded to
/// `decimal_places`, drops below it or the largest unit is reached. The
/// comparison uses the rounded value, so `999_999` decimal bytes render as
/// `"1.0 MB"` rather than `"1000.0 kB"`.
///
/// The printed digits come from the unrounded value: `1150` bytes is stored
/// as `1.149999...` kB and renders as `"1.1 kB"`, while the exact tie `1250`
/// renders as `"1.3 kB"`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "humanised sizes are approximate by definition"
)]
pub fn humanize_bytes_with_precision(bytes: i64, units: ByteUnits, decimal_places: usize) -> String {
    let threshold = units.threshold();
    if bytes.unsigned_abs() < threshold {
        return format!("{bytes} B");
    }

    let step = threshold as f64;
    let scale = decimal_scale(decimal_places);
    let suffixes = units.suffixes();

    let mut value = bytes as f64 / step;
    let mut unit = 0;
    while round_to_scale(value.abs(), scale) >= step && unit + 1 < suffixes.len() {
        value /= step;
        unit += 1;
    }

    let suffix = suffixes.get(unit).copied().unwrap_or_default();
    format!("{} {}", to_fixed(value, decimal_places), suffix)
}

/// Digits needed to print the exact decimal expansion of a value of at
/// least one.
const EXACT_FRACTION_DIGITS: usize = 64;

fn decimal_scale(decimal_places: usize) -> f64 {
    10_f64.powi(i32::try_from(decimal_places).unwrap_or(i32::MAX))
}

// Only called on magnitudes, where ties rounding away from zero and towards
// positive infinity agree.
#[expect(clippy::float_arithmetic, reason = "rounding helper")]
fn round_to_scale(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Fixed-point rendering of the exact binary value of `value`.
///
/// Values that are not exact ties are rounded to nearest. Exact ties round
/// away from zero, where `{:.N}` would round to even.
#[expect(clippy::float_arithmetic, reason = "tie correction")]
fn to_fixed(value: f64, decimal_places: usize) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let magnitude = value.abs();
    let expansion = format!("{:.*}", decimal_places + EXACT_FRACTION_DIGITS, magnitude);
    let is_tie = expansion
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(decimal_places..))
        .and_then(|rest| rest.strip_prefix('5'))
        .is_some_and(|rest| rest.bytes().all(|digit| digit == b'0'));

    let printed = if is_tie {
        let scale = decimal_scale(decimal_places);
        (magnitude * scale).ceil() / scale
    } else {
        magnitude
    };
    format!("{}{:.*}", sign, decimal_places, printed)
}
