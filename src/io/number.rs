//! # Numbers
//!
//! Rendering of `f64` values in the written files.
//!
//! Values are written as the shortest decimal text that reads back as the same `f64`. Very large
//! and very small magnitudes use scientific notation to avoid long runs of zeros. The fixed MPS
//! format has a field width of twelve characters, values that don't fit are rounded.

/// Smallest magnitude written without an exponent.
const LOWEST_PLAIN_MAGNITUDE: f64 = 1e-5;
/// Magnitudes from this value on are written with an exponent.
const HIGHEST_PLAIN_MAGNITUDE: f64 = 1e15;

/// Width of a numerical field in the fixed MPS format.
pub const FIXED_FIELD_WIDTH: usize = 12;

/// Shortest text that parses back to exactly `value`.
///
/// Negative zero is written as `0`, infinite values as `inf` and `-inf`.
pub fn format(value: f64) -> String {
    if value == 0_f64 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !value.is_finite() || (LOWEST_PLAIN_MAGNITUDE..HIGHEST_PLAIN_MAGNITUDE).contains(&magnitude) {
        value.to_string()
    } else {
        format!("{:e}", value)
    }
}

/// Text of at most `FIXED_FIELD_WIDTH` characters that is as close to `value` as possible.
///
/// This is the text of `format` if it fits, otherwise the closest of a rounded plain and a rounded
/// scientific representation.
pub fn format_fixed(value: f64) -> String {
    let shortest = format(value);
    if shortest.len() <= FIXED_FIELD_WIDTH {
        return shortest;
    }

    let distance = |text: &String| text.parse::<f64>()
        .map_or(f64::INFINITY, |parsed| (parsed - value).abs());

    rounded_plain(value, &shortest).into_iter()
        .chain(rounded_scientific(value))
        .min_by(|left, right| distance(left).total_cmp(&distance(right)))
        .unwrap_or(shortest)
}

fn rounded_plain(value: f64, shortest: &str) -> Option<String> {
    if shortest.contains('e') {
        return None;
    }

    let integer_length = shortest.find('.').unwrap_or(shortest.len());
    let max_decimals = FIXED_FIELD_WIDTH.checked_sub(integer_length + 1)?;
    (0..=max_decimals).rev()
        .map(|decimals| trim_zeros(&format!("{:.*}", decimals, value)))
        .find(|text| text.len() <= FIXED_FIELD_WIDTH)
}

fn rounded_scientific(value: f64) -> Option<String> {
    (0..FIXED_FIELD_WIDTH).rev()
        .map(|precision| {
            let text = format!("{:.*e}", precision, value);
            match text.split_once('e') {
                Some((mantissa, exponent)) => format!("{}e{}", trim_zeros(mantissa), exponent),
                None => text,
            }
        })
        .find(|text| text.len() <= FIXED_FIELD_WIDTH)
}

/// Remove trailing zeros after the decimal point, and the point itself if nothing follows.
fn trim_zeros(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
