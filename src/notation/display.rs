//! Numeric display helpers shared by component summaries and evaluation reports.

use num_complex::Complex64;

/// Format `value` like C's `%.{precision}g`.
///
/// Uses fixed notation when the decimal exponent lies in
/// `-4 <= exp < precision`, scientific notation with a signed two-digit
/// exponent otherwise. Trailing fractional zeros are removed in both forms.
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    // Round first so that e.g. 9999.6 at 4 digits is classified as 1e+04.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

/// `%8.4g`: four significant digits right-aligned in eight columns.
pub fn format_g4(value: f64) -> String {
    format!("{:>8}", format_g(value, 4))
}

/// Format a complex value as `a+bj` / `a-bj` with a fixed number of decimals.
///
/// Parts that round to zero are printed without a minus sign.
pub fn format_complex(value: Complex64, decimals: usize) -> String {
    let re = clear_negative_zero(value.re, decimals);
    let im = clear_negative_zero(value.im, decimals);
    let sign = if im.is_sign_negative() { '-' } else { '+' };
    format!("{:.*}{}{:.*}j", decimals, re, sign, decimals, im.abs())
}

/// Format a complex value as `a+bj` / `a-bj` with `precision` significant digits per part.
pub fn format_complex_g(value: Complex64, precision: usize) -> String {
    let im = if value.im == 0.0 { 0.0 } else { value.im };
    let sign = if im.is_sign_negative() { '-' } else { '+' };
    format!(
        "{}{}{}j",
        format_g(value.re, precision),
        sign,
        format_g(im.abs(), precision)
    )
}

fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}

fn clear_negative_zero(value: f64, decimals: usize) -> f64 {
    let half_ulp = 0.5 * 10f64.powi(-(decimals as i32));
    if value.abs() < half_ulp {
        0.0
    } else {
        value
    }
}
