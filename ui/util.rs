/// Round `value` to `digits` decimal places and format it in its shortest form, keeping at least one fractional digit. Magnitudes of at least `1e16` or below `1e-4` switch to exponent notation such as `1e+16`.
pub fn format_rounded(value: f64, digits: usize) -> String {
	if value.is_nan() {
		return "nan".to_owned();
	}
	if value.is_infinite() {
		return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
	}
	// Formatting with a fixed precision rounds the exact binary value, so parse it back to drop trailing zeros.
	let rounded = format!("{:.*}", digits, value)
		.parse::<f64>()
		.unwrap_or(value);
	let scientific = format!("{:e}", rounded);
	if let Some((mantissa, exponent)) = scientific.split_once('e') {
		let exponent = exponent.parse::<i32>().unwrap_or(0);
		if rounded != 0.0 && !(-4..16).contains(&exponent) {
			return format_exponent(mantissa, exponent);
		}
	}
	let formatted = rounded.to_string();
	if formatted.contains('.') {
		formatted
	} else {
		format!("{}.0", formatted)
	}
}

/// Rust writes `1.5e16` and `1e-5`. The dashboard writes `1.5e+16` and `1e-05`.
fn format_exponent(mantissa: &str, exponent: i32) -> String {
	let sign = if exponent < 0 { '-' } else { '+' };
	format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

#[test]
fn test_format_rounded() {
	assert_eq!(format_rounded(1.2345, 2), "1.23");
	assert_eq!(format_rounded(0.06789, 4), "0.0679");
	assert_eq!(format_rounded(98.7654, 2), "98.77");
	assert_eq!(format_rounded(85.0, 2), "85.0");
	assert_eq!(format_rounded(0.1, 4), "0.1");
	assert_eq!(format_rounded(0.0001, 4), "0.0001");
	assert_eq!(format_rounded(0.00004, 4), "0.0");
	assert_eq!(format_rounded(-3.14159, 2), "-3.14");
	assert_eq!(format_rounded(f64::NAN, 2), "nan");
	assert_eq!(format_rounded(f64::NEG_INFINITY, 2), "-inf");
}

#[test]
fn test_format_rounded_exponent() {
	assert_eq!(format_rounded(1e15, 2), "1000000000000000.0");
	assert_eq!(format_rounded(1e16, 2), "1e+16");
	assert_eq!(format_rounded(-2.5e17, 4), "-2.5e+17");
	assert_eq!(format_rounded(0.00001234, 8), "1.234e-05");
	assert_eq!(format_rounded(1.5e300, 2), "1.5e+300");
}
