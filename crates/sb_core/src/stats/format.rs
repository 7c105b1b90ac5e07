/// Scorebook rate display: three decimals, no leading zero (`.333`, `1.250`).
pub fn format_rate(value: f64) -> String {
    let fixed = format!("{:.3}", value);
    match fixed.strip_prefix("0.") {
        Some(rest) => format!(".{rest}"),
        None => fixed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(0.0), ".000");
        assert_eq!(format_rate(0.5), ".500");
        assert_eq!(format_rate(2.0 / 3.0), ".667");
        assert_eq!(format_rate(1.0), "1.000");
        assert_eq!(format_rate(1.25), "1.250");
    }
}
