/// Shown wherever a value is missing from the payload.
pub const PLACEHOLDER: &str = "--";

/// Utilization cells use a single dash instead.
pub const CELL_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationBand {
    Nominal,
    Elevated,
    Critical,
}

impl UtilizationBand {
    pub fn classify(value: f64) -> Self {
        if value < 70.0 {
            UtilizationBand::Nominal
        } else if value < 90.0 {
            UtilizationBand::Elevated
        } else {
            UtilizationBand::Critical
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            UtilizationBand::Nominal => "text-green-500",
            UtilizationBand::Elevated => "text-yellow-500",
            UtilizationBand::Critical => "text-red-500 font-bold",
        }
    }
}

/// Text colour for an absent metric. Carries no band.
pub const NEUTRAL_CLASS: &str = "text-gray-500";

/// `12.5` -> `"12.50"`. Exact ties round away from zero, so `0.125` gives
/// `"0.13"` the same way a browser's `toFixed(2)` does.
pub fn format_fixed2(value: f64) -> String {
    // A double sits exactly on a third-decimal 5 only when it is an odd
    // number of eighths; `{:.2}` would round those to even.
    let eighths = value.abs() * 8.0;
    if value.is_finite()
        && eighths < 2f64.powi(50)
        && eighths.fract() == 0.0
        && eighths % 2.0 == 1.0
    {
        let cents = (value.abs() * 100.0).round() as u64;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }
    format!("{:.2}", value)
}

/// `12.5` -> `"$12.50"`
pub fn format_currency(value: f64) -> String {
    format!("${}", format_fixed2(value))
}

/// Currency or the placeholder glyph when absent.
pub fn format_currency_opt(value: Option<f64>) -> String {
    value.map(format_currency).unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_count_opt(value: Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Utilization keeps the raw number: `45.5` -> `"45.5%"`, `12.0` -> `"12%"`.
pub fn format_utilization(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => CELL_PLACEHOLDER.to_string(),
    }
}

pub fn utilization_class(value: Option<f64>) -> &'static str {
    match value {
        Some(v) => UtilizationBand::classify(v).class(),
        None => NEUTRAL_CLASS,
    }
}

/// Confidence fraction as a whole percentage: `0.875` -> `"88%"`.
pub fn format_confidence(fraction: f64) -> String {
    format!("{}%", (fraction * 100.0).round() as i64)
}

pub fn format_percent_1(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(UtilizationBand::classify(0.0), UtilizationBand::Nominal);
        assert_eq!(UtilizationBand::classify(69.99), UtilizationBand::Nominal);
        assert_eq!(UtilizationBand::classify(70.0), UtilizationBand::Elevated);
        assert_eq!(UtilizationBand::classify(89.9), UtilizationBand::Elevated);
        assert_eq!(UtilizationBand::classify(90.0), UtilizationBand::Critical);
        assert_eq!(UtilizationBand::classify(100.0), UtilizationBand::Critical);
    }

    #[test]
    fn missing_utilization_is_neutral_without_suffix() {
        assert_eq!(format_utilization(None), "-");
        assert!(!format_utilization(None).contains('%'));
        assert_eq!(utilization_class(None), NEUTRAL_CLASS);
    }

    #[test]
    fn utilization_keeps_raw_value() {
        assert_eq!(format_utilization(Some(45.5)), "45.5%");
        assert_eq!(format_utilization(Some(12.0)), "12%");
        assert_eq!(
            utilization_class(Some(95.0)),
            UtilizationBand::Critical.class()
        );
    }

    #[test]
    fn currency_is_fixed_to_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(120.5), "$120.50");
        assert_eq!(format_currency(1234.567), "$1234.57");
        assert_eq!(format_currency_opt(None), PLACEHOLDER);
    }

    #[test]
    fn exact_ties_round_up_like_to_fixed() {
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(10.625), "$10.63");
        assert_eq!(format_currency(2.375), "$2.38");
        assert_eq!(format_currency(99.875), "$99.88");
        assert_eq!(format_fixed2(-0.125), "-0.13");
        // Not a tie in binary: 1.005 is stored just below the midpoint.
        assert_eq!(format_fixed2(1.005), "1.00");
        assert_eq!(format_fixed2(0.25), "0.25");
        assert_eq!(format_fixed2(0.5), "0.50");
    }

    #[test]
    fn confidence_rounds_to_whole_percent() {
        assert_eq!(format_confidence(0.95), "95%");
        assert_eq!(format_confidence(0.875), "88%");
        assert_eq!(format_confidence(0.0), "0%");
    }

    #[test]
    fn counts_fall_back_to_placeholder() {
        assert_eq!(format_count_opt(Some(4)), "4");
        assert_eq!(format_count_opt(None), PLACEHOLDER);
    }
}
