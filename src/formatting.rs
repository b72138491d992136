use serde_json::Value;

/// Shown wherever a stat cannot be resolved
pub const MISSING_VALUE: &str = "-";

/// Format a raw stat value for display
///
/// Fractions get three decimals, and averages below one drop the leading
/// zero the way batting averages are written (`0.256` -> `.256`).
/// Whole numbers print without a fraction.
pub fn format_stat_value(raw: Option<&Value>) -> String {
    match raw {
        Some(Value::Number(number)) => match (number.as_i64(), number.as_u64(), number.as_f64()) {
            (Some(n), _, _) => n.to_string(),
            (_, Some(n), _) => n.to_string(),
            (_, _, Some(f)) => format_decimal(f),
            _ => MISSING_VALUE.to_string(),
        },
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null) | Some(Value::Array(_)) | Some(Value::Object(_)) | None => {
            MISSING_VALUE.to_string()
        }
    }
}

fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return MISSING_VALUE.to_string();
    }
    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    let fixed = format!("{:.3}", value);
    if (0.0..1.0).contains(&value) {
        fixed.trim_start_matches('0').to_string()
    } else {
        fixed
    }
}

/// Format a leaderboard value the way the leaders marquee shows it
pub fn format_leader_value(value: f64) -> String {
    format_decimal(value)
}

/// Stat label as shown in the sidebar: upper case, but "opp" reads "Opp"
pub fn stat_label(stat: &str) -> String {
    let upper = stat.to_uppercase();
    match upper.find("OPP") {
        Some(index) => format!("{}Opp{}", &upper[..index], &upper[index + 3..]),
        None => upper,
    }
}

/// Season record, e.g. `(10-4)`
pub fn format_record(wins: u32, losses: u32) -> String {
    format!("({}-{})", wins, losses)
}

/// Playoff seed, e.g. `3 Seed`
pub fn format_seed(rank: u32) -> String {
    format!("{} Seed", rank)
}

/// Status line of a finished game: `Final` when the last inning started was
/// the ninth, `F/7` otherwise
pub fn format_final(innings: Option<f64>) -> String {
    match innings {
        Some(innings) if innings.is_finite() && innings.ceil() != 9.0 => format!("F/{}", innings),
        _ => "Final".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fraction_below_one_drops_leading_zero() {
        assert_eq!(format_stat_value(Some(&json!(0.256))), ".256");
        assert_eq!(format_stat_value(Some(&json!(0.312))), ".312");
        assert_eq!(format_stat_value(Some(&json!(0.0004))), ".000");
    }

    #[test]
    fn test_fraction_above_one_keeps_three_decimals() {
        assert_eq!(format_stat_value(Some(&json!(1.5))), "1.500");
        assert_eq!(format_stat_value(Some(&json!(12.3456))), "12.346");
    }

    #[test]
    fn test_negative_fraction_keeps_leading_zero() {
        assert_eq!(format_stat_value(Some(&json!(-0.25))), "-0.250");
    }

    #[test]
    fn test_integers_print_as_is() {
        assert_eq!(format_stat_value(Some(&json!(5))), "5");
        assert_eq!(format_stat_value(Some(&json!(-3))), "-3");
        assert_eq!(format_stat_value(Some(&json!(5.0))), "5");
        assert_eq!(format_stat_value(Some(&json!(0))), "0");
    }

    #[test]
    fn test_strings_and_bools_print_as_is() {
        assert_eq!(format_stat_value(Some(&json!("3-1"))), "3-1");
        assert_eq!(format_stat_value(Some(&json!(true))), "true");
    }

    #[test]
    fn test_missing_values_print_dash() {
        assert_eq!(format_stat_value(None), "-");
        assert_eq!(format_stat_value(Some(&json!(null))), "-");
        assert_eq!(format_stat_value(Some(&json!({"a": 1}))), "-");
    }

    #[test]
    fn test_stat_label() {
        assert_eq!(stat_label("ba"), "BA");
        assert_eq!(stat_label("oppba"), "OppBA");
        assert_eq!(stat_label("oppabhr"), "OppABHR");
        assert_eq!(stat_label("whip"), "WHIP");
    }

    #[test]
    fn test_record_and_seed() {
        assert_eq!(format_record(10, 4), "(10-4)");
        assert_eq!(format_seed(3), "3 Seed");
    }

    #[test]
    fn test_format_final() {
        assert_eq!(format_final(Some(9.0)), "Final");
        assert_eq!(format_final(Some(8.2)), "Final");
        assert_eq!(format_final(None), "Final");
        assert_eq!(format_final(Some(7.0)), "F/7");
        assert_eq!(format_final(Some(6.1)), "F/6.1");
        assert_eq!(format_final(Some(12.0)), "F/12");
    }
}
