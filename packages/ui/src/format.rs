use chrono::{DateTime, Utc};

/// Format a point amount the way pt-BR does: `4800` → `"4.800"`.
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if points < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `dd/mm/yyyy`, or `"-"` when the backend sent no date.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "-".to_string(),
    }
}

/// First two characters of a name, used as avatar fallback.
pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(4800), "4.800");
        assert_eq!(format_points(1234567), "1.234.567");
        assert_eq!(format_points(-2450), "-2.450");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 5, 3, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(&date)), "03/05/2024");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("ana silva"), "AN");
        assert_eq!(initials("É"), "É");
    }
}
