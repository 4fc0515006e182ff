use std::time::Duration;

/// Format a duration for log output: "850ms", "12.3s", "4m 05s"
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }

    let total = elapsed.as_secs();
    format!("{}m {:02}s", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed_millis() {
        assert_eq!(format_elapsed(Duration::from_millis(850)), "850ms");
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(12_340)), "12.3s");
    }

    #[test]
    fn test_format_elapsed_minutes() {
        assert_eq!(format_elapsed(Duration::from_secs(245)), "4m 05s");
    }
}
