/// `YYYY-MM-DD` as a comparable `(year, month, day)`; missing or malformed
/// parts read as zero.
pub fn parse_iso_date(date: &str) -> (i32, i32, i32) {
    let parts: Vec<&str> = date.split('-').collect();
    let year = parts.first().and_then(|v| v.parse().ok()).unwrap_or(0);
    let month = parts.get(1).and_then(|v| v.parse().ok()).unwrap_or(0);
    let day = parts.get(2).and_then(|v| v.parse().ok()).unwrap_or(0);
    (year, month, day)
}

/// `Mon YYYY` for display; a date without a real month is shown as given.
pub fn format_month_year(date: &str) -> String {
    let (year, month, _) = parse_iso_date(date);
    let month_label = match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => return date.to_string(),
    };
    format!("{month_label} {year}")
}
