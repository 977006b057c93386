use chrono::NaiveDate;

/// Render a wire-format due date (`YYYY-MM-DD`) as `DD/MM/YYYY`.
///
/// Missing and malformed values both come out as "No date": bad data from a
/// backend is displayed degraded, not treated as an error.
pub fn format_due_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "No date".to_string();
    };

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => "No date".to_string(),
    }
}
