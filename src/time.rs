pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` due date. Anything else, including an empty string, is `None`.
pub fn parse_due_date(due_date: &str) -> Option<chrono::NaiveDate> {
  if !is_due_date_shaped(due_date) {
    return None;
  }
  chrono::NaiveDate::parse_from_str(due_date, DUE_DATE_FORMAT).ok()
}

// chrono alone also takes padding, single digit fields and a signed year
fn is_due_date_shaped(due_date: &str) -> bool {
  let bytes = due_date.as_bytes();
  bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    })
}

pub fn format_due_date(date: chrono::NaiveDate) -> String {
  date.format(DUE_DATE_FORMAT).to_string()
}
