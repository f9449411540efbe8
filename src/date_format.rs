use chrono::{Datelike, NaiveDate};

/// Renders `date` according to a moment-style pattern. `YYYY`, `YY`,
/// `MM` and `DD` are substituted (longest token first, so `YYYY` never
/// reads as two `YY`); every other character is copied through
/// verbatim.
pub(crate) fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            out.push_str(&format!("{:04}", date.year()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("YY") {
            out.push_str(&format!("{:02}", date.year() % 100));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", date.month()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            out.push_str(&format!("{:02}", date.day()));
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn renders_the_conventional_pattern() {
        assert_eq!(format_date(day(2011, 1, 2), "YYYY-MM-DD"), "2011-01-02");
        assert_eq!(format_date(day(1897, 9, 8), "YYYY-MM-DD"), "1897-09-08");
    }

    #[test]
    fn renders_single_tokens() {
        let date = day(1897, 9, 8);
        assert_eq!(format_date(date, "YYYY"), "1897");
        assert_eq!(format_date(date, "YY"), "97");
        assert_eq!(format_date(date, "MM"), "09");
        assert_eq!(format_date(date, "DD"), "08");
    }

    #[test]
    fn two_digit_year_truncates_the_century() {
        assert_eq!(format_date(day(2011, 1, 2), "YY"), "11");
        assert_eq!(format_date(day(2000, 2, 29), "YY"), "00");
    }

    #[test]
    fn reorders_tokens_and_keeps_separators() {
        assert_eq!(format_date(day(1985, 6, 11), "DD/MM/YYYY"), "11/06/1985");
        assert_eq!(format_date(day(1985, 6, 11), "DD.MM.YY"), "11.06.85");
    }

    #[test]
    fn copies_unrecognized_characters_through() {
        assert_eq!(
            format_date(day(2014, 1, 1), "born MM-DD of YYYY"),
            "born 01-01 of 2014"
        );
        assert_eq!(format_date(day(2014, 1, 1), ""), "");
    }
}
