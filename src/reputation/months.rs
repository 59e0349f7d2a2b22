// Month-range generation.
//
// Score matrices are bucketed by "YYYY-MM" keys; this module produces the
// ordered, inclusive list of keys between two calendar months.

use anyhow::Result;

/// Format a zero-padded "YYYY-MM" bucket key.
pub fn month_key(year: i32, month: u32) -> String {
    format!("{year}-{month:02}")
}

/// The ordered list of "YYYY-MM" keys from (start_year, start_month) to
/// (end_year, end_month), both endpoints included.
///
/// Errors when the end precedes the start or a month is out of range —
/// a reversed period must never silently produce a garbage range.
pub fn month_range(
    start_year: i32,
    start_month: u32,
    end_year: i32,
    end_month: u32,
) -> Result<Vec<String>> {
    if !(1..=12).contains(&start_month) || !(1..=12).contains(&end_month) {
        anyhow::bail!("month out of range: start {start_month}, end {end_month}");
    }
    if (end_year, end_month) < (start_year, start_month) {
        anyhow::bail!(
            "month range end {} precedes start {}",
            month_key(end_year, end_month),
            month_key(start_year, start_month),
        );
    }

    let mut keys = Vec::new();
    let (mut year, mut month) = (start_year, start_month);
    loop {
        keys.push(month_key(year, month));
        if (year, month) == (end_year, end_month) {
            break;
        }
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_month_range() {
        let keys = month_range(2021, 3, 2021, 3).unwrap();
        assert_eq!(keys, vec!["2021-03"]);
    }

    #[test]
    fn same_year_is_contiguous_slice() {
        let keys = month_range(2021, 10, 2021, 12).unwrap();
        assert_eq!(keys, vec!["2021-10", "2021-11", "2021-12"]);
    }

    #[test]
    fn multi_year_count_matches_formula() {
        let (sy, sm, ey, em) = (2019, 11, 2022, 2);
        let keys = month_range(sy, sm, ey, em).unwrap();
        let expected = (13 - sm) + (ey - sy - 1) as u32 * 12 + em;
        assert_eq!(keys.len(), expected as usize);
        assert_eq!(keys.first().map(String::as_str), Some("2019-11"));
        assert_eq!(keys.last().map(String::as_str), Some("2022-02"));
    }

    #[test]
    fn keys_are_zero_padded() {
        let keys = month_range(2020, 12, 2021, 1).unwrap();
        assert_eq!(keys, vec!["2020-12", "2021-01"]);
    }

    #[test]
    fn reversed_range_errors() {
        assert!(month_range(2021, 5, 2021, 4).is_err());
        assert!(month_range(2022, 1, 2021, 12).is_err());
    }

    #[test]
    fn invalid_month_errors() {
        assert!(month_range(2021, 0, 2021, 3).is_err());
        assert!(month_range(2021, 1, 2021, 13).is_err());
    }
}
