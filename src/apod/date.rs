use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

// ---------------------------------------------------------------------------
// Date sampler
// ---------------------------------------------------------------------------

/// First day of the APOD archive.
pub fn archive_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or_default()
}

/// Current local wall-clock time, the upper bound for sampling.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Pick a random day in `[archive_start, now]`.
///
/// The offset is drawn uniformly over elapsed *seconds* and then truncated to
/// the day, so today is slightly under-represented when sampled early in
/// the day.
pub fn sample_date<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NaiveDate {
    let start = archive_start().and_time(NaiveTime::MIN);
    let span = (now - start).num_seconds().max(0);
    let offset = rng.gen_range(0..=span);
    (start + Duration::seconds(offset)).date()
}

/// `YYYY-MM-DD`, the format the API expects.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Human-readable APOD page for a given day.
pub fn apod_page_url(date: NaiveDate) -> String {
    format!("https://apod.nasa.gov/apod/ap{}.html", date.format("%y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn samples_stay_inside_archive_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = at(2024, 3, 9, 15);
        for _ in 0..5_000 {
            let d = sample_date(&mut rng, now);
            assert!(d >= archive_start(), "{d} before archive start");
            assert!(d <= now.date(), "{d} after now");
        }
    }

    #[test]
    fn samples_cover_more_than_one_year() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = at(2024, 3, 9, 15);
        let years: std::collections::BTreeSet<_> = (0..500)
            .map(|_| chrono::Datelike::year(&sample_date(&mut rng, now)))
            .collect();
        assert!(years.len() > 10);
    }

    #[test]
    fn clock_before_archive_start_yields_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let d = sample_date(&mut rng, at(1990, 1, 1, 0));
        assert_eq!(d, archive_start());
    }

    #[test]
    fn sampling_on_first_day_returns_first_day() {
        let mut rng = StdRng::seed_from_u64(3);
        let d = sample_date(&mut rng, at(1995, 6, 16, 12));
        assert_eq!(d, archive_start());
    }

    #[test]
    fn formats_as_iso_day() {
        let d = NaiveDate::from_ymd_opt(2001, 2, 3).unwrap();
        assert_eq!(format_date(d), "2001-02-03");
        assert_eq!(format_date(archive_start()), "1995-06-16");
    }

    #[test]
    fn page_url_uses_two_digit_year() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(apod_page_url(d), "https://apod.nasa.gov/apod/ap200101.html");
    }
}
