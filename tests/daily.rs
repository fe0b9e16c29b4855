// Day-of-year ordinal and daily index selection.

use chrono::{Datelike, Duration, FixedOffset, NaiveDate, TimeZone};
use taigi_daily::{Catalog, WORDS, WidgetError, WordContext, WordEntry, daily_index, day_of_year};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn check_year(year: i32, days: u32) {
    let mut d = date(year, 1, 1);
    assert_eq!(day_of_year(&d), 1);
    let mut prev = 1;
    while d.succ_opt().unwrap().year() == year {
        d = d.succ_opt().unwrap();
        let cur = day_of_year(&d);
        assert_eq!(cur, prev + 1, "ordinal must grow by one on {d}");
        prev = cur;
    }
    assert_eq!(d, date(year, 12, 31));
    assert_eq!(prev, days);
}

#[test]
fn ordinal_counts_days_in_common_year() {
    check_year(2025, 365);
    check_year(1900, 365);
}

#[test]
fn ordinal_counts_days_in_leap_year() {
    check_year(2024, 366);
    check_year(2000, 366);
}

#[test]
fn ordinal_matches_calendar_subtraction() {
    for y in [1999, 2023, 2024, 2026] {
        let jan1 = date(y, 1, 1);
        for offset in 0..365 {
            let d = jan1 + Duration::days(offset);
            assert_eq!(day_of_year(&d) as i64, offset + 1);
        }
    }
}

#[test]
fn ordinal_ignores_dst_offsets() {
    // Local datetimes just after midnight on either side of a spring-forward
    // shift keep their calendar ordinal, whatever the UTC offset.
    let before = FixedOffset::east_opt(3600).unwrap();
    let after = FixedOffset::east_opt(7200).unwrap();
    let march_30 = before.with_ymd_and_hms(2025, 3, 30, 0, 30, 0).unwrap();
    let march_31 = after.with_ymd_and_hms(2025, 3, 31, 0, 30, 0).unwrap();
    assert_eq!(day_of_year(&march_30), 89);
    assert_eq!(day_of_year(&march_31), 90);

    let oct_26 = after.with_ymd_and_hms(2025, 10, 26, 0, 5, 0).unwrap();
    let oct_27 = before.with_ymd_and_hms(2025, 10, 27, 0, 5, 0).unwrap();
    assert_eq!(day_of_year(&oct_27), day_of_year(&oct_26) + 1);
}

#[test]
fn daily_index_stays_in_range_and_is_deterministic() {
    for len in 1..=WORDS.len() {
        let catalog = Catalog::new(&WORDS[..len]);
        let mut d = date(2024, 1, 1);
        for _ in 0..400 {
            let idx = daily_index(&catalog, &d).unwrap();
            assert!(idx < len);
            assert_eq!(idx, daily_index(&catalog, &d).unwrap());
            assert_eq!(idx, day_of_year(&d) as usize % len);
            d = d.succ_opt().unwrap();
        }
    }
}

#[test]
fn daily_index_cycles_through_builtin_catalog() {
    let catalog = Catalog::builtin();
    // Jan 1 is ordinal 1, so the first row comes up on ordinal 12, 24, ...
    assert_eq!(daily_index(&catalog, &date(2026, 1, 1)).unwrap(), 1);
    assert_eq!(daily_index(&catalog, &date(2026, 1, 12)).unwrap(), 0);
    assert_eq!(daily_index(&catalog, &date(2026, 1, 13)).unwrap(), 1);
}

#[test]
fn two_entry_catalog_picks_odd_day_entry() {
    static PAIR: [WordEntry; 2] = [
        WordEntry {
            id: "a",
            word: "紅吱吱",
            romaji: "Âng-ki-ki",
            color_hex: "#D32F2F",
            is_dark: true,
            category: "視覺",
            context: WordContext { sentence: "s", meaning: "m" },
            desc: "d",
        },
        WordEntry {
            id: "b",
            word: "白雪雪",
            romaji: "Pe̍h-sut-sut",
            color_hex: "#F5F5F5",
            is_dark: false,
            category: "視覺",
            context: WordContext { sentence: "s", meaning: "m" },
            desc: "d",
        },
    ];
    let catalog = Catalog::new(&PAIR);
    let jan3 = date(2026, 1, 3);
    assert_eq!(day_of_year(&jan3), 3);
    let idx = daily_index(&catalog, &jan3).unwrap();
    assert_eq!(catalog.get(idx).unwrap().id, "b");
}

#[test]
fn empty_catalog_has_no_daily_index() {
    let catalog = Catalog::new(&[]);
    assert_eq!(daily_index(&catalog, &date(2026, 6, 1)), Err(WidgetError::EmptyCatalog));
}
