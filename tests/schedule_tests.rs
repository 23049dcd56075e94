use chrono::{Datelike, Duration, NaiveTime, Weekday};
use grifo::core::calculator::schedule::{next_occurrence, upcoming};
use grifo::errors::AppError;
use grifo::models::month::MonthName;
use grifo::models::recurrence::{Frequency, NextOccurrence, RecurrenceSpec};
use grifo::models::weekday::WeekdayName;

mod common;
use common::dt;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

fn monthly(day: u32, at: NaiveTime) -> RecurrenceSpec {
    RecurrenceSpec::new(Frequency::Monthly, Some(at), None, Some(day), None).unwrap()
}

fn yearly(month: MonthName, day: u32, at: NaiveTime) -> RecurrenceSpec {
    RecurrenceSpec::new(Frequency::Yearly, Some(at), None, Some(day), Some(month)).unwrap()
}

fn next(spec: &RecurrenceSpec, now: chrono::NaiveDateTime) -> chrono::NaiveDateTime {
    next_occurrence(spec, now)
        .unwrap()
        .instant()
        .expect("enabled schedule")
}

#[test]
fn test_disabled_short_circuits() {
    let spec = RecurrenceSpec::new(Frequency::Disabled, None, None, None, None).unwrap();

    for now in [dt(2024, 3, 10, 21, 15), dt(1999, 12, 31, 23, 59)] {
        let r = next_occurrence(&spec, now).unwrap();
        assert_eq!(r, NextOccurrence::Disabled);
        assert!(r.is_disabled());
        assert_eq!(r.instant(), None);
    }
}

#[test]
fn test_daily_later_today() {
    let spec = RecurrenceSpec::Daily { at: hm(22, 0) };
    assert_eq!(next(&spec, dt(2024, 3, 10, 21, 15)), dt(2024, 3, 10, 22, 0));
}

#[test]
fn test_daily_time_passed_rolls_to_tomorrow() {
    let spec = RecurrenceSpec::Daily { at: hm(3, 0) };
    assert_eq!(next(&spec, dt(2024, 3, 10, 21, 15)), dt(2024, 3, 11, 3, 0));
}

#[test]
fn test_daily_repeated_advance_is_exactly_24h() {
    let spec = RecurrenceSpec::Daily { at: hm(9, 0) };
    let mut now = dt(2024, 2, 27, 9, 0);

    for _ in 0..10 {
        let n = next(&spec, now);
        assert_eq!(n - now, Duration::hours(24));
        now = n;
    }

    let runs = upcoming(&spec, dt(2024, 2, 27, 8, 0), 4).unwrap();
    assert_eq!(
        runs,
        vec![
            dt(2024, 2, 27, 9, 0),
            dt(2024, 2, 28, 9, 0),
            dt(2024, 2, 29, 9, 0),
            dt(2024, 3, 1, 9, 0),
        ]
    );
}

#[test]
fn test_weekly_rolls_to_next_week() {
    let spec = RecurrenceSpec::Weekly {
        at: hm(12, 0),
        weekday: WeekdayName::Monday,
    };

    // 2024-03-12 is a Tuesday
    let now = dt(2024, 3, 12, 8, 0);
    assert_eq!(now.weekday(), Weekday::Tue);

    let n = next(&spec, now);
    assert_eq!(n, dt(2024, 3, 18, 12, 0));
    assert_eq!(n.weekday(), Weekday::Mon);
    assert_eq!((n.date() - now.date()).num_days(), 6);
}

#[test]
fn test_weekly_later_this_week() {
    let spec = RecurrenceSpec::Weekly {
        at: hm(3, 0),
        weekday: WeekdayName::Saturday,
    };

    // Sunday 2024-03-10 → Saturday 2024-03-16
    assert_eq!(next(&spec, dt(2024, 3, 10, 21, 15)), dt(2024, 3, 16, 3, 0));
}

#[test]
fn test_weekly_same_weekday_as_candidate_goes_a_full_week() {
    let spec = RecurrenceSpec::Weekly {
        at: hm(12, 0),
        weekday: WeekdayName::Monday,
    };

    // Monday 08:00: the candidate is today 12:00, distance 0 → +7
    assert_eq!(next(&spec, dt(2024, 3, 11, 8, 0)), dt(2024, 3, 18, 12, 0));
}

#[test]
fn test_weekly_result_always_lands_on_target_weekday() {
    let now = dt(2024, 3, 10, 21, 15);
    for wd in WeekdayName::ALL {
        let spec = RecurrenceSpec::Weekly { at: hm(6, 30), weekday: wd };
        let n = next(&spec, now);

        assert_eq!(WeekdayName::from_chrono(n.weekday()), wd);
        assert!(n > now);
        assert!(n - now <= Duration::days(8));
    }
}

#[test]
fn test_monthly_day_already_passed_rolls_to_next_month() {
    let spec = monthly(5, hm(9, 0));
    assert_eq!(next(&spec, dt(2024, 3, 10, 10, 0)), dt(2024, 4, 5, 9, 0));
}

#[test]
fn test_monthly_december_rolls_into_january() {
    let spec = monthly(5, hm(9, 0));
    let n = next(&spec, dt(2024, 12, 10, 10, 0));

    assert_eq!(n, dt(2025, 1, 5, 9, 0));
    assert_eq!(n.year(), 2025);
    assert_eq!(n.month(), 1);
}

#[test]
fn test_monthly_later_this_month() {
    let spec = monthly(20, hm(9, 0));
    assert_eq!(next(&spec, dt(2024, 3, 10, 10, 0)), dt(2024, 3, 20, 9, 0));
}

#[test]
fn test_monthly_day_31_is_clamped_to_month_end() {
    let spec = monthly(31, hm(9, 0));

    assert_eq!(next(&spec, dt(2024, 4, 10, 10, 0)), dt(2024, 4, 30, 9, 0));
    // leap February
    assert_eq!(next(&spec, dt(2024, 1, 31, 10, 0)), dt(2024, 2, 29, 9, 0));
    // common February
    assert_eq!(next(&spec, dt(2023, 1, 31, 10, 0)), dt(2023, 2, 28, 9, 0));
}

#[test]
fn test_yearly_later_this_year() {
    let spec = yearly(MonthName::March, 15, hm(10, 0));
    assert_eq!(next(&spec, dt(2024, 3, 10, 21, 15)), dt(2024, 3, 15, 10, 0));
}

#[test]
fn test_yearly_date_passed_rolls_to_next_year() {
    let spec = yearly(MonthName::March, 15, hm(10, 0));

    assert_eq!(next(&spec, dt(2024, 3, 20, 8, 0)), dt(2025, 3, 15, 10, 0));
    // same day, time already passed
    assert_eq!(next(&spec, dt(2024, 3, 15, 10, 0)), dt(2025, 3, 15, 10, 0));
}

#[test]
fn test_yearly_leap_day_clamps_in_common_years() {
    let spec = yearly(MonthName::February, 29, hm(0, 0));

    assert_eq!(next(&spec, dt(2024, 1, 10, 12, 0)), dt(2024, 2, 29, 0, 0));
    assert_eq!(next(&spec, dt(2024, 3, 1, 12, 0)), dt(2025, 2, 28, 0, 0));
}

#[test]
fn test_yearly_new_years_eve_candidate() {
    // Candidate rolls into next year before month/day are applied
    let spec = yearly(MonthName::January, 1, hm(0, 0));
    assert_eq!(next(&spec, dt(2024, 12, 31, 23, 0)), dt(2025, 1, 1, 0, 0));
}

#[test]
fn test_missing_discriminant_fields_are_rejected() {
    let weekly = RecurrenceSpec::new(Frequency::Weekly, Some(hm(3, 0)), None, Some(5), None);
    assert!(matches!(weekly, Err(AppError::Config(ref m)) if m.contains("day_of_week")));

    let monthly = RecurrenceSpec::new(
        Frequency::Monthly,
        Some(hm(3, 0)),
        Some(WeekdayName::Monday),
        None,
        None,
    );
    assert!(matches!(monthly, Err(AppError::Config(ref m)) if m.contains("day_of_month")));

    let yearly = RecurrenceSpec::new(Frequency::Yearly, Some(hm(3, 0)), None, Some(5), None);
    assert!(matches!(yearly, Err(AppError::Config(ref m)) if m.contains("month")));

    let daily = RecurrenceSpec::new(Frequency::Daily, None, None, None, None);
    assert!(matches!(daily, Err(AppError::Config(ref m)) if m.contains("time")));
}

#[test]
fn test_day_of_month_out_of_range_is_rejected() {
    for day in [0, 32] {
        let r = RecurrenceSpec::new(Frequency::Monthly, Some(hm(3, 0)), None, Some(day), None);
        assert!(matches!(r, Err(AppError::InvalidDayOfMonth(d)) if d == day));
    }
}

#[test]
fn test_unused_fields_are_ignored() {
    let spec = RecurrenceSpec::new(
        Frequency::Daily,
        Some(hm(3, 0)),
        Some(WeekdayName::Friday),
        Some(12),
        Some(MonthName::May),
    )
    .unwrap();

    assert_eq!(spec, RecurrenceSpec::Daily { at: hm(3, 0) });
    assert_eq!(spec.frequency(), Frequency::Daily);
}

#[test]
fn test_names_parse_in_spanish_and_english() {
    assert_eq!("Lunes".parse::<WeekdayName>().unwrap(), WeekdayName::Monday);
    assert_eq!("miércoles".parse::<WeekdayName>().unwrap(), WeekdayName::Wednesday);
    assert_eq!("MIERCOLES".parse::<WeekdayName>().unwrap(), WeekdayName::Wednesday);
    assert_eq!("saturday".parse::<WeekdayName>().unwrap(), WeekdayName::Saturday);
    assert!("lunez".parse::<WeekdayName>().is_err());

    assert_eq!("Setiembre".parse::<MonthName>().unwrap(), MonthName::September);
    assert_eq!("12".parse::<MonthName>().unwrap(), MonthName::December);
    assert!("13".parse::<MonthName>().is_err());
    assert!("brumario".parse::<MonthName>().is_err());
}

#[test]
fn test_weekday_ordinals_match_chrono() {
    for wd in WeekdayName::ALL {
        let chrono_wd = match wd {
            WeekdayName::Sunday => Weekday::Sun,
            WeekdayName::Monday => Weekday::Mon,
            WeekdayName::Tuesday => Weekday::Tue,
            WeekdayName::Wednesday => Weekday::Wed,
            WeekdayName::Thursday => Weekday::Thu,
            WeekdayName::Friday => Weekday::Fri,
            WeekdayName::Saturday => Weekday::Sat,
        };
        assert_eq!(wd.ordinal(), chrono_wd.num_days_from_sunday());
        assert_eq!(WeekdayName::from_chrono(chrono_wd), wd);
    }
}
