//! Weekday adjusters checked against a day-by-day search.

use kalends_daynumber::{DayNumber, DayOfWeek};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn brute_force_next_or_same(start: DayNumber, dow: DayOfWeek) -> DayNumber {
    let mut day = start;
    while day.day_of_week() != dow {
        day = day.next_day().unwrap();
    }
    day
}

fn brute_force_previous_or_same(start: DayNumber, dow: DayOfWeek) -> DayNumber {
    let mut day = start;
    while day.day_of_week() != dow {
        day = day.previous_day().unwrap();
    }
    day
}

#[test]
fn next_monday_from_zero() {
    // Day 0 is itself a Monday, so the first Monday strictly after it is day 7.
    let next = DayNumber::ZERO.next(DayOfWeek::Monday).unwrap();
    assert_eq!(next.days_since_zero(), 7);
    assert_eq!(
        DayNumber::ZERO.next_or_same(DayOfWeek::Monday).unwrap(),
        DayNumber::ZERO
    );
}

#[test]
fn adjusters_match_brute_force_around_zero() {
    for n in -400..=400 {
        let day = DayNumber::from_days_since_zero(n);
        for dow in DayOfWeek::ALL {
            let next_or_same = brute_force_next_or_same(day, dow);
            let previous_or_same = brute_force_previous_or_same(day, dow);

            assert_eq!(day.next_or_same(dow).unwrap(), next_or_same, "day {n} {dow}");
            assert_eq!(
                day.previous_or_same(dow).unwrap(),
                previous_or_same,
                "day {n} {dow}"
            );
            assert_eq!(
                day.next(dow).unwrap(),
                brute_force_next_or_same(day.next_day().unwrap(), dow),
                "day {n} {dow}"
            );
            assert_eq!(
                day.previous(dow).unwrap(),
                brute_force_previous_or_same(day.previous_day().unwrap(), dow),
                "day {n} {dow}"
            );

            let nearest = day.nearest(dow).unwrap();
            assert_eq!(nearest.day_of_week(), dow);
            assert!((nearest - day).abs() <= 3, "day {n} {dow}");
        }
    }
}

#[test]
fn adjusters_match_brute_force_random_sample() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let n = rng.random_range(-1_000_000_000..1_000_000_000);
        let day = DayNumber::from_days_since_zero(n);
        for dow in DayOfWeek::ALL {
            assert_eq!(
                day.next_or_same(dow).unwrap(),
                brute_force_next_or_same(day, dow)
            );
            assert_eq!(
                day.previous_or_same(dow).unwrap(),
                brute_force_previous_or_same(day, dow)
            );
        }
    }
}

#[test]
fn day_of_week_cycles() {
    let mut previous = DayNumber::from_days_since_zero(-50).day_of_week();
    for n in -49..50 {
        let current = DayNumber::from_days_since_zero(n).day_of_week();
        let expected = if previous == DayOfWeek::Sunday {
            1
        } else {
            previous.iso_number() + 1
        };
        assert_eq!(current.iso_number(), expected);
        previous = current;
    }
}
