//! Unit tests for kt-schedule.

use kt_core::{BlackoutWindow, Kathisma, ReaderNumber};

use crate::{
    GroupCalendar, KATHISMA_SEQUENCE, ReaderSchedule, build_group_calendar, build_reader_schedule,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn k(n: u8) -> Kathisma {
    Kathisma(n)
}

fn r(n: u8) -> ReaderNumber {
    ReaderNumber(n)
}

/// Reader schedule for 2025: blackout days 107..=116, 365 days.
fn reader_2025(start: u8) -> ReaderSchedule {
    build_reader_schedule(k(start), 107, 116, 365, &KATHISMA_SEQUENCE)
}

fn group_2025() -> GroupCalendar {
    build_group_calendar(k(1), 2025).unwrap()
}

/// Every pair of consecutive assigned days (in day order, skipping gaps)
/// steps the kathisma by exactly one.
fn assert_continuous(schedule: &ReaderSchedule) {
    let entries: Vec<(u32, Kathisma)> = schedule.iter().collect();
    for pair in entries.windows(2) {
        let ((d0, k0), (d1, k1)) = (pair[0], pair[1]);
        assert_eq!(k1, k0.next(), "day {d0} → {d1}: {k0} then {k1}");
    }
}

// ── Rotation ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rotation {
    use super::*;
    use crate::rotation::zero_loop_len;
    use crate::{cycle_assign, zero_loop};

    #[test]
    fn sequence_is_one_to_twenty() {
        let values: Vec<u8> = KATHISMA_SEQUENCE.iter().map(|k| k.get()).collect();
        assert_eq!(values, (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn cycle_assign_wraps_after_twenty() {
        let assigned = cycle_assign(21..=62, &KATHISMA_SEQUENCE);
        assert_eq!(assigned.len(), 42);
        assert_eq!(assigned[0], (21, k(1)));
        assert_eq!(assigned[19], (40, k(20)));
        assert_eq!(assigned[20], (41, k(1)));
        assert_eq!(assigned[41], (62, k(2)));
    }

    #[test]
    fn cycle_assign_keeps_given_order() {
        let assigned = cycle_assign([9, 3, 5], &KATHISMA_SEQUENCE);
        assert_eq!(assigned, vec![(9, k(1)), (3, k(2)), (5, k(3))]);
    }

    #[test]
    fn cycle_assign_empty_inputs() {
        assert!(cycle_assign(5..=4, &KATHISMA_SEQUENCE).is_empty());
        assert!(cycle_assign(1..=10, &[]).is_empty());
    }

    #[test]
    fn zero_loop_runs_up_to_twenty() {
        let lp = zero_loop(1, 17, 365);
        assert_eq!(lp, vec![(1, k(17)), (2, k(18)), (3, k(19)), (4, k(20))]);
        assert_eq!(zero_loop_len(17), 4);
    }

    #[test]
    fn zero_loop_from_twenty_is_one_day() {
        assert_eq!(zero_loop(117, 20, 365), vec![(117, k(20))]);
        assert_eq!(zero_loop_len(20), 1);
    }

    #[test]
    fn zero_loop_past_twenty_is_empty() {
        assert!(zero_loop(117, 21, 365).is_empty());
        assert_eq!(zero_loop_len(21), 0);
    }

    #[test]
    fn zero_loop_clipped_at_last_day() {
        assert_eq!(zero_loop(364, 1, 365), vec![(364, k(1)), (365, k(2))]);
        assert!(zero_loop(1, 1, 0).is_empty());
    }
}

// ── ReaderSchedule builder ────────────────────────────────────────────────────

#[cfg(test)]
mod reader {
    use super::*;

    #[test]
    fn reader_one_2025_segments() {
        let s = reader_2025(1);
        // Pre-blackout zero loop covers days 1..=20.
        assert_eq!(s.get(1), Some(k(1)));
        assert_eq!(s.get(20), Some(k(20)));
        // Full cycles from day 21.
        assert_eq!(s.get(21), Some(k(1)));
        assert_eq!(s.get(106), Some(k(6)));
        // Blackout absent.
        assert!((107..=116).all(|d| s.get(d).is_none()));
        // Post-blackout zero loop 7..=20 on days 117..=130.
        assert_eq!(s.get(117), Some(k(7)));
        assert_eq!(s.get(130), Some(k(20)));
        // Full cycles restart at 1.
        assert_eq!(s.get(131), Some(k(1)));
        assert_eq!(s.get(365), Some(k(15)));
        assert_eq!(s.len(), 365 - 10);
    }

    #[test]
    fn start_twenty_has_single_day_zero_loop() {
        let s = reader_2025(20);
        assert_eq!(s.get(1), Some(k(20)));
        assert_eq!(s.get(2), Some(k(1)));
        assert_eq!(s.get(21), Some(k(20)));
        assert_eq!(s.get(22), Some(k(1)));
    }

    #[test]
    fn continuous_across_blackout() {
        for start in 1..=20 {
            assert_continuous(&reader_2025(start));
        }
    }

    #[test]
    fn last_before_blackout_twenty_skips_post_zero_loop() {
        // Day 106 is kathisma 20 when start = 15 (15 + 105 = 120 ≡ 20).
        let s = reader_2025(15);
        assert_eq!(s.get(106), Some(k(20)));
        assert_eq!(s.get(117), Some(k(1)));
        assert_eq!(s.get(136), Some(k(20)));
        assert_eq!(s.get(137), Some(k(1)));
    }

    #[test]
    fn nth_covered_day_formula() {
        // The n-th covered day (0-based) holds start + n, wrapped.
        let s = reader_2025(9);
        for (n, (_, kathisma)) in s.iter().enumerate() {
            assert_eq!(kathisma, k(9).advance(n as u32));
        }
    }

    #[test]
    fn leap_year_covers_day_366() {
        let w = BlackoutWindow::for_year(2024).unwrap();
        let s = build_reader_schedule(k(1), w.start_day(), w.end_day(), 366, &KATHISMA_SEQUENCE);
        assert!(s.contains_day(366));
        assert!(!s.contains_day(367));
        assert_eq!(s.len(), 366 - 10);
    }

    #[test]
    fn blackout_at_start_of_year() {
        // Window 1..=10: nothing before it, post segment starts at kathisma 1.
        let s = build_reader_schedule(k(5), 1, 10, 365, &KATHISMA_SEQUENCE);
        assert_eq!(s.first(), Some((11, k(1))));
        assert_eq!(s.len(), 355);
        assert_continuous(&s);
    }

    #[test]
    fn blackout_shorter_than_zero_loop_window() {
        // Only 4 days before the window; the zero loop is clipped to them.
        let s = build_reader_schedule(k(1), 5, 14, 365, &KATHISMA_SEQUENCE);
        assert_eq!(s.get(4), Some(k(4)));
        assert_eq!(s.get(15), Some(k(5)));
        assert_eq!(s.len(), 365 - 10);
        assert_continuous(&s);
    }

    #[test]
    fn blackout_at_end_of_year() {
        // Window 360..=369 runs past the year: post segments are empty.
        let s = build_reader_schedule(k(1), 360, 369, 365, &KATHISMA_SEQUENCE);
        assert_eq!(s.last(), Some((359, k(19))));
        assert_eq!(s.len(), 359);
    }

    #[test]
    fn degenerate_year_is_empty() {
        let s = build_reader_schedule(k(1), 107, 116, 0, &KATHISMA_SEQUENCE);
        assert!(s.is_empty());
    }

    #[test]
    fn inverted_window_gives_partial_schedule() {
        // blackout_start > blackout_end: no error, both segments still built.
        let s = build_reader_schedule(k(1), 200, 100, 365, &KATHISMA_SEQUENCE);
        assert!(!s.is_empty());
        assert!(s.days().all(|d| (1..=365).contains(&d)));
    }
}

// ── GroupCalendar ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod group {
    use chrono::NaiveDate;

    use super::*;
    use crate::Reading;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn twenty_readers_in_order() {
        let cal = group_2025();
        assert_eq!(cal.len(), 20);
        let order: Vec<u8> = cal.iter().map(|(n, _)| n.get()).collect();
        assert_eq!(order, (1..=20).collect::<Vec<u8>>());
    }

    #[test]
    fn day_one_steps_by_reader() {
        let cal = group_2025();
        for (reader, schedule) in cal.iter() {
            assert_eq!(schedule.get(1), Some(k(reader.get())), "reader {reader}");
        }
    }

    #[test]
    fn day_one_wraps_with_offset() {
        let cal = build_group_calendar(k(18), 2025).unwrap();
        assert_eq!(cal.reader(r(1)).unwrap().get(1), Some(k(18)));
        assert_eq!(cal.reader(r(3)).unwrap().get(1), Some(k(20)));
        assert_eq!(cal.reader(r(4)).unwrap().get(1), Some(k(1)));
        assert_eq!(cal.reader(r(20)).unwrap().get(1), Some(k(17)));
    }

    #[test]
    fn blackout_2025_absent_everywhere() {
        let cal = group_2025();
        assert_eq!(cal.blackout.start, date(2025, 4, 17));
        assert_eq!(cal.blackout.end, date(2025, 4, 26));
        for (_, schedule) in cal.iter() {
            assert!((107..=116).all(|d| !schedule.contains_day(d)));
        }
    }

    #[test]
    fn readers_hold_distinct_kathismas_each_day() {
        let cal = group_2025();
        for day in (1..=365).filter(|d| !cal.blackout.contains_day(*d)) {
            let mut seen: Vec<u8> = cal.iter().map(|(_, s)| s.get(day).unwrap().get()).collect();
            seen.sort_unstable();
            assert_eq!(seen, (1..=20).collect::<Vec<u8>>(), "day {day}");
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(group_2025(), group_2025());
    }

    #[test]
    fn unrepresentable_year_errors() {
        assert!(build_group_calendar(k(1), i32::MAX).is_err());
    }

    #[test]
    fn reading_lookup() {
        let cal = group_2025();
        assert_eq!(cal.reading(r(1), date(2025, 1, 1)), Some(Reading::Kathisma(k(1))));
        assert_eq!(cal.reading(r(2), date(2025, 1, 1)), Some(Reading::Kathisma(k(2))));
        assert_eq!(cal.reading(r(1), date(2025, 4, 20)), Some(Reading::Blackout));
        assert_eq!(cal.reading(r(1), date(2025, 4, 27)), Some(Reading::Kathisma(k(7))));
        assert_eq!(cal.reading(r(1), date(2026, 1, 1)), None);
    }

    #[test]
    fn reading_unassigned_in_partial_calendar() {
        let cal = GroupCalendar::from_parts(2025, vec![ReaderSchedule::new()]).unwrap();
        assert_eq!(cal.reading(r(1), date(2025, 1, 1)), Some(Reading::Unassigned));
        assert_eq!(cal.reading(r(1), date(2025, 4, 18)), Some(Reading::Blackout));
    }

    #[test]
    fn from_parts_pads_and_derives_offset() {
        let one: ReaderSchedule = [(1, k(7)), (2, k(8))].into_iter().collect();
        let cal = GroupCalendar::from_parts(2025, vec![one]).unwrap();
        assert_eq!(cal.len(), 20);
        assert_eq!(cal.start_offset, k(7));
        assert_eq!(cal.days_in_year, 365);
        assert!(cal.reader(r(20)).unwrap().is_empty());
    }

    #[test]
    fn from_parts_rejects_too_many_readers() {
        let err = GroupCalendar::from_parts(2025, vec![ReaderSchedule::new(); 21]).unwrap_err();
        assert_eq!(err.to_string(), "group calendar holds 21 readers, at most 20 are allowed");
    }
}

// ── Continuation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod continuation {
    use super::*;
    use crate::{OffsetSource, next_start_offset, resolve_start_offset};

    #[test]
    fn last_kathisma_twenty_restarts_at_one() {
        let s: ReaderSchedule = [(1, k(19)), (365, k(20))].into_iter().collect();
        assert_eq!(next_start_offset(&s), k(1));
    }

    #[test]
    fn last_kathisma_below_twenty_adds_one() {
        let s: ReaderSchedule = [(365, k(7)), (10, k(20))].into_iter().collect();
        assert_eq!(next_start_offset(&s), k(8));
    }

    #[test]
    fn empty_schedule_restarts_at_one() {
        assert_eq!(next_start_offset(&ReaderSchedule::new()), k(1));
    }

    #[test]
    fn calendar_2025_continues_at_sixteen() {
        // Reader 1 ends 2025 on kathisma 15 (see reader_one_2025_segments).
        assert_eq!(group_2025().next_start_offset(), k(16));
    }

    #[test]
    fn continuation_has_no_gap_across_years() {
        let y2025 = group_2025();
        let y2026 = build_group_calendar(y2025.next_start_offset(), 2026).unwrap();
        let last = y2025.reader(r(1)).unwrap().last().unwrap().1;
        let first = y2026.reader(r(1)).unwrap().first().unwrap().1;
        assert_eq!(first, last.next());
    }

    #[test]
    fn explicit_offset_wins() {
        let prev = group_2025();
        let resolved = resolve_start_offset(2026, Some(k(3)), [&prev], k(9));
        assert_eq!(resolved, (k(3), OffsetSource::Explicit));
    }

    #[test]
    fn previous_year_is_continued() {
        let prev = group_2025();
        let resolved = resolve_start_offset(2026, None, [&prev], k(9));
        assert_eq!(resolved, (k(16), OffsetSource::Continued { from_year: 2025 }));
    }

    #[test]
    fn other_years_fall_back_to_default() {
        let prev = group_2025();
        let resolved = resolve_start_offset(2027, None, [&prev], k(9));
        assert_eq!(resolved, (k(9), OffsetSource::GroupDefault));
        let resolved = resolve_start_offset(2027, None, None::<&GroupCalendar>, k(4));
        assert_eq!(resolved, (k(4), OffsetSource::GroupDefault));
    }
}

// ── CSV Loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{ScheduleError, load_calendar_reader};

    const CSV: &[u8] = b"\
reader,day_of_year,date,kathisma\n\
1,1,2025-01-01,4\n\
1,2,2025-01-02,5\n\
1,365,2025-12-31,20\n\
2,1,2025-01-01,5\n\
";

    #[test]
    fn loads_readers_and_year() {
        let cal = load_calendar_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(cal.year, 2025);
        assert_eq!(cal.start_offset, k(4));
        assert_eq!(cal.reader(r(1)).unwrap().len(), 3);
        assert_eq!(cal.reader(r(2)).unwrap().get(1), Some(k(5)));
        assert!(cal.reader(r(3)).unwrap().is_empty());
        assert_eq!(cal.next_start_offset(), k(1));
    }

    #[test]
    fn reader_out_of_range_errors() {
        let bad = b"reader,day_of_year,date,kathisma\n21,1,2025-01-01,1\n";
        let err = load_calendar_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, ScheduleError::Core(_)), "{err}");
    }

    #[test]
    fn kathisma_out_of_range_errors() {
        let bad = b"reader,day_of_year,date,kathisma\n1,1,2025-01-01,0\n";
        assert!(load_calendar_reader(Cursor::new(bad.as_slice())).is_err());
    }

    #[test]
    fn mismatched_day_errors() {
        let bad = b"reader,day_of_year,date,kathisma\n1,2,2025-01-01,1\n";
        let err = load_calendar_reader(Cursor::new(bad.as_slice())).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn mixed_years_error() {
        let bad = b"\
reader,day_of_year,date,kathisma\n\
1,1,2025-01-01,1\n\
1,1,2026-01-01,2\n\
";
        assert!(load_calendar_reader(Cursor::new(bad.as_slice())).is_err());
    }

    #[test]
    fn empty_file_errors() {
        let empty = b"reader,day_of_year,date,kathisma\n";
        assert!(load_calendar_reader(Cursor::new(empty.as_slice())).is_err());
    }

    #[test]
    fn invalid_date_errors() {
        let bad = b"reader,day_of_year,date,kathisma\n1,1,01/01/2025,1\n";
        assert!(load_calendar_reader(Cursor::new(bad.as_slice())).is_err());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn coverage_is_year_minus_blackout(year in 1900i32..=2999, offset in 1u8..=20) {
            let cal = build_group_calendar(k(offset), year).unwrap();
            let window = cal.blackout;
            for (_, schedule) in cal.iter() {
                for day in 1..=cal.days_in_year {
                    prop_assert_eq!(schedule.contains_day(day), !window.contains_day(day));
                }
                prop_assert!(schedule.days().all(|d| (1..=cal.days_in_year).contains(&d)));
            }
        }

        #[test]
        fn schedules_are_continuous(year in 1900i32..=2999, offset in 1u8..=20) {
            let cal = build_group_calendar(k(offset), year).unwrap();
            for (_, schedule) in cal.iter() {
                let entries: Vec<(u32, Kathisma)> = schedule.iter().collect();
                for pair in entries.windows(2) {
                    prop_assert_eq!(pair[1].1, pair[0].1.next());
                }
            }
        }

        #[test]
        fn day_one_steps_between_readers(year in 1900i32..=2999, offset in 1u8..=20) {
            let cal = build_group_calendar(k(offset), year).unwrap();
            let firsts: Vec<Kathisma> = cal.iter().map(|(_, s)| s.get(1).unwrap()).collect();
            prop_assert_eq!(firsts[0], k(offset));
            for pair in firsts.windows(2) {
                prop_assert_eq!(pair[1], pair[0].next());
            }
        }

        #[test]
        fn build_is_deterministic(year in 1900i32..=2999, offset in 1u8..=20) {
            prop_assert_eq!(
                build_group_calendar(k(offset), year).unwrap(),
                build_group_calendar(k(offset), year).unwrap()
            );
        }

        #[test]
        fn continuation_never_repeats(year in 1900i32..=2998, offset in 1u8..=20) {
            let this = build_group_calendar(k(offset), year).unwrap();
            let last = this.reader(r(1)).unwrap().last().unwrap().1;
            prop_assert_eq!(this.next_start_offset(), last.next());
        }
    }
}
