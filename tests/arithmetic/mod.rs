use jiff::SignedDuration;
use sqltime::{time, Time};

#[test]
fn wraps_around_midnight() {
    let (hour, half_hour) =
        (SignedDuration::from_hours(1), SignedDuration::from_mins(30));
    assert_eq!(time(23, 30, 0) + hour, time(0, 30, 0));
    assert_eq!(time(0, 15, 0) - half_hour, time(23, 45, 0));
    assert_eq!(
        time(0, 0, 0) - SignedDuration::from_hours(24 * 365),
        time(0, 0, 0),
    );
    assert_eq!(time(1, 0, 0).wrapping_add_seconds(-7_200), time(23, 0, 0));

    let mut t = time(22, 0, 0);
    t += SignedDuration::from_hours(3);
    assert_eq!(t, time(1, 0, 0));
    t -= SignedDuration::from_secs(3_601);
    assert_eq!(t, time(23, 59, 59));
}

#[test]
fn sub_second_durations_are_ignored() {
    let d = SignedDuration::from_millis(1_999);
    assert_eq!(time(12, 0, 0) + d, time(12, 0, 1));
    assert_eq!(time(12, 0, 0) - d, time(11, 59, 59));
}

#[test]
fn extreme_durations_stay_in_range() {
    for d in [SignedDuration::MIN, SignedDuration::MAX] {
        for t in [Time::MIN, time(12, 0, 0), Time::MAX] {
            let sum = t + d;
            assert!(sum >= Time::MIN && sum <= Time::MAX);
            assert_eq!(sum - d, t, "{t} + {d:?}");
        }
    }
}

#[test]
fn add_then_sub_every_offset() {
    let t = time(8, 56, 4);
    for secs in (-200_000..200_000).step_by(997) {
        let d = SignedDuration::from_secs(secs);
        assert_eq!((t + d) - d, t, "{secs}");
        let there = t.wrapping_add_seconds(secs);
        assert_eq!(there.wrapping_add_seconds(-secs), t);
    }
}

#[test]
fn difference() {
    let (a, b) = (time(22, 0, 0), time(20, 10, 1));
    assert_eq!(a - b, SignedDuration::from_secs(6_599));
    assert_eq!(b - a, SignedDuration::from_secs(-6_599));
    assert_eq!(b + (a - b), a);
    assert_eq!(Time::MAX - Time::MIN, SignedDuration::from_secs(86_399));
}
