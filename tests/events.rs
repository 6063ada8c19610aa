use chrono::{DateTime, Utc};
use rstest::rstest;
use schyntax::{Result, Schedule};

fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[test]
fn upcoming() -> Result<()> {
    let schedule = Schedule::new("hours(*) min(0)")?;
    let now = Utc::now();

    // Get the next event's timestamp starting from now
    let next = schedule.next_after(&now)?;
    assert!(next > now);

    Ok(())
}

#[test]
fn iter() -> Result<()> {
    let schedule = Schedule::new("sec(*%15)")?;
    let now = Utc::now();

    // Every event is strictly after the one before it
    let events: Vec<_> = schedule.iter(&now).take(20).collect();
    assert_eq!(events.len(), 20);
    assert!(events.windows(2).all(|w| w[0] < w[1]));

    Ok(())
}

#[rstest]
#[case("min(*%5)", "2014-01-01T00:00:00Z", "2014-01-01T00:05:00Z", "2014-01-01T00:00:00Z")]
#[case("hours(3..5)", "2014-01-01T06:30:00Z", "2014-01-02T03:00:00Z", "2014-01-01T05:00:00Z")]
#[case(
    "days(mo..fr) min(0,30)",
    "2015-06-06T12:00:00Z",
    "2015-06-08T00:00:00Z",
    "2015-06-05T23:30:00Z"
)]
#[case("dom(-1)", "2015-02-15T00:00:00Z", "2015-02-28T00:00:00Z", "2015-01-31T00:00:00Z")]
#[case("dom(-1)", "2016-02-15T00:00:00Z", "2016-02-29T00:00:00Z", "2016-01-31T00:00:00Z")]
#[case(
    "dates(11/1..2/28)",
    "2015-07-01T00:00:00Z",
    "2015-11-01T00:00:00Z",
    "2015-02-28T00:00:00Z"
)]
#[case(
    "{sec(0)} {sec(30)}",
    "2015-01-01T00:00:10Z",
    "2015-01-01T00:00:30Z",
    "2015-01-01T00:00:00Z"
)]
fn next_and_previous(
    #[case] schedule: &str,
    #[case] start: &str,
    #[case] next: &str,
    #[case] previous: &str,
) {
    let schedule = Schedule::new(schedule).unwrap();

    assert_eq!(schedule.next_after(&at(start)).unwrap(), at(next));
    assert_eq!(schedule.previous_at_or_before(&at(start)).unwrap(), at(previous));
}

#[test]
fn schedules_are_shareable_across_threads() {
    let schedule = std::sync::Arc::new(Schedule::new("min(*%5)").unwrap());
    let start = at("2014-01-01T00:00:00Z");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let schedule = schedule.clone();
            std::thread::spawn(move || schedule.next_after(&start).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), at("2014-01-01T00:05:00Z"));
    }
}
