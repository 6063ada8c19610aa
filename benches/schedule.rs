use chrono::DateTime;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use schyntax::Schedule;

const EXPRESSIONS: &[&str] = &[
    "sec(*)",
    "min(*%5)",
    "hours(3..5)",
    "days(mo..fr) min(0,30)",
    "dom(-1)",
    "dates(11/1..2/28)",
    "{sec(0)} {sec(30)}",
    "dates(2/29%7)",
];

const NOW: &[&str] = &["2014-01-01T00:00:00Z", "2015-06-06T12:00:00Z", "2016-02-28T23:59:59Z"];

pub fn new_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| Schedule::new(*e).unwrap())
        });
    }
    group.finish();
}

pub fn next_after_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_after");
    for expression in EXPRESSIONS {
        for now_str in NOW {
            let now = DateTime::parse_from_rfc3339(now_str).unwrap();
            let schedule = Schedule::new(*expression).unwrap();
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{now_str}/{expression}")),
                &(now, &schedule),
                |b, (now, schedule)| b.iter(|| schedule.next_after(now).unwrap()),
            );
        }
    }
    group.finish();
}

pub fn previous_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("previous_at_or_before");
    for expression in EXPRESSIONS {
        for now_str in NOW {
            let now = DateTime::parse_from_rfc3339(now_str).unwrap();
            let schedule = Schedule::new(*expression).unwrap();
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{now_str}/{expression}")),
                &(now, &schedule),
                |b, (now, schedule)| b.iter(|| schedule.previous_at_or_before(now).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, new_benchmark, next_after_benchmark, previous_benchmark);
criterion_main!(benches);
