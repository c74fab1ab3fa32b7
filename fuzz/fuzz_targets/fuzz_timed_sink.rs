#![no_main]
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use timelog_core::mocks::MemorySink;
use timelog_core::{Appendable, FixedClock, TimedSink};

fuzz_target!(|input: (i32, u32, u32, &str)| {
    let (y, m, d, text) = input;
    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return;
    };
    let mut log = TimedSink::new(MemorySink::new(), FixedClock::on_date(date));
    if log.write(text).is_ok() {
        let out = log.into_inner().contents();
        assert!(out.ends_with(text));
        assert!(out.len() > text.len());
    }
});
