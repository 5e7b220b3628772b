use jiff::{
    civil::{Date, DateTime, Time},
    tz::TimeZone,
    Timestamp, Zoned,
};

use std::fmt::Write;

// BigQuery stores microseconds; sub-microsecond digits are truncated.

pub(super) fn write_date(dst: &mut String, date: Date) {
    let _ = write!(
        dst,
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    );
}

pub(super) fn write_time(dst: &mut String, time: Time) {
    let _ = write!(
        dst,
        "{:02}:{:02}:{:02}.{:06}",
        time.hour(),
        time.minute(),
        time.second(),
        time.subsec_nanosecond() / 1_000
    );
}

pub(super) fn write_datetime(dst: &mut String, datetime: DateTime) {
    write_date(dst, datetime.date());
    dst.push(' ');
    write_time(dst, datetime.time());
}

pub(super) fn write_timestamp(dst: &mut String, timestamp: &Timestamp) {
    write_datetime(dst, timestamp.to_zoned(TimeZone::UTC).datetime());
    dst.push_str("+00:00");
}

pub(super) fn write_zoned(dst: &mut String, zoned: &Zoned) {
    write_datetime(dst, zoned.datetime());

    let seconds = zoned.offset().seconds();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let _ = write!(dst, "{sign}{:02}:{:02}", seconds / 3600, seconds % 3600 / 60);
}
