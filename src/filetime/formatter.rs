use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::error::Error;

/// 100-нс интервалов в одной микросекунде
const TICKS_PER_MICROSECOND: u64 = 10;

fn filetime_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1601, 1, 1)?.and_hms_opt(0, 0, 0)
}

fn unix_epoch() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(1970, 1, 1)?.and_hms_opt(0, 0, 0)
}

/// Конвертирует Windows FILETIME (100-нс интервалы с 1601-01-01 UTC) в NaiveDateTime (UTC).
///
/// Остаток меньше микросекунды отбрасывается: вывод все равно с микросекундной точностью.
/// Python-утилита (`timedelta(microseconds=ticks / 10)`) вместо этого округляет, поэтому при
/// остатке >= 5 тиков последняя цифра у нас на единицу меньше: `01d7de4190a788eb` дает
/// `.185815`, а не `.185816`.
/// Диапазон chrono покрывает весь u64, максимум - 60056-05-28 05:36:10.955161.
pub fn filetime_to_datetime(ticks: u64) -> Result<NaiveDateTime, Error> {
    let micros = i64::try_from(ticks / TICKS_PER_MICROSECOND).map_err(|_| Error::DateRange(ticks))?;

    filetime_epoch()
        .and_then(|epoch| epoch.checked_add_signed(Duration::microseconds(micros)))
        .ok_or(Error::DateRange(ticks))
}

/// Микросекунды относительно Unix Epoch (отрицательные до 1970-01-01).
pub fn unix_micros(dt: &NaiveDateTime) -> Option<i64> {
    dt.signed_duration_since(unix_epoch()?).num_microseconds()
}

/// Форматирует дату как `YYYY-MM-DD HH:MM:SS.ffffff`. Год не обрезается и не получает знака.
pub fn render(dt: &NaiveDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:06}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.nanosecond() / 1_000
    )
}

pub fn format_filetime(ticks: u64) -> Result<String, Error> {
    filetime_to_datetime(ticks).map(|dt| render(&dt))
}
