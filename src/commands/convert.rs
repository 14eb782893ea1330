use std::io::Write;

use log::debug;

use crate::error::Error;
use crate::filetime::decoder::{self, ByteOrdering};
use crate::filetime::formatter;
use crate::models::FiletimeReport;
use crate::output::ReportWriter;

/// Декодирует значение, форматирует дату и пишет одну строку результата в `out`.
pub fn run<W: Write>(value: &str, ordering: ByteOrdering, json: bool, out: W) -> Result<(), Error> {
    debug!("[*] Декодирование {} ({})", value, ordering);

    let bytes = decoder::hex_to_bytes(value)?;
    debug!("[*] Байты в порядке записи: {:02x?}", bytes);

    let filetime = decoder::read_filetime(&bytes, ordering);
    debug!("[*] FILETIME = {}", filetime);

    let dt = formatter::filetime_to_datetime(filetime)?;
    let report = FiletimeReport {
        value: value.to_string(),
        ordering,
        filetime,
        datetime: formatter::render(&dt),
        unix_micros: formatter::unix_micros(&dt),
    };
    debug!("[+] {}", report.datetime);

    let mut writer = ReportWriter::new(out);
    if json {
        writer.write_json(&report)?;
    } else {
        writer.write_plain(&report)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(value: &str, ordering: ByteOrdering, json: bool) -> Result<String, Error> {
        let mut buf = Vec::new();
        run(value, ordering, json, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn prints_date_line() {
        let out = run_to_string("01d7de4190a788eb", ByteOrdering::Be, false).unwrap();
        assert_eq!(out, "2021-11-20 19:05:21.185815\n");
    }

    #[test]
    fn little_endian_input() {
        let out = run_to_string("eb88a79041ded701", ByteOrdering::Le, false).unwrap();
        assert_eq!(out, "2021-11-20 19:05:21.185815\n");
    }

    #[test]
    fn json_report() {
        let out = run_to_string("eb88a79041ded701", ByteOrdering::Le, true).unwrap();
        let v: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(v["Value"], "eb88a79041ded701");
        assert_eq!(v["Ordering"], "le");
        assert_eq!(v["Filetime"], 132_819_087_211_858_155u64);
        assert_eq!(v["Datetime"], "2021-11-20 19:05:21.185815");
        assert_eq!(v["UnixMicros"], 1_637_435_121_185_815i64);
    }

    #[test]
    fn invalid_input_writes_nothing() {
        let mut buf = Vec::new();
        let err = run("01d7de4190a788zz", ByteOrdering::Be, false, &mut buf).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(buf.is_empty());
    }
}
