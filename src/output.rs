use serde::Serialize;
use std::io::Write;

use crate::error::Error;
use crate::models::FiletimeReport;

/// Пишет результат в stdout (или любой Write):
/// - plain: только дата и '\n'
/// - json: один JSON-объект на строку (JSON Lines)
pub struct ReportWriter<W: Write> {
    inner: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_plain(&mut self, report: &FiletimeReport) -> Result<(), Error> {
        writeln!(self.inner, "{}", report.datetime)?;
        Ok(())
    }

    pub fn write_json<T: Serialize>(&mut self, value: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.inner, value)?;
        self.inner.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }
}
