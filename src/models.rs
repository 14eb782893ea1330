use serde::Serialize;

use crate::filetime::decoder::ByteOrdering;

/// Результат одной конвертации (одна строка JSONL).
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FiletimeReport {
    pub value: String,
    pub ordering: ByteOrdering,
    pub filetime: u64,
    pub datetime: String,
    pub unix_micros: Option<i64>,
}
