use clap::Parser;

use crate::error::HEX_LENGTH_MESSAGE;
use crate::filetime::decoder::{ByteOrdering, HEX_LEN};

const EXAMPLES: &str = r#"
ПРИМЕРЫ ИСПОЛЬЗОВАНИЯ:

  1. BIG-ENDIAN
     Перевести FILETIME "01d7de4190a788eb", записанный как 8 байт big-endian:
     filetime_forge -o be -v 01d7de4190a788eb

  2. LITTLE-ENDIAN
     То же значение, записанное как 8 байт little-endian:
     filetime_forge -o le -v eb88a79041ded701

  3. ПО УМОЛЧАНИЮ (big-endian)
     filetime_forge -v 01d7de4190a788eb

  4. JSON
     Полный отчет одной JSON-строкой:
     filetime_forge -v 01d7de4190a788eb -j

  Подробный лог декодирования в stderr: RUST_LOG=debug
"#;

/// Проверка длины до запуска декодера: ровно 16 символов.
fn parse_hex_value(s: &str) -> Result<String, String> {
    let len = s.chars().count();
    if len != HEX_LEN {
        return Err(format!("{}, got {} characters", HEX_LENGTH_MESSAGE, len));
    }
    Ok(s.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "filetime_forge")]
#[command(version)]
#[command(about = "Convert a Windows FILETIME (8-byte little/big-endian hex value) to a human-readable UTC date")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// 8-байтное hex-значение FILETIME (16 символов)
    #[arg(short, long, value_parser = parse_hex_value)]
    pub value: String,

    /// Порядок байт: 'le' (little-endian) или 'be' (big-endian)
    #[arg(short, long, value_enum, default_value_t = ByteOrdering::Be)]
    pub ordering: ByteOrdering,

    /// Вывести полный отчет в формате JSON (одна строка)
    #[arg(short, long)]
    pub json: bool,
}
