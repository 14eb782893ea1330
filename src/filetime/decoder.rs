use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use clap::ValueEnum;
use serde::Serialize;

use crate::error::Error;

/// Длина FILETIME в hex-символах (8 байт).
pub const HEX_LEN: usize = 16;

/// Порядок байт, в котором записано 8-байтное значение.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ByteOrdering {
    /// little-endian: первый записанный байт - младший
    Le,
    /// big-endian: первый записанный байт - старший
    Be,
}

impl ByteOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            ByteOrdering::Le => "le",
            ByteOrdering::Be => "be",
        }
    }
}

impl fmt::Display for ByteOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ByteOrdering {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "le" => Ok(ByteOrdering::Le),
            "be" => Ok(ByteOrdering::Be),
            _ => Err(Error::UnsupportedOrdering(s.to_string())),
        }
    }
}

/// Разбирает 16 hex-символов в 8 байт в порядке записи (слева направо).
pub fn hex_to_bytes(hex_value: &str) -> Result<[u8; 8], Error> {
    let chars = hex_value.chars().count();
    if chars != HEX_LEN {
        return Err(Error::InvalidInput(format!("got {} characters", chars)));
    }

    let digits = hex_value
        .chars()
        .enumerate()
        .map(|(pos, c)| {
            c.to_digit(16).map(|d| d as u8).ok_or_else(|| {
                Error::InvalidInput(format!("non-hex character {:?} at position {}", c, pos))
            })
        })
        .collect::<Result<Vec<u8>, Error>>()?;

    let mut bytes = [0u8; 8];
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        bytes[i] = (pair[0] << 4) | pair[1];
    }
    Ok(bytes)
}

/// Читает 8 байт (в порядке записи) как u64 с заданным порядком байт.
pub fn read_filetime(bytes: &[u8; 8], ordering: ByteOrdering) -> u64 {
    match ordering {
        ByteOrdering::Le => LittleEndian::read_u64(bytes),
        ByteOrdering::Be => BigEndian::read_u64(bytes),
    }
}

/// Декодирует hex-строку в FILETIME (количество 100-нс интервалов с 1601-01-01).
pub fn decode(hex_value: &str, ordering: ByteOrdering) -> Result<u64, Error> {
    hex_to_bytes(hex_value).map(|bytes| read_filetime(&bytes, ordering))
}
