use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use base64::prelude::*;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::core::{InternalizeError, InternalizeResult};

/// Reversible string compression used for regions
pub trait Codec {
    fn compress(&self, input: &str) -> InternalizeResult<String>;
    fn decompress(&self, encoded: &str) -> InternalizeResult<String>;
}

/// Selectable codecs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CodecKind {
    /// LZ-string, base64 alphabet; readable by `LZString.decompressFromBase64`
    #[default]
    LzString,
    /// Raw deflate, then standard base64
    Deflate,
}

impl CodecKind {
    pub fn codec(self) -> Box<dyn Codec + Send + Sync> {
        match self {
            CodecKind::LzString => Box::new(LzStringCodec),
            CodecKind::Deflate => Box::new(DeflateCodec::default()),
        }
    }
}

impl FromStr for CodecKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lz-string" | "lzstring" => Ok(CodecKind::LzString),
            "deflate" => Ok(CodecKind::Deflate),
            other => Err(format!(
                "Invalid codec '{}'. Use: lz-string, deflate",
                other
            )),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecKind::LzString => write!(f, "lz-string"),
            CodecKind::Deflate => write!(f, "deflate"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LzStringCodec;

impl Codec for LzStringCodec {
    fn compress(&self, input: &str) -> InternalizeResult<String> {
        Ok(lz_str::compress_to_base64(input))
    }

    fn decompress(&self, encoded: &str) -> InternalizeResult<String> {
        let units = lz_str::decompress_from_base64(encoded)
            .ok_or_else(|| InternalizeError::Codec("invalid lz-string payload".to_string()))?;
        String::from_utf16(&units).map_err(|e| InternalizeError::Codec(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeflateCodec {
    level: Compression,
}

impl DeflateCodec {
    pub fn new(level: u32) -> Self {
        Self {
            level: Compression::new(level),
        }
    }
}

impl Default for DeflateCodec {
    fn default() -> Self {
        Self {
            level: Compression::best(),
        }
    }
}

impl Codec for DeflateCodec {
    fn compress(&self, input: &str) -> InternalizeResult<String> {
        let mut encoder = DeflateEncoder::new(Vec::new(), self.level);
        encoder
            .write_all(input.as_bytes())
            .map_err(|e| InternalizeError::Codec(e.to_string()))?;
        let bytes = encoder
            .finish()
            .map_err(|e| InternalizeError::Codec(e.to_string()))?;
        Ok(BASE64_STANDARD.encode(bytes))
    }

    fn decompress(&self, encoded: &str) -> InternalizeResult<String> {
        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| InternalizeError::Codec(e.to_string()))?;
        let mut text = String::new();
        DeflateDecoder::new(bytes.as_slice())
            .read_to_string(&mut text)
            .map_err(|e| InternalizeError::Codec(e.to_string()))?;
        Ok(text)
    }
}
