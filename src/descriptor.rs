//! Image descriptor - the token record a render session draws.
//!
//! The record arrives as JSON with the fields `metadata`, `metadataId`,
//! `width`, `height`, `colors` and `data`.

use std::fmt;
use std::path::Path;

use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::core::rasterizer::{decode_pixel, PREFIX_LEN};
use crate::error::PixelError;
use crate::math::parse_color;

pub const DEFAULT_APP_NAME: &str = "HiggsPixel";

/// Metadata id, given as either a string or a number.
///
/// Numbers keep their JSON text, so negative, fractional and ids wider than
/// 64 bits display exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataId {
    Number(Number),
    Text(String),
}

impl<'de> Deserialize<'de> for MetadataId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(MetadataId::Number(n)),
            Value::String(s) => Ok(MetadataId::Text(s)),
            other => Err(D::Error::custom(format!(
                "metadataId must be a string or number, got {}",
                other
            ))),
        }
    }
}

impl Serialize for MetadataId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetadataId::Number(n) => n.serialize(serializer),
            MetadataId::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for MetadataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataId::Number(n) => write!(f, "{}", n),
            MetadataId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    pub metadata: String,
    pub metadata_id: MetadataId,
    pub width: u32,
    pub height: u32,
    /// Palette; slot `n` is encoded as `n + 1`
    pub colors: Vec<String>,
    /// Packed hex pixel buffer
    pub data: String,
}

impl ImageDescriptor {
    pub fn from_json(json: &str) -> Result<Self, PixelError> {
        let descriptor: Self = serde_json::from_str(json)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PixelError> {
        let path = path.as_ref();
        debug!("loading image descriptor from {}", path.display());
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// `None` when width x height does not fit in usize
    pub fn pixel_count(&self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }

    /// Check the buffer length, every digit pair and every palette reference
    pub fn validate(&self) -> Result<(), PixelError> {
        if self.width == 0 || self.height == 0 {
            return Err(PixelError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }

        let too_large = || PixelError::TooLarge {
            width: self.width,
            height: self.height,
        };
        let pixels = self.pixel_count().ok_or_else(too_large)?;
        let expected = pixels
            .checked_mul(2)
            .and_then(|n| n.checked_add(PREFIX_LEN))
            .ok_or_else(too_large)?;
        if self.data.len() != expected {
            return Err(PixelError::BufferLength {
                width: self.width,
                height: self.height,
                expected,
                actual: self.data.len(),
            });
        }

        for color in &self.colors {
            parse_color(color)?;
        }

        for i in 0..pixels {
            if let Some(slot) = decode_pixel(&self.data, i)? {
                if slot >= self.colors.len() {
                    return Err(PixelError::PaletteIndex {
                        pixel: i,
                        index: slot,
                        len: self.colors.len(),
                    });
                }
            }
        }

        debug!(
            "descriptor {}/{} ok: {}x{}, {} colors",
            self.metadata,
            self.metadata_id,
            self.width,
            self.height,
            self.colors.len()
        );
        Ok(())
    }

    /// Window title for this image
    pub fn title(&self, app_name: &str) -> String {
        format!("{} - {}/{}", app_name, self.metadata, self.metadata_id)
    }
}
