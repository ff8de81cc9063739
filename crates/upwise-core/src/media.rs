use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, RGBA_CHANNEL_COUNT};
use crate::error::{Result, UpwiseError};

/// A user-selected input image: raw container bytes plus a display name.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a file from disk, taking its file name as the display name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// An in-memory pixel surface.
/// Pixel data is row-major RGBA, 8 bits per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA bytes, length = width * height * 4.
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let image = Self {
            width,
            height,
            pixels,
        };
        image.validate()?;
        Ok(image)
    }

    /// Check the dimension and buffer-length invariants.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(UpwiseError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = self.width as usize * self.height as usize * RGBA_CHANNEL_COUNT;
        if self.pixels.len() != expected {
            return Err(UpwiseError::Decode(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
                self.pixels.len(),
                expected,
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Integer magnification factor, always within [1, 16].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScaleFactor(u8);

impl ScaleFactor {
    pub fn new(value: u8) -> Result<Self> {
        if (MIN_SCALE..=MAX_SCALE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(UpwiseError::InvalidScale(value))
        }
    }

    /// Saturate an arbitrary value into the supported range.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(MIN_SCALE, MAX_SCALE))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(DEFAULT_SCALE)
    }
}

impl TryFrom<u8> for ScaleFactor {
    type Error = UpwiseError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ScaleFactor> for u8 {
    fn from(scale: ScaleFactor) -> u8 {
        scale.0
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Named processing preset attached to a run.
///
/// Profiles are labels only; none of them changes the transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    #[default]
    #[serde(rename = "General Photo")]
    GeneralPhoto,
    #[serde(rename = "Real-ESRGAN")]
    RealEsrgan,
    #[serde(rename = "Light Photo")]
    LightPhoto,
    #[serde(rename = "Ultra HD")]
    UltraHd,
}

impl Profile {
    pub const ALL: [Profile; 4] = [
        Profile::GeneralPhoto,
        Profile::RealEsrgan,
        Profile::LightPhoto,
        Profile::UltraHd,
    ];
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneralPhoto => write!(f, "General Photo"),
            Self::RealEsrgan => write!(f, "Real-ESRGAN"),
            Self::LightPhoto => write!(f, "Light Photo"),
            Self::UltraHd => write!(f, "Ultra HD"),
        }
    }
}
