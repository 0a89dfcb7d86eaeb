use std::path::Path;

/// Per-pixel red-channel access over an opaque raster.
///
/// The classifier needs nothing else from the image, so this is the whole
/// seam: production code decodes a file into a [`BrightnessMap`], tests plug
/// in counting or constant sources.
pub trait BrightnessSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Red channel in `[0, 255]` at `(x, y)`. Callers stay in bounds.
    fn red_at(&self, x: u32, y: u32) -> u8;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrightnessError {
    Decode(String),
    EmptyRaster,
    LengthMismatch { expected: usize, actual: usize },
    Io(String),
}

impl std::fmt::Display for BrightnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrightnessError::Decode(msg) => write!(f, "brightness map decode failed: {msg}"),
            BrightnessError::EmptyRaster => write!(f, "brightness map has zero pixels"),
            BrightnessError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "brightness data length mismatch: expected={expected} actual={actual}"
                )
            }
            BrightnessError::Io(msg) => write!(f, "brightness map read failed: {msg}"),
        }
    }
}

impl std::error::Error for BrightnessError {}

/// Owned red-channel raster decoded from an equirectangular image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessMap {
    width: u32,
    height: u32,
    red: Vec<u8>,
}

impl BrightnessMap {
    /// Builds a map from raw red-channel rows (row 0 first).
    pub fn from_raw(width: u32, height: u32, red: Vec<u8>) -> Result<Self, BrightnessError> {
        if width == 0 || height == 0 {
            return Err(BrightnessError::EmptyRaster);
        }
        let expected = width as usize * height as usize;
        if red.len() != expected {
            return Err(BrightnessError::LengthMismatch {
                expected,
                actual: red.len(),
            });
        }
        Ok(Self { width, height, red })
    }

    /// Decodes an encoded image (PNG/JPEG), keeping only the red channel.
    pub fn decode(bytes: &[u8]) -> Result<Self, BrightnessError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| BrightnessError::Decode(e.to_string()))?
            .into_rgb8();
        let (width, height) = img.dimensions();
        let red = img.pixels().map(|p| p.0[0]).collect();
        Self::from_raw(width, height, red)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BrightnessError> {
        let bytes = std::fs::read(path).map_err(|e| BrightnessError::Io(e.to_string()))?;
        Self::decode(&bytes)
    }
}

impl BrightnessSource for BrightnessMap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn red_at(&self, x: u32, y: u32) -> u8 {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.red[y * self.width as usize + x]
    }
}
