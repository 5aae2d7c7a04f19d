use core::fmt;

use thiserror::Error;

/// Contains the resolution of a display
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a resolution from signed dimensions, rejecting non-positive values
    pub fn from_dimensions(width: i32, height: i32) -> Result<Self, InvalidDimensions> {
        if width <= 0 || height <= 0 {
            return Err(InvalidDimensions);
        }
        Ok(Self::new(width as u32, height as u32))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Error for resolutions with a zero or negative dimension
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Width and height must be positive integers.")]
pub struct InvalidDimensions;

/// Color depth of a display mode, in bits per pixel
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ColorDepth(pub u32);

impl fmt::Display for ColorDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}

#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RefreshRate(pub u32);

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.0)
    }
}

/// One display configuration as reported by the OS.
///
/// This is the portable view; the fixed-layout `DEVMODE` record (device name
/// buffers, struct size, field mask) never leaves the Windows adapter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct DisplayMode {
    pub resolution: Resolution,
    pub color_depth: ColorDepth,
    pub refresh_rate: RefreshRate,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Resolution: {}, Color Depth: {}, Refresh Rate: {}",
            self.resolution, self.color_depth, self.refresh_rate
        )
    }
}

/// Raw result code of the OS apply call.
///
/// Non-success codes are printed as-is; the OS does not distinguish an
/// unsupported mode from a subsystem error in a way this tool decodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ChangeCode(pub i32);

impl ChangeCode {
    /// The `DISP_CHANGE_SUCCESSFUL` sentinel
    pub const SUCCESSFUL: Self = Self(0);

    pub fn is_success(self) -> bool {
        self == Self::SUCCESSFUL
    }
}

impl fmt::Display for ChangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for the resolution change flow
///
/// Every variant is terminal: it is printed once and the run ends. Nothing is
/// retried or rolled back.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChangeError {
    #[error("Unable to get display settings.")]
    QueryFailed,
    #[error("Failed to change resolution. Error code: {0}")]
    ApplyFailed(ChangeCode),
    #[error("No available screen resolutions found.")]
    NoModesAvailable,
}
