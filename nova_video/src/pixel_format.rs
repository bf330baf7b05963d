/// PixelFormat - guest pixel formats of the emulated GPU
///
/// The discriminant values mirror the hardware's format encoding and must not
/// be reordered: renderer backends derive cache indices from these ordinals.

use std::fmt;

/// Guest pixel format.
///
/// Ordinals 0-4 are the color formats the hardware can render to, 5-13 are
/// texture-only formats, and 14-17 are the depth/stencil formats. Ordinal 15
/// is a gap in the hardware encoding and stays unoccupied. `Invalid` is the
/// "no attachment" sentinel.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 32-bit RGBA
    Rgba8 = 0,
    /// 24-bit RGB
    Rgb8 = 1,
    /// 16-bit RGB with 1-bit alpha
    Rgb5A1 = 2,
    /// 16-bit RGB
    Rgb565 = 3,
    /// 16-bit RGBA
    Rgba4 = 4,
    /// 16-bit intensity + alpha (texture only)
    Ia8 = 5,
    /// 16-bit red + green (texture only)
    Rg8 = 6,
    /// 8-bit intensity (texture only)
    I8 = 7,
    /// 8-bit alpha (texture only)
    A8 = 8,
    /// 8-bit intensity + alpha (texture only)
    Ia4 = 9,
    /// 4-bit intensity (texture only)
    I4 = 10,
    /// 4-bit alpha (texture only)
    A4 = 11,
    /// Compressed (texture only)
    Etc1 = 12,
    /// Compressed with alpha (texture only)
    Etc1A4 = 13,
    /// 16-bit depth
    D16 = 14,
    /// 24-bit depth
    D24 = 16,
    /// 24-bit depth + 8-bit stencil
    D24S8 = 17,
    /// No attachment sentinel
    Invalid = 255,
}

/// Classification of a pixel format by the kind of surface it can back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    /// Renderable color surface
    Color,
    /// Texture-only surface (cannot be a render target)
    Texture,
    /// Depth-only surface
    Depth,
    /// Combined depth/stencil surface
    DepthStencil,
    /// No surface
    Invalid,
}

impl PixelFormat {
    /// Classify this format by surface type
    pub fn surface_type(self) -> SurfaceType {
        match self as u32 {
            0..=4 => SurfaceType::Color,
            5..=13 => SurfaceType::Texture,
            14..=16 => SurfaceType::Depth,
            17 => SurfaceType::DepthStencil,
            _ => SurfaceType::Invalid,
        }
    }

    /// True if this format can back a color render target
    pub fn is_color(self) -> bool {
        self.surface_type() == SurfaceType::Color
    }

    /// True if this format carries a depth component
    pub fn is_depth_stencil(self) -> bool {
        matches!(
            self.surface_type(),
            SurfaceType::Depth | SurfaceType::DepthStencil
        )
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
