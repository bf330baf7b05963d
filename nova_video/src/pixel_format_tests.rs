//! Unit tests for pixel_format.rs
//!
//! The renderer backends derive cache indices directly from the enum
//! discriminants, so the hardware ordinal layout is asserted explicitly here.

use crate::pixel_format::{PixelFormat, SurfaceType};

// ============================================================================
// ORDINAL LAYOUT TESTS
// ============================================================================

#[test]
fn test_color_format_ordinals() {
    assert_eq!(PixelFormat::Rgba8 as u32, 0);
    assert_eq!(PixelFormat::Rgb8 as u32, 1);
    assert_eq!(PixelFormat::Rgb5A1 as u32, 2);
    assert_eq!(PixelFormat::Rgb565 as u32, 3);
    assert_eq!(PixelFormat::Rgba4 as u32, 4);
}

#[test]
fn test_depth_format_ordinals() {
    // Depth formats start at ordinal 14; 15 is a hardware encoding gap
    assert_eq!(PixelFormat::D16 as u32, 14);
    assert_eq!(PixelFormat::D24 as u32, 16);
    assert_eq!(PixelFormat::D24S8 as u32, 17);
}

#[test]
fn test_invalid_sentinel_ordinal() {
    assert_eq!(PixelFormat::Invalid as u32, 255);
}

// ============================================================================
// SURFACE TYPE TESTS
// ============================================================================

#[test]
fn test_surface_type_color() {
    assert_eq!(PixelFormat::Rgba8.surface_type(), SurfaceType::Color);
    assert_eq!(PixelFormat::Rgba4.surface_type(), SurfaceType::Color);
}

#[test]
fn test_surface_type_texture() {
    assert_eq!(PixelFormat::Ia8.surface_type(), SurfaceType::Texture);
    assert_eq!(PixelFormat::Etc1A4.surface_type(), SurfaceType::Texture);
}

#[test]
fn test_surface_type_depth() {
    assert_eq!(PixelFormat::D16.surface_type(), SurfaceType::Depth);
    assert_eq!(PixelFormat::D24.surface_type(), SurfaceType::Depth);
    assert_eq!(PixelFormat::D24S8.surface_type(), SurfaceType::DepthStencil);
}

#[test]
fn test_surface_type_invalid() {
    assert_eq!(PixelFormat::Invalid.surface_type(), SurfaceType::Invalid);
}

#[test]
fn test_format_classification_helpers() {
    assert!(PixelFormat::Rgb565.is_color());
    assert!(!PixelFormat::Rgb565.is_depth_stencil());

    assert!(PixelFormat::D24S8.is_depth_stencil());
    assert!(!PixelFormat::D24S8.is_color());

    assert!(!PixelFormat::I4.is_color());
    assert!(!PixelFormat::I4.is_depth_stencil());
}

#[test]
fn test_pixel_format_display() {
    assert_eq!(format!("{}", PixelFormat::Rgba8), "Rgba8");
    assert_eq!(format!("{}", PixelFormat::D24S8), "D24S8");
}
