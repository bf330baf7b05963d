/*!
# Nova Video Core

Backend-agnostic types for the Nova console GPU emulator.

This crate provides the guest-side data model shared by every renderer
backend: the emulated hardware's pixel format enumeration (with its exact
ordinal layout), surface classification, and the logging subsystem used
throughout the emulator. Backend implementations (Vulkan, etc.) live in
separate crates and build on these types.
*/

// Internal modules
mod pixel_format;
pub mod log;

// Main nova namespace module
pub mod nova {
    // Guest pixel formats
    pub use crate::pixel_format::{PixelFormat, SurfaceType};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: video_* macros are NOT re-exported here - they are exported at the crate root
    }
}

// Flat re-exports for convenience
pub use pixel_format::{PixelFormat, SurfaceType};

#[cfg(test)]
mod pixel_format_tests;

#[cfg(test)]
mod log_tests;
