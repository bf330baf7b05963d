/// Instance trait - format traits provider and native object factory
///
/// The renderpass cache never talks to the driver directly. Everything it
/// needs from the device layer goes through this seam: mapping guest pixel
/// formats to native formats, and creating/destroying render pass and
/// framebuffer objects. Tests substitute a mock; production code uses
/// [`DeviceInstance`] over the emulator's `ash::Device`.

use ash::vk;
use nova_video::nova::PixelFormat;
use std::sync::Arc;

/// Native traits of a guest pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTraits {
    /// Native Vulkan format backing the guest format.
    /// `PixelFormat::Invalid` maps to `vk::Format::UNDEFINED`.
    pub native: vk::Format,
}

/// Format traits provider and device factory seam
///
/// Object creation is assumed to succeed under valid input; a creation
/// failure is an unrecoverable environment fault and implementations abort
/// rather than report it.
pub trait Instance: Send + Sync {
    /// Native traits of a guest pixel format
    fn traits(&self, format: PixelFormat) -> FormatTraits;

    /// Create a native render pass object
    fn create_render_pass(&self, info: &vk::RenderPassCreateInfo<'_>) -> vk::RenderPass;

    /// Create a native framebuffer object
    fn create_framebuffer(&self, info: &vk::FramebufferCreateInfo<'_>) -> vk::Framebuffer;

    /// Destroy a render pass created by this instance
    fn destroy_render_pass(&self, render_pass: vk::RenderPass);

    /// Destroy a framebuffer created by this instance
    fn destroy_framebuffer(&self, framebuffer: vk::Framebuffer);
}

/// Production Instance implementation over the emulator's logical device
///
/// The device (and its queues, allocator, etc.) is created and owned by the
/// embedding emulator; this wrapper only borrows it for object creation.
pub struct DeviceInstance {
    /// Vulkan logical device (owned by the embedder)
    device: Arc<ash::Device>,
}

impl DeviceInstance {
    pub fn new(device: Arc<ash::Device>) -> Self {
        Self { device }
    }

    /// Default guest format to Vulkan format mapping
    ///
    /// Formats without a native equivalent (Rgb8) fall back to a wider
    /// format; the texture runtime performs the matching conversion on
    /// upload/download.
    fn native_format(format: PixelFormat) -> vk::Format {
        match format {
            PixelFormat::Rgba8 => vk::Format::R8G8B8A8_UNORM,
            PixelFormat::Rgb8 => vk::Format::R8G8B8A8_UNORM,
            PixelFormat::Rgb5A1 => vk::Format::R5G5B5A1_UNORM_PACK16,
            PixelFormat::Rgb565 => vk::Format::R5G6B5_UNORM_PACK16,
            PixelFormat::Rgba4 => vk::Format::R4G4B4A4_UNORM_PACK16,
            PixelFormat::D16 => vk::Format::D16_UNORM,
            PixelFormat::D24 => vk::Format::X8_D24_UNORM_PACK32,
            PixelFormat::D24S8 => vk::Format::D24_UNORM_S8_UINT,
            _ => vk::Format::UNDEFINED,
        }
    }
}

impl Instance for DeviceInstance {
    fn traits(&self, format: PixelFormat) -> FormatTraits {
        FormatTraits {
            native: Self::native_format(format),
        }
    }

    fn create_render_pass(&self, info: &vk::RenderPassCreateInfo<'_>) -> vk::RenderPass {
        unsafe {
            self.device
                .create_render_pass(info, None)
                .expect("Failed to create render pass")
        }
    }

    fn create_framebuffer(&self, info: &vk::FramebufferCreateInfo<'_>) -> vk::Framebuffer {
        unsafe {
            self.device
                .create_framebuffer(info, None)
                .expect("Failed to create framebuffer")
        }
    }

    fn destroy_render_pass(&self, render_pass: vk::RenderPass) {
        unsafe {
            self.device.destroy_render_pass(render_pass, None);
        }
    }

    fn destroy_framebuffer(&self, framebuffer: vk::Framebuffer) {
        unsafe {
            self.device.destroy_framebuffer(framebuffer, None);
        }
    }
}
