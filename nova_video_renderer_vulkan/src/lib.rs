/*!
# Nova - Vulkan Renderer Backend

Vulkan implementation of the Nova console GPU on top of the Ash bindings.

The emulated hardware has no notion of render passes or framebuffers: render
targets and clear/load behavior can change on every draw. Vulkan makes both
first-class, reusable objects. This crate bridges that mismatch with a
render-pass/framebuffer cache that lazily creates the native objects, reuses
them across target switches, and skips redundant pass begin/end transitions
while preserving the hardware's "framebuffer contents always persist"
semantics.

Device and queue ownership stays with the embedding emulator; this crate only
consumes an `ash::Device` through the [`Instance`] seam and records pass
transitions through the [`Scheduler`] seam.
*/

// Vulkan implementation modules
mod vulkan_instance;
mod vulkan_scheduler;
mod vulkan_framebuffer;
mod vulkan_renderpass_cache;

pub use vulkan_instance::{DeviceInstance, FormatTraits, Instance};
pub use vulkan_scheduler::{RenderCommand, Scheduler};
pub use vulkan_framebuffer::{Attachment, Framebuffer};
pub use vulkan_renderpass_cache::{
    ClearValue, RenderpassCache, MAX_COLOR_FORMATS, MAX_DEPTH_FORMATS,
};
