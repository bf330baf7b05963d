/// RenderpassCache - render pass / framebuffer caching and pass transitions
///
/// The emulated GPU can retarget and re-clear on any draw, while Vulkan wants
/// immutable render pass and framebuffer objects up front. This cache creates
/// each native object at most once (render passes keyed by the color/depth
/// format pair plus the clear flag, framebuffers keyed by the exact
/// attachment set) and tracks the active pass so redundant begin/end
/// transitions are skipped.
///
/// The guest never implicitly discards framebuffer contents, so attachments
/// always load (or clear, when explicitly requested) and always store.

use ash::vk;
use nova_video::nova::{PixelFormat, SurfaceType};
use nova_video::video_debug;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

use crate::vulkan_framebuffer::Framebuffer;
use crate::vulkan_instance::Instance;
use crate::vulkan_scheduler::{RenderCommand, Scheduler};

/// Number of guest formats renderable as color targets
pub const MAX_COLOR_FORMATS: usize = 5;
/// Number of ordinals in the guest depth format range
pub const MAX_DEPTH_FORMATS: usize = 4;

/// First ordinal of the depth format range in the guest encoding
const DEPTH_FORMAT_BASE: u32 = PixelFormat::D16 as u32;

/// Maps a color format to its render pass table index.
///
/// `Invalid` takes the sentinel slot past the renderable formats. Anything
/// else outside the renderable range is a format-mapping defect, not a
/// runtime condition.
pub(crate) fn color_format_index(format: PixelFormat) -> usize {
    let index = if format == PixelFormat::Invalid {
        MAX_COLOR_FORMATS
    } else {
        format as usize
    };
    assert!(
        index <= MAX_COLOR_FORMATS,
        "Invalid color format {} (index {})",
        format,
        index
    );
    index
}

/// Maps a depth format to its render pass table index.
///
/// Depth ordinals are offset by the base of the depth range; `Invalid` takes
/// the sentinel slot. Out-of-range indices are a format-mapping defect.
pub(crate) fn depth_format_index(format: PixelFormat) -> usize {
    let index = if format == PixelFormat::Invalid {
        MAX_DEPTH_FORMATS
    } else {
        (format as u32).wrapping_sub(DEPTH_FORMAT_BASE) as usize
    };
    assert!(
        index <= MAX_DEPTH_FORMATS,
        "Invalid depth format {} (index {})",
        format,
        index
    );
    index
}

/// Clear value for a pass that clears on load
///
/// Color and depth/stencil components coexist so the active-pass comparison
/// can inspect only the depth/stencil part (see `begin_rendering`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClearValue {
    /// RGBA color clear
    pub color: [f32; 4],
    /// Depth clear
    pub depth: f32,
    /// Stencil clear
    pub stencil: u32,
}

/// Exact identity of an attachment set
///
/// Equality and hashing are structural, field by field; every bit of the
/// representation is meaning-bearing. View handles are compared, never owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct FramebufferInfo {
    color: vk::ImageView,
    depth: vk::ImageView,
    width: u32,
    height: u32,
}

/// Current pass configuration of the state machine
#[derive(Clone, Copy)]
struct RenderState {
    views: [vk::ImageView; 2],
    render_area: vk::Rect2D,
    clear: ClearValue,
    do_clear: bool,
    rendering: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            views: [vk::ImageView::null(); 2],
            render_area: vk::Rect2D::default(),
            clear: ClearValue::default(),
            do_clear: false,
            rendering: false,
        }
    }
}

/// Lazily populated render pass table: color index x depth index x clear flag
type RenderpassTable =
    [[[Option<vk::RenderPass>; 2]; MAX_DEPTH_FORMATS + 1]; MAX_COLOR_FORMATS + 1];

/// Render pass and framebuffer cache
///
/// `renderpass()` is internally locked and may be called from any thread
/// (pipeline precompilation needs handles without a target switch). The
/// begin/end state machine and the framebuffer cache belong to the single
/// command-recording sequence; `&mut self` enforces that at compile time.
pub struct RenderpassCache<I: Instance, S: Scheduler> {
    instance: Arc<I>,
    scheduler: Arc<S>,
    cached_renderpasses: Mutex<RenderpassTable>,
    framebuffers: FxHashMap<FramebufferInfo, vk::Framebuffer>,
    state: RenderState,
}

impl<I: Instance, S: Scheduler> RenderpassCache<I, S> {
    /// Create an empty cache in the inactive state
    pub fn new(instance: Arc<I>, scheduler: Arc<S>) -> Self {
        Self {
            instance,
            scheduler,
            cached_renderpasses: Mutex::new(Default::default()),
            framebuffers: FxHashMap::default(),
            state: RenderState::default(),
        }
    }

    /// Destroys all cached framebuffers
    ///
    /// Called when existing image views may no longer be valid (resize,
    /// swapchain recreation). Render passes are format-keyed and survive.
    pub fn clear_framebuffers(&mut self) {
        video_debug!(
            "nova::vulkan::RenderpassCache",
            "Clearing {} cached framebuffers",
            self.framebuffers.len()
        );
        for (_, framebuffer) in self.framebuffers.drain() {
            self.instance.destroy_framebuffer(framebuffer);
        }
    }

    /// Begins a new render pass unless the requested one is already active
    ///
    /// A begin with the same views, clear flag, and depth/stencil clear as
    /// the active pass is a no-op. Note that the comparison deliberately
    /// ignores the color clear component; a begin that changes only the
    /// color clear while a matching pass is active drops the new color.
    pub fn begin_rendering(&mut self, framebuffer: &Framebuffer, do_clear: bool, clear: ClearValue) {
        let views = framebuffer.image_views();
        if self.state.rendering
            && self.state.views == views
            && self.state.do_clear == do_clear
            && self.state.clear.depth == clear.depth
            && self.state.clear.stencil == clear.stencil
        {
            return;
        }

        self.end_rendering();

        let render_area = framebuffer.render_area();
        self.state = RenderState {
            views,
            render_area,
            clear,
            do_clear,
            rendering: true,
        };

        let info = FramebufferInfo {
            color: views[0],
            depth: views[1],
            width: framebuffer.width(),
            height: framebuffer.height(),
        };

        let color = framebuffer.format(SurfaceType::Color);
        let depth = framebuffer.format(SurfaceType::Depth);
        let render_pass = self.renderpass(color, depth, do_clear);

        let native = match self.framebuffers.get(&info) {
            Some(&framebuffer) => framebuffer,
            None => {
                let framebuffer = self.create_framebuffer(&info, render_pass);
                self.framebuffers.insert(info, framebuffer);
                framebuffer
            }
        };

        // Only the first attachment is cleared; it is the color view when one
        // exists, otherwise the depth view.
        let clear_value = if views[0] != vk::ImageView::null() {
            vk::ClearValue {
                color: vk::ClearColorValue {
                    float32: clear.color,
                },
            }
        } else {
            vk::ClearValue {
                depth_stencil: vk::ClearDepthStencilValue {
                    depth: clear.depth,
                    stencil: clear.stencil,
                },
            }
        };

        self.scheduler.record(RenderCommand::BeginRenderPass {
            render_pass,
            framebuffer: native,
            render_area,
            clear_value,
            clear_value_count: do_clear as u32,
        });
    }

    /// Exits from any currently active render pass instance
    pub fn end_rendering(&mut self) {
        if !self.state.rendering {
            return;
        }

        self.state.rendering = false;
        self.scheduler.record(RenderCommand::EndRenderPass);
    }

    /// Returns the render pass for the color/depth format pair, creating it
    /// on first use
    ///
    /// Idempotent: identical arguments always yield the identical handle.
    /// Safe to call concurrently with the recording sequence.
    pub fn renderpass(
        &self,
        color: PixelFormat,
        depth: PixelFormat,
        is_clear: bool,
    ) -> vk::RenderPass {
        let mut table = self
            .cached_renderpasses
            .lock()
            .expect("renderpass table mutex poisoned");

        let color_index = color_format_index(color);
        let depth_index = depth_format_index(depth);

        let entry = &mut table[color_index][depth_index][is_clear as usize];
        if let Some(render_pass) = *entry {
            return render_pass;
        }

        let color_format = self.instance.traits(color).native;
        let depth_format = self.instance.traits(depth).native;
        let load_op = if is_clear {
            vk::AttachmentLoadOp::CLEAR
        } else {
            vk::AttachmentLoadOp::LOAD
        };

        let render_pass = self.create_render_pass(color_format, depth_format, load_op);
        video_debug!(
            "nova::vulkan::RenderpassCache",
            "Created render pass (color: {}, depth: {}, clear: {})",
            color,
            depth,
            is_clear
        );

        *entry = Some(render_pass);
        render_pass
    }

    /// Builds a render pass with up to one color and one depth attachment
    ///
    /// Contents always survive the pass (store op is never DONT_CARE): the
    /// guest may read back or keep drawing into either attachment later. The
    /// depth attachment applies the same load/store policy to its stencil
    /// aspect. A single GENERAL layout avoids intra-pass transitions, and
    /// synchronization is left to the scheduler's barrier layer, so the one
    /// subpass carries no dependencies.
    fn create_render_pass(
        &self,
        color: vk::Format,
        depth: vk::Format,
        load_op: vk::AttachmentLoadOp,
    ) -> vk::RenderPass {
        let mut attachments = Vec::with_capacity(2);

        let mut color_ref = vk::AttachmentReference::default();
        let mut use_color = false;
        let mut depth_ref = vk::AttachmentReference::default();
        let mut use_depth = false;

        if color != vk::Format::UNDEFINED {
            attachments.push(
                vk::AttachmentDescription::default()
                    .format(color)
                    .samples(vk::SampleCountFlags::TYPE_1)
                    .load_op(load_op)
                    .store_op(vk::AttachmentStoreOp::STORE)
                    .stencil_load_op(vk::AttachmentLoadOp::DONT_CARE)
                    .stencil_store_op(vk::AttachmentStoreOp::DONT_CARE)
                    .initial_layout(vk::ImageLayout::GENERAL)
                    .final_layout(vk::ImageLayout::GENERAL),
            );

            color_ref = vk::AttachmentReference {
                attachment: attachments.len() as u32 - 1,
                layout: vk::ImageLayout::GENERAL,
            };
            use_color = true;
        }

        if depth != vk::Format::UNDEFINED {
            attachments.push(
                vk::AttachmentDescription::default()
                    .format(depth)
                    .samples(vk::SampleCountFlags::TYPE_1)
                    .load_op(load_op)
                    .store_op(vk::AttachmentStoreOp::STORE)
                    .stencil_load_op(load_op)
                    .stencil_store_op(vk::AttachmentStoreOp::STORE)
                    .initial_layout(vk::ImageLayout::GENERAL)
                    .final_layout(vk::ImageLayout::GENERAL),
            );

            depth_ref = vk::AttachmentReference {
                attachment: attachments.len() as u32 - 1,
                layout: vk::ImageLayout::GENERAL,
            };
            use_depth = true;
        }

        let mut subpass = vk::SubpassDescription::default()
            .pipeline_bind_point(vk::PipelineBindPoint::GRAPHICS);
        if use_color {
            subpass = subpass.color_attachments(std::slice::from_ref(&color_ref));
        }
        if use_depth {
            subpass = subpass.depth_stencil_attachment(&depth_ref);
        }

        let info = vk::RenderPassCreateInfo::default()
            .attachments(&attachments)
            .subpasses(std::slice::from_ref(&subpass));

        self.instance.create_render_pass(&info)
    }

    /// Builds a framebuffer binding the identity's views, color first
    fn create_framebuffer(
        &self,
        info: &FramebufferInfo,
        render_pass: vk::RenderPass,
    ) -> vk::Framebuffer {
        let mut attachments = Vec::with_capacity(2);

        if info.color != vk::ImageView::null() {
            attachments.push(info.color);
        }
        if info.depth != vk::ImageView::null() {
            attachments.push(info.depth);
        }

        let create_info = vk::FramebufferCreateInfo::default()
            .render_pass(render_pass)
            .attachments(&attachments)
            .width(info.width)
            .height(info.height)
            .layers(1);

        self.instance.create_framebuffer(&create_info)
    }
}

impl<I: Instance, S: Scheduler> Drop for RenderpassCache<I, S> {
    fn drop(&mut self) {
        for (_, framebuffer) in self.framebuffers.drain() {
            self.instance.destroy_framebuffer(framebuffer);
        }

        let mut table = match self.cached_renderpasses.lock() {
            Ok(table) => table,
            Err(poisoned) => poisoned.into_inner(),
        };
        for by_depth in table.iter_mut() {
            for by_clear in by_depth.iter_mut() {
                for slot in by_clear.iter_mut() {
                    if let Some(render_pass) = slot.take() {
                        self.instance.destroy_render_pass(render_pass);
                    }
                }
            }
        }
    }
}
