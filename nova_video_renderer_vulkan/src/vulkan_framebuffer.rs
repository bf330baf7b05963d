/// Framebuffer - attachment-set descriptor for the renderpass cache
///
/// Describes the render target set the rasterizer wants to draw into: up to
/// one color view and one depth/stencil view, their guest formats, the pixel
/// dimensions, and the render area. The views are borrowed from the texture
/// runtime and never owned here.

use ash::vk;
use nova_video::nova::{PixelFormat, SurfaceType};

/// One attachment of a framebuffer: a borrowed view plus its guest format
#[derive(Debug, Clone, Copy)]
pub struct Attachment {
    /// Image view handle (not owned)
    pub view: vk::ImageView,
    /// Guest pixel format of the backing surface
    pub format: PixelFormat,
}

/// Render target set descriptor
///
/// A null view handle means "no attachment" for that slot; the matching
/// format slot then holds `PixelFormat::Invalid`.
#[derive(Debug, Clone, Copy)]
pub struct Framebuffer {
    /// Color view then depth view; null handle = absent
    views: [vk::ImageView; 2],
    /// Color format then depth format; Invalid = absent
    formats: [PixelFormat; 2],
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Render area rectangle
    render_area: vk::Rect2D,
}

impl Framebuffer {
    /// Create a framebuffer descriptor
    ///
    /// # Arguments
    ///
    /// * `color` - Color attachment, if any
    /// * `depth` - Depth/stencil attachment, if any
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `render_area` - Render area rectangle
    pub fn new(
        color: Option<Attachment>,
        depth: Option<Attachment>,
        width: u32,
        height: u32,
        render_area: vk::Rect2D,
    ) -> Self {
        if let Some(color) = &color {
            debug_assert!(color.format.is_color(), "{} is not renderable", color.format);
        }
        if let Some(depth) = &depth {
            debug_assert!(
                depth.format.is_depth_stencil(),
                "{} is not a depth format",
                depth.format
            );
        }

        let view = |attachment: &Option<Attachment>| {
            attachment.map_or(vk::ImageView::null(), |a| a.view)
        };
        let format = |attachment: &Option<Attachment>| {
            attachment.map_or(PixelFormat::Invalid, |a| a.format)
        };

        Self {
            views: [view(&color), view(&depth)],
            formats: [format(&color), format(&depth)],
            width,
            height,
            render_area,
        }
    }

    /// Attachment views, color first; null handle = absent
    pub fn image_views(&self) -> [vk::ImageView; 2] {
        self.views
    }

    /// Guest format of the color or depth aspect
    pub fn format(&self, surface_type: SurfaceType) -> PixelFormat {
        match surface_type {
            SurfaceType::Color => self.formats[0],
            SurfaceType::Depth | SurfaceType::DepthStencil => self.formats[1],
            _ => PixelFormat::Invalid,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render area rectangle
    pub fn render_area(&self) -> vk::Rect2D {
        self.render_area
    }
}
