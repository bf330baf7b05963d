/// Scheduler trait - FIFO command recording seam
///
/// The renderpass cache records pass transitions as data; the emulator's
/// scheduler owns the queue/worker that later replays them into a command
/// buffer. Commands capture every handle and value they need at record time,
/// so later cache mutation (framebuffer invalidation, etc.) cannot affect an
/// already-recorded command.

use ash::vk;

/// A recorded GPU command, captured fully by value
#[derive(Clone, Copy)]
pub enum RenderCommand {
    /// Begin a render pass instance
    BeginRenderPass {
        /// Render pass handle resolved from the cache
        render_pass: vk::RenderPass,
        /// Framebuffer handle resolved from the cache
        framebuffer: vk::Framebuffer,
        /// Render area of the pass
        render_area: vk::Rect2D,
        /// Clear value for the first attachment
        clear_value: vk::ClearValue,
        /// 1 when the pass clears on load, 0 otherwise
        clear_value_count: u32,
    },
    /// End the current render pass instance
    EndRenderPass,
}

impl RenderCommand {
    /// Replay this command into a command buffer
    ///
    /// Called by the scheduler's worker when it drains its queue.
    ///
    /// # Safety contract
    ///
    /// `cmdbuf` must be in the recording state and every captured handle must
    /// still be alive; the scheduler guarantees both by executing commands in
    /// FIFO order before any teardown.
    pub fn execute(&self, device: &ash::Device, cmdbuf: vk::CommandBuffer) {
        match *self {
            RenderCommand::BeginRenderPass {
                render_pass,
                framebuffer,
                render_area,
                clear_value,
                clear_value_count,
            } => {
                let clear_values = [clear_value];
                let begin_info = vk::RenderPassBeginInfo::default()
                    .render_pass(render_pass)
                    .framebuffer(framebuffer)
                    .render_area(render_area)
                    .clear_values(&clear_values[..clear_value_count as usize]);

                unsafe {
                    device.cmd_begin_render_pass(cmdbuf, &begin_info, vk::SubpassContents::INLINE);
                }
            }
            RenderCommand::EndRenderPass => unsafe {
                device.cmd_end_render_pass(cmdbuf);
            },
        }
    }
}

/// Command recorder seam
///
/// Recorded commands execute asynchronously, in the exact order they were
/// enqueued relative to other commands from the same caller sequence. Once
/// recorded, a command is never retracted.
pub trait Scheduler: Send + Sync {
    /// Enqueue a command for later execution
    fn record(&self, command: RenderCommand);
}
