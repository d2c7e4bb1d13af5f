use crate::controllers::events::render_event::RenderEvent;

/// Where finished frames (and render failures) go. The presentation layer
/// implements this; the render worker only ever hands over complete
/// buffers, never partial frames.
pub trait FrameSinkPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
