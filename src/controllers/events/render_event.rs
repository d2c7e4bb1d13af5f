use crate::controllers::data::frame_data::FrameData;
use crate::controllers::errors::render::RenderError;

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
