use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

/// Error type for cancelable pixel buffer generation.
#[derive(Debug)]
pub enum GeneratePixelBufferCancelableError {
    /// The operation was cancelled before completion; expected control flow
    /// for superseded frames, not a failure to display.
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error + Send + Sync>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl fmt::Display for GeneratePixelBufferCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::ColourMap(err) => err.source(),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Maps per-pixel results to colours and packs them into an RGBA buffer.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    canvas: CanvasSize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, canvas, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::ColourMap(err) => {
            GeneratePixelBufferError::ColourMap(err)
        }
        GeneratePixelBufferCancelableError::PixelBuffer(err) => {
            GeneratePixelBufferError::PixelBuffer(err)
        }
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Streams RGBA bytes into a preallocated buffer, checking the cancellation
/// token every [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    canvas: CanvasSize,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let buffer_size = canvas.pixel_count() as usize * 4;
    let mut buffer: PixelBufferData = Vec::with_capacity(buffer_size);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferCancelableError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferCancelableError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
        buffer.push(255);
    }

    PixelBuffer::from_data(canvas, buffer)
        .map_err(GeneratePixelBufferCancelableError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_rgba_pixel_buffer() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(2, 2).unwrap();
        let expected: PixelBufferData = vec![
            1, 1, 1, 255, //
            2, 2, 2, 255, //
            3, 3, 3, 255, //
            4, 4, 4, 255, //
        ];

        let result = generate_pixel_buffer(input, &mapper, canvas).unwrap();

        assert_eq!(result.buffer(), &expected);
        assert_eq!(result.canvas(), canvas);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4];
        let mapper = StubColourMapFailure {};
        let canvas = CanvasSize::new(2, 2).unwrap();

        let result = generate_pixel_buffer(input, &mapper, canvas);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::ColourMap(_))
        ));
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(2, 2).unwrap();

        let result = generate_pixel_buffer(input, &mapper, canvas);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    canvas_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_cancelable_generates_same_buffer_when_never_cancelled() {
        let input: Vec<u8> = vec![9, 8, 7, 6];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(2, 2).unwrap();

        let plain = generate_pixel_buffer(input.clone(), &mapper, canvas).unwrap();
        let cancelable =
            generate_pixel_buffer_cancelable(input, &mapper, canvas, &NeverCancel).unwrap();

        assert_eq!(plain.buffer(), cancelable.buffer());
    }

    #[test]
    fn test_cancelled_token_aborts_generation() {
        let input: Vec<u8> = vec![0; 4];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(2, 2).unwrap();
        let always_cancelled = || true;

        let result =
            generate_pixel_buffer_cancelable(input, &mapper, canvas, &always_cancelled);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::Cancelled(_))
        ));
    }
}
