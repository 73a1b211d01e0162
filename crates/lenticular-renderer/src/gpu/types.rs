use lenticular_common::LenticularError;

/// Errors raised while lowering or uploading the lenticular material.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("shader error: {0}")]
    ShaderError(String),

    #[error("device error: {0}")]
    DeviceError(String),
}

impl From<RendererError> for LenticularError {
    fn from(e: RendererError) -> Self {
        LenticularError::Renderer(e.to_string())
    }
}
