//! Error type shared by every renderer operation.
//!
//! Soft conditions (unloaded images, restoring or popping an empty stack) are
//! never reported through this type; they degrade to a no-op or to defaults.

use thiserror::Error;

/// Result alias used across the engine.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    // ── construction ──────────────────────────────────────────────────────
    #[error("Got unknown renderer type \"{0}\". The known are: 2D, GL and AUTO")]
    UnknownRendererType(String),

    #[error(
        "Cannot get WebGL context. Try to use `2D` as the renderer type or `Renderer2D` instead of `RendererGl`"
    )]
    WebGlUnavailable,

    #[error("Cannot get 2D context from the canvas surface")]
    Context2dUnavailable,

    #[error("An error occurred compiling the shaders: {log}")]
    ShaderCompile { log: String },

    #[error("Unable to initialize the shader program: {log}")]
    ProgramLink { log: String },

    #[error("Unable to validate the shader program: {log}")]
    ProgramValidate { log: String },

    #[error("Unable to create WebGL {0}")]
    ResourceCreation(&'static str),

    // ── invalid arguments ─────────────────────────────────────────────────
    #[error(
        "Got unknown \"rectAlign\" constant \"{0}\". The known are: LEFT, CENTER, RIGHT, TOP, MIDDLE, BOTTOM."
    )]
    UnknownRectAlign(String),

    #[error("Got unknown background position constant. The known are: {known}")]
    UnknownBackgroundPosition { known: &'static str },

    #[error("The uniform type is not supported (0x{0:04x})")]
    UnsupportedUniformType(u32),

    #[error("Uniform \"{name}\" expects {expected}")]
    UniformShape { name: String, expected: &'static str },

    #[error("No \"{0}\" uniform found")]
    UniformNotFound(String),

    #[error("No \"{0}\" attribute found")]
    AttributeNotFound(String),

    #[error("cannot cut the image because the new image {axis} or {extent} is out of bounds")]
    ImageOutOfBounds { axis: char, extent: char },

    #[error("{0} is not a valid syntax")]
    ColorSyntax(String),

    // ── backend ───────────────────────────────────────────────────────────
    #[error("{0} is not implemented by this renderer")]
    NotImplemented(&'static str),

    #[error("backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            RenderError::ColorSyntax("#zz".into()).to_string(),
            "#zz is not a valid syntax"
        );
        assert_eq!(
            RenderError::UniformNotFound("ucolor".into()).to_string(),
            "No \"ucolor\" uniform found"
        );
        assert!(RenderError::WebGlUnavailable.to_string().contains("2D"));
    }

    #[test]
    fn cut_error_names_axis_and_extent() {
        let err = RenderError::ImageOutOfBounds { axis: 'Y', extent: 'H' };
        assert_eq!(
            err.to_string(),
            "cannot cut the image because the new image Y or H is out of bounds"
        );
    }
}
