use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::math::AngleMode;
use crate::paint::ColorMode;

/// Which backend `create_renderer` builds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum RendererType {
    /// Decided from [`Capabilities::preferred_type`].
    Auto,
    #[default]
    TwoD,
    Gl,
}

impl FromStr for RendererType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "2D" => Ok(RendererType::TwoD),
            "GL" => Ok(RendererType::Gl),
            "AUTO" => Ok(RendererType::Auto),
            _ => Err(RenderError::UnknownRendererType(s.to_string())),
        }
    }
}

impl fmt::Display for RendererType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RendererType::Auto => "AUTO",
            RendererType::TwoD => "2D",
            RendererType::Gl => "GL",
        })
    }
}

/// Renderer construction options.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererOptions {
    /// Logical width; when both `w` and `h` are `None` the parent size is used.
    pub w: Option<f32>,
    pub h: Option<f32>,
    /// Device pixels per logical pixel.
    pub scale: f32,
    /// Representation built by `fill`/`stroke`/`background_color`.
    pub color_mode: ColorMode,
    pub alpha: bool,
    /// GL only: alpha blending instead of depth testing.
    pub blending: bool,
    /// Interpret user-facing angles (`polygon`) in degrees.
    pub degrees: bool,
    pub antialias: bool,
    pub renderer_type: RendererType,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            w: None,
            h: None,
            scale: 1.0,
            color_mode: ColorMode::Rgba,
            alpha: true,
            blending: true,
            degrees: false,
            antialias: true,
            renderer_type: RendererType::TwoD,
        }
    }
}

impl RendererOptions {
    /// Options for a fixed-size surface.
    pub fn sized(w: f32, h: f32) -> Self {
        Self { w: Some(w), h: Some(h), ..Self::default() }
    }

    #[inline]
    pub fn angle_mode(&self) -> AngleMode {
        if self.degrees { AngleMode::Degrees } else { AngleMode::Radians }
    }

    #[inline]
    pub fn context_attributes(&self) -> ContextAttributes {
        ContextAttributes { alpha: self.alpha, antialias: self.antialias }
    }
}

/// Attributes passed to the surface when acquiring a context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ContextAttributes {
    pub alpha: bool,
    pub antialias: bool,
}

/// Platform probe results, computed once by the host and passed in.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Capabilities {
    pub webgl: bool,
    pub touch: bool,
    pub ios_safari: bool,
}

impl Capabilities {
    /// GL on touch devices (except iOS Safari), 2D elsewhere.
    pub fn preferred_type(&self) -> RendererType {
        if self.touch && !self.ios_safari {
            RendererType::Gl
        } else {
            RendererType::TwoD
        }
    }
}
