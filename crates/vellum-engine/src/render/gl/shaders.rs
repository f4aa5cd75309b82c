//! GLSL ES 1.0 sources.
//!
//! Vertex positions arrive in local units and are mapped to clip space with
//! `utransform` (current matrix) and `ures` (backing size in pixels), flipping
//! Y so that the origin stays top-left.

/// A vertex/fragment source pair.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderSources {
    pub vert: &'static str,
    pub frag: &'static str,
}

/// Solid color fill/stroke; `ucolor` carries 0–255 channels and 0–1 alpha.
pub const BASIC: ShaderSources = ShaderSources {
    vert: "precision mediump float;\
           attribute vec2 apos;\
           uniform vec2 ures;\
           uniform mat3 utransform;\
           void main(){\
           gl_Position=vec4(((utransform*vec3(apos,1.0)).xy/ures*2.0-1.0)*vec2(1,-1),0,1);\
           }",
    frag: "precision mediump float;\
           uniform vec4 ucolor;\
           void main(){\
           gl_FragColor=vec4(ucolor.rgb/255.0,ucolor.a);\
           }",
};

/// Textured unit square; `ucrop` is the source rectangle normalized to the texture size.
pub const TEXTURED: ShaderSources = ShaderSources {
    vert: "precision mediump float;\
           attribute vec2 apos;\
           uniform vec2 ures;\
           uniform mat3 utransform;\
           uniform vec4 ucrop;\
           varying vec2 vuv;\
           void main(){\
           vuv=ucrop.xy+apos*ucrop.zw;\
           gl_Position=vec4(((utransform*vec3(apos,1.0)).xy/ures*2.0-1.0)*vec2(1,-1),0,1);\
           }",
    frag: "precision mediump float;\
           uniform sampler2D uimage;\
           varying vec2 vuv;\
           void main(){\
           gl_FragColor=texture2D(uimage,vuv);\
           }",
};
