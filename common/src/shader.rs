use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, bail, eyre};
use glium::glutin::surface::WindowSurface;
use glium::{Display, Program};
use serde::{Deserialize, Serialize};

use crate::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    /// Resolves the `type` attribute of a shader embedded in an HTML page as
    /// `<script type="x-shader/x-vertex">`. Sources loaded from files use
    /// [`ShaderKind::from_path`] instead.
    pub fn from_mime_type(mime_type: &str) -> Result<Self> {
        match mime_type.trim() {
            "x-shader/x-vertex" => Ok(Self::Vertex),
            "x-shader/x-fragment" => Ok(Self::Fragment),
            other => bail!("Unknown shader type \"{other}\""),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("vert") | Some("vs") => Ok(Self::Vertex),
            Some("frag") | Some("fs") => Ok(Self::Fragment),
            _ => bail!(
                "Cannot tell the shader stage of {} from its extension",
                path.display()
            ),
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShaderSource {
    pub kind: ShaderKind,
    /// Where the text came from, used in error messages.
    pub label: String,
    pub text: String,
}

impl ShaderSource {
    pub fn new(kind: ShaderKind, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let kind = ShaderKind::from_path(path)?;
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read shader {}", path.display()))?;

        Ok(Self::new(kind, path.display().to_string(), text))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShaderPair {
    pub vertex: ShaderSource,
    pub fragment: ShaderSource,
}

impl ShaderPair {
    pub fn new(vertex: ShaderSource, fragment: ShaderSource) -> Result<Self> {
        if vertex.kind != ShaderKind::Vertex {
            bail!("{} is a {} shader, expected a vertex shader", vertex.label, vertex.kind);
        }

        if fragment.kind != ShaderKind::Fragment {
            bail!(
                "{} is a {} shader, expected a fragment shader",
                fragment.label,
                fragment.kind
            );
        }

        Ok(Self { vertex, fragment })
    }

    pub fn vertex_color() -> Self {
        Self {
            vertex: ShaderSource::new(
                ShaderKind::Vertex,
                "vertex_color.vert",
                include_str!("../../assets/shaders/vertex_color/vertex_color.vert"),
            ),
            fragment: ShaderSource::new(
                ShaderKind::Fragment,
                "vertex_color.frag",
                include_str!("../../assets/shaders/vertex_color/vertex_color.frag"),
            ),
        }
    }

    pub fn phong() -> Self {
        Self {
            vertex: ShaderSource::new(
                ShaderKind::Vertex,
                "phong.vert",
                include_str!("../../assets/shaders/phong/phong.vert"),
            ),
            fragment: ShaderSource::new(
                ShaderKind::Fragment,
                "phong.frag",
                include_str!("../../assets/shaders/phong/phong.frag"),
            ),
        }
    }

    /// Replaces the built-in stages with files where paths are given.
    pub fn with_overrides(self, overrides: &ShaderPaths) -> Result<Self> {
        let vertex = match &overrides.vertex {
            Some(path) => ShaderSource::load(path)?,
            None => self.vertex,
        };
        let fragment = match &overrides.fragment {
            Some(path) => ShaderSource::load(path)?,
            None => self.fragment,
        };

        Self::new(vertex, fragment)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderPaths {
    pub vertex: Option<PathBuf>,
    pub fragment: Option<PathBuf>,
}

/// Every program the renderer builds up front.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderSet {
    pub vertex_color: ShaderPair,
    pub phong: ShaderPair,
    /// Show build failures in a dialog as well as the log.
    pub alert_on_error: bool,
}

impl Default for ShaderSet {
    fn default() -> Self {
        Self {
            vertex_color: ShaderPair::vertex_color(),
            phong: ShaderPair::phong(),
            alert_on_error: true,
        }
    }
}

pub fn new_program(
    display: &Display<WindowSurface>,
    shaders: &ShaderPair,
    alert_on_error: bool,
) -> Result<Program> {
    log::debug!(
        "Building program from {} and {}",
        shaders.vertex.label,
        shaders.fragment.label
    );

    Program::from_source(
        display,
        &shaders.vertex.text,
        &shaders.fragment.text,
        None,
    )
    .map_err(|error| {
        // Compile and link failures carry the driver's info log
        let title = format!(
            "Failed to build shader program ({} + {})",
            shaders.vertex.label, shaders.fragment.label
        );

        if alert_on_error {
            debug::alert(&title, &error.to_string());
        }

        eyre!("{title}: {error}")
    })
}
