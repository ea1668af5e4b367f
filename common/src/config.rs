use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use nalgebra::{Point3, Vector3};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use winit::dpi::LogicalSize;
use winit::window::WindowAttributes;

use crate::camera::{LookAtCamera, PerspectiveCamera};
use crate::scene::Spin;
use crate::shader::ShaderPaths;

/// Reads settings from a JSON file, or uses the defaults when no file is given.
/// Missing fields keep their default values.
pub fn load<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };

    log::info!("Loading settings from {}", path.display());

    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read settings file {}", path.display()))?;

    from_json(&text).wrap_err_with(|| format!("Invalid settings file {}", path.display()))
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text)?)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl WindowSettings {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn attributes(&self) -> WindowAttributes {
        WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(self.width, self.height))
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: String::from("OpenGL"),
            width: 1280,
            height: 720,
        }
    }
}

/// Flat vertex data as it would be written by hand, see
/// [`ColoredGeometry::new`](crate::geometry::ColoredGeometry::new).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatGeometry {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Vec<u16>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleSettings {
    pub window: WindowSettings,
    pub camera: LookAtCamera,
    pub clear_color: u32,
    pub clear_depth: f32,
    /// Replaces the built-in triangle when present.
    pub geometry: Option<FlatGeometry>,
    pub shaders: ShaderPaths,
    pub alert_on_shader_error: bool,
}

impl Default for TriangleSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::titled("Triangle"),
            camera: LookAtCamera::default(),
            clear_color: 0x000000,
            clear_depth: 1.0,
            geometry: None,
            shaders: ShaderPaths::default(),
            alert_on_shader_error: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeSettings {
    pub size: Vector3<f32>,
    pub color: u32,
    pub specular: u32,
    pub shininess: f32,
    /// The first cube is placed at the first position, each further position
    /// gets a clone of it.
    pub positions: Vec<Point3<f32>>,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            size: Vector3::new(200.0, 200.0, 200.0),
            color: 0xff0000,
            specular: 0x222222,
            shininess: 30.0,
            positions: vec![Point3::origin(), Point3::new(300.0, 0.0, 0.0)],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightSettings {
    pub color: u32,
    pub intensity: f32,
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Default for LightSettings {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            intensity: 3.0,
            position: Point3::new(-50.0, 200.0, 50.0),
            target: Point3::origin(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubesSettings {
    pub window: WindowSettings,
    pub camera: PerspectiveCamera,
    pub clear_color: u32,
    pub cube: CubeSettings,
    pub light: LightSettings,
    pub spin: Spin,
    pub shaders: ShaderPaths,
    pub alert_on_shader_error: bool,
    /// Seconds between frame statistics log lines.
    pub stats_interval: f32,
}

impl Default for CubesSettings {
    fn default() -> Self {
        Self {
            window: WindowSettings::titled("Cubes"),
            camera: PerspectiveCamera::default(),
            clear_color: 0x333333,
            cube: CubeSettings::default(),
            light: LightSettings::default(),
            spin: Spin::default(),
            shaders: ShaderPaths::default(),
            alert_on_shader_error: true,
            stats_interval: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        let settings: TriangleSettings = load(None).unwrap();
        assert_eq!(settings, TriangleSettings::default());
    }

    #[test]
    fn empty_object_gives_defaults() {
        let settings: CubesSettings = from_json("{}").unwrap();
        assert_eq!(settings, CubesSettings::default());
    }

    #[test]
    fn nested_fields_override_individually() {
        let settings: CubesSettings = from_json(
            r#"{
                "clear_color": 1193046,
                "cube": { "positions": [[0.0, 0.0, 0.0], [300.0, 0.0, 0.0], [-300.0, 0.0, 0.0]] },
                "light": { "intensity": 1.5 },
                "spin": { "step": 0.0 }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.clear_color, 0x123456);
        assert_eq!(settings.cube.positions.len(), 3);
        assert_eq!(settings.cube.color, 0xff0000);
        assert_relative_eq!(settings.light.intensity, 1.5);
        assert_relative_eq!(settings.light.position, Point3::new(-50.0, 200.0, 50.0));
        assert_relative_eq!(settings.spin.step, 0.0);
        assert_relative_eq!(settings.spin.base.x, 0.01);
    }

    #[test]
    fn triangle_geometry_and_shader_overrides() {
        let settings: TriangleSettings = from_json(
            r#"{
                "geometry": {
                    "positions": [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
                    "colors": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
                    "indices": [0, 1, 2]
                },
                "shaders": { "fragment": "shaders/custom.frag" },
                "alert_on_shader_error": false
            }"#,
        )
        .unwrap();

        let geometry = settings.geometry.unwrap();
        assert_eq!(geometry.indices, vec![0, 1, 2]);
        assert_eq!(settings.shaders.vertex, None);
        assert_eq!(
            settings.shaders.fragment,
            Some(PathBuf::from("shaders/custom.frag"))
        );
        assert!(!settings.alert_on_shader_error);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(from_json::<CubesSettings>("{ \"clear_color\": ").is_err());
        assert!(from_json::<CubesSettings>("{ \"clear_color\": \"red\" }").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result: Result<TriangleSettings> = load(Some(Path::new("/definitely/not/here.json")));
        assert!(result.is_err());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("settings-{}.json", fastrand::u64(..)));
        fs::write(&path, r#"{ "window": { "title": "Spinning" } }"#).unwrap();

        let settings: CubesSettings = load(Some(&path)).unwrap();
        assert_eq!(settings.window.title, "Spinning");
        assert_eq!(settings.window.width, 1280);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn default_titles_differ() {
        assert_eq!(TriangleSettings::default().window.title, "Triangle");
        assert_eq!(CubesSettings::default().window.title, "Cubes");
    }
}
