pub mod application;
pub mod camera;
pub mod colors;
pub mod config;
pub mod context;
pub mod debug;
pub mod geometry;
pub mod light;
pub mod maths;
pub mod renderer;
pub mod run;
pub mod scene;
pub mod shader;
pub mod transform;
