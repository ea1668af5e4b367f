use nalgebra::{Vector3, Vector4};
use palette::{LinSrgb, Srgb};

pub type Color = Srgb;

pub trait ColorExt {
    fn from_hex(hex: u32) -> Self;
    fn from_named(color: Srgb<u8>) -> Self;
    fn to_linear_vector3(self) -> Vector3<f32>;
    fn to_linear_vector4(self) -> Vector4<f32>;
    fn to_linear_components_tuple(self) -> (f32, f32, f32, f32);
}

impl ColorExt for Color {
    /// Reads a packed `0xRRGGBB` value, ignoring any bits above the blue byte.
    fn from_hex(hex: u32) -> Color {
        let red = ((hex >> 16) & 0xff) as u8;
        let green = ((hex >> 8) & 0xff) as u8;
        let blue = (hex & 0xff) as u8;

        Srgb::new(red, green, blue).into_format()
    }

    fn from_named(named: Srgb<u8>) -> Color {
        named.into_format()
    }

    fn to_linear_vector3(self) -> Vector3<f32> {
        let linear: LinSrgb = self.into_linear();

        Vector3::new(linear.red, linear.green, linear.blue)
    }

    fn to_linear_vector4(self) -> Vector4<f32> {
        let vec3 = self.to_linear_vector3();

        Vector4::new(vec3.x, vec3.y, vec3.z, 1.0)
    }

    fn to_linear_components_tuple(self) -> (f32, f32, f32, f32) {
        let vector_components = self.to_linear_vector4();

        (
            vector_components[0],
            vector_components[1],
            vector_components[2],
            vector_components[3],
        )
    }
}
