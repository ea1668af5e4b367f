use nalgebra::{Matrix4, Point3};

pub trait Camera {
    fn position(&self) -> Point3<f32>;
    fn view(&self) -> Matrix4<f32>;
    fn projection(&self, aspect: f32) -> Matrix4<f32>;

    fn view_projection(&self, aspect: f32) -> Matrix4<f32> {
        self.projection(aspect) * self.view()
    }
}
