use palette::Srgba;

pub type Color = Srgba<f32>;

pub const BACKGROUND: Color = Color::new(0.2, 0.3, 0.3, 1.0);
pub const ORANGE: Color = Color::new(1.0, 0.5, 0.2, 1.0);

pub trait ColorExt {
    fn to_rgba_components_tuple(self) -> (f32, f32, f32, f32);
    fn to_rgba_array(self) -> [f32; 4];
}

impl ColorExt for Color {
    fn to_rgba_components_tuple(self) -> (f32, f32, f32, f32) {
        self.into_components()
    }

    fn to_rgba_array(self) -> [f32; 4] {
        let (red, green, blue, alpha) = self.into_components();

        [red, green, blue, alpha]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn background_components() {
        let (red, green, blue, alpha) = BACKGROUND.to_rgba_components_tuple();

        assert_relative_eq!(red, 0.2);
        assert_relative_eq!(green, 0.3);
        assert_relative_eq!(blue, 0.3);
        assert_relative_eq!(alpha, 1.0);
    }

    #[test]
    fn orange_as_array() {
        assert_eq!(ORANGE.to_rgba_array(), [1.0, 0.5, 0.2, 1.0]);
    }
}
