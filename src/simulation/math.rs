pub use glam::{Mat4, Vec2, Vec3, Vec4};

pub fn translate(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(x, y, z))
}

pub fn scale(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::from_scale(Vec3::new(x, y, z))
}

pub fn transform_point(transform: &Mat4, point: Vec3) -> Vec3 {
    let p: Vec4 = *transform * point.extend(1.);
    p.truncate() / p.w
}

pub fn up_vector(orientation: f32) -> Vec2 {
    let (sin, cos) = orientation.sin_cos();
    Vec2::new(-sin, cos)
}

pub fn degrees(value: f32) -> f32 {
    value.to_radians()
}

#[cfg(test)]
mod math_tests {
    use super::*;

    fn assert_feq(left: f32, right: f32) {
        if (left - right).abs() > 1e-5 {
            panic!("Float equal assertion failed, {left} != {right}");
        }
    }

    #[test]
    fn scale_after_translate() {
        // translation is applied first because points are right-multiplied
        let m = scale(2., -2., 1.) * translate(-1., -3., 0.);
        let p = transform_point(&m, Vec3::new(4., 5., 0.));
        assert_feq(p.x, 6.);
        assert_feq(p.y, -4.);
        assert_feq(p.z, 0.);
    }

    #[test]
    fn homogeneous_divide() {
        let mut m = Mat4::IDENTITY;
        m.w_axis.w = 2.;
        let p = transform_point(&m, Vec3::new(4., 6., 8.));
        assert_feq(p.x, 2.);
        assert_feq(p.y, 3.);
        assert_feq(p.z, 4.);
    }

    #[test]
    fn up_vector_rotates_ccw() {
        let up = up_vector(0.);
        assert_feq(up.x, 0.);
        assert_feq(up.y, 1.);

        let left = up_vector(std::f32::consts::FRAC_PI_2);
        assert_feq(left.x, -1.);
        assert_feq(left.y, 0.);
    }

    #[test]
    fn vector_basics() {
        let a = Vec2::new(3., 4.);
        assert_feq(a.length(), 5.);
        assert_feq(a.dot(Vec2::new(1., 2.)), 11.);
        assert_eq!(a - Vec2::new(1., 1.), Vec2::new(2., 3.));
        assert_eq!(a * 2., Vec2::new(6., 8.));
    }
}
