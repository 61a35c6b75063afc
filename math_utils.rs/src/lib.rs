pub mod ext;
pub mod parabola;
