pub mod hit;
pub mod paint;

pub use hit::{Handle, Hit, hit_test};
pub use paint::{default_stroke, element_path, view_affine};
