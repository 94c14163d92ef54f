pub mod geom;
pub mod model;
pub mod transform;

pub use model::{Element, ElementKind, PathCmd, Point, Scene, SceneError};
pub use transform::{ViewState, Viewport};
