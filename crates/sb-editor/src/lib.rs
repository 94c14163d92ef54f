pub mod controller;
pub mod history;
pub mod input;
pub mod tools;

pub use controller::{Controller, SelectedElement};
pub use history::HistoryStore;
pub use input::InputEvent;
pub use tools::Tool;
