//! Application State
//!
//! Dieses Modul verwaltet den Zustand der Anwendung (Kurven, View, Geste).

mod app_state;
mod gesture;
mod selection;
mod view;

pub use app_state::AppState;
pub use gesture::Gesture;
pub use selection::SelectionState;
pub use view::ViewState;
