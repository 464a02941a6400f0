mod review;
mod ui;
mod viewport;

pub use review::ReviewState;
pub use ui::UIState;
pub use viewport::ViewportState;
