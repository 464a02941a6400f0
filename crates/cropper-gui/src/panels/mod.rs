pub mod dialogs;
pub mod menu_bar;
pub mod review;
pub mod status;
pub mod viewport;
