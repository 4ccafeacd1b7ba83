pub mod helpers;
pub mod menu_bar;
pub mod status;
pub mod toolbar;
pub mod viewport;
