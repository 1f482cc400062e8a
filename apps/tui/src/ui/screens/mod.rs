pub mod help;
pub mod map_view;
