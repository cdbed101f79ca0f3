pub mod input;
pub mod menus;
pub mod panels;
