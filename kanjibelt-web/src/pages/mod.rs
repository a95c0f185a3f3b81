pub mod game;
pub mod menu;
pub mod result;
