pub mod assembly_stage;
pub mod conveyor;
pub mod hud;
