pub mod assets;
pub mod camera;
pub mod core;
pub mod labels;
pub mod loading;
pub mod scene;
pub mod systems;
