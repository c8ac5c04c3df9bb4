pub mod animation;
pub mod assets;
pub mod buffer;
pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod render;
pub mod sprite;
pub mod text;
