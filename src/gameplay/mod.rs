pub mod game;
pub mod level;
pub mod moves;
pub mod personality;
pub mod player;
pub mod profile;
pub mod score;
pub mod search;
