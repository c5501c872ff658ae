pub mod body;
pub mod sprite;
