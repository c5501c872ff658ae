pub mod galaxy;
pub mod time;
