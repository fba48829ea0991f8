pub mod combo;
pub mod rejection;
pub mod rules;
