pub mod character;
pub mod search;
