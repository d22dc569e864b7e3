pub mod binding;
pub mod timezone;
