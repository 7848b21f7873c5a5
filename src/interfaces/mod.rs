pub mod json;
pub mod soap;
