pub mod jwt;
pub mod roles;
