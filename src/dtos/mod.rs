pub mod admin;
pub mod business;
pub mod cash;
pub mod menu;
pub mod order;
pub mod receipt;
pub mod user;
