//! API route handlers

pub mod actions;
pub mod health;
pub mod pages;
pub mod state;
