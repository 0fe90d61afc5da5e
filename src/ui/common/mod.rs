//! Shared form and button components

pub mod button;
pub mod form;
