//! Core domain logic for the site: forms, submission flow, translations

pub mod config;
pub mod form;
pub mod i18n;
pub mod notice;
pub mod submission;
#[cfg(test)]
mod tests;
