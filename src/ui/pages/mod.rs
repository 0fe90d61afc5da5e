//! Site pages, one module per route

pub mod birthday;
pub mod blog;
pub mod booking;
pub mod contact;
pub mod faq;
pub mod game;
pub mod home;
pub mod not_found;
pub mod pricing;

pub use birthday::BirthdayPage;
pub use blog::BlogPage;
pub use booking::BookingPage;
pub use contact::ContactPage;
pub use faq::FaqPage;
pub use game::GamePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pricing::PricingPage;
