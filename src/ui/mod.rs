//! UI layer: layout, shared components and pages

pub mod common;
pub mod footer;
pub mod icon;
pub mod locale;
pub mod nav;
pub mod notifications;
pub mod pages;
pub mod scroll;

pub use footer::Footer;
pub use locale::{provide_locale_context, use_locale_context};
pub use nav::Navigation;
pub use notifications::{Toaster, provide_notice_manager, use_notice_manager};
pub use scroll::ScrollToTop;
