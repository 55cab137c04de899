//! Shared site components

mod cards;
mod cookie_consent;
mod footer;
mod form_fields;
mod nav;
mod newsletter_signup;
mod scroll_to_top;

pub use cards::*;
pub use cookie_consent::CookieConsent;
pub use footer::Footer;
pub use form_fields::{advance_form, rewind_form, StepFields};
pub use nav::SiteNav;
pub use newsletter_signup::NewsletterSignup;
pub use scroll_to_top::ScrollToTop;
