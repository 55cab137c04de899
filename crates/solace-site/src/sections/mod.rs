//! Landing page sections, in page order

mod case_studies;
mod contact;
mod hero;
mod press;
mod products;
mod research;
mod why;

pub use case_studies::CaseStudiesSection;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use press::PressSection;
pub use products::ProductsSection;
pub use research::ResearchSection;
pub use why::WhySection;
