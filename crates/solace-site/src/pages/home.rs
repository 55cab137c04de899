//! Home page

use crate::components::*;
use crate::sections::*;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <SiteNav/>
            <main>
                <HeroSection/>
                <WhySection/>
                <ProductsSection/>
                <CaseStudiesSection/>
                <ResearchSection/>
                <PressSection/>
                <ContactSection/>
            </main>
            <Footer/>

            <NewsletterSignup/>
            <CookieConsent/>
            <ScrollToTop/>
        </div>
    }
}
