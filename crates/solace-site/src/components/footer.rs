//! Site footer

use leptos::*;

static FOOTER_LINKS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Products",
        &[
            ("Spiritual Agents", "#products"),
            ("Virtual Sacred Spaces", "#products"),
            ("Engagement Dashboard", "#products"),
        ],
    ),
    (
        "Resources",
        &[
            ("Case Studies", "#case-studies"),
            ("Research Hub", "#research"),
            ("Press Kit", "#press"),
        ],
    ),
    (
        "Company",
        &[("Contact", "#contact"), ("Book a Demo", "#demo")],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-dark text-white pt-16 pb-8">
            <div class="container">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <span class="text-2xl font-display font-bold">"Solace"<span class="text-primary">"VR"</span></span>
                        <p class="text-gray-400 mt-4">
                            "Restoring Spirituality Through Technology. Creating AI-powered tools and immersive experiences for faith communities worldwide."
                        </p>
                    </div>
                    {FOOTER_LINKS.iter().map(|(heading, links)| view! {
                        <div>
                            <h4 class="font-semibold mb-4">{*heading}</h4>
                            <ul class="space-y-2">
                                {links.iter().map(|(label, href)| view! {
                                    <li><a href=*href class="text-gray-400 hover:text-white transition">{*label}</a></li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="border-t border-gray-800 mt-12 pt-8 text-center text-gray-500 text-sm">
                    "© 2025 SolaceVR. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
