//! Product tabs

use crate::hooks::use_observable;
use leptos::*;
use solace_core::TabSet;
use tracing::warn;

struct Product {
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    image: &'static str,
    alt: &'static str,
}

static PRODUCTS: [Product; 3] = [
    Product {
        name: "Spiritual Agents",
        description: "AI-powered assistants trained with denominational scholars, capable of answering doctrinal questions and leading prayers in accordance with specific faith traditions.",
        features: &[
            "Natural conversation about faith topics",
            "Multi-denominational theological training",
            "Available 24/7 for spiritual guidance",
            "Customizable to your community's traditions",
            "Transparent sources for all responses",
        ],
        image: "https://images.unsplash.com/photo-1518495973542-4542c06a5843",
        alt: "Tree with sunlight representing spiritual connection",
    },
    Product {
        name: "Virtual Sacred Spaces",
        description: "Photorealistic 3D/VR environments that recreate chapels, temples, mosques, gurudwaras, and meditation halls accessible through VR headsets or any browser.",
        features: &[
            "High-fidelity sacred space recreations",
            "Cross-platform accessibility (VR, desktop, mobile)",
            "Communal or private spiritual experiences",
            "Guided meditation and prayer experiences",
            "Customizable architecture and aesthetics",
        ],
        image: "https://images.unsplash.com/photo-1616940779493-6958fbd615fe",
        alt: "Peaceful indoor sacred space with plants",
    },
    Product {
        name: "Engagement Dashboard",
        description: "Analytics platform that helps clergy and community leaders track engagement, understand content resonance, and make data-informed decisions for pastoral care.",
        features: &[
            "Comprehensive engagement metrics",
            "Content effectiveness analysis",
            "Community participation tracking",
            "Pastoral care prioritization tools",
            "Privacy-first data collection",
        ],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71",
        alt: "Data analytics dashboard on laptop",
    },
];

#[component]
pub fn ProductsSection() -> impl IntoView {
    let tabs = match TabSet::new(PRODUCTS.len()) {
        Ok(tabs) => tabs,
        Err(err) => {
            warn!(error = %err, "product tabs unavailable");
            return ().into_view();
        }
    };
    let selected = use_observable(tabs.index());
    let tabs = store_value(tabs);

    view! {
        <section class="section bg-white" id="products">
            <div class="container">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <p class="text-primary font-medium tracking-widest uppercase mb-2">"Our Products"</p>
                    <h2 class="text-4xl font-bold mb-6">"Transformative Solutions for Faith Communities"</h2>
                    <p class="text-gray-600">
                        "Our suite of technology solutions helps faith communities connect with their members in meaningful ways, expanding reach while deepening engagement."
                    </p>
                </div>

                <div class="max-w-6xl mx-auto">
                    <div class="flex flex-wrap md:flex-nowrap space-x-0 md:space-x-2 space-y-2 md:space-y-0 mb-10">
                        {PRODUCTS.iter().enumerate().map(|(index, product)| view! {
                            <button
                                class=move || if selected.get() == index {
                                    "w-full py-4 px-6 rounded-xl font-medium bg-primary text-white shadow-lg"
                                } else {
                                    "w-full py-4 px-6 rounded-xl font-medium bg-gray-100 text-gray-700 hover:bg-gray-200"
                                }
                                on:click=move |_| tabs.with_value(|t| {
                                    if let Err(err) = t.select(index) {
                                        warn!(error = %err, "tab selection rejected");
                                    }
                                })
                            >
                                {product.name}
                            </button>
                        }).collect::<Vec<_>>()}
                    </div>

                    {move || {
                        let product = &PRODUCTS[selected.get() % PRODUCTS.len()];
                        view! {
                            <div class="bg-gray-50 rounded-3xl p-6 md:p-10">
                                <div class="flex flex-col md:flex-row gap-10">
                                    <div class="md:w-1/2">
                                        <div class="rounded-2xl overflow-hidden h-80">
                                            <img src=product.image alt=product.alt class="w-full h-full object-cover"/>
                                        </div>
                                    </div>
                                    <div class="md:w-1/2">
                                        <h3 class="text-3xl font-bold mb-4">{product.name}</h3>
                                        <p class="text-gray-600 mb-6">{product.description}</p>
                                        <h4 class="font-semibold text-lg mb-3">"Key Features:"</h4>
                                        <ul class="space-y-2">
                                            {product.features.iter().map(|feature| view! {
                                                <li class="flex items-start">
                                                    <span class="text-primary mr-2">"✓"</span>
                                                    {*feature}
                                                </li>
                                            }).collect::<Vec<_>>()}
                                        </ul>
                                        <a href="#demo" class="btn-primary mt-8 inline-block">"Schedule a Demo"</a>
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                </div>
            </div>
        </section>
    }
    .into_view()
}
