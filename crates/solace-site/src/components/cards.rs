//! Card components for the landing sections

use leptos::*;

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
    image: &'static str,
    alt: &'static str,
) -> impl IntoView {
    view! {
        <div class="card group">
            <div class="bg-gray-100 rounded-xl overflow-hidden mb-6 h-56">
                <img src=image alt=alt class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"/>
            </div>
            <h3 class="text-2xl font-bold mb-3">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn ResourceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="text-xl font-semibold mb-2">{title}</h3>
            <p class="text-gray-600 text-sm">{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-8">
            <p class="text-gray-700 italic mb-6">"\""{ quote }"\""</p>
            <div>
                <p class="font-semibold text-gray-900">{author}</p>
                <p class="text-sm text-gray-600">{role}</p>
            </div>
        </div>
    }
}

#[component]
pub fn MetricCard(
    value: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-3xl font-bold text-primary">{value}</div>
            <div class="text-gray-300 text-sm mt-1">{label}</div>
        </div>
    }
}
