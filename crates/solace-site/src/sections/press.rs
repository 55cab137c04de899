use crate::components::{ResourceCard, TestimonialCard};
use leptos::*;

#[component]
pub fn PressSection() -> impl IntoView {
    view! {
        <section class="section bg-light" id="press">
            <div class="container">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <p class="text-primary font-medium tracking-widest uppercase mb-2">"Press & Thought Leadership"</p>
                    <h2 class="text-4xl font-bold mb-6">"Making Headlines in the GodTech Space"</h2>
                    <p class="text-gray-600">
                        "SolaceVR is at the forefront of the conversation about the future of faith and technology. Explore our resources for media, researchers, and thought leaders."
                    </p>
                </div>

                <div class="grid md:grid-cols-4 gap-6 mb-20">
                    <ResourceCard icon="📁" title="Media Kit" description="Download logos, product images, founder bios, and approved messaging."/>
                    <ResourceCard icon="📰" title="Press Releases" description="Browse our latest announcements and company news."/>
                    <ResourceCard icon="🎙" title="Podcast Features" description="Listen to interviews with our leadership team."/>
                    <ResourceCard icon="🎤" title="Keynote Clips" description="Watch highlights from our conference presentations."/>
                </div>

                <h3 class="text-3xl font-bold text-center mb-10">"Voices from the Field"</h3>
                <div class="grid md:grid-cols-3 gap-8">
                    <TestimonialCard
                        quote="SolaceVR represents a bold step forward in how we think about the intersection of technology and spirituality."
                        author="Dr. Maya Patel"
                        role="Professor of Religious Studies, Harvard University"
                    />
                    <TestimonialCard
                        quote="In our increasingly digital world, SolaceVR has found a way to make faith practice more accessible without sacrificing depth or authenticity."
                        author="Rabbi Joshua Goldstein"
                        role="Interfaith Technology Council"
                    />
                    <TestimonialCard
                        quote="The ethical framework SolaceVR has built into their AI spiritual agents should become the industry standard."
                        author="Imam Fareed Abdullah"
                        role="Director, Center for Digital Ethics"
                    />
                </div>
            </div>
        </section>
    }
}
