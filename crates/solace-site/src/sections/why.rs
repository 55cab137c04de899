use crate::components::FeatureCard;
use leptos::*;

#[component]
pub fn WhySection() -> impl IntoView {
    view! {
        <section class="section bg-light" id="why-solace">
            <div class="container">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <p class="text-primary font-medium tracking-widest uppercase mb-2">"Why SolaceVR"</p>
                    <h2 class="text-4xl font-bold mb-6">"The Future of Faith is Here"</h2>
                    <p class="text-gray-600 max-w-3xl mx-auto">
                        "SolaceVR combines compassionate theology with cutting-edge technology to create a new paradigm for spiritual connection and community engagement."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 xl:gap-12">
                    <FeatureCard
                        title="Faithful"
                        description="Developed with denominational scholars, ensuring content aligned with diverse theological traditions."
                        image="https://images.unsplash.com/photo-1591696331111-ef9586a5b17a"
                        alt="Typewriter with text symbolizing faithful content"
                    />
                    <FeatureCard
                        title="Scalable"
                        description="From small congregations to global networks, our platform scales to meet communities of any size."
                        image="https://images.unsplash.com/photo-1620712943543-bcc4688e7485"
                        alt="Robot on bench representing AI scalability"
                    />
                    <FeatureCard
                        title="Transparent"
                        description="Complete audit trails and doctrinal provenance for all content, ensuring trust and accountability."
                        image="https://images.unsplash.com/photo-1498050108023-c5249f4df085"
                        alt="Code on laptop representing transparent technology"
                    />
                </div>
            </div>
        </section>
    }
}
