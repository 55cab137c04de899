use leptos::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center overflow-hidden">
            <div class="absolute inset-0">
                <img
                    src="https://images.unsplash.com/photo-1660312829285-581db72a3e46"
                    alt="Sacred virtual space"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-dark/90 to-dark/40"></div>
            </div>
            <div class="container relative z-10 text-white">
                <div class="max-w-3xl">
                    <h1 class="text-5xl md:text-6xl font-display font-extrabold mb-6">
                        "Experience the Next Era of Spiritual Connection"
                    </h1>
                    <p class="text-xl text-gray-200 mb-10">
                        "SolaceVR blends compassionate theology with cutting-edge AI and immersive VR to re-energize global faith practice for communities worldwide."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a href="#demo" class="btn-primary">"Book a Demo"</a>
                        <a href="#research" class="btn-secondary">"Download Research Preview"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
