use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-light">
            <div class="text-center px-4">
                <h1 class="text-8xl font-display font-extrabold text-primary mb-4">"404"</h1>
                <h2 class="text-3xl font-bold mb-6">"Page Not Found"</h2>
                <p class="text-gray-600 italic max-w-xl mx-auto mb-10">
                    "\"The universe is full of magical things patiently waiting for our wits to grow sharper.\""
                </p>
                <a href="/" class="btn-primary">"Return Home"</a>
            </div>
        </div>
    }
}
