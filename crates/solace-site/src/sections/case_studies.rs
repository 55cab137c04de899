//! Case-study carousel

use crate::browser::BrowserScheduler;
use crate::components::MetricCard;
use crate::hooks::use_observable;
use leptos::*;
use solace_core::{Carousel, SiteConfig};
use tracing::warn;

struct CaseStudy {
    title: &'static str,
    description: &'static str,
    quote: &'static str,
    author: &'static str,
    role: &'static str,
    metrics: [(&'static str, &'static str); 3],
    image: &'static str,
    alt: &'static str,
}

static CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        title: "LDS Ward Digital Transformation",
        description: "A Mormon ward in Salt Lake City integrated SolaceVR's AI spiritual agents into their youth ministry, creating a safe space for young members to explore their faith.",
        quote: "The combination of AI-guided discussion and immersive sacred spaces has revolutionized how our youth engage with the gospel.",
        author: "Bishop David Henderson",
        role: "Ward President",
        metrics: [
            ("68%", "Increase in Youth Participation"),
            ("4.8/5", "Average User Satisfaction Score"),
            ("32hrs", "Weekly Hours of Engagement"),
        ],
        image: "https://images.unsplash.com/photo-1473177104440-ffee2f376098",
        alt: "Clean, modern church interior",
    },
    CaseStudy {
        title: "ELCA Parish Community Building",
        description: "An Evangelical Lutheran Church in America parish used SolaceVR's virtual sacred spaces to maintain connection with homebound members and expand their reach.",
        quote: "SolaceVR has enabled us to create a truly inclusive worship community that extends beyond our physical building's limitations.",
        author: "Rev. Sarah Johnson",
        role: "Parish Pastor",
        metrics: [
            ("41%", "New Remote Participants"),
            ("28%", "Administrative Time Saved"),
            ("3.2x", "Times Higher Engagement Rate"),
        ],
        image: "https://images.unsplash.com/photo-1525104171570-308e54169ae1",
        alt: "Traditional church pews",
    },
    CaseStudy {
        title: "Catholic Retreat Center Integration",
        description: "A Catholic retreat center in Boston implemented SolaceVR's complete suite to extend their ministry beyond physical retreats, creating year-round engagement.",
        quote: "The analytics dashboard has transformed how we understand our community's spiritual needs and helped us create more meaningful programming.",
        author: "Sister Maria Thomasina",
        role: "Retreat Director",
        metrics: [
            ("234", "Monthly Virtual Retreatants"),
            ("52", "Weeks of Extended Engagement"),
            ("19%", "Rise in Digital Engagement"),
        ],
        image: "https://images.unsplash.com/photo-1569758884145-6a2e8a00e539",
        alt: "Ornate Catholic church interior",
    },
    CaseStudy {
        title: "Interfaith College Campus Ministry",
        description: "A diverse campus ministry at Stanford used SolaceVR to create interfaith dialogue spaces and provide personalized spiritual guidance for students.",
        quote: "In our diverse campus community, SolaceVR has helped create common ground while respecting the unique theological perspectives of different faith traditions.",
        author: "Dr. Amrita Patel",
        role: "Interfaith Program Director",
        metrics: [
            ("8", "Faith Traditions Represented"),
            ("72%", "Student Retention Rate"),
            ("3", "Campus Awards for Innovation"),
        ],
        image: "https://images.unsplash.com/photo-1745647591090-6dcac361600d",
        alt: "Diverse religious gathering",
    },
];

#[component]
pub fn CaseStudiesSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let carousel = match Carousel::new(CASE_STUDIES.len()) {
        Ok(carousel) => carousel,
        Err(err) => {
            warn!(error = %err, "case study carousel unavailable");
            return ().into_view();
        }
    };
    carousel.start_autoplay(&BrowserScheduler, config.carousel_autoplay());
    let active = use_observable(carousel.index());
    // Dropped with the owner, which stops the autoplay timer.
    let carousel = store_value(carousel);

    view! {
        <section class="section bg-dark text-white" id="case-studies">
            <div class="container">
                <div class="text-center max-w-4xl mx-auto mb-16">
                    <p class="text-primary font-medium tracking-widest uppercase mb-2">"Case Studies"</p>
                    <h2 class="text-4xl font-bold mb-6">"Success Stories From Our Community"</h2>
                    <p class="text-gray-300">
                        "See how religious organizations worldwide are using SolaceVR to transform their communities, deepen engagement, and expand their reach."
                    </p>
                </div>

                <div
                    class="relative max-w-6xl mx-auto"
                    on:mouseenter=move |_| carousel.with_value(|c| c.set_hovered(true))
                    on:mouseleave=move |_| carousel.with_value(|c| c.set_hovered(false))
                >
                    {move || {
                        let study = &CASE_STUDIES[active.get() % CASE_STUDIES.len()];
                        view! {
                            <div class="grid md:grid-cols-2 gap-10 items-center">
                                <div class="rounded-2xl overflow-hidden h-96">
                                    <img src=study.image alt=study.alt class="w-full h-full object-cover"/>
                                </div>
                                <div>
                                    <h3 class="text-3xl font-bold mb-4">{study.title}</h3>
                                    <p class="text-gray-300 mb-6">{study.description}</p>
                                    <blockquote class="border-l-4 border-primary pl-4 italic mb-4">
                                        "\""{study.quote}"\""
                                    </blockquote>
                                    <p class="font-semibold">{study.author}</p>
                                    <p class="text-sm text-gray-400 mb-8">{study.role}</p>
                                    <div class="grid grid-cols-3 gap-4">
                                        {study.metrics.iter().map(|(value, label)| view! {
                                            <MetricCard value=*value label=*label/>
                                        }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </div>
                        }
                    }}

                    <div class="flex items-center justify-center mt-10 space-x-4">
                        <button
                            class="w-10 h-10 rounded-full bg-white/10 hover:bg-white/20"
                            aria-label="Previous case study"
                            on:click=move |_| carousel.with_value(|c| c.prev())
                        >
                            "‹"
                        </button>
                        {(0..CASE_STUDIES.len()).map(|index| view! {
                            <button
                                class=move || if active.get() == index {
                                    "w-3 h-3 rounded-full bg-primary"
                                } else {
                                    "w-3 h-3 rounded-full bg-white/30"
                                }
                                aria-label=format!("Show case study {}", index + 1)
                                on:click=move |_| carousel.with_value(|c| c.select(index))
                            ></button>
                        }).collect::<Vec<_>>()}
                        <button
                            class="w-10 h-10 rounded-full bg-white/10 hover:bg-white/20"
                            aria-label="Next case study"
                            on:click=move |_| carousel.with_value(|c| c.next())
                        >
                            "›"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
    .into_view()
}
