//! Landing page component
//!
//! The whole site is this one page:
//! - SEO meta tags and structured data
//! - Fixed background with the generated hero skyline
//! - Header with mobile menu, hero and trust strip
//! - Features, ad samples, how-it-works, lead form
//! - FAQ accordion, testimonials and footer
//! - Floating WhatsApp button and mobile call-to-action bar
//!
//! Sections fade in on scroll through the reveal context provided here.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::contact::{GENERAL_ENQUIRY, STRATEGY_CALL_ENQUIRY, WHATSAPP_NUMBER};
use crate::core::content::{
    AGENCY_NAME, FAQ, FEATURES, Feature, STEPS, TESTIMONIALS, TRUST_STATS, Testimonial,
};
use crate::core::{RevealOptions, WhatsAppLink};
use crate::ui::ad_samples::AdSamples;
use crate::ui::background::BackgroundLayer;
use crate::ui::common::Deferred;
use crate::ui::icon::{Icon, icons};
use crate::ui::image_store::provide_image_store;
use crate::ui::lead_form::LeadForm;
use crate::ui::reveal::{Reveal, provide_reveal_context};

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_image_store();
    provide_reveal_context(RevealOptions::default());

    view! {
        <SeoMeta />

        <div class="min-h-screen bg-slate-950 text-white selection:bg-emerald-500 selection:text-white relative overflow-x-hidden">
            <BackgroundLayer />

            <div class="relative z-10">
                <Header />
                <main>
                    <Hero />
                    <TrustStrip />
                    <FeaturesSection />
                    <AdSamples />
                    <Deferred cards=4>
                        <HowItWorks />
                    </Deferred>
                    <LeadForm />
                    <FaqSection />
                    <Deferred>
                        <TestimonialsSection />
                    </Deferred>
                    <Footer />
                </main>
            </div>

            <FloatingWhatsApp />
            <MobileCta />

            <LandingStyles />
        </div>
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="SR Digital - Real Estate Lead Generation Agency | Gurgaon & Noida" />

        <Meta name="description" content="Performance marketing for real estate developers and channel partners. Google and Meta campaigns, AI-generated ad creatives and verified buyer leads delivered on WhatsApp." />
        <Meta name="keywords" content="real estate leads, property marketing, Gurgaon, Noida, Google Ads, Meta Ads, real estate agency, lead generation" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="SR Digital - Real Estate Lead Generation" />
        <Meta property="og:description" content="Verified buyer leads for real estate projects in Gurgaon and Noida." />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="SR Digital - Real Estate Lead Generation" />

        <Link rel="canonical" href="/" />

        <script type="application/ld+json" inner_html=structured_data()></script>
    }
}

/// JSON-LD describing the agency
fn structured_data() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "ProfessionalService",
        "name": AGENCY_NAME,
        "description": "Real estate lead generation and performance marketing agency",
        "telephone": format!("+{}", WHATSAPP_NUMBER),
        "areaServed": ["Gurgaon", "Noida", "Delhi NCR"],
    })
    .to_string()
}

/// Header component with mobile menu support
#[component]
fn Header() -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let call_link = WhatsAppLink::agency(STRATEGY_CALL_ENQUIRY).url();

    let nav = [
        ("#features", "Features"),
        ("#samples", "Ad Samples"),
        ("#process", "Process"),
        ("#faq", "FAQ"),
    ];

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/70 backdrop-blur-md border-b border-white/5">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a href="#" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold">{AGENCY_NAME}</span>
                    </a>

                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-5">
                            {nav.into_iter().map(|(href, label)| view! {
                                <a href=href class="text-sm font-medium text-slate-400 hover:text-white transition-colors">
                                    {label}
                                </a>
                            }).collect_view()}
                        </nav>
                        <a
                            href=call_link.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="px-5 py-2.5 bg-emerald-600 hover:bg-emerald-500 rounded-xl text-sm font-bold transition-all emerald-glow"
                        >
                            "Book Strategy Call"
                        </a>
                    </div>

                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-white/10 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>

                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-white/5">
                        {nav.into_iter().map(|(href, label)| view! {
                            <a
                                href=href
                                class="block px-4 py-2 text-sm font-medium text-slate-400 hover:text-white hover:bg-white/5 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                        <a
                            href=call_link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="block mx-4 mt-2 px-4 py-3 bg-emerald-600 rounded-xl text-center text-sm font-bold"
                        >
                            "Book Strategy Call"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let enquiry_link = WhatsAppLink::agency(GENERAL_ENQUIRY).url();

    view! {
        <section class="min-h-screen flex items-center justify-center relative pt-24 pb-16 px-4">
            <div class="text-center max-w-5xl mx-auto">
                <span class="inline-flex items-center gap-2 px-4 py-1.5 mb-8 rounded-full bg-emerald-500/10 border border-emerald-500/20 text-emerald-400 text-xs font-bold uppercase tracking-widest landing-fade-in-up">
                    <Icon name=icons::SPARKLES class="w-4 h-4" />
                    "Gurgaon & Noida's Real Estate Growth Partner"
                </span>
                <h1 class="text-4xl sm:text-6xl lg:text-7xl font-black mb-6 tracking-tight leading-[1.05] landing-fade-in-up landing-delay-200">
                    "Sell Out Your Project With "
                    <span class="text-gradient">"Verified Buyer Leads"</span>
                </h1>
                <p class="text-lg sm:text-xl text-slate-400 max-w-2xl mx-auto mb-10 leading-relaxed landing-fade-in-up landing-delay-400">
                    "Google and Meta campaigns built only for real estate. AI-generated creatives, hyper-local targeting and leads delivered straight to your WhatsApp."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 landing-fade-in-up landing-delay-400">
                    <a
                        href=enquiry_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-4 bg-emerald-600 hover:bg-emerald-500 rounded-2xl font-bold text-lg transition-all emerald-glow"
                    >
                        <Icon name=icons::WHATSAPP class="w-5 h-5" />
                        "Get More Leads"
                    </a>
                    <a
                        href="#samples"
                        class="inline-flex items-center gap-2 px-8 py-4 border border-white/15 hover:border-white/30 rounded-2xl font-bold text-lg transition-all"
                    >
                        "See Ad Samples"
                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                    </a>
                </div>

                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-slate-500" />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TrustStrip() -> impl IntoView {
    view! {
        <section class="py-10 px-4 border-y border-white/5 bg-white/[0.02]">
            <Reveal class="max-w-6xl mx-auto grid grid-cols-2 md:grid-cols-4 gap-8 text-center">
                {TRUST_STATS.into_iter().map(|stat| view! {
                    <div>
                        <p class="text-3xl md:text-4xl font-black text-emerald-400">{stat.value}</p>
                        <p class="text-xs text-slate-500 font-bold uppercase tracking-widest mt-1">{stat.label}</p>
                    </div>
                }).collect_view()}
            </Reveal>
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">
                        "Why Developers "<span class="text-emerald-500">"Choose Us"</span>
                    </h2>
                    <p class="text-lg text-slate-400 max-w-2xl mx-auto">
                        "Everything between your inventory sheet and a booked site visit, run by people who only do real estate."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-3 gap-8">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <Reveal class="glass p-6 rounded-3xl border border-white/5 hover:border-emerald-500/30 transition-all duration-300 hover:-translate-y-1">
            <div class="w-12 h-12 rounded-xl bg-emerald-500/10 flex items-center justify-center mb-4 text-emerald-400">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="text-lg font-semibold mb-2">{feature.title}</h3>
            <p class="text-slate-400 text-sm leading-relaxed">{feature.description}</p>
        </Reveal>
    }
}

#[component]
fn HowItWorks() -> impl IntoView {
    view! {
        <section id="process" class="py-24 px-4">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">
                        "From Brief to "<span class="text-emerald-500">"Site Visits"</span>
                    </h2>
                    <p class="text-lg text-slate-400">"Four steps, live in 72 hours."</p>
                </Reveal>

                <div class="grid md:grid-cols-4 gap-6">
                    {STEPS.into_iter().map(|step| view! {
                        <Reveal class="relative p-6 rounded-3xl border border-white/5 bg-white/[0.02]">
                            <span class="text-5xl font-black text-emerald-500/20">{step.number}</span>
                            <h3 class="text-lg font-bold mt-2 mb-2">{step.title}</h3>
                            <p class="text-sm text-slate-400 leading-relaxed">{step.description}</p>
                        </Reveal>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-24 px-4">
            <div class="max-w-3xl mx-auto">
                <Reveal class="text-center mb-12">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">
                        "Frequently Asked "<span class="text-emerald-500">"Questions"</span>
                    </h2>
                </Reveal>
                <div class="space-y-4">
                    {FAQ.into_iter().map(|entry| view! {
                        <FaqItem question=entry.question answer=entry.answer />
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <Reveal class="border border-white/10 rounded-2xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-white/5 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get().to_string()
            >
                <span class="font-semibold">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-slate-500 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-slate-400 leading-relaxed">{answer}</div>
            </div>
        </Reveal>
    }
}

#[component]
fn TestimonialsSection() -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-slate-900/40">
            <div class="max-w-6xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold">
                        "Trusted by "<span class="text-emerald-500">"Builders"</span>
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS.into_iter().map(|t| view! { <TestimonialCard testimonial=t /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <Reveal class="glass p-8 rounded-3xl border border-white/5">
            <div class="flex gap-1 mb-4 text-amber-400">
                {(0..5).map(|_| view! { <Icon name=icons::STAR class="w-4 h-4" /> }).collect_view()}
            </div>
            <p class="text-slate-300 leading-relaxed mb-6">{format!("\u{201c}{}\u{201d}", testimonial.quote)}</p>
            <p class="font-bold">{testimonial.name}</p>
            <p class="text-xs text-slate-500">{testimonial.role}</p>
        </Reveal>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-9 h-9 rounded-xl bg-emerald-600 flex items-center justify-center font-black text-sm">
            "SR"
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let enquiry_link = WhatsAppLink::agency(GENERAL_ENQUIRY).url();

    view! {
        <footer class="py-12 border-t border-white/5 pb-28 md:pb-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold">{AGENCY_NAME}</span>
                        </div>
                        <p class="text-sm text-slate-400 max-w-md">
                            "Performance marketing for real estate developers and channel partners across Delhi NCR."
                        </p>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-4">"Contact"</h4>
                        <a
                            href=enquiry_link
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-sm text-slate-400 hover:text-emerald-400 transition-colors flex items-center gap-2"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4" />
                            {format!("+{}", WHATSAPP_NUMBER)}
                        </a>
                    </div>
                </div>
                <div class="pt-8 border-t border-white/5 text-sm text-slate-500">
                    {format!("© 2025 {}. All rights reserved.", AGENCY_NAME)}
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FloatingWhatsApp() -> impl IntoView {
    view! {
        <a
            href=WhatsAppLink::agency(GENERAL_ENQUIRY).url()
            target="_blank"
            rel="noopener noreferrer"
            class="hidden md:flex fixed bottom-8 right-8 z-50 w-16 h-16 bg-emerald-500 rounded-full items-center justify-center shadow-2xl pulse-whatsapp hover:scale-110 transition-transform"
            aria-label="Chat on WhatsApp"
        >
            <Icon name=icons::WHATSAPP class="w-8 h-8 text-white" />
        </a>
    }
}

#[component]
fn MobileCta() -> impl IntoView {
    view! {
        <div class="md:hidden fixed bottom-0 left-0 right-0 z-50 p-3 bg-slate-950/90 backdrop-blur-md border-t border-white/10 flex gap-3">
            <a
                href=format!("tel:+{}", WHATSAPP_NUMBER)
                class="flex-1 py-3 rounded-xl border border-white/15 text-center font-bold text-sm flex items-center justify-center gap-2"
            >
                <Icon name=icons::PHONE class="w-4 h-4" />
                "Call"
            </a>
            <a
                href=WhatsAppLink::agency(GENERAL_ENQUIRY).url()
                target="_blank"
                rel="noopener noreferrer"
                class="flex-[2] py-3 rounded-xl bg-emerald-600 text-center font-bold text-sm flex items-center justify-center gap-2"
            >
                <Icon name=icons::WHATSAPP class="w-4 h-4" />
                "WhatsApp Us"
            </a>
        </div>
    }
}

#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .glass {
                background: rgba(255, 255, 255, 0.03);
                backdrop-filter: blur(12px);
            }
            .emerald-glow {
                box-shadow: 0 0 30px rgba(16, 185, 129, 0.35);
            }
            .text-gradient {
                background: linear-gradient(90deg, #34d399, #22d3ee);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }
            .bg-dot-grid {
                background-image: radial-gradient(#ffffff 1px, transparent 1px);
                background-size: 40px 40px;
            }

            /* Reveal on scroll */
            .reveal {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }
            .reveal.active {
                opacity: 1;
                transform: translateY(0);
            }
            @media (prefers-reduced-motion: reduce) {
                .reveal { opacity: 1; transform: none; transition: none; }
            }

            /* Hero entrance */
            @keyframes landing-fade-in-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }
            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }
            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Generated visual loading */
            @keyframes shimmer {
                from { transform: translateX(-100%); }
                to { transform: translateX(100%); }
            }
            .shimmer-effect::after,
            .skeleton-shimmer {
                position: absolute;
                inset: 0;
                background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.06), transparent);
                animation: shimmer 1.6s infinite;
            }
            .shimmer-effect::after { content: ""; }

            .skeleton {
                position: relative;
                overflow: hidden;
                background: rgba(255, 255, 255, 0.05);
                border-radius: 9999px;
            }
            .skeleton.rounded-2xl { border-radius: 1rem; }

            .spinner-container {
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 0.75rem;
            }
            .spinner {
                border-radius: 9999px;
                border: 2px solid rgba(16, 185, 129, 0.2);
                border-top-color: #10b981;
                animation: spinner-rotate 1s linear infinite;
            }
            @keyframes spinner-rotate {
                to { transform: rotate(360deg); }
            }
            .spinner-md { width: 2rem; height: 2rem; }
            .spinner-lg { width: 4rem; height: 4rem; }

            @keyframes pulse-whatsapp {
                0% { box-shadow: 0 0 0 0 rgba(16, 185, 129, 0.6); }
                70% { box-shadow: 0 0 0 18px rgba(16, 185, 129, 0); }
                100% { box-shadow: 0 0 0 0 rgba(16, 185, 129, 0); }
            }
            .pulse-whatsapp {
                animation: pulse-whatsapp 2s infinite;
            }
            "#
        </style>
        <noscript>
            <style>".reveal { opacity: 1; transform: none; }"</style>
        </noscript>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_names_agency() {
        let data: serde_json::Value = serde_json::from_str(&structured_data()).unwrap();
        assert_eq!(data["name"], AGENCY_NAME);
        assert_eq!(data["telephone"], "+919211841593");
    }
}
