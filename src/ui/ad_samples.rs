//! Ad samples section
//!
//! Two tabs of example ads. The Google tab is static copy; opening the Meta
//! tab asks the image store for a generated preview of every Meta sample.

use leptos::prelude::*;

use crate::core::contact::CUSTOM_CREATIVE_ENQUIRY;
use crate::core::content::{
    AD_DISPLAY_URL, AGENCY_NAME, GOOGLE_SAMPLES, GoogleAdSample, META_SAMPLES, MetaAdSample,
};
use crate::core::{GenerationRequest, ImageServiceStatus, ImageStatus, WhatsAppLink};
use crate::ui::common::{Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::image_store::{use_image_store, use_view_lifetime};
use crate::ui::reveal::Reveal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdTab {
    #[default]
    Google,
    Meta,
}

impl AdTab {
    pub const ALL: [AdTab; 2] = [AdTab::Google, AdTab::Meta];

    pub fn label(&self) -> &'static str {
        match self {
            AdTab::Google => "Google Search",
            AdTab::Meta => "Meta (FB/IG)",
        }
    }
}

/// Text shown in an empty preview slot
pub fn placeholder_text(service: ImageServiceStatus) -> &'static str {
    if service.is_enabled() {
        "Click tab to load visuals"
    } else {
        "Configuration Required"
    }
}

/// Ad samples section with Google / Meta tabs
#[component]
pub fn AdSamples() -> impl IntoView {
    let store = use_image_store();
    let lifetime = use_view_lifetime();
    let active_tab = RwSignal::new(AdTab::default());

    Effect::new(move |_| {
        if active_tab.get() == AdTab::Meta {
            for sample in META_SAMPLES {
                store.ensure(
                    GenerationRequest::new(sample.id, sample.prompt),
                    lifetime.clone(),
                );
            }
        }
    });

    let creative_link = WhatsAppLink::agency(CUSTOM_CREATIVE_ENQUIRY).url();

    view! {
        <section id="samples" class="py-24 px-4 md:px-8 bg-slate-900/40">
            <div class="max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold mb-4">
                        "High-Converting "<span class="text-emerald-500">"Ad Samples"</span>
                    </h2>
                    <p class="text-slate-400 max-w-2xl mx-auto">
                        "We don't just run ads; we write copy that sells. Below are real-world samples featuring AI-generated hyper-realistic visuals for maximum CTR."
                    </p>
                    {move || store.notice().map(|notice| view! {
                        <p class="mt-4 text-red-400 text-xs font-bold uppercase tracking-widest" role="alert">
                            {notice}
                        </p>
                    })}
                </Reveal>

                <div class="flex justify-center mb-12">
                    <div class="inline-flex p-1 bg-white/5 rounded-2xl border border-white/10" role="tablist">
                        {AdTab::ALL.into_iter().map(|tab| view! {
                            <button
                                class="px-8 py-3 rounded-xl font-bold transition-all"
                                class=("bg-emerald-600", move || active_tab.get() == tab)
                                class=("text-white", move || active_tab.get() == tab)
                                class=("emerald-glow", move || active_tab.get() == tab)
                                class=("text-slate-400", move || active_tab.get() != tab)
                                role="tab"
                                aria-selected=move || (active_tab.get() == tab).to_string()
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>

                <Reveal class="grid lg:grid-cols-2 gap-8">
                    {move || match active_tab.get() {
                        AdTab::Google => GOOGLE_SAMPLES
                            .into_iter()
                            .map(|sample| view! { <GoogleAdCard sample=sample /> })
                            .collect_view()
                            .into_any(),
                        AdTab::Meta => META_SAMPLES
                            .into_iter()
                            .map(|sample| view! { <MetaAdCard sample=sample /> })
                            .collect_view()
                            .into_any(),
                    }}
                </Reveal>

                <Reveal class="mt-12 text-center">
                    <p class="text-slate-500 text-sm mb-6 italic">
                        "Above visuals are generated by our proprietary Real Estate Creative Engine."
                    </p>
                    <a
                        href=creative_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 text-emerald-400 font-bold hover:text-emerald-300 transition-all border-b border-emerald-500/30 pb-1"
                    >
                        "Get Custom AI Creative for Your Project"
                        <Icon name=icons::ARROW_RIGHT class="w-4 h-4" />
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn GoogleAdCard(sample: GoogleAdSample) -> impl IntoView {
    view! {
        <article class="glass p-8 rounded-3xl border border-white/5 hover:border-emerald-500/30 transition-all group" aria-label=sample.title>
            <div class="flex items-center gap-2 mb-4">
                <span class="text-[10px] font-black bg-slate-700 px-1.5 py-0.5 rounded text-white">"Ad"</span>
                <span class="text-xs text-slate-500">{AD_DISPLAY_URL}</span>
            </div>
            <h4 class="text-xl font-bold text-blue-400 mb-2 group-hover:underline cursor-pointer">{sample.headline}</h4>
            <p class="text-slate-400 text-sm mb-4 leading-relaxed">{sample.description}</p>
            <div class="flex flex-wrap gap-4 pt-4 border-t border-white/5">
                {sample.extensions.iter().map(|ext| view! {
                    <span class="text-xs font-semibold text-emerald-500 flex items-center gap-1">
                        <span class="w-1 h-1 bg-emerald-500 rounded-full"></span>
                        {*ext}
                    </span>
                }).collect_view()}
            </div>
        </article>
    }
}

#[component]
fn MetaAdCard(sample: MetaAdSample) -> impl IntoView {
    view! {
        <article class="glass rounded-3xl border border-white/5 overflow-hidden transition-all hover:border-emerald-500/30" aria-label=sample.title>
            <div class="bg-slate-800/50 p-4 border-b border-white/5 flex items-center gap-3">
                <div class="w-8 h-8 rounded-full bg-emerald-600 flex items-center justify-center font-bold text-xs">"SR"</div>
                <div class="flex flex-col">
                    <span class="font-bold text-xs leading-none mb-0.5">{format!("{} - Real Estate", AGENCY_NAME)}</span>
                    <span class="text-[9px] text-slate-500 font-bold uppercase tracking-tighter">"Sponsored"</span>
                </div>
            </div>
            <div class="p-6">
                <p class="text-slate-300 text-sm font-medium mb-3 whitespace-pre-line leading-relaxed">{sample.hook}</p>

                <MetaVisual sample=sample />

                <p class="text-slate-400 text-xs mb-6 leading-relaxed whitespace-pre-line italic opacity-80">{sample.body}</p>

                <div class="flex items-center justify-between bg-white/5 p-4 rounded-xl border border-white/5">
                    <div class="flex flex-col">
                        <span class="text-[10px] text-slate-500 uppercase font-bold tracking-widest leading-none mb-1">
                            {format!("{} Premium", AGENCY_NAME)}
                        </span>
                        <span class="font-bold text-white text-sm">"Download Project Plan"</span>
                    </div>
                    <button class="px-5 py-2.5 bg-slate-700 hover:bg-emerald-600 text-white text-xs font-black rounded-lg transition-all active:scale-95">
                        {sample.cta}
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Generated preview of one Meta sample: loading shimmer, the image with its
/// badges, or a placeholder
#[component]
fn MetaVisual(sample: MetaAdSample) -> impl IntoView {
    let store = use_image_store();
    let placeholder = placeholder_text(store.service());

    view! {
        <div class="relative aspect-video bg-slate-800 rounded-xl mb-4 flex items-center justify-center overflow-hidden border border-white/5 shadow-inner">
            {move || match store.status(sample.id) {
                ImageStatus::Loading => view! {
                    <div class="absolute inset-0 flex flex-col p-6" aria-busy="true">
                        <div class="w-full h-full rounded-lg bg-white/5 shimmer-effect relative overflow-hidden flex flex-col items-center justify-center gap-4">
                            <Spinner size=SpinnerSize::Large />
                            <span class="text-[10px] text-emerald-500 font-black uppercase tracking-[0.2em] animate-pulse">
                                "SR Creative Engine"
                            </span>
                        </div>
                    </div>
                }.into_any(),
                ImageStatus::Ready(data_url) => view! {
                    <img
                        src=data_url
                        alt="Property Visual"
                        class="w-full h-full object-cover transition-transform duration-700 hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-slate-900/60 via-transparent to-transparent"></div>
                    {sample.kind.is_video().then(|| view! {
                        <div class="absolute inset-0 flex items-center justify-center">
                            <div class="w-16 h-16 bg-white/10 backdrop-blur-md rounded-full flex items-center justify-center border border-white/20 pulse-whatsapp cursor-pointer hover:bg-white/20 transition-all z-20">
                                <Icon name=icons::PLAY class="w-8 h-8 text-white ml-1" />
                            </div>
                        </div>
                    })}
                    <span
                        class="absolute top-4 text-[8px] font-bold text-white px-2 py-0.5 rounded uppercase z-10"
                        class=("right-4", sample.kind.is_video())
                        class=("bg-red-600", sample.kind.is_video())
                        class=("left-4", !sample.kind.is_video())
                        class=("bg-emerald-600", !sample.kind.is_video())
                    >
                        {sample.kind.badge()}
                    </span>
                    <div class="absolute bottom-4 left-4 z-10">
                        <div class="glass px-3 py-1.5 rounded-lg border border-white/10">
                            <p class="text-[8px] font-bold uppercase tracking-widest text-emerald-400 leading-none mb-0.5">"Verified Asset"</p>
                            <p class="text-sm font-black text-white leading-none">"Gurgaon Portfolio"</p>
                        </div>
                    </div>
                }.into_any(),
                ImageStatus::Empty => view! {
                    <div class="absolute inset-0 bg-gradient-to-br from-emerald-500/10 to-transparent flex flex-col items-center justify-center p-6 text-center">
                        <Icon name=icons::CREATIVE class="w-12 h-12 text-white/5 mb-2" />
                        <p class="text-[10px] text-slate-600 font-bold uppercase tracking-widest">{placeholder}</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
