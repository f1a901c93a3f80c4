//! Lead capture form
//!
//! Nothing is posted to the server. A valid submission opens WhatsApp with
//! the lead details prefilled as a message to the agency.

use leptos::prelude::*;

use crate::core::{LeadDetails, ProjectType};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::Reveal;

#[component]
pub fn LeadForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let project_type = RwSignal::new(ProjectType::default());

    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let lead = LeadDetails {
            name: name.get(),
            phone: phone.get(),
            city: city.get(),
            budget: budget.get(),
            project_type: project_type.get(),
        };

        match lead.to_whatsapp_link() {
            Ok(link) => {
                error.set(None);
                submitted.set(true);
                open_in_new_tab(&link.url());
            }
            Err(e) => {
                submitted.set(false);
                error.set(Some(e.to_string()));
            }
        }
    };

    let input_class = "w-full px-4 py-3 bg-white/5 border border-white/10 rounded-xl text-white placeholder-slate-500 \
                       focus:outline-none focus:ring-2 focus:ring-emerald-500 focus:border-transparent transition-colors";

    view! {
        <section id="contact" class="py-24 px-4 md:px-8">
            <Reveal class="max-w-3xl mx-auto glass rounded-[40px] border border-white/10 p-8 md:p-12">
                <div class="text-center mb-10">
                    <h2 class="text-3xl md:text-4xl font-bold mb-3">
                        "Get Your Free "<span class="text-emerald-500">"Lead Strategy"</span>
                    </h2>
                    <p class="text-slate-400">
                        "Tell us about your project. We reply on WhatsApp within 30 minutes."
                    </p>
                </div>

                <form on:submit=on_submit class="space-y-5" novalidate=true>
                    {move || error.get().map(|message| view! {
                        <div class="p-3 bg-red-900/30 border border-red-700 rounded-lg flex items-center gap-2" role="alert">
                            <Icon name=icons::ALERT_CIRCLE class="w-4 h-4 text-red-300" />
                            <p class="text-sm text-red-300">{message}</p>
                        </div>
                    })}

                    <div class="grid md:grid-cols-2 gap-5">
                        <div>
                            <label for="lead-name" class="block text-sm font-medium text-slate-300 mb-1">"Full Name"</label>
                            <input
                                type="text"
                                id="lead-name"
                                name="name"
                                autocomplete="name"
                                placeholder="Your name"
                                class=input_class
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="lead-phone" class="block text-sm font-medium text-slate-300 mb-1">"Mobile Number"</label>
                            <input
                                type="tel"
                                id="lead-phone"
                                name="phone"
                                autocomplete="tel"
                                placeholder="+91 98765 43210"
                                class=input_class
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="lead-city" class="block text-sm font-medium text-slate-300 mb-1">"Project City"</label>
                            <input
                                type="text"
                                id="lead-city"
                                name="city"
                                placeholder="Gurgaon, Noida, ..."
                                class=input_class
                                prop:value=move || city.get()
                                on:input=move |ev| city.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="lead-budget" class="block text-sm font-medium text-slate-300 mb-1">"Monthly Ad Budget"</label>
                            <input
                                type="text"
                                id="lead-budget"
                                name="budget"
                                placeholder="e.g. ₹2 Lakh"
                                class=input_class
                                prop:value=move || budget.get()
                                on:input=move |ev| budget.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <span class="block text-sm font-medium text-slate-300 mb-2">"Project Type"</span>
                        <div class="flex flex-wrap gap-3">
                            {ProjectType::ALL.into_iter().map(|kind| view! {
                                <button
                                    type="button"
                                    class="px-4 py-2 rounded-xl text-sm font-semibold border transition-all"
                                    class=("bg-emerald-600", move || project_type.get() == kind)
                                    class=("border-emerald-500", move || project_type.get() == kind)
                                    class=("border-white/10", move || project_type.get() != kind)
                                    class=("text-slate-400", move || project_type.get() != kind)
                                    aria-pressed=move || (project_type.get() == kind).to_string()
                                    on:click=move |_| project_type.set(kind)
                                >
                                    {kind.display_name()}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>

                    <button
                        type="submit"
                        class="w-full py-4 bg-emerald-600 hover:bg-emerald-500 text-white font-bold rounded-xl transition-all emerald-glow flex items-center justify-center gap-2"
                    >
                        <Icon name=icons::WHATSAPP class="w-5 h-5" />
                        "Send on WhatsApp"
                    </button>

                    <Show when=move || submitted.get()>
                        <p class="text-center text-sm text-emerald-400 flex items-center justify-center gap-2">
                            <Icon name=icons::CHECK class="w-4 h-4" />
                            "WhatsApp opened with your details. Just press send."
                        </p>
                    </Show>
                </form>
            </Reveal>
        </section>
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
        if let Some(Err(e)) = opened {
            leptos::logging::warn!("Failed to open WhatsApp: {:?}", e);
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
