use leptos::prelude::*;

/// Inline stroke icon (24x24 viewBox)
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon_path(name) />
        </svg>
    }
}

/// Path data for `name`; unknown names render a circle
pub fn icon_path(name: &str) -> &'static str {
    match name {
        icons::MENU => "M4 6h16M4 12h16M4 18h16",
        icons::X => "M6 18L18 6M6 6l12 12",
        icons::CHEVRON_DOWN => "M19 9l-7 7-7-7",
        icons::ARROW_RIGHT => "M5 12h14M13 5l7 7-7 7",
        icons::CHECK => "M5 13l4 4L19 7",
        icons::PLAY => "M8 5v14l11-7z",
        icons::PHONE => "M3 5a2 2 0 012-2h3.28a1 1 0 01.95.68l1.5 4.49a1 1 0 01-.5 1.21l-2.26 1.13a11.04 11.04 0 005.52 5.52l1.13-2.26a1 1 0 011.21-.5l4.49 1.5a1 1 0 01.68.95V19a2 2 0 01-2 2h-1C9.72 21 3 14.28 3 6V5z",
        icons::WHATSAPP => "M3 21l1.65-4.95A9 9 0 1112 21a8.96 8.96 0 01-4.4-1.15L3 21zM9 9.5c0 3 2.5 5.5 5.5 5.5l1-1.5-2-1-1 1c-1 -.5-1.5-1-2-2l1-1-1-2L9 9.5z",
        icons::SPARKLES => "M5 3v4M3 5h4M6 17v4M4 19h4M13 3l2.29 6.86L21 12l-5.71 2.14L13 21l-2.29-6.86L5 12l5.71-2.14L13 3z",
        icons::ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        icons::SEARCH => "M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z",
        icons::STAR => "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
        icons::TARGET => "M12 21a9 9 0 100-18 9 9 0 000 18zm0-4a5 5 0 100-10 5 5 0 000 10zm0-4a1 1 0 100-2 1 1 0 000 2z",
        icons::LEADS => "M17 20h5v-2a3 3 0 00-5.36-1.86M17 20H7m10 0v-2c0-.66-.13-1.29-.36-1.86M7 20H2v-2a3 3 0 015.36-1.86M7 20v-2c0-.66.13-1.29.36-1.86m0 0a5 5 0 019.28 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
        icons::CREATIVE => "M4 16l4.59-4.59a2 2 0 012.82 0L16 16m-2-2l1.59-1.59a2 2 0 012.82 0L20 14M14 8h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
        icons::ANALYTICS => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
        icons::SHIELD => "M9 12l2 2 4-4m5.62-4.02A11.96 11.96 0 0112 2.94a11.96 11.96 0 01-8.62 3.04A12.02 12.02 0 003 9c0 5.59 3.82 10.29 9 11.62 5.18-1.33 9-6.03 9-11.62 0-1.04-.13-2.05-.38-3.02z",
        _ => "M12 21a9 9 0 100-18 9 9 0 000 18z",
    }
}

/// Icon names used across the site
pub mod icons {
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const PLAY: &str = "play";
    pub const PHONE: &str = "phone";
    pub const WHATSAPP: &str = "whatsapp";
    pub const SPARKLES: &str = "sparkles";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const SEARCH: &str = "search";
    pub const STAR: &str = "star";
    pub const TARGET: &str = "target";
    pub const LEADS: &str = "leads";
    pub const CREATIVE: &str = "creative";
    pub const ANALYTICS: &str = "analytics";
    pub const SHIELD: &str = "rera";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::FEATURES;

    #[test]
    fn test_every_feature_icon_has_a_path() {
        let fallback = icon_path("no-such-icon");
        for feature in FEATURES {
            assert_ne!(icon_path(feature.icon), fallback, "{}", feature.icon);
        }
    }
}
