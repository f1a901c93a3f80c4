//! Static page content
//!
//! Copy for every section of the landing page, plus the prompts used to
//! generate the hero background and the Meta ad previews. The server uses
//! [`visual_prompt`] to refuse generation requests for anything not listed here.

/// Cache key of the hero background image
pub const HERO_KEY: &str = "hero";

pub const HERO_PROMPT: &str = "Aerial wide-angle cinematic shot of a futuristic luxury residential skyline in Gurgaon. High-end architectural photography, glass skyscrapers reflecting a deep golden hour sunset, volumetric lighting, emerald and amber color palette, sharp focus, 8k resolution, shot on Hasselblad.";

pub const AGENCY_NAME: &str = "SR Digital";

pub const AD_DISPLAY_URL: &str = "www.property-expert.com";

/// Google Search ad sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoogleAdSample {
    pub id: &'static str,
    pub title: &'static str,
    pub headline: &'static str,
    pub description: &'static str,
    pub extensions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAdKind {
    Image,
    Video,
}

impl MetaAdKind {
    /// Badge shown over a loaded preview
    pub fn badge(&self) -> &'static str {
        match self {
            MetaAdKind::Image => "New Launch",
            MetaAdKind::Video => "Live Tour",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MetaAdKind::Video)
    }
}

/// Meta (Facebook/Instagram) ad sample with a generated preview
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaAdSample {
    pub id: &'static str,
    pub kind: MetaAdKind,
    pub title: &'static str,
    pub hook: &'static str,
    pub body: &'static str,
    pub cta: &'static str,
    pub prompt: &'static str,
}

pub const GOOGLE_SAMPLES: [GoogleAdSample; 2] = [
    GoogleAdSample {
        id: "g1",
        title: "Luxury 3/4 BHK in Gurgaon Sector 65",
        headline: "Luxury 3/4 BHK in Sector 65 | Starting at ₹3.5 Cr*",
        description: "Ultra-luxury residences with golf course view. 5-star amenities, sky lounge & modular kitchen. Book a private site visit today. Zero brokerage.",
        extensions: &[
            "Direct From Developer",
            "High ROI Potential",
            "Flexible Payment Plans",
        ],
    },
    GoogleAdSample {
        id: "g2",
        title: "Premium Office Space in Noida",
        headline: "Invest in Premium Office Space | 12% Assured Returns*",
        description: "Prime location in Sector 132, Noida Expressway. Modern architecture, high-speed elevators & ample parking. Units starting from 500 sq.ft.",
        extensions: &["Ready to Move", "High Rental Yield", "Close to Metro"],
    },
];

pub const META_SAMPLES: [MetaAdSample; 2] = [
    MetaAdSample {
        id: "m1",
        kind: MetaAdKind::Image,
        title: "Image Ad: Lifestyle Hook",
        hook: "🏠 Wake up to the view you deserve in Gurgaon...",
        body: "Stop settling for ordinary. Presenting 'The Emerald Towers' in the heart of Sector 65. \n\n✅ Private Balconies\n✅ Olympic-sized Pool\n✅ 3-Tier Security\n\nOnly 5 units remaining at launch price!",
        cta: "Learn More",
        prompt: "Professional architectural exterior shot of a luxury residential skyscraper in Gurgaon from a low-angle drone perspective. Reflective glass facade catching a vibrant pink and orange sunset sky, lush rooftop landscaping, high-end property marketing photography, ultra-realistic, 8k, sharp focus.",
    },
    MetaAdSample {
        id: "m2",
        kind: MetaAdKind::Video,
        title: "Video Ad: Virtual Walkthrough",
        hook: "🎥 Take a 60-second tour of your future home!",
        body: "Experience luxury like never before. Watch the full walkthrough of our premium 4BHK Penthouse in Noida. \n\n📍 Location: Sector 150\n✨ Fully Furnished Options\n💎 Limited Edition Units\n\nClick below to get the full price list on WhatsApp.",
        cta: "Watch More",
        prompt: "High-end interior design shot of a luxury penthouse living room in Noida. Floor-to-ceiling windows with panoramic city views, Italian white marble floors, bespoke walnut furniture, Eames-style lounger, ambient warm afternoon lighting, cinematic interior photography style, 8k, photorealistic.",
    },
];

/// Prompt for a generated visual, if `key` names one
pub fn visual_prompt(key: &str) -> Option<&'static str> {
    if key == HERO_KEY {
        return Some(HERO_PROMPT);
    }
    META_SAMPLES
        .iter()
        .find(|s| s.id == key)
        .map(|s| s.prompt)
}

#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "target",
        title: "Hyper-Local Targeting",
        description: "Reach buyers searching in your exact micro-market, from Golf Course Extension Road to Noida Expressway.",
    },
    Feature {
        icon: "leads",
        title: "Verified Leads Only",
        description: "OTP-verified phone numbers and intent filters, so your sales team calls buyers and not brokers.",
    },
    Feature {
        icon: "creative",
        title: "AI Creative Engine",
        description: "Photoreal project visuals and copy variants generated in hours, tested against each other automatically.",
    },
    Feature {
        icon: "whatsapp",
        title: "WhatsApp Funnels",
        description: "Leads land straight in WhatsApp with brochures, price lists and site-visit slots delivered instantly.",
    },
    Feature {
        icon: "analytics",
        title: "Transparent Reporting",
        description: "Cost per lead, cost per site visit and spend by campaign, updated daily in a shared dashboard.",
    },
    Feature {
        icon: "rera",
        title: "RERA-Compliant Copy",
        description: "Every ad carries the right disclaimers and registration numbers before it goes live.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 4] = [
    Step {
        number: "01",
        title: "Project Audit",
        description: "We study your inventory, pricing and competing launches within a 5 km radius.",
    },
    Step {
        number: "02",
        title: "Creative & Copy",
        description: "Ad copy and AI-generated visuals tailored to each buyer persona.",
    },
    Step {
        number: "03",
        title: "Launch Campaigns",
        description: "Google Search, Meta and YouTube campaigns live within 72 hours.",
    },
    Step {
        number: "04",
        title: "Optimise Daily",
        description: "Budgets move to the ads producing site visits, not just clicks.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TRUST_STATS: [Stat; 4] = [
    Stat {
        value: "₹40 Cr+",
        label: "Ad Spend Managed",
    },
    Stat {
        value: "25,000+",
        label: "Verified Leads",
    },
    Stat {
        value: "60+",
        label: "Projects Launched",
    },
    Stat {
        value: "3.2x",
        label: "Average ROAS",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "How soon will we start receiving leads?",
        answer: "Most campaigns go live within 72 hours of onboarding and start producing enquiries in the first week.",
    },
    FaqEntry {
        question: "What is the minimum ad budget?",
        answer: "We recommend at least ₹1.5 Lakh per month per project so the campaigns gather enough data to optimise.",
    },
    FaqEntry {
        question: "Do you work with brokers or only developers?",
        answer: "Both. Developers get full launch campaigns; channel partners get lead generation for their mandated projects.",
    },
    FaqEntry {
        question: "Who owns the ad accounts?",
        answer: "You do. Campaigns run in accounts registered to your business, and we work as managers on them.",
    },
    FaqEntry {
        question: "How are the AI visuals produced?",
        answer: "Our creative engine generates photoreal renders from your floor plans and location brief, reviewed by our designers before use.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Our Sector 65 launch sold 40 units in six weeks. The WhatsApp funnel alone booked more site visits than our call centre.",
        name: "Rohit Malhotra",
        role: "Sales Head, Gurgaon Developer",
    },
    Testimonial {
        quote: "Cost per lead dropped by half in the second month. Reporting is clear and honest.",
        name: "Neha Kapoor",
        role: "Channel Partner, Noida",
    },
    Testimonial {
        quote: "The AI visuals were ready before our renders came back from the architect.",
        name: "Amit Verma",
        role: "Director, Boutique Builder",
    },
];
