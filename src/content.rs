//! Static site content: portfolio niches, feature blocks, pricing tiers,
//! testimonials and the featured carousel. Fixed at build time, never
//! persisted or edited at runtime.

use crate::components::icons::Icon;

#[derive(Debug, PartialEq)]
pub struct NicheVideo {
    pub id: &'static str,
    pub title: &'static str,
    pub cover: &'static str,
    /// `None` marks a slot with no published video yet; such slots show the
    /// static cover instead of a player.
    pub source: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct PortfolioNiche {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub videos: &'static [NicheVideo],
}

#[derive(Debug, PartialEq)]
pub struct FeatureBlock {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub icon: Icon,
}

#[derive(Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub stats: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CarouselVideo {
    pub id: &'static str,
    pub source: &'static str,
}

pub const PORTFOLIO_NICHES: &[PortfolioNiche] = &[
    PortfolioNiche {
        id: "skincare-beauty",
        title: "Skincare / Beauty",
        category: "UGC Ads",
        description: "Trust-building product demos with emotional hooks designed to boost ROAS.",
        thumbnail: "https://picsum.photos/seed/niche-skincare/600/600",
        videos: &[
            NicheVideo {
                id: "v1",
                title: "Morning Routine",
                cover: "https://picsum.photos/seed/skincare-1/400/711",
                source: Some("https://youtube.com/shorts/2uaYce9ywGM"),
            },
            NicheVideo {
                id: "v2",
                title: "Product Reveal",
                cover: "https://picsum.photos/seed/skincare-2/400/711",
                source: Some("https://www.youtube.com/watch?v=QNC6QNscRSQ"),
            },
            NicheVideo {
                id: "v3",
                title: "Before & After",
                cover: "https://picsum.photos/seed/skincare-3/400/711",
                source: Some("https://youtube.com/shorts/SOlfTi_BV8o"),
            },
            NicheVideo {
                id: "v4",
                title: "Customer Review",
                cover: "https://picsum.photos/seed/skincare-4/400/711",
                source: Some("https://youtube.com/shorts/0Y0g6zEtTpc"),
            },
        ],
    },
    PortfolioNiche {
        id: "fitness-health",
        title: "Fitness / Health",
        category: "Performance Ads",
        description: "Performance-driven transformation angles and pain-point hooks for wellness brands.",
        thumbnail: "https://picsum.photos/seed/niche-fitness/600/600",
        videos: &[
            NicheVideo {
                id: "v1",
                title: "Workout Hook",
                cover: "https://picsum.photos/seed/fitness-1/400/711",
                source: Some("https://youtube.com/shorts/qC9Ms59WRQQ"),
            },
            NicheVideo {
                id: "v2",
                title: "Supplement Mix",
                cover: "https://picsum.photos/seed/fitness-2/400/711",
                source: Some("https://youtube.com/shorts/XPCa5uOsfsw"),
            },
            NicheVideo {
                id: "v3",
                title: "Transformation",
                cover: "https://picsum.photos/seed/fitness-3/400/711",
                source: None,
            },
            NicheVideo {
                id: "v4",
                title: "Expert Advice",
                cover: "https://picsum.photos/seed/fitness-4/400/711",
                source: None,
            },
        ],
    },
    PortfolioNiche {
        id: "tech-gadgets",
        title: "Tech / Gadgets",
        category: "Product Demo",
        description: "Scroll-stopping reviews and feature demos that simplify complex products.",
        thumbnail: "https://picsum.photos/seed/niche-tech/600/600",
        videos: &[
            NicheVideo {
                id: "v1",
                title: "Unboxing",
                cover: "https://picsum.photos/seed/tech-1/400/711",
                source: Some("https://youtube.com/shorts/MRBp0-_sYR8"),
            },
            NicheVideo {
                id: "v2",
                title: "Feature Highlight",
                cover: "https://picsum.photos/seed/tech-2/400/711",
                source: Some("https://youtube.com/shorts/Kaim0ETo3a4"),
            },
            NicheVideo {
                id: "v3",
                title: "Problem Solver",
                cover: "https://picsum.photos/seed/tech-3/400/711",
                source: Some("https://youtube.com/shorts/Z5UWUoXBFYg"),
            },
            NicheVideo {
                id: "v4",
                title: "Tech Review",
                cover: "https://picsum.photos/seed/tech-4/400/711",
                source: None,
            },
        ],
    },
    PortfolioNiche {
        id: "fashion-jewelry",
        title: "Fashion / Jewelry",
        category: "Lifestyle Ads",
        description: "Aesthetic lifestyle creatives with premium visual appeal and strong hooks.",
        thumbnail: "https://picsum.photos/seed/niche-fashion/600/600",
        videos: &[
            NicheVideo {
                id: "v1",
                title: "OOTD Hook",
                cover: "https://picsum.photos/seed/fashion-1/400/711",
                source: Some("https://youtube.com/shorts/-6nk2lzfUiY"),
            },
            NicheVideo {
                id: "v2",
                title: "Close-up Detail",
                cover: "https://picsum.photos/seed/fashion-2/400/711",
                source: None,
            },
            NicheVideo {
                id: "v3",
                title: "Styling Tips",
                cover: "https://picsum.photos/seed/fashion-3/400/711",
                source: None,
            },
            NicheVideo {
                id: "v4",
                title: "Brand Story",
                cover: "https://picsum.photos/seed/fashion-4/400/711",
                source: None,
            },
        ],
    },
    PortfolioNiche {
        id: "ecommerce-product-ads",
        title: "Dropshipping / Ecommerce",
        category: "Direct Response",
        description: "Direct-response ads optimized for TikTok & Meta with problem-solution structure.",
        thumbnail: "https://picsum.photos/seed/niche-ecommerce/600/600",
        videos: &[
            NicheVideo {
                id: "v1",
                title: "Hook Test A",
                cover: "https://picsum.photos/seed/ecommerce-1/400/711",
                source: Some("https://www.youtube.com/embed/k4kGRf6HhWs?autoplay=1&mute=1&loop=1&playlist=k4kGRf6HhWs&modestbranding=1&rel=0"),
            },
            NicheVideo {
                id: "v2",
                title: "Social Proof",
                cover: "https://picsum.photos/seed/ecommerce-2/400/711",
                source: Some("https://youtube.com/shorts/ewP0uFrd48s"),
            },
            NicheVideo {
                id: "v3",
                title: "Scarcity Angle",
                cover: "https://picsum.photos/seed/ecommerce-3/400/711",
                source: Some("https://youtube.com/shorts/BURTRB1d_d4"),
            },
            NicheVideo {
                id: "v4",
                title: "Final Call CTA",
                cover: "https://picsum.photos/seed/ecommerce-4/400/711",
                source: Some("https://youtube.com/shorts/mxRzy6etUbw"),
            },
        ],
    },
    PortfolioNiche {
        id: "commercial-product-ads",
        title: "Commercial Product Ads",
        category: "Brand Authority",
        description: "Cinematic brand authority ads with high-end visuals and professional editing.",
        thumbnail: "https://picsum.photos/seed/niche-commercial/600/600",
        videos: &[
            NicheVideo {
                id: "v1",
                title: "Cinematic Intro",
                cover: "https://picsum.photos/seed/commercial-1/400/711",
                source: Some("https://youtube.com/shorts/CrQaD25hJUM"),
            },
            NicheVideo {
                id: "v2",
                title: "Brand Vision",
                cover: "https://picsum.photos/seed/commercial-2/400/711",
                source: Some("https://youtube.com/shorts/v84LuiHpJrE"),
            },
            NicheVideo {
                id: "v3",
                title: "Product Macro",
                cover: "https://picsum.photos/seed/commercial-3/400/711",
                source: Some("https://youtube.com/shorts/0h2U6Kp59-w"),
            },
            NicheVideo {
                id: "v4",
                title: "Authority Message",
                cover: "https://picsum.photos/seed/commercial-4/400/711",
                source: Some("https://youtube.com/shorts/qWk_OG3LhdQ"),
            },
        ],
    },
];

pub const FEATURE_BLOCKS: &[FeatureBlock] = &[
    FeatureBlock {
        title: "Hook Strategy",
        description: "First 3-second optimization to arrest attention immediately.",
        details: "We analyze competitor data and platform trends to craft hooks that stop the scroll. This includes visual patterns, curiosity-driven questions, and high-impact motion graphics designed to keep users from swiping past.",
        icon: Icon::Zap,
    },
    FeatureBlock {
        title: "Script Writing",
        description: "Direct-response copywriting that triggers emotional buying decisions.",
        details: "Our scripts follow a proven psychological framework: Hook, Problem, Solution, and Call to Action. We focus on benefits over features, using language that resonates with your target audience's specific pain points.",
        icon: Icon::FileText,
    },
    FeatureBlock {
        title: "UGC Creator Direction",
        description: "Coaching creators to deliver authentic, believable performances.",
        details: "We don't just send products; we provide detailed creative briefs and 1-on-1 coaching to ensure creators deliver authentic testimonials that feel like a recommendation from a friend, not a paid ad.",
        icon: Icon::Users,
    },
    FeatureBlock {
        title: "Performance Editing",
        description: "Fast-paced cuts and visual effects designed for retention.",
        details: "Our editors use platform-native styles with rapid cuts, on-screen text overlays, and trending sound design to maintain high viewer retention rates throughout the entire ad.",
        icon: Icon::Scissors,
    },
    FeatureBlock {
        title: "AI Workflow",
        description: "Leveraging AI tools for rapid ideation and asset generation.",
        details: "We use advanced AI for voiceovers, background removal, and dynamic captioning, allowing us to produce high-quality variations at a fraction of the traditional production time.",
        icon: Icon::Cpu,
    },
    FeatureBlock {
        title: "Testing Framework",
        description: "Systematic A/B testing to identify winning variables.",
        details: "We don't guess; we test. Our framework involves testing different hooks against the same body content to statistically determine which creative elements are driving the most conversions.",
        icon: Icon::BarChart3,
    },
    FeatureBlock {
        title: "Brand Positioning",
        description: "Aligning creative output with core brand identity and voice.",
        details: "We ensure every ad feels like a natural extension of your brand. We match your brand's tone, color palette, and values while maintaining the high-energy performance needed for social platforms.",
        icon: Icon::Target,
    },
    FeatureBlock {
        title: "24h Editing",
        description: "Rapid turnaround times for scaling brands that need speed.",
        details: "For brands that need to move fast, we offer expedited editing services. We can take raw footage and deliver performance-ready ads in as little as 24 hours to keep your ad accounts fresh.",
        icon: Icon::Clock,
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Single Creative",
        price: "$49",
        subtitle: "Perfect for brands testing new concepts.",
        popular: false,
        features: &[
            "1 UGC Ad (15 sec)",
            "Script writing",
            "Hook optimization",
            "Basic editing",
            "1 revision",
            "3-4 day delivery",
        ],
    },
    PricingPlan {
        name: "Starter Testing",
        price: "$299",
        subtitle: "Best for new brands testing multiple angles.",
        popular: false,
        features: &[
            "8 UGC ads",
            "2 ad angles per week",
            "Hook variations",
            "Script strategy",
            "2 revisions",
            "Priority support",
        ],
    },
    PricingPlan {
        name: "Growth Plan",
        price: "$499",
        subtitle: "Designed for active Shopify brands running Meta/TikTok ads.",
        popular: true,
        features: &[
            "15 creatives",
            "Multiple hooks",
            "AI-enhanced workflow",
            "Strategy call",
            "Advanced editing",
            "Weekly creative refresh",
        ],
    },
    PricingPlan {
        name: "Scale Plan",
        price: "$999",
        subtitle: "Built for aggressive ad scales & agencies.",
        popular: false,
        features: &[
            "30+ creatives",
            "Full funnel strategy",
            "Creative testing framework",
            "Priority support",
            "24-48hr Turnaround",
            "Unlimited minor text revisions",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "t1",
        name: "Sarah Mitchell",
        role: "Founder",
        company: "GlowLab",
        content: "The first batch of creatives doubled our click-through rate in a week. The hooks just work.",
        avatar: "https://picsum.photos/seed/avatar-1/80/80",
        stats: "2.1x CTR",
    },
    Testimonial {
        id: "t2",
        name: "Marcus Chen",
        role: "Growth Lead",
        company: "PulseFit",
        content: "We went from guessing to a real testing framework. ROAS is up and we finally know why.",
        avatar: "https://picsum.photos/seed/avatar-2/80/80",
        stats: "+86% ROAS",
    },
    Testimonial {
        id: "t3",
        name: "Elena Vargas",
        role: "CMO",
        company: "Nordic Gadgets",
        content: "Turnaround is absurdly fast. Raw footage in, platform-ready ads out within two days.",
        avatar: "https://picsum.photos/seed/avatar-3/80/80",
        stats: "48h delivery",
    },
    Testimonial {
        id: "t4",
        name: "David Okafor",
        role: "Owner",
        company: "Lumi Jewelry",
        content: "Our lifestyle creatives finally look premium without losing the native feel that converts.",
        avatar: "https://picsum.photos/seed/avatar-4/80/80",
        stats: "3.4x ROAS",
    },
    Testimonial {
        id: "t5",
        name: "Priya Raman",
        role: "Founder",
        company: "CartLeap",
        content: "Scaled three dropshipping stores on their problem-solution ad structure. It just prints.",
        avatar: "https://picsum.photos/seed/avatar-5/80/80",
        stats: "12M views",
    },
    Testimonial {
        id: "t6",
        name: "Tom Bergström",
        role: "Head of Ads",
        company: "Vantage Co",
        content: "The weekly creative refresh keeps our accounts from fatiguing. Best retainer we run.",
        avatar: "https://picsum.photos/seed/avatar-6/80/80",
        stats: "+120% ROAS",
    },
];

pub const CAROUSEL_VIDEOS: &[CarouselVideo] = &[
    CarouselVideo { id: "c1", source: "https://youtube.com/shorts/CrQaD25hJUM" },
    CarouselVideo { id: "c2", source: "https://youtube.com/shorts/-6nk2lzfUiY" },
    CarouselVideo { id: "c3", source: "https://youtube.com/shorts/v84LuiHpJrE" },
    CarouselVideo { id: "c4", source: "https://youtube.com/shorts/SOlfTi_BV8o" },
    CarouselVideo { id: "c5", source: "https://youtube.com/shorts/0Y0g6zEtTpc" },
    CarouselVideo { id: "c6", source: "https://youtube.com/shorts/2uaYce9ywGM" },
    CarouselVideo { id: "c7", source: "https://youtube.com/shorts/QNC6QNscRSQ" },
    CarouselVideo { id: "c8", source: "https://youtube.com/shorts/MRBp0-_sYR8" },
    CarouselVideo { id: "c9", source: "https://youtube.com/shorts/ewP0uFrd48s" },
    CarouselVideo { id: "c10", source: "https://youtube.com/shorts/qWk_OG3LhdQ" },
];

/// Niche choices offered in the project-request form.
pub const FORM_NICHES: &[(&str, &str)] = &[
    ("skincare", "Skincare / Beauty"),
    ("fitness", "Fitness / Health"),
    ("tech", "Tech / Gadgets"),
    ("fashion", "Fashion / Jewelry"),
    ("ecommerce", "Dropshipping / Ecom"),
    ("other", "Other"),
];

/// Budget tiers offered in both lead forms.
pub const BUDGET_TIERS: &[(&str, &str)] = &[
    ("500", "$500"),
    ("1k-5k", "$1k - $5k"),
    ("5k-10k", "$5k - $10k"),
    ("10k+", "$10k+"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::video_id;
    use std::collections::HashSet;

    #[test]
    fn niche_ids_are_unique() {
        let mut seen = HashSet::new();
        for niche in PORTFOLIO_NICHES {
            assert!(seen.insert(niche.id), "duplicate niche id {}", niche.id);
        }
    }

    #[test]
    fn every_niche_carries_a_video_grid() {
        for niche in PORTFOLIO_NICHES {
            assert!(!niche.videos.is_empty(), "{} has no videos", niche.id);
        }
    }

    #[test]
    fn every_present_video_source_resolves() {
        let sources = PORTFOLIO_NICHES
            .iter()
            .flat_map(|n| n.videos.iter().filter_map(|v| v.source))
            .chain(CAROUSEL_VIDEOS.iter().map(|v| v.source));
        for source in sources {
            assert!(video_id(source).is_some(), "unresolvable source {source}");
        }
    }

    #[test]
    fn exactly_one_plan_is_popular() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.popular).count(), 1);
    }
}
