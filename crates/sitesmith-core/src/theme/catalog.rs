//! Preset catalogs.
//!
//! Every catalog is an ordered static slice. Prompt detection walks them
//! front to back and the first hit wins, so entry order is part of the
//! observable behavior: reordering entries changes how ambiguous prompts
//! resolve.

use super::model::{StandardStyle, VisualStyle};

/// A named five-swatch color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    /// Extra words that select this scheme in a prompt.
    pub aliases: &'static [&'static str],
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub dark: &'static str,
    pub darker: &'static str,
}

/// Industry vocabulary for the generic booking words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminologyPreset {
    pub book: &'static str,
    pub service: &'static str,
    pub client: &'static str,
    pub booking: &'static str,
    pub schedule: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryPreset {
    pub slug: &'static str,
    pub keywords: &'static [&'static str],
    pub terminology: TerminologyPreset,
    pub suggested_colors: &'static [&'static str],
    pub suggested_style: VisualStyle,
    pub decorative_elements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualStylePreset {
    pub style: VisualStyle,
    pub keywords: &'static [&'static str],
    pub animations: &'static [&'static str],
    pub effects: &'static [&'static str],
    pub particle_count: u32,
    pub heading_size: &'static str,
    pub spacing: &'static str,
    pub button: &'static str,
    pub card: &'static str,
    pub input: &'static str,
}

pub const DEFAULT_COLOR: &str = "blue";
pub const DEFAULT_INDUSTRY: &str = "consulting";
pub const DEFAULT_VIBE: &str = "professional";

/// Generic booking vocabulary; themed terms are compared against these.
pub const GENERIC_TERMINOLOGY: TerminologyPreset = TerminologyPreset {
    book: "book",
    service: "service",
    client: "client",
    booking: "booking",
    schedule: "schedule",
};

pub static COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        name: "orange",
        aliases: &["tangerine", "sunset"],
        primary: "#ea580c",
        secondary: "#f97316",
        accent: "#fb923c",
        dark: "#c2410c",
        darker: "#7c2d12",
    },
    ColorScheme {
        name: "red",
        aliases: &["crimson", "scarlet"],
        primary: "#dc2626",
        secondary: "#ef4444",
        accent: "#f87171",
        dark: "#b91c1c",
        darker: "#7f1d1d",
    },
    ColorScheme {
        name: "blue",
        aliases: &["navy", "azure"],
        primary: "#2563eb",
        secondary: "#3b82f6",
        accent: "#60a5fa",
        dark: "#1e40af",
        darker: "#1e3a8a",
    },
    ColorScheme {
        name: "green",
        aliases: &["emerald", "forest", "sage"],
        primary: "#16a34a",
        secondary: "#22c55e",
        accent: "#4ade80",
        dark: "#15803d",
        darker: "#14532d",
    },
    ColorScheme {
        name: "purple",
        aliases: &["violet", "lavender"],
        primary: "#9333ea",
        secondary: "#a855f7",
        accent: "#c084fc",
        dark: "#7e22ce",
        darker: "#581c87",
    },
    ColorScheme {
        name: "pink",
        aliases: &["blush", "magenta"],
        primary: "#db2777",
        secondary: "#ec4899",
        accent: "#f472b6",
        dark: "#be185d",
        darker: "#831843",
    },
    ColorScheme {
        name: "teal",
        aliases: &["turquoise", "cyan"],
        primary: "#0d9488",
        secondary: "#14b8a6",
        accent: "#2dd4bf",
        dark: "#0f766e",
        darker: "#134e4a",
    },
    ColorScheme {
        name: "yellow",
        aliases: &["gold", "amber"],
        primary: "#ca8a04",
        secondary: "#eab308",
        accent: "#facc15",
        dark: "#a16207",
        darker: "#713f12",
    },
    ColorScheme {
        name: "gray",
        aliases: &["grey", "slate", "monochrome"],
        primary: "#475569",
        secondary: "#64748b",
        accent: "#94a3b8",
        dark: "#334155",
        darker: "#0f172a",
    },
];

pub static INDUSTRY_PRESETS: &[IndustryPreset] = &[
    IndustryPreset {
        slug: "mtg-tournaments",
        keywords: &["mtg", "magic the gathering", "magic: the gathering", "tournament", "trading card", "tcg"],
        terminology: TerminologyPreset {
            book: "register",
            service: "format",
            client: "warrior",
            booking: "registration",
            schedule: "event calendar",
        },
        suggested_colors: &["orange", "red", "purple"],
        suggested_style: VisualStyle::Maximalist,
        decorative_elements: &["card-frames", "mana-symbols", "battle-banners"],
    },
    IndustryPreset {
        slug: "livestock",
        keywords: &["livestock", "cattle", "sheep", "saleyard", "mustering", "herd"],
        terminology: TerminologyPreset {
            book: "reserve",
            service: "mob",
            client: "producer",
            booking: "reservation",
            schedule: "sale calendar",
        },
        suggested_colors: &["green", "yellow"],
        suggested_style: VisualStyle::Standard(StandardStyle::Corporate),
        decorative_elements: &["paddock-lines", "brand-marks"],
    },
    IndustryPreset {
        slug: "fitness",
        keywords: &["fitness", "gym", "personal trainer", "yoga", "pilates", "crossfit"],
        terminology: TerminologyPreset {
            book: "reserve",
            service: "class",
            client: "member",
            booking: "reservation",
            schedule: "timetable",
        },
        suggested_colors: &["red", "orange", "gray"],
        suggested_style: VisualStyle::Standard(StandardStyle::Modern),
        decorative_elements: &["motion-lines", "progress-rings"],
    },
    IndustryPreset {
        slug: "beauty",
        keywords: &["salon", "beauty", "day spa", "hair", "nail", "barber"],
        terminology: TerminologyPreset {
            book: "book",
            service: "treatment",
            client: "guest",
            booking: "appointment",
            schedule: "availability",
        },
        suggested_colors: &["pink", "purple"],
        suggested_style: VisualStyle::Standard(StandardStyle::Minimalist),
        decorative_elements: &["soft-gradients", "botanical-line-art"],
    },
    IndustryPreset {
        slug: "healthcare",
        keywords: &["clinic", "medical", "dental", "physio", "health"],
        terminology: TerminologyPreset {
            book: "schedule",
            service: "treatment",
            client: "patient",
            booking: "appointment",
            schedule: "calendar",
        },
        suggested_colors: &["teal", "blue"],
        suggested_style: VisualStyle::Standard(StandardStyle::Minimalist),
        decorative_elements: &["soft-waves"],
    },
    IndustryPreset {
        slug: "education",
        keywords: &["tutor", "education", "school", "lesson"],
        terminology: TerminologyPreset {
            book: "enrol",
            service: "lesson",
            client: "student",
            booking: "enrolment",
            schedule: "timetable",
        },
        suggested_colors: &["blue", "yellow"],
        suggested_style: VisualStyle::Standard(StandardStyle::Modern),
        decorative_elements: &["notebook-grid", "doodles"],
    },
    IndustryPreset {
        slug: "photography",
        keywords: &["photograph", "photo shoot"],
        terminology: TerminologyPreset {
            book: "book",
            service: "shoot",
            client: "client",
            booking: "session",
            schedule: "calendar",
        },
        suggested_colors: &["gray", "yellow"],
        suggested_style: VisualStyle::Standard(StandardStyle::Minimalist),
        decorative_elements: &["film-strips", "aperture-marks"],
    },
    IndustryPreset {
        slug: "consulting",
        keywords: &["consult", "advisory", "coaching", "agency"],
        terminology: GENERIC_TERMINOLOGY,
        suggested_colors: &["blue", "gray"],
        suggested_style: VisualStyle::Standard(StandardStyle::Corporate),
        decorative_elements: &["subtle-grid"],
    },
];

pub static VISUAL_STYLE_PRESETS: &[VisualStylePreset] = &[
    VisualStylePreset {
        style: VisualStyle::Maximalist,
        keywords: &["epic", "maximalist", "dramatic", "fantasy", "vibrant", "intense", "warrior"],
        animations: &["float", "glow", "pulse", "shimmer"],
        effects: &["gradient-text", "glassmorphism", "neon-borders", "parallax"],
        particle_count: 12,
        heading_size: "text-6xl md:text-8xl",
        spacing: "py-24 md:py-32",
        button: "px-8 py-4 font-black uppercase tracking-wider bg-gradient-to-r from-primary to-primary-dark text-white shadow-lg shadow-primary/50 hover:scale-105 transition-transform duration-300",
        card: "relative overflow-hidden rounded-xl border-2 border-primary/40 bg-primary-darker/80 backdrop-blur-md p-8 shadow-2xl",
        input: "w-full border-2 border-primary/50 bg-black/40 px-4 py-3 text-white focus:border-primary focus:outline-none",
    },
    VisualStylePreset {
        style: VisualStyle::Standard(StandardStyle::Minimalist),
        keywords: &["minimal", "clean", "simple", "understated", "zen"],
        animations: &["fade-in"],
        effects: &[],
        particle_count: 0,
        heading_size: "text-4xl md:text-5xl",
        spacing: "py-20 md:py-28",
        button: "px-6 py-3 font-medium border border-primary text-primary hover:bg-primary hover:text-white transition-colors",
        card: "border border-gray-200 p-6",
        input: "w-full border-b border-gray-300 px-1 py-2 focus:border-primary focus:outline-none",
    },
    VisualStylePreset {
        style: VisualStyle::Standard(StandardStyle::Corporate),
        keywords: &["corporate", "enterprise", "professional", "formal", "trustworthy"],
        animations: &["fade-in"],
        effects: &["subtle-shadows"],
        particle_count: 0,
        heading_size: "text-4xl md:text-5xl",
        spacing: "py-16 md:py-20",
        button: "px-5 py-2.5 font-semibold rounded bg-primary-dark text-white hover:bg-primary-darker transition-colors",
        card: "rounded-md border border-gray-300 bg-white p-6 shadow-sm",
        input: "w-full rounded border border-gray-300 px-3 py-2 focus:border-primary-dark focus:outline-none",
    },
    VisualStylePreset {
        style: VisualStyle::Standard(StandardStyle::Modern),
        keywords: &["modern", "sleek", "contemporary", "fresh"],
        animations: &["fade-in", "slide-up"],
        effects: &["gradient-text", "soft-shadows", "rounded-cards"],
        particle_count: 0,
        heading_size: "text-5xl md:text-6xl",
        spacing: "py-20 md:py-24",
        button: "px-6 py-3 font-semibold rounded-lg bg-primary text-white hover:bg-primary-dark shadow-md transition-all",
        card: "rounded-2xl bg-white p-8 shadow-lg",
        input: "w-full rounded-lg border border-gray-200 px-4 py-3 focus:ring-2 focus:ring-primary focus:outline-none",
    },
];

/// Vibe words in detection order; the default comes last.
pub static VIBES: &[&str] = &[
    "epic",
    "playful",
    "elegant",
    "calm",
    "energetic",
    "luxurious",
    "friendly",
    "rustic",
    "bold",
    DEFAULT_VIBE,
];

/// Exact-name color lookup.
pub fn find_color_scheme(name: &str) -> Option<&'static ColorScheme> {
    let name = name.trim().to_lowercase();
    COLOR_SCHEMES.iter().find(|c| c.name == name)
}

/// Industry lookup by normalized slug: exact first, then containment.
pub fn find_industry(name: &str) -> Option<&'static IndustryPreset> {
    let normalized = normalize_slug(name);
    if normalized.is_empty() {
        return None;
    }
    INDUSTRY_PRESETS
        .iter()
        .find(|p| p.slug == normalized)
        .or_else(|| {
            INDUSTRY_PRESETS
                .iter()
                .find(|p| p.slug.contains(&normalized) || normalized.contains(p.slug))
        })
}

/// Exact-name visual style lookup.
pub fn find_visual_style(name: &str) -> Option<&'static VisualStylePreset> {
    let style = VisualStyle::from_slug(name)?;
    VISUAL_STYLE_PRESETS.iter().find(|p| p.style == style)
}

pub fn default_color_scheme() -> &'static ColorScheme {
    COLOR_SCHEMES
        .iter()
        .find(|c| c.name == DEFAULT_COLOR)
        .unwrap_or(&COLOR_SCHEMES[0])
}

pub fn default_industry() -> &'static IndustryPreset {
    INDUSTRY_PRESETS
        .iter()
        .find(|p| p.slug == DEFAULT_INDUSTRY)
        .unwrap_or(&INDUSTRY_PRESETS[0])
}

pub fn default_visual_style() -> &'static VisualStylePreset {
    VISUAL_STYLE_PRESETS
        .iter()
        .find(|p| p.style == VisualStyle::MODERN)
        .unwrap_or(&VISUAL_STYLE_PRESETS[0])
}

/// Lower-case, trim, and join words with `-`.
pub fn normalize_slug(name: &str) -> String {
    name.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_exist_in_catalogs() {
        assert_eq!(default_color_scheme().name, DEFAULT_COLOR);
        assert_eq!(default_industry().slug, DEFAULT_INDUSTRY);
        assert_eq!(default_visual_style().style, VisualStyle::MODERN);
        assert!(VIBES.contains(&DEFAULT_VIBE));
    }

    #[test]
    fn test_find_color_scheme_is_exact() {
        assert_eq!(find_color_scheme("Orange").map(|c| c.primary), Some("#ea580c"));
        assert!(find_color_scheme("navy").is_none());
        assert!(find_color_scheme("").is_none());
    }

    #[test]
    fn test_find_industry_normalized_match() {
        assert_eq!(find_industry("mtg-tournaments").map(|p| p.slug), Some("mtg-tournaments"));
        assert_eq!(find_industry("MTG Tournaments").map(|p| p.slug), Some("mtg-tournaments"));
        assert_eq!(find_industry("mtg").map(|p| p.slug), Some("mtg-tournaments"));
        assert_eq!(find_industry("healthcare-clinic").map(|p| p.slug), Some("healthcare"));
        assert!(find_industry("aerospace").is_none());
        assert!(find_industry("   ").is_none());
    }

    #[test]
    fn test_find_visual_style() {
        assert_eq!(find_visual_style("maximalist").map(|p| p.particle_count), Some(12));
        assert!(find_visual_style("baroque").is_none());
    }

    #[test]
    fn test_only_maximalist_has_particles() {
        for preset in VISUAL_STYLE_PRESETS {
            assert_eq!(preset.particle_count > 0, preset.style.is_maximalist());
        }
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut colors: Vec<_> = COLOR_SCHEMES.iter().map(|c| c.name).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), COLOR_SCHEMES.len());

        let mut slugs: Vec<_> = INDUSTRY_PRESETS.iter().map(|p| p.slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), INDUSTRY_PRESETS.len());
    }

    #[test]
    fn test_suggested_colors_resolve() {
        for preset in INDUSTRY_PRESETS {
            for color in preset.suggested_colors {
                assert!(find_color_scheme(color).is_some(), "{} suggests unknown {}", preset.slug, color);
            }
        }
    }
}
