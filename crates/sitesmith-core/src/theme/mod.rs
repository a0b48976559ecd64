//! Theme module.
//!
//! Compiles a `ThemePrompt` into a complete `ThemeConfig` by combining
//! three independent preset lookups: color scheme, industry and visual
//! style. Every lookup has a named fallback, so compilation never fails.

pub mod catalog;
pub mod model;
pub mod parser;

use tracing::debug;

use catalog::{
    ColorScheme, IndustryPreset, TerminologyPreset, VisualStylePreset, default_color_scheme,
    default_industry, default_visual_style, find_color_scheme, find_industry, find_visual_style,
};
use model::{
    Animations, ColorPalette, ComponentClasses, ParticleSystem, Terminology, ThemeConfig,
    ThemePrompt, Typography, VisualStyle,
};

/// Compile a parsed prompt into a theme.
pub fn generate_theme(prompt: &ThemePrompt) -> ThemeConfig {
    let scheme = find_color_scheme(&prompt.primary_color).unwrap_or_else(|| {
        debug!("Unknown color '{}', falling back to default", prompt.primary_color);
        default_color_scheme()
    });
    let industry = find_industry(&prompt.industry).unwrap_or_else(|| {
        debug!("Unknown industry '{}', falling back to default", prompt.industry);
        default_industry()
    });
    let style = find_visual_style(&prompt.visual_style).unwrap_or_else(|| {
        debug!("Unknown visual style '{}', falling back to default", prompt.visual_style);
        default_visual_style()
    });

    let colors = palette(scheme);

    ThemeConfig {
        industry: industry.slug.to_string(),
        vibe: prompt.vibe.clone(),
        visual_style: style.style,
        typography: typography(style),
        animations: animations(style, &colors),
        components: components(style),
        terminology: terminology(&industry.terminology),
        decorative_elements: strings(industry.decorative_elements),
        spacing: style.spacing.to_string(),
        colors,
    }
}

/// Industry preset a compiled theme was built from.
pub fn industry_preset(theme: &ThemeConfig) -> &'static IndustryPreset {
    find_industry(&theme.industry).unwrap_or_else(default_industry)
}

fn palette(scheme: &ColorScheme) -> ColorPalette {
    ColorPalette {
        scheme: scheme.name.to_string(),
        primary: scheme.primary.to_string(),
        secondary: scheme.secondary.to_string(),
        accent: scheme.accent.to_string(),
        dark: scheme.dark.to_string(),
        darker: scheme.darker.to_string(),
    }
}

fn typography(style: &VisualStylePreset) -> Typography {
    let (heading_font, heading_weight, heading_transform, letter_spacing) = match style.style {
        VisualStyle::Maximalist => ("Cinzel", 900, "uppercase", "0.05em"),
        VisualStyle::Standard(_) => ("Inter", 700, "none", "-0.025em"),
    };

    Typography {
        heading_font: heading_font.to_string(),
        body_font: "Inter".to_string(),
        heading_weight,
        heading_transform: heading_transform.to_string(),
        letter_spacing: letter_spacing.to_string(),
        heading_size: style.heading_size.to_string(),
    }
}

fn animations(style: &VisualStylePreset, colors: &ColorPalette) -> Animations {
    let particle_system = (style.particle_count > 0).then(|| ParticleSystem {
        count: style.particle_count,
        colors: vec![colors.primary.clone(), colors.accent.clone()],
    });

    Animations {
        enabled: strings(style.animations),
        effects: strings(style.effects),
        particle_system,
    }
}

fn components(style: &VisualStylePreset) -> ComponentClasses {
    let heading = match style.style {
        VisualStyle::Maximalist => format!("{} font-black uppercase tracking-wider", style.heading_size),
        VisualStyle::Standard(_) => format!("{} font-bold tracking-tight", style.heading_size),
    };

    ComponentClasses {
        button: style.button.to_string(),
        card: style.card.to_string(),
        section: format!("{} px-6", style.spacing),
        heading,
        input: style.input.to_string(),
    }
}

fn terminology(preset: &TerminologyPreset) -> Terminology {
    Terminology {
        book: preset.book.to_string(),
        service: preset.service.to_string(),
        client: preset.client.to_string(),
        booking: preset.booking.to_string(),
        schedule: preset.schedule.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
