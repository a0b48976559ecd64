//! Content structure generation.
//!
//! Pages, copy blocks and forms are fixed skeletons; the theme's
//! terminology is templated into them so a livestock site talks about
//! reserving mobs while a tournament site talks about registering formats.

use sitesmith_core::app::model::{
    ContentStructure, FieldKind, FooterCopy, FormField, FormSpec, HeroCopy, PageSpec, SectionCopy,
    SiteCopy,
};
use sitesmith_core::theme::model::ThemeConfig;

use crate::text::{capitalize, pluralize, slugify, title_case};

/// Build pages, copy and forms for a site.
pub fn generate_content(theme: &ThemeConfig, name: &str) -> ContentStructure {
    ContentStructure {
        pages: pages(theme, name),
        copy: copy(theme, name),
        forms: forms(theme),
    }
}

/// Route of the page hosting the main form, e.g. `/register`.
pub fn booking_path(theme: &ThemeConfig) -> String {
    format!("/{}", slugify(&theme.terminology.book))
}

/// Route of the offerings page, e.g. `/formats`.
pub fn services_path(theme: &ThemeConfig) -> String {
    format!("/{}", slugify(&pluralize(&theme.terminology.service)))
}

fn pages(theme: &ThemeConfig, name: &str) -> Vec<PageSpec> {
    let t = &theme.terminology;

    let mut home_sections = vec!["hero", "services", "about", "cta"];
    if theme.animations.particle_system.is_some() {
        home_sections.insert(0, "particles");
    }

    vec![
        page("/", "Home", &home_sections),
        page(&services_path(theme), &title_case(&pluralize(&t.service)), &["services-grid", "pricing"]),
        page(&booking_path(theme), &capitalize(&t.booking), &["booking-form", "schedule"]),
        page("/about", &format!("About {}", name), &["story", "team"]),
        page("/contact", "Contact", &["contact-form", "map"]),
    ]
}

fn page(path: &str, title: &str, sections: &[&str]) -> PageSpec {
    PageSpec {
        path: path.to_string(),
        title: title.to_string(),
        sections: sections.iter().map(|s| s.to_string()).collect(),
    }
}

fn copy(theme: &ThemeConfig, name: &str) -> SiteCopy {
    let t = &theme.terminology;
    let services = pluralize(&t.service);

    SiteCopy {
        hero: HeroCopy {
            headline: format!("{} for every {}", title_case(&services), t.client),
            subheadline: format!(
                "Ready to {} your {}? {} makes it simple, from your first {} to the next date on our {}.",
                t.book, t.service, name, t.booking, t.schedule
            ),
            cta: cta(theme),
        },
        about: SectionCopy {
            title: format!("About {}", name),
            body: format!(
                "{} exists for {} who value their time. Every {} is simple to {} and easy to manage.",
                name,
                pluralize(&t.client),
                t.service,
                t.book
            ),
        },
        services: SectionCopy {
            title: format!("Our {}", title_case(&services)),
            body: format!("Browse every {} we offer and pick the one that suits you.", t.service),
        },
        booking: SectionCopy {
            title: format!("{} Your {}", capitalize(&t.book), capitalize(&t.service)),
            body: format!(
                "Choose a {}, pick a date from our {} and confirm your {} in under a minute.",
                t.service, t.schedule, t.booking
            ),
        },
        contact: SectionCopy {
            title: "Get in Touch".to_string(),
            body: format!(
                "Questions about a {}? Send us a message and we will reply within one business day.",
                t.service
            ),
        },
        footer: FooterCopy {
            tagline: format!("{} made simple.", capitalize(&pluralize(&t.booking))),
            copyright: format!("© {}. All rights reserved.", name),
        },
    }
}

fn cta(theme: &ThemeConfig) -> String {
    format!("{} Now", capitalize(&theme.terminology.book))
}

fn forms(theme: &ThemeConfig) -> Vec<FormSpec> {
    let t = &theme.terminology;

    let booking = FormSpec {
        id: slugify(&t.booking),
        title: format!("{} Details", capitalize(&t.booking)),
        submit_label: cta(theme),
        fields: vec![
            field("name", "Full name", FieldKind::Text, true),
            field("email", "Email address", FieldKind::Email, true),
            field("phone", "Phone", FieldKind::Tel, false),
            field("offering", &capitalize(&t.service), FieldKind::Select, true),
            field("date", "Preferred date", FieldKind::Date, true),
            field("notes", "Notes", FieldKind::Textarea, false),
        ],
    };

    let contact = FormSpec {
        id: "contact".to_string(),
        title: "Send a Message".to_string(),
        submit_label: "Send Message".to_string(),
        fields: vec![
            field("name", "Full name", FieldKind::Text, true),
            field("email", "Email address", FieldKind::Email, true),
            field("message", "Message", FieldKind::Textarea, true),
        ],
    };

    vec![booking, contact]
}

fn field(name: &str, label: &str, kind: FieldKind, required: bool) -> FormField {
    FormField {
        name: name.to_string(),
        label: label.to_string(),
        kind,
        required,
        options: Vec::new(),
    }
}
