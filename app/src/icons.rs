use leptos::prelude::*;

/// Stroke glyphs drawn on a 24x24 grid, inlined so the page needs no icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Menu,
    X,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
    Code,
    Palette,
    Zap,
}

impl Icon {
    fn name(self) -> &'static str {
        match self {
            Icon::Menu => "menu",
            Icon::X => "x",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::ExternalLink => "external-link",
            Icon::Code => "code",
            Icon::Palette => "palette",
            Icon::Zap => "zap",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Icon::Menu => concat!(
                r#"<line x1="4" x2="20" y1="12" y2="12"/>"#,
                r#"<line x1="4" x2="20" y1="6" y2="6"/>"#,
                r#"<line x1="4" x2="20" y1="18" y2="18"/>"#,
            ),
            Icon::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Icon::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/>"#,
                r#"<path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
            Icon::Code => concat!(
                r#"<polyline points="16 18 22 12 16 6"/>"#,
                r#"<polyline points="8 6 2 12 8 18"/>"#,
            ),
            Icon::Palette => concat!(
                r#"<circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/>"#,
                r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"/>"#,
            ),
            Icon::Zap => r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#,
        }
    }
}

#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            data-icon=icon.name()
            inner_html=icon.svg_body()
        ></svg>
    }
}
