/// Offset in pixels past which the navbar turns opaque. The boundary itself stays transparent.
pub const SCROLL_THRESHOLD: u32 = 50;

/// One of the four addressable regions of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Inicio,
    Proyectos,
    Habilidades,
    Contacto,
}

impl Section {
    /// In nav bar order.
    pub const ALL: [Section; 4] = [
        Section::Inicio,
        Section::Proyectos,
        Section::Habilidades,
        Section::Contacto,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Proyectos => "proyectos",
            Section::Habilidades => "habilidades",
            Section::Contacto => "contacto",
        }
    }

    /// Fragment the browser jumps to, e.g. `#proyectos`.
    pub fn href(self) -> String {
        format!("#{}", self.tag())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Transparent,
    Opaque,
}

impl NavbarStyle {
    pub fn for_offset(scroll_y: u32) -> Self {
        if scroll_y > SCROLL_THRESHOLD {
            NavbarStyle::Opaque
        } else {
            NavbarStyle::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavbarStyle::Transparent => "bg-transparent",
            NavbarStyle::Opaque => "bg-gray-900/95 backdrop-blur-sm shadow-lg",
        }
    }
}

/// Everything the page remembers between two events. Nothing here outlives a reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub is_menu_open: bool,
    pub active_section: Section,
    pub scroll_y: u32,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.is_menu_open = !self.is_menu_open;
        log::debug!("mobile menu is now {}", if self.is_menu_open { "open" } else { "closed" });
    }

    /// Highlights `section` and folds the mobile menu away if it was open.
    /// The jump itself is left to the browser's fragment navigation.
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
        if self.is_menu_open {
            self.is_menu_open = false;
        }
        log::debug!("active section is now {section}");
    }

    /// Stores the host's raw offset, rounded to whole pixels.
    pub fn record_scroll(&mut self, raw_offset: f64) {
        let before = self.navbar_style();
        self.scroll_y = clamp_offset(raw_offset);
        let after = self.navbar_style();
        if before != after {
            log::debug!("navbar switched to {after:?} at {}px", self.scroll_y);
        }
    }

    pub fn navbar_style(&self) -> NavbarStyle {
        NavbarStyle::for_offset(self.scroll_y)
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }
}

// NaN and negative offsets (rubber band scrolling on some browsers) clamp to 0.
fn clamp_offset(raw_offset: f64) -> u32 {
    if raw_offset.is_nan() || raw_offset <= 0.0 {
        return 0;
    }
    let rounded = raw_offset.round();
    if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
