//! Navigation shell: which view is shown and which section is active

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Every investigation panel stacked as sections
    #[default]
    Home,
    /// The anomaly-detection model on its own
    Models,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Models => "Models",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Home => Self::Models,
            Self::Models => Self::Home,
        }
    }
}

/// Sections of the home view, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Overview,
    Analytics,
    Network,
    Beneficiaries,
    Collisions,
    Upcoding,
    Providers,
    Documents,
    Reports,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Self::Overview,
        Self::Analytics,
        Self::Network,
        Self::Beneficiaries,
        Self::Collisions,
        Self::Upcoding,
        Self::Providers,
        Self::Documents,
        Self::Reports,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Analytics",
            Self::Network => "Network",
            Self::Beneficiaries => "Beneficiaries",
            Self::Collisions => "Collisions",
            Self::Upcoding => "Upcoding",
            Self::Providers => "Providers",
            Self::Documents => "Documents",
            Self::Reports => "Reports",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Cycle to next section
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to previous section
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sections that accept typed text while active
    pub fn takes_text_input(&self) -> bool {
        matches!(self, Self::Beneficiaries | Self::Documents)
    }
}

/// Navigation state
#[derive(Debug, Clone, Default)]
pub struct Shell {
    view: View,
    active: Section,
}

impl Shell {
    pub fn view(&self) -> View {
        self.view
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Switch view; returns false when already there
    pub fn set_view(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        tracing::info!(from = self.view.title(), to = view.title(), "switching view");
        self.view = view;
        true
    }

    /// Jump to a section of the home view
    pub fn scroll_to(&mut self, section: Section) {
        self.active = section;
    }

    pub fn next_section(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev_section(&mut self) {
        self.active = self.active.prev();
    }
}
