/// Glyph shown next to a sidebar label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Cloudy,
    Clock,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "\u{2302}",
            Icon::Cloudy => "\u{2601}",
            Icon::Clock => "\u{23F2}",
        }
    }
}

/// One sidebar destination. `title` doubles as the render key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub static NAV_ITEMS: [NavEntry; 3] = [
    NavEntry {
        title: "Home",
        url: "/",
        icon: Icon::Home,
    },
    NavEntry {
        title: "Floats",
        url: "/floats",
        icon: Icon::Cloudy,
    },
    NavEntry {
        title: "Reminders",
        url: "/reminders",
        icon: Icon::Clock,
    },
];
