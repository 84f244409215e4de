use prosaic_config::Theme;
use ratatui::style::{Color, Modifier, Style};

const SPELL_ERROR: u32 = 0xc24038;

/// Maps highlight categories to terminal styles for a theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    theme: Theme,
}

struct Colors {
    fg: u32,
    bg: u32,
    accent: u32,
    muted: u32,
    marker: u32,
    italic: u32,
    code: u32,
    code_bg: u32,
    link: u32,
}

const LIGHT: Colors = Colors {
    fg: 0x5a3d35,
    bg: 0xfffffc,
    accent: 0x703327,
    muted: 0x8a6d60,
    marker: 0xb8a090,
    italic: 0x7a5d55,
    code: 0x715e12,
    code_bg: 0xf0ece0,
    link: 0x4a6da0,
};

const DARK: Colors = Colors {
    fg: 0xe8d5c4,
    bg: 0x1a1a1a,
    accent: 0xdcae91,
    muted: 0x8a7a6a,
    marker: 0x6a5a4a,
    italic: 0xc8b5a4,
    code: 0xc9a86c,
    code_bg: 0x2a2520,
    link: 0x7aa2d0,
};

fn fg(rgb: u32) -> Style {
    Style::default().fg(Color::from_u32(rgb))
}

impl Palette {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn colors(&self) -> &'static Colors {
        match self.theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn base(&self) -> Style {
        let c = self.colors();
        fg(c.fg).bg(Color::from_u32(c.bg))
    }

    pub fn muted(&self) -> Style {
        self.base().fg(Color::from_u32(self.colors().muted))
    }

    pub fn accent(&self) -> Style {
        self.base()
            .fg(Color::from_u32(self.colors().accent))
            .add_modifier(Modifier::BOLD)
    }

    /// Style patch for a highlight category. Unknown categories patch nothing.
    pub fn category(&self, name: &str) -> Style {
        let c = self.colors();
        match name {
            "spell.error" => fg(SPELL_ERROR).add_modifier(Modifier::UNDERLINED),
            "heading" | "keyword" => fg(c.accent).add_modifier(Modifier::BOLD),
            "heading.marker" | "list.marker" => fg(c.muted),
            "comment" => fg(c.muted).add_modifier(Modifier::ITALIC),
            "string" => fg(c.code),
            "bold" => Style::default().add_modifier(Modifier::BOLD),
            "italic" => fg(c.italic).add_modifier(Modifier::ITALIC),
            "bold.marker" | "italic.marker" | "code.marker" => fg(c.marker),
            "inline_code" => fg(c.code).bg(Color::from_u32(c.code_bg)),
            "strikethrough" => Style::default().add_modifier(Modifier::CROSSED_OUT),
            "link.label" => fg(c.link),
            "link.uri" => fg(c.code).add_modifier(Modifier::UNDERLINED),
            _ => Style::default(),
        }
    }
}
