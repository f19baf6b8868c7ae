use image::Rgb;

#[derive(Clone, Copy, Debug, Default)]
pub enum Theme {
    #[default]
    Gruvbox,
}

/// Base palette: background, foreground and the eight terminal accents.
/// The full terminal table is kept even though only some accents have a role.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: Rgb<u8>,
    pub fg: Rgb<u8>,
    pub black: Rgb<u8>,
    pub red: Rgb<u8>,
    pub green: Rgb<u8>,
    pub yellow: Rgb<u8>,
    pub blue: Rgb<u8>,
    pub purple: Rgb<u8>,
    pub cyan: Rgb<u8>,
    pub white: Rgb<u8>,
}

/// Colors by role, as the renderer consumes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    pub bg: Rgb<u8>,
    pub text: Rgb<u8>,
    pub key: Rgb<u8>,
    pub separator: Rgb<u8>,
    pub value: Rgb<u8>,
}

const GRUVBOX: Palette = Palette {
    bg: Rgb([0x28, 0x28, 0x28]),
    fg: Rgb([0xeb, 0xdb, 0xb2]),
    black: Rgb([0x28, 0x28, 0x28]),
    red: Rgb([0xcc, 0x24, 0x1d]),
    green: Rgb([0x98, 0x97, 0x1a]),
    yellow: Rgb([0xd7, 0x99, 0x21]),
    blue: Rgb([0x45, 0x85, 0x88]),
    purple: Rgb([0xb1, 0x62, 0x86]),
    cyan: Rgb([0x68, 0x9d, 0x6a]),
    white: Rgb([0xa8, 0x99, 0x84]),
};

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Gruvbox => GRUVBOX,
        }
    }

    pub fn colors(self) -> ThemeColors {
        let p = self.palette();
        ThemeColors {
            bg: p.bg,
            text: p.fg,
            key: p.yellow,
            separator: p.white,
            value: p.cyan,
        }
    }
}
