//! Chat colour palette.
//!
//! The light theme follows the mobile design: blue own bubbles, grey bubbles
//! for everyone else on an off-white list background. Dark is its inversion.

use eframe::egui::Color32;

#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    /// Header, composer and window background
    pub surface: Color32,
    /// Message list background
    pub chat_background: Color32,
    pub own_bubble: Color32,
    pub own_text: Color32,
    pub own_time: Color32,
    pub other_bubble: Color32,
    pub other_text: Color32,
    pub other_time: Color32,
    pub separator_fill: Color32,
    pub separator_text: Color32,
    pub accent: Color32,
    pub verified: Color32,
    pub error: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    pub input_fill: Color32,
}

impl ChatTheme {
    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: Color32::WHITE,
            chat_background: Color32::from_rgb(247, 247, 247),
            own_bubble: Color32::from_rgb(0, 122, 255),
            own_text: Color32::WHITE,
            own_time: Color32::from_white_alpha(180),
            other_bubble: Color32::from_rgb(229, 229, 234),
            other_text: Color32::BLACK,
            other_time: Color32::from_rgb(102, 102, 102),
            separator_fill: Color32::from_rgb(229, 229, 234),
            separator_text: Color32::from_rgb(102, 102, 102),
            accent: Color32::from_rgb(0, 122, 255),
            verified: Color32::from_rgb(52, 199, 89),
            error: Color32::from_rgb(255, 59, 48),
            text_primary: Color32::BLACK,
            text_muted: Color32::from_rgb(102, 102, 102),
            border: Color32::from_rgb(229, 229, 234),
            input_fill: Color32::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: Color32::from_rgb(28, 28, 30),
            chat_background: Color32::from_rgb(18, 18, 20),
            own_bubble: Color32::from_rgb(10, 132, 255),
            own_text: Color32::WHITE,
            own_time: Color32::from_white_alpha(170),
            other_bubble: Color32::from_rgb(44, 44, 46),
            other_text: Color32::from_rgb(235, 235, 240),
            other_time: Color32::from_rgb(152, 152, 157),
            separator_fill: Color32::from_rgb(44, 44, 46),
            separator_text: Color32::from_rgb(152, 152, 157),
            accent: Color32::from_rgb(10, 132, 255),
            verified: Color32::from_rgb(48, 209, 88),
            error: Color32::from_rgb(255, 69, 58),
            text_primary: Color32::from_rgb(235, 235, 240),
            text_muted: Color32::from_rgb(152, 152, 157),
            border: Color32::from_rgb(56, 56, 58),
            input_fill: Color32::from_rgb(44, 44, 46),
        }
    }

    /// Pick a theme by its settings name; anything unknown is light.
    pub fn named(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name == "Dark"
    }
}

const AVATAR_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
    Color32::from_rgb(41, 128, 185),
    Color32::from_rgb(39, 174, 96),
    Color32::from_rgb(192, 57, 43),
    Color32::from_rgb(22, 160, 133),
];

/// Stable avatar colour for a user id (FNV-1a over the bytes).
pub fn avatar_color(user_id: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in user_id.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    AVATAR_COLORS[(hash as usize) % AVATAR_COLORS.len()]
}
