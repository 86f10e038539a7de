use std::time::Duration;

use ratatui::style::Color;

pub const TITLE: &str = "Welcome to Shortly!";
pub const SUBTITLE: &str = "Shorten your links in seconds!";
pub const INPUT_PLACEHOLDER: &str = "Paste your long URL here...";
pub const RESULT_HEADING: &str = "Here's your shortened URL:";
pub const KEY_HINTS: &str =
    " Enter: Shorten │ Ctrl+Y/F2: Copy │ Esc: Close alert │ Ctrl+U: Clear │ Ctrl+Q: Quit";

pub const TICK_RATE: Duration = Duration::from_millis(100);
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub const ACCENT: Color = Color::Rgb(0x2a, 0xcf, 0xcf);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PLACEHOLDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ALERT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xc5, 0x5e);
