//! Decorative greeting printed to the developer console on load.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::surface::UiSurface;

const ACCENT: &str = "color: #3b82f6;";
const MUTED: &str = "color: #6b7280;";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub css: String,
}

#[must_use]
pub fn lines(contact_email: &str) -> Vec<BannerLine> {
    vec![
        BannerLine {
            text: "👋 Hey there, developer!".to_owned(),
            css: format!("font-size: 20px; font-weight: bold; {ACCENT}"),
        },
        BannerLine {
            text: "Looking at the code? I like your style!".to_owned(),
            css: format!("font-size: 14px; {MUTED}"),
        },
        BannerLine {
            text: format!("Feel free to reach out: {contact_email}"),
            css: format!("font-size: 14px; {ACCENT}"),
        },
    ]
}

pub fn print<S: UiSurface>(surface: &S, contact_email: &str) {
    for line in lines(contact_email) {
        surface.console_styled(&line.text, &line.css);
    }
}
