use super::*;
use crate::fake::FakeSurface;

#[test]
fn banner_has_three_lines_ending_with_contact() {
    let lines = lines("me@example.com");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].text, "Feel free to reach out: me@example.com");
}

#[test]
fn headline_is_large_and_bold() {
    let lines = lines("x@y.z");
    assert!(lines[0].css.contains("font-size: 20px"));
    assert!(lines[0].css.contains("font-weight: bold"));
}

#[test]
fn print_writes_styled_console_lines() {
    let surface = FakeSurface::new();
    print(&surface, "x@y.z");
    let written = surface.console_lines();
    assert_eq!(written.len(), 3);
    assert_eq!(written[1].0, "Looking at the code? I like your style!");
    assert_eq!(written[1].1, "font-size: 14px; color: #6b7280;");
}
