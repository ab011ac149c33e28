#![allow(dead_code)]
use crossterm::style::Color;

pub const COLOR_WHITE: Color = Color::Rgb {
    r: 202,
    g: 211,
    b: 245,
};
pub const COLOR_DIMMED: Color = Color::Rgb {
    r: 110,
    g: 115,
    b: 141,
};
pub const COLOR_SCENARIO: Color = Color::Rgb {
    r: 125,
    g: 196,
    b: 228,
};
pub const COLOR_PASS: Color = Color::Rgb {
    r: 166,
    g: 218,
    b: 149,
};
pub const COLOR_FAIL: Color = Color::Rgb {
    r: 237,
    g: 135,
    b: 150,
};
pub const COLOR_SETUP: Color = Color::Rgb {
    r: 238,
    g: 212,
    b: 159,
};
