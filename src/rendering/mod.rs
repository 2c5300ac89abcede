pub mod hud;
pub mod renderer;
pub mod road_renderer;

pub use renderer::{FrameInfo, Renderer};

use sdl2::pixels::Color;

use crate::theme::Rgb;

pub fn to_color(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}
