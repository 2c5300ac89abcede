use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator, TextureQuery};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use crate::geometry::{Anchor, Bounds, Position};

/// Render `text` with its box placed at `anchor`. Returns the drawn box.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    color: Color,
    anchor: Anchor,
    area: &Bounds,
) -> Result<Bounds, String> {
    let surface = font
        .render(text)
        .blended(color)
        .map_err(|e| e.to_string())?;
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let TextureQuery { width, height, .. } = texture.query();
    let top_left = anchor.resolve(area, width as f32, height as f32);
    canvas.copy(
        &texture,
        None,
        Some(Rect::new(top_left.x.floor() as i32, top_left.y.floor() as i32, width, height)),
    )?;

    Ok(Bounds::at(top_left, width as f32, height as f32))
}

/// Render `text` centered on `center`.
pub fn draw_centered_text(
    canvas: &mut Canvas<Window>,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    color: Color,
    center: Position,
) -> Result<Bounds, String> {
    let (width, height) = font.size_of(text).map_err(|e| e.to_string())?;
    let anchor = Anchor::new(
        center.x - width as f32 / 2.0,
        center.y - height as f32 / 2.0,
        crate::geometry::Corner::TopLeft,
    );
    let origin = Bounds::from_size(0.0, 0.0);
    draw_text(canvas, texture_creator, font, text, color, anchor, &origin)
}

pub fn score_line(score: u64) -> String {
    format!("Score: {}", score)
}

pub fn best_line(best: u64) -> String {
    format!("Best: {}", best)
}

pub fn fps_line(fps: f32) -> String {
    format!("{:.0} FPS", fps)
}
