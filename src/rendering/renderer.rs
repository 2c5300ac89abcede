use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::core::GamePhase;
use crate::game::Game;
use crate::geometry::rect_extensions::RectExtensions;
use crate::geometry::{Anchor, Corner, Position};
use crate::rendering::hud;
use crate::rendering::road_renderer::RoadRenderer;
use crate::rendering::to_color;
use crate::theme::Theme;

const HUD_FONT_SIZE: u16 = 12;
const TITLE_FONT_SIZE: u16 = 40;
const HUD_MARGIN: f32 = 4.0;
// Pixels the lane paint moves per survived tick.
const LANE_SCROLL_SPEED: f32 = 4.0;

/// What the loop knows that the game does not.
pub struct FrameInfo {
    pub paused: bool,
    pub fps: Option<f32>,
}

pub struct Renderer<'a> {
    car_texture: Texture<'a>,
    hud_font: Font<'a, 'static>,
    title_font: Font<'a, 'static>,
    texture_creator: &'a TextureCreator<WindowContext>,
    theme: Theme,
    restart_hint: String,
}

impl<'a> Renderer<'a> {
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        ttf_context: &'a Sdl2TtfContext,
        car_image: &Path,
        font: &Path,
        theme: Theme,
        restart_hint: String,
    ) -> Result<Self, String> {
        if !car_image.exists() {
            return Err(format!("car image not found at {}", car_image.display()));
        }
        if !font.exists() {
            return Err(format!("HUD font not found at {}", font.display()));
        }

        let car_texture = texture_creator
            .load_texture(car_image)
            .map_err(|e| format!("could not load {}: {}", car_image.display(), e))?;
        let hud_font = ttf_context
            .load_font(font, HUD_FONT_SIZE)
            .map_err(|e| format!("could not load {}: {}", font.display(), e))?;
        let title_font = ttf_context
            .load_font(font, TITLE_FONT_SIZE)
            .map_err(|e| format!("could not load {}: {}", font.display(), e))?;

        log::info!("Loaded car sprite {}", car_image.display());

        Ok(Renderer {
            car_texture,
            hud_font,
            title_font,
            texture_creator,
            theme,
            restart_hint,
        })
    }

    /// Sprite size in pixels; the player hitbox uses the same size.
    pub fn car_size(&self) -> (f32, f32) {
        let query = self.car_texture.query();
        (query.width as f32, query.height as f32)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, game: &Game, frame: &FrameInfo) -> Result<(), String> {
        let area = *game.world().area();

        RoadRenderer::render_background(canvas, &self.theme);
        let scroll = game.session().score() as f32 * LANE_SCROLL_SPEED;
        RoadRenderer::render_lane_markers(canvas, &self.theme, &area, scroll)?;

        canvas.set_draw_color(to_color(self.theme.foreground));
        for obstacle in game.world().obstacles() {
            canvas.fill_rect(obstacle.bounds().to_rect())?;
        }

        let player = game.world().player().bounds();
        canvas.copy(&self.car_texture, None, Some(player.to_rect()))?;

        self.render_hud(canvas, game, frame)?;

        canvas.present();
        Ok(())
    }

    fn render_hud(&self, canvas: &mut Canvas<Window>, game: &Game, frame: &FrameInfo) -> Result<(), String> {
        let area = *game.world().area();
        let foreground = to_color(self.theme.foreground);

        let score = hud::draw_text(
            canvas,
            self.texture_creator,
            &self.hud_font,
            &hud::score_line(game.session().score()),
            foreground,
            Anchor::new(HUD_MARGIN, HUD_MARGIN, Corner::TopLeft),
            &area,
        )?;
        hud::draw_text(
            canvas,
            self.texture_creator,
            &self.hud_font,
            &hud::best_line(game.session().best_score()),
            foreground,
            Anchor::new(HUD_MARGIN, score.bottom, Corner::TopLeft),
            &area,
        )?;

        if let Some(fps) = frame.fps {
            hud::draw_text(
                canvas,
                self.texture_creator,
                &self.hud_font,
                &hud::fps_line(fps),
                foreground,
                Anchor::new(HUD_MARGIN, HUD_MARGIN, Corner::TopRight),
                &area,
            )?;
        }

        let center = area.center();
        if game.phase() == GamePhase::GameOver {
            let title = hud::draw_centered_text(
                canvas,
                self.texture_creator,
                &self.title_font,
                "You died!",
                to_color(self.theme.foreground_bad),
                center,
            )?;
            hud::draw_centered_text(
                canvas,
                self.texture_creator,
                &self.hud_font,
                &self.restart_hint,
                foreground,
                Position::new(center.x, title.bottom + HUD_MARGIN * 2.0),
            )?;
        } else if frame.paused {
            hud::draw_centered_text(
                canvas,
                self.texture_creator,
                &self.title_font,
                "Paused",
                foreground,
                center,
            )?;
        }
        Ok(())
    }
}
