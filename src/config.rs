//! Game settings, loaded from an optional TOML file and overridden from the
//! command line.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::theme::{Theme, ThemeName};

#[derive(Parser, Debug, Default)]
#[command(name = "racey")]
#[command(about = "A bit Racey: dodge the falling blocks")]
pub struct Args {
    /// Path to a TOML settings file (defaults to ./racey.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,
    /// Seed for obstacle placement, for repeatable runs
    #[arg(long)]
    pub seed: Option<u64>,
    /// Target frames per second
    #[arg(long)]
    pub fps: Option<u32>,
    /// Directory holding the car images and HUD font
    #[arg(long)]
    pub assets: Option<PathBuf>,
    /// Start a new run automatically after the death screen
    #[arg(long)]
    pub auto_restart: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub max_fps: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            max_fps: MAX_FPS,
            title: WINDOW_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub name: ThemeName,
    /// Overrides the theme's choice of car sprite.
    pub alternate_textures: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerSettings {
    pub speed: f32,
    pub bottom_padding: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            bottom_padding: PLAYER_BOTTOM_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObstacleSettings {
    pub width: f32,
    pub height: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_step: f32,
    pub base_interval: u32,
    pub min_interval: u32,
    pub interval_step: u32,
    pub ramp_ticks: u64,
    pub first_delay: u32,
}

impl Default for ObstacleSettings {
    fn default() -> Self {
        Self {
            width: BLOCK_SIZE,
            height: BLOCK_SIZE,
            base_speed: BLOCK_BASE_SPEED,
            max_speed: BLOCK_MAX_SPEED,
            speed_step: BLOCK_SPEED_STEP,
            base_interval: SPAWN_BASE_INTERVAL,
            min_interval: SPAWN_MIN_INTERVAL,
            interval_step: SPAWN_INTERVAL_STEP,
            ramp_ticks: DIFFICULTY_RAMP_TICKS,
            first_delay: FIRST_SPAWN_DELAY,
        }
    }
}

/// Key names as understood by SDL (`"Left"`, `"A"`, `"Return"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlSettings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub restart: Vec<String>,
    pub pause: Vec<String>,
    pub quit: Vec<String>,
}

impl Default for ControlSettings {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();
        Self {
            left: keys(&["Left", "A"]),
            right: keys(&["Right", "D"]),
            restart: keys(&["Return", "Space"]),
            pause: keys(&["P"]),
            quit: keys(&["Escape"]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    pub seed: Option<u64>,
    pub auto_restart: bool,
    pub death_screen_secs: f32,
    pub show_fps: bool,
    pub asset_dir: PathBuf,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            seed: None,
            auto_restart: false,
            death_screen_secs: DEATH_SCREEN_SECS,
            show_fps: true,
            asset_dir: PathBuf::from(ASSET_DIR),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window: WindowSettings,
    pub theme: ThemeSettings,
    pub player: PlayerSettings,
    pub obstacles: ObstacleSettings,
    pub controls: ControlSettings,
    pub game: GameSettings,
}

impl Settings {
    /// Load settings. An explicit path must exist; without one, `racey.toml`
    /// in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    log::debug!("No {} found, using built-in settings", CONFIG_FILE);
                    Self::default()
                }
            }
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let settings = Self::from_toml(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(theme) = args.theme {
            self.theme.name = theme;
        }
        if let Some(seed) = args.seed {
            self.game.seed = Some(seed);
        }
        if let Some(fps) = args.fps {
            self.window.max_fps = fps;
        }
        if let Some(assets) = &args.assets {
            self.game.asset_dir = assets.clone();
        }
        if args.auto_restart {
            self.game.auto_restart = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            bail!("window size must be positive, got {}x{}", self.window.width, self.window.height);
        }
        if self.window.max_fps == 0 {
            bail!("max_fps must be positive");
        }
        positive("player speed", self.player.speed)?;
        non_negative("player bottom_padding", self.player.bottom_padding)?;

        let o = &self.obstacles;
        positive("obstacle width", o.width)?;
        positive("obstacle height", o.height)?;
        positive("obstacle base_speed", o.base_speed)?;
        positive("obstacle max_speed", o.max_speed)?;
        if o.max_speed < o.base_speed {
            bail!(
                "obstacle speeds must satisfy base_speed <= max_speed, got {} and {}",
                o.base_speed,
                o.max_speed
            );
        }
        non_negative("obstacle speed_step", o.speed_step)?;
        if o.min_interval == 0 || o.base_interval < o.min_interval {
            bail!(
                "spawn intervals must satisfy 0 < min_interval <= base_interval, got {} and {}",
                o.min_interval,
                o.base_interval
            );
        }
        if o.ramp_ticks == 0 {
            bail!("obstacle ramp_ticks must be positive");
        }

        let secs = self.game.death_screen_secs;
        non_negative("death_screen_secs", secs)?;
        if secs > MAX_DEATH_SCREEN_SECS {
            bail!("death_screen_secs must be at most {}, got {}", MAX_DEATH_SCREEN_SECS, secs);
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        let mut theme = Theme::from_name(self.theme.name);
        if let Some(alternate) = self.theme.alternate_textures {
            theme.alternate_textures = alternate;
        }
        theme
    }

    pub fn car_image_path(&self) -> PathBuf {
        let file = if self.theme().alternate_textures {
            CAR_IMAGE_ALT
        } else {
            CAR_IMAGE
        };
        self.game.asset_dir.join(file)
    }

    pub fn font_path(&self) -> PathBuf {
        self.game.asset_dir.join(HUD_FONT)
    }
}

// NaN fails both comparisons, so it is rejected along with out-of-range values.
fn positive(name: &str, value: f32) -> Result<()> {
    if !(value.is_finite() && value > 0.0) {
        bail!("{} must be a positive number, got {}", name, value);
    }
    Ok(())
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    if !(value.is_finite() && value >= 0.0) {
        bail!("{} must be a non-negative number, got {}", name, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.window.max_fps, 60);
        assert_eq!(settings.theme.name, ThemeName::Night);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [window]
            width = 480

            [obstacles]
            base_speed = 3.0

            [controls]
            left = ["J"]
            "#,
        )
        .unwrap();
        assert_eq!(settings.window.width, 480);
        assert_eq!(settings.window.height, WINDOW_HEIGHT);
        assert_eq!(settings.obstacles.base_speed, 3.0);
        assert_eq!(settings.obstacles.width, BLOCK_SIZE);
        assert_eq!(settings.controls.left, vec!["J".to_string()]);
        assert_eq!(settings.controls.right, vec!["Right".to_string(), "D".to_string()]);
    }

    #[test]
    fn example_file_matches_defaults() {
        let settings = Settings::from_toml(include_str!("../racey.example.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("[window]\nwidht = 10\n").is_err());
        assert!(Settings::from_toml("[sound]\nvolume = 1\n").is_err());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.window.max_fps = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.obstacles.min_interval = 100;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.player.speed = -1.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.obstacles.speed_step = f32::INFINITY;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn nan_values_are_rejected() {
        for section in [
            "[player]\nspeed = nan",
            "[player]\nbottom_padding = nan",
            "[obstacles]\nwidth = nan",
            "[obstacles]\nheight = nan",
            "[obstacles]\nbase_speed = nan",
            "[obstacles]\nmax_speed = nan",
            "[obstacles]\nspeed_step = nan",
            "[game]\ndeath_screen_secs = nan",
        ] {
            let settings = Settings::from_toml(section).unwrap();
            let err = settings.validate().unwrap_err();
            assert!(err.to_string().contains("NaN"), "{section}: {err}");
        }
    }

    #[test]
    fn huge_death_screen_is_rejected() {
        let settings = Settings::from_toml("[game]\ndeath_screen_secs = 1e30").unwrap();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.game.death_screen_secs = MAX_DEATH_SCREEN_SECS;
        settings.validate().unwrap();
    }

    #[test]
    fn args_override_file_values() {
        let mut settings = Settings::default();
        let args = Args {
            theme: Some(ThemeName::Default),
            seed: Some(9),
            fps: Some(30),
            assets: Some(PathBuf::from("/opt/racey/assets")),
            auto_restart: true,
            ..Args::default()
        };
        settings.apply_args(&args);
        assert_eq!(settings.theme.name, ThemeName::Default);
        assert_eq!(settings.game.seed, Some(9));
        assert_eq!(settings.window.max_fps, 30);
        assert!(settings.game.auto_restart);
        assert_eq!(settings.font_path(), PathBuf::from("/opt/racey/assets/fonts/hud.ttf"));
    }

    #[test]
    fn alternate_textures_pick_the_alt_sprite() {
        let mut settings = Settings::default();
        assert!(settings.car_image_path().ends_with("racecar.png"));
        settings.theme.alternate_textures = Some(true);
        assert!(settings.car_image_path().ends_with("racecar-alt.png"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn cli_parses_without_arguments() {
        let args = Args::try_parse_from(["racey"]).unwrap();
        assert!(args.config.is_none());
        let args = Args::try_parse_from(["racey", "--theme", "default", "--seed", "3"]).unwrap();
        assert_eq!(args.theme, Some(ThemeName::Default));
        assert_eq!(args.seed, Some(3));
    }
}
