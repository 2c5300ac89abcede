pub const WINDOW_WIDTH: u32 = 300;
pub const WINDOW_HEIGHT: u32 = 300;
pub const WINDOW_TITLE: &str = "A bit Racey";
pub const MAX_FPS: u32 = 60;

// Player car, speeds are in pixels per tick
pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_BOTTOM_PADDING: f32 = 5.0;
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 64.0;

pub const BLOCK_SIZE: f32 = 50.0;
pub const BLOCK_BASE_SPEED: f32 = 5.0;
pub const BLOCK_MAX_SPEED: f32 = 12.0;
pub const BLOCK_SPEED_STEP: f32 = 0.5;

// Spawn cadence, in ticks
pub const SPAWN_BASE_INTERVAL: u32 = 64;
pub const SPAWN_MIN_INTERVAL: u32 = 18;
pub const SPAWN_INTERVAL_STEP: u32 = 4;
pub const DIFFICULTY_RAMP_TICKS: u64 = 600;
pub const FIRST_SPAWN_DELAY: u32 = 140;

pub const MAX_DEATH_SCREEN_SECS: f32 = 60.0;
pub const DEATH_SCREEN_SECS: f32 = 2.0;

pub const ASSET_DIR: &str = "assets";
pub const CAR_IMAGE: &str = "racecar.png";
pub const CAR_IMAGE_ALT: &str = "racecar-alt.png";
pub const HUD_FONT: &str = "fonts/hud.ttf";
pub const CONFIG_FILE: &str = "racey.toml";
