use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(220, 40, 40);
    pub const ASPHALT: Rgb = Rgb(38, 40, 51);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Default,
    #[default]
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub alternate_textures: bool,
    pub background: Rgb,
    pub foreground: Rgb,
    pub foreground_bad: Rgb,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Theme {
                alternate_textures: false,
                background: Rgb::WHITE,
                foreground: Rgb::BLACK,
                foreground_bad: Rgb::RED,
            },
            ThemeName::Night => Theme {
                alternate_textures: false,
                background: Rgb::ASPHALT,
                foreground: Rgb::WHITE,
                foreground_bad: Rgb::RED,
            },
        }
    }

    /// Lane paint, halfway between background and foreground.
    pub fn lane_marking(&self) -> Rgb {
        let mix = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
        Rgb(
            mix(self.background.0, self.foreground.0),
            mix(self.background.1, self.foreground.1),
            mix(self.background.2, self.foreground.2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_is_light_on_asphalt() {
        let theme = Theme::from_name(ThemeName::default());
        assert_eq!(theme.background, Rgb::ASPHALT);
        assert_eq!(theme.foreground, Rgb::WHITE);
    }

    #[test]
    fn lane_marking_sits_between_colors() {
        let theme = Theme::from_name(ThemeName::Default);
        assert_eq!(theme.lane_marking(), Rgb(127, 127, 127));
    }
}
