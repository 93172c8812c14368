use std::fs;

use macroquad::prelude::Conf;
use serde::Deserialize;

use crate::error::GameError;

pub const SCREEN_W: f32 = 800.0;
pub const SCREEN_H: f32 = 600.0;

// 固定帧步长（时间单位/帧）
pub const DELTA_TIME: f32 = 1.0 / 60.0;
// 首次生成障碍的时间点
pub const FIRST_INTERVAL: f32 = 1.0;

pub const PLAYER_SIZE: (f32, f32) = (32.0, 32.0);
pub const PLAYER_SPAWN: (f32, f32) = (SCREEN_W / 4.0, SCREEN_H / 2.0);

pub const WALL_SIZE: (f32, f32) = (64.0, 512.0);
pub const WALL_SPAWN_X: f32 = 832.0;
// 下管与上管的基准纵坐标，间距固定为 700
pub const WALL_BOTTOM_Y: f32 = 650.0;
pub const WALL_TOP_Y: f32 = -50.0;

// 精灵表帧数与每帧停留的渲染帧数
pub const PLAYER_ANIM_FRAMES: i32 = 4;
pub const PLAYER_ANIM_HOLD: u32 = 5;

pub const LOSE_TEXT: &str = "You lose!";
pub const LOSE_TEXT_SIZE: u16 = 50;
pub const LOSE_TEXT_CENTER: (f32, f32) = (400.0, 300.0);

pub const BG_PATH: &str = "assets/bg.png";
pub const PLAYER_SHEET_PATH: &str = "assets/ptok.png";
pub const WALL_PATH: &str = "assets/pipe.png";
pub const FONT_PATH: &str = "assets/Starjedi.ttf";
pub const TUNING_PATH: &str = "data/tuning.json";

// 固定窗口尺寸，不允许缩放
pub fn window_conf() -> Conf {
    Conf {
        window_title: "FlappySGD".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        window_resizable: false,
        ..Default::default()
    }
}

// 可调参数（数据驱动），缺省值即原始手感
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_velocity: f32,
    pub jump_nudge: f32,
    pub wall_speed: f32,
    pub interval_min: i32,
    pub interval_max: i32,
    pub offset_min: i32,
    pub offset_max: i32,
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_velocity: -8.0,
            jump_nudge: 1.0,
            wall_speed: -1.0,
            interval_min: 3,
            interval_max: 6,
            offset_min: -150,
            offset_max: 150,
            seed: None,
        }
    }
}

impl Tuning {
    // 从JSON文件加载参数
    pub fn load_from_file(path: &str) -> Result<Self, GameError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, GameError> {
        let mut tuning: Tuning = serde_json::from_str(text)?;
        // 区间写反时交换，保证随机区间有效
        if tuning.interval_min > tuning.interval_max {
            std::mem::swap(&mut tuning.interval_min, &mut tuning.interval_max);
        }
        if tuning.offset_min > tuning.offset_max {
            std::mem::swap(&mut tuning.offset_min, &mut tuning.offset_max);
        }
        Ok(tuning)
    }

    // 加载失败时回退到默认参数
    pub fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(tuning) => {
                log::info!("loaded tuning from {path}");
                tuning
            }
            Err(e) => {
                log::warn!("using default tuning ({path}: {e})");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.25, "seed": 7 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.25);
        assert_eq!(tuning.seed, Some(7));
        assert_eq!(tuning.jump_velocity, -8.0);
        assert_eq!(tuning.interval_min, 3);
        assert_eq!(tuning.offset_max, 150);
    }

    #[test]
    fn test_swapped_ranges_are_normalized() {
        let tuning =
            Tuning::from_json(r#"{ "interval_min": 6, "interval_max": 3, "offset_min": 10, "offset_max": -10 }"#)
                .unwrap();
        assert_eq!((tuning.interval_min, tuning.interval_max), (3, 6));
        assert_eq!((tuning.offset_min, tuning.offset_max), (-10, 10));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(Tuning::from_json("{ gravity"), Err(GameError::Tuning(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default("data/definitely-missing-tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_gap_between_wall_bases() {
        assert_eq!(WALL_BOTTOM_Y - WALL_TOP_Y, 700.0);
    }
}
