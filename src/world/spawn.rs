use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{Tuning, FIRST_INTERVAL};

// 障碍生成所需的随机来源，测试中可替换为固定序列
pub trait SpawnSource {
    // 下一次生成前追加的间隔（整数时间单位）
    fn draw_interval(&mut self) -> i32;
    // 管道对的纵向偏移
    fn draw_offset(&mut self) -> i32;
}

// 启动时播种一次的 PCG 随机源
pub struct PcgSpawnSource {
    rng: Pcg32,
    intervals: RangeInclusive<i32>,
    offsets: RangeInclusive<i32>,
}

impl PcgSpawnSource {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            intervals: tuning.interval_min..=tuning.interval_max,
            offsets: tuning.offset_min..=tuning.offset_max,
        }
    }
}

impl SpawnSource for PcgSpawnSource {
    fn draw_interval(&mut self) -> i32 {
        self.rng.random_range(self.intervals.clone())
    }

    fn draw_offset(&mut self) -> i32 {
        self.rng.random_range(self.offsets.clone())
    }
}

// 生成计时：累计时间超过阈值即触发一次
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTimer {
    pub game_time: f32,
    pub interval: f32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            game_time: 0.0,
            interval: FIRST_INTERVAL,
        }
    }
}

impl SpawnTimer {
    // 推进一帧，返回本帧是否到达生成阈值
    pub fn tick(&mut self, dt: f32) -> bool {
        self.game_time += dt;
        self.game_time > self.interval
    }

    pub fn extend(&mut self, units: i32) {
        self.interval += units as f32;
    }
}

// 按预设序列返回的随机源
#[cfg(test)]
pub struct ScriptedSource {
    intervals: std::collections::VecDeque<i32>,
    offsets: std::collections::VecDeque<i32>,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(intervals: &[i32], offsets: &[i32]) -> Self {
        Self {
            intervals: intervals.iter().copied().collect(),
            offsets: offsets.iter().copied().collect(),
        }
    }
}

#[cfg(test)]
impl SpawnSource for ScriptedSource {
    fn draw_interval(&mut self) -> i32 {
        self.intervals.pop_front().unwrap_or(3)
    }

    fn draw_offset(&mut self) -> i32 {
        self.offsets.pop_front().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DELTA_TIME;

    #[test]
    fn test_pcg_draws_stay_in_range() {
        let mut source = PcgSpawnSource::new(12345, &Tuning::default());
        for _ in 0..1000 {
            let interval = source.draw_interval();
            let offset = source.draw_offset();
            assert!((3..=6).contains(&interval));
            assert!((-150..=150).contains(&offset));
        }
    }

    #[test]
    fn test_pcg_is_deterministic_per_seed() {
        let tuning = Tuning::default();
        let mut a = PcgSpawnSource::new(99, &tuning);
        let mut b = PcgSpawnSource::new(99, &tuning);
        for _ in 0..50 {
            assert_eq!(a.draw_interval(), b.draw_interval());
            assert_eq!(a.draw_offset(), b.draw_offset());
        }
    }

    #[test]
    fn test_timer_fires_after_first_interval() {
        let mut timer = SpawnTimer::default();
        let mut frames = 0;
        while !timer.tick(DELTA_TIME) {
            frames += 1;
            assert!(frames < 120, "timer never fired");
        }
        // 约 60 帧后首次触发
        assert!((59..=61).contains(&frames));
    }

    #[test]
    fn test_timer_extend_postpones_next_fire() {
        let mut timer = SpawnTimer {
            game_time: 1.0,
            interval: 1.0,
        };
        assert!(timer.tick(DELTA_TIME));
        timer.extend(3);
        assert_eq!(timer.interval, 4.0);
        assert!(!timer.tick(DELTA_TIME));
    }
}
