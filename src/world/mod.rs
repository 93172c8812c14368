use macroquad::prelude::vec2;

use crate::config::{Tuning, DELTA_TIME, WALL_BOTTOM_Y, WALL_SIZE, WALL_SPAWN_X, WALL_TOP_Y};
use crate::model::Entity;
use crate::world::spawn::{SpawnSource, SpawnTimer};

pub mod spawn;

pub type Wall = Entity;

// 世界状态：管道列表与生成计时
// 移出屏幕的管道不会被回收，列表随游戏时长增长
pub struct World {
    pub walls: Vec<Wall>,
    pub timer: SpawnTimer,
    source: Box<dyn SpawnSource>,
    wall_speed: f32,
}

impl World {
    pub fn new(source: Box<dyn SpawnSource>, tuning: &Tuning) -> Self {
        Self {
            walls: Vec::new(),
            timer: SpawnTimer::default(),
            source,
            wall_speed: tuning.wall_speed,
        }
    }

    // 每帧检查计时，到点时生成一对管道并返回偏移
    pub fn update_spawn(&mut self) -> Option<i32> {
        if !self.timer.tick(DELTA_TIME) {
            return None;
        }
        let interval = self.source.draw_interval();
        self.timer.extend(interval);
        let offset = self.source.draw_offset();
        self.spawn_pair(offset);
        log::debug!(
            "spawned wall pair offset={} next_at={} total={}",
            offset,
            self.timer.interval,
            self.walls.len()
        );
        Some(offset)
    }

    // 同一横坐标生成下管与上管
    pub fn spawn_pair(&mut self, offset: i32) {
        let vel = vec2(self.wall_speed, 0.0);
        let size = vec2(WALL_SIZE.0, WALL_SIZE.1);
        for base_y in [WALL_BOTTOM_Y, WALL_TOP_Y] {
            self.walls
                .push(Entity::new(vec2(WALL_SPAWN_X, base_y + offset as f32), vel, size));
        }
    }
}
