use macroquad::prelude::*;

use crate::config::{PLAYER_SIZE, PLAYER_SPAWN, SCREEN_H};
use crate::model::Entity;

// 玩家实体：受重力下落，按键上跳
#[derive(Clone, Debug)]
pub struct Player {
    pub body: Entity,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    // 在屏幕左侧四分之一、垂直居中处出生，初速度为零
    pub fn new() -> Self {
        Self {
            body: Entity::new(
                vec2(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
                Vec2::ZERO,
                vec2(PLAYER_SIZE.0, PLAYER_SIZE.1),
            ),
        }
    }

    // 上跳：先上移 nudge，再直接覆盖纵向速度
    pub fn jump(&mut self, nudge: f32, velocity: f32) {
        self.body.pos.y -= nudge;
        self.body.vel.y = velocity;
    }

    // 先按当前速度移动，再叠加每帧固定的重力增量
    pub fn integrate(&mut self, gravity: f32) {
        self.body.advance();
        self.body.vel += vec2(0.0, gravity);
    }

    // 是否越出可玩纵向区间 [-h/2, 屏高 + h/2]
    pub fn out_of_band(&self) -> bool {
        let half = self.body.size.y / 2.0;
        self.body.pos.y < -half || self.body.pos.y > SCREEN_H + half
    }
}
