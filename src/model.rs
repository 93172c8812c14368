use macroquad::prelude::{Rect, Vec2};

use crate::actors::player::Player;
use crate::config::Tuning;
use crate::world::spawn::SpawnSource;
use crate::world::World;

// 整数包围盒：渲染定位与碰撞检测共用
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    // 以浮点位置为中心，向零截断取整
    pub fn from_center(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: (pos.x - size.x / 2.0) as i32,
            y: (pos.y - size.y / 2.0) as i32,
            w: size.x as i32,
            h: size.y as i32,
        }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    // 严格不等式：边缘相接不算重叠
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.bottom() > other.top()
            && self.top() < other.bottom()
            && self.right() > other.left()
            && self.left() < other.right()
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

// 通用实体：位置、速度、尺寸与上一帧渲染时的包围盒
#[derive(Clone, Debug)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub bounds: Option<BoundingBox>,
}

impl Entity {
    pub fn new(pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel,
            size,
            bounds: None,
        }
    }

    // 匀速移动一帧
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    // 渲染阶段重新计算包围盒
    pub fn refresh_bounds(&mut self) {
        self.bounds = Some(BoundingBox::from_center(self.pos, self.size));
    }

    // 使用已缓存的包围盒判定；尚未渲染过的实体不参与碰撞
    pub fn collides(&self, other: &Entity) -> bool {
        match (self.bounds, other.bounds) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LossCause {
    OutOfBounds,
    Collision,
}

// 一局游戏的全部状态
pub struct Game {
    pub player: Player,
    pub world: World,
    pub lost: bool,
    pub tuning: Tuning,
}

impl Game {
    pub fn new(tuning: Tuning, source: Box<dyn SpawnSource>) -> Self {
        Self {
            player: Player::new(),
            world: World::new(source, &tuning),
            lost: false,
            tuning,
        }
    }

    // 失败标记一旦置位便不再复原
    pub fn mark_lost(&mut self, cause: LossCause) {
        if !self.lost {
            log::info!(
                "game lost ({:?}) at player y={:.1}, walls={}",
                cause,
                self.player.body.pos.y,
                self.world.walls.len()
            );
        }
        self.lost = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::vec2;
    use proptest::prelude::*;

    #[test]
    fn test_from_center_truncates_toward_zero() {
        let bb = BoundingBox::from_center(vec2(200.0, 300.0), vec2(32.0, 32.0));
        assert_eq!(bb, BoundingBox::new(184, 284, 32, 32));

        // -0.5 与 -31.7 都向零截断
        let bb = BoundingBox::from_center(vec2(15.5, -15.7), vec2(32.0, 32.0));
        assert_eq!(bb.x, 0);
        assert_eq!(bb.y, -31);
        assert_eq!((bb.w, bb.h), (32, 32));
    }

    #[test]
    fn test_overlap_edges_do_not_count() {
        let a = BoundingBox::new(0, 0, 10, 10);
        assert!(!a.overlaps(&BoundingBox::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&BoundingBox::new(0, 10, 10, 10)));
        assert!(!a.overlaps(&BoundingBox::new(-10, -10, 10, 10)));
        assert!(a.overlaps(&BoundingBox::new(9, 9, 10, 10)));
        assert!(a.overlaps(&BoundingBox::new(2, 2, 3, 3)));
    }

    #[test]
    fn test_unrendered_entity_never_collides() {
        let mut a = Entity::new(vec2(0.0, 0.0), Vec2::ZERO, vec2(10.0, 10.0));
        let mut b = a.clone();
        assert!(!a.collides(&b));
        a.refresh_bounds();
        assert!(!a.collides(&b));
        b.refresh_bounds();
        assert!(a.collides(&b));
    }

    #[test]
    fn test_advance_adds_velocity() {
        let mut wall = Entity::new(vec2(832.0, 650.0), vec2(-1.0, 0.0), vec2(64.0, 512.0));
        wall.advance();
        wall.advance();
        assert_eq!(wall.pos, vec2(830.0, 650.0));
        assert!(wall.bounds.is_none());
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -1000i32..1000, ay in -1000i32..1000, aw in 0i32..600, ah in 0i32..600,
            bx in -1000i32..1000, by in -1000i32..1000, bw in 0i32..600, bh in 0i32..600,
        ) {
            let a = BoundingBox::new(ax, ay, aw, ah);
            let b = BoundingBox::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_touching_boxes_never_overlap(
            x in -500i32..500, y in -500i32..500, w in 1i32..300, h in 1i32..300, other_h in 1i32..300,
        ) {
            let a = BoundingBox::new(x, y, w, h);
            let right = BoundingBox::new(x + w, y, w, other_h);
            let below = BoundingBox::new(x, y + h, w, other_h);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!a.overlaps(&below));
        }
    }
}
