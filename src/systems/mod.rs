use macroquad::prelude::*;

use crate::model::{Game, LossCause};

// 单帧输入快照
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub jump: bool,
    pub quit: bool,
}

// 读取键盘状态（按住即生效，不是边沿触发）与退出请求
pub fn read_input() -> FrameInput {
    FrameInput {
        jump: is_key_down(KeyCode::Up),
        quit: is_quit_requested(),
    }
}

// 单帧模拟：生成 → 输入 → 积分 → 越界 → 碰撞
// 包围盒在渲染阶段才刷新，因此碰撞使用的是上一帧的包围盒
pub fn step_frame(game: &mut Game, input: FrameInput) {
    game.world.update_spawn();
    handle_jump(game, input);
    integrate_player(game);
    check_bounds(game);
    move_walls(game);
}

// 未失败时按住上键即上跳
pub fn handle_jump(game: &mut Game, input: FrameInput) {
    if game.lost || !input.jump {
        return;
    }
    let (nudge, velocity) = (game.tuning.jump_nudge, game.tuning.jump_velocity);
    game.player.jump(nudge, velocity);
}

// 失败后仍继续下落
pub fn integrate_player(game: &mut Game) {
    let gravity = game.tuning.gravity;
    game.player.integrate(gravity);
}

pub fn check_bounds(game: &mut Game) {
    if game.player.out_of_band() {
        game.mark_lost(LossCause::OutOfBounds);
    }
}

// 移动管道并与玩家做包围盒检测
pub fn move_walls(game: &mut Game) {
    let mut hit = false;
    for wall in &mut game.world.walls {
        wall.advance();
        if wall.collides(&game.player.body) {
            hit = true;
        }
    }
    if hit {
        game.mark_lost(LossCause::Collision);
    }
}
