use macroquad::prelude::*;

use crate::assets::Assets;
use crate::config::{LOSE_TEXT, LOSE_TEXT_CENTER, LOSE_TEXT_SIZE, SCREEN_H, SCREEN_W};
use crate::model::{BoundingBox, Game};
use crate::ui::{draw_text_centered_at, Ui};

pub mod animation;

use animation::SpriteAnimation;

// 重新计算所有实体的包围盒，供下一帧碰撞检测使用
pub fn refresh_bounds(game: &mut Game) {
    for wall in &mut game.world.walls {
        wall.refresh_bounds();
    }
    game.player.body.refresh_bounds();
}

// 把纹理按包围盒贴到屏幕上
fn blit(texture: &Texture2D, source: Option<Rect>, dest: BoundingBox) {
    let rect = dest.to_rect();
    draw_texture_ex(
        texture,
        rect.x,
        rect.y,
        WHITE,
        DrawTextureParams {
            source,
            dest_size: Some(vec2(rect.w, rect.h)),
            ..Default::default()
        },
    );
}

// 渲染阶段：刷新包围盒后依次绘制背景、管道、玩家与失败提示
pub fn draw_frame(game: &mut Game, assets: &Assets, anim: &mut SpriteAnimation, ui: &Ui) {
    refresh_bounds(game);

    clear_background(BLACK);
    draw_texture_ex(
        &assets.background,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(SCREEN_W, SCREEN_H)),
            ..Default::default()
        },
    );

    for wall in &game.world.walls {
        if let Some(bounds) = wall.bounds {
            blit(&assets.wall, None, bounds);
        }
    }

    anim.tick();
    if let Some(bounds) = game.player.body.bounds {
        blit(&assets.player_sheet, Some(anim.source_rect()), bounds);
    }

    if game.lost {
        draw_text_centered_at(ui, LOSE_TEXT, LOSE_TEXT_CENTER, LOSE_TEXT_SIZE, RED);
    }
}
