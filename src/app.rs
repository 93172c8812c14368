use macroquad::prelude::{next_frame, prevent_quit};

use crate::assets::{load_assets, load_ui_font};
use crate::config::{Tuning, PLAYER_ANIM_FRAMES, PLAYER_ANIM_HOLD, TUNING_PATH};
use crate::error::GameError;
use crate::model::Game;
use crate::render::animation::SpriteAnimation;
use crate::render::draw_frame;
use crate::systems::{read_input, step_frame};
use crate::ui::Ui;
use crate::world::spawn::PcgSpawnSource;

// 游戏主循环：加载资源后逐帧模拟与渲染，直到窗口请求退出
pub async fn run() -> Result<(), GameError> {
    let tuning = Tuning::load_or_default(TUNING_PATH);

    let assets = load_assets().await?;
    let ui = Ui {
        font: load_ui_font().await?,
    };

    let seed = tuning.seed.unwrap_or_else(rand::random);
    log::info!("spawn rng seed: {}", seed);
    let source = PcgSpawnSource::new(seed, &tuning);
    let mut game = Game::new(tuning, Box::new(source));

    let mut anim = SpriteAnimation::new(
        assets.player_sheet.width() as i32,
        assets.player_sheet.height() as i32,
        PLAYER_ANIM_FRAMES,
        PLAYER_ANIM_HOLD,
    );

    // 关闭窗口时由循环自行退出
    prevent_quit();

    loop {
        let input = read_input();
        step_frame(&mut game, input);
        draw_frame(&mut game, &assets, &mut anim, &ui);

        // 帧率交给 next_frame 的垂直同步控制
        next_frame().await;

        if input.quit {
            break;
        }
    }

    log::info!(
        "quit requested (lost={}, walls={})",
        game.lost,
        game.world.walls.len()
    );
    Ok(())
}
