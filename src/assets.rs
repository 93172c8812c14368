use macroquad::prelude::{load_texture, load_ttf_font, FilterMode, Font, Texture2D};

use crate::config::{BG_PATH, FONT_PATH, PLAYER_SHEET_PATH, WALL_PATH};
use crate::error::GameError;

// 启动时一次性加载的纹理，随所有者一起释放
pub struct Assets {
    pub background: Texture2D,
    pub player_sheet: Texture2D,
    pub wall: Texture2D,
}

// 加载失败即返回错误，不做降级
async fn load_texture_checked(path: &str) -> Result<Texture2D, GameError> {
    let texture = load_texture(path)
        .await
        .map_err(|e| GameError::asset("load_texture", path, e))?;
    texture.set_filter(FilterMode::Nearest);
    log::info!("loaded {} ({}x{})", path, texture.width(), texture.height());
    Ok(texture)
}

pub async fn load_assets() -> Result<Assets, GameError> {
    Ok(Assets {
        background: load_texture_checked(BG_PATH).await?,
        player_sheet: load_texture_checked(PLAYER_SHEET_PATH).await?,
        wall: load_texture_checked(WALL_PATH).await?,
    })
}

// 加载提示文字所用字体
pub async fn load_ui_font() -> Result<Font, GameError> {
    let font = load_ttf_font(FONT_PATH)
        .await
        .map_err(|e| GameError::asset("load_ttf_font", FONT_PATH, e))?;
    log::info!("loaded font {}", FONT_PATH);
    Ok(font)
}
