use std::f32::consts::TAU;
use std::fs;

use image::{ImageBuffer, Rgba, RgbaImage};

// 与游戏内常量保持一致
const SCREEN_W: u32 = 800;
const SCREEN_H: u32 = 600;
const BIRD_FRAME: u32 = 32;
const BIRD_FRAMES: u32 = 4;
const PIPE_W: u32 = 64;
const PIPE_H: u32 = 512;

type Px = [u8; 4];

// 带透明度的像素混合
fn put(img: &mut RgbaImage, x: i32, y: i32, src: Px) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let dst = img.get_pixel(x as u32, y as u32).0;
    let a = src[3] as f32 / 255.0;
    if a >= 1.0 {
        img.put_pixel(x as u32, y as u32, Rgba(src));
        return;
    }
    let mix = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)) as u8;
    let out_a = (a + dst[3] as f32 / 255.0 * (1.0 - a)) * 255.0;
    img.put_pixel(
        x as u32,
        y as u32,
        Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), out_a as u8]),
    );
}

fn rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Px) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            put(img, x, y, color);
        }
    }
}

fn ellipse(img: &mut RgbaImage, cx: i32, cy: i32, rx: i32, ry: i32, color: Px) {
    let rx2 = (rx * rx).max(1) as f32;
    let ry2 = (ry * ry).max(1) as f32;
    for y in (cy - ry)..=(cy + ry) {
        for x in (cx - rx)..=(cx + rx) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            if dx * dx / rx2 + dy * dy / ry2 <= 1.0 {
                put(img, x, y, color);
            }
        }
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t.clamp(0.0, 1.0)) as u8
}

// 背景：天空渐变 + 远山 + 地面
fn background() -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(SCREEN_W, SCREEN_H);
    let ground = SCREEN_H as i32 - 60;
    for y in 0..SCREEN_H as i32 {
        let t = y as f32 / ground as f32;
        let sky = [lerp(90, 190, t), lerp(170, 230, t), lerp(235, 250, t), 255];
        for x in 0..SCREEN_W as i32 {
            put(&mut img, x, y, sky);
        }
    }
    for i in 0..6 {
        let cx = i * 160 + 40;
        ellipse(&mut img, cx, ground, 110, 70, [120, 190, 130, 255]);
    }
    rect(&mut img, 0, ground, SCREEN_W as i32, SCREEN_H as i32, [222, 200, 130, 255]);
    rect(&mut img, 0, ground, SCREEN_W as i32, ground + 6, [110, 190, 60, 255]);
    img
}

// 小鸟精灵表：4帧水平排列，翅膀上下摆动
fn bird_sheet() -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(BIRD_FRAME * BIRD_FRAMES, BIRD_FRAME);
    for frame in 0..BIRD_FRAMES {
        let ox = (frame * BIRD_FRAME) as i32;
        let cx = ox + 16;
        let cy = 16;
        let phase = frame as f32 / BIRD_FRAMES as f32 * TAU;
        let wing = (phase.sin() * 5.0).round() as i32;

        ellipse(&mut img, cx, cy, 12, 10, [250, 205, 40, 255]);
        ellipse(&mut img, cx - 5, cy + wing, 6, 3, [240, 240, 230, 255]);
        ellipse(&mut img, cx + 5, cy - 4, 4, 4, [255, 255, 255, 255]);
        ellipse(&mut img, cx + 6, cy - 4, 1, 2, [20, 20, 20, 255]);
        rect(&mut img, cx + 9, cy + 1, cx + 14, cy + 3, [240, 110, 40, 255]);
        ellipse(&mut img, cx, cy + 6, 8, 2, [230, 170, 30, 160]);
    }
    img
}

// 管道：主体带高光，顶部有管口
fn pipe() -> RgbaImage {
    let mut img: RgbaImage = ImageBuffer::new(PIPE_W, PIPE_H);
    let w = PIPE_W as i32;
    let h = PIPE_H as i32;
    for x in 4..w - 4 {
        let t = (x - 4) as f32 / (w - 8) as f32;
        let shade = 1.0 - (t - 0.3).abs();
        let body = [lerp(40, 130, shade), lerp(120, 210, shade), lerp(30, 70, shade), 255];
        for y in 0..h {
            put(&mut img, x, y, body);
        }
    }
    for lip in [0, h - 24] {
        rect(&mut img, 0, lip, w - 1, lip + 23, [70, 160, 50, 255]);
        rect(&mut img, 0, lip, w - 1, lip + 1, [30, 80, 20, 255]);
        rect(&mut img, 0, lip + 22, w - 1, lip + 23, [30, 80, 20, 255]);
    }
    img
}

fn main() -> Result<(), String> {
    fs::create_dir_all("assets").map_err(|e| format!("create assets dir failed: {e}"))?;

    let outputs = [
        ("assets/bg.png", background()),
        ("assets/ptok.png", bird_sheet()),
        ("assets/pipe.png", pipe()),
    ];
    for (path, img) in outputs {
        img.save(path).map_err(|e| format!("save {path} failed: {e}"))?;
        println!("wrote {} ({}x{})", path, img.width(), img.height());
    }
    println!("font not generated: place Starjedi.ttf under assets/");
    Ok(())
}
