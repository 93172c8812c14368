use macroquad::prelude::*;

pub struct Ui {
    pub font: Font,
}

// 使用加载的字体绘制文字（y 为基线）
pub fn draw_text_ui(ui: &Ui, text: &str, x: f32, y: f32, size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font: Some(&ui.font),
            font_size: size,
            color,
            ..Default::default()
        },
    );
}

// 测量文字宽高，用于布局计算
pub fn measure_text_ui(ui: &Ui, text: &str, size: u16) -> TextDimensions {
    measure_text(text, Some(&ui.font), size, 1.0)
}

// 以给定点为中心绘制文字
pub fn draw_text_centered_at(ui: &Ui, text: &str, center: (f32, f32), size: u16, color: Color) {
    let dims = measure_text_ui(ui, text, size);
    let x = center.0 - dims.width * 0.5;
    let y = center.1 - dims.height * 0.5 + dims.offset_y;
    draw_text_ui(ui, text, x, y, size, color);
}
