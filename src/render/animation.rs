use macroquad::prelude::Rect;

// 水平精灵表动画：每隔 hold 个渲染帧前进一帧，到表宽处回到 0
#[derive(Clone, Copy, Debug)]
pub struct SpriteAnimation {
    offset_x: i32,
    frame_w: i32,
    frame_h: i32,
    sheet_w: i32,
    hold: u32,
    elapsed: u32,
}

impl SpriteAnimation {
    pub fn new(sheet_w: i32, sheet_h: i32, frames: i32, hold: u32) -> Self {
        Self {
            offset_x: 0,
            frame_w: sheet_w / frames.max(1),
            frame_h: sheet_h,
            sheet_w,
            hold,
            elapsed: 0,
        }
    }

    // 每个渲染帧调用一次
    pub fn tick(&mut self) {
        self.elapsed += 1;
        if self.elapsed < self.hold {
            return;
        }
        self.elapsed = 0;
        self.offset_x += self.frame_w;
        if self.offset_x >= self.sheet_w {
            self.offset_x = 0;
        }
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    // 当前帧在精灵表中的源矩形
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            self.offset_x() as f32,
            0.0,
            self.frame_w as f32,
            self.frame_h as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_four_offsets_every_five_frames() {
        let mut anim = SpriteAnimation::new(128, 32, 4, 5);
        let mut seen = vec![anim.offset_x()];
        for _ in 0..25 {
            for _ in 0..4 {
                anim.tick();
                assert_eq!(anim.offset_x(), *seen.last().unwrap());
            }
            anim.tick();
            seen.push(anim.offset_x());
        }
        assert_eq!(&seen[..6], &[0, 32, 64, 96, 0, 32]);
        assert!(seen.iter().all(|x| [0, 32, 64, 96].contains(x)));
    }

    #[test]
    fn test_uneven_sheet_wraps_at_sheet_width() {
        // 130 / 4 = 32，第五次前进到 128 仍小于表宽，不回绕
        let mut anim = SpriteAnimation::new(130, 32, 4, 1);
        let offsets: Vec<i32> = (0..6)
            .map(|_| {
                anim.tick();
                anim.offset_x()
            })
            .collect();
        assert_eq!(offsets, vec![32, 64, 96, 128, 0, 32]);
    }

    #[test]
    fn test_source_rect_tracks_offset() {
        let mut anim = SpriteAnimation::new(128, 32, 4, 1);
        anim.tick();
        let src = anim.source_rect();
        assert_eq!((src.x, src.y, src.w, src.h), (32.0, 0.0, 32.0, 32.0));
    }
}
