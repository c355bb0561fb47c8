// src/app/frame_clock.rs
//! requestAnimationFrame のタイムスタンプ (ミリ秒) からフレーム時間 (秒) を出すよ。⏱️

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrameClock {
    last_timestamp_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 前回からの経過秒数を返す。
    /// - 最初のフレームは 0
    /// - 時間が巻き戻ったら 0 (タイムスタンプはそのまま更新)
    /// - NaN や無限大は無視して 0
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let delta_ms = match self.last_timestamp_ms {
            Some(last) => (timestamp_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_timestamp_ms = Some(timestamp_ms);
        (delta_ms / 1000.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_zero_then_deltas_in_seconds() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1000.0), 0.0);
        assert!((clock.tick(1016.0) - 0.016).abs() < 1e-6);
        assert!((clock.tick(1116.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn backwards_and_invalid_timestamps_give_zero() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0, "巻き戻りは 0");
        assert!((clock.tick(450.0) - 0.05).abs() < 1e-6, "巻き戻った時刻から数え直す");
        assert_eq!(clock.tick(f64::NAN), 0.0);
        assert!((clock.tick(460.0) - 0.01).abs() < 1e-6, "NaN は無かったことに");
    }
}
