/// Frame slider: a range input with `min = 0`.
///
/// `max` is the only record of the last upload's frame count (`n - 1`).
/// Nothing here clamps `value` into `[0, max]`; the browser's range input does that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Slider {
    pub max: i64,
    pub value: i64,
}

impl Slider {
    pub const MIN: i64 = 0;

    /// Reconfigure for a freshly uploaded file with `frames` frames and rewind to 0.
    pub fn reset_for_frames(&mut self, frames: i64) {
        self.max = frames - 1;
        self.value = 0;
    }

    /// Parse a range-input value. Range inputs only ever report integer strings.
    pub fn parse_input(raw: &str) -> Option<i64> {
        raw.trim().parse::<i64>().ok()
    }

    /// Text of the label paired with the slider.
    pub fn label(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_for_frames() {
        let mut slider = Slider { max: 9, value: 7 };
        slider.reset_for_frames(50);
        assert_eq!(slider.max, 49);
        assert_eq!(slider.value, 0);
        assert_eq!(slider.label(), "0");
    }

    #[test]
    fn test_reset_for_frames_holds_for_any_count() {
        for n in 1..200 {
            let mut slider = Slider::default();
            slider.reset_for_frames(n);
            assert_eq!(slider.max, n - 1);
            assert_eq!(slider.value, 0);
        }
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Slider::parse_input("10"), Some(10));
        assert_eq!(Slider::parse_input("0"), Some(0));
        assert_eq!(Slider::parse_input(""), None);
        assert_eq!(Slider::parse_input("abc"), None);
    }
}
