//! Countdown arithmetic.

pub const TICK_MS: u32 = 1000;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = MS_PER_SECOND * 60;
const MS_PER_HOUR: i64 = MS_PER_MINUTE * 60;
const MS_PER_DAY: i64 = MS_PER_HOUR * 24;

/// Time left until the target, split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Both arguments are epoch milliseconds as returned by `Date.getTime()`.
    /// A target that is NaN (unparseable) counts as already passed.
    pub fn until(target_ms: f64, now_ms: f64) -> Self {
        let distance = target_ms - now_ms;
        if distance.is_nan() {
            return Self::default();
        }
        Self::from_distance_ms(distance.floor() as i64)
    }

    pub fn from_distance_ms(distance: i64) -> Self {
        if distance < 0 {
            return Self::default();
        }
        Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Days, hours, minutes, seconds as rendered.
    pub fn fields(&self) -> [String; 4] {
        [
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds),
        ]
    }
}

pub fn pad2(value: i64) -> String {
    format!("{value:02}")
}
