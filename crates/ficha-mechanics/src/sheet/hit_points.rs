//! Hit points: a clamped current value, a maximum, and a temporary buffer.

use serde::{Deserialize, Serialize};

/// Hit points with a current value kept between 0 and `max`.
///
/// Deserialized values go through the same clamps as the setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHitPoints")]
pub struct HitPoints {
    /// Current hit points.
    pub current: i32,
    /// Maximum hit points (at least 1).
    pub max: i32,
    /// Temporary hit points, spent before `current`.
    pub temp: i32,
}

#[derive(Deserialize)]
struct RawHitPoints {
    current: i32,
    max: i32,
    #[serde(default)]
    temp: i32,
}

impl From<RawHitPoints> for HitPoints {
    fn from(raw: RawHitPoints) -> Self {
        let mut hp = Self::with_current(raw.max, raw.current);
        hp.set_temp(raw.temp);
        hp
    }
}

impl Default for HitPoints {
    fn default() -> Self {
        Self::new(8)
    }
}

impl HitPoints {
    /// Full hit points at the given maximum (raised to 1 if lower).
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self {
            current: max,
            max,
            temp: 0,
        }
    }

    /// Hit points with an explicit current value, clamped into `0..=max`.
    pub fn with_current(max: i32, current: i32) -> Self {
        let mut hp = Self::new(max);
        hp.set_current(current);
        hp
    }

    /// Change the maximum. Current hit points above the new maximum drop to it.
    pub fn set_max(&mut self, max: i32) -> i32 {
        self.max = max.max(1);
        self.current = self.current.min(self.max);
        self.max
    }

    /// Set current hit points, clamped into `0..=max`. Returns the new value.
    pub fn set_current(&mut self, current: i32) -> i32 {
        self.current = current.clamp(0, self.max);
        self.current
    }

    /// Set temporary hit points (never negative).
    pub fn set_temp(&mut self, temp: i32) -> i32 {
        self.temp = temp.max(0);
        self.temp
    }

    /// Apply damage, spending temporary hit points first. Returns current hit points.
    pub fn damage(&mut self, amount: i32) -> i32 {
        let amount = amount.max(0);
        let absorbed = amount.min(self.temp);
        self.temp -= absorbed;
        self.set_current(self.current.saturating_sub(amount - absorbed))
    }

    /// Heal up to the maximum. Returns current hit points.
    pub fn heal(&mut self, amount: i32) -> i32 {
        self.set_current(self.current.saturating_add(amount.max(0)))
    }

    /// True at zero current hit points.
    pub fn is_down(&self) -> bool {
        self.current == 0
    }

    /// Fraction of maximum remaining (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        f64::from(self.current) / f64::from(self.max)
    }
}

impl std::fmt::Display for HitPoints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)?;
        if self.temp > 0 {
            write!(f, " (+{} temp)", self.temp)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_full() {
        let hp = HitPoints::new(12);
        assert_eq!(hp.current, 12);
        assert_eq!(hp.max, 12);
        assert_eq!(hp.temp, 0);
        assert!((hp.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn max_is_at_least_one() {
        assert_eq!(HitPoints::new(0).max, 1);
        let mut hp = HitPoints::new(5);
        assert_eq!(hp.set_max(-3), 1);
        assert_eq!(hp.current, 1);
    }

    #[test]
    fn lowering_max_clamps_current() {
        let mut hp = HitPoints::new(45);
        hp.set_max(30);
        assert_eq!(hp.current, 30);
    }

    #[test]
    fn raising_max_keeps_current() {
        let mut hp = HitPoints::with_current(32, 28);
        hp.set_max(40);
        assert_eq!(hp.current, 28);
        assert_eq!(hp.max, 40);
    }

    #[test]
    fn current_clamped_to_range() {
        let mut hp = HitPoints::new(10);
        assert_eq!(hp.set_current(15), 10);
        assert_eq!(hp.set_current(-4), 0);
        assert!(hp.is_down());
    }

    #[test]
    fn temp_absorbs_damage_first() {
        let mut hp = HitPoints::new(10);
        hp.set_temp(3);
        assert_eq!(hp.damage(5), 8);
        assert_eq!(hp.temp, 0);
        assert_eq!(hp.damage(20), 0);
    }

    #[test]
    fn heal_caps_at_max() {
        let mut hp = HitPoints::with_current(10, 4);
        assert_eq!(hp.heal(3), 7);
        assert_eq!(hp.heal(100), 10);
        assert_eq!(hp.heal(-5), 10);
    }

    #[test]
    fn negative_temp_rejected() {
        let mut hp = HitPoints::new(10);
        assert_eq!(hp.set_temp(-2), 0);
    }

    #[test]
    fn deserialize_clamps_out_of_range_values() {
        let hp: HitPoints =
            serde_json::from_str(r#"{"current":50,"max":0,"temp":-4}"#).unwrap();
        assert_eq!(hp, HitPoints::new(1));

        let hp: HitPoints = serde_json::from_str(r#"{"current":-3,"max":20}"#).unwrap();
        assert_eq!(hp.current, 0);
        assert_eq!(hp.temp, 0);
    }

    #[test]
    fn serde_keeps_valid_values() {
        let mut hp = HitPoints::with_current(32, 28);
        hp.set_temp(5);
        let json = serde_json::to_string(&hp).unwrap();
        assert_eq!(json, r#"{"current":28,"max":32,"temp":5}"#);
        assert_eq!(serde_json::from_str::<HitPoints>(&json).unwrap(), hp);
    }

    #[test]
    fn display() {
        let mut hp = HitPoints::with_current(32, 28);
        insta::assert_snapshot!(hp.to_string(), @"28/32");
        hp.set_temp(5);
        insta::assert_snapshot!(hp.to_string(), @"28/32 (+5 temp)");
    }
}
