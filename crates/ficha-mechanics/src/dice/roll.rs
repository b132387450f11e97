//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results, in the order they were rolled.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).min().unwrap_or(0)
    }

    /// A copy of this result without its `n` lowest dice.
    ///
    /// Ties are broken by roll order: among equal values the earliest die is
    /// dropped first. Dropping more dice than were rolled yields an empty
    /// result.
    pub fn drop_lowest(&self, n: usize) -> RollResult {
        let mut order: Vec<usize> = (0..self.dice.len()).collect();
        order.sort_by_key(|&i| (self.dice[i].value, i));
        let dropped: Vec<usize> = order.into_iter().take(n).collect();

        let dice = self
            .dice
            .iter()
            .enumerate()
            .filter(|(i, _)| !dropped.contains(i))
            .map(|(_, d)| *d)
            .collect();
        RollResult { dice }
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(values: &[u32]) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|&value| DieResult {
                    die: Die::D6,
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn total() {
        assert_eq!(make_result(&[6, 3, 1]).total(), 10);
    }

    #[test]
    fn highest_and_lowest() {
        let r = make_result(&[3, 6, 1]);
        assert_eq!(r.highest(), 6);
        assert_eq!(r.lowest(), 1);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.highest(), 0);
        assert_eq!(r.lowest(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn drop_lowest_removes_smallest() {
        let r = make_result(&[4, 2, 6, 5]).drop_lowest(1);
        assert_eq!(r.count(), 3);
        assert_eq!(r.total(), 15);
    }

    #[test]
    fn drop_lowest_ties_drop_only_one() {
        let r = make_result(&[1, 1, 1, 1]).drop_lowest(1);
        assert_eq!(r.count(), 3);
        assert_eq!(r.total(), 3);
    }

    #[test]
    fn drop_lowest_keeps_roll_order() {
        let r = make_result(&[5, 1, 3, 6]).drop_lowest(1);
        let values: Vec<u32> = r.dice.iter().map(|d| d.value).collect();
        assert_eq!(values, vec![5, 3, 6]);
    }

    #[test]
    fn drop_more_than_rolled() {
        assert_eq!(make_result(&[2, 3]).drop_lowest(5).count(), 0);
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(make_result(&[3, 5]).to_string(), @"[3, 5] = 8");
    }
}
