//! Luck cycle pillar sequence.

use crate::dayun::types::{Direction, MAX_LUCK_STEPS};
use crate::error::BaseError;
use crate::pillar::Pillar;

/// `step_count` pillars walking the cycle away from `month_pillar`.
///
/// The month pillar itself is not included; the first pillar is one step away.
pub fn luck_pillars(
    month_pillar: Pillar,
    direction: Direction,
    step_count: u32,
) -> Result<Vec<Pillar>, BaseError> {
    validate_step_count(step_count)?;
    Ok((1..=step_count as i32)
        .map(|i| month_pillar.offset(i * direction.step()))
        .collect())
}

/// Reject zero and oversized step counts.
pub fn validate_step_count(step_count: u32) -> Result<(), BaseError> {
    if step_count == 0 {
        return Err(BaseError::InvalidInput("step count must be positive"));
    }
    if step_count > MAX_LUCK_STEPS {
        return Err(BaseError::InvalidInput("step count exceeds 120"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bingzi() -> Pillar {
        "丙子".parse().unwrap()
    }

    #[test]
    fn backward_from_bingzi() {
        let seq = luck_pillars(bingzi(), Direction::Backward, 9).unwrap();
        let text: Vec<String> = seq.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            text,
            ["乙亥", "甲戌", "癸酉", "壬申", "辛未", "庚午", "己巳", "戊辰", "丁卯"]
        );
    }

    #[test]
    fn forward_from_bingzi() {
        let seq = luck_pillars(bingzi(), Direction::Forward, 3).unwrap();
        let text: Vec<String> = seq.iter().map(|p| p.to_string()).collect();
        assert_eq!(text, ["丁丑", "戊寅", "己卯"]);
    }

    #[test]
    fn no_repeats_within_sixty() {
        for dir in [Direction::Forward, Direction::Backward] {
            let seq = luck_pillars(bingzi(), dir, 59).unwrap();
            let mut idx: Vec<u8> = seq.iter().map(|p| p.cycle_index()).collect();
            idx.sort_unstable();
            idx.dedup();
            assert_eq!(idx.len(), 59);
            assert!(!idx.contains(&bingzi().cycle_index()));
        }
    }

    #[test]
    fn rejects_bad_counts() {
        assert!(matches!(
            luck_pillars(bingzi(), Direction::Forward, 0),
            Err(BaseError::InvalidInput(_))
        ));
        assert!(luck_pillars(bingzi(), Direction::Forward, 121).is_err());
        assert!(luck_pillars(bingzi(), Direction::Forward, 120).is_ok());
    }
}
