//! Pillars: valid (Stem, Branch) pairs of the sexagenary cycle (六十甲子).
//!
//! Stems and branches advance in lockstep, so only the 60 pairs whose indices
//! share parity are reachable. Construction always checks this.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::BaseError;
use crate::nayin::NaYin;
use crate::stem::{ALL_STEMS, Stem};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A (Stem, Branch) pair from the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch; mismatched parity is rejected.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, BaseError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(BaseError::MismatchedParity { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Pair from raw stem and branch indices.
    pub fn from_indices(stem: u8, branch: u8) -> Result<Self, BaseError> {
        Self::new(Stem::from_index(stem)?, Branch::from_index(branch)?)
    }

    /// Pillar at a cycle index (0 = 甲子 .. 59 = 癸亥).
    pub fn from_cycle_index(index: u8) -> Result<Self, BaseError> {
        if index >= CYCLE_LEN {
            return Err(BaseError::OutOfRange {
                what: "cycle",
                index: index as usize,
                limit: CYCLE_LEN as usize,
            });
        }
        Ok(Self::at(index))
    }

    /// Pillar at position `n` of the cycle, reduced mod 60.
    pub const fn nth(n: i64) -> Self {
        Self::at(n.rem_euclid(60) as u8)
    }

    const fn at(index: u8) -> Self {
        Self {
            stem: ALL_STEMS[(index % 10) as usize],
            branch: ALL_BRANCHES[(index % 12) as usize],
        }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the 60-cycle (0 = 甲子).
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// The pillar `steps` places later in the cycle (negative steps go back).
    pub const fn offset(self, steps: i32) -> Self {
        Self::at((self.cycle_index() as i32 + steps).rem_euclid(60) as u8)
    }

    pub const fn next(self) -> Self {
        self.offset(1)
    }

    pub const fn prev(self) -> Self {
        self.offset(-1)
    }

    /// Na Yin sound of this pillar.
    pub fn nayin(self) -> NaYin {
        NaYin::of(self)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = BaseError;

    /// Parses a two-character pillar such as `甲子`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(st), Some(br), None) => {
                let stem: Stem = st.to_string().parse()?;
                let branch: Branch = br.to_string().parse()?;
                Pillar::new(stem, branch)
            }
            _ => Err(BaseError::UnknownSymbol {
                what: "pillar",
                text: s.to_string(),
            }),
        }
    }
}

/// Pillar at a cycle index (0..=59).
pub fn pillar_at(cycle_index: u8) -> Result<Pillar, BaseError> {
    Pillar::from_cycle_index(cycle_index)
}

/// Cycle index (0..=59) of a pillar.
pub fn cycle_index_of(pillar: Pillar) -> u8 {
    pillar.cycle_index()
}

/// All 60 pillars in cycle order.
pub fn all_pillars() -> impl Iterator<Item = Pillar> {
    (0..CYCLE_LEN).map(Pillar::at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(pillar_at(0).map(|p| p.to_string()), Ok("甲子".to_string()));
        assert_eq!(pillar_at(59).map(|p| p.to_string()), Ok("癸亥".to_string()));
        assert!(pillar_at(60).is_err());
    }

    #[test]
    fn cycle_index_roundtrip() {
        for (i, p) in all_pillars().enumerate() {
            assert_eq!(cycle_index_of(p) as usize, i);
            assert_eq!(Pillar::new(p.stem(), p.branch()), Ok(p));
        }
    }

    #[test]
    fn exactly_sixty_of_one_twenty_pairs_are_valid() {
        let valid = ALL_STEMS
            .iter()
            .flat_map(|&s| ALL_BRANCHES.iter().map(move |&b| Pillar::new(s, b)))
            .filter(Result::is_ok)
            .count();
        assert_eq!(valid, 60);
    }

    #[test]
    fn mismatched_parity_fails() {
        assert!(matches!(
            Pillar::new(Stem::Jia, Branch::Chou),
            Err(BaseError::MismatchedParity { .. })
        ));
        assert!(Pillar::from_indices(1, 0).is_err());
        assert!(matches!(
            Pillar::from_indices(10, 0),
            Err(BaseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn offsets_wrap() {
        let jiazi = Pillar::at(0);
        assert_eq!(jiazi.prev().to_string(), "癸亥");
        assert_eq!(jiazi.offset(60), jiazi);
        assert_eq!(jiazi.offset(-61).to_string(), "癸亥");
        assert_eq!(Pillar::at(12).next().to_string(), "丁丑");
    }

    #[test]
    fn known_indices() {
        let p: Pillar = "己卯".parse().unwrap();
        assert_eq!(p.cycle_index(), 15);
        let p: Pillar = "戊午".parse().unwrap();
        assert_eq!(p.cycle_index(), 54);
    }

    #[test]
    fn parse_rejects() {
        assert!("甲".parse::<Pillar>().is_err());
        assert!("甲子丑".parse::<Pillar>().is_err());
        assert!(matches!(
            "甲丑".parse::<Pillar>(),
            Err(BaseError::MismatchedParity { .. })
        ));
    }
}
