//! The ten Heavenly Stems (天干).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::element::{Element, Elemental, Polarity};
use crate::error::BaseError;

/// One of the 10 Heavenly Stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Stem {
    Jia = 0,
    Yi = 1,
    Bing = 2,
    Ding = 3,
    Wu = 4,
    Ji = 5,
    Geng = 6,
    Xin = 7,
    Ren = 8,
    Gui = 9,
}

/// All 10 stems in cyclic order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_HANZI: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index`; fails with `OutOfRange` for indices above 9.
    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_STEMS
            .get(index as usize)
            .copied()
            .ok_or(BaseError::OutOfRange {
                what: "stem",
                index: index as usize,
                limit: ALL_STEMS.len(),
            })
    }

    /// The stem `steps` places later in the cycle (negative steps go back).
    pub const fn offset(self, steps: i32) -> Self {
        ALL_STEMS[(self.index() as i32 + steps).rem_euclid(10) as usize]
    }

    pub const fn hanzi(self) -> &'static str {
        STEM_HANZI[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Two stems per element, in generating order.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Alternates with index parity, starting yang.
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }
}

impl Elemental for Stem {
    fn element(self) -> Element {
        Stem::element(self)
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

impl FromStr for Stem {
    type Err = BaseError;

    /// Accepts the hanzi or the pinyin name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.hanzi() == s || st.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaseError::UnknownSymbol {
                what: "stem",
                text: s.to_string(),
            })
    }
}

/// Stem at `index` (0..=9).
pub fn stem_of(index: u8) -> Result<Stem, BaseError> {
    Stem::from_index(index)
}

/// Polarity of a stem.
pub fn polarity_of(stem: Stem) -> Polarity {
    stem.polarity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Ok(*s));
        }
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            stem_of(10),
            Err(BaseError::OutOfRange { what: "stem", index: 10, .. })
        ));
    }

    #[test]
    fn elements_pair_up() {
        for e in crate::element::ALL_ELEMENTS {
            let n = ALL_STEMS.iter().filter(|s| s.element() == e).count();
            assert_eq!(n, 2);
        }
        assert_eq!(Stem::Geng.element(), Element::Metal);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(polarity_of(Stem::Jia), Polarity::Yang);
        assert_eq!(polarity_of(Stem::Ji), Polarity::Yin);
        assert_eq!(polarity_of(Stem::Ren), Polarity::Yang);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Gui.offset(1), Stem::Jia);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
        assert_eq!(Stem::Bing.offset(23), Stem::Ji);
    }

    #[test]
    fn parse_hanzi_and_pinyin() {
        assert_eq!("戊".parse::<Stem>(), Ok(Stem::Wu));
        assert_eq!("geng".parse::<Stem>(), Ok(Stem::Geng));
        assert!("子".parse::<Stem>().is_err());
    }
}
