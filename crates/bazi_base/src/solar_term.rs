//! The 24 solar terms (节气), starting at 立春.
//!
//! Term `i` begins when the apparent solar longitude reaches `315° + 15°·i`.
//! Even-indexed terms are the 12 "jie" (节) that open the solar months; jie
//! ordinal `k` is term `2k` and opens the month whose branch is `(k + 2) mod 12`
//! (寅 for 立春).

use std::fmt::{Display, Formatter};

use crate::branch::Branch;
use crate::error::BaseError;

/// Number of jie (month-opening terms) per solar year.
pub const JIE_PER_YEAR: u8 = 12;

/// One of the 24 solar terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Lichun = 0,
    Yushui = 1,
    Jingzhe = 2,
    Chunfen = 3,
    Qingming = 4,
    Guyu = 5,
    Lixia = 6,
    Xiaoman = 7,
    Mangzhong = 8,
    Xiazhi = 9,
    Xiaoshu = 10,
    Dashu = 11,
    Liqiu = 12,
    Chushu = 13,
    Bailu = 14,
    Qiufen = 15,
    Hanlu = 16,
    Shuangjiang = 17,
    Lidong = 18,
    Xiaoxue = 19,
    Daxue = 20,
    Dongzhi = 21,
    Xiaohan = 22,
    Dahan = 23,
}

/// All 24 terms in solar-year order (index 0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const TERM_HANZI: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

const TERM_NAMES: [&str; 24] = [
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
    "Xiaohan",
    "Dahan",
];

impl SolarTerm {
    /// 0-based index (立春=0 .. 大寒=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, BaseError> {
        ALL_SOLAR_TERMS
            .get(index as usize)
            .copied()
            .ok_or(BaseError::OutOfRange {
                what: "solar term",
                index: index as usize,
                limit: ALL_SOLAR_TERMS.len(),
            })
    }

    /// The term opening solar month `ordinal` (0 = 立春 .. 11 = 小寒).
    pub fn jie(ordinal: u8) -> Result<Self, BaseError> {
        if ordinal >= JIE_PER_YEAR {
            return Err(BaseError::OutOfRange {
                what: "jie",
                index: ordinal as usize,
                limit: JIE_PER_YEAR as usize,
            });
        }
        Ok(ALL_SOLAR_TERMS[2 * ordinal as usize])
    }

    pub const fn hanzi(self) -> &'static str {
        TERM_HANZI[self.index() as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Apparent solar longitude at which the term begins, degrees in [0, 360).
    pub const fn longitude_deg(self) -> f64 {
        ((315 + 15 * self.index() as u32) % 360) as f64
    }

    /// Whether this term opens a solar month.
    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// Jie ordinal (0..=11) for month-opening terms.
    pub const fn jie_ordinal(self) -> Option<u8> {
        if self.is_jie() {
            Some(self.index() / 2)
        } else {
            None
        }
    }

    /// Branch of the solar month this term falls in.
    pub const fn month_branch(self) -> Branch {
        month_branch(self.index() / 2)
    }
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Branch of solar month `jie_ordinal` (寅 for month 0); reduced mod 12.
pub const fn month_branch(jie_ordinal: u8) -> Branch {
    Branch::Zi.offset(jie_ordinal as i32 % 12 + 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudes() {
        assert_eq!(SolarTerm::Lichun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::Chunfen.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::Xiazhi.longitude_deg(), 90.0);
        assert_eq!(SolarTerm::Dongzhi.longitude_deg(), 270.0);
        assert_eq!(SolarTerm::Dahan.longitude_deg(), 300.0);
    }

    #[test]
    fn jie_are_even_terms() {
        let jie: Vec<SolarTerm> = ALL_SOLAR_TERMS.into_iter().filter(|t| t.is_jie()).collect();
        assert_eq!(jie.len(), 12);
        for (k, t) in jie.iter().enumerate() {
            assert_eq!(t.jie_ordinal(), Some(k as u8));
            assert_eq!(SolarTerm::jie(k as u8), Ok(*t));
        }
        assert_eq!(SolarTerm::jie(11), Ok(SolarTerm::Xiaohan));
        assert!(SolarTerm::jie(12).is_err());
        assert_eq!(SolarTerm::Yushui.jie_ordinal(), None);
    }

    #[test]
    fn month_branches() {
        assert_eq!(month_branch(0), Branch::Yin);
        assert_eq!(month_branch(10), Branch::Zi);
        assert_eq!(month_branch(11), Branch::Chou);
        assert_eq!(SolarTerm::Dongzhi.month_branch(), Branch::Zi);
        assert_eq!(SolarTerm::Jingzhe.month_branch(), Branch::Mao);
    }

    #[test]
    fn names() {
        assert_eq!(SolarTerm::Lichun.to_string(), "立春");
        assert_eq!(SolarTerm::Qingming.name(), "Qingming");
        assert!(SolarTerm::from_index(24).is_err());
    }
}
