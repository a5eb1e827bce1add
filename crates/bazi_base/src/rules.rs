//! Month and hour pillar rules.
//!
//! - Five Tigers (五虎遁): the year stem fixes the stem of the 寅 month.
//! - Five Rats (五鼠遁): the day stem fixes the stem of the 子 hour.
//!
//! Both tables repeat every five stems (甲/己, 乙/庚, 丙/辛, 丁/壬, 戊/癸).

use crate::error::BaseError;
use crate::pillar::Pillar;
use crate::solar_term::{JIE_PER_YEAR, month_branch};
use crate::stem::Stem;

/// Stem of the first solar month (寅), indexed by year stem mod 5.
pub const FIVE_TIGERS: [Stem; 5] = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];

/// Stem of the 子 hour, indexed by day stem mod 5.
pub const FIVE_RATS: [Stem; 5] = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];

/// Number of two-hour blocks in a day.
pub const HOUR_BLOCKS: u8 = 12;

/// Pillar of solar month `jie_ordinal` (0 = 寅 month) in a year with stem `year_stem`.
pub fn month_pillar(year_stem: Stem, jie_ordinal: u8) -> Result<Pillar, BaseError> {
    if jie_ordinal >= JIE_PER_YEAR {
        return Err(BaseError::OutOfRange {
            what: "jie",
            index: jie_ordinal as usize,
            limit: JIE_PER_YEAR as usize,
        });
    }
    let first = FIVE_TIGERS[(year_stem.index() % 5) as usize];
    Pillar::new(first.offset(jie_ordinal as i32), month_branch(jie_ordinal))
}

/// Two-hour block of a clock hour; block 0 (子) spans 23:00–01:00.
pub fn hour_block(hour: u32) -> Result<u8, BaseError> {
    if hour > 23 {
        return Err(BaseError::OutOfRange {
            what: "hour",
            index: hour as usize,
            limit: 24,
        });
    }
    Ok((((hour + 1) / 2) % 12) as u8)
}

/// Pillar of hour block `block` on a day whose stem is `day_stem`.
///
/// For the late 子 block (23:00–24:00) pass the following day's stem.
pub fn hour_pillar(day_stem: Stem, block: u8) -> Result<Pillar, BaseError> {
    if block >= HOUR_BLOCKS {
        return Err(BaseError::OutOfRange {
            what: "hour block",
            index: block as usize,
            limit: HOUR_BLOCKS as usize,
        });
    }
    let first = FIVE_RATS[(day_stem.index() % 5) as usize];
    Pillar::from_indices(first.offset(block as i32).index(), block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn tiger_month_stems() {
        // 甲/己 years open with 丙寅, 戊/癸 years with 甲寅.
        assert_eq!(month_pillar(Stem::Jia, 0).unwrap().to_string(), "丙寅");
        assert_eq!(month_pillar(Stem::Ji, 0).unwrap().to_string(), "丙寅");
        assert_eq!(month_pillar(Stem::Gui, 0).unwrap().to_string(), "甲寅");
        assert_eq!(month_pillar(Stem::Yi, 0).unwrap().to_string(), "戊寅");
    }

    #[test]
    fn month_eleven_is_chou() {
        // 己卯 year: 丙寅 .. 丙子 (ordinal 10) .. 丁丑 (ordinal 11)
        assert_eq!(month_pillar(Stem::Ji, 10).unwrap().to_string(), "丙子");
        assert_eq!(month_pillar(Stem::Ji, 11).unwrap().to_string(), "丁丑");
        assert!(month_pillar(Stem::Ji, 12).is_err());
    }

    #[test]
    fn month_pillars_always_valid() {
        for s in ALL_STEMS {
            for k in 0..12 {
                assert!(month_pillar(s, k).is_ok(), "{s} {k}");
            }
        }
    }

    #[test]
    fn hour_blocks() {
        assert_eq!(hour_block(23), Ok(0));
        assert_eq!(hour_block(0), Ok(0));
        assert_eq!(hour_block(1), Ok(1));
        assert_eq!(hour_block(12), Ok(6));
        assert_eq!(hour_block(15), Ok(8));
        assert_eq!(hour_block(22), Ok(11));
        assert!(hour_block(24).is_err());
    }

    #[test]
    fn rat_hour_stems() {
        assert_eq!(hour_pillar(Stem::Jia, 0).unwrap().to_string(), "甲子");
        assert_eq!(hour_pillar(Stem::Wu, 0).unwrap().to_string(), "壬子");
        assert_eq!(hour_pillar(Stem::Ji, 0).unwrap().to_string(), "甲子");
        // 甲 day, 申 hour (15:00)
        assert_eq!(hour_pillar(Stem::Jia, 8).unwrap().to_string(), "壬申");
        assert!(hour_pillar(Stem::Jia, 12).is_err());
    }
}
