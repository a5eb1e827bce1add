//! Ten Gods (十神): the relation of a stem to the day master.

use std::fmt::{Display, Formatter};

use crate::stem::Stem;

/// Relation of a stem to the day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    /// 比肩: same element, same polarity.
    Friend,
    /// 劫财: same element, opposite polarity.
    RobWealth,
    /// 食神: produced by the day master, same polarity.
    EatingGod,
    /// 伤官: produced by the day master, opposite polarity.
    HurtingOfficer,
    /// 偏财: controlled by the day master, same polarity.
    IndirectWealth,
    /// 正财: controlled by the day master, opposite polarity.
    DirectWealth,
    /// 七杀: controls the day master, same polarity.
    SevenKillings,
    /// 正官: controls the day master, opposite polarity.
    DirectOfficer,
    /// 偏印: produces the day master, same polarity.
    IndirectResource,
    /// 正印: produces the day master, opposite polarity.
    DirectResource,
}

impl TenGod {
    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Friend => "比肩",
            Self::RobWealth => "劫财",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "伤官",
            Self::IndirectWealth => "偏财",
            Self::DirectWealth => "正财",
            Self::SevenKillings => "七杀",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }
}

impl Display for TenGod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}

/// Ten God of `other` as seen from `day_master`.
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let same = day_master.polarity() == other.polarity();
    let me = day_master.element();
    let it = other.element();
    let pick = |same_pol: TenGod, diff_pol: TenGod| if same { same_pol } else { diff_pol };

    if it == me {
        pick(TenGod::Friend, TenGod::RobWealth)
    } else if me.generates() == it {
        pick(TenGod::EatingGod, TenGod::HurtingOfficer)
    } else if me.controls() == it {
        pick(TenGod::IndirectWealth, TenGod::DirectWealth)
    } else if it.controls() == me {
        pick(TenGod::SevenKillings, TenGod::DirectOfficer)
    } else {
        pick(TenGod::IndirectResource, TenGod::DirectResource)
    }
}
