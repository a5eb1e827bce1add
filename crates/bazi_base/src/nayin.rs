//! Na Yin (纳音): the 30 sounds, one per consecutive pair of the 60-cycle.

use std::fmt::{Display, Formatter};

use crate::element::Element;
use crate::pillar::Pillar;

/// One of the 30 Na Yin sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaYin(u8);

const NAYIN_TABLE: [(&str, &str, Element); 30] = [
    ("海中金", "Gold in the Sea", Element::Metal),
    ("炉中火", "Fire in the Furnace", Element::Fire),
    ("大林木", "Wood of the Great Forest", Element::Wood),
    ("路旁土", "Earth by the Roadside", Element::Earth),
    ("剑锋金", "Metal of the Sword Blade", Element::Metal),
    ("山头火", "Fire on the Mountain Top", Element::Fire),
    ("涧下水", "Water under the Ravine", Element::Water),
    ("城头土", "Earth on the City Wall", Element::Earth),
    ("白蜡金", "White Wax Metal", Element::Metal),
    ("杨柳木", "Willow Wood", Element::Wood),
    ("泉中水", "Water in the Spring", Element::Water),
    ("屋上土", "Earth on the Roof", Element::Earth),
    ("霹雳火", "Thunderbolt Fire", Element::Fire),
    ("松柏木", "Pine and Cypress Wood", Element::Wood),
    ("长流水", "Long-flowing Water", Element::Water),
    ("沙中金", "Gold in the Sand", Element::Metal),
    ("山下火", "Fire at the Foot of the Mountain", Element::Fire),
    ("平地木", "Wood of the Plain", Element::Wood),
    ("壁上土", "Earth on the Wall", Element::Earth),
    ("金箔金", "Gold Leaf Metal", Element::Metal),
    ("覆灯火", "Lamp Fire", Element::Fire),
    ("天河水", "Water of the Heavenly River", Element::Water),
    ("大驿土", "Earth of the Great Post Road", Element::Earth),
    ("钗钏金", "Hairpin Metal", Element::Metal),
    ("桑柘木", "Mulberry Wood", Element::Wood),
    ("大溪水", "Water of the Great Stream", Element::Water),
    ("沙中土", "Earth in the Sand", Element::Earth),
    ("天上火", "Fire in the Sky", Element::Fire),
    ("石榴木", "Pomegranate Wood", Element::Wood),
    ("大海水", "Water of the Great Sea", Element::Water),
];

impl NaYin {
    /// Na Yin of a pillar: cycle indices 2k and 2k+1 share sound k.
    pub fn of(pillar: Pillar) -> Self {
        Self(pillar.cycle_index() / 2)
    }

    /// 0-based index (海中金=0 .. 大海水=29).
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn hanzi(self) -> &'static str {
        NAYIN_TABLE[self.0 as usize].0
    }

    /// English gloss.
    pub const fn name(self) -> &'static str {
        NAYIN_TABLE[self.0 as usize].1
    }

    pub const fn element(self) -> Element {
        NAYIN_TABLE[self.0 as usize].2
    }
}

impl Display for NaYin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanzi())
    }
}
