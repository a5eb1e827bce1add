//! The five elements (五行), yin/yang polarity and element tallies.
//!
//! Elements relate through two fixed cycles:
//! - generating (生): wood → fire → earth → metal → water → wood
//! - controlling (克): wood → earth → water → fire → metal → wood

use std::fmt::{Display, Formatter};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    Wood = 0,
    Fire = 1,
    Earth = 2,
    Metal = 3,
    Water = 4,
}

/// All elements in generating order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lower-case English name, used as a stable key in structured output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 1) % 5]
    }

    /// The element this one controls.
    pub const fn controls(self) -> Element {
        ALL_ELEMENTS[(self.index() as usize + 2) % 5]
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yang (阳) or yin (阴).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of a cyclic symbol: even indices are yang.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

impl Display for Polarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything with a fixed primary element.
pub trait Elemental {
    fn element(self) -> Element;
}

/// Primary element of a stem or branch.
pub fn element_of<T: Elemental>(symbol: T) -> Element {
    symbol.element()
}

/// Occurrence count per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `element`.
    pub fn add(&mut self, element: Element) {
        self.counts[element.index() as usize] += 1;
    }

    /// Count the primary element of every symbol in `symbols`.
    pub fn add_all<T: Elemental>(&mut self, symbols: impl IntoIterator<Item = T>) {
        for s in symbols {
            self.add(s.element());
        }
    }

    pub fn get(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    /// Sum over all elements.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// `(element, count)` pairs in generating order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.get(e)))
    }

    /// Elements that do not occur at all.
    pub fn missing(&self) -> Vec<Element> {
        self.iter().filter(|&(_, c)| c == 0).map(|(e, _)| e).collect()
    }
}

impl Display for ElementTally {
    /// `wood 1, fire 2, earth 2, metal 0, water 3`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, (element, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element} {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle() {
        assert_eq!(Element::Wood.generates(), Element::Fire);
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Metal.generates(), Element::Water);
    }

    #[test]
    fn controlling_cycle() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Earth.controls(), Element::Water);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Fire.controls(), Element::Metal);
        assert_eq!(Element::Metal.controls(), Element::Wood);
    }

    #[test]
    fn polarity_parity() {
        assert_eq!(Polarity::from_parity(0), Polarity::Yang);
        assert_eq!(Polarity::from_parity(9), Polarity::Yin);
    }

    #[test]
    fn tally_counts_and_display() {
        let mut t = ElementTally::new();
        t.add(Element::Water);
        t.add(Element::Water);
        t.add(Element::Fire);
        assert_eq!(t.get(Element::Water), 2);
        assert_eq!(t.total(), 3);
        assert_eq!(t.missing(), vec![Element::Wood, Element::Earth, Element::Metal]);
        assert_eq!(t.to_string(), "wood 0, fire 1, earth 0, metal 0, water 2");
    }
}
