use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the three constitutional energies.
///
/// Declaration order is significant: ties are always reported in the order
/// Vata, Pitta, Kapha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Display name, e.g. "Vata".
    pub fn name(self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    /// Lower-case lookup key, e.g. "vata".
    pub fn key(self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    /// Marker embedded in questionnaire option ids.
    pub fn prefix(self) -> &'static str {
        match self {
            Dosha::Vata => "vata_",
            Dosha::Pitta => "pitta_",
            Dosha::Kapha => "kapha_",
        }
    }

    /// Parse a dosha name, ignoring case.
    pub fn from_key(value: &str) -> Option<Dosha> {
        Dosha::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(value))
    }
}

impl FromStr for Dosha {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dosha::from_key(s).ok_or_else(|| CoreError::UnknownDosha(s.to_string()))
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The doshas an answer option contributes to.
///
/// Most options carry exactly one dosha. Combined traits (e.g. a skin nature
/// shared by Vata and Pitta) carry two and count towards both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoshaSet {
    pub vata: bool,
    pub pitta: bool,
    pub kapha: bool,
}

impl DoshaSet {
    pub const EMPTY: DoshaSet = DoshaSet {
        vata: false,
        pitta: false,
        kapha: false,
    };

    /// Derive the attribution encoded in an option id.
    ///
    /// An id contributes to every dosha whose marker (`vata_`, `pitta_`,
    /// `kapha_`) appears anywhere in it. Ids with no marker contribute nothing.
    pub fn from_option_id(id: &str) -> DoshaSet {
        DoshaSet {
            vata: id.contains(Dosha::Vata.prefix()),
            pitta: id.contains(Dosha::Pitta.prefix()),
            kapha: id.contains(Dosha::Kapha.prefix()),
        }
    }

    pub fn of(doshas: &[Dosha]) -> DoshaSet {
        doshas.iter().fold(DoshaSet::EMPTY, |mut set, dosha| {
            set.insert(*dosha);
            set
        })
    }

    pub fn insert(&mut self, dosha: Dosha) {
        match dosha {
            Dosha::Vata => self.vata = true,
            Dosha::Pitta => self.pitta = true,
            Dosha::Kapha => self.kapha = true,
        }
    }

    pub fn contains(&self, dosha: Dosha) -> bool {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.vata || self.pitta || self.kapha)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Dosha> + '_ {
        Dosha::ALL.into_iter().filter(|d| self.contains(*d))
    }
}

/// Per-dosha tallies produced by scoring a set of answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DoshaCount {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaCount {
    pub fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self { vata, pitta, kapha }
    }

    /// Increment every dosha in `set` by one.
    pub fn add(&mut self, set: DoshaSet) {
        for dosha in set.iter() {
            *self.get_mut(dosha) += 1;
        }
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    fn get_mut(&mut self, dosha: Dosha) -> &mut u32 {
        match dosha {
            Dosha::Vata => &mut self.vata,
            Dosha::Pitta => &mut self.pitta,
            Dosha::Kapha => &mut self.kapha,
        }
    }

    pub fn max(&self) -> u32 {
        self.vata.max(self.pitta).max(self.kapha)
    }

    pub fn total(&self) -> u32 {
        self.vata + self.pitta + self.kapha
    }

    /// Doshas sharing the highest count, in Vata, Pitta, Kapha order.
    pub fn leaders(&self) -> Vec<Dosha> {
        let max = self.max();
        Dosha::ALL
            .into_iter()
            .filter(|d| self.get(*d) == max)
            .collect()
    }
}
