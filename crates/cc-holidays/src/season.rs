//! Church season shown in the month header.
//!
//! The header badge is a coarse per-month label, not derived from the
//! movable feasts.

use cc_core::errors::{Error, Result};

/// Season of the church year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChurchSeason {
    /// 대림절
    Advent,
    /// 주현절
    Epiphany,
    /// 사순절
    Lent,
    /// 부활절기
    Easter,
    /// 성령강림절기
    Pentecost,
    /// 창조절 (평년)
    Creation,
}

impl ChurchSeason {
    /// The season labelled on the header of `month` (1–12).
    pub fn for_month(month: u8) -> Result<Self> {
        match month {
            12 => Ok(ChurchSeason::Advent),
            1 => Ok(ChurchSeason::Epiphany),
            3 => Ok(ChurchSeason::Lent),
            4 => Ok(ChurchSeason::Easter),
            5 => Ok(ChurchSeason::Pentecost),
            2 | 6..=11 => Ok(ChurchSeason::Creation),
            _ => Err(Error::InvalidArgument(format!(
                "month {month} out of range [1, 12]"
            ))),
        }
    }

    /// Header label.
    pub fn korean_name(&self) -> &'static str {
        match self {
            ChurchSeason::Advent => "대림절",
            ChurchSeason::Epiphany => "주현절",
            ChurchSeason::Lent => "사순절",
            ChurchSeason::Easter => "부활절기",
            ChurchSeason::Pentecost => "성령강림절기",
            ChurchSeason::Creation => "창조절 (평년)",
        }
    }

    /// `(background, text)` CSS colors of the header badge.
    pub fn badge_colors(&self) -> (&'static str, &'static str) {
        match self {
            ChurchSeason::Advent | ChurchSeason::Lent => ("#f3e8fd", "#9333ea"),
            ChurchSeason::Epiphany => ("#f1f3f4", "#3c4043"),
            ChurchSeason::Easter => ("#fef7e0", "#b06000"),
            ChurchSeason::Pentecost => ("#fce8e6", "#c5221f"),
            ChurchSeason::Creation => ("#e6f4ea", "#137333"),
        }
    }
}

impl std::fmt::Display for ChurchSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.korean_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months() {
        assert_eq!(ChurchSeason::for_month(12).unwrap(), ChurchSeason::Advent);
        assert_eq!(ChurchSeason::for_month(3).unwrap(), ChurchSeason::Lent);
        assert_eq!(ChurchSeason::for_month(2).unwrap(), ChurchSeason::Creation);
        assert_eq!(ChurchSeason::for_month(9).unwrap().to_string(), "창조절 (평년)");
        assert!(ChurchSeason::for_month(0).is_err());
        assert!(ChurchSeason::for_month(13).is_err());
    }

    #[test]
    fn lent_and_advent_share_purple() {
        assert_eq!(
            ChurchSeason::Lent.badge_colors(),
            ChurchSeason::Advent.badge_colors()
        );
    }
}
