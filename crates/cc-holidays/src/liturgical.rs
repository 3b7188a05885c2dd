//! Movable and fixed feasts of the church year.
//!
//! Every feast is a fixed day offset from one of four anchors: Easter,
//! Epiphany (Jan 6), the first Sunday of Advent, or a fixed autumn date.

use cc_core::errors::{Error, Result};
use cc_time::{validate_year, Date, Weekday};

use crate::observance::{Observance, ObservanceKind};

/// The dated feasts of one church year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovableFeasts {
    /// Epiphany, January 6.
    pub epiphany: Date,
    /// The Sunday after Epiphany; a week later when Jan 6 is a Sunday.
    pub baptism_of_the_lord: Date,
    /// Ash Wednesday − 3 (the Sunday before Lent).
    pub transfiguration_sunday: Date,
    /// Easter − 46.
    pub ash_wednesday: Date,
    /// Easter − 7.
    pub palm_sunday: Date,
    /// Easter − 2.
    pub good_friday: Date,
    /// Easter Sunday.
    pub easter: Date,
    /// Easter + 39.
    pub ascension: Date,
    /// Easter + 49.
    pub pentecost: Date,
    /// Pentecost + 7.
    pub trinity_sunday: Date,
    /// First Sunday on or after September 1.
    pub creation_season: Date,
    /// Sunday on or before October 31.
    pub reformation_sunday: Date,
    /// Third Sunday counted from the first Sunday on or after November 1.
    pub thanksgiving_sunday: Date,
    /// Sundays of Advent; the first is the Sunday on or after November 27.
    pub advent: [Date; 4],
    /// Advent 1 − 7.
    pub christ_the_king: Date,
}

impl MovableFeasts {
    /// Compute the feasts of `year` from its Gregorian Easter.
    pub fn for_year(year: i32) -> Result<Self> {
        Self::from_easter(year, cc_time::easter_date(year)?)
    }

    /// Compute the feasts of `year` from a given Easter Sunday.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `year` is unsupported or `easter` lies in
    /// another year.
    pub fn from_easter(year: i32, easter: Date) -> Result<Self> {
        let y = validate_year(year)?;
        if easter.year() != y {
            return Err(Error::InvalidArgument(format!(
                "Easter {easter} is not in year {year}"
            )));
        }

        let epiphany = Date::from_ymd(y, 1, 6)?;
        let ash_wednesday = easter.add_days(-46)?;
        let pentecost = easter.add_days(49)?;
        let advent1 = Date::from_ymd(y, 11, 27)?.next_weekday_on_or_after(Weekday::Sunday)?;

        Ok(Self {
            epiphany,
            baptism_of_the_lord: epiphany.next_weekday_after(Weekday::Sunday)?,
            transfiguration_sunday: ash_wednesday.add_days(-3)?,
            ash_wednesday,
            palm_sunday: easter.add_days(-7)?,
            good_friday: easter.add_days(-2)?,
            easter,
            ascension: easter.add_days(39)?,
            pentecost,
            trinity_sunday: pentecost.add_days(7)?,
            creation_season: Date::nth_weekday(1, Weekday::Sunday, y, 9)?,
            reformation_sunday: Date::from_ymd(y, 10, 31)?
                .last_weekday_on_or_before(Weekday::Sunday)?,
            thanksgiving_sunday: Date::nth_weekday(3, Weekday::Sunday, y, 11)?,
            advent: [
                advent1,
                advent1.add_days(7)?,
                advent1.add_days(14)?,
                advent1.add_days(21)?,
            ],
            christ_the_king: advent1.add_days(-7)?,
        })
    }

    /// Every feast with its observance, in church-year listing order.
    pub fn observances(&self) -> Vec<(Date, Observance)> {
        use ObservanceKind::*;
        [
            (self.epiphany, Epiphany),
            (self.baptism_of_the_lord, BaptismOfTheLord),
            (self.easter, Easter),
            (self.ash_wednesday, AshWednesday),
            (self.transfiguration_sunday, TransfigurationSunday),
            (self.palm_sunday, PalmSunday),
            (self.good_friday, GoodFriday),
            (self.ascension, Ascension),
            (self.pentecost, Pentecost),
            (self.trinity_sunday, TrinitySunday),
            (self.creation_season, CreationSeason),
            (self.reformation_sunday, ReformationSunday),
            (self.thanksgiving_sunday, ThanksgivingSunday),
            (self.advent[0], Advent1),
            (self.advent[1], Advent2),
            (self.advent[2], Advent3),
            (self.advent[3], Advent4),
            (self.christ_the_king, ChristTheKing),
        ]
        .into_iter()
        .map(|(date, kind)| (date, Observance::new(kind)))
        .collect()
    }
}

/// Liturgical observances of `year` derived from `easter`.
pub fn derive_liturgical_dates(year: i32, easter: Date) -> Result<Vec<(Date, Observance)>> {
    Ok(MovableFeasts::from_easter(year, easter)?.observances())
}
