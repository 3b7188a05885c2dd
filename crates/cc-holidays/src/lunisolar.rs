//! Gregorian → lunisolar conversion.
//!
//! [`LunarCalendar`] is the seam through which the engine consults a
//! lunisolar calendar.  [`TabularLunisolar`] is the bundled implementation:
//! a month-length table for lunar years 1900–2100 in the Korean convention,
//! with new moons and principal solar terms dated in Korean standard time
//! (UTC+8:30 for 1908–1911 and 1954–1961, UTC+9 otherwise, UTC+8 before
//! 1908).  Korean and Chinese month starts differ whenever a new moon falls
//! between 15:00 and 16:00 UTC, e.g. 설날 2027 is February 7th here and
//! February 6th in Chinese almanacs.

use cc_core::errors::{Error, Result};
use cc_time::Date;

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Lunar year (the Gregorian year in which its first month starts).
    pub year: i32,
    /// Lunar month (1–12).
    pub month: u8,
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// `true` inside an intercalary (leap) month.
    pub is_leap_month: bool,
}

/// A Gregorian-to-lunisolar conversion oracle.
pub trait LunarCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Convert a solar date.
    ///
    /// # Errors
    /// `Error::LunarConversion` if the oracle cannot convert `date`, e.g.
    /// because it lies outside the oracle's supported range.
    fn to_lunar(&self, date: Date) -> Result<LunarDate>;

    /// Earliest date the oracle converts, if it has a lower bound.
    fn first_supported(&self) -> Option<Date> {
        None
    }
}

impl<T: LunarCalendar + ?Sized> LunarCalendar for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        (**self).to_lunar(date)
    }

    fn first_supported(&self) -> Option<Date> {
        (**self).first_supported()
    }
}

impl<T: LunarCalendar + ?Sized> LunarCalendar for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        (**self).to_lunar(date)
    }

    fn first_supported(&self) -> Option<Date> {
        (**self).first_supported()
    }
}

impl<T: LunarCalendar + ?Sized> LunarCalendar for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        (**self).to_lunar(date)
    }

    fn first_supported(&self) -> Option<Date> {
        (**self).first_supported()
    }
}

// ── Bundled table ────────────────────────────────────────────────────────────

/// First lunar year in [`YEAR_INFO`].
const FIRST_LUNAR_YEAR: i32 = 1900;

/// One entry per lunar year from 1900 to 2100.
///
/// * bits 0–3: leap month number, 0 if none
/// * bits 4–15: month lengths, bit `16 - m` set when month `m` has 30 days
/// * bit 16: leap month has 30 days
const YEAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x0aad0, 0x055d2, // 1900
    0x04ae0, 0x0a5d6, 0x0a4d0, 0x0d250, 0x0da95, 0x0b550, 0x056a0, 0x0ada2, 0x095d0, 0x04bb7, // 1910
    0x049b0, 0x0a4b0, 0x0b4b5, 0x06a90, 0x0ad40, 0x0bb54, 0x02b60, 0x095b0, 0x05372, 0x04970, // 1920
    0x06566, 0x0e4a0, 0x0ea50, 0x16a95, 0x05b50, 0x02b60, 0x18ae3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b690, 0x056d0, 0x125b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0d557, // 1940
    0x0b4a0, 0x0b550, 0x15555, 0x04db0, 0x025b0, 0x18573, 0x052b0, 0x0a9b8, 0x06950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05270, 0x07263, 0x0d950, 0x06b57, 0x056a0, // 1960
    0x09ad0, 0x04dd5, 0x04ae0, 0x0a4e0, 0x0d4d4, 0x0d250, 0x0d598, 0x0b540, 0x0d6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a9b4, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0b756, 0x02b60, 0x095b0, // 1980
    0x04b75, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06d98, 0x05ad0, 0x02b60, 0x096e5, 0x092e0, // 1990
    0x0c960, 0x0e954, 0x0d4a0, 0x0da50, 0x07552, 0x056c0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x1b4a3, 0x0b550, 0x055d9, 0x04ba0, 0x0a5b0, 0x05575, 0x052b0, 0x0a950, // 2010
    0x0b954, 0x06aa0, 0x0ad50, 0x06b52, 0x04b60, 0x0a6e6, 0x0a570, 0x05270, 0x06a65, 0x0d930, // 2020
    0x05aa0, 0x0b6a3, 0x096d0, 0x04afb, 0x04ae0, 0x0a4d0, 0x1d0d6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b6a0, 0x096d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0b250, 0x1b255, 0x06d40, 0x0ada0, // 2040
    0x18b63, 0x09570, 0x14978, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1aac4, 0x0ab60, // 2050
    0x09370, 0x052e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0aad0, 0x095d4, // 2060
    0x092d0, 0x0c9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b2b3, 0x0a930, 0x07557, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054f4, 0x05260, // 2080
    0x0e968, 0x0d530, 0x05aa0, 0x1aaa6, 0x096d0, 0x04ae0, 0x0aad4, 0x0a4d0, 0x0d260, 0x0f253, // 2090
    0x0d520, // 2100
];

fn leap_month(info: u32) -> u8 {
    (info & 0xf) as u8
}

fn leap_month_days(info: u32) -> i32 {
    match (leap_month(info), info & 0x10000 != 0) {
        (0, _) => 0,
        (_, true) => 30,
        (_, false) => 29,
    }
}

fn month_days(info: u32, month: u8) -> i32 {
    if info & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

fn year_days(info: u32) -> i32 {
    (1..=12).map(|m| month_days(info, m)).sum::<i32>() + leap_month_days(info)
}

/// Table-driven lunisolar calendar for 1900-01-31 through 2101-01-28.
#[derive(Debug, Clone)]
pub struct TabularLunisolar {
    /// Serial of lunar 1/1 for each table year, plus the end sentinel.
    year_starts: Vec<i32>,
}

impl TabularLunisolar {
    /// Build the converter.
    pub fn new() -> Self {
        // lunar 1900/1/1 fell on 1900-01-31, serial 31
        let mut start = 31;
        let mut year_starts = Vec::with_capacity(YEAR_INFO.len() + 1);
        for &info in &YEAR_INFO {
            year_starts.push(start);
            start += year_days(info);
        }
        year_starts.push(start);
        Self { year_starts }
    }

    /// First convertible date.
    pub fn first_date(&self) -> Date {
        self.bound(0)
    }

    /// Last convertible date.
    pub fn last_date(&self) -> Date {
        self.bound(self.year_starts.len() - 1)
            .add_days(-1)
            .unwrap_or(Date::MAX)
    }

    fn bound(&self, i: usize) -> Date {
        // every table serial lies between 1900 and 2101
        Date::from_serial(self.year_starts[i]).unwrap_or(Date::MIN)
    }
}

impl Default for TabularLunisolar {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarCalendar for TabularLunisolar {
    fn name(&self) -> &str {
        "Korean lunisolar table (1900-2100)"
    }

    fn first_supported(&self) -> Option<Date> {
        Some(self.first_date())
    }

    fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        let serial = date.serial();
        let (first, end) = (self.year_starts[0], self.year_starts[self.year_starts.len() - 1]);
        if serial < first || serial >= end {
            return Err(Error::LunarConversion(format!(
                "{date} outside supported range [{}, {}]",
                self.first_date(),
                self.last_date()
            )));
        }
        let i = self.year_starts.partition_point(|&s| s <= serial) - 1;
        let info = YEAR_INFO[i];
        let leap = leap_month(info);
        let mut offset = serial - self.year_starts[i];
        for month in 1..=12u8 {
            let days = month_days(info, month);
            if offset < days {
                return Ok(lunar(i, month, offset, false));
            }
            offset -= days;
            if month == leap {
                let days = leap_month_days(info);
                if offset < days {
                    return Ok(lunar(i, month, offset, true));
                }
                offset -= days;
            }
        }
        Err(Error::LunarConversion(format!(
            "{date}: inconsistent table entry for lunar year {}",
            FIRST_LUNAR_YEAR + i as i32
        )))
    }
}

fn lunar(index: usize, month: u8, offset: i32, is_leap_month: bool) -> LunarDate {
    LunarDate {
        year: FIRST_LUNAR_YEAR + index as i32,
        month,
        day: (offset + 1) as u8,
        is_leap_month,
    }
}
