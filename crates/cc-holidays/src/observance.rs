//! Observances: named calendar annotations for a single day.

use serde::{Serialize, Serializer};

/// Which track an observance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Nationally fixed or lunar civil holiday.
    CivilHoliday,
    /// Church-year observance.
    LiturgicalSeason,
}

/// Liturgical palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Lent and Advent.
    Purple,
    /// Feasts of the Lord.
    Gold,
    /// Passion, Pentecost, Reformation.
    Red,
    /// Creation season and harvest.
    Green,
}

impl Color {
    /// CSS hex value.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Purple => "#7B1FA2",
            Color::Gold => "#D4AF37",
            Color::Red => "#D32F2F",
            Color::Green => "#2E7D32",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

/// How a day badge should be drawn.
///
/// Precedence: an explicit color wins, then the public-holiday style, then
/// the plain liturgical style.  Red-day status is decided separately by
/// [`Observance::is_public_holiday`] and never by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Solid badge in the given palette color.
    Colored(Color),
    /// Default public-holiday badge.
    Holiday,
    /// Default liturgical badge.
    Liturgical,
    /// No special styling.
    Plain,
}

/// Identity of every observance the engine can emit.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ObservanceKind {
    // civil, fixed
    NewYearsDay,
    IndependenceMovementDay,
    ChildrensDay,
    MemorialDay,
    LiberationDay,
    NationalFoundationDay,
    HangulDay,
    Christmas,
    // lunar
    LunarNewYearEve,
    LunarNewYear,
    LunarNewYearAfter,
    BuddhasBirthday,
    ChuseokEve,
    Chuseok,
    ChuseokAfter,
    // liturgical
    Epiphany,
    BaptismOfTheLord,
    TransfigurationSunday,
    AshWednesday,
    PalmSunday,
    GoodFriday,
    Easter,
    Ascension,
    Pentecost,
    TrinitySunday,
    CreationSeason,
    ReformationSunday,
    ThanksgivingSunday,
    Advent1,
    Advent2,
    Advent3,
    Advent4,
    ChristTheKing,
}

impl ObservanceKind {
    /// Display name shown on the calendar.
    pub fn korean_name(&self) -> &'static str {
        use ObservanceKind::*;
        match self {
            NewYearsDay => "신정",
            IndependenceMovementDay => "삼일절",
            ChildrensDay => "어린이날",
            MemorialDay => "현충일",
            LiberationDay => "광복절",
            NationalFoundationDay => "개천절",
            HangulDay => "한글날",
            Christmas => "성탄절",
            LunarNewYearEve | LunarNewYearAfter => "설날연휴",
            LunarNewYear => "설날",
            BuddhasBirthday => "석가탄신일",
            ChuseokEve | ChuseokAfter => "추석연휴",
            Chuseok => "추석",
            Epiphany => "주현절",
            BaptismOfTheLord => "주님 세례 주일",
            TransfigurationSunday => "산상변모 주일",
            AshWednesday => "재의 수요일(사순절 시작)",
            PalmSunday => "종려주일(고난주간)",
            GoodFriday => "성금요일",
            Easter => "부활절",
            Ascension => "주님 승천일",
            Pentecost => "성령강림절",
            TrinitySunday => "삼위일체 주일",
            CreationSeason => "창조절 시작",
            ReformationSunday => "종교개혁주일",
            ThanksgivingSunday => "추수감사주일",
            Advent1 => "대림절 제1주",
            Advent2 => "대림절 제2주",
            Advent3 => "대림절 제3주",
            Advent4 => "대림절 제4주",
            ChristTheKing => "왕이신 그리스도 주일",
        }
    }

    /// English name.
    pub fn english_name(&self) -> &'static str {
        use ObservanceKind::*;
        match self {
            NewYearsDay => "New Year's Day",
            IndependenceMovementDay => "Independence Movement Day",
            ChildrensDay => "Children's Day",
            MemorialDay => "Memorial Day",
            LiberationDay => "Liberation Day",
            NationalFoundationDay => "National Foundation Day",
            HangulDay => "Hangul Day",
            Christmas => "Christmas",
            LunarNewYearEve => "Lunar New Year's Eve",
            LunarNewYear => "Lunar New Year",
            LunarNewYearAfter => "Day after Lunar New Year",
            BuddhasBirthday => "Buddha's Birthday",
            ChuseokEve => "Chuseok Eve",
            Chuseok => "Chuseok",
            ChuseokAfter => "Day after Chuseok",
            Epiphany => "Epiphany",
            BaptismOfTheLord => "Baptism of the Lord",
            TransfigurationSunday => "Transfiguration Sunday",
            AshWednesday => "Ash Wednesday",
            PalmSunday => "Palm Sunday",
            GoodFriday => "Good Friday",
            Easter => "Easter",
            Ascension => "Ascension",
            Pentecost => "Pentecost",
            TrinitySunday => "Trinity Sunday",
            CreationSeason => "Start of Creation Season",
            ReformationSunday => "Reformation Sunday",
            ThanksgivingSunday => "Thanksgiving Sunday",
            Advent1 => "First Sunday of Advent",
            Advent2 => "Second Sunday of Advent",
            Advent3 => "Third Sunday of Advent",
            Advent4 => "Fourth Sunday of Advent",
            ChristTheKing => "Christ the King Sunday",
        }
    }

    /// `(category, color, is_public_holiday)` for this kind.
    fn attributes(&self) -> (Category, Option<Color>, bool) {
        use ObservanceKind::*;
        match self {
            NewYearsDay | IndependenceMovementDay | ChildrensDay | MemorialDay
            | LiberationDay | NationalFoundationDay | HangulDay => {
                (Category::CivilHoliday, None, true)
            }
            // civil day off and church feast at once
            Christmas => (Category::LiturgicalSeason, Some(Color::Gold), true),
            LunarNewYearEve | LunarNewYear | LunarNewYearAfter | ChuseokEve | Chuseok
            | ChuseokAfter => (Category::CivilHoliday, None, true),
            BuddhasBirthday => (Category::LiturgicalSeason, None, false),
            AshWednesday | Advent1 | Advent2 | Advent3 | Advent4 => {
                (Category::LiturgicalSeason, Some(Color::Purple), false)
            }
            PalmSunday | GoodFriday | Pentecost | ReformationSunday => {
                (Category::LiturgicalSeason, Some(Color::Red), false)
            }
            CreationSeason | ThanksgivingSunday => {
                (Category::LiturgicalSeason, Some(Color::Green), false)
            }
            Epiphany | BaptismOfTheLord | TransfigurationSunday | Easter | Ascension
            | TrinitySunday | ChristTheKing => {
                (Category::LiturgicalSeason, Some(Color::Gold), false)
            }
        }
    }
}

impl std::fmt::Display for ObservanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// A single named calendar annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observance {
    kind: ObservanceKind,
    name: &'static str,
    category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<Color>,
    is_public_holiday: bool,
}

impl Observance {
    /// The standard observance for `kind`.
    pub fn new(kind: ObservanceKind) -> Self {
        let (category, color, is_public_holiday) = kind.attributes();
        Self {
            kind,
            name: kind.korean_name(),
            category,
            color,
            is_public_holiday,
        }
    }

    /// Which observance this is.
    pub fn kind(&self) -> ObservanceKind {
        self.kind
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Civil or liturgical track.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Explicit badge color, if any.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Whether the day is a non-working "red day".
    pub fn is_public_holiday(&self) -> bool {
        self.is_public_holiday
    }

    /// Badge style, see [`BadgeStyle`] for the precedence.
    pub fn badge(&self) -> BadgeStyle {
        match (self.color, self.is_public_holiday, self.category) {
            (Some(color), _, _) => BadgeStyle::Colored(color),
            (None, true, _) => BadgeStyle::Holiday,
            (None, false, Category::LiturgicalSeason) => BadgeStyle::Liturgical,
            (None, false, Category::CivilHoliday) => BadgeStyle::Plain,
        }
    }
}

impl From<ObservanceKind> for Observance {
    fn from(kind: ObservanceKind) -> Self {
        Observance::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn christmas_is_dual_tagged() {
        let christmas = Observance::new(ObservanceKind::Christmas);
        assert_eq!(christmas.category(), Category::LiturgicalSeason);
        assert_eq!(christmas.color(), Some(Color::Gold));
        assert!(christmas.is_public_holiday());
        assert_eq!(christmas.badge(), BadgeStyle::Colored(Color::Gold));
    }

    #[test]
    fn badge_precedence() {
        assert_eq!(
            Observance::new(ObservanceKind::HangulDay).badge(),
            BadgeStyle::Holiday
        );
        assert_eq!(
            Observance::new(ObservanceKind::BuddhasBirthday).badge(),
            BadgeStyle::Liturgical
        );
        assert_eq!(
            Observance::new(ObservanceKind::AshWednesday).badge(),
            BadgeStyle::Colored(Color::Purple)
        );
    }

    #[test]
    fn liturgical_feasts_are_working_days() {
        use ObservanceKind::*;
        for kind in [Epiphany, Easter, Pentecost, Advent1, ChristTheKing, BuddhasBirthday] {
            let o = Observance::new(kind);
            assert!(!o.is_public_holiday(), "{kind}");
            assert_eq!(o.category(), Category::LiturgicalSeason);
        }
    }

    #[test]
    fn names() {
        let o = Observance::new(ObservanceKind::ChuseokEve);
        assert_eq!(o.name(), "추석연휴");
        assert_eq!(o.kind().to_string(), "Chuseok Eve");
        assert_eq!(Color::Green.to_string(), "#2E7D32");
    }
}
