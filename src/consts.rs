/// Maximum valid Ethiopian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Pagume, the intercalary 13th month)
pub const MAX_MONTH: u8 = 13;

/// First day of month, used for rollover targets
pub const MIN_DAY: u8 = 1;

/// Month number for Meskerem, the first month
pub const MESKEREM: u8 = 1;
/// Month number for Pagume, the short 13th month
pub const PAGUME: u8 = 13;

/// Every month except Pagume has exactly 30 days
pub const DAYS_IN_REGULAR_MONTH: u8 = 30;
/// Days in Pagume in a common year
pub const PAGUME_DAYS: u8 = 5;
/// Days in Pagume in a leap year
pub const PAGUME_DAYS_LEAP: u8 = 6;

/// Leap year occurs every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// ...when the year leaves this remainder (no century correction)
pub(crate) const LEAP_YEAR_REMAINDER: u16 = 3;

/// Ethiopian year N begins in Gregorian year N + 7
pub const GREGORIAN_YEAR_OFFSET: i32 = 7;
/// Gregorian month of the Ethiopian New Year (September)
pub(crate) const NEW_YEAR_MONTH: u32 = 9;
/// Gregorian day of the Ethiopian New Year (fixed; the Sept 12
/// pre-leap-year shift is deliberately not modeled)
pub(crate) const NEW_YEAR_DAY: u32 = 11;

/// Amharic month names, indexed by `month - 1`
pub const ETHIOPIC_MONTHS: [&str; 13] = [
    "መስከረም", // Meskerem
    "ጥቅምት",  // Tikimt
    "ኅዳር",   // Hidar
    "ታኅሣሥ",  // Tahsas
    "ጥር",    // Tir
    "የካቲት",  // Yekatit
    "መጋቢት",  // Megabit
    "ሚያዝያ",  // Miazia
    "ግንቦት",  // Ginbot
    "ሰኔ",    // Sene
    "ሐምሌ",   // Hamle
    "ነሐሴ",   // Nehase
    "ጳጉሜ",   // Pagume
];

/// Amharic weekday names, Monday first
pub const ETHIOPIC_WEEKDAYS: [&str; 7] = [
    "ሰኞ",    // Monday
    "ማክሰኞ",  // Tuesday
    "ረቡዕ",   // Wednesday
    "ሐሙስ",   // Thursday
    "አርብ",   // Friday
    "ቅዳሜ",   // Saturday
    "እሁድ",   // Sunday
];

/// Ge'ez glyphs for the units 1-9, indexed by `digit - 1`
pub const GEEZ_UNITS: [&str; 9] = ["፩", "፪", "፫", "፬", "፭", "፮", "፯", "፰", "፱"];

/// Ge'ez glyphs for the tens 10-90; each multiple of ten has its own
/// glyph rather than a composition
pub const GEEZ_TENS: [&str; 9] = ["፲", "፳", "፴", "፵", "፶", "፷", "፸", "፹", "፺"];

/// Hundreds place marker
pub const GEEZ_HUNDRED: &str = "፻";
/// Thousands place marker
pub const GEEZ_THOUSAND: &str = "ሺ";
/// Ten-thousands place marker
pub const GEEZ_TEN_THOUSAND: &str = "፼";

/// Ge'ez has no zero glyph; the Arabic digit is used by convention
pub(crate) const ARABIC_ZERO: &str = "0";
