pub mod date;
pub mod entry;

use std::fmt;
use std::fmt::{Display, Formatter};

/// 대분류 (API의 `biggenre`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum BigGenre {
    Romance,
    Fantasy,
    Literature,
    SciFi,
    Other,
    NonGenre,
}

impl BigGenre {
    pub const ALL: [BigGenre; 6] = [
        BigGenre::Romance,
        BigGenre::Fantasy,
        BigGenre::Literature,
        BigGenre::SciFi,
        BigGenre::Other,
        BigGenre::NonGenre,
    ];

    pub fn code(&self) -> u32 {
        match self {
            BigGenre::Romance => 1,
            BigGenre::Fantasy => 2,
            BigGenre::Literature => 3,
            BigGenre::SciFi => 4,
            BigGenre::Other => 99,
            BigGenre::NonGenre => 98,
        }
    }

    /// 응답의 정수 코드를 대분류로 변환한다. 알 수 없는 코드는 `None`
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|g| i64::from(g.code()) == code)
    }
}

/// 장르 (API의 `genre`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Genre {
    /// 이세계(연애)
    IsekaiRomance,
    /// 현실세계(연애)
    RealWorldRomance,
    HighFantasy,
    LowFantasy,
    PureLiterature,
    HumanDrama,
    History,
    Mystery,
    Horror,
    Action,
    Comedy,
    VrGame,
    Space,
    ScienceFiction,
    Panic,
    FairyTale,
    Poetry,
    Essay,
    Replay,
    Other,
    NonGenre,
}

impl Genre {
    pub const ALL: [Genre; 21] = [
        Genre::IsekaiRomance,
        Genre::RealWorldRomance,
        Genre::HighFantasy,
        Genre::LowFantasy,
        Genre::PureLiterature,
        Genre::HumanDrama,
        Genre::History,
        Genre::Mystery,
        Genre::Horror,
        Genre::Action,
        Genre::Comedy,
        Genre::VrGame,
        Genre::Space,
        Genre::ScienceFiction,
        Genre::Panic,
        Genre::FairyTale,
        Genre::Poetry,
        Genre::Essay,
        Genre::Replay,
        Genre::Other,
        Genre::NonGenre,
    ];

    pub fn code(&self) -> u32 {
        match self {
            Genre::IsekaiRomance => 101,
            Genre::RealWorldRomance => 102,
            Genre::HighFantasy => 201,
            Genre::LowFantasy => 202,
            Genre::PureLiterature => 301,
            Genre::HumanDrama => 302,
            Genre::History => 303,
            Genre::Mystery => 304,
            Genre::Horror => 305,
            Genre::Action => 306,
            Genre::Comedy => 307,
            Genre::VrGame => 401,
            Genre::Space => 402,
            Genre::ScienceFiction => 403,
            Genre::Panic => 404,
            Genre::FairyTale => 9901,
            Genre::Poetry => 9902,
            Genre::Essay => 9903,
            Genre::Replay => 9904,
            Genre::Other => 9999,
            Genre::NonGenre => 9801,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|g| i64::from(g.code()) == code)
    }

    /// 장르가 속한 대분류
    pub fn big_genre(&self) -> BigGenre {
        match self.code() / 100 {
            1 => BigGenre::Romance,
            2 => BigGenre::Fantasy,
            3 => BigGenre::Literature,
            4 => BigGenre::SciFi,
            98 => BigGenre::NonGenre,
            _ => BigGenre::Other,
        }
    }
}

/// 소설 타입 검색 조건 (API의 `type`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum NovelType {
    /// 단편
    Short,
    /// 연재중
    Ongoing,
    /// 완결된 연재 소설
    CompletedSerial,
    /// 모든 연재 소설 (연재중 + 완결)
    AllSerials,
    /// 단편과 완결된 연재 소설
    ShortAndCompleted,
}

impl NovelType {
    pub fn code(&self) -> &'static str {
        match self {
            NovelType::Short => "t",
            NovelType::Ongoing => "r",
            NovelType::CompletedSerial => "er",
            NovelType::AllSerials => "re",
            NovelType::ShortAndCompleted => "ter",
        }
    }
}

/// 문체 (API의 `buntai`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WritingStyle {
    /// 들여쓰기 없음, 연속 개행이 많음
    NoIndentManyBreaks,
    /// 들여쓰기 없음, 개행 수는 평균
    NoIndentAverageBreaks,
    /// 들여쓰기 적절, 연속 개행이 많음
    IndentedManyBreaks,
    /// 들여쓰기 적절, 개행 수도 평균
    IndentedAverageBreaks,
}

impl WritingStyle {
    pub fn code(&self) -> u32 {
        match self {
            WritingStyle::NoIndentManyBreaks => 1,
            WritingStyle::NoIndentAverageBreaks => 2,
            WritingStyle::IndentedManyBreaks => 4,
            WritingStyle::IndentedAverageBreaks => 6,
        }
    }
}

/// 장기 연재 중단 작품 처리 (API의 `stop`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum StopStatus {
    /// 장기 연재 중단 작품을 제외
    ExcludeStopped,
    /// 장기 연재 중단 작품만 조회
    StoppedOnly,
}

impl StopStatus {
    pub fn code(&self) -> u32 {
        match self {
            StopStatus::ExcludeStopped => 1,
            StopStatus::StoppedOnly => 2,
        }
    }
}

/// 출력 순서 (API의 `order`)
///
/// 변수명과 API 토큰이 서로 다르므로 반드시 [`Order::code`]를 사용해야 한다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Order {
    /// 최신 갱신 순 (API 기본값)
    NewestUpdate,
    MostBookmarks,
    MostReviews,
    HighestTotalPoint,
    LowestTotalPoint,
    HighestDailyPoint,
    HighestWeeklyPoint,
    HighestMonthlyPoint,
    HighestQuarterPoint,
    HighestYearlyPoint,
    MostImpressions,
    MostRaters,
    FewestRaters,
    /// 주간 유니크 유저가 많은 순 (매주 화요일 새벽 초기화)
    MostWeeklyUniqueUsers,
    /// 문자수가 많은 순. API 토큰은 `lengthdesc` (`lengthdes`가 아님)
    LongestText,
    ShortestText,
    NewestPost,
    OldestUpdate,
}

impl Order {
    pub const ALL: [Order; 18] = [
        Order::NewestUpdate,
        Order::MostBookmarks,
        Order::MostReviews,
        Order::HighestTotalPoint,
        Order::LowestTotalPoint,
        Order::HighestDailyPoint,
        Order::HighestWeeklyPoint,
        Order::HighestMonthlyPoint,
        Order::HighestQuarterPoint,
        Order::HighestYearlyPoint,
        Order::MostImpressions,
        Order::MostRaters,
        Order::FewestRaters,
        Order::MostWeeklyUniqueUsers,
        Order::LongestText,
        Order::ShortestText,
        Order::NewestPost,
        Order::OldestUpdate,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Order::NewestUpdate => "new",
            Order::MostBookmarks => "favnovelcnt",
            Order::MostReviews => "reviewcnt",
            Order::HighestTotalPoint => "hyoka",
            Order::LowestTotalPoint => "hyokaasc",
            Order::HighestDailyPoint => "dailypoint",
            Order::HighestWeeklyPoint => "weeklypoint",
            Order::HighestMonthlyPoint => "monthlypoint",
            Order::HighestQuarterPoint => "quarterpoint",
            Order::HighestYearlyPoint => "yearlypoint",
            Order::MostImpressions => "impressioncnt",
            Order::MostRaters => "hyokacnt",
            Order::FewestRaters => "hyokacntasc",
            Order::MostWeeklyUniqueUsers => "weekly",
            Order::LongestText => "lengthdesc",
            Order::ShortestText => "lengthasc",
            Order::NewestPost => "ncodedesc",
            Order::OldestUpdate => "old",
        }
    }

    /// CLI 등에서 전달 받은 토큰으로 순서를 찾는다.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.code() == code)
    }
}

/// `word`, `notword`의 검색 대상 범위
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SearchTarget {
    Title,
    /// 줄거리
    Story,
    Keyword,
    WriterName,
}

/// 등록 필수 키워드 지정 (해당 키워드를 포함한 작품만 검색)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum RequiredTag {
    R15,
    BoysLove,
    GirlsLove,
    Cruelty,
    Reincarnation,
    Transfer,
    /// 이세계 전생 또는 이세계 전이
    ReincarnationOrTransfer,
}

/// 등록 필수 키워드 제외 (해당 키워드를 포함한 작품을 제외)
///
/// [`RequiredTag`]와 같은 의미의 태그라도 API 키가 서로 다르다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ExcludedTag {
    R15,
    BoysLove,
    GirlsLove,
    Cruelty,
    Reincarnation,
    Transfer,
}

/// 최종 게재일 조건 (API의 `lastup`)
///
/// 고정 토큰과 UNIX 타임스탬프 범위는 한 값 안에서 함께 쓸 수 없다.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum LastUpdate {
    /// 이번 주 (일요일 0시 시작)
    ThisWeek,
    LastWeek,
    /// 최근 7일 (7일 전 0시 시작)
    PastSevenDays,
    ThisMonth,
    LastMonth,
    /// 시작과 종료 UNIX 타임스탬프(초)
    Timestamp(std::ops::RangeInclusive<i64>),
}

impl LastUpdate {
    /// 두 게재일 사이의 타임스탬프 범위 조건을 만든다.
    pub fn between(from: &date::NarouDate, to: &date::NarouDate) -> Self {
        LastUpdate::Timestamp(from.timestamp()..=to.timestamp())
    }

    pub fn code(&self) -> String {
        match self {
            LastUpdate::ThisWeek => "thisweek".to_owned(),
            LastUpdate::LastWeek => "lastweek".to_owned(),
            LastUpdate::PastSevenDays => "sevenday".to_owned(),
            LastUpdate::ThisMonth => "thismonth".to_owned(),
            LastUpdate::LastMonth => "lastmonth".to_owned(),
            LastUpdate::Timestamp(range) => format!("{}-{}", range.start(), range.end()),
        }
    }

    /// 고정 토큰 문자열로 조건을 찾는다. 타임스탬프 범위는 지원하지 않는다.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "thisweek" => Some(LastUpdate::ThisWeek),
            "lastweek" => Some(LastUpdate::LastWeek),
            "sevenday" => Some(LastUpdate::PastSevenDays),
            "thismonth" => Some(LastUpdate::ThisMonth),
            "lastmonth" => Some(LastUpdate::LastMonth),
            _ => None,
        }
    }
}

/// 출력 형식 (API의 `out`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum OutputFormat {
    Yaml,
    Json,
    /// PHP serialize()
    Php,
    Atom,
    Jsonp,
}

impl OutputFormat {
    pub fn code(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
            OutputFormat::Php => "php",
            OutputFormat::Atom => "atom",
            OutputFormat::Jsonp => "jsonp",
        }
    }
}

/// 출력 항목 지정 (API의 `of`)
///
/// 응답의 필드명과 다른 축약 코드를 사용한다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum OutputField {
    Title,
    Ncode,
    UserId,
    Writer,
    Story,
    BigGenre,
    Genre,
    Keyword,
    FirstUp,
    LastUp,
    NovelType,
    End,
    AllNo,
    Length,
    Time,
    IsStop,
    IsR15,
    IsBl,
    IsGl,
    IsZankoku,
    IsTensei,
    IsTenni,
    PcOrK,
    GlobalPoint,
    DailyPoint,
    WeeklyPoint,
    MonthlyPoint,
    QuarterPoint,
    YearlyPoint,
    FavNovelCount,
    ImpressionCount,
    ReviewCount,
    AllPoint,
    AllHyokaCount,
    SasieCount,
    Kaiwaritu,
    NovelUpdatedAt,
    UpdatedAt,
}

impl OutputField {
    pub fn code(&self) -> &'static str {
        match self {
            OutputField::Title => "t",
            OutputField::Ncode => "n",
            OutputField::UserId => "u",
            OutputField::Writer => "w",
            OutputField::Story => "s",
            OutputField::BigGenre => "bg",
            OutputField::Genre => "g",
            OutputField::Keyword => "k",
            OutputField::FirstUp => "gf",
            OutputField::LastUp => "gl",
            OutputField::NovelType => "nt",
            OutputField::End => "e",
            OutputField::AllNo => "ga",
            OutputField::Length => "l",
            OutputField::Time => "ti",
            OutputField::IsStop => "i",
            OutputField::IsR15 => "ir",
            OutputField::IsBl => "ibl",
            OutputField::IsGl => "igl",
            OutputField::IsZankoku => "izk",
            OutputField::IsTensei => "its",
            OutputField::IsTenni => "iti",
            OutputField::PcOrK => "p",
            OutputField::GlobalPoint => "gp",
            OutputField::DailyPoint => "dp",
            OutputField::WeeklyPoint => "wp",
            OutputField::MonthlyPoint => "mp",
            OutputField::QuarterPoint => "qp",
            OutputField::YearlyPoint => "yp",
            OutputField::FavNovelCount => "f",
            OutputField::ImpressionCount => "imp",
            OutputField::ReviewCount => "r",
            OutputField::AllPoint => "a",
            OutputField::AllHyokaCount => "ah",
            OutputField::SasieCount => "sa",
            OutputField::Kaiwaritu => "ka",
            OutputField::NovelUpdatedAt => "nu",
            OutputField::UpdatedAt => "ua",
        }
    }
}

/// 작품이 투고된 단말 구분 (응답의 `pc_or_k`)
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Device {
    MobileOnly,
    PcOnly,
    Both,
}

impl Device {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Device::MobileOnly),
            2 => Some(Device::PcOnly),
            3 => Some(Device::Both),
            _ => None,
        }
    }
}

impl Display for BigGenre {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BigGenre::Romance => write!(f, "恋愛"),
            BigGenre::Fantasy => write!(f, "ファンタジー"),
            BigGenre::Literature => write!(f, "文芸"),
            BigGenre::SciFi => write!(f, "SF"),
            BigGenre::Other => write!(f, "その他"),
            BigGenre::NonGenre => write!(f, "ノンジャンル"),
        }
    }
}
