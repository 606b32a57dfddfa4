use crate::novel::date::{DateCodec, NarouDate};
use crate::novel::{BigGenre, Device, Genre};
use crate::provider::error::FetchError;
use serde_json::{Map, Value};
use std::fmt;
use std::fmt::{Display, Formatter};
use tracing::{trace, warn};

/// 응답 JSON 객체의 필드명
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EntryKey {
    /// 전체 검색 결과 수 (첫번째 메타데이터 객체에만 존재)
    AllCount,
    Title,
    Ncode,
    UserId,
    Writer,
    Story,
    BigGenre,
    Genre,
    Keyword,
    /// 최초 게재일
    FirstUp,
    /// 최종 게재일
    LastUp,
    /// 연재는 1, 단편은 2
    NovelType,
    /// 연재중이면 1, 단편과 완결 작품은 0
    End,
    /// 전체 게재 화수 (단편은 1)
    AllNo,
    Length,
    /// 읽는 시간(분), 문자수 ÷ 500 올림
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
    /// 시스템용 최종 갱신 일시로 작품 갱신과는 관계 없다.
    UpdatedAt,
}

impl EntryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKey::AllCount => "allcount",
            EntryKey::Title => "title",
            EntryKey::Ncode => "ncode",
            EntryKey::UserId => "userid",
            EntryKey::Writer => "writer",
            EntryKey::Story => "story",
            EntryKey::BigGenre => "biggenre",
            EntryKey::Genre => "genre",
            EntryKey::Keyword => "keyword",
            EntryKey::FirstUp => "general_firstup",
            EntryKey::LastUp => "general_lastup",
            EntryKey::NovelType => "novel_type",
            EntryKey::End => "end",
            EntryKey::AllNo => "general_all_no",
            EntryKey::Length => "length",
            EntryKey::Time => "time",
            EntryKey::IsStop => "isstop",
            EntryKey::IsR15 => "isr15",
            EntryKey::IsBl => "isbl",
            EntryKey::IsGl => "isgl",
            EntryKey::IsZankoku => "iszankoku",
            EntryKey::IsTensei => "istensei",
            EntryKey::IsTenni => "istenni",
            EntryKey::PcOrK => "pc_or_k",
            EntryKey::GlobalPoint => "global_point",
            EntryKey::DailyPoint => "daily_point",
            EntryKey::WeeklyPoint => "weekly_point",
            EntryKey::MonthlyPoint => "monthly_point",
            EntryKey::QuarterPoint => "quarter_point",
            EntryKey::YearlyPoint => "yearly_point",
            EntryKey::FavNovelCount => "fav_novel_cnt",
            EntryKey::ImpressionCount => "impression_cnt",
            EntryKey::ReviewCount => "review_cnt",
            EntryKey::AllPoint => "all_point",
            EntryKey::AllHyokaCount => "all_hyoka_cnt",
            EntryKey::SasieCount => "sasie_cnt",
            EntryKey::Kaiwaritu => "kaiwaritu",
            EntryKey::NovelUpdatedAt => "novelupdated_at",
            EntryKey::UpdatedAt => "updated_at",
        }
    }
}

/// 검색 결과의 소설 한 건
///
/// 응답 객체를 그대로 보관하고, 각 접근자가 호출될 때 필드의 타입을 확인한다.
/// 필드가 없거나 타입이 다르면 `None`을 반환한다.
#[derive(Debug, Clone)]
pub struct NovelEntry {
    raw: Map<String, Value>,
    codec: DateCodec,
}

impl NovelEntry {
    pub fn from_map(raw: Map<String, Value>) -> Self {
        Self::with_codec(raw, DateCodec::default())
    }

    /// 일시 필드를 읽을 때 `codec`을 사용한다.
    pub fn with_codec(raw: Map<String, Value>, codec: DateCodec) -> Self {
        Self { raw, codec }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn get(&self, key: EntryKey) -> Option<&Value> {
        self.raw.get(key.as_str())
    }

    pub fn all_count(&self) -> Option<i64> {
        self.integer(EntryKey::AllCount)
    }

    pub fn title(&self) -> Option<&str> {
        self.text(EntryKey::Title)
    }

    pub fn ncode(&self) -> Option<&str> {
        self.text(EntryKey::Ncode)
    }

    /// 작가의 사용자 ID. API는 숫자로 내려주지만 문자열도 그대로 받는다.
    pub fn user_id(&self) -> Option<String> {
        match self.get(EntryKey::UserId)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn writer(&self) -> Option<&str> {
        self.text(EntryKey::Writer)
    }

    pub fn story(&self) -> Option<&str> {
        self.text(EntryKey::Story)
    }

    /// 알 수 없는 코드면 `None`, 원본 코드는 [`NovelEntry::big_genre_code`]로 확인
    pub fn big_genre(&self) -> Option<BigGenre> {
        self.big_genre_code().and_then(BigGenre::from_code)
    }

    pub fn big_genre_code(&self) -> Option<i64> {
        self.integer(EntryKey::BigGenre)
    }

    pub fn genre(&self) -> Option<Genre> {
        self.genre_code().and_then(Genre::from_code)
    }

    pub fn genre_code(&self) -> Option<i64> {
        self.integer(EntryKey::Genre)
    }

    /// 공백(전각 공백 포함)으로 구분된 키워드 목록
    pub fn keywords(&self) -> Option<Vec<String>> {
        self.text(EntryKey::Keyword)
            .map(|s| s.split_whitespace().map(str::to_owned).collect())
    }

    pub fn first_up(&self) -> Option<NarouDate> {
        self.date(EntryKey::FirstUp)
    }

    pub fn last_up(&self) -> Option<NarouDate> {
        self.date(EntryKey::LastUp)
    }

    pub fn novel_type(&self) -> Option<i64> {
        self.integer(EntryKey::NovelType)
    }

    /// 연재중 여부 (`end` 필드)
    pub fn is_serializing(&self) -> Option<bool> {
        self.flag(EntryKey::End)
    }

    pub fn all_no(&self) -> Option<i64> {
        self.integer(EntryKey::AllNo)
    }

    pub fn length(&self) -> Option<i64> {
        self.integer(EntryKey::Length)
    }

    pub fn reading_time(&self) -> Option<i64> {
        self.integer(EntryKey::Time)
    }

    pub fn is_stopped(&self) -> Option<bool> {
        self.flag(EntryKey::IsStop)
    }

    pub fn is_r15(&self) -> bool {
        self.flag(EntryKey::IsR15).unwrap_or(false)
    }

    pub fn is_boys_love(&self) -> bool {
        self.flag(EntryKey::IsBl).unwrap_or(false)
    }

    pub fn is_girls_love(&self) -> bool {
        self.flag(EntryKey::IsGl).unwrap_or(false)
    }

    pub fn is_cruel(&self) -> bool {
        self.flag(EntryKey::IsZankoku).unwrap_or(false)
    }

    pub fn is_reincarnation(&self) -> bool {
        self.flag(EntryKey::IsTensei).unwrap_or(false)
    }

    pub fn is_transfer(&self) -> bool {
        self.flag(EntryKey::IsTenni).unwrap_or(false)
    }

    pub fn device(&self) -> Option<Device> {
        self.integer(EntryKey::PcOrK).and_then(Device::from_code)
    }

    /// 종합 평가 포인트 (북마크 수 × 2 + 평가점)
    pub fn global_point(&self) -> Option<i64> {
        self.integer(EntryKey::GlobalPoint)
    }

    pub fn daily_point(&self) -> Option<i64> {
        self.integer(EntryKey::DailyPoint)
    }

    pub fn weekly_point(&self) -> Option<i64> {
        self.integer(EntryKey::WeeklyPoint)
    }

    pub fn monthly_point(&self) -> Option<i64> {
        self.integer(EntryKey::MonthlyPoint)
    }

    pub fn quarter_point(&self) -> Option<i64> {
        self.integer(EntryKey::QuarterPoint)
    }

    pub fn yearly_point(&self) -> Option<i64> {
        self.integer(EntryKey::YearlyPoint)
    }

    pub fn fav_novel_count(&self) -> Option<i64> {
        self.integer(EntryKey::FavNovelCount)
    }

    pub fn impression_count(&self) -> Option<i64> {
        self.integer(EntryKey::ImpressionCount)
    }

    pub fn review_count(&self) -> Option<i64> {
        self.integer(EntryKey::ReviewCount)
    }

    pub fn all_point(&self) -> Option<i64> {
        self.integer(EntryKey::AllPoint)
    }

    pub fn all_hyoka_count(&self) -> Option<i64> {
        self.integer(EntryKey::AllHyokaCount)
    }

    pub fn sasie_count(&self) -> Option<i64> {
        self.integer(EntryKey::SasieCount)
    }

    /// 대화율(%)
    pub fn kaiwaritu(&self) -> Option<i64> {
        self.integer(EntryKey::Kaiwaritu)
    }

    pub fn novel_updated_at(&self) -> Option<NarouDate> {
        self.date(EntryKey::NovelUpdatedAt)
    }

    pub fn updated_at(&self) -> Option<NarouDate> {
        self.date(EntryKey::UpdatedAt)
    }

    fn text(&self, key: EntryKey) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn integer(&self, key: EntryKey) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// JSON 불리언 혹은 정수(0이면 false, 그 외는 true)만 허용한다.
    fn flag(&self, key: EntryKey) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|n| n != 0),
            _ => None,
        }
    }

    fn date(&self, key: EntryKey) -> Option<NarouDate> {
        let s = self.text(key)?;
        let date = self.codec.parse(s);
        if date.is_none() {
            warn!("Failed to parse {}: {:?} (ncode ==> {:?})", key.as_str(), s, self.ncode());
        }
        date
    }
}

impl Display for NovelEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(&self.raw).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

/// 검색 API 응답
///
/// N코드가 없는 객체(첫번째 메타데이터 객체 포함)는 소설로 취급하지 않고 버린다.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    all_count: Option<u64>,
    entries: Vec<NovelEntry>,
}

impl SearchResult {
    /// 응답 바이트를 JSON으로 읽어 검색 결과로 변환한다.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FetchError> {
        Self::from_slice_with(bytes, DateCodec::default())
    }

    pub fn from_slice_with(bytes: &[u8], codec: DateCodec) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| FetchError::ResponseParseFailed(e.to_string()))?;

        Self::from_value_with(value, codec)
    }

    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        Self::from_value_with(value, DateCodec::default())
    }

    /// 최상위가 배열이 아니면 [`FetchError::UnexpectedJsonType`]을 반환한다.
    pub fn from_value_with(value: Value, codec: DateCodec) -> Result<Self, FetchError> {
        match value {
            Value::Array(arr) => Ok(Self::from_array(arr, codec)),
            _ => Err(FetchError::UnexpectedJsonType),
        }
    }

    pub fn from_array(arr: Vec<Value>, codec: DateCodec) -> Self {
        let mut all_count = None;
        let mut entries = Vec::new();
        let mut dropped = 0;

        for value in arr {
            let Value::Object(map) = value else {
                dropped += 1;
                continue;
            };
            if all_count.is_none() {
                all_count = map.get(EntryKey::AllCount.as_str()).and_then(Value::as_u64);
            }

            let entry = NovelEntry::with_codec(map, codec);
            if entry.ncode().is_some() {
                entries.push(entry);
            } else {
                dropped += 1;
            }
        }
        trace!("Decoded {} entries, dropped {} records without ncode", entries.len(), dropped);

        Self { all_count, entries }
    }

    /// 조건에 맞는 전체 작품 수 (출력 수 제한과 무관)
    pub fn all_count(&self) -> Option<u64> {
        self.all_count
    }

    pub fn entries(&self) -> &[NovelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NovelEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for SearchResult {
    type Item = NovelEntry;
    type IntoIter = std::vec::IntoIter<NovelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a NovelEntry;
    type IntoIter = std::slice::Iter<'a, NovelEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
