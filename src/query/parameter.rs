use crate::novel::{
    BigGenre, ExcludedTag, Genre, LastUpdate, NovelType, OutputField, OutputFormat, Order, RequiredTag,
    SearchTarget, StopStatus, WritingStyle,
};
use std::fmt::Debug;
use std::ops::RangeInclusive;

/// 검색 API 쿼리 파라미터의 이름
///
/// API가 정한 값이므로 변경하면 안 된다.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ParameterKey {
    /// 출력 형식
    Out,
    /// 출력 항목 (여러 항목은 `-`로 구분)
    OutputFields,
    /// 최대 출력 수 (1 ~ 500, 기본 20)
    Limit,
    /// 출력 시작 위치
    Start,
    Order,
    Word,
    NotWord,
    /// `word`, `notword`의 검색 대상에 제목을 포함
    Title,
    /// `word`, `notword`의 검색 대상에 줄거리를 포함
    Story,
    Keyword,
    WriterName,
    BigGenre,
    NotBigGenre,
    Genre,
    NotGenre,
    UserId,
    IsR15,
    IsBl,
    IsGl,
    IsZankoku,
    IsTensei,
    IsTenni,
    IsTt,
    NotR15,
    NotBl,
    NotGl,
    NotZankoku,
    NotTensei,
    NotTenni,
    MinLength,
    MaxLength,
    Length,
    Kaiwaritu,
    Sasie,
    MinTime,
    MaxTime,
    Time,
    NovelType,
    Ncode,
    Buntai,
    Stop,
    LastUp,
    IsPickup,
}

impl ParameterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::Out => "out",
            ParameterKey::OutputFields => "of",
            ParameterKey::Limit => "lim",
            ParameterKey::Start => "st",
            ParameterKey::Order => "order",
            ParameterKey::Word => "word",
            ParameterKey::NotWord => "notword",
            ParameterKey::Title => "title",
            ParameterKey::Story => "ex",
            ParameterKey::Keyword => "keyword",
            ParameterKey::WriterName => "wname",
            ParameterKey::BigGenre => "biggenre",
            ParameterKey::NotBigGenre => "notbiggenre",
            ParameterKey::Genre => "genre",
            ParameterKey::NotGenre => "notgenre",
            ParameterKey::UserId => "userid",
            ParameterKey::IsR15 => "isr15",
            ParameterKey::IsBl => "isbl",
            ParameterKey::IsGl => "isgl",
            ParameterKey::IsZankoku => "iszankoku",
            ParameterKey::IsTensei => "istensei",
            ParameterKey::IsTenni => "istenni",
            ParameterKey::IsTt => "istt",
            ParameterKey::NotR15 => "notr15",
            ParameterKey::NotBl => "notbl",
            ParameterKey::NotGl => "notgl",
            ParameterKey::NotZankoku => "notzankoku",
            ParameterKey::NotTensei => "nottensei",
            ParameterKey::NotTenni => "nottenni",
            ParameterKey::MinLength => "minlen",
            ParameterKey::MaxLength => "maxlen",
            ParameterKey::Length => "length",
            ParameterKey::Kaiwaritu => "kaiwaritu",
            ParameterKey::Sasie => "sasie",
            ParameterKey::MinTime => "mintime",
            ParameterKey::MaxTime => "maxtime",
            ParameterKey::Time => "time",
            ParameterKey::NovelType => "type",
            ParameterKey::Ncode => "ncode",
            ParameterKey::Buntai => "buntai",
            ParameterKey::Stop => "stop",
            ParameterKey::LastUp => "lastup",
            ParameterKey::IsPickup => "ispickup",
        }
    }
}

/// 쿼리 파라미터 하나를 표현하는 트레이트
///
/// `name`은 API의 파라미터명, `value`는 API에 전달 될 문자열 값이다.
/// 직접 구현한 타입도 [`crate::query::NarouQuery::parameter`]로 쿼리에 추가할 수 있다.
pub trait QueryParameter: Debug {
    fn name(&self) -> &str;

    fn value(&self) -> String;
}

/// 쿼리 파라미터 값으로 변환 가능한 도메인 값
pub trait WireValue {
    fn wire_value(&self) -> String;
}

impl WireValue for String {
    fn wire_value(&self) -> String {
        self.clone()
    }
}

impl WireValue for &str {
    fn wire_value(&self) -> String {
        (*self).to_owned()
    }
}

impl WireValue for u32 {
    fn wire_value(&self) -> String {
        self.to_string()
    }
}

impl WireValue for BigGenre {
    fn wire_value(&self) -> String {
        self.code().to_string()
    }
}

impl WireValue for Genre {
    fn wire_value(&self) -> String {
        self.code().to_string()
    }
}

impl WireValue for NovelType {
    fn wire_value(&self) -> String {
        self.code().to_owned()
    }
}

impl WireValue for WritingStyle {
    fn wire_value(&self) -> String {
        self.code().to_string()
    }
}

impl WireValue for StopStatus {
    fn wire_value(&self) -> String {
        self.code().to_string()
    }
}

impl WireValue for Order {
    fn wire_value(&self) -> String {
        self.code().to_owned()
    }
}

impl WireValue for LastUpdate {
    fn wire_value(&self) -> String {
        self.code()
    }
}

impl WireValue for OutputFormat {
    fn wire_value(&self) -> String {
        self.code().to_owned()
    }
}

impl WireValue for OutputField {
    fn wire_value(&self) -> String {
        self.code().to_owned()
    }
}

/// 하나의 값을 가지는 파라미터 (`word`, `lim`, `order` 등)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Single<T> {
    key: ParameterKey,
    value: T,
}

impl<T: WireValue + Debug> Single<T> {
    pub fn new(key: ParameterKey, value: T) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> ParameterKey {
        self.key
    }
}

impl<T: WireValue + Debug> QueryParameter for Single<T> {
    fn name(&self) -> &str {
        self.key.as_str()
    }

    fn value(&self) -> String {
        self.value.wire_value()
    }
}

/// 구분자 `-`로 이어 붙이는 여러 값 파라미터 (`genre`, `userid`, `ncode` 등)
///
/// 빈 목록은 검증하지 않고 그대로 전달한다.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Joined<T> {
    key: ParameterKey,
    values: Vec<T>,
}

/// [`Joined`]의 값 구분자
pub const SEPARATOR: &str = "-";

impl<T: WireValue + Debug> Joined<T> {
    pub fn new(key: ParameterKey, values: Vec<T>) -> Self {
        Self { key, values }
    }

    pub fn key(&self) -> ParameterKey {
        self.key
    }
}

impl<T: WireValue + Debug> QueryParameter for Joined<T> {
    fn name(&self) -> &str {
        self.key.as_str()
    }

    fn value(&self) -> String {
        self.values
            .iter()
            .map(WireValue::wire_value)
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

/// 값이 항상 `1`인 플래그 파라미터
///
/// 파라미터가 존재하는 것 만으로 조건이 켜진다.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Flag {
    key: ParameterKey,
}

impl Flag {
    pub fn new(key: ParameterKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> ParameterKey {
        self.key
    }
}

impl From<RequiredTag> for Flag {
    fn from(tag: RequiredTag) -> Self {
        let key = match tag {
            RequiredTag::R15 => ParameterKey::IsR15,
            RequiredTag::BoysLove => ParameterKey::IsBl,
            RequiredTag::GirlsLove => ParameterKey::IsGl,
            RequiredTag::Cruelty => ParameterKey::IsZankoku,
            RequiredTag::Reincarnation => ParameterKey::IsTensei,
            RequiredTag::Transfer => ParameterKey::IsTenni,
            RequiredTag::ReincarnationOrTransfer => ParameterKey::IsTt,
        };
        Self::new(key)
    }
}

impl From<ExcludedTag> for Flag {
    fn from(tag: ExcludedTag) -> Self {
        let key = match tag {
            ExcludedTag::R15 => ParameterKey::NotR15,
            ExcludedTag::BoysLove => ParameterKey::NotBl,
            ExcludedTag::GirlsLove => ParameterKey::NotGl,
            ExcludedTag::Cruelty => ParameterKey::NotZankoku,
            ExcludedTag::Reincarnation => ParameterKey::NotTensei,
            ExcludedTag::Transfer => ParameterKey::NotTenni,
        };
        Self::new(key)
    }
}

impl From<SearchTarget> for Flag {
    fn from(target: SearchTarget) -> Self {
        let key = match target {
            SearchTarget::Title => ParameterKey::Title,
            SearchTarget::Story => ParameterKey::Story,
            SearchTarget::Keyword => ParameterKey::Keyword,
            SearchTarget::WriterName => ParameterKey::WriterName,
        };
        Self::new(key)
    }
}

impl QueryParameter for Flag {
    fn name(&self) -> &str {
        self.key.as_str()
    }

    fn value(&self) -> String {
        "1".to_owned()
    }
}

/// `최소-최대` 형태의 범위 파라미터 (`length`, `kaiwaritu`, `sasie`, `time`)
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Span {
    key: ParameterKey,
    range: RangeInclusive<u32>,
}

impl Span {
    pub fn new(key: ParameterKey, range: RangeInclusive<u32>) -> Self {
        Self { key, range }
    }

    pub fn key(&self) -> ParameterKey {
        self.key
    }
}

impl QueryParameter for Span {
    fn name(&self) -> &str {
        self.key.as_str()
    }

    fn value(&self) -> String {
        format!("{}{}{}", self.range.start(), SEPARATOR, self.range.end())
    }
}
