pub mod parameter;

use crate::novel::entry::SearchResult;
use crate::novel::{
    BigGenre, ExcludedTag, Genre, LastUpdate, NovelType, Order, OutputField, OutputFormat, RequiredTag,
    SearchTarget, StopStatus, WritingStyle,
};
use crate::provider::error::FetchError;
use crate::provider::NarouClient;
use parameter::{Flag, Joined, ParameterKey, QueryParameter, Single, Span};
use reqwest::Url;
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::RangeInclusive;
use tracing::debug;

/// 소설 검색 쿼리
///
/// 검색 조건을 호출한 순서대로 쌓기만 한다. 같은 조건을 두번 지정하면 파라미터도 두번 전달된다.
/// [`NarouQuery::fetch`]로 한번 사용하면 소비된다.
pub struct NarouQuery<'a> {
    client: &'a NarouClient,
    parameters: Vec<Box<dyn QueryParameter>>,
}

impl<'a> NarouQuery<'a> {
    pub(crate) fn new(client: &'a NarouClient) -> Self {
        Self {
            client,
            parameters: Vec::new(),
        }
    }

    pub fn parameters(&self) -> &[Box<dyn QueryParameter>] {
        &self.parameters
    }

    /// 직접 구현한 파라미터를 추가한다.
    pub fn parameter(mut self, parameter: impl QueryParameter + 'static) -> Self {
        self.parameters.push(Box::new(parameter));
        self
    }

    /// `word`, `notword`를 검색할 대상. 대상 하나당 파라미터 하나가 추가된다.
    pub fn search_targets(mut self, targets: &[SearchTarget]) -> Self {
        for target in targets {
            self.parameters.push(Box::new(Flag::from(*target)));
        }
        self
    }

    /// 검색 단어. 공백으로 구분하면 AND 검색이 된다.
    pub fn word(self, word: impl Into<String>) -> Self {
        self.parameter(Single::new(ParameterKey::Word, word.into()))
    }

    /// 제외할 단어
    pub fn not_word(self, word: impl Into<String>) -> Self {
        self.parameter(Single::new(ParameterKey::NotWord, word.into()))
    }

    pub fn order(self, order: Order) -> Self {
        self.parameter(Single::new(ParameterKey::Order, order))
    }

    pub fn big_genre(self, big_genre: BigGenre) -> Self {
        self.parameter(Single::new(ParameterKey::BigGenre, big_genre))
    }

    pub fn not_big_genre(self, big_genre: BigGenre) -> Self {
        self.parameter(Single::new(ParameterKey::NotBigGenre, big_genre))
    }

    pub fn genres(self, genres: &[Genre]) -> Self {
        self.parameter(Joined::new(ParameterKey::Genre, genres.to_vec()))
    }

    pub fn not_genres(self, genres: &[Genre]) -> Self {
        self.parameter(Joined::new(ParameterKey::NotGenre, genres.to_vec()))
    }

    /// 작가의 사용자 ID로 검색한다. 여러 ID는 OR 검색이 된다.
    pub fn user_ids<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = ids.into_iter().map(Into::into).collect::<Vec<String>>();
        self.parameter(Joined::new(ParameterKey::UserId, ids))
    }

    /// 등록 필수 키워드를 포함한 작품만 검색한다. 태그 하나당 파라미터 하나가 추가된다.
    pub fn required_tags(mut self, tags: &[RequiredTag]) -> Self {
        for tag in tags {
            self.parameters.push(Box::new(Flag::from(*tag)));
        }
        self
    }

    /// 등록 필수 키워드를 포함한 작품을 제외한다.
    pub fn excluded_tags(mut self, tags: &[ExcludedTag]) -> Self {
        for tag in tags {
            self.parameters.push(Box::new(Flag::from(*tag)));
        }
        self
    }

    pub fn stop(self, stop: StopStatus) -> Self {
        self.parameter(Single::new(ParameterKey::Stop, stop))
    }

    pub fn last_update(self, last_update: LastUpdate) -> Self {
        self.parameter(Single::new(ParameterKey::LastUp, last_update))
    }

    /// N코드로 검색한다. 검색 제외 설정된 작품은 조회되지 않는다.
    pub fn ncodes<I, S>(self, ncodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ncodes = ncodes.into_iter().map(Into::into).collect::<Vec<String>>();
        self.parameter(Joined::new(ParameterKey::Ncode, ncodes))
    }

    /// 픽업 대상 작품만 검색한다.
    pub fn pickup(self) -> Self {
        self.parameter(Flag::new(ParameterKey::IsPickup))
    }

    /// 최대 출력 수 (1 ~ 500)
    pub fn limit(self, count: u32) -> Self {
        self.parameter(Single::new(ParameterKey::Limit, count))
    }

    /// 출력 시작 위치 (1부터 시작)
    pub fn start(self, position: u32) -> Self {
        self.parameter(Single::new(ParameterKey::Start, position))
    }

    /// 응답에 포함할 항목을 지정한다. 지정하지 않으면 모든 항목이 출력된다.
    pub fn output_fields(self, fields: &[OutputField]) -> Self {
        self.parameter(Joined::new(ParameterKey::OutputFields, fields.to_vec()))
    }

    pub fn min_length(self, length: u32) -> Self {
        self.parameter(Single::new(ParameterKey::MinLength, length))
    }

    pub fn max_length(self, length: u32) -> Self {
        self.parameter(Single::new(ParameterKey::MaxLength, length))
    }

    /// 문자수 범위. `min_length`, `max_length`와 함께 사용할 수 없다.
    pub fn length(self, range: RangeInclusive<u32>) -> Self {
        self.parameter(Span::new(ParameterKey::Length, range))
    }

    /// 대화율(%) 범위
    pub fn conversation_rate(self, range: RangeInclusive<u32>) -> Self {
        self.parameter(Span::new(ParameterKey::Kaiwaritu, range))
    }

    /// 삽화 수 범위
    pub fn illustrations(self, range: RangeInclusive<u32>) -> Self {
        self.parameter(Span::new(ParameterKey::Sasie, range))
    }

    pub fn min_time(self, minutes: u32) -> Self {
        self.parameter(Single::new(ParameterKey::MinTime, minutes))
    }

    pub fn max_time(self, minutes: u32) -> Self {
        self.parameter(Single::new(ParameterKey::MaxTime, minutes))
    }

    /// 읽는 시간(분) 범위. `min_time`, `max_time`과 함께 사용할 수 없다.
    pub fn reading_time(self, range: RangeInclusive<u32>) -> Self {
        self.parameter(Span::new(ParameterKey::Time, range))
    }

    pub fn novel_type(self, novel_type: NovelType) -> Self {
        self.parameter(Single::new(ParameterKey::NovelType, novel_type))
    }

    pub fn writing_styles(self, styles: &[WritingStyle]) -> Self {
        self.parameter(Joined::new(ParameterKey::Buntai, styles.to_vec()))
    }

    /// 쌓인 파라미터와 `extra`를 순서대로 붙인 요청 URL을 만든다.
    pub fn url(&self, extra: &[&dyn QueryParameter]) -> Result<Url, FetchError> {
        let mut url = Url::parse(self.client.endpoint())
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{} ({})", self.client.endpoint(), e)))?;

        let mut pairs: Vec<&dyn QueryParameter> = self.parameters.iter()
            .map(|p| &**p as &dyn QueryParameter)
            .collect();
        pairs.extend_from_slice(extra);

        if !pairs.is_empty() {
            let mut query = url.query_pairs_mut();
            for p in pairs {
                query.append_pair(p.name(), &p.value());
            }
        }

        Ok(url)
    }

    /// 검색을 실행한다.
    ///
    /// 응답 해석기는 JSON만 읽을 수 있으므로 출력 형식은 항상 JSON으로 고정된다.
    pub fn fetch(self) -> Result<SearchResult, FetchError> {
        let out = Single::new(ParameterKey::Out, OutputFormat::Json);
        let extra: [&dyn QueryParameter; 1] = [&out];
        let url = self.url(&extra)?;
        debug!("Request novel search: {}", url);

        let bytes = self.client.get(&url)?;
        let result = SearchResult::from_slice_with(&bytes, self.client.date_codec())?;
        debug!("Fetched {} novels (allcount ==> {:?})", result.len(), result.all_count());

        Ok(result)
    }
}

impl Debug for NarouQuery<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarouQuery")
            .field("endpoint", &self.client.endpoint())
            .field("parameters", &self.parameters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::error::TransportError;
    use crate::provider::transport::Transport;

    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, _url: &Url) -> Result<Vec<u8>, TransportError> {
            Err(TransportError::RequestFailed("offline".to_owned()))
        }
    }

    fn client() -> NarouClient {
        NarouClient::new("https://api.syosetu.com/novelapi/api/", Box::new(Unreachable))
    }

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_owned(), v.to_owned())
    }

    #[test]
    fn empty_query_has_no_query_string() {
        let client = client();
        let url = client.query().url(&[]).unwrap();
        assert_eq!(url.as_str(), "https://api.syosetu.com/novelapi/api/");
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let client = client();
        let url = client.query()
            .word("魔王")
            .search_targets(&[SearchTarget::Story, SearchTarget::Title])
            .last_update(LastUpdate::LastMonth)
            .url(&[])
            .unwrap();

        assert_eq!(pairs(&url), vec![
            pair("word", "魔王"),
            pair("ex", "1"),
            pair("title", "1"),
            pair("lastup", "lastmonth"),
        ]);
    }

    #[test]
    fn same_filter_twice_is_sent_twice() {
        let client = client();
        let url = client.query()
            .order(Order::NewestUpdate)
            .order(Order::OldestUpdate)
            .url(&[])
            .unwrap();

        assert_eq!(pairs(&url), vec![pair("order", "new"), pair("order", "old")]);
    }

    #[test]
    fn every_order_is_serialized_with_its_token() {
        let client = client();
        for order in Order::ALL {
            let url = client.query().order(order).url(&[]).unwrap();
            assert_eq!(pairs(&url), vec![pair("order", order.code())]);
        }
    }

    #[test]
    fn list_and_flag_setters() {
        let client = client();
        let url = client.query()
            .genres(&[Genre::HighFantasy, Genre::LowFantasy])
            .not_genres(&[Genre::Horror])
            .user_ids(["12", "34"])
            .ncodes(vec!["n9219fx".to_owned()])
            .required_tags(&[RequiredTag::Reincarnation, RequiredTag::Transfer])
            .excluded_tags(&[ExcludedTag::R15])
            .pickup()
            .url(&[])
            .unwrap();

        assert_eq!(pairs(&url), vec![
            pair("genre", "201-202"),
            pair("notgenre", "305"),
            pair("userid", "12-34"),
            pair("ncode", "n9219fx"),
            pair("istensei", "1"),
            pair("istenni", "1"),
            pair("notr15", "1"),
            pair("ispickup", "1"),
        ]);
    }

    #[test]
    fn numeric_and_range_setters() {
        let client = client();
        let url = client.query()
            .limit(500)
            .start(21)
            .min_length(1000)
            .max_length(200000)
            .length(1000..=5000)
            .conversation_rate(30..=60)
            .illustrations(1..=3)
            .min_time(5)
            .max_time(60)
            .reading_time(10..=20)
            .novel_type(NovelType::CompletedSerial)
            .writing_styles(&[WritingStyle::IndentedAverageBreaks, WritingStyle::IndentedManyBreaks])
            .stop(StopStatus::ExcludeStopped)
            .big_genre(BigGenre::Fantasy)
            .not_big_genre(BigGenre::Other)
            .not_word("BL")
            .output_fields(&[OutputField::Ncode, OutputField::Title, OutputField::LastUp])
            .url(&[])
            .unwrap();

        assert_eq!(pairs(&url), vec![
            pair("lim", "500"),
            pair("st", "21"),
            pair("minlen", "1000"),
            pair("maxlen", "200000"),
            pair("length", "1000-5000"),
            pair("kaiwaritu", "30-60"),
            pair("sasie", "1-3"),
            pair("mintime", "5"),
            pair("maxtime", "60"),
            pair("time", "10-20"),
            pair("type", "er"),
            pair("buntai", "6-4"),
            pair("stop", "1"),
            pair("biggenre", "2"),
            pair("notbiggenre", "99"),
            pair("notword", "BL"),
            pair("of", "n-t-gl"),
        ]);
    }

    #[test]
    fn extra_parameters_come_last() {
        let client = client();
        let out = Single::new(ParameterKey::Out, OutputFormat::Json);
        let extra: [&dyn QueryParameter; 1] = [&out];
        let url = client.query().limit(1).url(&extra).unwrap();
        assert_eq!(pairs(&url), vec![pair("lim", "1"), pair("out", "json")]);
    }

    #[test]
    fn malformed_endpoint_is_configuration_error() {
        let client = NarouClient::new("not a url", Box::new(Unreachable));
        let err = client.query().word("x").url(&[]).unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }

    #[test]
    fn custom_parameter_is_accepted() {
        #[derive(Debug)]
        struct Raw(&'static str, &'static str);

        impl QueryParameter for Raw {
            fn name(&self) -> &str {
                self.0
            }

            fn value(&self) -> String {
                self.1.to_owned()
            }
        }

        let client = client();
        let query = client.query().parameter(Raw("istt", "1"));
        assert_eq!(query.parameters().len(), 1);
        assert_eq!(pairs(&query.url(&[]).unwrap()), vec![pair("istt", "1")]);
    }
}
