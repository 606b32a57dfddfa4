use chrono::Locale;
use narou_search_rust::{
    BigGenre, DateCodec, FetchError, Genre, LastUpdate, NarouClient, NarouDate, Order, RequiredTag, SearchTarget,
    Transport, TransportError,
};
use reqwest::Url;
use std::cell::RefCell;
use std::rc::Rc;

/// 요청 URL을 기록하고 미리 준비한 응답을 돌려주는 전송 계층
struct Canned {
    requests: Rc<RefCell<Vec<Url>>>,
    response: Result<Vec<u8>, TransportError>,
}

impl Transport for Canned {
    fn get(&self, url: &Url) -> Result<Vec<u8>, TransportError> {
        self.requests.borrow_mut().push(url.clone());
        self.response.clone()
    }
}

fn client(response: Result<&str, TransportError>) -> (NarouClient, Rc<RefCell<Vec<Url>>>) {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let transport = Canned {
        requests: Rc::clone(&requests),
        response: response.map(|body| body.as_bytes().to_vec()),
    };
    let client = NarouClient::new("https://api.syosetu.com/novelapi/api/", Box::new(transport));
    (client, requests)
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

const RESPONSE: &str = r#"[
    {"allcount": 2},
    {
        "title": "魔王様の異世界生活",
        "ncode": "N1234AB",
        "userid": 123456,
        "writer": "作者A",
        "biggenre": 2,
        "genre": 201,
        "keyword": "魔王 異世界転生  ハーレム",
        "general_firstup": "2020-03-01 12:00:00",
        "general_lastup": "2020-04-01 08:30:00",
        "end": 1,
        "isr15": 1,
        "istensei": 1,
        "global_point": 12345
    },
    {
        "title": "二作目",
        "ncode": "N5678CD",
        "general_lastup": "2021-02-30 00:00:00"
    }
]"#;

#[test]
fn fetch_sends_one_request_with_json_output_last() {
    let (client, requests) = client(Ok("[]"));

    client.query()
        .word("魔王")
        .search_targets(&[SearchTarget::Title])
        .order(Order::MostWeeklyUniqueUsers)
        .fetch()
        .unwrap();

    let requests = requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path(), "/novelapi/api/");
    assert_eq!(pairs(&requests[0]), vec![
        ("word".to_owned(), "魔王".to_owned()),
        ("title".to_owned(), "1".to_owned()),
        ("order".to_owned(), "weekly".to_owned()),
        ("out".to_owned(), "json".to_owned()),
    ]);
}

#[test]
fn empty_query_only_requests_json() {
    let (client, requests) = client(Ok("[]"));

    let result = client.query().fetch().unwrap();

    assert!(result.is_empty());
    assert_eq!(result.all_count(), None);
    assert_eq!(requests.borrow()[0].query(), Some("out=json"));
}

#[test]
fn response_is_decoded_into_entries() {
    let (client, _) = client(Ok(RESPONSE));

    let result = client.query()
        .big_genre(BigGenre::Fantasy)
        .genres(&[Genre::HighFantasy])
        .required_tags(&[RequiredTag::Reincarnation])
        .last_update(LastUpdate::ThisMonth)
        .fetch()
        .unwrap();

    assert_eq!(result.all_count(), Some(2));
    assert_eq!(result.len(), 2);

    let first = &result.entries()[0];
    assert_eq!(first.ncode(), Some("N1234AB"));
    assert_eq!(first.title(), Some("魔王様の異世界生活"));
    assert_eq!(first.user_id(), Some("123456".to_owned()));
    assert_eq!(first.big_genre(), Some(BigGenre::Fantasy));
    assert_eq!(first.genre(), Some(Genre::HighFantasy));
    assert_eq!(first.keywords().unwrap(), vec!["魔王", "異世界転生", "ハーレム"]);
    assert_eq!(first.first_up(), NarouDate::new(2020, 3, 1, 12, 0, 0));
    assert!(first.is_r15());
    assert!(first.is_reincarnation());
    assert!(!first.is_boys_love());
    assert_eq!(first.global_point(), Some(12345));

    let second = &result.entries()[1];
    assert_eq!(second.ncode(), Some("N5678CD"));
    assert_eq!(second.last_up(), None);
}

#[test]
fn transport_error_is_passed_through() {
    let (client, _) = client(Err(TransportError::Status(503)));

    let err = client.query().word("魔王").fetch().unwrap_err();

    assert_eq!(err, FetchError::Transport(TransportError::Status(503)));
}

#[test]
fn top_level_object_is_rejected() {
    let (client, _) = client(Ok(r#"{"error": "limit exceeded"}"#));

    let err = client.query().fetch().unwrap_err();

    assert_eq!(err, FetchError::UnexpectedJsonType);
}

#[test]
fn broken_body_is_a_parse_error() {
    let (client, _) = client(Ok("<html>maintenance</html>"));

    let err = client.query().fetch().unwrap_err();

    assert!(matches!(err, FetchError::ResponseParseFailed(_)));
}

#[test]
fn malformed_endpoint_never_reaches_transport() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let transport = Canned { requests: Rc::clone(&requests), response: Ok(b"[]".to_vec()) };
    let client = NarouClient::new("api.syosetu.com/novelapi", Box::new(transport));

    let err = client.query().fetch().unwrap_err();

    assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    assert!(requests.borrow().is_empty());
}

#[test]
fn client_date_codec_reaches_entries() {
    let (client, _) = client(Ok(RESPONSE));
    let client = client.with_date_codec(DateCodec::new(Locale::POSIX, Locale::ko_KR));

    let result = client.query().fetch().unwrap();
    let first = &result.entries()[0];
    let codec = client.date_codec();

    assert!(matches!(codec.display_locale(), Locale::ko_KR));
    let last_up = first.last_up().unwrap();
    assert_eq!(codec.format(&last_up), "2020-04-01 08:30:00");
}

#[test]
fn client_can_be_reused_between_queries() {
    let (client, requests) = client(Ok("[]"));

    client.query().word("a").fetch().unwrap();
    client.query().not_word("b").fetch().unwrap();

    let requests = requests.borrow();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query(), Some("word=a&out=json"));
    assert_eq!(requests[1].query(), Some("notword=b&out=json"));
}
