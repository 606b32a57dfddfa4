use clap::Parser;
use narou_search_rust::config::{self, log};
use narou_search_rust::{Genre, HttpTransport, LastUpdate, NarouClient, NarouQuery, Order};
use std::error::Error;
use std::fmt;
use std::fmt::Formatter;
use tracing::info;

#[derive(Debug)]
enum ArgumentError {
    InvalidArgument(String),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
        }
    }
}

impl Error for ArgumentError {}

/// 소설가가 되자 소설 검색
#[derive(Debug, Parser)]
#[command(name = "narou-search", version)]
struct Args {
    /// 검색 단어
    #[arg(long)]
    word: Option<String>,

    /// 제외 단어
    #[arg(long)]
    not_word: Option<String>,

    /// 장르 코드 (예: 201). 여러번 지정할 수 있다.
    #[arg(long = "genre")]
    genres: Vec<u32>,

    /// 정렬 순서 (예: hyoka, weekly, new)
    #[arg(long)]
    order: Option<String>,

    /// N 코드. 여러번 지정할 수 있다.
    #[arg(long = "ncode")]
    ncodes: Vec<String>,

    #[arg(long)]
    limit: Option<u32>,

    /// 픽업 대상 작품만 검색
    #[arg(long)]
    pickup: bool,

    /// 최종 게재일 (thisweek, lastweek, sevenday, thismonth, lastmonth)
    #[arg(long)]
    last_update: Option<String>,
}

impl Args {
    fn apply<'a>(&self, mut query: NarouQuery<'a>) -> Result<NarouQuery<'a>, ArgumentError> {
        if let Some(word) = &self.word {
            query = query.word(word.as_str());
        }
        if let Some(word) = &self.not_word {
            query = query.not_word(word.as_str());
        }
        if !self.genres.is_empty() {
            let genres = self.genres.iter()
                .map(|code| {
                    Genre::from_code(i64::from(*code))
                        .ok_or_else(|| ArgumentError::InvalidArgument(format!("Unknown genre: {}", code)))
                })
                .collect::<Result<Vec<_>, _>>()?;
            query = query.genres(&genres);
        }
        if let Some(order) = &self.order {
            let order = Order::from_code(order)
                .ok_or_else(|| ArgumentError::InvalidArgument(format!("Unknown order: {}", order)))?;
            query = query.order(order);
        }
        if !self.ncodes.is_empty() {
            query = query.ncodes(self.ncodes.iter().map(String::as_str));
        }
        if let Some(limit) = self.limit {
            query = query.limit(limit);
        }
        if self.pickup {
            query = query.pickup();
        }
        if let Some(token) = &self.last_update {
            let last_update = LastUpdate::from_token(token)
                .ok_or_else(|| ArgumentError::InvalidArgument(format!("Unknown last update: {}", token)))?;
            query = query.last_update(last_update);
        }
        Ok(query)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    config::load_dotenv();
    let config = config::load_config()?;
    let _guard = config.logger()
        .map(log::set_global_logging_config)
        .transpose()?;

    let transport = HttpTransport::new(config.api().timeout())?;
    let codec = config.date().codec()?;
    let client = NarouClient::new(config.api().endpoint(), Box::new(transport))
        .with_date_codec(codec);

    let result = args.apply(client.query())?.fetch()?;
    info!("Search finished (allcount ==> {:?}, received ==> {})", result.all_count(), result.len());

    for entry in &result {
        let last_up = entry.last_up()
            .map(|d| codec.format(&d))
            .unwrap_or_default();
        println!(
            "{}\t{}\t{}\t{}",
            entry.ncode().unwrap_or_default(),
            entry.title().unwrap_or_default(),
            entry.writer().unwrap_or_default(),
            last_up
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use narou_search_rust::provider::error::TransportError;
    use narou_search_rust::Transport;
    use reqwest::Url;

    struct Unreachable;

    impl Transport for Unreachable {
        fn get(&self, _: &Url) -> Result<Vec<u8>, TransportError> {
            Err(TransportError::RequestFailed("offline".to_owned()))
        }
    }

    fn client() -> NarouClient {
        NarouClient::new("https://api.syosetu.com/novelapi/api/", Box::new(Unreachable))
    }

    #[test]
    fn arguments_become_query_parameters() {
        let args = Args::parse_from([
            "narou-search", "--word", "魔王", "--genre", "201", "--genre", "101",
            "--order", "weekly", "--ncode", "N0001A", "--ncode", "N0002B",
            "--limit", "5", "--pickup", "--last-update", "thismonth",
        ]);
        let client = client();
        let url = args.apply(client.query()).unwrap().url(&[]).unwrap();

        assert_eq!(
            url.query(),
            Some("word=%E9%AD%94%E7%8E%8B&genre=201-101&order=weekly&ncode=N0001A-N0002B&lim=5&ispickup=1&lastup=thismonth")
        );
    }

    #[test]
    fn unknown_order_is_rejected() {
        let args = Args::parse_from(["narou-search", "--order", "hyokades"]);
        let client = client();
        assert!(args.apply(client.query()).is_err());
    }

    #[test]
    fn unknown_genre_is_rejected() {
        let args = Args::parse_from(["narou-search", "--genre", "500"]);
        let client = client();
        assert!(args.apply(client.query()).is_err());
    }
}
