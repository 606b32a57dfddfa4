pub mod config;
pub mod novel;
pub mod provider;
pub mod query;

pub use novel::date::{DateCodec, NarouDate};
pub use novel::entry::{EntryKey, NovelEntry, SearchResult};
pub use novel::{
    BigGenre, Device, ExcludedTag, Genre, LastUpdate, NovelType, Order, OutputField, OutputFormat, RequiredTag,
    SearchTarget, StopStatus, WritingStyle,
};
pub use provider::error::{FetchError, TransportError};
pub use provider::transport::{HttpTransport, Transport};
pub use provider::{NarouClient, NOVEL_API_ENDPOINT};
pub use query::parameter::{ParameterKey, QueryParameter};
pub use query::NarouQuery;
