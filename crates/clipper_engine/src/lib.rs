//! Clipper engine: fetching, normalisation, per-source extraction and note output.
mod clipper;
mod convert;
mod decode;
mod engine;
mod extract;
mod fetch;
mod filename;
mod images;
mod meta;
mod normalize;
mod persist;
mod sources;
mod types;

pub use clipper::Clipper;
pub use convert::{Converter, Html2MdConverter};
pub use decode::{decode_html, DecodedHtml};
pub use engine::EngineHandle;
pub use extract::{ArticleExtractor, ReadabilityExtractor, ReadableArticle};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::sanitize_filename;
pub use images::{ImageReplacer, KeepRemoteImages};
pub use meta::PageMeta;
pub use normalize::{
    current_base, Correction, DocumentNormalizer, NormalizedDocument, CODE_LANG_PREFIX,
    LINE_BREAK_MARKER,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use types::{
    EngineEvent, ExtractError, FailureKind, FetchError, FetchMetadata, FetchOutput, RequestId,
};
