use once_cell::sync::Lazy;
use shared::question::Catalog;

/// The question catalog, embedded at build time and parsed once at startup.
pub static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::from_json(include_str!("../data/questions.json")));
