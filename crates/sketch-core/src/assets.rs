//! Asset path probing.
//!
//! Clips are declared by a relative name and may be served either from the
//! page root or from an `assets/` directory. Loading tries each variant in
//! order and only gives up once every candidate failed.

use smallvec::SmallVec;
use std::fmt::Debug;
use std::future::Future;
use thiserror::Error;

pub const ASSETS_DIR: &str = "assets/";

pub type PathVariants = SmallVec<[String; 2]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("no path variants for {0}")]
    NoVariants(String),
    #[error("all paths failed for {name}: {}", .tried.join(", "))]
    AllVariantsFailed { name: String, tried: Vec<String> },
}

/// A successfully loaded asset and the url it came from.
#[derive(Debug)]
pub struct Loaded<T> {
    pub value: T,
    pub url: String,
}

/// Root and `assets/` spellings of `rel`, declared spelling first, without
/// duplicates.
pub fn path_variants(rel: &str) -> PathVariants {
    let (declared_in_assets, root) = match rel.strip_prefix(ASSETS_DIR) {
        Some(stripped) => (true, stripped.to_string()),
        None => (false, rel.to_string()),
    };
    let assets = format!("{ASSETS_DIR}{root}");
    let ordered: [String; 2] = if declared_in_assets {
        [assets, root]
    } else {
        [root, assets]
    };
    let mut out = PathVariants::new();
    for v in ordered {
        if !v.is_empty() && !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// Try `load` on each path in order until one succeeds.
///
/// Every failed attempt is logged as a warning.
pub async fn load_with_fallback<T, E, F, Fut>(
    name: &str,
    paths: &[String],
    mut load: F,
) -> Result<Loaded<T>, AssetError>
where
    E: Debug,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if paths.is_empty() {
        return Err(AssetError::NoVariants(name.to_string()));
    }
    for url in paths {
        match load(url.clone()).await {
            Ok(value) => {
                log::info!("[assets] loaded {} from {}", name, url);
                return Ok(Loaded {
                    value,
                    url: url.clone(),
                });
            }
            Err(e) => log::warn!("[assets] failed to load {}: {:?}", url, e),
        }
    }
    Err(AssetError::AllVariantsFailed {
        name: name.to_string(),
        tried: paths.to_vec(),
    })
}
