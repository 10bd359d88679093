// Host-side tests for asset path probing.

use sketch_core::assets::{load_with_fallback, path_variants, AssetError};
use std::cell::RefCell;

#[test]
fn root_spelling_is_tried_first() {
    let v = path_variants("slide.mp3");
    assert_eq!(v.as_slice(), ["slide.mp3", "assets/slide.mp3"]);
}

#[test]
fn assets_spelling_keeps_declared_order() {
    let v = path_variants("assets/slide.mp3");
    assert_eq!(v.as_slice(), ["assets/slide.mp3", "slide.mp3"]);
}

#[test]
fn fallback_stops_at_first_success() {
    let tried = RefCell::new(Vec::new());
    let paths = path_variants("storm.mp3").to_vec();
    let loaded = pollster::block_on(load_with_fallback("storm.mp3", &paths, |url| {
        tried.borrow_mut().push(url.clone());
        async move {
            if url.starts_with("assets/") {
                Ok(url.len())
            } else {
                Err("404")
            }
        }
    }))
    .expect("second variant loads");

    assert_eq!(loaded.url, "assets/storm.mp3");
    assert_eq!(loaded.value, "assets/storm.mp3".len());
    assert_eq!(*tried.borrow(), ["storm.mp3", "assets/storm.mp3"]);
}

#[test]
fn fallback_reports_every_failed_path() {
    let paths = path_variants("missing.mp3").to_vec();
    let err = pollster::block_on(load_with_fallback("missing.mp3", &paths, |_url| async {
        Err::<(), _>("404")
    }))
    .unwrap_err();

    assert_eq!(
        err,
        AssetError::AllVariantsFailed {
            name: "missing.mp3".to_string(),
            tried: vec!["missing.mp3".to_string(), "assets/missing.mp3".to_string()],
        }
    );
    assert!(err.to_string().contains("missing.mp3, assets/missing.mp3"));
}

#[test]
fn fallback_without_paths_fails_fast() {
    let err = pollster::block_on(load_with_fallback("x", &[], |_url| async { Ok::<_, ()>(()) }))
        .unwrap_err();
    assert_eq!(err, AssetError::NoVariants("x".to_string()));
}
