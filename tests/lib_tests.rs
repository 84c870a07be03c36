use mime_registry::{extension_to_mime, mime_to_extension, Entry, Registry, Table};

fn case_variants(key: &str) -> [String; 3] {
    let mixed = key
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect::<String>();
    [key.to_ascii_lowercase(), key.to_ascii_uppercase(), mixed]
}

fn assert_sorted_and_unique(table: &Table) {
    let keys: Vec<String> = table.iter().map(|e| e.key().to_ascii_lowercase()).collect();
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1], "{:?} is not before {:?}", pair[0], pair[1]);
    }
}

#[test]
fn test_scenarios() {
    assert_eq!(extension_to_mime("html"), Some("text/html"));
    assert_eq!(extension_to_mime("jpg"), Some("image/jpeg"));
    assert_eq!(mime_to_extension("text/plain"), Some("txt"));
    assert_eq!(mime_to_extension("image/jpeg"), Some("jpeg"));
}

#[test]
fn test_compatibility_mappings() {
    for extension in ["htm", "html"] {
        assert_eq!(extension_to_mime(extension), Some("text/html"));
    }
    for extension in ["jpg", "jpeg", "jpe"] {
        assert_eq!(extension_to_mime(extension), Some("image/jpeg"));
    }
    assert_eq!(extension_to_mime("pdf"), Some("application/pdf"));
    assert_eq!(mime_to_extension("application/pdf"), Some("pdf"));
    assert_eq!(mime_to_extension("application/octet-stream"), Some("bin"));
}

#[test]
fn test_every_extension_resolves_in_any_case() {
    for entry in Registry::builtin().extensions() {
        for key in case_variants(entry.key()) {
            assert_eq!(extension_to_mime(&key), Some(entry.value()), "{key}");
        }
    }
}

#[test]
fn test_every_mime_type_resolves_in_any_case() {
    for entry in Registry::builtin().mime_types() {
        for key in case_variants(entry.key()) {
            assert_eq!(mime_to_extension(&key), Some(entry.value()), "{key}");
        }
    }
}

#[test]
fn test_misses() {
    assert_eq!(extension_to_mime("doesnotexist"), None);
    assert_eq!(mime_to_extension("application/does-not-exist"), None);

    // No normalization beyond ASCII case folding.
    assert_eq!(extension_to_mime(""), None);
    assert_eq!(extension_to_mime(".html"), None);
    assert_eq!(extension_to_mime(" html"), None);
    assert_eq!(extension_to_mime("htm*"), None);
    assert_eq!(mime_to_extension(""), None);
    assert_eq!(mime_to_extension("text/*"), None);
    assert_eq!(mime_to_extension("text/html; charset=utf-8"), None);
    assert_eq!(mime_to_extension("text/html "), None);
}

#[test]
fn test_tables_are_sorted_without_duplicates() {
    let registry = Registry::builtin();
    assert_sorted_and_unique(registry.extensions());
    assert_sorted_and_unique(registry.mime_types());
}

#[test]
fn test_round_trip_is_not_identity() {
    let mime = extension_to_mime("htm").unwrap();
    assert_eq!(mime_to_extension(mime), Some("html"));

    let mime = extension_to_mime("jpg").unwrap();
    assert_eq!(mime_to_extension(mime), Some("jpeg"));

    // The reverse table is curated on its own: "xml" is served as text/xml,
    // yet application/xml still saves as "xml".
    assert_eq!(extension_to_mime("xml"), Some("text/xml"));
    assert_eq!(mime_to_extension("application/xml"), Some("xml"));
    assert_eq!(mime_to_extension("text/xml"), Some("xml"));
}

#[test]
fn test_every_served_type_has_a_canonical_extension() {
    let registry = Registry::builtin();
    for entry in registry.extensions() {
        let extension = registry.mime_to_extension(entry.value());
        assert!(extension.is_some(), "{} has no reverse entry", entry.value());
        assert!(registry.extensions().contains_key(extension.unwrap()));
    }
}

#[test]
fn test_concurrent_readers_threads() {
    let registry = Registry::builtin();
    let expected: Vec<Option<&str>> = registry
        .extensions()
        .iter()
        .map(|e| extension_to_mime(e.key()))
        .collect();

    std::thread::scope(|scope| {
        for worker in 0..16 {
            let expected = &expected;
            scope.spawn(move || {
                for _ in 0..50 {
                    for (entry, want) in registry.extensions().iter().zip(expected) {
                        let key = if worker % 2 == 0 {
                            entry.key().to_ascii_uppercase()
                        } else {
                            entry.key().to_string()
                        };
                        assert_eq!(extension_to_mime(&key), *want);
                    }
                    for entry in registry.mime_types() {
                        assert_eq!(mime_to_extension(entry.key()), Some(entry.value()));
                    }
                }
            });
        }
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_readers_tasks() {
    let keys: Vec<String> = Registry::builtin()
        .extensions()
        .iter()
        .map(|e| e.key().to_string())
        .collect();
    let sequential: Vec<Option<&'static str>> =
        keys.iter().map(|k| extension_to_mime(k)).collect();

    let mut handles = Vec::new();
    for _ in 0..64 {
        let keys = keys.clone();
        handles.push(tokio::spawn(async move {
            keys.iter()
                .map(|k| extension_to_mime(k))
                .collect::<Vec<_>>()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), sequential);
    }
}

#[test]
fn test_custom_registry_is_independent() {
    let custom = Registry::builder()
        .extension("wasm", "application/wasm")
        .mime_type("application/wasm", "wasm")
        .build()
        .unwrap();

    assert_eq!(custom.extension_to_mime("WASM"), Some("application/wasm"));
    assert_eq!(custom.mime_to_extension("application/wasm"), Some("wasm"));
    assert_eq!(custom.extension_to_mime("html"), None);

    // The built-in registry never changes.
    assert_eq!(extension_to_mime("wasm"), None);
}

#[test]
fn test_entry_accessors() {
    let entry = Entry::new("md".to_string(), "text/markdown");
    assert_eq!(entry.key(), "md");
    assert_eq!(entry.value(), "text/markdown");
}

#[cfg(feature = "std")]
#[test]
fn test_path_lookup() {
    use mime_registry::extension_to_mime_for_path;
    use std::path::Path;

    assert_eq!(extension_to_mime_for_path("index.html"), Some("text/html"));
    assert_eq!(
        extension_to_mime_for_path(Path::new("/srv/www/Report.PDF")),
        Some("application/pdf")
    );
    assert_eq!(
        extension_to_mime_for_path("release.tar.gz"),
        extension_to_mime("gz")
    );
    assert_eq!(extension_to_mime_for_path("LICENSE"), None);
}

#[test]
fn test_content_type_header() {
    use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
    use mime_registry::header::{content_type, extension_from_headers};

    let registry = Registry::builtin();
    assert_eq!(content_type(registry, "svg").unwrap(), "image/svg-xml");
    assert!(content_type(registry, "unknown").is_none());

    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    assert_eq!(extension_from_headers(registry, &headers), Some("txt"));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_registry() {
    let custom = Registry::builder()
        .extension("htm", "text/html")
        .mime_type("text/html", "html")
        .build()
        .unwrap();

    let json = serde_json::to_value(&custom).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "extensions": [{ "key": "htm", "value": "text/html" }],
            "mime_types": [{ "key": "text/html", "value": "html" }],
        })
    );
}
