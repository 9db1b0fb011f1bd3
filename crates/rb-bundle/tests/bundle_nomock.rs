//! No-mock integration tests for resource bundle archives and documents.
//!
//! Exercises real archive creation and import end to end:
//! - Archive and document round-trips keep texts and the default pair
//! - Fallback ordering across exact, language-only and default bundles
//! - Malformed and duplicate entries abort the import
//! - Default identity survives the JSON document form

use rb_bundle::{ArchiveReader, Bundle, Error, ResourceBundle};
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

// ============================================================================
// Helpers
// ============================================================================

/// Container from the greeting scenario: en_US default, en_GB target.
fn build_greetings() -> ResourceBundle {
    let mut rb = ResourceBundle::empty("en", "GB");
    rb.add_bundle(
        Bundle::from_text("en", "US", b"greeting=Hi\n").expect("en_US"),
        true,
    )
    .expect("add en_US");
    rb.add_bundle(
        Bundle::from_text("en", "GB", b"greeting=Hello\nfarewell=Bye\n").expect("en_GB"),
        false,
    )
    .expect("add en_GB");
    rb
}

/// A larger container spanning several languages.
fn build_multilingual() -> ResourceBundle {
    let mut rb = ResourceBundle::empty("pt", "BR");
    let sources: [(&str, &str, &[u8], bool); 5] = [
        ("en", "US", b"title=Settings\nsave=Save\ncancel=Cancel\n", true),
        ("pt", "BR", b"title=Configura\xc3\xa7\xc3\xb5es\nsave=Salvar\n", false),
        ("pt", "PT", b"title=Defini\xc3\xa7\xc3\xb5es\n", false),
        ("de", "DE", b"title=Einstellungen\nurl=https://example.com/?a=b\n", false),
        ("ja", "JA", b"", false),
    ];
    for (language, locale, text, is_default) in sources {
        let bundle = Bundle::from_text(language, locale, text).expect("decode");
        rb.add_bundle(bundle, is_default).expect("add bundle");
    }
    rb
}

fn triples(rb: &ResourceBundle) -> BTreeSet<(String, String, Vec<(String, String)>)> {
    rb.bundles()
        .iter()
        .map(|b| {
            (
                b.language_code.clone(),
                b.locale_code.clone(),
                b.text_map
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            )
        })
        .collect()
}

fn raw_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> = FileOptions::default();
    for (name, data) in entries {
        zip.start_file(*name, options).expect("start entry");
        zip.write_all(data).expect("write entry");
    }
    zip.finish().expect("finish zip").into_inner()
}

// ============================================================================
// Archive Round-Trip Tests
// ============================================================================

#[test]
fn test_archive_roundtrip_preserves_bundles_and_default() {
    let original = build_multilingual();
    let bytes = original.to_archive().expect("export");

    let restored = ResourceBundle::from_archive("pt", "BR", &bytes).expect("import");

    assert_eq!(triples(&restored), triples(&original));
    let default = restored.default_bundle().expect("default bound");
    assert_eq!(
        (default.language_code.as_str(), default.locale_code.as_str()),
        ("en", "US")
    );
    assert!(restored.default_is_shared());
    assert_eq!(restored.get("save"), "Salvar");
    assert_eq!(restored.get("cancel"), "Cancel");
}

#[test]
fn test_archive_roundtrip_on_disk() {
    let temp_dir = TempDir::new().expect("tempdir");
    let path = temp_dir.path().join("ui.zip");

    build_greetings().write_archive(&path).expect("write");
    let restored = ResourceBundle::open_archive("fr", "FR", &path).expect("open");

    assert_eq!(restored.get("greeting"), "Hi");
    assert_eq!(restored.get("unknown"), "");
}

#[test]
fn test_archive_values_with_separator_survive() {
    let bytes = build_multilingual().to_archive().expect("export");
    let restored = ResourceBundle::from_archive("de", "DE", &bytes).expect("import");

    assert_eq!(restored.get("url"), "https://example.com/?a=b");
}

#[test]
fn test_archive_entry_count_matches_bundles() {
    let rb = build_multilingual();
    let bytes = rb.to_archive().expect("export");
    let reader = ArchiveReader::from_bytes(bytes).expect("open");

    assert_eq!(reader.len(), rb.len() + 1);
    assert!(reader.entry_names().all(|n| n.ends_with(".properties")));
}

// ============================================================================
// Lookup Scenario Tests
// ============================================================================

#[test]
fn test_greeting_scenario() {
    let mut rb = build_greetings();

    assert_eq!(rb.get("greeting"), "Hello");
    assert_eq!(rb.get("farewell"), "Bye");

    rb.set_target("fr", "FR");
    assert_eq!(rb.get("greeting"), "Hi");
    assert_eq!(rb.get("unknown"), "");
}

#[test]
fn test_fallback_ordering_language_only() {
    let mut rb = build_multilingual();
    rb.set_target("pt", "AO");

    // No pt_AO: the first pt bundle answers, then the default fills gaps.
    assert_eq!(rb.get("title"), "Configurações");
    assert_eq!(rb.get("cancel"), "Cancel");
    assert_eq!(rb.get("missing"), "");
}

#[test]
fn test_fallback_empty_bundle_uses_default() {
    let rb = build_multilingual().with_target("ja", "JA");
    assert_eq!(rb.get("title"), "Settings");
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_malformed_entry_name_aborts_import() {
    let bytes = raw_archive(&[
        ("meta.properties", b"defaultLang=en\ndefaultLocal=US"),
        ("en_US.properties", b"greeting=Hi\n"),
        ("broken", b"greeting=?\n"),
    ]);

    let err = ResourceBundle::from_archive("en", "US", &bytes).expect_err("must fail");
    assert!(err.is_format_error(), "unexpected error: {err}");
    assert!(err.to_string().contains("broken"));
}

#[test]
fn test_entry_without_language_separator_aborts_import() {
    let bytes = raw_archive(&[("english.properties", b"greeting=Hi\n")]);

    let err = ResourceBundle::from_archive("en", "US", &bytes).expect_err("must fail");
    assert!(matches!(err, Error::MalformedEntryName(_)));
}

#[test]
fn test_duplicate_entries_abort_import() {
    let bytes = raw_archive(&[
        ("en_US.properties", b"greeting=Hi\n"),
        ("en_US.bak", b"greeting=Old\n"),
    ]);

    let err = ResourceBundle::from_archive("en", "US", &bytes).expect_err("must fail");
    assert!(matches!(
        err,
        Error::DuplicateBundle { ref language, ref locale } if language == "en" && locale == "US"
    ));
}

#[test]
fn test_directory_entries_are_skipped() {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> = FileOptions::default();
    zip.add_directory("nested/", options).expect("dir");
    zip.start_file("meta.properties", options).expect("meta");
    zip.write_all(b"defaultLang=en\ndefaultLocal=US").expect("write");
    zip.start_file("en_US.properties", options).expect("entry");
    zip.write_all(b"greeting=Hi\n").expect("write");
    let bytes = zip.finish().expect("finish").into_inner();

    let rb = ResourceBundle::from_archive("en", "US", &bytes).expect("import");
    assert_eq!(rb.len(), 1);
    assert_eq!(rb.get("greeting"), "Hi");
}

#[test]
fn test_latin1_entry_does_not_abort_import() {
    let bytes = raw_archive(&[
        ("meta.properties", b"defaultLang=de\ndefaultLocal=DE"),
        ("de_DE.properties", b"city=M\xfcnchen\nok=1\n"),
    ]);

    let rb = ResourceBundle::from_archive("de", "DE", &bytes).expect("import");
    assert_eq!(rb.get("ok"), "1");
    assert!(rb.get("city").starts_with('M'));
    assert!(rb.get("city").ends_with("nchen"));
}

#[test]
fn test_export_refuses_pair_that_would_split_differently() {
    let mut rb = ResourceBundle::empty("zh", "TW");
    rb.add_bundle(
        Bundle::from_text("zh_Hant", "TW", b"title=Settings\n").expect("decode"),
        true,
    )
    .expect("add zh_Hant_TW");

    let err = rb.to_archive().expect_err("export must refuse");
    assert!(matches!(err, Error::UnencodableCodes { .. }));

    // The document form carries any codes.
    let restored = ResourceBundle::from_json(&rb.to_json().expect("json")).expect("load");
    assert_eq!(restored.bundles(), rb.bundles());
}

// ============================================================================
// Interchange Document Tests
// ============================================================================

#[test]
fn test_document_roundtrip_restores_default_identity() {
    let json = build_multilingual().to_json().expect("to json");
    let mut restored = ResourceBundle::from_json(&json).expect("from json");

    assert!(restored.default_is_shared());

    restored
        .texts_mut("en", "US")
        .expect("en_US present")
        .insert("help".into(), "Help".into());
    assert_eq!(
        restored.default_bundle().expect("default").get("help"),
        Some("Help")
    );
    assert_eq!(restored.with_target("xx", "XX").get("help"), "Help");
}

#[test]
fn test_document_and_archive_agree() {
    let rb = build_multilingual();

    let via_archive =
        ResourceBundle::from_archive("pt", "BR", &rb.to_archive().expect("archive")).expect("import");
    let via_document = ResourceBundle::from_json(&rb.to_json().expect("json")).expect("load");

    assert_eq!(via_archive, via_document);
}
