//! End-to-end generation against temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use bloom::{build, build_template, BuildConfig, BuildError, BuildTemplateConfig};
use bloom_render::{ExtractOptions, FormatConfig, Notation, Variant};
use tempfile::TempDir;

fn create_file(dir: &Path, relative_path: &str, content: &str) -> PathBuf {
    let full_path = dir.join(relative_path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&full_path, content).unwrap();
    full_path
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_build_single_file() {
    let temp = TempDir::new().unwrap();
    let template = create_file(temp.path(), "template.toml", "name = \"$name\"\nbg = \"$base\"\n");
    let out = temp.path().join("dist");

    let report = build(&BuildConfig::new(&template).with_output(&out)).unwrap();

    assert_eq!(report.written.len(), 3);
    assert_eq!(
        read(out.join("rose-pine.toml")),
        "name = \"Rosé Pine\"\nbg = \"#191724\"\n"
    );
    assert_eq!(
        read(out.join("rose-pine-moon.toml")),
        "name = \"Rosé Pine Moon\"\nbg = \"#232136\"\n"
    );
    assert_eq!(
        read(out.join("rose-pine-dawn.toml")),
        "name = \"Rosé Pine Dawn\"\nbg = \"#faf4ed\"\n"
    );
}

#[test]
fn test_build_with_accent_tokens() {
    let temp = TempDir::new().unwrap();
    let template = create_file(temp.path(), "template.conf", "accent=$accent ($accentname)\n");
    let out = temp.path().join("dist");

    let report = build(&BuildConfig::new(&template).with_output(&out)).unwrap();

    assert_eq!(report.written.len(), 18);
    assert_eq!(
        read(out.join("rose-pine").join("rose-pine-love.conf")),
        "accent=#eb6f92 (love)\n"
    );
    assert_eq!(
        read(out.join("rose-pine-dawn").join("rose-pine-dawn-pine.conf")),
        "accent=#286983 (pine)\n"
    );
    assert!(!out.join("rose-pine.conf").exists());
}

#[test]
fn test_build_forced_accents() {
    let temp = TempDir::new().unwrap();
    let template = create_file(temp.path(), "template.txt", "$base");
    let out = temp.path().join("dist");

    let config = BuildConfig::new(&template)
        .with_output(&out)
        .with_accents(true);
    let report = build(&config).unwrap();

    assert_eq!(report.written.len(), 18);
    assert_eq!(read(out.join("rose-pine-moon/rose-pine-moon-foam.txt")), "#232136");
}

#[test]
fn test_build_directory_mirrors_layout() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    create_file(&templates, "colors.conf", "bg $base");
    create_file(&templates, "nested/ui.conf", "fg $text");
    let out = temp.path().join("dist");

    let report = build(&BuildConfig::new(&templates).with_output(&out)).unwrap();

    assert_eq!(report.written.len(), 6);
    assert_eq!(read(out.join("rose-pine-dawn/colors.conf")), "bg #faf4ed");
    assert_eq!(read(out.join("rose-pine-dawn/nested/ui.conf")), "fg #575279");
}

#[test]
fn test_build_directory_with_accents() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    create_file(&templates, "a.conf", "$accentname");
    let out = temp.path().join("dist");

    build(&BuildConfig::new(&templates).with_output(&out)).unwrap();

    assert_eq!(read(out.join("iris/rose-pine-moon/a.conf")), "iris");
}

#[test]
fn test_build_pretty_prints_json() {
    let temp = TempDir::new().unwrap();
    let template = create_file(
        temp.path(),
        "template.json",
        r#"{"name":"$name","colors":{"bg":"$base","sel":"$highlightMed/50"}}"#,
    );
    let out = temp.path().join("dist");

    build(&BuildConfig::new(&template).with_output(&out)).unwrap();

    assert_eq!(
        read(out.join("rose-pine.json")),
        "{\n  \"name\": \"Rosé Pine\",\n  \"colors\": {\n    \"bg\": \"#191724\",\n    \"sel\": \"#403d5280\"\n  }\n}"
    );
}

#[test]
fn test_build_invalid_json_names_template() {
    let temp = TempDir::new().unwrap();
    let template = create_file(temp.path(), "template.json", "{\"bg\": $base}");
    let out = temp.path().join("dist");

    let err = build(&BuildConfig::new(&template).with_output(&out)).unwrap_err();
    match err {
        BuildError::Json { template: path, .. } => assert_eq!(path, template),
        other => panic!("expected JSON error, got {other}"),
    }
}

#[test]
fn test_build_missing_template() {
    let temp = TempDir::new().unwrap();
    let err = build(
        &BuildConfig::new(temp.path().join("missing.toml")).with_output(temp.path().join("dist")),
    )
    .unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
}

#[test]
fn test_build_custom_format_and_prefix() {
    let temp = TempDir::new().unwrap();
    let template = create_file(temp.path(), "template.lua", "bg = { @base }");
    let out = temp.path().join("dist");

    let config = BuildConfig::new(&template)
        .with_output(&out)
        .with_prefix("@")
        .with_format(FormatConfig::new(Notation::RgbArray).plain(true));
    build(&config).unwrap();

    assert_eq!(read(out.join("rose-pine.lua")), "bg = { 25, 23, 36 }");
}

#[test]
fn test_build_template_round_trip() {
    let temp = TempDir::new().unwrap();
    let theme = create_file(
        temp.path(),
        "rose-pine-moon.yaml",
        "name: Rosé Pine Moon\nbackground: '#232136'\nforeground: '#e0def4'\n",
    );
    let out = temp.path().join("dist");

    let config = BuildTemplateConfig::new(&theme)
        .with_output(&out)
        .with_variant(Variant::Moon);
    let results = build_template(&config).unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].matched);
    assert_eq!(results[0].replacements, 3);
    assert_eq!(results[0].output, out.join("template.yaml"));

    let template = read(out.join("template.yaml"));
    assert_eq!(template, "name: $name\nbackground: '$base'\nforeground: '$text'\n");

    // Rendering the extracted template for the same variant restores the input.
    let rebuilt = temp.path().join("rebuilt");
    build(&BuildConfig::new(out.join("template.yaml")).with_output(&rebuilt)).unwrap();
    assert_eq!(read(rebuilt.join("rose-pine-moon.yaml")), read(&theme));
}

#[test]
fn test_build_template_no_match_still_writes() {
    let temp = TempDir::new().unwrap();
    let theme = create_file(temp.path(), "theme.ini", "bg=25 23 36\n");
    let out = temp.path().join("dist");

    let results = build_template(&BuildTemplateConfig::new(&theme).with_output(&out)).unwrap();

    assert!(!results[0].matched);
    assert_eq!(read(out.join("template.ini")), "bg=25 23 36\n");
}

#[test]
fn test_build_template_appearance_option() {
    let temp = TempDir::new().unwrap();
    let theme = create_file(temp.path(), "theme.txt", "light #faf4ed");
    let out = temp.path().join("dist");

    let config = BuildTemplateConfig::new(&theme)
        .with_output(&out)
        .with_variant(Variant::Dawn)
        .with_prefix("%")
        .with_extract(ExtractOptions {
            include_appearance: true,
        });
    build_template(&config).unwrap();

    assert_eq!(read(out.join("template.txt")), "%appearance %base");
}
