use super::*;

const SAMPLE_INI: &str = "\
# rules for importing playlists from the living-room box
[DEFAULT]
base_content_directory = /media/games
core_directory = /media/cores/
core_extension = dll
output_filename_prefix = imported_
output_filename_append = .lpl
output_directory =
overwrite_existing_playlist = yes
validate_rom_path = off

[Nintendo - Game Boy]
content_directory = gb

[Sega - Mega Drive - Genesis]
Content_Directory: md
";

#[test]
fn test_ini_globals() {
    let config = Config::from_ini_str(SAMPLE_INI).unwrap();
    assert_eq!(config.base_content_directory, "/media/games");
    assert_eq!(config.core_directory, "/media/cores");
    assert_eq!(config.core_extension, ".dll");
    assert_eq!(config.output_filename_prefix, "imported_");
    assert_eq!(config.output_filename_append, ".lpl");
    assert_eq!(config.output_directory, "");
    assert!(config.overwrite_existing_playlist);
    assert!(!config.validate_rom_path);
}

#[test]
fn test_ini_sections() {
    let config = Config::from_ini_str(SAMPLE_INI).unwrap();
    let names: Vec<&str> = config.database_names().collect();
    assert_eq!(names, vec!["Nintendo - Game Boy", "Sega - Mega Drive - Genesis"]);
    assert_eq!(
        config.database("Nintendo - Game Boy").unwrap().content_directory(),
        Some("gb")
    );
    // Keys are case-insensitive, ':' is accepted as a delimiter.
    assert_eq!(
        config.database("Sega - Mega Drive - Genesis").unwrap().content_directory(),
        Some("md")
    );
    assert!(config.database("DEFAULT").is_none());
    assert!(config.database("nintendo - game boy").is_none());
}

#[test]
fn test_section_inherits_default_content_directory() {
    let ini = "\
[DEFAULT]
base_content_directory = /media/games
core_directory = /media/cores
core_extension = .so
content_directory = misc

[Atari - 2600]
";
    let config = Config::from_ini_str(ini).unwrap();
    assert_eq!(config.core_extension, ".so");
    assert_eq!(
        config.database("Atari - 2600").unwrap().content_directory(),
        Some("misc")
    );
}

#[test]
fn test_optional_globals_default_to_empty() {
    let ini = "\
[DEFAULT]
base_content_directory = /g
core_directory = /c
core_extension = so
";
    let config = Config::from_ini_str(ini).unwrap();
    assert_eq!(config.output_filename_prefix, "");
    assert_eq!(config.output_filename_append, "");
    assert!(!config.overwrite_existing_playlist);
    assert!(!config.validate_rom_path);
    assert_eq!(config.database_names().count(), 0);
}

#[test]
fn test_missing_required_global() {
    let ini = "\
[DEFAULT]
base_content_directory = /g
core_extension = so
";
    match Config::from_ini_str(ini) {
        Err(ConfigError::MissingRequiredField { section, key }) => {
            assert_eq!(section, "DEFAULT");
            assert_eq!(key, "core_directory");
        }
        other => panic!("expected MissingRequiredField, got {:?}", other),
    }
}

#[test]
fn test_invalid_boolean() {
    let ini = "\
[DEFAULT]
base_content_directory = /g
core_directory = /c
core_extension = so
validate_rom_path = maybe
";
    assert!(matches!(
        Config::from_ini_str(ini),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_invalid_core_extension() {
    let ini = "\
[DEFAULT]
base_content_directory = /g
core_directory = /c
core_extension = .
";
    assert!(matches!(
        Config::from_ini_str(ini),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_ini_syntax_errors_report_line() {
    match Config::from_ini_str("base_content_directory = /g\n") {
        Err(ConfigError::Parse { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected parse error, got {:?}", other),
    }

    match Config::from_ini_str("[DEFAULT]\n\njust some words\n") {
        Err(ConfigError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {:?}", other),
    }

    assert!(matches!(
        Config::from_ini_str("[A]\nx = 1\n[A]\n"),
        Err(ConfigError::Parse { line: 3, .. })
    ));
}

#[test]
fn test_ini_text_after_section_header_is_ignored() {
    let ini = "\
[DEFAULT] ; globals
base_content_directory = /g
core_directory = /c
core_extension = so

[Nintendo - Game Boy] ; handhelds
content_directory = gb
";
    let config = Config::from_ini_str(ini).unwrap();
    assert_eq!(config.core_extension, ".so");
    assert_eq!(
        config.database("Nintendo - Game Boy").unwrap().content_directory(),
        Some("gb")
    );
}

#[test]
fn test_ini_continuation_lines() {
    let ini = "\
[DEFAULT]
base_content_directory = /g
core_directory = /c
core_extension = so
output_filename_prefix = a
  b
";
    let config = Config::from_ini_str(ini).unwrap();
    assert_eq!(config.output_filename_prefix, "a\nb");
}

#[test]
fn test_toml_config() {
    let toml = r#"
[DEFAULT]
base_content_directory = 'D:\Games'
core_directory = "/media/cores"
core_extension = "so"
overwrite_existing_playlist = true

["Nintendo - Game Boy"]
content_directory = "gb"
"#;
    let config = Config::from_toml_str(toml).unwrap();
    assert_eq!(config.base_content_directory, "D:/Games");
    assert_eq!(config.core_extension, ".so");
    assert!(config.overwrite_existing_playlist);
    assert_eq!(
        config.database("Nintendo - Game Boy").unwrap().content_directory(),
        Some("gb")
    );
}

#[test]
fn test_toml_top_level_keys_are_globals() {
    let toml = r#"
base_content_directory = "/g"
core_directory = "/c"
core_extension = "dylib"
validate_rom_path = "yes"
"#;
    let config = Config::from_toml_str(toml).unwrap();
    assert_eq!(config.core_extension, ".dylib");
    assert!(config.validate_rom_path);
}

#[test]
fn test_toml_rejects_arrays() {
    let toml = r#"
base_content_directory = ["/g"]
"#;
    assert!(matches!(
        Config::from_toml_str(toml),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_format_from_path() {
    assert_eq!(ConfigFormat::from_path(Path::new("default.ini")), ConfigFormat::Ini);
    assert_eq!(ConfigFormat::from_path(Path::new("rules.TOML")), ConfigFormat::Toml);
    assert_eq!(ConfigFormat::from_path(Path::new("rules")), ConfigFormat::Ini);
}

#[test]
fn test_load_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ini");
    std::fs::write(&path, "[DEFAULT]\nnonsense\n").unwrap();

    match Config::load(&path) {
        Err(ImportError::Config { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected config error, got {:?}", other),
    }

    assert!(matches!(
        Config::load(&dir.path().join("missing.ini")),
        Err(ImportError::ReadFailure { .. })
    ));
}
