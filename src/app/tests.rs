use super::*;
use crate::test_support::{ENV_LOCK, EnvOverride, toml_path};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::io::Cursor;

fn flags(name: &str, greeting: &str) -> Settings {
    Settings {
        name: name.into(),
        greeting: greeting.into(),
        ..Settings::default()
    }
}

fn run_app(settings: Settings, stdin: &str) -> (Result<(), MotdError>, String) {
    let app = App::new(settings);
    let mut input = Cursor::new(stdin.to_string());
    let mut out = Vec::new();
    let result = app.run(&mut input, &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn preview_prints_message_with_newline() {
    let settings = Settings {
        preview: true,
        ..flags("Alice", "Hello")
    };
    let (result, stdout) = run_app(settings, "");
    assert!(result.is_ok());
    assert_eq!(stdout, "Hello, Alice\n");
}

#[test]
fn prompt_preview_prints_labels_then_message() {
    let settings = Settings {
        prompt: true,
        preview: true,
        ..Settings::default()
    };
    let (result, stdout) = run_app(settings, "Good morning\nBob\n");
    assert!(result.is_ok());
    assert_eq!(stdout, "Your Greeting: Your Name: Good morning, Bob\n");
}

#[test]
fn missing_name_fails_before_any_output() -> color_eyre::Result<()> {
    let temp = TempDir::new()?;
    let target = temp.child("motd");
    target.write_str("unchanged")?;
    let settings = Settings {
        target: target.path().to_path_buf(),
        ..flags("", "Hello")
    };

    let (result, stdout) = run_app(settings, "");

    assert!(matches!(result, Err(MotdError::MissingInput)));
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(target.path())?, "unchanged");
    Ok(())
}

#[test]
fn debug_report_skips_the_sink() -> color_eyre::Result<()> {
    let temp = TempDir::new()?;
    let target = temp.child("motd");
    target.write_str("unchanged")?;
    let settings = Settings {
        debug: true,
        target: target.path().to_path_buf(),
        ..flags("Alice", "Hi")
    };

    let (result, stdout) = run_app(settings, "");

    assert!(result.is_ok());
    insta::assert_snapshot!(stdout, @r"
    Name: Alice
    Greeting: Hi
    Prompt: false
    Preview: false
    ");
    assert_eq!(fs::read_to_string(target.path())?, "unchanged");
    Ok(())
}

#[test]
fn debug_report_runs_after_prompt() {
    let settings = Settings {
        debug: true,
        prompt: true,
        ..Settings::default()
    };
    let (result, stdout) = run_app(settings, " Hey \n Carol \n");
    assert!(result.is_ok());
    assert_eq!(
        stdout,
        "Your Greeting: Your Name: Name: Carol\nGreeting: Hey\nPrompt: true\nPreview: false\n"
    );
}

#[test]
fn debug_still_requires_flag_inputs() {
    let settings = Settings {
        debug: true,
        ..Settings::default()
    };
    let (result, stdout) = run_app(settings, "");
    assert!(matches!(result, Err(MotdError::MissingInput)));
    assert!(stdout.is_empty());
}

#[test]
fn persist_writes_target_without_stdout() -> color_eyre::Result<()> {
    let temp = TempDir::new()?;
    let target = temp.child("motd");
    target.touch()?;
    let settings = Settings {
        target: target.path().to_path_buf(),
        ..flags("Alice", "Hello")
    };

    let (result, stdout) = run_app(settings, "");

    assert!(result.is_ok());
    assert!(stdout.is_empty());
    assert_eq!(fs::read_to_string(target.path())?, "Hello, Alice");
    Ok(())
}

#[test]
fn missing_target_reports_open_error() -> color_eyre::Result<()> {
    let temp = TempDir::new()?;
    let target = temp.path().join("nope").join("motd");
    let settings = Settings {
        target: target.clone(),
        ..flags("Alice", "Hello")
    };

    let (result, stdout) = run_app(settings, "");

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), format!("Unable to open {}", target.display()));
    assert!(stdout.is_empty());
    Ok(())
}

#[test]
fn bootstrap_merges_config_file() -> color_eyre::Result<()> {
    let _guard = ENV_LOCK.lock().unwrap();
    let _name = EnvOverride::remove("MOTD_NAME");
    let _greeting = EnvOverride::remove("MOTD_GREETING");
    let _preview = EnvOverride::remove("MOTD_PREVIEW");
    let _target = EnvOverride::remove("MOTD_TARGET");
    let _debug = EnvOverride::remove("DEBUG");

    let temp = TempDir::new()?;
    let target = temp.child("banner");
    let config = temp.child("motd.toml");
    config.write_str(&format!(
        "name = \"Config\"\ngreeting = \"Howdy\"\ntarget = \"{}\"\n",
        toml_path(target.path())
    ))?;

    let cli = Cli {
        greeting: Some("Hello".into()),
        config: Some(config.path().to_path_buf()),
        ..Cli::default()
    };
    let app = App::bootstrap(&cli)?;

    assert_eq!(app.settings.name, "Config");
    assert_eq!(app.settings.greeting, "Hello");
    assert_eq!(app.settings.target, target.path());
    assert!(!app.settings.debug);
    Ok(())
}

#[test]
fn bootstrap_surfaces_config_errors() -> color_eyre::Result<()> {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp = TempDir::new()?;
    let config = temp.child("motd.toml");
    config.write_str("name = [")?;

    let cli = Cli {
        config: Some(config.path().to_path_buf()),
        ..Cli::default()
    };
    let Err(err) = App::bootstrap(&cli) else {
        panic!("malformed config should fail");
    };
    assert!(err.to_string().contains("failed to parse"));
    Ok(())
}
