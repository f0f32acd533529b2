//! Integration tests for dbshift-core
//!
//! These tests drive the public API end-to-end: presets on disk, option sets
//! built from them and selection sessions on a scripted terminal.

use std::collections::VecDeque;
use std::fs;
use std::io::Write;

use dbshift_core::endpoints::Endpoints;
use dbshift_core::error::{Error, Result};
use dbshift_core::presets::PresetStore;
use dbshift_core::select::{self, OptionSet, Outcome, RawFrame, SelectOption, Terminal};
use tempfile::{NamedTempFile, TempDir};

const DOWN: RawFrame = [0x1B, 0x5B, 0x42];
const ENTER: RawFrame = [0x0D, 0x00, 0x00];
const CTRL_C: RawFrame = [0x03, 0x00, 0x00];

/// Terminal that replays frames and records output.
struct ScriptedTerminal {
    frames: VecDeque<RawFrame>,
    output: Vec<u8>,
    restores: usize,
}

impl ScriptedTerminal {
    fn new(frames: &[RawFrame]) -> Self {
        Self {
            frames: frames.iter().copied().collect(),
            output: Vec::new(),
            restores: 0,
        }
    }
}

impl Terminal for ScriptedTerminal {
    fn enter_raw_mode(&mut self) -> Result<()> {
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<()> {
        self.restores += 1;
        Ok(())
    }

    fn read_frame(&mut self) -> Result<RawFrame> {
        self.frames.pop_front().ok_or_else(|| {
            Error::InputRead(std::io::Error::from(std::io::ErrorKind::UnexpectedEof))
        })
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Choice {
    Existing(u64),
    CreateNew,
}

/// Test saving presets, reopening the file and picking one of them
#[test]
fn test_presets_to_selection_workflow() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("presets.yml");
    let path = path.to_str().unwrap().to_string();

    {
        let mut store = PresetStore::open(&path).unwrap();
        store
            .save("local", "mongodb://localhost:27017", "postgres://localhost/app")
            .unwrap();
        store
            .save("staging", "mongodb+srv://staging.example.com", "postgresql://staging/app")
            .unwrap();
    }

    let store = PresetStore::open(&path).unwrap();
    assert_eq!(store.list().len(), 2);
    assert_eq!(store.list()[1].name, "staging");

    let options = OptionSet::build(
        store
            .list()
            .iter()
            .map(|p| SelectOption::new(Choice::Existing(p.id), p.to_string()))
            .chain(std::iter::once(SelectOption::new(Choice::CreateNew, "Create new")))
            .collect(),
    )
    .unwrap();

    let mut terminal = ScriptedTerminal::new(&[DOWN, ENTER]);
    let outcome = select::run(&options, &mut terminal).unwrap();

    let Outcome::Selected(option) = outcome else {
        panic!("Expected a selection");
    };
    assert_eq!(option.value, Choice::Existing(2));
    assert_eq!(terminal.restores, 1);

    let preset = store.find(2).unwrap();
    let endpoints = Endpoints::from_preset(preset).unwrap();
    assert_eq!(endpoints.source_url, "mongodb+srv://staging.example.com");
    assert_eq!(endpoints.target_url, "postgresql://staging/app");
}

/// Test that the last option can be reached and that output rows are numbered
#[test]
fn test_select_create_new_entry() {
    let options = OptionSet::build(vec![
        SelectOption::new(Choice::Existing(5), "five"),
        SelectOption::new(Choice::CreateNew, "Create new"),
    ])
    .unwrap();

    let mut terminal = ScriptedTerminal::new(&[DOWN, DOWN, ENTER]);
    let outcome = select::run(&options, &mut terminal).unwrap();

    assert_eq!(
        outcome,
        Outcome::Selected(SelectOption::new(Choice::CreateNew, "Create new"))
    );

    let output = String::from_utf8(terminal.output).unwrap();
    assert_eq!(
        output,
        "\x1b[2K\r> 1. five\n\x1b[2K\r  2. Create new\n\
         \x1b[2A\x1b[2K\r  1. five\n\x1b[2K\r> 2. Create new\n"
    );
}

/// Test cancelling a session
#[test]
fn test_cancelled_session() {
    let options = OptionSet::build(vec![SelectOption::new(1, "only")]).unwrap();
    let mut terminal = ScriptedTerminal::new(&[CTRL_C]);

    assert_eq!(select::run(&options, &mut terminal).unwrap(), Outcome::Cancelled);
    assert_eq!(terminal.restores, 1);
}

/// Test that presets files with hand-edited content are loaded
#[test]
fn test_load_handwritten_presets_file() {
    let yaml_content = r#"
- id: 3
  name: "legacy"
  source_url: "mongodb://old-host"
  target_url: "postgres://old-host/db"
  created_at: "2024-01-02T03:04:05Z"
  updated_at: "2024-02-03T04:05:06Z"
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let mut store = PresetStore::open(&temp_path).unwrap();
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.find(3).unwrap().name, "legacy");

    // New IDs continue after the highest stored one
    let saved = store.save("new", "mongodb://n", "postgres://n").unwrap();
    assert_eq!(saved.id, 4);

    let written = fs::read_to_string(&temp_path).unwrap();
    assert!(written.contains("legacy"));
    assert!(written.contains("name: new"));
}

/// Test malformed and blank presets files
#[test]
fn test_malformed_and_blank_presets_files() {
    let mut malformed = NamedTempFile::new().unwrap();
    write!(malformed, "this: is: not: a list").unwrap();
    let result = PresetStore::open(malformed.path().to_str().unwrap());
    assert!(matches!(result, Err(Error::Yaml { .. })));

    let mut blank = NamedTempFile::new().unwrap();
    write!(blank, "\n  \n").unwrap();
    let store = PresetStore::open(blank.path().to_str().unwrap()).unwrap();
    assert!(store.list().is_empty());
}

/// Test option validation errors surface before any session starts
#[test]
fn test_invalid_option_sets() {
    assert!(matches!(
        OptionSet::<i64>::build(vec![]),
        Err(Error::EmptyOptions)
    ));
    assert!(matches!(
        OptionSet::build(vec![SelectOption::new(1, "a"), SelectOption::new(1, "b")]),
        Err(Error::DuplicateOptionValue(_))
    ));

    let options =
        OptionSet::build(vec![SelectOption::new(1, "a"), SelectOption::new(2, "b")]).unwrap();
    let state = select::SelectionState::new(&options);
    assert_eq!(state.cursor_index(), 0);
}
