//! Command-line argument parsing and help for ffm.
//!
//! When invoked with no arguments, ffm browses the current directory.

use crate::config::Config;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ffm",
    version,
    about = "A small terminal file browser",
    after_help = "ENVIRONMENT:\n  FFM_CONFIG    Override the default config path\n  FFM_LOG       Log file to write diagnostics to"
)]
pub(crate) struct Cli {
    /// Directory to open
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Display the default key bindings
    #[arg(long = "keybinds", action = ArgAction::SetTrue)]
    keybinds: bool,

    /// Display all configuration options
    #[arg(long = "config-help", action = ArgAction::SetTrue)]
    config_help: bool,
}

pub(crate) enum CliAction {
    RunAppAtPath(PathBuf),
    Exit,
}

pub(crate) fn handle_args() -> CliAction {
    Cli::parse().into_action()
}

impl Cli {
    fn into_action(self) -> CliAction {
        if self.keybinds {
            print_keybinds();
            return CliAction::Exit;
        }
        if self.config_help {
            print_config_help();
            return CliAction::Exit;
        }
        CliAction::RunAppAtPath(self.path)
    }
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  go_up                     ["k", "Up"]
  go_down                   ["j", "Down"]
  go_parent                 ["h", "Left", "Backspace"]
  go_into_dir               ["l", "Right", "Enter"]
  sort_by_name              ["a"]
  sort_by_size              ["s"]
  quit                      ["q"]

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   " ", "space", "back", "enter", "esc", "tab"

  Note:
    - Shorthand (c-, m-, s-) only works inside brackets <>.
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}

fn print_config_help() {
    let help_text = r##"
ffm - Configuration Guide (ffm.toml)

=========================
 General Settings
=========================
[general]
  sort                       Initial sort mode, "name" or "size" [default: "name"]
  log_file                   Write diagnostics to this file [default: none]
  log_level                  "error", "warn", "info", "debug" or "trace" [default: "info"]

=========================
 Display Settings
=========================
[display]
  header                     Show the current path above the listing [default: true]
  borders                    Draw a border around the listing [default: true]
  border_shape               "square", "rounded", "double" or "thick"
  selection_marker           Show the selection icon before the cursor row [default: true]
  scroll_padding             Rows kept visible above/below the cursor [default: 2]

=========================
 Theme Configuration
=========================
[theme]
  selection_icon             Symbol for selection ("> " or " ")

Each sub-table supports fg/bg colors ("Red", "Blue", hex "#RRGGBB", or "default"):

[theme.entry]                Regular files (fg, bg)
[theme.directory]            Directory entries (fg, bg)
[theme.symlink]              Symlink entries (fg, bg)
[theme.broken]               Broken symlinks (fg, bg)
[theme.accent]               Borders (fg, bg)
[theme.selection]            Selection bar (fg, bg)
[theme.path]                 Path line at the top (fg, bg)
[theme.status_line]          Footer lines (fg, bg)
"##;

    println!(
        "{}\nConfig path: {}\n{}",
        help_text,
        Config::default_path().display(),
        KEYBINDS_TEXT
    );
}
