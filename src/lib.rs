//! English draughts (checkers) engine: the rules of the game, static
//! evaluation of positions and a minimax search that picks the computer moves.
//!
//! - [`checkers`] implements the board, moves and their generation.
//! - [`evaluation`] assigns static values to positions.
//! - [`search`] finds the best move of the side to move.
//! - [`Engine`] runs an interactive game between a human and the computer.

// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::private_doc_tests,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::bare_urls
)]

pub mod checkers;
pub mod evaluation;
pub mod search;

mod engine;
pub use engine::{Config, Engine};
use shadow_rs::shadow;

shadow!(build);

/// Build profile. Produced by `build.rs`.
const PROFILE: &str = include_str!(concat!(env!("OUT_DIR"), "/profile"));

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the engine version on engine startup.
pub fn print_engine_info() {
    println!("Checkers engine {}", engine_version());
}

/// Prints the build profile and whether the build is clean on engine startup.
pub fn print_binary_info() {
    println!("Profile: {PROFILE}");
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
}
