//! Dialect bridge between a notes vault's markdown and a rich-text editor's markdown
//!
//!     The vault (the "host") stores notes as markdown with tab indentation and `[[Target]]` /
//!     `[[Target|alias]]` links. The rich-text editor (the "rich" side) speaks standard markdown: space
//!     indentation, `[label](url)` links, and it drops whitespace it considers insignificant. This
//!     crate converts whole documents between the two so that opening a note in the editor and
//!     writing it back leaves the vault file unchanged.
//!
//!     This is a pure lib: no I/O besides the optional filesystem link resolver, no printing, no
//!     env vars. The CLI lives in mdbridge-cli.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs
//!     ├── rules.rs                # TranscodeRules, the knobs of a conversion
//!     ├── transcoder.rs           # Orchestrates the passes in each direction
//!     ├── dialect.rs              # Dialect trait definition
//!     ├── registry.rs             # DialectRegistry for discovery and selection
//!     ├── dialects
//!     │   ├── host.rs
//!     │   └── rich.rs
//!     ├── common                  # The passes
//!     │   ├── entities.rs         # Whitespace entity codec
//!     │   ├── indent.rs           # Tabs <-> spaces on leading whitespace
//!     │   ├── blocks.rs           # Line to block joining (host->rich only)
//!     │   ├── links.rs            # [[bracket]] <-> [standard](links)
//!     │   ├── percent.rs          # Link target percent-encoding
//!     │   └── resolve.rs          # Link classification and resolution
//!     └── tags                    # #tag recognizer for the editor
//!
//! Round Tripping
//!
//!     The contract is `to_host(to_rich(s)) == s` for vault documents. The editor collapses
//!     whitespace, so everything it would lose is encoded as HTML entities on the way in and decoded
//!     on the way out. Each host line becomes its own block on the rich side, except runs of list
//!     items and table rows, which stay tight so the editor does not fragment them.
//!
//!     External links (`http://`, `https://`) are never rewritten in either direction.
//!
//! Tags
//!
//!     The recognizer in [`tags`] turns `#tag` into a `[#tag](tag:tag)` link when space is typed
//!     after it. It works over [`tags::EditSurface`], a small in-memory model of the editor's
//!     document; the matching itself is a pure function ([`tags::plan_tag_edit`]).
pub mod common;
pub mod dialect;
pub mod dialects;
pub mod error;
pub mod registry;
pub mod rules;
pub mod tags;
pub mod transcoder;

pub use dialect::Dialect;
pub use error::TranscodeError;
pub use registry::DialectRegistry;
pub use rules::TranscodeRules;
pub use tags::{handle_key, EditSurface, TagRecognizer, TriggerOutcome};
pub use transcoder::{to_host, to_rich, Transcoder};
