//! Terminal rendering of the results view.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_frame → ANSI frame → stdout
//! ```
//!
//! - [`adapter`]: Binds a group's entries to display rows
//! - [`viewmodel`]: Display-ready state
//! - [`renderer`]: Layout dispatch and frame output
//! - [`components`]: Header, table, empty state and footer
//! - [`helpers`]: Cursor positioning, padding and match highlighting
//! - [`theme`]: Color schemes and ANSI escapes

pub mod adapter;
pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use adapter::EntryListAdapter;
pub use renderer::{render, render_frame};
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
