//! Directive syntax and rendering.
//!
//! A directive starts with `///name` anywhere in a line, is followed by
//! optional `:key value` parameter lines, and has a body that is either the
//! next line or every line up to a matching `\\\name` terminator:
//!
//! ```text
//! ///sidebar
//! :title Why Rails?
//! Rails favors convention over configuration.
//! It ships with sane defaults.
//! \\\sidebar
//! ```
//!
//! The body is multi-line only when the first boundary line after the
//! parameters is the matching terminator. A new start line or a different
//! terminator leaves the body at one line.
//!
//! # Variants
//!
//! - **Boxed notes**: `sidebar`, `letter`, and the interpolations (`trust`,
//!   `author`, `deprecation`, `protip`, `kansas`, `zen`, `inthis`) wrap
//!   each body line in its own block.
//! - **Definition**: `definition` with a required `:term`.
//! - **Fenced blocks**: `coffeescript-sidebar` (or `cssidebar`) and `table`
//!   keep the body intact.
//! - **Code**: `code`, see [`crate::code`].
//!
//! Unknown names pass through unchanged.

mod fenced;
mod invocation;
mod kind;
mod note;
mod params;

pub use invocation::DirectiveInvocation;
pub use kind::{DIRECTIVES, DirectiveKind, Interpolation};
pub use params::Parameters;

pub(crate) use fenced::{render_coffeescript_sidebar, render_table};
pub(crate) use invocation::collect_invocation;
pub(crate) use note::{render_definition, render_interpolation, render_letter, render_sidebar};
