//! Bidirectional accessors for the cases of sum types.
//!
//! A [`CasePath`] pairs the two directions a case can be used in: `embed`
//! wraps a payload up into its enum, `extract` attempts to get it back out
//! and yields `None` when a different case is present. Deriving
//! [`Casewise`] generates one accessor per case, named after the case:
//!
//! ```
//! use casewise::Casewise;
//! use casewise_derive::Casewise;
//!
//! #[derive(Casewise, Debug, PartialEq)]
//! enum Outcome {
//!     Ok(i64),
//!     Err(String),
//! }
//!
//! let ok = Outcome::cases().ok();
//! assert_eq!(ok.embed(113), Outcome::Ok(113));
//! assert_eq!(ok.extract(Outcome::Ok(113)), Some(113));
//! assert_eq!(ok.extract(Outcome::Err("boom".into())), None);
//! ```
//!
//! Accessors into nested enums chain with [`CasePath::append`]. The
//! [`case!`] macro builds a one-off accessor without a derive, and the
//! crate root carries stock accessors ([`identity`], [`some`],
//! [`raw_value`], ...) for types that are not enums of their own.

mod canonical;
mod cases;
mod macros;
mod path;

pub use canonical::{boxed, constant, description, err, identity, never, none, ok, raw_value, some};
pub use cases::Casewise;
pub use path::{compose_extract, CasePath};
