//! Environment variable loading for plain config structs
//!
//! `envbind` fills the fields of an existing struct from process environment
//! variables. Each field carries an optional `#[env("NAME[,option]*")]`
//! annotation naming the variable to read; the loader walks the fields in
//! declaration order, coerces each value to the field's type, and writes it
//! in place. The first failure aborts the load.
//!
//! # Features
//!
//! - **Declarative**: automatic implementation with `#[derive(EnvBind)]`
//! - **Two modes**: strict loading reads only annotated fields, lazy loading
//!   reads every field, deriving variable names from field identifiers
//! - **In place**: the loader mutably borrows the caller's struct and keeps
//!   no state between calls
//! - **Required fields**: a `required` option turns an absent variable into
//!   an error
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("DATABASE_URL,required")]
//!     pub database_url: String,
//!
//!     #[env("MAX_CONNECTIONS")]
//!     pub max_connections: i64,
//!
//!     // No annotation: skipped by load_strict, read from DEBUG_MODE
//!     // by load_lazy
//!     pub debug_mode: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DATABASE_URL", "postgres://localhost/db");
//! #     std::env::set_var("MAX_CONNECTIONS", "10");
//! let mut config = Config::default();
//! config.load_strict()?;
//! #     assert_eq!(config.database_url, "postgres://localhost/db");
//! #     assert_eq!(config.max_connections, 10);
//! #     Ok(())
//! # }
//! ```
//!
//! # Annotation grammar
//!
//! `#[env("<NAME>[,<option>]*")]` where `<NAME>` is one of:
//!
//! - a variable name, used verbatim
//! - `-`, which excludes the field from loading in every mode
//! - empty, which behaves like a missing annotation (skip in strict mode,
//!   derived name in lazy mode) while still honoring the options
//!
//! The only recognized option is `required`; empty and `-` option tokens are
//! ignored. Any other token fails the load with [`EnvError::InvalidOption`].
//!
//! # Lazy loading
//!
//! [`EnvBind::load_lazy`] processes unannotated fields too, reading each one
//! from the upper-snake-case form of its identifier (see
//! [`to_upper_snake_case`]). Explicit annotations always win: a field
//! annotated `#[env("OPTION_DIFF")]` is read from `OPTION_DIFF` even when a
//! variable matching the derived name is set.
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     // Read from LISTEN_ADDR in lazy mode
//!     pub listen_addr: String,
//!
//!     // Never read
//!     #[env("-")]
//!     pub scratch: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("LISTEN_ADDR", "0.0.0.0:8080");
//! #     std::env::set_var("SCRATCH", "ignored");
//! let mut config = Config::default();
//! config.load_lazy()?;
//! #     assert_eq!(config.listen_addr, "0.0.0.0:8080");
//! #     assert_eq!(config.scratch, "");
//! #     Ok(())
//! # }
//! ```
//!
//! # Supported field types
//!
//! `String`, `bool`, `i64`, `f32`, and `f64`. Boolean variables use the
//! literal grammar `1`/`0`, `t`/`f`, `T`/`F`, `true`/`false`, `TRUE`/`FALSE`,
//! `True`/`False`. Loading a field of any other type fails with
//! [`EnvError::UnsupportedType`].
//!
//! An absent, non-required variable coerces the empty string: fine for
//! `String` fields, an error for the others. Mark numeric and boolean fields
//! `required` or make sure the variable is set.

mod binding;
mod case;
mod error;

#[doc(hidden)]
pub mod coerce;

pub use binding::Mode;
pub use case::to_upper_snake_case;
pub use error::EnvError;

pub use envbind_derive::EnvBind;

#[doc(hidden)]
pub use binding::{resolve_field, Binding};

/// Loading of struct fields from environment variables.
///
/// Implemented via `#[derive(EnvBind)]`; see the [crate docs](crate) for the
/// annotation grammar. All methods borrow the target mutably for the duration
/// of the call, write coerced values directly into its fields, and stop at
/// the first error, leaving already-written fields in place.
pub trait EnvBind {
    /// Process every field according to `mode`.
    fn load(&mut self, mode: Mode) -> Result<(), EnvError>;

    /// Load annotated fields only.
    fn load_strict(&mut self) -> Result<(), EnvError> {
        self.load(Mode::Strict)
    }

    /// Load every field not skip-marked, deriving variable names for
    /// unannotated fields.
    fn load_lazy(&mut self) -> Result<(), EnvError> {
        self.load(Mode::Lazy)
    }
}

/// Load annotated fields of `target` from the environment.
///
/// Free-function form of [`EnvBind::load_strict`].
pub fn load_strict<T: EnvBind>(target: &mut T) -> Result<(), EnvError> {
    target.load_strict()
}

/// Load every non-skipped field of `target` from the environment.
///
/// Free-function form of [`EnvBind::load_lazy`].
pub fn load_lazy<T: EnvBind>(target: &mut T) -> Result<(), EnvError> {
    target.load_lazy()
}
