//! Extraction of `#[env("...")]` annotations from struct fields.
//!
//! Only the raw annotation text is captured here; the grammar inside the
//! string (variable name, skip marker, options) is parsed by the runtime
//! crate on every load call.

use syn::{Field, LitStr};

/// The `#[env(...)]` annotation of one struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw annotation text, e.g. `"DATABASE_URL,required"`.
    ///
    /// `None` when the field carries no `#[env]` attribute.
    pub annotation: Option<String>,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` attribute from a struct field.
    ///
    /// Attributes from other macros are ignored. A repeated `#[env]`
    /// attribute or a non-string-literal argument is an error.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if attrs.annotation.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[env] attribute",
                ));
            }

            let lit: LitStr = attr.parse_args().map_err(|_| {
                syn::Error::new_spanned(
                    attr,
                    "expected a string literal: #[env(\"NAME[,option]*\")]",
                )
            })?;
            attrs.annotation = Some(lit.value());
        }

        Ok(attrs)
    }
}
