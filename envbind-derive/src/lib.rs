//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, Data, DeriveInput, Fields, Type};

mod attrs;

use attrs::FieldAttrs;

/// Pick the runtime coercer for a declared field type.
///
/// Dispatch is on the final path segment, so plain `String`, `bool`, `i64`,
/// `f32`, and `f64` spellings are recognized. Anything else gets no coercer
/// and is reported as unsupported if a load ever processes the field.
fn coercer_path(ty: &Type) -> Option<proc_macro2::TokenStream> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let seg = type_path.path.segments.last()?;
    if !seg.arguments.is_none() {
        return None;
    }
    match seg.ident.to_string().as_str() {
        "String" => Some(quote!(::envbind::coerce::string)),
        "bool" => Some(quote!(::envbind::coerce::boolean)),
        "i64" => Some(quote!(::envbind::coerce::integer)),
        "f32" => Some(quote!(::envbind::coerce::float32)),
        "f64" => Some(quote!(::envbind::coerce::float64)),
        _ => None,
    }
}

/// `EnvBind` derive macro
///
/// Implements the `envbind::EnvBind` trait on structs with named fields,
/// producing one load statement per field in declaration order. Each
/// statement resolves the field's binding for the active mode, looks up the
/// environment, coerces the value, and assigns it to the field; the `?`
/// operator gives the fail-fast behavior.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("NAME")]`: read the field from the `NAME` environment variable
/// - `#[env("NAME,required")]`: additionally fail when `NAME` is not set
/// - `#[env("-")]`: never read the field
/// - no attribute: skipped in strict mode; read from the upper-snake-case of
///   the field identifier in lazy mode
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return syn::Error::new_spanned(
                    &input,
                    "EnvBind only supports structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(&input, "EnvBind only supports structs")
                .to_compile_error()
                .into();
        }
    };

    // Generate one load statement per field
    let field_stmts = fields.iter().map(|field| {
        let ident = field.ident.as_ref().unwrap();
        let ident_str = ident.to_string();

        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error(),
        };

        let annotation = match &attrs.annotation {
            Some(text) => quote!(::core::option::Option::Some(#text)),
            None => quote!(::core::option::Option::None),
        };

        match coercer_path(&field.ty) {
            Some(coercer) => quote! {
                if let ::core::option::Option::Some(__binding) =
                    ::envbind::resolve_field(#ident_str, #annotation, mode)?
                {
                    let __raw = ::envbind::coerce::lookup(&__binding)?;
                    self.#ident = #coercer(&__binding.name, &__raw)?;
                }
            },
            None => {
                // No coercion rule: still resolve and look up, so skip
                // markers and missing-required reporting behave the same
                // as for supported types
                let type_name = field.ty.to_token_stream().to_string().replace(' ', "");
                quote! {
                    if let ::core::option::Option::Some(__binding) =
                        ::envbind::resolve_field(#ident_str, #annotation, mode)?
                    {
                        ::envbind::coerce::lookup(&__binding)?;
                        return ::core::result::Result::Err(
                            ::envbind::EnvError::unsupported_type(#ident_str, #type_name),
                        );
                    }
                }
            }
        }
    });

    let expanded = quote! {
        impl ::envbind::EnvBind for #struct_name {
            fn load(
                &mut self,
                mode: ::envbind::Mode,
            ) -> ::core::result::Result<(), ::envbind::EnvError> {
                #(#field_stmts)*
                ::core::result::Result::Ok(())
            }
        }
    };

    TokenStream::from(expanded)
}
