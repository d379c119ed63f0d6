//! Procedural macros for `ldtkmap`.
//!
//! This crate provides the `LdtkJson` derive macro, which generates the JSON
//! decoder and encoder for LDtk records and the wire mapping for string unions.

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use quote::{format_ident, quote};
use syn::{
    Data, DataEnum, DeriveInput, Fields, LitStr, Variant, ext::IdentExt, parse_macro_input,
    punctuated::Punctuated, token::Comma,
};

/// Get the path tokens for the `json` module of `ldtkmap_core` (either direct or
/// through the umbrella crate).
fn get_json_path() -> proc_macro2::TokenStream {
    // Try the core crate first: the model types themselves derive from inside it
    if let Ok(found) = crate_name("ldtkmap_core") {
        match found {
            FoundCrate::Itself => quote!(crate::json),
            FoundCrate::Name(name) => {
                let ident = format_ident!("{}", name);
                quote!(::#ident::json)
            }
        }
    } else if let Ok(FoundCrate::Name(name)) = crate_name("ldtkmap") {
        let ident = format_ident!("{}", name);
        quote!(::#ident::core::json)
    } else {
        // Fallback - assume umbrella crate
        quote!(::ldtkmap::core::json)
    }
}

/// Derive macro for LDtk JSON records and string unions.
///
/// On a struct with named fields this generates `FromLdtkJson` and `ToLdtkJson`,
/// reading one JSON key per field. On an enum with only unit variants it generates
/// `StringUnion`, `FromLdtkJson`, `ToLdtkJson`, `Display` and `FromStr`, mapping
/// each variant to one wire literal and rejecting every other string.
///
/// # Example
///
/// ```ignore
/// use ldtkmap_core::LdtkJson;
///
/// #[derive(LdtkJson)]
/// struct GridPoint {
///     cx: i64,
///     cy: i64,
/// }
///
/// #[derive(Clone, Copy, LdtkJson)]
/// enum TileMode {
///     Single,
///     Stamp,
/// }
/// ```
///
/// # Attributes
///
/// - `#[ldtk(rename = "...")]` - JSON key (field) or wire literal (variant). Fields
///   otherwise use the camelCase form of their name, variants their own name.
/// - `#[ldtk(default)]` - Use `Default::default()` when the key is absent (field-level)
#[proc_macro_derive(LdtkJson, attributes(ldtk))]
pub fn derive_ldtk_json(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_ldtk_json_impl(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_ldtk_json_impl(input: DeriveInput) -> syn::Result<TokenStream> {
    let type_name = &input.ident;
    let json = get_json_path();

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => handle_struct(&input, &fields.named, &json),
            Fields::Unit | Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                type_name,
                "LdtkJson requires a struct with named fields",
            )),
        },
        Data::Enum(data) => handle_enum(&input, data, &json),
        Data::Union(_) => Err(syn::Error::new_spanned(
            type_name,
            "LdtkJson can only be derived for structs or enums",
        )),
    }
}

/// Per-field options from `#[ldtk(...)]`.
#[derive(Default)]
struct FieldOptions {
    rename: Option<String>,
    default: bool,
}

fn handle_struct(
    input: &DeriveInput,
    fields: &Punctuated<syn::Field, Comma>,
    json: &proc_macro2::TokenStream,
) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut field_inits = Vec::new();
    let mut field_inserts = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let options = parse_field_options(&field.attrs)?;
        let key = options
            .rename
            .unwrap_or_else(|| to_camel_case(&field_name.unraw().to_string()));

        if options.default {
            field_inits.push(quote! {
                #field_name: #json::field_or_default(__object, #key)?
            });
        } else {
            field_inits.push(quote! {
                #field_name: #json::field(__object, #key)?
            });
        }

        field_inserts.push(quote! {
            __object.insert(
                ::std::string::String::from(#key),
                #json::ToLdtkJson::to_json(&self.#field_name),
            );
        });
    }

    let expanded = quote! {
        impl #impl_generics #json::FromLdtkJson for #struct_name #ty_generics #where_clause {
            fn from_json(
                __value: &#json::Value,
            ) -> ::std::result::Result<Self, #json::DecodeError> {
                let __object = #json::expect_object(__value)?;
                ::std::result::Result::Ok(Self {
                    #(#field_inits),*
                })
            }
        }

        impl #impl_generics #json::ToLdtkJson for #struct_name #ty_generics #where_clause {
            fn to_json(&self) -> #json::Value {
                let mut __object = #json::Map::new();
                #(#field_inserts)*
                #json::Value::Object(__object)
            }
        }
    };

    Ok(expanded.into())
}

fn handle_enum(
    input: &DeriveInput,
    data: &DataEnum,
    json: &proc_macro2::TokenStream,
) -> syn::Result<TokenStream> {
    let enum_name = &input.ident;
    let enum_name_str = enum_name.to_string();

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            enum_name,
            "LdtkJson string unions need at least one variant",
        ));
    }

    let literals = collect_variant_literals(&data.variants)?;
    let idents: Vec<&syn::Ident> = data.variants.iter().map(|v| &v.ident).collect();

    let expanded = quote! {
        impl #json::StringUnion for #enum_name {
            const NAME: &'static str = #enum_name_str;
            const LITERALS: &'static [&'static str] = &[#(#literals),*];

            fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#idents => #literals,)*
                }
            }

            fn from_literal(__literal: &str) -> ::std::option::Option<Self> {
                match __literal {
                    #(#literals => ::std::option::Option::Some(Self::#idents),)*
                    _ => ::std::option::Option::None,
                }
            }
        }

        impl #json::FromLdtkJson for #enum_name {
            fn from_json(
                __value: &#json::Value,
            ) -> ::std::result::Result<Self, #json::DecodeError> {
                #json::decode_union(__value)
            }
        }

        impl #json::ToLdtkJson for #enum_name {
            fn to_json(&self) -> #json::Value {
                #json::Value::String(::std::string::String::from(
                    #json::StringUnion::as_str(self),
                ))
            }
        }

        impl ::std::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(#json::StringUnion::as_str(self))
            }
        }

        impl ::std::str::FromStr for #enum_name {
            type Err = #json::DecodeError;

            fn from_str(__literal: &str) -> ::std::result::Result<Self, Self::Err> {
                #json::parse_union(__literal)
            }
        }
    };

    Ok(expanded.into())
}

/// Resolve the wire literal of every variant, rejecting data-carrying variants
/// and duplicate literals.
fn collect_variant_literals(variants: &Punctuated<Variant, Comma>) -> syn::Result<Vec<String>> {
    let mut literals: Vec<String> = Vec::with_capacity(variants.len());

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "LdtkJson string unions only support unit variants",
            ));
        }

        let options = parse_field_options(&variant.attrs)?;
        if options.default {
            return Err(syn::Error::new_spanned(
                variant,
                "#[ldtk(default)] is only valid on struct fields; use #[default] for variants",
            ));
        }

        let literal = options
            .rename
            .unwrap_or_else(|| variant.ident.unraw().to_string());
        if literals.contains(&literal) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("duplicate wire literal \"{literal}\""),
            ));
        }
        literals.push(literal);
    }

    Ok(literals)
}

/// Parse every `#[ldtk(...)]` attribute on a field or variant.
fn parse_field_options(attrs: &[syn::Attribute]) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("ldtk") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                options.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("default") {
                options.default = true;
                Ok(())
            } else {
                Err(meta.error("unsupported ldtk attribute, expected `rename` or `default`"))
            }
        })?;
    }

    Ok(options)
}

/// `px_total_offset_x` -> `pxTotalOffsetX`
fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;

    for ch in snake.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }

    out
}
