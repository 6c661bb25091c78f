// Copyright (C) 2022-present The NetGauze Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros generating the conversion boilerplate of the wire errors.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DataEnum, DeriveInput, Ident, Path, Type};

fn error_enum(input: &DeriveInput) -> syn::Result<&DataEnum> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new(
            input.generics.span(),
            "generic error types are not supported",
        ));
    }
    match &input.data {
        Data::Enum(data) => Ok(data),
        _ => Err(syn::Error::new(
            input.ident.span(),
            "works only with enum error types",
        )),
    }
}

/// Variants with a field marked as `#[attr]`, along with the type of that
/// field. A marked variant must have exactly one field.
fn marked_variants<'a>(data: &'a DataEnum, attr: &str) -> syn::Result<Vec<(&'a Ident, &'a Path)>> {
    let mut marked = vec![];
    for variant in &data.variants {
        for field in &variant.fields {
            if !field.attrs.iter().any(|x| x.path().is_ident(attr)) {
                continue;
            }
            if variant.fields.len() != 1 {
                return Err(syn::Error::new(
                    variant.span(),
                    format!("`#[{attr}]` is only allowed on single field variants"),
                ));
            }
            match &field.ty {
                Type::Path(type_path) => marked.push((&variant.ident, &type_path.path)),
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        format!("`#[{attr}]` expects a named type"),
                    ))
                }
            }
        }
    }
    Ok(marked)
}

/// `module::FooParsingError` becomes `module::LocatedFooParsingError`
fn located_path(path: &Path) -> syn::Result<Path> {
    let mut located = path.clone();
    let last = located
        .segments
        .last_mut()
        .ok_or_else(|| syn::Error::new(path.span(), "empty type path"))?;
    last.ident = format_ident!("Located{}", last.ident);
    Ok(located)
}

fn located_error(input: &DeriveInput) -> syn::Result<TokenStream> {
    let data = error_enum(input)?;
    let ident = &input.ident;
    let vis = &input.vis;
    let located = format_ident!("Located{}", ident);

    let nom_variant = match marked_variants(data, "from_nom")?.as_slice() {
        [(variant, _)] => *variant,
        _ => {
            return Err(syn::Error::new(
                ident.span(),
                "exactly one variant must be marked with `#[from_nom]`",
            ))
        }
    };
    let (external_variants, external_types): (Vec<_>, Vec<_>) =
        marked_variants(data, "from_external")?.into_iter().unzip();
    let mut nested_variants = vec![];
    let mut nested_types = vec![];
    for (variant, path) in marked_variants(data, "from_located")? {
        nested_variants.push(variant);
        nested_types.push(located_path(path)?);
    }
    let doc = format!("[`{ident}`] along with the input span it was raised at");

    Ok(quote! {
        #[doc = #doc]
        #[derive(PartialEq, Eq, Clone, Debug)]
        #vis struct #located<'a> {
            span: ::bgp_shutcomm_parse_utils::Span<'a>,
            error: #ident,
        }

        #[automatically_derived]
        impl<'a> #located<'a> {
            pub const fn new(span: ::bgp_shutcomm_parse_utils::Span<'a>, error: #ident) -> Self {
                Self { span, error }
            }

            pub fn into_error(self) -> #ident {
                self.error
            }
        }

        #[automatically_derived]
        impl<'a> From<#located<'a>> for (::bgp_shutcomm_parse_utils::Span<'a>, #ident) {
            fn from(value: #located<'a>) -> Self {
                (value.span, value.error)
            }
        }

        #[automatically_derived]
        impl<'a> ::bgp_shutcomm_parse_utils::LocatedParsingError for #located<'a> {
            type Span = ::bgp_shutcomm_parse_utils::Span<'a>;
            type Error = #ident;

            fn span(&self) -> &Self::Span {
                &self.span
            }

            fn error(&self) -> &Self::Error {
                &self.error
            }
        }

        #[automatically_derived]
        impl<'a> ::nom::error::ParseError<::bgp_shutcomm_parse_utils::Span<'a>> for #located<'a> {
            fn from_error_kind(
                input: ::bgp_shutcomm_parse_utils::Span<'a>,
                kind: ::nom::error::ErrorKind,
            ) -> Self {
                Self::new(input, #ident::#nom_variant(kind))
            }

            fn append(
                _input: ::bgp_shutcomm_parse_utils::Span<'a>,
                _kind: ::nom::error::ErrorKind,
                other: Self,
            ) -> Self {
                other
            }
        }

        #[automatically_derived]
        impl<'a> ::nom::error::FromExternalError<::bgp_shutcomm_parse_utils::Span<'a>, #ident>
            for #located<'a>
        {
            fn from_external_error(
                input: ::bgp_shutcomm_parse_utils::Span<'a>,
                _kind: ::nom::error::ErrorKind,
                error: #ident,
            ) -> Self {
                Self::new(input, error)
            }
        }

        #(
            #[automatically_derived]
            impl<'a> ::nom::error::FromExternalError<::bgp_shutcomm_parse_utils::Span<'a>, #external_types>
                for #located<'a>
            {
                fn from_external_error(
                    input: ::bgp_shutcomm_parse_utils::Span<'a>,
                    _kind: ::nom::error::ErrorKind,
                    error: #external_types,
                ) -> Self {
                    Self::new(input, #ident::#external_variants(error))
                }
            }
        )*

        #(
            #[automatically_derived]
            impl<'a> From<#nested_types<'a>> for #located<'a> {
                fn from(value: #nested_types<'a>) -> Self {
                    let (span, error) = value.into();
                    Self::new(span, #ident::#nested_variants(error))
                }
            }
        )*
    })
}

fn writing_error(input: &DeriveInput) -> syn::Result<TokenStream> {
    let data = error_enum(input)?;
    let ident = &input.ident;

    let io_variants = marked_variants(data, "from_std_io_error")?;
    if io_variants.len() > 1 {
        return Err(syn::Error::new(
            ident.span(),
            "at most one variant can be marked with `#[from_std_io_error]`",
        ));
    }
    let io_variants = io_variants.into_iter().map(|(variant, _)| variant);
    let (from_variants, from_types): (Vec<_>, Vec<_>) =
        marked_variants(data, "from")?.into_iter().unzip();

    Ok(quote! {
        #(
            #[automatically_derived]
            impl From<::std::io::Error> for #ident {
                fn from(err: ::std::io::Error) -> Self {
                    #ident::#io_variants(err.to_string())
                }
            }
        )*

        #(
            #[automatically_derived]
            impl From<#from_types> for #ident {
                fn from(err: #from_types) -> Self {
                    #ident::#from_variants(err)
                }
            }
        )*
    })
}

/// For an error enum `FooParsingError` generates `LocatedFooParsingError<'a>`
/// which pairs the error with the `Span` it was raised at, and implements
/// the `nom` error traits for it.
///
/// * `#[from_nom]` marks the `nom::error::ErrorKind` variant, exactly one is
///   required.
/// * `#[from_external]` marks errors produced by `map_res` conversions.
/// * `#[from_located]` marks errors of nested parsers. The nested located
///   error is looked up next to the marked type, `module::BarParsingError`
///   is converted from `module::LocatedBarParsingError`.
///
/// ```ignore
/// use bgp_shutcomm_serde_macros::LocatedError;
///
/// #[derive(LocatedError, PartialEq, Eq, Clone, Debug)]
/// pub enum NotificationParsingError {
///     NomError(#[from_nom] nom::error::ErrorKind),
///     UndefinedMessageType(#[from_external] UndefinedBgpMessageType),
///     HeaderError(#[from_located] super::HeaderParsingError),
/// }
/// ```
#[proc_macro_derive(LocatedError, attributes(from_nom, from_external, from_located))]
pub fn derive_located_error(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    located_error(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates [`From`] conversions for an error enum raised while writing.
///
/// * `#[from_std_io_error]` on a `String` variant converts [`std::io::Error`]
///   into it.
/// * `#[from]` converts the marked type into its variant.
///
/// ```ignore
/// use bgp_shutcomm_serde_macros::WritingError;
///
/// #[derive(WritingError, PartialEq, Eq, Clone, Debug)]
/// pub enum NotificationWritingError {
///     StdIOError(#[from_std_io_error] String),
///     HeaderError(#[from] HeaderWritingError),
/// }
/// ```
#[proc_macro_derive(WritingError, attributes(from_std_io_error, from))]
pub fn derive_writing_error(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    writing_error(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
