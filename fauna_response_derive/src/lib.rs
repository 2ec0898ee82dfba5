use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

#[proc_macro_derive(Decode, attributes(decode))]
pub fn derive_decode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_decode(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_decode(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            input.generics,
            "Decode does not support generic structs yet",
        ));
    }

    let data_struct = match input.data {
        Data::Struct(data) => data,
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "Decode can only be derived for structs",
            ));
        }
    };

    let named_fields = match data_struct.fields {
        Fields::Named(fields) => fields,
        _ => {
            return Err(syn::Error::new(
                struct_name.span(),
                "Decode requires named fields",
            ));
        }
    };

    let expected = LitStr::new(&format!("struct {}", struct_name), struct_name.span());
    let mut field_inits = Vec::<TokenStream2>::new();

    for field in named_fields.named {
        let ident = field.ident.clone().ok_or_else(|| {
            syn::Error::new(field.span(), "Decode requires named fields")
        })?;
        let options = parse_decode_field_options(&field.attrs)?;
        let field_ty = field.ty;

        if options.skip {
            field_inits.push(quote! {
                #ident: ::core::default::Default::default()
            });
            continue;
        }

        let key = options
            .rename
            .unwrap_or_else(|| ident.to_string().trim_start_matches("r#").to_string());
        field_inits.push(quote! {
            #ident: ::fauna_response::decode::decode_field::<#field_ty>(fields, #key, path)?
        });
    }

    Ok(quote! {
        impl ::fauna_response::Decode for #struct_name {
            #[allow(unused_variables)]
            fn decode(
                value: &::fauna_response::Value,
                path: &mut ::fauna_response::DecodePath,
            ) -> ::fauna_response::DecodeResult<Self> {
                let fields = ::fauna_response::decode::record_fields(value, path, #expected)?;
                ::core::result::Result::Ok(Self {
                    #(#field_inits),*
                })
            }
        }
    })
}

#[derive(Default)]
struct DecodeFieldOptions {
    rename: Option<String>,
    skip: bool,
}

fn parse_decode_field_options(attrs: &[syn::Attribute]) -> syn::Result<DecodeFieldOptions> {
    let mut options = DecodeFieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("decode") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("Duplicate #[decode(rename = ...)] on field"));
                }
                let value = meta.value()?;
                let lit: LitStr = value.parse()?;
                options.rename = Some(lit.value());
                return Ok(());
            }

            if meta.path.is_ident("skip") {
                options.skip = true;
                return Ok(());
            }

            Err(meta.error(
                "Unsupported #[decode(...)] option. Supported: rename = \"...\", skip",
            ))
        })?;
    }

    if options.skip && options.rename.is_some() {
        return Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "#[decode(skip)] cannot be combined with #[decode(rename = ...)]",
        ));
    }

    Ok(options)
}
