use proc_macro2::*;
use quote::quote;
use syn::*;

/// Parse the derive input and make sure it is an enum with only unit variants
fn parse_unit_enum(item: TokenStream, derive_name: &str) -> core::result::Result<(Ident, Vec<Variant>), TokenStream> {
    let input_parsed = syn::parse2::<DeriveInput>(item).map_err(|err| err.to_compile_error())?;

    let body_data = match input_parsed.data {
        Data::Enum(body) => body,
        _ => {
            let msg = format!("{derive_name} can only be derived for enums");
            return Err(quote!( compile_error!(#msg); ));
        }
    };

    if let Some(variant) = body_data.variants.iter().find(|variant| !matches!(variant.fields, Fields::Unit)) {
        let msg = format!("{derive_name} only supports unit variants, `{}` has fields", variant.ident);
        return Err(quote!( compile_error!(#msg); ));
    }

    Ok((input_parsed.ident, body_data.variants.into_iter().collect()))
}

/// Get the name given by a `#[name("...")]`-style attribute, or the variant's identifier
fn variant_name(variant: &Variant, attr_name: &str) -> TokenStream {
    variant.attrs.iter()
    .filter(|attr| attr.path().is_ident(attr_name))
    .map(|attr| attr.parse_args::<LitStr>().map_or_else(|err| err.to_compile_error(), |parsed| {
        let val = parsed.value();
        quote!(#val)
    }))
    .nth(0)
    .unwrap_or_else(|| {
        let val = variant.ident.to_string();
        quote!(#val)
    })
}

pub fn enum_count(item: TokenStream) -> TokenStream {
    let (ident, variants) = match parse_unit_enum(item, "EnumCount") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };
    let count = variants.len();

    quote!{
        impl ::nnvk_base::EnumCountT for #ident {
            const COUNT: usize = #count;
        }
    }
}

pub fn enum_from_index(item: TokenStream) -> TokenStream {
    let (ident, body_variants) = match parse_unit_enum(item, "EnumFromIndex") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let mut variants = Vec::with_capacity(body_variants.len());
    let mut indices = Vec::with_capacity(body_variants.len());
    let mut i = 0;
    for variant in body_variants {
        let idx = match variant.discriminant {
            Some((_, expr)) => match expr {
                Expr::Lit(lit) => match lit.lit {
                    Lit::Int(int) => match int.base10_parse::<usize>() {
                        Ok(int) => int,
                        Err(err) => {
                            let msg = format!("EnumFromIndex requires non-negative discriminants: {err}");
                            return quote!(compile_error!(#msg););
                        },
                    },
                    _ => return quote!(compile_error!("Only integer discriminants are supported by EnumFromIndex");),
                },
                _ => return quote!(compile_error!("Only integer discriminants are supported by EnumFromIndex");),
            },
            None => i,
        };

        variants.push(variant.ident);
        indices.push(idx);

        i = idx + 1;
    }

    quote!{
        impl ::nnvk_base::EnumFromIndexT for #ident {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    #(#indices => Some(Self::#variants),)*
                    _ => None,
                }
            }
        }
    }
}

pub fn enum_display(item: TokenStream) -> TokenStream {
    let (ident, variants) = match parse_unit_enum(item, "EnumDisplay") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let members = variants.iter().map(|variant| variant.ident.clone());
    let names = variants.iter().map(|variant| variant_name(variant, "display"));

    quote!{
        impl core::fmt::Display for #ident {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    #(#ident::#members => f.pad(#names),)*
                }
            }
        }
    }
}

pub fn enum_from_name(item: TokenStream) -> TokenStream {
    let (ident, variants) = match parse_unit_enum(item, "EnumFromName") {
        Ok(parsed) => parsed,
        Err(err) => return err,
    };

    let members = variants.iter().map(|variant| variant.ident.clone());
    let names = variants.iter().map(|variant| variant_name(variant, "parse_name"));

    quote!{
        impl ::nnvk_base::EnumFromNameT for #ident {
            fn parse(s: &str) -> Option<Self> {
                match s {
                    #(#names => Some(Self::#members),)*
                    _ => None,
                }
            }
        }
    }
}
