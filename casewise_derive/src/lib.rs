//! Derives per-case accessors: `#[derive(Casewise)]` on an enum generates a
//! `{Enum}Cases` companion whose methods return `casewise::CasePath` values.

extern crate proc_macro;

use heck::ToSnakeCase;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, parse_quote, Data, DataEnum, DeriveInput, Fields, Ident, Type, Variant, Visibility};

fn method_ident(case: &Ident) -> Result<Ident, syn::Error> {
    let name = case.to_string().to_snake_case();

    // self/super/crate cannot be raw idents, so those cases cannot become
    // method names at all
    match name.as_str() {
        "self" | "super" | "crate" => Err(syn::Error::new(
            case.span(),
            format!("case {} snake_cases to the path keyword `{}`", case, name),
        )),
        _ => match syn::parse_str::<Ident>(&name) {
            Ok(_) => Ok(Ident::new(&name, case.span())),
            // other keywords (Move, Loop, ...) become raw idents
            Err(_) => Ok(Ident::new_raw(&name, case.span())),
        },
    }
}

fn case_method(
    vis: &Visibility,
    root_ty: &TokenStream2,
    root_path: &TokenStream2,
    variant: &Variant,
    needs_wildcard: bool,
) -> Result<TokenStream2, syn::Error> {
    let method = method_ident(&variant.ident)?;
    let case = &variant.ident;

    let (value_ty, embed, arm) = match &variant.fields {
        Fields::Unit => (
            quote!(()),
            quote!(|()| #root_path::#case),
            quote!(#root_path::#case => Some(())),
        ),
        Fields::Unnamed(fields) => {
            let types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();

            match types.len() {
                0 => (
                    quote!(()),
                    quote!(|()| #root_path::#case()),
                    quote!(#root_path::#case() => Some(())),
                ),
                // a lone field rides bare, and the constructor itself is the
                // embed function
                1 => {
                    let ty = types[0];
                    (
                        quote!(#ty),
                        quote!(#root_path::#case),
                        quote!(#root_path::#case(value) => Some(value)),
                    )
                }
                _ => {
                    let binders: Vec<Ident> = (0..types.len())
                        .map(|index| Ident::new(&format!("field{}", index), variant.span()))
                        .collect();
                    (
                        quote!((#(#types),*)),
                        quote!(|(#(#binders),*)| #root_path::#case(#(#binders),*)),
                        quote!(#root_path::#case(#(#binders),*) => Some((#(#binders),*))),
                    )
                }
            }
        }
        Fields::Named(fields) => {
            let names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();

            match names.len() {
                0 => (
                    quote!(()),
                    quote!(|()| #root_path::#case {}),
                    quote!(#root_path::#case {} => Some(())),
                ),
                1 => {
                    let name = names[0];
                    let ty = types[0];
                    (
                        quote!(#ty),
                        quote!(|#name| #root_path::#case { #name }),
                        quote!(#root_path::#case { #name } => Some(#name)),
                    )
                }
                // multiple fields travel as a tuple in declaration order
                _ => (
                    quote!((#(#types),*)),
                    quote!(|(#(#names),*)| #root_path::#case { #(#names),* }),
                    quote!(#root_path::#case { #(#names),* } => Some((#(#names),*))),
                ),
            }
        }
    };

    // single-variant enums get an exhaustive match; a wildcard there would
    // trip unreachable_patterns
    let wildcard = if needs_wildcard {
        quote!(, _ => None)
    } else {
        quote!()
    };

    Ok(quote! {
        #vis fn #method(&self) -> ::casewise::CasePath<#root_ty, #value_ty> {
            ::casewise::CasePath::new(
                #embed,
                |root| match root { #arm #wildcard },
            )
        }
    })
}

fn derive_enum(input: &DeriveInput, data: &DataEnum) -> Result<TokenStream2, syn::Error> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new(
            lifetime.span(),
            "cannot derive Casewise for enums with lifetime parameters",
        ));
    }

    let root_ident = &input.ident;
    let vis = &input.vis;
    let cases_ident = Ident::new(&format!("{}Cases", root_ident), root_ident.span());

    // accessor closures capture by value, so every type parameter picks up
    // a 'static bound in the generated impls
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let root_ty = quote!(#root_ident #ty_generics);
    let root_path = quote!(#root_ident);

    let needs_wildcard = data.variants.len() > 1;
    let methods = data
        .variants
        .iter()
        .map(|variant| case_method(vis, &root_ty, &root_path, variant, needs_wildcard))
        .collect::<Result<TokenStream2, syn::Error>>()?;

    let decl_generics = &input.generics;
    let decl_where = &input.generics.where_clause;

    let (companion, construct) = if input.generics.params.is_empty() {
        (
            quote! {
                #[derive(Clone, Copy)]
                #vis struct #cases_ident;
            },
            quote!(#cases_ident),
        )
    } else {
        let phantom_args = input.generics.type_params().map(|param| &param.ident);
        let (decl_impl, decl_ty, decl_where_clause) = input.generics.split_for_impl();
        (
            // the phantom is a fn pointer, so Clone and Copy hold for any
            // parameters and carry no bounds
            quote! {
                #vis struct #cases_ident #decl_generics (
                    ::std::marker::PhantomData<fn() -> (#(#phantom_args,)*)>,
                ) #decl_where;

                impl #decl_impl Clone for #cases_ident #decl_ty #decl_where_clause {
                    fn clone(&self) -> Self {
                        *self
                    }
                }

                impl #decl_impl Copy for #cases_ident #decl_ty #decl_where_clause {}
            },
            quote!(#cases_ident(::std::marker::PhantomData)),
        )
    };

    Ok(quote! {
        #companion

        impl #impl_generics ::casewise::Casewise for #root_ident #ty_generics #where_clause {
            type Cases = #cases_ident #ty_generics;

            fn cases() -> Self::Cases {
                #construct
            }
        }

        impl #impl_generics #cases_ident #ty_generics #where_clause {
            #methods
        }
    })
}

fn expand(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    match &input.data {
        Data::Enum(data) => derive_enum(input, data),
        Data::Struct(_) => Err(syn::Error::new(
            input.ident.span(),
            "cannot derive Casewise for structs",
        )),
        Data::Union(_) => Err(syn::Error::new(
            input.ident.span(),
            "cannot derive Casewise for unions",
        )),
    }
}

#[proc_macro_derive(Casewise)]
pub fn derive_casewise(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input).unwrap_or_else(|error| error.to_compile_error()))
}
