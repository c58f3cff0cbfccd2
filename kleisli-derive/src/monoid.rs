//! Implementation of the `#[derive(Semigroup)]` and `#[derive(Monoid)]`
//! macros.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Generics, Index, Member, parse_macro_input, parse_quote};

/// Main implementation of the Semigroup derive macro.
pub fn derive_semigroup_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_semigroup(&input))
}

/// Main implementation of the Monoid derive macro.
pub fn derive_monoid_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_monoid(&input))
}

fn expand_semigroup(input: &DeriveInput) -> TokenStream2 {
    let fields = match struct_fields(input, "Semigroup") {
        Ok(fields) => fields,
        Err(error) => return error.to_compile_error(),
    };

    let name = &input.ident;
    let generics = bounded_generics(
        &input.generics,
        fields,
        &parse_quote!(::kleisli::typeclass::Semigroup),
    );
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let body = if fields.is_empty() {
        quote! {
            fn combine(self, _other: Self) -> Self {
                self
            }
        }
    } else {
        let combined = members(fields).map(|member| {
            quote! {
                #member: ::kleisli::typeclass::Semigroup::combine(self.#member, other.#member)
            }
        });
        quote! {
            fn combine(self, other: Self) -> Self {
                Self { #(#combined),* }
            }
        }
    };

    quote! {
        impl #impl_generics ::kleisli::typeclass::Semigroup for #name #type_generics #where_clause {
            #[inline]
            #body
        }
    }
}

fn expand_monoid(input: &DeriveInput) -> TokenStream2 {
    let fields = match struct_fields(input, "Monoid") {
        Ok(fields) => fields,
        Err(error) => return error.to_compile_error(),
    };

    let name = &input.ident;
    let generics = bounded_generics(
        &input.generics,
        fields,
        &parse_quote!(::kleisli::typeclass::Monoid),
    );
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let identities = fields.iter().zip(members(fields)).map(|(field, member)| {
        let field_type = &field.ty;
        quote! {
            #member: <#field_type as ::kleisli::typeclass::Monoid>::empty()
        }
    });

    quote! {
        impl #impl_generics ::kleisli::typeclass::Monoid for #name #type_generics #where_clause {
            #[inline]
            fn empty() -> Self {
                Self { #(#identities),* }
            }
        }
    }
}

/// Returns the fields of a struct, or an error spanned on the type name.
fn struct_fields<'a>(input: &'a DeriveInput, derived: &str) -> syn::Result<&'a Fields> {
    match &input.data {
        Data::Struct(data_struct) => Ok(&data_struct.fields),
        Data::Enum(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derived} can only be derived for structs, not enums."),
        )),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derived} cannot be derived for unions."),
        )),
    }
}

/// Field accessors: names for named fields, positions for tuple fields.
fn members(fields: &Fields) -> impl Iterator<Item = Member> + '_ {
    fields.iter().enumerate().map(|(position, field)| {
        field
            .ident
            .clone()
            .map_or_else(|| Member::Unnamed(Index::from(position)), Member::Named)
    })
}

/// Adds `FieldType: bound` to the where clause for every field.
fn bounded_generics(generics: &Generics, fields: &Fields, bound: &syn::Path) -> Generics {
    let mut generics = generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for field in fields {
            let field_type = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#field_type: #bound));
        }
    }
    generics
}
