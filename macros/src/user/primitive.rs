use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Index, Member, Type};

const ONE_FIELD: &str =
    "#[derive(Primitive)] requires a struct with exactly one field over a primitive kind";

/// #[derive(Primitive)] on a one-field struct.
///
/// Emits the sealed supertrait impl and a `Primitive` impl that forwards the
/// native comparison to the field. The field type is added to the where
/// clause so a non-primitive field is reported against `Primitive` itself.
pub fn expand_derive_primitive(input: DeriveInput) -> TokenStream2 {
    match derive_primitive(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_primitive(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let (field_ty, member) = single_field(input)?;
    let ident = &input.ident;

    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#field_ty: ::lesser::Primitive));
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::lesser::__private::Sealed for #ident #ty_generics #where_clause {}

        impl #impl_generics ::lesser::Primitive for #ident #ty_generics #where_clause {
            #[inline(always)]
            fn native_lt(&self, other: &Self) -> bool {
                <#field_ty as ::lesser::Primitive>::native_lt(&self.#member, &other.#member)
            }
        }
    })
}

/// The only field of the struct, with the member used to reach it.
fn single_field(input: &DeriveInput) -> syn::Result<(&Type, Member)> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => return Err(syn::Error::new_spanned(&data.enum_token, ONE_FIELD)),
        Data::Union(data) => return Err(syn::Error::new_spanned(&data.union_token, ONE_FIELD)),
    };

    let mut fields = match &data.fields {
        Fields::Named(named) => named.named.iter(),
        Fields::Unnamed(unnamed) => unnamed.unnamed.iter(),
        Fields::Unit => return Err(syn::Error::new_spanned(&input.ident, ONE_FIELD)),
    };

    match (fields.next(), fields.next()) {
        (Some(field), None) => {
            let member = match &field.ident {
                Some(name) => Member::Named(name.clone()),
                None => Member::Unnamed(Index::from(0)),
            };
            Ok((&field.ty, member))
        }
        _ => Err(syn::Error::new_spanned(&data.fields, ONE_FIELD)),
    }
}
