use proc_macro::TokenStream;
use quote::format_ident;
use quote::quote;
use syn::parse_macro_input;
use syn::parse_quote;

/// The most fields a derived struct can vary, bounded by the largest tuple
/// `cartesian::Product` accepts.
const MAX_VARYING: usize = 12;

#[proc_macro_derive(Cartesian, attributes(cartesian))]
pub fn derive_cartesian(item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::DeriveInput);
    expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Role {
    /// One candidate list per field: `T` becomes `Vec<T>`.
    Vary,
    /// Nested factors: `T` becomes `<T as Cartesian>::Factors`.
    Compose,
    /// A single value copied into every combination.
    Skip,
}

struct Field {
    member: syn::Member,
    binding: syn::Ident,
    ty: syn::Type,
    role: Role,
}

#[derive(Default)]
struct Options {
    derives: Vec<syn::Path>,
    default: bool,
}

fn expand(mut item: syn::DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !item.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "`Cartesian` cannot be derived for generic types",
        ));
    }

    let options = parse_options(&item.attrs)?;

    let data = match &mut item.data {
        syn::Data::Struct(data) => data,
        syn::Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "`Cartesian` can only be derived for structs",
            ));
        }
        syn::Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "`Cartesian` can only be derived for structs",
            ));
        }
    };

    let fields = data
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let (member, binding) = field_access(index, field);
            Ok(Field {
                member,
                binding,
                ty: field.ty.clone(),
                role: parse_role(field)?,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let varying = fields.iter().filter(|field| field.role != Role::Skip).count();
    if varying > MAX_VARYING {
        return Err(syn::Error::new_spanned(
            &item.ident,
            format!("`Cartesian` supports at most {MAX_VARYING} varying fields, found {varying}"),
        ));
    }

    data.fields
        .iter_mut()
        .zip(&fields)
        .for_each(|(field, info)| {
            let ty = &info.ty;
            match info.role {
                Role::Vary => field.ty = parse_quote!(::std::vec::Vec<#ty>),
                Role::Compose => field.ty = parse_quote!(<#ty as ::cartesian::Cartesian>::Factors),
                Role::Skip => (),
            }
            remove_attr(&mut field.attrs);
        });

    remove_attr(&mut item.attrs);
    let derives = &options.derives;
    if !derives.is_empty() {
        item.attrs.push(parse_quote!(#[derive(#(#derives),*)]));
    }

    let ident_cartesian = format_ident!("{}Cartesian", item.ident);
    let ident_original = std::mem::replace(&mut item.ident, ident_cartesian);
    let ident_cartesian = &item.ident;

    // Each varying field is one digit of the product, in declaration order.
    let digits = fields.iter().filter_map(|field| {
        let member = &field.member;
        match field.role {
            Role::Vary => Some(quote!(self.#member.as_slice())),
            Role::Compose => Some(quote!(::cartesian::IntoCartesian::sequence(&self.#member))),
            Role::Skip => None,
        }
    });

    let pattern = fields
        .iter()
        .filter(|field| field.role != Role::Skip)
        .map(|field| &field.binding);

    let captures = fields
        .iter()
        .filter(|field| field.role == Role::Skip)
        .map(|field| {
            let Field { member, binding, .. } = field;
            quote!(let #binding = &self.#member;)
        });

    let build = fields.iter().map(|field| {
        let Field { member, binding, .. } = field;
        match field.role {
            Role::Vary | Role::Skip => quote!(#member: ::core::clone::Clone::clone(#binding)),
            Role::Compose => quote!(#member: #binding),
        }
    });

    let from = fields.iter().map(|field| {
        let member = &field.member;
        match field.role {
            Role::Vary => quote!(#member: ::std::vec![value.#member]),
            Role::Compose => quote!(#member: ::core::convert::From::from(value.#member)),
            Role::Skip => quote!(#member: value.#member),
        }
    });

    let default = options.default.then(|| {
        quote! {
            impl ::core::default::Default for #ident_cartesian {
                fn default() -> Self {
                    ::core::convert::From::from(
                        <#ident_original as ::core::default::Default>::default(),
                    )
                }
            }
        }
    });

    Ok(quote! {
        #item

        impl ::cartesian::Cartesian for #ident_original {
            type Factors = #ident_cartesian;
        }

        impl ::core::convert::From<#ident_original> for #ident_cartesian {
            fn from(value: #ident_original) -> Self {
                Self { #(#from),* }
            }
        }

        #default

        impl ::cartesian::IntoCartesian for #ident_cartesian {
            type Item = #ident_original;

            fn sequence(
                &self,
            ) -> impl ::cartesian::RandomAccessSequence<Item = #ident_original> + '_ {
                #(#captures)*
                ::cartesian::SequenceExt::map_items(
                    ::cartesian::Product::new((#(#digits,)*)),
                    move |(#(#pattern,)*)| #ident_original { #(#build),* },
                )
            }
        }
    })
}

fn field_access(index: usize, field: &syn::Field) -> (syn::Member, syn::Ident) {
    match field.ident.as_ref() {
        None => (
            syn::Member::Unnamed(syn::Index {
                index: index as u32,
                span: proc_macro2::Span::call_site(),
            }),
            format_ident!("_{}", index),
        ),
        Some(ident) => (syn::Member::Named(ident.clone()), ident.clone()),
    }
}

fn remove_attr(attrs: &mut Vec<syn::Attribute>) {
    attrs.retain(|attr| !is_cartesian(attr))
}

fn is_cartesian(attr: &syn::Attribute) -> bool {
    matches!(attr.style, syn::AttrStyle::Outer) && attr.path().is_ident("cartesian")
}

fn parse_role(field: &syn::Field) -> syn::Result<Role> {
    let mut role = Role::Vary;
    for attr in field.attrs.iter().filter(|attr| is_cartesian(attr)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("compose") {
                role = Role::Compose;
            } else if meta.path.is_ident("skip") {
                role = Role::Skip;
            } else {
                return Err(meta.error("expected `compose` or `skip`"));
            }
            Ok(())
        })?;
    }
    Ok(role)
}

fn parse_options(attrs: &[syn::Attribute]) -> syn::Result<Options> {
    let mut options = Options::default();
    for attr in attrs.iter().filter(|attr| is_cartesian(attr)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("derive") {
                meta.parse_nested_meta(|derive| {
                    options.derives.push(derive.path);
                    Ok(())
                })
            } else if meta.path.is_ident("default") {
                options.default = true;
                Ok(())
            } else {
                Err(meta.error("expected `derive(...)` or `default`"))
            }
        })?;
    }
    Ok(options)
}
