//! Code generation for `#[derive(Describe)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DataStruct, DeriveInput, Fields, Path, Type, parse_quote};

use crate::attrs::{self, FieldAttrs};
use crate::runtime_path::resolve_core_path;

pub(crate) fn expand_describe(input: &DeriveInput) -> syn::Result<TokenStream> {
    let krate = resolve_core_path()?;
    let container = attrs::parse_container_attrs(&input.attrs)?;
    let ident = &input.ident;

    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in &type_params {
            where_clause
                .predicates
                .push(parse_quote!(#param: #krate::domain::Describe));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let base_name = match &container.name {
        Some(name) => quote!(#name),
        None => {
            let ident = ident.unraw().to_string();
            quote!(::core::concat!(::core::module_path!(), "::", #ident))
        }
    };

    // Generic types are distinct per instantiation: `Page<User>`, `Page<Order>`.
    let type_name_body = if type_params.is_empty() {
        quote!(#krate::domain::TypeName::new(#base_name))
    } else {
        quote! {
            let args: ::std::vec::Vec<::std::string::String> = ::std::vec![
                #(<#type_params as #krate::domain::Describe>::type_name().to_string()),*
            ];
            #krate::domain::TypeName::new(::std::format!("{}<{}>", #base_name, args.join(", ")))
        }
    };

    let register_body = match &input.data {
        Data::Struct(data) => expand_struct(&krate, data)?,
        Data::Enum(data) => expand_enum(&krate, data)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                ident,
                "Describe cannot be derived for unions",
            ));
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics #krate::domain::Describe for #ident #ty_generics #where_clause {
            fn type_name() -> #krate::domain::TypeName {
                #type_name_body
            }

            fn register(
                registry: &mut #krate::domain::TypeRegistry,
            ) -> ::core::result::Result<(), #krate::domain::DomainError> {
                #register_body
            }
        }
    })
}

fn expand_struct(krate: &Path, data: &DataStruct) -> syn::Result<TokenStream> {
    let fields: Vec<_> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(unnamed) => {
            return Err(syn::Error::new_spanned(
                unnamed,
                "Describe requires named fields; hint: tuple structs have no field names to document",
            ));
        }
    };

    let mut supertype: Option<&Type> = None;
    let mut field_exprs = Vec::new();
    let mut referenced: Vec<&Type> = Vec::new();

    for field in fields {
        let attrs = attrs::parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let ty = &field.ty;
        referenced.push(ty);

        if attrs.extends {
            if supertype.is_some() {
                return Err(syn::Error::new_spanned(
                    &field.ident,
                    "only one field can be marked `extends`",
                ));
            }
            supertype = Some(ty);
            continue;
        }

        let name = match &attrs.rename {
            Some(rename) => rename.clone(),
            None => field
                .ident
                .as_ref()
                .map(|ident| ident.unraw().to_string())
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?,
        };
        let hint = hint_tokens(krate, &attrs);

        field_exprs.push(quote! {
            #krate::domain::FieldDescriptor::new(
                name.clone(),
                #name,
                <#ty as #krate::domain::Describe>::type_name(),
            )
            .with_args(<#ty as #krate::domain::Describe>::type_args())
            #hint
        });
    }

    let extends = supertype.map(|ty| {
        quote!(.extends(<#ty as #krate::domain::Describe>::type_name()))
    });

    // Insert before recursing so self-referential types terminate.
    Ok(quote! {
        let name = <Self as #krate::domain::Describe>::type_name();
        if registry.contains(&name) {
            return ::core::result::Result::Ok(());
        }
        let descriptor = #krate::domain::TypeDescriptor::composite(name.clone())
            #extends
            #(.field(#field_exprs))*
            .build()?;
        registry.insert(descriptor)?;
        #(<#referenced as #krate::domain::Describe>::register(registry)?;)*
        ::core::result::Result::Ok(())
    })
}

fn expand_enum(krate: &Path, data: &DataEnum) -> syn::Result<TokenStream> {
    let mut constants = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Describe only supports fieldless enums; hint: model data-carrying variants as structs",
            ));
        }
        let attrs = attrs::parse_variant_attrs(&variant.attrs)?;
        constants.push(
            attrs
                .rename
                .unwrap_or_else(|| variant.ident.unraw().to_string()),
        );
    }

    Ok(quote! {
        let name = <Self as #krate::domain::Describe>::type_name();
        if registry.contains(&name) {
            return ::core::result::Result::Ok(());
        }
        let constants = ::std::vec::Vec::<&str>::from([#(#constants),*]);
        registry.insert(#krate::domain::TypeDescriptor::enumeration(name, constants).build()?)?;
        ::core::result::Result::Ok(())
    })
}

fn hint_tokens(krate: &Path, attrs: &FieldAttrs) -> Option<TokenStream> {
    if !attrs.has_hint() {
        return None;
    }

    let mut hint = match &attrs.response {
        Some(response) => quote!(#krate::domain::DocHint::response(#response)),
        None => quote!(<#krate::domain::DocHint as ::core::default::Default>::default()),
    };
    if let Some(example) = &attrs.example {
        hint = quote!(#hint.with_example(#example));
    }
    if let Some(param) = &attrs.param {
        hint = quote! {
            #krate::domain::DocHint {
                param: ::core::option::Option::Some(::std::string::String::from(#param)),
                ..#hint
            }
        };
    }

    Some(quote!(.with_hint(#hint)))
}
