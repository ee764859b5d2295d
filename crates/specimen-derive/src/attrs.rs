//! Parsing of `#[specimen(...)]` attributes.

use syn::{Attribute, Expr, ExprLit, Lit, Meta};

#[derive(Default)]
pub(crate) struct ContainerAttrs {
    pub name: Option<String>,
}

#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub rename: Option<String>,
    pub param: Option<String>,
    pub response: Option<String>,
    pub example: Option<String>,
    pub extends: bool,
    pub skip: bool,
}

impl FieldAttrs {
    pub fn has_hint(&self) -> bool {
        self.param.is_some() || self.response.is_some()
    }
}

#[derive(Default)]
pub(crate) struct VariantAttrs {
    pub rename: Option<String>,
}

pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut out = ContainerAttrs::default();
    for attr in specimen_attrs(attrs) {
        for meta in parse_meta_list(attr)? {
            match meta {
                Meta::NameValue(meta) if meta.path.is_ident("name") => {
                    out.name = Some(parse_name(&meta.value)?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown specimen container attribute; expected `name = \"...\"`",
                    ));
                }
            }
        }
    }
    Ok(out)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    let mut last: Option<&Attribute> = None;
    for attr in specimen_attrs(attrs) {
        last = Some(attr);
        for meta in parse_meta_list(attr)? {
            match meta {
                Meta::NameValue(meta) if meta.path.is_ident("rename") => {
                    out.rename = Some(parse_name(&meta.value)?);
                }
                Meta::NameValue(meta) if meta.path.is_ident("param") => {
                    out.param = Some(parse_string_expr(&meta.value)?);
                }
                Meta::NameValue(meta) if meta.path.is_ident("response") => {
                    out.response = Some(parse_string_expr(&meta.value)?);
                }
                Meta::NameValue(meta) if meta.path.is_ident("example") => {
                    out.example = Some(parse_string_expr(&meta.value)?);
                }
                Meta::Path(path) if path.is_ident("extends") => out.extends = true,
                Meta::Path(path) if path.is_ident("skip") => out.skip = true,
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown specimen field attribute; expected one of `rename`, `param`, \
                         `response`, `example`, `extends`, `skip`",
                    ));
                }
            }
        }
    }

    if let Some(attr) = last {
        if out.example.is_some() && out.response.is_none() {
            return Err(syn::Error::new_spanned(
                attr,
                "`example` belongs to a response hint; hint: add `response = \"...\"`",
            ));
        }
        if out.extends && (out.skip || out.rename.is_some() || out.has_hint()) {
            return Err(syn::Error::new_spanned(
                attr,
                "`extends` cannot be combined with other specimen field attributes",
            ));
        }
    }
    Ok(out)
}

pub(crate) fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut out = VariantAttrs::default();
    for attr in specimen_attrs(attrs) {
        for meta in parse_meta_list(attr)? {
            match meta {
                Meta::NameValue(meta) if meta.path.is_ident("rename") => {
                    out.rename = Some(parse_name(&meta.value)?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown specimen variant attribute; expected `rename = \"...\"`",
                    ));
                }
            }
        }
    }
    Ok(out)
}

fn specimen_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("specimen"))
}

fn parse_meta_list(attr: &Attribute) -> syn::Result<Vec<Meta>> {
    let metas = attr
        .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)?;
    Ok(metas.into_iter().collect())
}

fn parse_string_expr(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Ok(value.value()),
        _ => Err(syn::Error::new_spanned(
            expr,
            "expected string literal; hint: wrap the value in quotes",
        )),
    }
}

/// A string that ends up as a type, field or constant name.
fn parse_name(expr: &Expr) -> syn::Result<String> {
    let value = parse_string_expr(expr)?;
    if value.trim().is_empty() || value.trim() != value {
        return Err(syn::Error::new_spanned(
            expr,
            "names must be non-empty and carry no surrounding whitespace",
        ));
    }
    Ok(value)
}
