use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::Span;

pub(crate) fn resolve_core_path() -> syn::Result<syn::Path> {
    match crate_name("specimen-core") {
        // Inside specimen-core itself `crate` would point at test and example
        // targets; the library declares `extern crate self as specimen_core`.
        Ok(FoundCrate::Itself) => Ok(syn::parse_quote!(::specimen_core)),
        Ok(FoundCrate::Name(name)) => {
            let ident = syn::Ident::new(&name.replace('-', "_"), Span::call_site());
            Ok(syn::parse_quote!(::#ident))
        }
        Err(_) => Err(syn::Error::new(
            Span::call_site(),
            "could not resolve `specimen-core`; add it as a dependency (renamed dependencies are supported)",
        )),
    }
}
