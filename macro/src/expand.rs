use parsing::SidComponents;
use proc_macro_crate::{Error as MacroCrateError, FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

const ROOT_CRATE: &str = "sid-codec";

pub fn sid_impl(input: &LitStr) -> Result<TokenStream, syn::Error> {
    let components: SidComponents = input
        .value()
        .parse()
        .map_err(|e| syn::Error::new_spanned(input, e))?;
    let revision = components.revision();
    let authority = components.identifier_authority();
    let sub_authority = components.sub_authority();
    let root = crate_root(ROOT_CRATE).map_err(|err| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("Root crate not found:{err}"),
        )
    })?;

    let expanded = quote! {
        #root::SecurityIdentifier::from_components(
            #revision,
            [#(#authority),*],
            &[#(#sub_authority),*]
        )
    };
    Ok(expanded)
}

fn crate_root(name: &str) -> Result<TokenStream, MacroCrateError> {
    crate_name(name).map(|found| {
        // The root crate declares `extern crate self as sid_codec`, so its own
        // name resolves from inside it, its doctests and its integration tests alike.
        let found_name = match found {
            FoundCrate::Name(found_name) => found_name,
            FoundCrate::Itself => name.replace('-', "_"),
        };
        let ident = syn::Ident::new(&found_name, proc_macro2::Span::call_site());
        quote!(::#ident)
    })
}
