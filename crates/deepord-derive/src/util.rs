use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::{ToTokens, quote};
use syn::{Generics, Type, WhereClause};

/// Merge generated predicates into an existing where clause.
pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    match (where_clause, bounds.is_empty()) {
        (None, true) => quote!(),
        (Some(wc), true) => quote!(#wc),
        (None, false) => quote!(where #(#bounds),*),
        (Some(wc), false) => {
            let preds = &wc.predicates;
            if preds.is_empty() || preds.trailing_punct() {
                quote!(where #preds #(#bounds),*)
            } else {
                quote!(where #preds, #(#bounds),*)
            }
        }
    }
}

/// `T: 'static` for every type parameter; `Inspect` extends `Any`.
pub fn static_type_params(generics: &Generics) -> Vec<TokenStream> {
    generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            quote!(#ident: 'static)
        })
        .collect()
}

/// True when `ty` names one of the struct's type parameters.
///
/// Field bounds are only emitted for such fields; bounding a concrete
/// self-referential field type would make the impl depend on itself.
pub fn mentions_type_param(ty: &Type, generics: &Generics) -> bool {
    let params: Vec<&Ident> = generics.type_params().map(|param| &param.ident).collect();
    if params.is_empty() {
        return false;
    }

    contains_ident(ty.to_token_stream(), &params)
}

fn contains_ident(tokens: TokenStream, params: &[&Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(ident) => params.iter().any(|param| **param == ident),
        TokenTree::Group(group) => contains_ident(group.stream(), params),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}
