use proc_macro::TokenStream;

mod inspect;
mod util;

/// Implement `deepord::value::Inspect` for a struct.
///
/// Container attributes: `#[inspect(comparable)]`, `#[inspect(opaque)]`,
/// `#[inspect(transparent)]`. Field attribute: `#[inspect(skip)]`.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect(input.into()).into()
}
