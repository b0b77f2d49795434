use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Error, Fields, Member, Type};

use crate::util::{mentions_type_param, static_type_params, where_clause_with_bounds};

///
/// Mode
///
/// Shape the derived `inspect` reports.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Record,
    Comparable,
    Opaque,
    Transparent,
}

///
/// InspectField
///

struct InspectField {
    member: Member,
    name: Option<String>,
    ty: Type,
}

// derive_inspect
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    expand(&input).unwrap_or_else(Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> Result<TokenStream, Error> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "Inspect cannot be derived for enums",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                &input.ident,
                "Inspect cannot be derived for unions",
            ));
        }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(Error::new_spanned(
            lifetime,
            "Inspect cannot be derived for types with lifetime parameters",
        ));
    }

    let mode = parse_mode(&input.attrs)?;
    let fields = collect_fields(&data.fields)?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let generic = input.generics.type_params().next().is_some();
    let mut bounds = static_type_params(&input.generics);

    let body = match mode {
        Mode::Record => {
            bounds.extend(
                fields
                    .iter()
                    .filter(|field| mentions_type_param(&field.ty, &input.generics))
                    .map(|field| {
                        let ty = &field.ty;
                        quote!(#ty: ::deepord::value::Inspect)
                    }),
            );

            quote!(::deepord::value::Value::Record(self))
        }
        Mode::Comparable => {
            if generic {
                bounds.push(quote!(#ident #ty_generics: ::deepord::value::Comparable));
            }

            quote!(::deepord::value::Value::Custom(self))
        }
        Mode::Opaque => {
            if generic {
                bounds.push(quote!(#ident #ty_generics: ::std::cmp::PartialEq));
            }

            quote!(::deepord::value::Value::Opaque(self))
        }
        Mode::Transparent => {
            let [field] = fields.as_slice() else {
                return Err(Error::new_spanned(
                    &data.fields,
                    "#[inspect(transparent)] requires exactly one inspected field",
                ));
            };
            let (member, ty) = (&field.member, &field.ty);
            if mentions_type_param(ty, &input.generics) {
                bounds.push(quote!(#ty: ::deepord::value::Inspect));
            }

            quote!(::deepord::value::Inspect::inspect(&self.#member))
        }
    };

    let where_tokens = where_clause_with_bounds(where_clause, &bounds);
    let record_impl = if mode == Mode::Record {
        record_impl(input, &fields, &where_tokens)
    } else {
        quote!()
    };

    Ok(quote! {
        impl #impl_generics ::deepord::value::Inspect for #ident #ty_generics #where_tokens {
            fn inspect(&self) -> ::deepord::value::Value<'_> {
                #body
            }
        }

        #record_impl
    })
}

fn record_impl(
    input: &DeriveInput,
    fields: &[InspectField],
    where_tokens: &TokenStream,
) -> TokenStream {
    let ident = &input.ident;
    let (impl_generics, ty_generics, _) = input.generics.split_for_impl();

    let count = fields.len();
    let members = fields.iter().map(|field| &field.member);

    // tuple structs keep the default (no names)
    let field_name = if fields.iter().all(|field| field.name.is_some()) && count > 0 {
        let names = fields.iter().filter_map(|field| field.name.as_deref());

        quote! {
            fn field_name(&self, index: usize) -> Option<&'static str> {
                const NAMES: [&str; #count] = [#(#names),*];

                NAMES.get(index).copied()
            }
        }
    } else {
        quote!()
    };

    quote! {
        impl #impl_generics ::deepord::value::Record for #ident #ty_generics #where_tokens {
            fn field_count(&self) -> usize {
                #count
            }

            fn field(&self, index: usize) -> Option<&dyn ::deepord::value::Inspect> {
                let fields: [&dyn ::deepord::value::Inspect; #count] = [#(&self.#members),*];

                fields.get(index).copied()
            }

            #field_name
        }
    }
}

fn parse_mode(attrs: &[Attribute]) -> Result<Mode, Error> {
    let mut mode = Mode::Record;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inspect")) {
        attr.parse_nested_meta(|meta| {
            let next = if meta.path.is_ident("comparable") {
                Mode::Comparable
            } else if meta.path.is_ident("opaque") {
                Mode::Opaque
            } else if meta.path.is_ident("transparent") {
                Mode::Transparent
            } else {
                return Err(meta.error("unsupported inspect attribute"));
            };

            if mode != Mode::Record && mode != next {
                return Err(meta.error("conflicting inspect attributes"));
            }
            mode = next;

            Ok(())
        })?;
    }

    Ok(mode)
}

fn collect_fields(fields: &Fields) -> Result<Vec<InspectField>, Error> {
    let mut out = Vec::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        if is_skipped(&field.attrs)? {
            continue;
        }

        let (member, name) = match &field.ident {
            Some(ident) => (Member::Named(ident.clone()), Some(ident.to_string())),
            None => (Member::Unnamed(index.into()), None),
        };

        out.push(InspectField {
            member,
            name,
            ty: field.ty.clone(),
        });
    }

    Ok(out)
}

fn is_skipped(attrs: &[Attribute]) -> Result<bool, Error> {
    let mut skip = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inspect")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported inspect field attribute"))
            }
        })?;
    }

    Ok(skip)
}
