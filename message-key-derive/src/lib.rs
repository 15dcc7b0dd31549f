use darling::{ast, FromDeriveInput, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

#[derive(FromVariant)]
#[darling(attributes(message))]
struct VariantOpts {
    ident: syn::Ident,
    #[darling(default)]
    key: Option<String>,
}

#[derive(FromDeriveInput)]
#[darling(attributes(message), supports(enum_any))]
struct Opts {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<VariantOpts, ()>,
    #[darling(default)]
    prefix: Option<String>,
}

/// Joins the enum-level prefix and the variant key with a dot.
fn full_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}.{key}"),
        _ => key.to_owned(),
    }
}

/// This derive macro maps every variant of an enum to a message key.
/// You can use it by adding the ```#[derive(AsMessageKey)]``` attribute to your enum.
/// By default, the key is the variant name in ```snake case```.
/// Use ```#[message(key = "your.key")]``` on a variant to pick the key yourself,
/// and ```#[message(prefix = "errors")]``` on the enum to prefix every key with `errors.`.
/// ``` ignore
/// #[derive(AsMessageKey)]
/// #[message(prefix = "errors")]
/// enum Error {
///     InvalidPassword,              // "errors.invalid_password"
///     #[message(key = "unknown_id")]
///     InvalidId(u32),               // "errors.unknown_id"
/// }
/// ```
#[proc_macro_derive(AsMessageKey, attributes(message))]
pub fn derive(input: TokenStream) -> TokenStream {
    use convert_case::{Case, Casing};

    // Parse the input tokens into a syntax tree
    let ast = parse_macro_input!(input as DeriveInput);
    let opts = match Opts::from_derive_input(&ast) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors().into(),
    };

    let variants = match opts.data {
        ast::Data::Enum(variants) => variants,
        ast::Data::Struct(_) => unreachable!("darling only accepts enums here"),
    };
    if variants.is_empty() {
        return syn::Error::new_spanned(&opts.ident, "AsMessageKey needs at least one variant")
            .to_compile_error()
            .into();
    }

    // Generate one match arm per variant
    let mut arms = Vec::with_capacity(variants.len());
    for v in &variants {
        let ident = &v.ident;
        let key = v
            .key
            .clone()
            .unwrap_or_else(|| ident.to_string().to_case(Case::Snake));
        if key.is_empty() {
            return syn::Error::new_spanned(ident, format!("Empty message key for variant {ident}"))
                .to_compile_error()
                .into();
        }
        let key = full_key(opts.prefix.as_deref(), &key);
        arms.push(quote! { Self::#ident { .. } => #key, });
    }

    let ident_name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();
    quote! {
        impl #impl_generics ::message_key::AsMessageKey for #ident_name #ty_generics #where_clause {
            fn message_key(&self) -> ::message_key::MessageKey {
                let key: &'static str = match self {
                    #(#arms)*
                };
                ::message_key::MessageKey::from_derive(key)
            }
        }
    }
    .into()
}
