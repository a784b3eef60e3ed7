use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let collection = extract_collection(&input);

    let name_field = match extract_name_field(&input) {
        Some(field) => field,
        None => {
            return syn::Error::new(
                Span::call_site(),
                "Record derive: no field marked with #[record(name)] and no field named `name`",
            )
            .to_compile_error()
            .into();
        }
    };

    let expanded = quote! {
        impl pet_records::Record for #name {
            const COLLECTION: &'static str = #collection;

            fn name(&self) -> &str {
                &self.#name_field
            }
        }
    };

    TokenStream::from(expanded)
}

fn extract_collection(input: &DeriveInput) -> String {
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        let mut collection = None;
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("collection") {
                let value: LitStr = meta.value()?.parse()?;
                collection = Some(value.value());
            }
            Ok(())
        });

        if let Some(c) = collection {
            return c;
        }
    }

    // snake_case struct name + "s"
    let name = input.ident.to_string();
    format!("{}s", to_snake_case(&name))
}

fn extract_name_field(input: &DeriveInput) -> Option<Ident> {
    let Data::Struct(data_struct) = &input.data else {
        return None;
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return None;
    };

    for field in &fields.named {
        for attr in &field.attrs {
            if !attr.path().is_ident("record") {
                continue;
            }
            let mut is_name = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    is_name = true;
                }
                Ok(())
            });
            if is_name {
                return field.ident.clone();
            }
        }
    }

    fields
        .named
        .iter()
        .filter_map(|field| field.ident.clone())
        .find(|ident| ident == "name")
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
