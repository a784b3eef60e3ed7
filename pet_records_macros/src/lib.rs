mod record;

use proc_macro::TokenStream;

/// Derive macro for implementing the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// use pet_records::Record;
///
/// #[derive(Clone, Default, Serialize, Deserialize, Record)]
/// #[record(collection = "cats")]
/// pub struct Cat {
///     pub name: String,
///     #[serde(rename = "bedsOwned")]
///     pub beds_owned: u32,
/// }
/// ```
///
/// - `#[record(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
/// - `#[record(name)]` marks the field used as the display name.
///   If omitted, defaults to a field named `name`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
