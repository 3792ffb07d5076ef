// Procedural macro entry point for case detection.
//
// All of the work happens in `case_detection_core`; this crate only converts between
// compiler token streams and reports failures at the derive site.

use proc_macro::TokenStream;
use proc_macro_error::{abort, proc_macro_error};

/// Derive macro generating a case discriminator, `is_case` and `associated_value` for an
/// enum whose cases carry associated values.
///
/// For `enum Foo` it emits, with the same visibility as `Foo`:
///
/// - `enum FooCase`, one payload-free variant per case of `Foo`;
/// - `Foo::is_case(&self, candidate: FooCase) -> bool`;
/// - `Foo::associated_value::<T>(&self) -> Option<T>`, returning the current case's
///   associated value (or a tuple of them) when it has type `T`.
///
/// # Requirements
///
/// The enum must not be generic, and every associated value type must be `Clone + 'static`:
/// `associated_value` clones the payload out. A non-`Clone` payload (say `std::fs::File`)
/// makes the whole expansion fail to compile, `is_case` included.
///
/// # Attributes
///
/// - `#[case_detection(crate = "path")]`: path to the `case_detection` crate, for re-exports
///
/// # Example
///
/// ```ignore
/// #[derive(CaseDetection)]
/// pub enum Message {
///     Text(String),
///     Move(i32, i32),
///     Quit,
/// }
///
/// let msg = Message::Move(1, 2);
/// assert!(msg.is_case(MessageCase::Move));
/// assert_eq!(msg.associated_value::<(i32, i32)>(), Some((1, 2)));
/// assert_eq!(msg.associated_value::<String>(), None);
/// ```
#[proc_macro_derive(CaseDetection, attributes(case_detection))]
#[proc_macro_error]
pub fn case_detection(item: TokenStream) -> TokenStream {
    match case_detection_core::expand(item.into()) {
        Ok(ts) => ts.into(),
        Err(e) => abort!(e.span(), "{}", e),
    }
}
