//! Case detection for enums with associated values.
//!
//! `#[derive(CaseDetection)]` on an enum `Foo` generates a payload-free discriminator
//! `FooCase`, a predicate `Foo::is_case` and a typed accessor `Foo::associated_value`.
//!
//! ```
//! use case_detection::CaseDetection;
//!
//! #[derive(CaseDetection)]
//! enum Shape {
//!     Circle(f64),
//!     Rect(f64, f64),
//!     Empty,
//! }
//!
//! let shape = Shape::Rect(2.0, 3.0);
//! assert!(shape.is_case(ShapeCase::Rect));
//! assert!(!shape.is_case(ShapeCase::Circle));
//! assert_eq!(shape.associated_value::<(f64, f64)>(), Some((2.0, 3.0)));
//! assert_eq!(shape.associated_value::<f64>(), None);
//! assert_eq!(Shape::Empty.associated_value::<f64>(), None);
//! ```
//!
//! The derive needs a non-generic enum whose associated value types are all
//! `Clone + 'static`, since `associated_value` returns clones of the payload.

use std::any::Any;

pub use case_detection_macros::CaseDetection;

/// Moves `value` out as a `T` if it has exactly that type.
///
/// This is the fallible downcast behind the generated `associated_value`. A mismatch
/// yields `None`, never a panic or a reinterpretation.
///
/// ```
/// assert_eq!(case_detection::extract::<u8, _>(7u8), Some(7));
/// assert_eq!(case_detection::extract::<u16, _>(7u8), None);
/// ```
pub fn extract<T: 'static, V: 'static>(value: V) -> Option<T> {
    let mut slot = Some(value);
    (&mut slot as &mut dyn Any)
        .downcast_mut::<Option<T>>()
        .and_then(Option::take)
}
