//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A price of `29.99` is the same price wherever it appears.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `Price(29.99)`, a category label
/// - **Entity**: `Product { id: ProductId("1"), .. }`: same id, same product
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
