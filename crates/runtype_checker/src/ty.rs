//! Marker types naming what a checker recognizes.
//!
//! Markers are never instantiated. They tag [`Checker`](crate::Checker) and
//! [`Narrowed`](crate::Narrowed) so that the accessors available after a
//! successful check follow from how the checker was built.

use std::convert::Infallible;
use std::marker::PhantomData;

/// Recognizes nothing.
pub enum Never {}
/// Recognizes everything.
pub enum Any {}
/// Recognizes something not described at the type level (custom or erased checkers).
pub enum Unknown {}
pub enum BigInt {}
pub enum Boolean {}
pub enum Function {}
pub enum Null {}
pub enum Number {}
/// Arrays and objects.
pub enum Object {}
pub enum String {}
pub enum Symbol {}
pub enum Undefined {}
/// A single primitive literal.
pub enum Literal {}
/// One of an enum's values.
pub enum Enum {}
/// An instance of a class or of one of its subclasses.
pub enum Instance {}
/// An object with a fixed set of checked keys.
pub enum Shape {}

/// An array whose elements are all `T`.
pub struct Array<T>(Infallible, PhantomData<fn() -> T>);
/// An object whose keys are all `K` and values all `V`.
pub struct Record<K, V>(Infallible, PhantomData<fn() -> (K, V)>);
/// `T` or null.
pub struct Nullable<T>(Infallible, PhantomData<fn() -> T>);
/// `T` or undefined.
pub struct Optional<T>(Infallible, PhantomData<fn() -> T>);
/// `A` or `B`.
pub struct Union<A, B>(Infallible, PhantomData<fn() -> (A, B)>);
/// Both `A` and `B`.
pub struct Intersection<A, B>(Infallible, PhantomData<fn() -> (A, B)>);
