//! Vec and HashSet construction from dynamic values.
//!
//! Each container kind has two entry points:
//!
//! - `*_from_dynamic` takes a single dynamic value. A list is used as-is;
//!   anything else is treated as a one-element list.
//! - `*_from_dynamic_list` takes the list directly.
//!
//! Elements are built in order through [`construct`] with the shared
//! context. The first element that fails aborts the whole conversion with
//! its error and nothing after it is constructed.
//!
//! The `par_*` variants build elements on the rayon pool. They return the
//! same value or the same lowest-index error as the sequential versions,
//! though elements after a failure may already have been constructed.

use std::any::Any;
use std::collections::HashSet;
use std::hash::Hash;

use anynode_core::{Context, ConversionError, NodeInitializable};
use rayon::prelude::*;

use crate::construct::construct;
use crate::dynamic::{self, Dynamic};

fn construct_each<'a, T, C, I>(items: I, ctx: &dyn Context) -> Result<C, ConversionError>
where
    T: NodeInitializable,
    C: FromIterator<T>,
    I: IntoIterator<Item = &'a dyn Any>,
{
    items
        .into_iter()
        .map(|item| construct::<T>(item, ctx))
        .collect()
}

fn par_construct_each<T, C>(list: &[Dynamic], ctx: &dyn Context) -> Result<C, ConversionError>
where
    T: NodeInitializable + Send,
    C: FromIterator<T>,
{
    let results: Vec<Result<T, ConversionError>> = list
        .par_iter()
        .map(|item| construct::<T>(&**item, ctx))
        .collect();
    // Sequential pass so the lowest-index error wins.
    results.into_iter().collect()
}

fn elements(list: &[Dynamic]) -> impl Iterator<Item = &dyn Any> {
    list.iter().map(|item| &**item as &dyn Any)
}

/// Build a `Vec<T>` from a list or a bare value.
pub fn vec_from_dynamic<T: NodeInitializable>(
    value: &dyn Any,
    ctx: &dyn Context,
) -> Result<Vec<T>, ConversionError> {
    match dynamic::as_list(value) {
        Some(list) => vec_from_dynamic_list(list, ctx),
        None => construct_each::<T, _, _>(std::iter::once(value), ctx),
    }
}

/// Build a `Vec<T>` from a dynamic list, preserving order.
pub fn vec_from_dynamic_list<T: NodeInitializable>(
    list: &[Dynamic],
    ctx: &dyn Context,
) -> Result<Vec<T>, ConversionError> {
    let _span = crate::collection_span!(std::any::type_name::<T>(), list.len(), false).entered();
    construct_each::<T, _, _>(elements(list), ctx)
}

/// Build a `HashSet<T>` from a list or a bare value.
pub fn set_from_dynamic<T: NodeInitializable + Eq + Hash>(
    value: &dyn Any,
    ctx: &dyn Context,
) -> Result<HashSet<T>, ConversionError> {
    match dynamic::as_list(value) {
        Some(list) => set_from_dynamic_list(list, ctx),
        None => construct_each::<T, _, _>(std::iter::once(value), ctx),
    }
}

/// Build a `HashSet<T>` from a dynamic list. Elements equal after
/// construction collapse.
pub fn set_from_dynamic_list<T: NodeInitializable + Eq + Hash>(
    list: &[Dynamic],
    ctx: &dyn Context,
) -> Result<HashSet<T>, ConversionError> {
    let _span = crate::collection_span!(std::any::type_name::<T>(), list.len(), false).entered();
    construct_each::<T, _, _>(elements(list), ctx)
}

/// Parallel [`vec_from_dynamic_list`].
pub fn par_vec_from_dynamic_list<T: NodeInitializable + Send>(
    list: &[Dynamic],
    ctx: &dyn Context,
) -> Result<Vec<T>, ConversionError> {
    let _span = crate::collection_span!(std::any::type_name::<T>(), list.len(), true).entered();
    par_construct_each::<T, _>(list, ctx)
}

/// Parallel [`set_from_dynamic_list`].
pub fn par_set_from_dynamic_list<T: NodeInitializable + Eq + Hash + Send>(
    list: &[Dynamic],
    ctx: &dyn Context,
) -> Result<HashSet<T>, ConversionError> {
    let _span = crate::collection_span!(std::any::type_name::<T>(), list.len(), true).entered();
    par_construct_each::<T, _>(list, ctx)
}
