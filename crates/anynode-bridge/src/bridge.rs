//! Config-driven conversion handle.
//!
//! `Bridge` applies a [`BridgeConfig`]: ingest is depth-guarded, and
//! collection elements are built on the rayon pool once a list reaches
//! `parallel_threshold`. Results match the free functions for any input
//! within the depth limit.
//!
//! Depth counts container levels in the caller's value. A dynamic list
//! handed to the `*_list` entries is one level, so `max_depth == 0` rejects
//! it. A bare scalar promoted to a one-element collection by
//! `vec_from_dynamic`/`set_from_dynamic` adds no level and is accepted at
//! any depth limit.

use std::any::Any;
use std::collections::HashSet;
use std::hash::Hash;

use anynode_core::{
    AnyNodeError, AnyNodeResult, BridgeConfig, Context, Node, NodeInitializable,
};
use rayon::prelude::*;

use crate::dynamic::{self, Dynamic};
use crate::ingest::{ingest_bounded, ingest_nested};

#[derive(Debug, Clone, Default)]
pub struct Bridge {
    config: BridgeConfig,
}

impl Bridge {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Build a bridge from a TOML config string.
    pub fn from_toml(toml_str: &str) -> AnyNodeResult<Self> {
        BridgeConfig::from_toml(toml_str).map(Self::new)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Depth-guarded ingest.
    pub fn ingest(&self, value: &dyn Any) -> AnyNodeResult<Node> {
        ingest_bounded(value, self.config.max_depth)
    }

    /// Depth-guarded typed construction.
    pub fn construct<T: NodeInitializable>(
        &self,
        value: &dyn Any,
        ctx: &dyn Context,
    ) -> AnyNodeResult<T> {
        let node = self.ingest(value)?;
        Ok(T::from_node(node, ctx)?)
    }

    /// Lists go through [`Self::vec_from_dynamic_list`]; any other value is
    /// built as a single element without counting as a container level.
    pub fn vec_from_dynamic<T: NodeInitializable + Send>(
        &self,
        value: &dyn Any,
        ctx: &dyn Context,
    ) -> AnyNodeResult<Vec<T>> {
        match dynamic::as_list(value) {
            Some(list) => self.vec_from_dynamic_list(list, ctx),
            None => Ok(vec![self.construct(value, ctx)?]),
        }
    }

    pub fn vec_from_dynamic_list<T: NodeInitializable + Send>(
        &self,
        list: &[Dynamic],
        ctx: &dyn Context,
    ) -> AnyNodeResult<Vec<T>> {
        self.construct_all(list, ctx)
    }

    /// Set counterpart of [`Self::vec_from_dynamic`].
    pub fn set_from_dynamic<T: NodeInitializable + Eq + Hash + Send>(
        &self,
        value: &dyn Any,
        ctx: &dyn Context,
    ) -> AnyNodeResult<HashSet<T>> {
        match dynamic::as_list(value) {
            Some(list) => self.set_from_dynamic_list(list, ctx),
            None => Ok(HashSet::from([self.construct(value, ctx)?])),
        }
    }

    pub fn set_from_dynamic_list<T: NodeInitializable + Eq + Hash + Send>(
        &self,
        list: &[Dynamic],
        ctx: &dyn Context,
    ) -> AnyNodeResult<HashSet<T>> {
        self.construct_all(list, ctx)
    }

    fn construct_all<T, C>(&self, list: &[Dynamic], ctx: &dyn Context) -> AnyNodeResult<C>
    where
        T: NodeInitializable + Send,
        C: FromIterator<T>,
    {
        let max_depth = self.config.max_depth;
        // The list itself is one container level.
        if max_depth == 0 {
            return Err(AnyNodeError::DepthExceeded { max_depth });
        }
        let parallel = list.len() >= self.config.parallel_threshold;
        let _span =
            crate::collection_span!(std::any::type_name::<T>(), list.len(), parallel).entered();

        let element = |item: &Dynamic| -> AnyNodeResult<T> {
            let node = ingest_nested(&**item, 1, max_depth)?;
            Ok(T::from_node(node, ctx)?)
        };

        if parallel {
            let results: Vec<AnyNodeResult<T>> = list.par_iter().map(element).collect();
            results.into_iter().collect()
        } else {
            list.iter().map(element).collect()
        }
    }
}
