//! Entities as the exchange, masterchef, bar and blocks subgraphs return them.
//!
//! Each entity types the fields this workspace computes with and keeps every
//! other selected field in `extra`, so writing an entity back out reproduces
//! what the query selected.

pub mod bar;
pub mod block;
pub mod factory;
pub mod pair;
pub mod pool;
pub mod token;

// Re-export for easier access
pub use bar::{Bar, BarHistory};
pub use block::Block;
pub use factory::{Bundle, DayData, Factory};
pub use pair::{Pair, PairSnapshot};
pub use pool::{Pool, PoolHistory};
pub use token::Token;

/// Anything addressed by a subgraph `id`.
pub trait Entity {
    /// Returns the subgraph identifier.
    fn id(&self) -> &str;
}

macro_rules! impl_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Entity for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_entity!(
    Bar,
    BarHistory,
    Block,
    Bundle,
    DayData,
    Factory,
    Pair,
    PairSnapshot,
    Pool,
    PoolHistory,
    Token,
);
