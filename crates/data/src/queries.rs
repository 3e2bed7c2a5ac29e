//! Query documents sent to the subgraphs.
//!
//! A [`Query`] doubles as the cache key prefix: page loaders write their
//! assembled result under the query that fetched the primary entities.

use crate::config::ClientName;

/// A named GraphQL document bound to the subgraph that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    /// Operation name.
    pub name: &'static str,
    /// GraphQL document.
    pub document: &'static str,
    /// Target subgraph.
    pub client: ClientName,
}

impl Query {
    const fn new(name: &'static str, client: ClientName, document: &'static str) -> Self {
        Self {
            name,
            document,
            client,
        }
    }
}

// Bar

pub const BAR_PAGE: Query = Query::new(
    "barPageQuery",
    ClientName::Bar,
    r#"
query barPageQuery($id: String! = "0x8798249c2e607446efb7ad49ec89dd1865ff4272") {
  bar(id: $id) {
    id
    totalSupply
    ratio
    xSushiMinted
    xSushiBurned
    sushiStaked
    sushiStakedUSD
    sushiHarvested
    sushiHarvestedUSD
    xSushiAge
    xSushiAgeDestroyed
  }
  histories(first: 1000, orderBy: date, orderDirection: asc) {
    id
    date
    timeframe
    sushiStaked
    sushiStakedUSD
    sushiHarvested
    sushiHarvestedUSD
    xSushiAge
    xSushiAgeDestroyed
    xSushiMinted
    xSushiBurned
    xSushiSupply
    ratio
  }
}
"#,
);

// Exchange: factory, day data, tokens, prices

pub const FACTORY: Query = Query::new(
    "factoryQuery",
    ClientName::Exchange,
    r#"
query factoryQuery($id: ID! = "0xc0aee478e3658e2610c5f7a4a2e1777ce9e4f2ac") {
  factory(id: $id) {
    id
    volumeUSD
    volumeETH
    untrackedVolumeUSD
    liquidityUSD
    liquidityETH
    txCount
    pairCount
    tokenCount
    userCount
  }
}
"#,
);

pub const FACTORY_TIME_TRAVEL: Query = Query::new(
    "factoryTimeTravelQuery",
    ClientName::Exchange,
    r#"
query factoryTimeTravelQuery(
  $id: ID! = "0xc0aee478e3658e2610c5f7a4a2e1777ce9e4f2ac"
  $block: Block_height!
) {
  factory(id: $id, block: $block) {
    id
    volumeUSD
    volumeETH
    untrackedVolumeUSD
    liquidityUSD
    liquidityETH
    txCount
    pairCount
    tokenCount
    userCount
  }
}
"#,
);

pub const DAY_DATAS: Query = Query::new(
    "dayDatasQuery",
    ClientName::Exchange,
    r#"
query dayDatasQuery($first: Int! = 1000, $date: Int! = 0) {
  dayDatas(first: $first, orderBy: date, orderDirection: desc, where: { date_gt: $date }) {
    id
    date
    volumeETH
    volumeUSD
    untrackedVolume
    liquidityETH
    liquidityUSD
    txCount
  }
}
"#,
);

pub const TOKEN: Query = Query::new(
    "tokenQuery",
    ClientName::Exchange,
    r#"
query tokenQuery($id: String!) {
  token(id: $id) {
    id
    symbol
    name
    decimals
    totalSupply
    volume
    volumeUSD
    untrackedVolumeUSD
    txCount
    liquidity
    derivedETH
  }
}
"#,
);

pub const ETH_PRICE: Query = Query::new(
    "ethPriceQuery",
    ClientName::Exchange,
    r#"
query ethPriceQuery($id: Int! = 1) {
  bundles(id: $id) {
    id
    ethPrice
  }
}
"#,
);

// Masterchef pools

pub const POOL: Query = Query::new(
    "poolQuery",
    ClientName::MasterChef,
    r#"
query poolQuery($id: String!) {
  pool(id: $id) {
    id
    pair
    allocPoint
    lastRewardBlock
    accSushiPerShare
    balance
    userCount
    owner {
      id
      sushiPerBlock
      totalAllocPoint
    }
  }
}
"#,
);

pub const POOL_HISTORY: Query = Query::new(
    "poolHistoryQuery",
    ClientName::MasterChef,
    r#"
query poolHistoryQuery($id: String!) {
  poolHistories(first: 1000, where: { pool: $id }, orderBy: block, orderDirection: asc) {
    id
    slpAge
    slpAgeRemoved
    userCount
    slpDeposited
    slpWithdrawn
    slpBalance
    tvl
    block
    timestamp
    entryUSD
    exitUSD
    sushiHarvested
    sushiHarvestedUSD
  }
}
"#,
);

/// Shape of the assembled pool page. Only used as a cache key, never sent.
pub const POOL_PAGE: Query = Query::new(
    "poolPageQuery",
    ClientName::MasterChef,
    r#"
query poolPageQuery {
  pool {
    id
    pair
    liquidityPair
  }
  poolHistories {
    id
  }
}
"#,
);

// Exchange: pairs

pub const PAIR: Query = Query::new(
    "pairQuery",
    ClientName::Exchange,
    r#"
query pairQuery($id: String!) {
  pair(id: $id) {
    id
    name
    token0 { id name symbol totalSupply derivedETH }
    token1 { id name symbol totalSupply derivedETH }
    reserve0
    reserve1
    reserveUSD
    totalSupply
    trackedReserveETH
    reserveETH
    volumeUSD
    untrackedVolumeUSD
    token0Price
    token1Price
    createdAtTimestamp
    txCount
  }
}
"#,
);

pub const PAIR_TIME_TRAVEL: Query = Query::new(
    "pairTimeTravelQuery",
    ClientName::Exchange,
    r#"
query pairTimeTravelQuery($id: String!, $block: Block_height!) {
  pair(id: $id, block: $block) {
    id
    reserveUSD
    trackedReserveETH
    volumeUSD
    untrackedVolumeUSD
    txCount
  }
}
"#,
);

pub const PAIRS: Query = Query::new(
    "pairsQuery",
    ClientName::Exchange,
    r#"
query pairsQuery($first: Int! = 1000, $orderBy: String! = "trackedReserveETH", $orderDirection: String! = "desc") {
  pairs(first: $first, orderBy: $orderBy, orderDirection: $orderDirection) {
    id
    name
    token0 { id name symbol totalSupply derivedETH }
    token1 { id name symbol totalSupply derivedETH }
    reserve0
    reserve1
    reserveUSD
    totalSupply
    trackedReserveETH
    reserveETH
    volumeUSD
    untrackedVolumeUSD
    token0Price
    token1Price
    createdAtTimestamp
    txCount
  }
}
"#,
);

pub const PAIRS_TIME_TRAVEL: Query = Query::new(
    "pairsTimeTravelQuery",
    ClientName::Exchange,
    r#"
query pairsTimeTravelQuery($first: Int! = 1000, $pairAddresses: [Bytes]!, $block: Block_height!) {
  pairs(
    first: $first
    block: $block
    orderBy: trackedReserveETH
    orderDirection: desc
    where: { id_in: $pairAddresses }
  ) {
    id
    reserveUSD
    trackedReserveETH
    volumeUSD
    untrackedVolumeUSD
    txCount
  }
}
"#,
);

pub const TOKEN_PAIRS: Query = Query::new(
    "tokenPairsQuery",
    ClientName::Exchange,
    r#"
query tokenPairsQuery($id: String!) {
  pairs0: pairs(first: 1000, orderBy: reserveUSD, orderDirection: desc, where: { token0: $id }) {
    id
    name
    token0 { id name symbol totalSupply derivedETH }
    token1 { id name symbol totalSupply derivedETH }
    reserveUSD
    volumeUSD
    txCount
  }
  pairs1: pairs(first: 1000, orderBy: reserveUSD, orderDirection: desc, where: { token1: $id }) {
    id
    name
    token0 { id name symbol totalSupply derivedETH }
    token1 { id name symbol totalSupply derivedETH }
    reserveUSD
    volumeUSD
    txCount
  }
}
"#,
);

pub const GAINERS: Query = Query::new(
    "gainersQuery",
    ClientName::Exchange,
    r#"
query gainersQuery($first: Int! = 1000) {
  pairs(first: $first, orderBy: trackedReserveETH, orderDirection: desc) {
    id
    name
    token0 { id name symbol }
    token1 { id name symbol }
    reserveUSD
    volumeUSD
    untrackedVolumeUSD
    txCount
  }
}
"#,
);

pub const LOSERS: Query = Query::new(
    "losersQuery",
    ClientName::Exchange,
    r#"
query losersQuery($first: Int! = 1000) {
  pairs(first: $first, orderBy: trackedReserveETH, orderDirection: desc) {
    id
    name
    token0 { id name symbol }
    token1 { id name symbol }
    reserveUSD
    volumeUSD
    untrackedVolumeUSD
    txCount
  }
}
"#,
);

// Blocks

pub const BLOCKS: Query = Query::new(
    "blocksQuery",
    ClientName::Blocks,
    r#"
query blocksQuery($start: Int!, $end: Int!) {
  blocks(
    first: 1
    orderBy: timestamp
    orderDirection: asc
    where: { timestamp_gt: $start, timestamp_lt: $end }
  ) {
    id
    number
    timestamp
  }
}
"#,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_match_documents() {
        for query in [
            BAR_PAGE,
            FACTORY,
            FACTORY_TIME_TRAVEL,
            DAY_DATAS,
            TOKEN,
            ETH_PRICE,
            POOL,
            POOL_HISTORY,
            POOL_PAGE,
            PAIR,
            PAIR_TIME_TRAVEL,
            PAIRS,
            PAIRS_TIME_TRAVEL,
            TOKEN_PAIRS,
            GAINERS,
            LOSERS,
            BLOCKS,
        ] {
            assert!(
                query.document.contains(&format!("query {}", query.name)),
                "{} does not declare its operation name",
                query.name
            );
        }
    }

    #[test]
    fn test_time_travel_documents_take_block() {
        for query in [FACTORY_TIME_TRAVEL, PAIR_TIME_TRAVEL, PAIRS_TIME_TRAVEL] {
            assert!(query.document.contains("$block: Block_height!"));
        }
    }
}
