//! Static historical return table and its read-only queries.
//!
//! Every accessor takes a plain asset identifier (`"sp500"`, `"bitcoin"`, ...).
//! Unknown identifiers never fail: they behave like an asset without data.

pub mod data;

use serde::Serialize;

use crate::error::LookupError;

/// Lower bound of any selectable year range, independent of the data.
pub const MIN_YEAR: i16 = 1900;

/// Starting level of the synthetic price index used when an asset has no
/// literal price table.
pub const SYNTHETIC_INDEX_BASE: f64 = 100.0;

/// Literal start/end of year price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub start: f64,
    pub end: f64,
}

impl PricePoint {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Where the figures for an asset were taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub ticker: &'static str,
    pub url: &'static str,
}

/// One asset's annual return history.
#[derive(Debug)]
pub struct AssetSeries {
    pub id: &'static str,
    /// Full display name
    pub label: &'static str,
    /// Compact name for tight columns
    pub label_short: &'static str,
    /// Korean display name
    pub label_localized: &'static str,
    /// Unit of the values in `yearly_prices` (index level, USD, ...)
    pub value_unit: &'static str,
    pub source: Option<SourceInfo>,
    /// (year, percent return), ascending by year
    pub returns: &'static [(i16, f64)],
    /// (year, literal prices), ascending by year
    pub prices: Option<&'static [(i16, PricePoint)]>,
}

impl AssetSeries {
    /// Stored return for `year`, `None` when the year has no entry.
    #[must_use]
    pub fn return_for(&self, year: i16) -> Option<f64> {
        self.returns
            .binary_search_by_key(&year, |(y, _)| *y)
            .ok()
            .map(|idx| self.returns[idx].1)
    }

    #[must_use]
    pub fn price_for(&self, year: i16) -> Option<PricePoint> {
        let prices = self.prices?;
        prices
            .binary_search_by_key(&year, |(y, _)| *y)
            .ok()
            .map(|idx| prices[idx].1)
    }

    #[must_use]
    pub fn first_year(&self) -> Option<i16> {
        self.returns.first().map(|(y, _)| *y)
    }

    #[must_use]
    pub fn last_year(&self) -> Option<i16> {
        self.returns.last().map(|(y, _)| *y)
    }
}

/// Asset entry for selection lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssetOption {
    pub id: &'static str,
    pub label: &'static str,
    pub label_short: &'static str,
    pub label_localized: &'static str,
}

/// A year in a requested range; `return_pct` is `None` when there is no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearReturn {
    pub year: i16,
    pub return_pct: Option<f64>,
}

/// A populated year with its opening and closing value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearPrice {
    pub year: i16,
    pub start_price: f64,
    pub end_price: f64,
    pub return_pct: f64,
}

/// All assets in display order.
pub static ASSETS: &[AssetSeries] = &[
    AssetSeries {
        id: "sp500",
        label: "S&P 500",
        label_short: "S&P",
        label_localized: "에스앤피",
        value_unit: "Index",
        source: Some(SourceInfo {
            ticker: "^GSPC",
            url: "https://finance.yahoo.com/quote/%5EGSPC",
        }),
        returns: data::SP_500_RETURNS,
        prices: None,
    },
    AssetSeries {
        id: "nasdaq",
        label: "Nasdaq Composite",
        label_short: "NASDAQ",
        label_localized: "나스닥",
        value_unit: "Index",
        source: Some(SourceInfo {
            ticker: "^IXIC",
            url: "https://finance.yahoo.com/quote/%5EIXIC",
        }),
        returns: data::NASDAQ_RETURNS,
        prices: None,
    },
    AssetSeries {
        id: "schd",
        label: "Schwab U.S. Dividend Equity ETF",
        label_short: "SCHD",
        label_localized: "슈드",
        value_unit: "Price (USD)",
        source: Some(SourceInfo {
            ticker: "SCHD",
            url: "https://finance.yahoo.com/quote/SCHD",
        }),
        returns: data::SCHD_RETURNS,
        prices: None,
    },
    AssetSeries {
        id: "gold",
        label: "Gold",
        label_short: "GOLD",
        label_localized: "금",
        value_unit: "GLD (USD)",
        source: Some(SourceInfo {
            ticker: "GLD",
            url: "https://finance.yahoo.com/quote/GLD",
        }),
        returns: data::GOLD_RETURNS,
        prices: None,
    },
    AssetSeries {
        id: "bitcoin",
        label: "Bitcoin",
        label_short: "BITCOIN",
        label_localized: "비트코인",
        value_unit: "USD",
        source: Some(SourceInfo {
            ticker: "BTC-USD",
            url: "https://finance.yahoo.com/quote/BTC-USD",
        }),
        returns: data::BITCOIN_RETURNS,
        prices: Some(data::BITCOIN_PRICES),
    },
    AssetSeries {
        id: "kospi",
        label: "KOSPI",
        label_short: "KOSPI",
        label_localized: "코스피",
        value_unit: "Index",
        source: Some(SourceInfo {
            ticker: "^KS11",
            url: "https://finance.yahoo.com/quote/%5EKS11",
        }),
        returns: data::KOSPI_RETURNS,
        prices: None,
    },
    AssetSeries {
        id: "kosdaq",
        label: "KOSDAQ",
        label_short: "KOSDAQ",
        label_localized: "코스닥",
        value_unit: "Index",
        source: Some(SourceInfo {
            ticker: "^KQ11",
            url: "https://finance.yahoo.com/quote/%5EKQ11",
        }),
        returns: data::KOSDAQ_RETURNS,
        prices: None,
    },
];

/// Look up an asset by identifier.
#[must_use]
pub fn asset(asset_id: &str) -> Option<&'static AssetSeries> {
    ASSETS.iter().find(|a| a.id == asset_id)
}

/// Like [`asset`], but reports an unknown identifier as an error.
///
/// The query functions below never fail; this is for callers that want to
/// reject a typo before running a calculation.
pub fn require_asset(asset_id: &str) -> Result<&'static AssetSeries, LookupError> {
    asset(asset_id).ok_or_else(|| LookupError::AssetNotFound(asset_id.to_string()))
}

#[must_use]
pub fn min_year() -> i16 {
    MIN_YEAR
}

/// Last year that has data for any asset.
#[must_use]
pub fn max_year() -> i16 {
    ASSETS
        .iter()
        .filter_map(AssetSeries::last_year)
        .fold(MIN_YEAR, i16::max)
}

#[must_use]
pub fn list_assets() -> Vec<AssetOption> {
    ASSETS
        .iter()
        .map(|a| AssetOption {
            id: a.id,
            label: a.label,
            label_short: a.label_short,
            label_localized: a.label_localized,
        })
        .collect()
}

#[must_use]
pub fn return_for(asset_id: &str, year: i16) -> Option<f64> {
    asset(asset_id)?.return_for(year)
}

/// Populated years for an asset, ascending.
#[must_use]
pub fn available_years(asset_id: &str) -> Vec<i16> {
    asset(asset_id)
        .map(|a| a.returns.iter().map(|(y, _)| *y).collect())
        .unwrap_or_default()
}

/// One entry per year in `start_year..=end_year`, including years without data.
///
/// An inverted range yields an empty vector; callers normalize order first.
#[must_use]
pub fn range_of(asset_id: &str, start_year: i16, end_year: i16) -> Vec<YearReturn> {
    let series = asset(asset_id);
    (start_year..=end_year)
        .map(|year| YearReturn {
            year,
            return_pct: series.and_then(|s| s.return_for(year)),
        })
        .collect()
}

/// Opening and closing values for each populated year in the range.
///
/// Assets with a literal price table report those prices for years present in
/// both tables. Other assets get a relative index that starts at
/// [`SYNTHETIC_INDEX_BASE`] in the first populated year and compounds forward.
#[must_use]
pub fn yearly_prices(asset_id: &str, start_year: i16, end_year: i16) -> Vec<YearPrice> {
    let Some(series) = asset(asset_id) else {
        return Vec::new();
    };

    let populated = range_of(asset_id, start_year, end_year)
        .into_iter()
        .filter_map(|r| r.return_pct.map(|pct| (r.year, pct)));

    if series.prices.is_some() {
        return populated
            .filter_map(|(year, return_pct)| {
                series.price_for(year).map(|p| YearPrice {
                    year,
                    start_price: p.start,
                    end_price: p.end,
                    return_pct,
                })
            })
            .collect();
    }

    let mut start_price = SYNTHETIC_INDEX_BASE;
    populated
        .map(|(year, return_pct)| {
            let end_price = start_price * (1.0 + return_pct / 100.0);
            let row = YearPrice {
                year,
                start_price,
                end_price,
                return_pct,
            };
            start_price = end_price;
            row
        })
        .collect()
}

#[must_use]
pub fn source_metadata(asset_id: &str) -> Option<SourceInfo> {
    asset(asset_id)?.source
}

/// Unit label for an asset's values, e.g. `"USD"` or `"Index"`.
#[must_use]
pub fn value_unit(asset_id: &str) -> Option<&'static str> {
    asset(asset_id).map(|a| a.value_unit)
}
