//! Column sorting for the crypto market table.
//!
//! Sorting never touches the record set it is given: [`sorted_view`] collects
//! references into a fresh vector and stable-sorts that, so rows that compare
//! equal keep the order they arrived in, whichever direction is active.

use crate::schema::Record;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Value a row is ordered by.
///
/// Numeric and text keys never meet in one comparison; a column always yields
/// the same variant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum SortKey<'a> {
    Number(f64),
    Text(&'a str),
}

/// Picks the sort key out of a row.
pub type Selector<T> = for<'r> fn(&'r T) -> SortKey<'r>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "asc"),
            Direction::Descending => write!(f, "desc"),
        }
    }
}

/// Build a comparator over whatever `select` picks out of a row.
///
/// `b < a` orders `a` after `b`, `b > a` orders it before, and anything else
/// (ties, NaN) is treated as equal. Descending only reverses the result.
pub fn comparator<T>(select: Selector<T>, direction: Direction) -> impl Fn(&T, &T) -> Ordering {
    move |a: &T, b: &T| {
        let (a, b) = (select(a), select(b));
        let ordering = if b < a {
            Ordering::Greater
        } else if b > a {
            Ordering::Less
        } else {
            Ordering::Equal
        };
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// New ordered view over `items`; the slice itself is left as is.
pub fn sorted_view<'a, T, F>(items: &'a [T], compare: F) -> Vec<&'a T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut view: Vec<&T> = items.iter().collect();
    // `sort_by` is stable
    view.sort_by(|a, b| compare(a, b));
    view
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Sortable fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    MarketCapRank,
    Name,
    Symbol,
    CurrentPrice,
    MarketCap,
    TotalVolume,
    PriceChangePercentage24h,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::MarketCapRank,
        SortField::Name,
        SortField::Symbol,
        SortField::CurrentPrice,
        SortField::MarketCap,
        SortField::TotalVolume,
        SortField::PriceChangePercentage24h,
    ];

    pub fn selector(self) -> Selector<Record> {
        match self {
            SortField::MarketCapRank => rank,
            SortField::Name => name,
            SortField::Symbol => symbol,
            SortField::CurrentPrice => price,
            SortField::MarketCap => market_cap,
            SortField::TotalVolume => volume,
            SortField::PriceChangePercentage24h => change,
        }
    }

    /// Field name as it appears in the JSON record.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::MarketCapRank => "market_cap_rank",
            SortField::Name => "name",
            SortField::Symbol => "symbol",
            SortField::CurrentPrice => "current_price",
            SortField::MarketCap => "market_cap",
            SortField::TotalVolume => "total_volume",
            SortField::PriceChangePercentage24h => "price_change_percentage_24h",
        }
    }
}

fn rank(r: &Record) -> SortKey<'_> {
    SortKey::Number(f64::from(r.market_cap_rank))
}

fn name(r: &Record) -> SortKey<'_> {
    SortKey::Text(&r.name)
}

fn symbol(r: &Record) -> SortKey<'_> {
    SortKey::Text(&r.symbol)
}

fn price(r: &Record) -> SortKey<'_> {
    SortKey::Number(r.current_price)
}

fn market_cap(r: &Record) -> SortKey<'_> {
    SortKey::Number(r.market_cap)
}

fn volume(r: &Record) -> SortKey<'_> {
    SortKey::Number(r.total_volume)
}

fn change(r: &Record) -> SortKey<'_> {
    SortKey::Number(r.price_change_percentage_24h)
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sort field `{0}`; expected one of: rank, name, symbol, price, market_cap, volume, change")]
pub struct UnknownField(pub String);

impl FromStr for SortField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.trim().to_ascii_lowercase().as_str() {
            "#" | "rank" | "market_cap_rank" => SortField::MarketCapRank,
            "name" => SortField::Name,
            "symbol" => SortField::Symbol,
            "price" | "current_price" => SortField::CurrentPrice,
            "cap" | "market_cap" => SortField::MarketCap,
            "volume" | "total_volume" => SortField::TotalVolume,
            "24h" | "change" | "price_change_percentage_24h" => SortField::PriceChangePercentage24h,
            _ => return Err(UnknownField(s.to_string())),
        };
        Ok(field)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// Which column the table is ordered by, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub order_by: SortField,
    pub direction: Direction,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            order_by: SortField::MarketCapRank,
            direction: Direction::Ascending,
        }
    }
}

impl SortState {
    /// Column header activation: the active column flips direction, any other
    /// column becomes active in ascending order.
    pub fn request_sort(&mut self, field: SortField) {
        if self.order_by == field {
            self.direction = self.direction.flip();
        } else {
            self.order_by = field;
            self.direction = Direction::Ascending;
        }
    }

    pub fn comparator(&self) -> impl Fn(&Record, &Record) -> Ordering {
        comparator(self.order_by.selector(), self.direction)
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        sorted_view(records, self.comparator())
    }
}
