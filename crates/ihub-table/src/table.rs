use crate::format::{self, Trend};
use crate::render::{self, Align, Cell};
use crate::schema::Record;
use crate::sort::{Direction, SortField, SortState};

/// A sortable column of the crypto table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub field: SortField,
    pub label: &'static str,
    pub align: Align,
}

pub const COLUMNS: [Column; 6] = [
    Column { field: SortField::MarketCapRank, label: "#", align: Align::Left },
    Column { field: SortField::Name, label: "Name", align: Align::Left },
    Column { field: SortField::CurrentPrice, label: "Price", align: Align::Right },
    Column { field: SortField::PriceChangePercentage24h, label: "24h", align: Align::Right },
    Column { field: SortField::TotalVolume, label: "24h Volume", align: Align::Right },
    Column { field: SortField::MarketCap, label: "Market Cap", align: Align::Right },
];

/// Header cell state: which column is active and which way it points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCell {
    pub field: SortField,
    pub label: &'static str,
    pub active: bool,
    /// Inactive columns show the ascending arrow.
    pub direction: Direction,
}

impl HeaderCell {
    pub fn title(&self) -> String {
        if !self.active {
            return self.label.to_string();
        }
        match self.direction {
            Direction::Ascending => format!("{} ▲", self.label),
            Direction::Descending => format!("{} ▼", self.label),
        }
    }
}

/// Display strings for one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub rank: String,
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
    pub volume: String,
    pub market_cap: String,
}

impl From<&Record> for Row {
    fn from(record: &Record) -> Self {
        Row {
            rank: record.market_cap_rank.to_string(),
            name: record.name.clone(),
            symbol: record.symbol.to_uppercase(),
            image: record.image.clone(),
            price: format!("${}", format::price(record.current_price)),
            change: format::percentage(record.price_change_percentage_24h),
            trend: Trend::of(record.price_change_percentage_24h),
            volume: format!("${}", format::grouped(record.total_volume)),
            market_cap: format!("${}", format::grouped(record.market_cap)),
        }
    }
}

/// Crypto market table: an immutable snapshot plus the current sort state.
#[derive(Debug, Clone, Default)]
pub struct SortableTable {
    records: Vec<Record>,
    state: SortState,
}

impl SortableTable {
    pub fn new(records: Vec<Record>) -> Self {
        SortableTable {
            records,
            state: SortState::default(),
        }
    }

    /// The snapshot as received.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Activate a column header.
    pub fn request_sort(&mut self, field: SortField) {
        self.state.request_sort(field);
        log::trace!("table sorted by {} ({})", self.state.order_by, self.state.direction);
    }

    pub fn view(&self) -> Vec<&Record> {
        self.state.apply(&self.records)
    }

    pub fn header(&self) -> Vec<HeaderCell> {
        COLUMNS
            .iter()
            .map(|column| {
                let active = column.field == self.state.order_by;
                HeaderCell {
                    field: column.field,
                    label: column.label,
                    active,
                    direction: if active {
                        self.state.direction
                    } else {
                        Direction::Ascending
                    },
                }
            })
            .collect()
    }

    pub fn rows(&self) -> Vec<Row> {
        self.view().into_iter().map(Row::from).collect()
    }

    /// Text rendering of the current view, changes coloured by trend.
    pub fn render(&self) -> String {
        let header: Vec<Cell> = self
            .header()
            .iter()
            .zip(COLUMNS.iter())
            .map(|(cell, column)| match column.align {
                Align::Left => Cell::left(cell.title()),
                Align::Right => Cell::right(cell.title()),
            })
            .collect();

        let body: Vec<Vec<Cell>> = self
            .rows()
            .into_iter()
            .map(|row| {
                vec![
                    Cell::left(row.rank),
                    Cell::left(format!("{} {}", row.name, row.symbol)),
                    Cell::right(row.price),
                    Cell::right(row.change).with_trend(row.trend),
                    Cell::right(row.volume),
                    Cell::right(row.market_cap),
                ]
            })
            .collect();

        render::grid(&header, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<Record> {
        vec![
            Record {
                name: "Ethereum".to_string(),
                symbol: "eth".to_string(),
                image: "https://example.com/eth.png".to_string(),
                current_price: 3_845.12,
                market_cap: 463_000_000_000.0,
                market_cap_rank: 2,
                total_volume: 28_000_000_000.0,
                price_change_percentage_24h: 2.5,
            },
            Record {
                name: "Pepe".to_string(),
                symbol: "pepe".to_string(),
                image: "https://example.com/pepe.png".to_string(),
                current_price: 0.0000001234,
                market_cap: 8_500_000_000.0,
                market_cap_rank: 25,
                total_volume: 1_900_000_000.0,
                price_change_percentage_24h: -3.456,
            },
            Record {
                name: "Bitcoin".to_string(),
                symbol: "btc".to_string(),
                image: "https://example.com/btc.png".to_string(),
                current_price: 97_123.0,
                market_cap: 1_923_000_000_000.0,
                market_cap_rank: 1,
                total_volume: 45_678_901_234.0,
                price_change_percentage_24h: 0.0,
            },
        ]
    }

    #[test]
    fn rows_start_in_rank_order() {
        let table = SortableTable::new(snapshot());
        let rows = table.rows();
        let ranks: Vec<&str> = rows.iter().map(|r| r.rank.as_str()).collect();
        assert_eq!(ranks, vec!["1", "2", "25"]);
    }

    #[test]
    fn rows_are_formatted() {
        let table = SortableTable::new(snapshot());
        let rows = table.rows();

        assert_eq!(rows[0].symbol, "BTC");
        assert_eq!(rows[0].price, "$97,123");
        assert_eq!(rows[0].change, "0.00%");
        assert_eq!(rows[0].trend, Trend::Up);
        assert_eq!(rows[0].volume, "$45,678,901,234");

        assert_eq!(rows[2].price, "$0.00000012");
        assert_eq!(rows[2].change, "-3.46%");
        assert_eq!(rows[2].trend, Trend::Down);
        assert_eq!(rows[2].market_cap, "$8,500,000,000");
    }

    #[test]
    fn header_tracks_active_column() {
        let mut table = SortableTable::new(snapshot());
        table.request_sort(SortField::CurrentPrice);
        table.request_sort(SortField::CurrentPrice);

        let header = table.header();
        let active: Vec<&HeaderCell> = header.iter().filter(|h| h.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].field, SortField::CurrentPrice);
        assert_eq!(active[0].title(), "Price ▼");
        assert_eq!(header[0].title(), "#");
        assert_eq!(header[0].direction, Direction::Ascending);
    }

    #[test]
    fn sorting_leaves_snapshot_alone() {
        let mut table = SortableTable::new(snapshot());
        table.request_sort(SortField::Name);
        let names: Vec<String> = table.rows().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Bitcoin", "Ethereum", "Pepe"]);
        assert_eq!(table.records(), snapshot().as_slice());
    }

    #[test]
    fn empty_table_renders_header_only() {
        colored::control::set_override(false);
        let table = SortableTable::new(Vec::new());
        assert!(table.rows().is_empty());
        let text = table.render();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("# ▲"));
    }

    #[test]
    fn render_lists_rows_in_view_order() {
        colored::control::set_override(false);
        let mut table = SortableTable::new(snapshot());
        table.request_sort(SortField::PriceChangePercentage24h);
        let text = table.render();
        let body: Vec<&str> = text.lines().skip(2).collect();
        assert_eq!(body.len(), 3);
        assert!(body[0].starts_with("25"));
        assert!(body[0].contains("Pepe PEPE"));
        assert!(body[1].starts_with("1 "));
        assert!(body[2].starts_with("2 "));
        assert!(text.lines().next().unwrap_or_default().contains("24h ▲"));
    }
}
