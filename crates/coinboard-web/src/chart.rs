use chrono::NaiveDate;
use coinboard_data::{Crypto, PriceFrame, PriceRow, ALL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

pub const NO_COIN_SELECTED: &str = "No coin selected.";
pub const NO_DATA: &str = "No data available to plot.";
pub const TITLE: &str = "Adjusted closing price over time!";

const PLOT_BGCOLOR: &str = "#202630";
const PAPER_BGCOLOR: &str = "#272e40";
const FONT_COLOR: &str = "#58ecba";

/// The six chart flavours offered by the dashboard.
#[derive(Serialize, Deserialize, ToSchema, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Scatter,
    Box,
    LinePct,
    BarPct,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Scatter,
        ChartKind::Box,
        ChartKind::LinePct,
        ChartKind::BarPct,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
            ChartKind::LinePct => "line-pct",
            ChartKind::BarPct => "bar-pct",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line chart",
            ChartKind::Bar => "Bar chart",
            ChartKind::Scatter => "Scatter chart",
            ChartKind::Box => "Box plot",
            ChartKind::LinePct => "Line chart PCT",
            ChartKind::BarPct => "Bar chart PCT",
        }
    }

    fn is_bar(&self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::BarPct)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Plotly figure description
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    pub name: &'static str,
    pub x: Vec<Point>,
    pub y: Vec<Option<f64>>,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Marker>,
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Scatter,
    Bar,
    Box,
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Markers,
}

/// An x-axis value: a day, a month number, or a ticker.
#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum Point {
    Date(NaiveDate),
    Month(u32),
    Label(&'static str),
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    pub color: &'static str,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub title: Title,
}

impl Figure {
    /// Empty chart carrying nothing but a message.
    pub fn placeholder(message: &'static str) -> Self {
        Figure {
            data: vec![],
            layout: Layout {
                title: Title {
                    text: message,
                    font: None,
                },
                ..Default::default()
            },
        }
    }

    pub fn title(&self) -> &'static str {
        self.layout.title.text
    }

    /// Tickers drawn, in trace order, without repeats.
    pub fn cryptos(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = vec![];
        for trace in &self.data {
            if !names.contains(&trace.name) {
                names.push(trace.name);
            }
        }
        names
    }
}

impl Layout {
    fn dashboard(kind: ChartKind) -> Self {
        let (x, y) = match kind {
            ChartKind::Line | ChartKind::Scatter => ("Date", "Adj Close"),
            ChartKind::Bar => ("Month", "Adj Close"),
            ChartKind::Box => ("Crypto", "Adj Close"),
            ChartKind::LinePct => ("Date", "Percent"),
            ChartKind::BarPct => ("Month", "Percent"),
        };
        let axis = |text| {
            Some(AxisLayout {
                title: Title { text, font: None },
            })
        };

        Layout {
            title: Title {
                text: TITLE,
                font: Some(Font {
                    size: Some(22),
                    color: None,
                }),
            },
            plot_bgcolor: Some(PLOT_BGCOLOR),
            paper_bgcolor: Some(PAPER_BGCOLOR),
            font: Some(Font {
                size: None,
                color: Some(FONT_COLOR),
            }),
            barmode: kind.is_bar().then_some("group"),
            xaxis: axis(x),
            yaxis: axis(y),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Selection
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// Build the chart for a ticker selection (`None`, [`ALL`] or a symbol) and a
/// chart kind.
pub fn select(frame: &PriceFrame, crypto: Option<&str>, kind: ChartKind) -> Figure {
    let Some(selected) = crypto else {
        return Figure::placeholder(NO_COIN_SELECTED);
    };

    let rows: Vec<&PriceRow> = frame
        .rows()
        .iter()
        .filter(|row| selected == ALL || row.crypto.symbol() == selected)
        .collect();

    if rows.is_empty() {
        return Figure::placeholder(NO_DATA);
    }

    let data = match kind {
        ChartKind::Line => series(&rows, Mode::Lines, |row| Some(row.adj_close)),
        ChartKind::Scatter => series(&rows, Mode::Markers, |row| Some(row.adj_close)),
        ChartKind::LinePct => series(&rows, Mode::Lines, |row| row.percent),
        ChartKind::Box => boxes(&rows),
        ChartKind::Bar => monthly_bars(&rows, |row| Some(row.adj_close)),
        ChartKind::BarPct => monthly_bars(&rows, |row| row.percent),
    };

    Figure {
        data,
        layout: Layout::dashboard(kind),
    }
}

// split rows per coin, keeping the order in which each coin first appears
fn by_crypto<'a>(rows: &[&'a PriceRow]) -> Vec<(Crypto, Vec<&'a PriceRow>)> {
    let mut groups: Vec<(Crypto, Vec<&PriceRow>)> = vec![];
    for &row in rows {
        match groups.iter_mut().find(|(crypto, _)| *crypto == row.crypto) {
            Some((_, group)) => group.push(row),
            None => groups.push((row.crypto, vec![row])),
        }
    }
    groups
}

fn new_trace(kind: TraceType, crypto: Crypto, x: Vec<Point>, y: Vec<Option<f64>>) -> Trace {
    let color = Marker {
        color: crypto.color(),
    };
    Trace {
        kind,
        mode: None,
        name: crypto.symbol(),
        x,
        y,
        marker: color,
        line: None,
    }
}

fn series(rows: &[&PriceRow], mode: Mode, value: impl Fn(&PriceRow) -> Option<f64>) -> Vec<Trace> {
    by_crypto(rows)
        .into_iter()
        .map(|(crypto, group)| {
            let x = group.iter().map(|row| Point::Date(row.date)).collect();
            let y = group.iter().map(|row| value(row)).collect();
            let mut trace = new_trace(TraceType::Scatter, crypto, x, y);
            trace.mode = Some(mode);
            if mode == Mode::Lines {
                trace.line = Some(trace.marker);
            }
            trace
        })
        .collect()
}

fn boxes(rows: &[&PriceRow]) -> Vec<Trace> {
    by_crypto(rows)
        .into_iter()
        .map(|(crypto, group)| {
            let x = vec![Point::Label(crypto.symbol()); group.len()];
            let y = group.iter().map(|row| Some(row.adj_close)).collect();
            new_trace(TraceType::Box, crypto, x, y)
        })
        .collect()
}

/// Average `value` per (month, coin); missing values are left out of the mean.
fn monthly_bars(rows: &[&PriceRow], value: impl Fn(&PriceRow) -> Option<f64>) -> Vec<Trace> {
    let mut buckets: BTreeMap<(u32, &'static str), (Crypto, f64, usize)> = BTreeMap::new();
    for row in rows {
        let (_, sum, count) = buckets
            .entry((row.month, row.crypto.symbol()))
            .or_insert((row.crypto, 0.0, 0));
        if let Some(v) = value(row) {
            *sum += v;
            *count += 1;
        }
    }

    let mut traces: Vec<Trace> = vec![];
    for ((month, _), (crypto, sum, count)) in buckets {
        let mean = (count > 0).then(|| sum / count as f64);
        match traces.iter_mut().find(|trace| trace.name == crypto.symbol()) {
            Some(trace) => {
                trace.x.push(Point::Month(month));
                trace.y.push(mean);
            }
            None => traces.push(new_trace(
                TraceType::Bar,
                crypto,
                vec![Point::Month(month)],
                vec![mean],
            )),
        }
    }
    traces
}
