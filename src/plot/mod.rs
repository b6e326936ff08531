//! Plotted series management.
//!
//! The collection is ordered by insertion: the oldest series is drawn
//! first and is the one removed by [`PlotCollection::remove_oldest`].

pub mod ui;

use crate::sampling::Sample;

/// Identifies a series for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle(u64);

/// Style settings shared by every series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    /// Marker size used while markers are shown.
    pub marker_size: f64,
    /// Line width of every series.
    pub line_width: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            marker_size: 5.0,
            line_width: 2.0,
        }
    }
}

/// Display attributes of one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesStyle<'a> {
    /// Marker size, zero when hidden.
    pub marker_size: f64,
    /// Line width.
    pub line_width: f64,
    /// Legend text.
    pub legend_label: &'a str,
}

/// A named curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    handle: SeriesHandle,
    label: String,
    points: Vec<Sample>,
    marker_visible: bool,
}

impl PlottedSeries {
    /// Handle assigned when the series was added.
    pub fn handle(&self) -> SeriesHandle {
        self.handle
    }

    /// Legend label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Points in sampling order.
    pub fn points(&self) -> &[Sample] {
        &self.points
    }

    /// Whether point markers are drawn.
    pub fn marker_visible(&self) -> bool {
        self.marker_visible
    }

    /// Points as `(x, y)` pairs for charting.
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|s| (s.x, s.y)).collect()
    }
}

/// Ordered set of plotted series.
#[derive(Debug, Clone, Default)]
pub struct PlotCollection {
    series: Vec<PlottedSeries>,
    style: PlotStyle,
    next_handle: u64,
}

impl PlotCollection {
    /// Create an empty collection.
    pub fn new(style: PlotStyle) -> Self {
        Self {
            series: Vec::new(),
            style,
            next_handle: 0,
        }
    }

    /// Append a series with markers hidden.
    pub fn add_series(&mut self, points: Vec<Sample>, label: impl Into<String>) -> SeriesHandle {
        let handle = SeriesHandle(self.next_handle);
        self.next_handle += 1;

        let label = label.into();
        tracing::debug!(?handle, label = %label, points = points.len(), "Adding series");
        self.series.push(PlottedSeries {
            handle,
            label,
            points,
            marker_visible: false,
        });
        handle
    }

    /// Remove the series that was added first.
    pub fn remove_oldest(&mut self) -> Option<PlottedSeries> {
        if self.series.is_empty() {
            return None;
        }
        let removed = self.series.remove(0);
        tracing::debug!(handle = ?removed.handle, "Removed oldest series");
        Some(removed)
    }

    /// Remove a specific series.
    pub fn remove(&mut self, handle: SeriesHandle) -> Option<PlottedSeries> {
        let idx = self.series.iter().position(|s| s.handle == handle)?;
        Some(self.series.remove(idx))
    }

    /// Remove every series.
    pub fn remove_all(&mut self) {
        if !self.series.is_empty() {
            tracing::debug!(count = self.series.len(), "Removing all series");
            self.series.clear();
        }
    }

    /// Flip marker visibility on every series.
    pub fn toggle_markers(&mut self) {
        for series in &mut self.series {
            series.marker_visible = !series.marker_visible;
        }
    }

    /// Display attributes for a series.
    pub fn style_of<'a>(&self, series: &'a PlottedSeries) -> SeriesStyle<'a> {
        SeriesStyle {
            marker_size: if series.marker_visible {
                self.style.marker_size
            } else {
                0.0
            },
            line_width: self.style.line_width,
            legend_label: &series.label,
        }
    }

    /// Series in insertion order.
    pub fn series(&self) -> &[PlottedSeries] {
        &self.series
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether nothing is plotted.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Combined `(x_min, x_max, y_min, y_max)` over finite points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p.x, p.x, p.y, p.y)),
                Some((x0, x1, y0, y1)) => {
                    Some((x0.min(p.x), x1.max(p.x), y0.min(p.y), y1.max(p.y)))
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Vec<Sample> {
        (0..n)
            .map(|i| Sample {
                x: i as f64,
                y: 2.0 * i as f64,
            })
            .collect()
    }

    #[test]
    fn adds_in_insertion_order() {
        let mut plots = PlotCollection::default();
        let a = plots.add_series(line(3), "a");
        let b = plots.add_series(line(2), "b");

        assert_ne!(a, b);
        let labels: Vec<&str> = plots.series().iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["a", "b"]);
        assert!(plots.series().iter().all(|s| !s.marker_visible()));
    }

    #[test]
    fn remove_oldest_is_fifo() {
        let mut plots = PlotCollection::default();
        plots.add_series(line(1), "first");
        plots.add_series(line(1), "second");

        let removed = plots.remove_oldest().unwrap();
        assert_eq!(removed.label(), "first");
        assert_eq!(plots.series()[0].label(), "second");
    }

    #[test]
    fn removal_on_empty_is_noop() {
        let mut plots = PlotCollection::default();
        assert!(plots.remove_oldest().is_none());
        plots.remove_all();
        plots.toggle_markers();
        assert!(plots.is_empty());
    }

    #[test]
    fn remove_by_handle() {
        let mut plots = PlotCollection::default();
        plots.add_series(line(1), "a");
        let b = plots.add_series(line(1), "b");
        plots.add_series(line(1), "c");

        assert_eq!(plots.remove(b).map(|s| s.label().to_string()), Some("b".into()));
        assert!(plots.remove(b).is_none());
        assert_eq!(plots.len(), 2);
    }

    #[test]
    fn remove_all_empties_collection() {
        let mut plots = PlotCollection::default();
        plots.add_series(line(2), "a");
        plots.add_series(line(2), "b");
        plots.remove_all();
        assert!(plots.is_empty());
    }

    #[test]
    fn toggling_twice_restores_markers() {
        let mut plots = PlotCollection::default();
        plots.add_series(line(2), "a");
        plots.toggle_markers();
        plots.add_series(line(2), "b");

        let before: Vec<bool> = plots.series().iter().map(|s| s.marker_visible()).collect();
        assert_eq!(before, vec![true, false]);

        plots.toggle_markers();
        plots.toggle_markers();
        let after: Vec<bool> = plots.series().iter().map(|s| s.marker_visible()).collect();
        assert_eq!(after, before);
    }

    #[test]
    fn marker_size_follows_visibility() {
        let mut plots = PlotCollection::new(PlotStyle {
            marker_size: 5.0,
            line_width: 2.0,
        });
        plots.add_series(line(2), "sin(x)");

        let style = plots.style_of(&plots.series()[0]);
        assert_eq!(style.marker_size, 0.0);
        assert_eq!(style.line_width, 2.0);
        assert_eq!(style.legend_label, "sin(x)");

        plots.toggle_markers();
        assert_eq!(plots.style_of(&plots.series()[0]).marker_size, 5.0);
    }

    #[test]
    fn bounds_skip_non_finite_points() {
        let mut plots = PlotCollection::default();
        assert!(plots.bounds().is_none());

        plots.add_series(
            vec![
                Sample { x: -1.0, y: 3.0 },
                Sample { x: 0.0, y: f64::NAN },
                Sample { x: 4.0, y: -2.0 },
            ],
            "f",
        );
        assert_eq!(plots.bounds(), Some((-1.0, 4.0, -2.0, 3.0)));
    }
}
