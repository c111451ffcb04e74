pub mod components;

use std::f64::consts::{FRAC_PI_2, TAU};

// Charts are illustrative only: the datasets below are fixed and do not come from the
// looked-up channel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub dataset_label: &'static str,
    pub data: Vec<f64>,
}

impl ChartSpec {
    fn new(
        id: &'static str,
        title: &'static str,
        kind: ChartKind,
        labels: &[&'static str],
        dataset_label: &'static str,
        data: &[f64],
    ) -> Self {
        ChartSpec {
            id,
            title,
            kind,
            labels: labels.to_vec(),
            dataset_label,
            data: data.to_vec(),
        }
    }
}

/// The six charts of one render. The caller hands [`render_charts`] a new generation per
/// render, and the view keys its chart components on it so every render re-creates them.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBundle {
    pub generation: u32,
    pub subscribers: ChartSpec,
    pub videos: ChartSpec,
    pub views: ChartSpec,
    pub revenue: ChartSpec,
    pub engagement: ChartSpec,
    pub demographics: ChartSpec,
}

impl ChartBundle {
    pub fn charts(&self) -> [&ChartSpec; 6] {
        [
            &self.subscribers,
            &self.videos,
            &self.views,
            &self.revenue,
            &self.engagement,
            &self.demographics,
        ]
    }
}

pub fn render_charts(generation: u32) -> ChartBundle {
    let months = ["Jan", "Feb", "Mar"];
    ChartBundle {
        generation,
        subscribers: ChartSpec::new(
            "subscriberChart",
            "Subscriber Growth",
            ChartKind::Line,
            &months,
            "Subscribers",
            &[100.0, 200.0, 300.0],
        ),
        videos: ChartSpec::new(
            "videoChart",
            "Video Uploads",
            ChartKind::Bar,
            &months,
            "Videos",
            &[5.0, 10.0, 15.0],
        ),
        views: ChartSpec::new(
            "viewsChart",
            "Views",
            ChartKind::Pie,
            &months,
            "Views",
            &[1000.0, 2000.0, 3000.0],
        ),
        revenue: ChartSpec::new(
            "revenueChart",
            "Revenue Breakdown",
            ChartKind::Doughnut,
            &months,
            "Revenue",
            &[500.0, 1000.0, 1500.0],
        ),
        engagement: ChartSpec::new(
            "engagementChart",
            "Engagement",
            ChartKind::Radar,
            &["Likes", "Comments", "Shares"],
            "Engagement",
            &[50.0, 70.0, 30.0],
        ),
        demographics: ChartSpec::new(
            "demographicsChart",
            "Demographics",
            ChartKind::PolarArea,
            &["Male", "Female", "Other"],
            "Demographics",
            &[60.0, 30.0, 10.0],
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Drawing area inside an SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Plot {
    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    fn baseline(&self) -> f64 {
        self.height - self.padding
    }
}

fn max_value(data: &[f64]) -> f64 {
    let max = data.iter().copied().fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

pub fn line_points(data: &[f64], plot: Plot) -> Vec<(f64, f64)> {
    let max = max_value(data);
    let step = if data.len() > 1 {
        plot.inner_width() / (data.len() - 1) as f64
    } else {
        0.0
    };
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let x = plot.padding + step * i as f64;
            let y = plot.baseline() - clamp_non_negative(*value) / max * plot.inner_height();
            (x, y)
        })
        .collect()
}

pub fn bar_rects(data: &[f64], plot: Plot) -> Vec<Rect> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = max_value(data);
    let slot = plot.inner_width() / data.len() as f64;
    let width = slot * 0.6;
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let height = clamp_non_negative(*value) / max * plot.inner_height();
            Rect {
                x: plot.padding + slot * i as f64 + (slot - width) / 2.0,
                y: plot.baseline() - height,
                width,
                height,
            }
        })
        .collect()
}

/// Start/end angles (radians, clockwise from 12 o'clock) proportional to each value.
pub fn slice_angles(data: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = data.iter().copied().map(clamp_non_negative).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -FRAC_PI_2;
    data.iter()
        .map(|value| {
            let end = start + clamp_non_negative(*value) / total * TAU;
            let slice = (start, end);
            start = end;
            slice
        })
        .collect()
}

/// Equal-angle slices whose radius fraction follows each value.
pub fn polar_slices(data: &[f64]) -> Vec<(f64, f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = max_value(data);
    let sweep = TAU / data.len() as f64;
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let start = -FRAC_PI_2 + sweep * i as f64;
            (start, start + sweep, clamp_non_negative(*value) / max)
        })
        .collect()
}

pub fn radar_points(data: &[f64], cx: f64, cy: f64, radius: f64) -> Vec<(f64, f64)> {
    if data.is_empty() {
        return Vec::new();
    }
    let max = max_value(data);
    let sweep = TAU / data.len() as f64;
    data.iter()
        .enumerate()
        .map(|(i, value)| {
            let angle = -FRAC_PI_2 + sweep * i as f64;
            let r = clamp_non_negative(*value) / max * radius;
            (cx + r * angle.cos(), cy + r * angle.sin())
        })
        .collect()
}

fn polar_to_xy(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// SVG path for a ring slice; an `inner` radius of zero gives a pie wedge.
pub fn arc_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    // A full circle cannot be drawn as a single arc.
    let end = if end - start >= TAU { start + TAU - 1e-4 } else { end };
    let large_arc = if end - start > std::f64::consts::PI { 1 } else { 0 };
    let (ox1, oy1) = polar_to_xy(cx, cy, outer, start);
    let (ox2, oy2) = polar_to_xy(cx, cy, outer, end);

    if inner <= 0.0 {
        format!(
            "M {cx:.2} {cy:.2} L {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox2:.2} {oy2:.2} Z"
        )
    } else {
        let (ix1, iy1) = polar_to_xy(cx, cy, inner, end);
        let (ix2, iy2) = polar_to_xy(cx, cy, inner, start);
        format!(
            "M {ox1:.2} {oy1:.2} A {outer:.2} {outer:.2} 0 {large_arc} 1 {ox2:.2} {oy2:.2} L {ix1:.2} {iy1:.2} A {inner:.2} {inner:.2} 0 {large_arc} 0 {ix2:.2} {iy2:.2} Z"
        )
    }
}

pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLOT: Plot = Plot {
        width: 200.0,
        height: 120.0,
        padding: 10.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bundle_holds_six_fixed_charts() {
        let bundle = render_charts(1);
        let kinds: Vec<ChartKind> = bundle.charts().iter().map(|chart| chart.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChartKind::Line,
                ChartKind::Bar,
                ChartKind::Pie,
                ChartKind::Doughnut,
                ChartKind::Radar,
                ChartKind::PolarArea
            ]
        );
        assert_eq!(bundle.subscribers.data, vec![100.0, 200.0, 300.0]);
        assert_eq!(bundle.demographics.labels, vec!["Male", "Female", "Other"]);
        for chart in bundle.charts() {
            assert_eq!(chart.labels.len(), chart.data.len(), "{}", chart.id);
        }
    }

    #[test]
    fn bundles_differ_only_by_generation() {
        let first = render_charts(1);
        let second = render_charts(2);
        assert_ne!(first, second);
        assert_eq!(second.generation, 2);
        assert_eq!(first.views, second.views);
    }

    #[test]
    fn line_spans_the_plot_and_peaks_at_the_top() {
        let points = line_points(&[100.0, 200.0, 300.0], PLOT);
        assert_eq!(points.len(), 3);
        assert!(close(points[0].0, 10.0));
        assert!(close(points[2].0, 190.0));
        assert!(close(points[2].1, 10.0));
        assert!(close(points[0].1, 110.0 - 100.0 / 300.0 * 100.0));
    }

    #[test]
    fn bars_stand_on_the_baseline() {
        let rects = bar_rects(&[5.0, 10.0, 15.0], PLOT);
        assert_eq!(rects.len(), 3);
        for rect in &rects {
            assert!(close(rect.y + rect.height, 110.0));
        }
        assert!(close(rects[2].height, 100.0));
        assert!(rects[0].x < rects[1].x && rects[1].x < rects[2].x);
    }

    #[test]
    fn slices_cover_the_full_circle_in_proportion() {
        let slices = slice_angles(&[1000.0, 2000.0, 3000.0]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].0, -FRAC_PI_2));
        assert!(close(slices[2].1, -FRAC_PI_2 + TAU));
        assert!(close(slices[1].1 - slices[1].0, TAU / 3.0));
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn polar_slices_share_the_angle_and_scale_the_radius() {
        let slices = polar_slices(&[60.0, 30.0, 10.0]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].2, 1.0));
        assert!(close(slices[1].2, 0.5));
        assert!(close(slices[2].1 - slices[2].0, TAU / 3.0));
    }

    #[test]
    fn radar_first_axis_points_up() {
        let points = radar_points(&[50.0, 70.0, 30.0], 100.0, 100.0, 80.0);
        assert_eq!(points.len(), 3);
        assert!(close(points[0].0, 100.0));
        assert!(close(points[0].1, 100.0 - 50.0 / 70.0 * 80.0));
    }

    #[test]
    fn negative_and_empty_data_do_not_break_geometry() {
        assert!(bar_rects(&[], PLOT).is_empty());
        assert!(radar_points(&[], 0.0, 0.0, 1.0).is_empty());
        let rects = bar_rects(&[-5.0, f64::NAN], PLOT);
        assert!(rects.iter().all(|rect| rect.height == 0.0));
    }

    #[test]
    fn arc_paths_close_and_ring_slices_have_two_arcs() {
        let wedge = arc_path(50.0, 50.0, 40.0, 0.0, -FRAC_PI_2, 0.0);
        assert!(wedge.starts_with("M 50.00 50.00"));
        assert!(wedge.ends_with('Z'));
        assert_eq!(wedge.matches(" A ").count(), 1);

        let ring = arc_path(50.0, 50.0, 40.0, 20.0, -FRAC_PI_2, FRAC_PI_2 * 2.0);
        assert_eq!(ring.matches(" A ").count(), 2);
    }
}
