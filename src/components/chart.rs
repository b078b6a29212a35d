//! Chart Components
//!
//! Canvas charts for the dashboard (bar, horizontal bar, pie, line) and
//! the registry that tracks one live chart per canvas.

use leptos::*;
use std::collections::{BTreeMap, HashMap};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{AggregateSlice, SessionCounts};

/// Chart.js-inspired palette used across the dashboard
const BAR_FILL: &str = "rgba(54, 162, 235, 0.6)";
const BAR_STROKE: &str = "rgba(54, 162, 235, 1)";
const LINE_STROKE: &str = "rgba(75, 192, 192, 1)";
const PIE_FILLS: [&str; 2] = ["rgba(75, 192, 192, 0.6)", "rgba(255, 99, 132, 0.6)"];
const PIE_STROKES: [&str; 2] = ["rgba(75, 192, 192, 1)", "rgba(255, 99, 132, 1)"];

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400
const NO_DATA_TEXT: &str = "#6b7280"; // gray-500

/// Value-axis tick count
const TICKS: u64 = 5;

/// How a dataset is plotted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Pie,
    Line,
}

/// Dataset and presentation for one chart
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// Dataset label drawn above the plot
    pub label: String,
    /// Category labels, one per value
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

/// Bar chart of interactions per attendee. Labels cover every attendee in
/// the slice, including those with zero interactions.
pub fn interaction_bar_spec(slice: &AggregateSlice) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        label: "Number of Interactions".to_string(),
        labels: slice.interaction_counts.keys().cloned().collect(),
        values: slice.interaction_counts.values().copied().collect(),
    }
}

/// Same data as [`interaction_bar_spec`] with the index axis flipped
pub fn interaction_hbar_spec(slice: &AggregateSlice) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::HorizontalBar,
        ..interaction_bar_spec(slice)
    }
}

/// Two-slice pie: participants vs non-participants
pub fn participation_pie_spec(slice: &AggregateSlice) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        label: "Participation".to_string(),
        labels: vec!["Participants".to_string(), "Non-Participants".to_string()],
        values: vec![slice.total_participants, slice.total_non_participants],
    }
}

/// Line chart of participant counts per time bucket
pub fn participation_line_spec(slice: &AggregateSlice) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Line,
        label: "Number of Participants".to_string(),
        labels: slice.participation_over_time.keys().cloned().collect(),
        values: slice.participation_over_time.values().copied().collect(),
    }
}

/// Specs for the special-students view.
///
/// Both charts share one label list, computed here once before either
/// chart draws, so the sessions chart never depends on the interaction
/// chart having rendered.
pub fn special_chart_specs(students: &BTreeMap<String, SessionCounts>) -> (ChartSpec, ChartSpec) {
    let labels: Vec<String> = students.keys().cloned().collect();
    let totals: Vec<u64> = students
        .values()
        .map(|sessions| sessions.values().sum())
        .collect();
    let sessions_attended: Vec<u64> = students
        .values()
        .map(|sessions| sessions.len() as u64)
        .collect();

    (
        ChartSpec {
            kind: ChartKind::Bar,
            label: "Total Interactions".to_string(),
            labels: labels.clone(),
            values: totals,
        },
        ChartSpec {
            kind: ChartKind::HorizontalBar,
            label: "Sessions Attended".to_string(),
            labels,
            values: sessions_attended,
        },
    )
}

/// Named slots for every chart the dashboard draws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Interaction,
    Participation,
    HorizontalInteraction,
    ParticipationOverTime,
    SpecialInteraction,
    SpecialSessions,
}

/// A rendered chart bound to its canvas
pub struct ChartHandle {
    canvas: HtmlCanvasElement,
}

impl ChartHandle {
    /// Render `spec` onto `canvas`. Returns `None` when the canvas has no
    /// 2D context.
    fn render(canvas: &HtmlCanvasElement, spec: &ChartSpec) -> Option<ChartHandle> {
        let ctx = context_2d(canvas)?;
        draw_chart(&ctx, canvas.width() as f64, canvas.height() as f64, spec);
        Some(ChartHandle {
            canvas: canvas.clone(),
        })
    }

    /// Clear the bound canvas, releasing the drawing
    fn destroy(&self) {
        if let Some(ctx) = context_2d(&self.canvas) {
            ctx.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
    }
}

/// Tracks at most one live chart per slot.
///
/// Replacing a slot destroys the prior chart before the new one renders,
/// so re-rendering a view never stacks instances on a canvas.
#[derive(Default)]
pub struct ChartRegistry {
    slots: HashMap<ChartSlot, ChartHandle>,
}

impl ChartRegistry {
    /// Destroy whatever occupies `slot`, then render `spec` onto `canvas`
    /// and track the new chart. Returns false when the canvas has no 2D
    /// context, in which case nothing is drawn or tracked.
    pub fn replace(&mut self, slot: ChartSlot, canvas: &HtmlCanvasElement, spec: &ChartSpec) -> bool {
        if let Some(prev) = self.slots.remove(&slot) {
            prev.destroy();
        }
        match ChartHandle::render(canvas, spec) {
            Some(handle) => {
                self.slots.insert(slot, handle);
                true
            }
            None => false,
        }
    }

    /// Destroy and untrack the chart in `slot`, if any
    pub fn destroy(&mut self, slot: ChartSlot) {
        if let Some(prev) = self.slots.remove(&slot) {
            prev.destroy();
        }
    }

    /// Destroy every tracked chart
    pub fn clear(&mut self) {
        for (_, handle) in self.slots.drain() {
            handle.destroy();
        }
    }

    /// Whether `slot` currently holds a live chart
    pub fn contains(&self, slot: ChartSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Number of live charts
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Charts for the general (aggregate or per-date) view
#[component]
pub fn GeneralCharts(slice: AggregateSlice) -> impl IntoView {
    let charts = store_value(ChartRegistry::default());

    let bar_ref = create_node_ref::<html::Canvas>();
    let pie_ref = create_node_ref::<html::Canvas>();
    let hbar_ref = create_node_ref::<html::Canvas>();
    let line_ref = create_node_ref::<html::Canvas>();

    let bar_spec = interaction_bar_spec(&slice);
    let pie_spec = participation_pie_spec(&slice);
    let hbar_spec = interaction_hbar_spec(&slice);
    let line_spec = participation_line_spec(&slice);

    // Redraw whenever the canvases (re)mount
    create_effect(move |_| {
        charts.update_value(|registry| {
            if let Some(canvas) = bar_ref.get() {
                registry.replace(ChartSlot::Interaction, &canvas, &bar_spec);
            }
            if let Some(canvas) = pie_ref.get() {
                if !registry.replace(ChartSlot::Participation, &canvas, &pie_spec) {
                    web_sys::console::error_1(&"Participation chart context not found".into());
                }
            }
            if let Some(canvas) = hbar_ref.get() {
                registry.replace(ChartSlot::HorizontalInteraction, &canvas, &hbar_spec);
            }
            if let Some(canvas) = line_ref.get() {
                registry.replace(ChartSlot::ParticipationOverTime, &canvas, &line_spec);
            }
        });
    });

    // Tear down this view's charts when it unmounts
    on_cleanup(move || charts.update_value(|registry| registry.clear()));

    view! {
        <section class="grid md:grid-cols-2 gap-8">
            <ChartCard title="Interactions per Attendee">
                <canvas
                    node_ref=bar_ref
                    id="interactionChart"
                    width="640"
                    height="360"
                    class="w-full rounded-lg"
                />
            </ChartCard>

            <ChartCard title="Participation">
                <canvas
                    node_ref=pie_ref
                    id="participationChart"
                    width="640"
                    height="360"
                    class="w-full rounded-lg"
                />
            </ChartCard>

            <ChartCard title="Interactions per Attendee (Horizontal)">
                <canvas
                    node_ref=hbar_ref
                    id="horizontalInteractionChart"
                    width="640"
                    height="360"
                    class="w-full rounded-lg"
                />
            </ChartCard>

            <ChartCard title="Participation Over Time">
                <canvas
                    node_ref=line_ref
                    id="participationOverTimeChart"
                    width="640"
                    height="360"
                    class="w-full rounded-lg"
                />
            </ChartCard>
        </section>
    }
}

/// Charts for the special-students view
#[component]
pub fn SpecialStudentsCharts(students: BTreeMap<String, SessionCounts>) -> impl IntoView {
    let charts = store_value(ChartRegistry::default());

    let interaction_ref = create_node_ref::<html::Canvas>();
    let sessions_ref = create_node_ref::<html::Canvas>();

    // Shared labels are computed once, before either chart draws
    let (interaction_spec, sessions_spec) = special_chart_specs(&students);

    create_effect(move |_| {
        charts.update_value(|registry| {
            if let Some(canvas) = interaction_ref.get() {
                if !registry.replace(ChartSlot::SpecialInteraction, &canvas, &interaction_spec) {
                    web_sys::console::error_1(
                        &"Interaction chart context for special students not found".into(),
                    );
                }
            }
            if let Some(canvas) = sessions_ref.get() {
                if !registry.replace(ChartSlot::SpecialSessions, &canvas, &sessions_spec) {
                    web_sys::console::error_1(
                        &"Sessions attended chart context for special students not found".into(),
                    );
                }
            }
        });
    });

    on_cleanup(move || charts.update_value(|registry| registry.clear()));

    view! {
        <section class="grid md:grid-cols-2 gap-8">
            <ChartCard title="Total Interactions">
                <canvas
                    node_ref=interaction_ref
                    id="interactionChart"
                    width="640"
                    height="360"
                    class="w-full rounded-lg"
                />
            </ChartCard>

            <ChartCard title="Sessions Attended">
                <canvas
                    node_ref=sessions_ref
                    id="participationOverTimeChart"
                    width="640"
                    height="360"
                    class="w-full rounded-lg"
                />
            </ChartCard>
        </section>
    }
}

/// Card wrapper shared by all chart canvases
#[component]
fn ChartCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {children()}
        </div>
    }
}

/// Acquire a canvas 2D context, if the element supports one
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Round a value-axis maximum up so the scale divides into whole-number
/// ticks. At least `TICKS`, so an empty chart still gets a scale.
fn axis_max(max_value: u64) -> u64 {
    let step = (max_value.max(1) + TICKS - 1) / TICKS;
    step * TICKS
}

/// Shorten long category labels so they fit beside a bar
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let mut out: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

/// Draw `spec` onto a cleared canvas
fn draw_chart(ctx: &CanvasRenderingContext2d, width: f64, height: f64, spec: &ChartSpec) {
    // Background
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    match spec.kind {
        ChartKind::Bar => draw_bars(ctx, width, height, spec, false),
        ChartKind::HorizontalBar => draw_bars(ctx, width, height, spec, true),
        ChartKind::Pie => draw_pie(ctx, width, height, spec),
        ChartKind::Line => draw_line(ctx, width, height, spec),
    }
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&NO_DATA_TEXT.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text("No data for this view", width / 2.0 - 70.0, height / 2.0);
}

fn draw_bars(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    spec: &ChartSpec,
    horizontal: bool,
) {
    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 28.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max = axis_max(spec.values.iter().copied().max().unwrap_or(0)) as f64;

    // Dataset label
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&spec.label, margin_left, 16.0);

    // Value axis grid, from zero
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    for i in 0..=TICKS {
        let frac = i as f64 / TICKS as f64;
        let value = max - frac * max;

        ctx.begin_path();
        if horizontal {
            // Vertical grid lines, values along the bottom
            let x = margin_left + (1.0 - frac) * chart_width;
            ctx.move_to(x, margin_top);
            ctx.line_to(x, height - margin_bottom);
            ctx.stroke();

            ctx.set_fill_style(&AXIS_TEXT.into());
            let _ = ctx.fill_text(&format!("{:.0}", value), x - 8.0, height - 10.0);
        } else {
            // Horizontal grid lines, values along the left
            let y = margin_top + frac * chart_height;
            ctx.move_to(margin_left, y);
            ctx.line_to(width - margin_right, y);
            ctx.stroke();

            ctx.set_fill_style(&AXIS_TEXT.into());
            let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
        }
    }

    if spec.values.is_empty() {
        draw_no_data(ctx, width, height);
        return;
    }

    let count = spec.values.len() as f64;
    let slot = if horizontal {
        chart_height / count
    } else {
        chart_width / count
    };
    let thickness = slot * 0.6;

    for (i, value) in spec.values.iter().enumerate() {
        let extent = (*value as f64 / max)
            * if horizontal {
                chart_width
            } else {
                chart_height
            };
        let offset = i as f64 * slot + (slot - thickness) / 2.0;

        ctx.set_fill_style(&BAR_FILL.into());
        ctx.set_stroke_style(&BAR_STROKE.into());
        if horizontal {
            let y = margin_top + offset;
            ctx.fill_rect(margin_left, y, extent, thickness);
            ctx.stroke_rect(margin_left, y, extent, thickness);
        } else {
            let x = margin_left + offset;
            let y = margin_top + chart_height - extent;
            ctx.fill_rect(x, y, thickness, extent);
            ctx.stroke_rect(x, y, thickness, extent);
        }

        // Category label
        ctx.set_fill_style(&AXIS_TEXT.into());
        if let Some(label) = spec.labels.get(i) {
            if horizontal {
                let y = margin_top + i as f64 * slot + slot / 2.0;
                let _ = ctx.fill_text(&truncate_label(label, 7), 4.0, y + 4.0);
            } else {
                let x = margin_left + i as f64 * slot + slot / 2.0;
                let _ = ctx.fill_text(&truncate_label(label, 9), x - 15.0, height - 10.0);
            }
        }
    }
}

fn draw_pie(ctx: &CanvasRenderingContext2d, width: f64, height: f64, spec: &ChartSpec) {
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&spec.label, 10.0, 16.0);

    let total: u64 = spec.values.iter().sum();
    if total == 0 {
        draw_no_data(ctx, width, height);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0 + 8.0;
    let radius = (width.min(height) / 2.0) - 40.0;

    // Slices, clockwise from twelve o'clock
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (i, value) in spec.values.iter().enumerate() {
        let end = start + (*value as f64 / total as f64) * std::f64::consts::TAU;

        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();

        ctx.set_fill_style(&PIE_FILLS[i % PIE_FILLS.len()].into());
        ctx.fill();
        ctx.set_stroke_style(&PIE_STROKES[i % PIE_STROKES.len()].into());
        ctx.stroke();

        start = end;
    }

    // Legend with absolute counts
    ctx.set_font("12px sans-serif");
    for (i, label) in spec.labels.iter().enumerate() {
        let y = 16.0 + i as f64 * 18.0;
        ctx.set_fill_style(&PIE_FILLS[i % PIE_FILLS.len()].into());
        ctx.fill_rect(width - 160.0, y - 9.0, 10.0, 10.0);

        ctx.set_fill_style(&AXIS_TEXT.into());
        let count = spec.values.get(i).copied().unwrap_or(0);
        let _ = ctx.fill_text(&format!("{} ({})", label, count), width - 144.0, y);
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, width: f64, height: f64, spec: &ChartSpec) {
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 28.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    let max = axis_max(spec.values.iter().copied().max().unwrap_or(0)) as f64;

    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(&spec.label, margin_left, 16.0);

    // Grid, from zero
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    for i in 0..=TICKS {
        let frac = i as f64 / TICKS as f64;
        let y = margin_top + frac * chart_height;

        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format!("{:.0}", max - frac * max), 5.0, y + 4.0);
    }

    if spec.values.is_empty() {
        draw_no_data(ctx, width, height);
        return;
    }

    let count = spec.values.len();
    let points: Vec<(f64, f64)> = spec
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if count == 1 {
                margin_left + chart_width / 2.0
            } else {
                margin_left + (i as f64 / (count - 1) as f64) * chart_width
            };
            let y = margin_top + (1.0 - *value as f64 / max) * chart_height;
            (x, y)
        })
        .collect();

    // Line with a slight curve through segment midpoints, no area fill
    ctx.set_stroke_style(&LINE_STROKE.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(points[0].0, points[0].1);
    if count == 2 {
        ctx.line_to(points[1].0, points[1].1);
    } else if count > 2 {
        for i in 1..count - 1 {
            let mid_x = (points[i].0 + points[i + 1].0) / 2.0;
            let mid_y = (points[i].1 + points[i + 1].1) / 2.0;
            ctx.quadratic_curve_to(points[i].0, points[i].1, mid_x, mid_y);
        }
        ctx.line_to(points[count - 1].0, points[count - 1].1);
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&LINE_STROKE.into());
    for (x, y) in &points {
        ctx.begin_path();
        let _ = ctx.arc(*x, *y, 3.0, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }

    // Bucket labels, thinned when there are many
    ctx.set_fill_style(&AXIS_TEXT.into());
    let label_step = (count + 5) / 6;
    for (i, label) in spec.labels.iter().enumerate() {
        if i % label_step.max(1) == 0 {
            let _ = ctx.fill_text(&truncate_label(label, 9), points[i].0 - 15.0, height - 10.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_slice() -> AggregateSlice {
        AggregateSlice {
            interaction_counts: [
                ("Ana".to_string(), 3),
                ("Ben".to_string(), 0),
                ("Cleo".to_string(), 5),
            ]
            .into_iter()
            .collect(),
            participation_over_time: [("09:00".to_string(), 5), ("09:15".to_string(), 7)]
                .into_iter()
                .collect(),
            non_participants: vec!["Dov".to_string()],
            total_participants: 8,
            total_non_participants: 1,
        }
    }

    #[test]
    fn test_interaction_bar_spec_keeps_zero_count_attendees() {
        let spec = interaction_bar_spec(&sample_slice());
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.labels, vec!["Ana", "Ben", "Cleo"]);
        assert_eq!(spec.values, vec![3, 0, 5]);
    }

    #[test]
    fn test_hbar_spec_flips_axis_only() {
        let bar = interaction_bar_spec(&sample_slice());
        let hbar = interaction_hbar_spec(&sample_slice());
        assert_eq!(hbar.kind, ChartKind::HorizontalBar);
        assert_eq!(hbar.labels, bar.labels);
        assert_eq!(hbar.values, bar.values);
    }

    #[test]
    fn test_participation_pie_spec() {
        let spec = participation_pie_spec(&sample_slice());
        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.labels, vec!["Participants", "Non-Participants"]);
        assert_eq!(spec.values, vec![8, 1]);
    }

    #[test]
    fn test_participation_line_spec() {
        let spec = participation_line_spec(&sample_slice());
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.labels, vec!["09:00", "09:15"]);
        assert_eq!(spec.values, vec![5, 7]);
    }

    #[test]
    fn test_special_chart_specs_share_labels() {
        let students: BTreeMap<String, SessionCounts> = [
            (
                "Dana".to_string(),
                [("s1".to_string(), 2), ("s2".to_string(), 1)]
                    .into_iter()
                    .collect(),
            ),
            (
                "Eli".to_string(),
                [("s1".to_string(), 4)].into_iter().collect(),
            ),
        ]
        .into_iter()
        .collect();

        let (interactions, sessions) = special_chart_specs(&students);

        // One label list feeds both charts, so the sessions chart is
        // well-defined regardless of whether the other one rendered.
        assert_eq!(interactions.labels, sessions.labels);
        assert_eq!(interactions.labels, vec!["Dana", "Eli"]);
        assert_eq!(interactions.values, vec![3, 4]);
        assert_eq!(sessions.values, vec![2, 1]);
        assert_eq!(sessions.kind, ChartKind::HorizontalBar);
    }

    #[test]
    fn test_axis_max_rounds_to_whole_ticks() {
        assert_eq!(axis_max(0), 5);
        assert_eq!(axis_max(1), 5);
        assert_eq!(axis_max(5), 5);
        assert_eq!(axis_max(7), 10);
        assert_eq!(axis_max(23), 25);
        assert_eq!(axis_max(100), 100);
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Ana", 9), "Ana");
        assert_eq!(truncate_label("Alexandria", 9), "Alexandr…");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_canvas() -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .unwrap()
            .dyn_into()
            .unwrap();
        canvas.set_width(200);
        canvas.set_height(100);
        canvas
    }

    #[wasm_bindgen_test]
    fn replace_keeps_one_chart_per_slot() {
        let mut registry = ChartRegistry::default();
        let canvas = test_canvas();
        let spec = participation_pie_spec(&AggregateSlice {
            total_participants: 8,
            total_non_participants: 1,
            ..Default::default()
        });

        assert!(registry.replace(ChartSlot::Participation, &canvas, &spec));
        assert!(registry.replace(ChartSlot::Participation, &canvas, &spec));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(ChartSlot::Participation));
    }

    #[wasm_bindgen_test]
    fn clear_destroys_every_chart() {
        let mut registry = ChartRegistry::default();
        let slice = AggregateSlice::default();

        registry.replace(
            ChartSlot::Interaction,
            &test_canvas(),
            &interaction_bar_spec(&slice),
        );
        registry.replace(
            ChartSlot::ParticipationOverTime,
            &test_canvas(),
            &participation_line_spec(&slice),
        );
        assert_eq!(registry.len(), 2);

        registry.clear();
        assert!(registry.is_empty());
    }
}
