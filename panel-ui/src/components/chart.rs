//! Chart Component
//!
//! Line, bar and pie charts drawn on an HTML5 canvas from a [`ChartSpec`].

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use dreamworks_panel::panel::{ChartKind, ChartSpec};

const FALLBACK_COLOR: &str = "#6b7280";

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

#[component]
pub fn Chart(spec: ChartSpec) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = legend_entries(&spec);
    let title = spec.title.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &spec);
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <h3 class="text-lg font-semibold mb-2">{title}</h3>
            <canvas node_ref=canvas_ref width="600" height="300" class="w-full h-64" />
            <div class="flex justify-center flex-wrap gap-4 mt-2">
                {legend.into_iter().map(|(label, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
                        <span class="text-sm text-gray-600">{label}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Pie charts label slices; line and bar charts label series
fn legend_entries(spec: &ChartSpec) -> Vec<(String, String)> {
    match spec.kind {
        ChartKind::Pie => spec
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = spec
                    .datasets
                    .first()
                    .map(|d| color_at(&d.colors, i))
                    .unwrap_or(FALLBACK_COLOR);
                (label.clone(), color.to_string())
            })
            .collect(),
        _ => spec
            .datasets
            .iter()
            .map(|d| (d.label.clone(), color_at(&d.colors, 0).to_string()))
            .collect(),
    }
}

fn color_at(colors: &[String], index: usize) -> &str {
    if colors.is_empty() {
        FALLBACK_COLOR
    } else {
        &colors[index % colors.len()]
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, spec: &ChartSpec) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    match spec.kind {
        ChartKind::Line => {
            draw_axes(&ctx, spec, width, height);
            draw_lines(&ctx, spec, width, height);
        }
        ChartKind::Bar => {
            draw_axes(&ctx, spec, width, height);
            draw_bars(&ctx, spec, width, height);
        }
        ChartKind::Pie => draw_pie(&ctx, spec, width, height),
    }
}

fn y_max(spec: &ChartSpec) -> f64 {
    let max = spec.max_value();
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn draw_axes(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let max = y_max(spec);

    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let slots = spec.labels.len().max(1) as f64;
    for (i, label) in spec.labels.iter().enumerate() {
        let x = MARGIN_LEFT + (i as f64 + 0.5) * chart_width / slots;
        let _ = ctx.fill_text(label, x - 20.0, height - 15.0);
    }
}

fn draw_lines(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let slots = spec.labels.len().max(1) as f64;
    let max = y_max(spec);

    for dataset in &spec.datasets {
        let color = color_at(&dataset.colors, 0);
        let point = |i: usize, value: f64| {
            let x = MARGIN_LEFT + (i as f64 + 0.5) * chart_width / slots;
            let y = MARGIN_TOP + (1.0 - value / max) * chart_height;
            (x, y)
        };

        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, value) in dataset.data.iter().enumerate() {
            let (x, y) = point(i, *value);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for (i, value) in dataset.data.iter().enumerate() {
            let (x, y) = point(i, *value);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }
}

fn draw_bars(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) {
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let slot = chart_width / spec.labels.len().max(1) as f64;
    let series = spec.datasets.len().max(1) as f64;
    let bar_width = slot * 0.8 / series;
    let max = y_max(spec);

    for (s, dataset) in spec.datasets.iter().enumerate() {
        ctx.set_fill_style(&color_at(&dataset.colors, 0).into());
        for (i, value) in dataset.data.iter().enumerate() {
            let bar_height = value / max * chart_height;
            let x = MARGIN_LEFT + i as f64 * slot + slot * 0.1 + s as f64 * bar_width;
            let y = MARGIN_TOP + chart_height - bar_height;
            ctx.fill_rect(x, y, bar_width, bar_height);
        }
    }
}

fn draw_pie(ctx: &CanvasRenderingContext2d, spec: &ChartSpec, width: f64, height: f64) {
    let Some(dataset) = spec.datasets.first() else {
        return;
    };
    let total: f64 = dataset.data.iter().sum();
    if total <= 0.0 {
        ctx.set_fill_style(&FALLBACK_COLOR.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("Sem dados", width / 2.0 - 35.0, height / 2.0);
        return;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = (width.min(height) / 2.0) - 20.0;
    let mut start = -std::f64::consts::FRAC_PI_2;

    for (i, value) in dataset.data.iter().enumerate() {
        let sweep = value / total * std::f64::consts::PI * 2.0;
        ctx.set_fill_style(&color_at(&dataset.colors, i).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();
        start += sweep;
    }
}
