use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{HERO_RINGS, LAYOUT_SCALE, NODE_RADIUS, SceneState, breathe, float_offset, ring_pose};
use super::types::SceneKind;

const TEAL: (u8, u8, u8) = (13, 148, 136);
const GOLD: (u8, u8, u8) = (197, 160, 89);

fn rgba((r, g, b): (u8, u8, u8), a: f64) -> String {
	format!("rgba({r}, {g}, {b}, {a})")
}

pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	match state.kind {
		SceneKind::Hero => {
			draw_stars(state, ctx);
			draw_rings(state, ctx);
			draw_edges(state, ctx);
			draw_nodes(state, ctx);
		}
		SceneKind::Vault => draw_vault(state, ctx),
	}
}

fn draw_stars(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	for star in &state.stars {
		let alpha = 0.35 + 0.35 * (state.time * 0.6 + star.phase).sin();
		ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha.max(0.05)));
		ctx.fill_rect(star.x * state.width, star.y * state.height, star.size, star.size);
	}
}

fn draw_rings(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let u = state.unit();
	let (cx, cy) = state.to_screen(0.0, 0.0);
	for ring in &HERO_RINGS {
		let (rotation, squash, alpha) = ring_pose(ring, state.time);
		ctx.set_stroke_style_str(&rgba(ring.color, alpha));
		ctx.set_line_width(1.5);
		ctx.begin_path();
		let _ = ctx.ellipse(
			cx,
			cy,
			ring.radius * u,
			ring.radius * u * squash,
			rotation,
			0.0,
			2.0 * PI,
		);
		ctx.stroke();
	}
}

/// Laid-out node position plus its drift, in screen space.
fn node_screen(state: &SceneState, x: f32, y: f32) -> (f64, f64) {
	let (gx, gy) = (x as f64 / LAYOUT_SCALE, y as f64 / LAYOUT_SCALE);
	let (dx, dy) = float_offset(gx, gy, state.time);
	state.to_screen(gx + dx, gy + dy)
}

fn draw_edges(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let (dash, gap) = (6.0, 6.0);
	let dash_offset = -(state.time * 20.0) % (dash + gap);

	ctx.set_stroke_style_str(&rgba(TEAL, 0.35));
	ctx.set_line_width(1.0);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(dash),
		&JsValue::from_f64(gap),
	));
	ctx.set_line_dash_offset(dash_offset);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1) = node_screen(state, n1.x(), n1.y());
		let (x2, y2) = node_screen(state, n2.x(), n2.y());
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	});
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let u = state.unit();
	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let (x, y) = node_screen(state, node.x(), node.y());
		let radius = NODE_RADIUS * u * breathe(info.scale, info.phase, state.time);

		if info.hub {
			let glow = radius * 2.2;
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.3, x, y, glow) {
				let _ = gradient.add_color_stop(0.0, "rgba(255, 255, 255, 0.25)");
				let _ = gradient.add_color_stop(0.6, "rgba(200, 220, 255, 0.08)");
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(info.color);
		ctx.fill();

		// specular highlight
		ctx.begin_path();
		let _ = ctx.arc(
			x - radius * 0.35,
			y - radius * 0.35,
			radius * 0.25,
			0.0,
			2.0 * PI,
		);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.35)");
		ctx.fill();
	});
}

fn draw_vault(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let u = state.unit();
	let t = state.time;
	let bob = (t * 0.8).sin() * 0.1;

	// base plate
	let (bx, by) = state.to_screen(-1.8, -1.9 + bob);
	ctx.set_fill_style_str("#1E3A5F");
	ctx.fill_rect(bx, by, 3.6 * u, 0.3 * u);

	for i in 0..4 {
		let level = -1.4 + i as f64 * 0.9 + bob;
		let (x, y) = state.to_screen(-1.5, level + 0.3);
		ctx.set_fill_style_str("#0F172A");
		ctx.fill_rect(x, y, 3.0 * u, 0.6 * u);
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.08)");
		ctx.set_line_width(1.0);
		ctx.stroke_rect(x, y, 3.0 * u, 0.6 * u);

		let light = if i == 2 { GOLD } else { TEAL };
		let pulse = 0.6 + 0.4 * (t * 2.0 + i as f64).sin().abs();
		ctx.set_fill_style_str(&rgba(light, pulse));
		ctx.fill_rect(x + 0.15 * u, y + 0.45 * u, 2.7 * u, 0.06 * u);
	}

	// top security layer
	let (cx, top) = state.to_screen(0.0, 2.2 + bob);
	ctx.set_fill_style_str(&rgba(GOLD, 0.9));
	ctx.begin_path();
	let _ = ctx.ellipse(cx, top, 1.9 * u, 0.25 * u, 0.0, 0.0, 2.0 * PI);
	ctx.fill();

	for (radius, level, color) in [(2.4, 0.0, TEAL), (3.2, 0.9, (30, 58, 95))] {
		let (rx, ry) = state.to_screen(0.0, level + bob);
		let alpha = 0.3 + 0.15 * (t * 0.9 + radius).sin();
		ctx.set_stroke_style_str(&rgba(color, alpha));
		ctx.set_line_width(1.5);
		ctx.begin_path();
		let _ = ctx.ellipse(rx, ry, radius * u, radius * u * 0.22, 0.0, 0.0, 2.0 * PI);
		ctx.stroke();
	}
}
