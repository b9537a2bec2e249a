// Host-side tests for particle style and keyframe text generation.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use style::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

const GREENS: &[&str] = &["#00ff88", "#06ffa5"];

#[test]
fn dot_style_carries_position_size_and_color() {
    let mut rng = rng();
    let dot = Appearance::Dot {
        size_px: 8.0,
        palette: &["#ff006e"],
        pick: Pick::Random,
        glow_px: 10.0,
        opacity: 1.0,
    };
    let css = dot.inline_style(Vec2::new(100.0, 200.0), 0, &mut rng);
    assert!(css.contains("position:fixed"));
    assert!(css.contains("left:100px"));
    assert!(css.contains("top:200px"));
    assert!(css.contains("width:8px"));
    assert!(css.contains("background-color:#ff006e"));
    assert!(css.contains("border-radius:50%"));
    assert!(css.contains("pointer-events:none"));
    assert!(css.contains("box-shadow:0 0 10px #ff006e"));
    assert!(!css.contains("opacity")); // full opacity is the default
}

#[test]
fn faint_dot_gets_an_opacity_and_no_glow() {
    let mut rng = rng();
    let dot = Appearance::Dot {
        size_px: 3.0,
        palette: GREENS,
        pick: Pick::Random,
        glow_px: 0.0,
        opacity: 0.7,
    };
    let css = dot.inline_style(Vec2::ZERO, 0, &mut rng);
    assert!(css.contains("opacity:0.7"));
    assert!(!css.contains("box-shadow"));
    assert!((dot.start_opacity() - 0.7).abs() < 1e-6);
}

#[test]
fn cycle_pick_alternates_deterministically() {
    let mut rng = rng();
    for i in 0..8 {
        let chosen = Pick::Cycle.choose(GREENS, i, &mut rng);
        assert_eq!(chosen, GREENS[i % 2]);
    }
}

#[test]
fn random_pick_stays_inside_the_set() {
    let mut rng = rng();
    for i in 0..100 {
        let chosen = Pick::Random.choose(GREENS, i, &mut rng);
        assert!(GREENS.contains(&chosen));
    }
}

#[test]
fn glyph_style_and_content() {
    let mut rng = rng();
    let glyph = Appearance::Glyph {
        glyphs: &["A", "B", "C", "D"],
        pick: Pick::Cycle,
        font_px: 20.0,
        spin: true,
        halo: &[],
    };
    let css = glyph.inline_style(Vec2::new(5.0, 6.0), 0, &mut rng);
    assert!(css.contains("font-size:20px"));
    assert!(!css.contains("drop-shadow"));
    assert_eq!(glyph.content(0, &mut rng), Some("A"));
    assert_eq!(glyph.content(2, &mut rng), Some("C"));
    assert_eq!(glyph.content(5, &mut rng), Some("B"));
}

#[test]
fn halo_glyph_carries_a_drop_shadow() {
    let mut rng = rng();
    let glyph = Appearance::Glyph {
        glyphs: &["X"],
        pick: Pick::Random,
        font_px: 24.0,
        spin: true,
        halo: &["#ffd700"],
    };
    let css = glyph.inline_style(Vec2::ZERO, 0, &mut rng);
    assert!(css.contains("filter:drop-shadow(0 0 6px #ffd700)"));
}

#[test]
fn ring_spawns_collapsed_and_centered() {
    let mut rng = rng();
    let ring = Appearance::Ring {
        end_px: 200.0,
        border_px: 3.0,
        color: "#00ff88",
    };
    let css = ring.inline_style(Vec2::new(50.0, 60.0), 0, &mut rng);
    assert!(css.contains("width:200px"));
    assert!(css.contains("border:3px solid #00ff88"));
    assert!(css.contains("scale(0)"));

    let (from, to) = ring.flight_transforms(Vec2::ZERO);
    assert!(from.contains("scale(0)"));
    assert!(to.contains("scale(1)"));
}

#[test]
fn classed_particle_only_gets_placed() {
    let mut rng = rng();
    let classed = Appearance::Classed {
        class: "weed-particle",
        glyph: Some("leaf"),
    };
    let css = classed.inline_style(Vec2::new(10.0, 20.0), 0, &mut rng);
    assert_eq!(css, "position:fixed;left:10px;top:20px;");
    assert_eq!(classed.class(), Some("weed-particle"));
    assert_eq!(classed.content(0, &mut rng), Some("leaf"));
    assert!(classed.css_driven());
}

#[test]
fn flight_transforms_end_at_the_destination() {
    let dot = Appearance::Dot {
        size_px: 8.0,
        palette: GREENS,
        pick: Pick::Random,
        glow_px: 0.0,
        opacity: 1.0,
    };
    let (from, to) = dot.flight_transforms(Vec2::new(30.0, -40.0));
    assert!(from.contains("scale(1)"));
    assert!(to.contains("translate(30px,-40px)"));
    assert!(to.contains("scale(0)"));
    assert!(!to.contains("rotate"));

    let spinner = Appearance::Glyph {
        glyphs: &["S"],
        pick: Pick::Random,
        font_px: 20.0,
        spin: true,
        halo: &[],
    };
    let (from, to) = spinner.flight_transforms(Vec2::new(40.0, 0.0));
    assert!(from.contains("rotate(0deg)"));
    assert!(to.contains("rotate(360deg)"));
}
