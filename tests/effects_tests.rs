// Host-side tests for the effect preset table and cosmic event dispatch.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod budget {
    include!("../src/budget.rs");
}
mod style {
    include!("../src/style.rs");
}
mod trajectory {
    include!("../src/trajectory.rs");
}
mod effects {
    include!("../src/effects.rs");
}

use budget::Pool;
use effects::*;
use glam::Vec2;
use style::Appearance;
use trajectory::{burst_window, Jitter, Trajectory};

#[test]
fn explosion_preset_matches_observed_behavior() {
    assert_eq!(ALIEN_EXPLOSION.count, 12);
    assert_eq!(ALIEN_EXPLOSION.stagger_ms, 50.0);
    assert_eq!(ALIEN_EXPLOSION.duration_ms, 1000.0);
    assert_eq!(ALIEN_EXPLOSION.pool, Pool::Unbudgeted);
    assert_eq!(
        ALIEN_EXPLOSION.trajectory,
        Trajectory::RadialRandom {
            distance: Jitter {
                base: 100.0,
                spread: 150.0
            }
        }
    );
    // 12 particles at 50ms stagger: the burst spans 550ms, and every particle
    // settles within duration_ms of its own spawn.
    assert_eq!(
        burst_window(ALIEN_EXPLOSION.count, ALIEN_EXPLOSION.stagger_ms),
        550.0
    );
}

#[test]
fn cosmic_burst_is_an_even_sixteen_ring() {
    assert_eq!(COSMIC_BURST.count, 16);
    assert!(matches!(
        COSMIC_BURST.trajectory,
        Trajectory::RadialUniform { .. }
    ));
    assert_eq!(COSMIC_BURST.stagger_ms, 30.0);
    assert_eq!(COSMIC_BURST.duration_ms, 800.0);
}

#[test]
fn pooled_presets_point_at_the_right_pools() {
    assert_eq!(TRAIL_PARTICLE.pool, Pool::General);
    assert_eq!(ambient_leaves(5).pool, Pool::Ambient);
    assert_eq!(CLICK_RIPPLE.pool, Pool::Unbudgeted);
}

// The page markup defines these container ids; a rename here silently drops
// every particle into <body> and loses the container CSS.
#[test]
fn container_ids_match_the_page_markup() {
    assert_eq!(TRAIL_PARTICLE.container_id, Some("particles"));
    assert_eq!(ambient_leaves(2).container_id, Some("weedParticles"));
    assert_eq!(CLICK_RIPPLE.container_id, Some("clickEffects"));
}

#[test]
fn classed_presets_are_css_driven_and_hold() {
    for spec in [TRAIL_PARTICLE, CLICK_RIPPLE, ambient_leaves(3)] {
        assert!(spec.appearance.css_driven(), "{}", spec.name);
        assert_eq!(spec.trajectory, Trajectory::Hold, "{}", spec.name);
    }
    assert_eq!(ambient_leaves(3).count, 3);
    assert_eq!(ambient_leaves(3).duration_ms, 4000.0);
    assert_eq!(ambient_leaves(3).origin_jitter, Vec2::new(100.0, 50.0));
}

#[test]
fn click_ripple_centers_on_the_pointer() {
    assert_eq!(CLICK_RIPPLE.origin_nudge, Vec2::new(-10.0, -10.0));
    assert_eq!(CLICK_RIPPLE.duration_ms, 800.0);
}

#[test]
fn footer_variants_fall_back_to_first() {
    let v0 = footer_burst(0);
    let v9 = footer_burst(9);
    let (Appearance::Glyph { glyphs: g0, .. }, Appearance::Glyph { glyphs: g9, .. }) =
        (v0.appearance, v9.appearance)
    else {
        panic!("footer bursts must be glyph effects");
    };
    assert_eq!(g0, g9);

    // Distinct themed variants for the three real footer aliens.
    let Appearance::Glyph { glyphs: g1, halo: h1, .. } = footer_burst(1).appearance else {
        panic!("glyph expected");
    };
    assert_ne!(g0, g1);
    assert_eq!(h1, &["#6b46c1", "#ff006e"][..]);
}

#[test]
fn welcome_burst_scatters_wide() {
    assert_eq!(WELCOME_BURST.count, 20);
    assert_eq!(WELCOME_BURST.origin_jitter, Vec2::new(200.0, 200.0));
    assert_eq!(WELCOME_BURST.stagger_ms, 100.0);
}

#[test]
fn cosmic_pick_honors_the_fire_threshold() {
    assert_eq!(cosmic_pick(0.0, 0.5), None);
    assert_eq!(cosmic_pick(0.95, 0.5), None); // threshold is exclusive
    assert!(cosmic_pick(0.951, 0.5).is_some());
}

#[test]
fn cosmic_pick_is_uniform_over_the_four_events() {
    assert_eq!(cosmic_pick(0.99, 0.0), Some(CosmicEvent::Trail));
    assert_eq!(cosmic_pick(0.99, 0.26), Some(CosmicEvent::AmbientLeaves));
    assert_eq!(cosmic_pick(0.99, 0.51), Some(CosmicEvent::SoundWave));
    assert_eq!(cosmic_pick(0.99, 0.76), Some(CosmicEvent::MiniBurst));
    // The top edge of the draw never indexes past the table.
    assert_eq!(cosmic_pick(0.99, 0.9999999), Some(CosmicEvent::MiniBurst));
}

#[test]
fn every_animated_preset_has_positive_duration() {
    let presets = [
        ALIEN_EXPLOSION,
        COSMIC_BURST,
        NAV_BURST,
        ALIEN_HOVER_GLOW,
        AVATAR_GLOW,
        SOUND_WAVE,
        GALLERY_RING,
        SOCIAL_ICONS,
        STAT_SPARKS,
        footer_burst(0),
        WELCOME_BURST,
        MINI_BURST,
        TRAIL_PARTICLE,
        CLICK_RIPPLE,
        ambient_leaves(1),
    ];
    for spec in presets {
        assert!(spec.duration_ms > 0.0, "{}", spec.name);
        assert!(spec.count > 0, "{}", spec.name);
        assert!(spec.stagger_ms >= 0.0, "{}", spec.name);
    }
}
