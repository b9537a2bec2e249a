use glam::Vec2;

use crate::budget::Pool;
use crate::constants::*;
use crate::style::{Appearance, Pick};
use crate::trajectory::{Jitter, Trajectory};

pub const EXPLOSION_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
pub const EASE_OUT: &str = "ease-out";

/// One parameterization of the ephemeral particle emitter.
///
/// Every former ad hoc effect function is a value of this type; the emitter
/// is the only code that interprets it.
#[derive(Clone, Copy, Debug)]
pub struct EffectSpec {
    pub name: &'static str,
    pub count: usize,
    pub stagger_ms: f64,
    pub duration_ms: f64,
    /// Uniform spawn-position scatter around the origin (width, height).
    pub origin_jitter: Vec2,
    /// Fixed spawn-position shift (click ripple centering).
    pub origin_nudge: Vec2,
    pub trajectory: Trajectory,
    pub appearance: Appearance,
    pub pool: Pool,
    pub easing: &'static str,
    /// Preferred parent element id; falls back to `<body>`.
    pub container_id: Option<&'static str>,
}

const fn base(name: &'static str) -> EffectSpec {
    EffectSpec {
        name,
        count: 1,
        stagger_ms: 0.0,
        duration_ms: 0.0,
        origin_jitter: Vec2::ZERO,
        origin_nudge: Vec2::ZERO,
        trajectory: Trajectory::Hold,
        appearance: Appearance::Classed {
            class: "particle",
            glyph: None,
        },
        pool: Pool::Unbudgeted,
        easing: EASE_OUT,
        container_id: None,
    }
}

/// Click on an alien character: colored shrapnel in random directions.
pub const ALIEN_EXPLOSION: EffectSpec = EffectSpec {
    count: 12,
    stagger_ms: 50.0,
    duration_ms: 1000.0,
    trajectory: Trajectory::RadialRandom {
        distance: Jitter {
            base: 100.0,
            spread: 150.0,
        },
    },
    appearance: Appearance::Dot {
        size_px: 8.0,
        palette: EXPLOSION_PALETTE,
        pick: Pick::Random,
        glow_px: 10.0,
        opacity: 1.0,
    },
    easing: EXPLOSION_EASING,
    ..base("alien-explosion")
};

/// Avatar click: an even ring of alternating greens.
pub const COSMIC_BURST: EffectSpec = EffectSpec {
    count: 16,
    stagger_ms: 30.0,
    duration_ms: 800.0,
    trajectory: Trajectory::RadialUniform {
        distance: Jitter {
            base: 100.0,
            spread: 50.0,
        },
    },
    appearance: Appearance::Dot {
        size_px: 4.0,
        palette: BURST_PALETTE,
        pick: Pick::Cycle,
        glow_px: 0.0,
        opacity: 1.0,
    },
    ..base("cosmic-burst")
};

/// Navigation link click: small even ring at the pointer.
pub const NAV_BURST: EffectSpec = EffectSpec {
    count: 6,
    stagger_ms: 50.0,
    duration_ms: 600.0,
    trajectory: Trajectory::RadialUniform {
        distance: Jitter::fixed(50.0),
    },
    appearance: Appearance::Dot {
        size_px: 6.0,
        palette: NAV_PALETTE,
        pick: Pick::Random,
        glow_px: 6.0,
        opacity: 1.0,
    },
    ..base("nav-burst")
};

/// Hovering an alien character: a few faint green motes.
pub const ALIEN_HOVER_GLOW: EffectSpec = EffectSpec {
    count: 3,
    stagger_ms: 150.0,
    duration_ms: 800.0,
    trajectory: Trajectory::RadialRandom {
        distance: Jitter {
            base: 30.0,
            spread: 20.0,
        },
    },
    appearance: Appearance::Dot {
        size_px: 3.0,
        palette: HOVER_GLOW_COLOR,
        pick: Pick::Random,
        glow_px: 0.0,
        opacity: 0.7,
    },
    ..base("alien-hover-glow")
};

/// Hovering the avatar: an even halo of tiny sparks.
pub const AVATAR_GLOW: EffectSpec = EffectSpec {
    count: 8,
    stagger_ms: 100.0,
    duration_ms: 1000.0,
    trajectory: Trajectory::RadialUniform {
        distance: Jitter::fixed(60.0),
    },
    appearance: Appearance::Dot {
        size_px: 2.0,
        palette: AVATAR_GLOW_COLOR,
        pick: Pick::Random,
        glow_px: 4.0,
        opacity: 1.0,
    },
    ..base("avatar-glow")
};

/// Visual stand-in for a sound effect: three expanding rings.
pub const SOUND_WAVE: EffectSpec = EffectSpec {
    count: 3,
    stagger_ms: 200.0,
    duration_ms: 600.0,
    appearance: Appearance::Ring {
        end_px: 60.0,
        border_px: 2.0,
        color: WAVE_COLOR,
    },
    ..base("sound-wave")
};

/// Gallery item click: one large expanding ring at the item center.
pub const GALLERY_RING: EffectSpec = EffectSpec {
    duration_ms: 800.0,
    appearance: Appearance::Ring {
        end_px: 200.0,
        border_px: 3.0,
        color: RING_COLOR,
    },
    ..base("gallery-ring")
};

/// Social link click: the four icons fly out in order, spinning.
pub const SOCIAL_ICONS: EffectSpec = EffectSpec {
    count: 4,
    stagger_ms: 100.0,
    duration_ms: 1000.0,
    trajectory: Trajectory::RadialUniform {
        distance: Jitter::fixed(40.0),
    },
    appearance: Appearance::Glyph {
        glyphs: SOCIAL_GLYPHS,
        pick: Pick::Cycle,
        font_px: 20.0,
        spin: true,
        halo: &[],
    },
    ..base("social-icons")
};

/// Stat item hover: gold sparks.
pub const STAT_SPARKS: EffectSpec = EffectSpec {
    count: 6,
    stagger_ms: 50.0,
    duration_ms: 600.0,
    trajectory: Trajectory::RadialRandom {
        distance: Jitter {
            base: 30.0,
            spread: 20.0,
        },
    },
    appearance: Appearance::Dot {
        size_px: 2.0,
        palette: SPARK_COLOR,
        pick: Pick::Random,
        glow_px: 4.0,
        opacity: 1.0,
    },
    ..base("stat-sparks")
};

const FOOTER_VARIANTS: [(&[&str], &[&str]); 3] = [
    (
        &["\u{1F47D}", "\u{1F6F8}", "\u{2B50}", "\u{2728}"],
        &["#00ff88", "#06ffa5"],
    ),
    (
        &["\u{1F6F8}", "\u{1F30C}", "\u{26A1}", "\u{1F4AB}"],
        &["#6b46c1", "#ff006e"],
    ),
    (
        &["\u{1F30C}", "\u{1F31F}", "\u{1F320}", "\u{1F47D}"],
        &["#ffd700", "#ff6b35"],
    ),
];

/// Footer alien click: an emoji burst themed per alien. Unknown indices fall
/// back to the first variant.
pub fn footer_burst(alien_index: usize) -> EffectSpec {
    let (glyphs, halo) = FOOTER_VARIANTS
        .get(alien_index)
        .copied()
        .unwrap_or(FOOTER_VARIANTS[0]);
    EffectSpec {
        count: 8,
        stagger_ms: 100.0,
        duration_ms: 1200.0,
        trajectory: Trajectory::RadialUniform {
            distance: Jitter {
                base: 60.0,
                spread: 40.0,
            },
        },
        appearance: Appearance::Glyph {
            glyphs,
            pick: Pick::Random,
            font_px: 24.0,
            spin: true,
            halo,
        },
        ..base("footer-burst")
    }
}

/// Drifting leaf glyphs, scattered around the origin. Counts vary by trigger
/// (alien click 5, avatar 8, footer 3, cosmic event 2).
pub fn ambient_leaves(count: usize) -> EffectSpec {
    EffectSpec {
        count,
        stagger_ms: 100.0,
        duration_ms: 4000.0,
        origin_jitter: Vec2::new(100.0, 50.0),
        appearance: Appearance::Classed {
            class: "weed-particle",
            glyph: Some(AMBIENT_GLYPH),
        },
        pool: Pool::Ambient,
        container_id: Some("weedParticles"),
        ..base("ambient-leaves")
    }
}

/// One cursor-trail mote, styled by the page stylesheet.
pub const TRAIL_PARTICLE: EffectSpec = EffectSpec {
    duration_ms: 3000.0,
    pool: Pool::General,
    container_id: Some("particles"),
    ..base("trail-particle")
};

/// The ripple every page click leaves behind.
pub const CLICK_RIPPLE: EffectSpec = EffectSpec {
    duration_ms: 800.0,
    origin_nudge: Vec2::new(-10.0, -10.0),
    appearance: Appearance::Classed {
        class: "click-effect",
        glyph: None,
    },
    container_id: Some("clickEffects"),
    ..base("click-ripple")
};

/// Post-load greeting: a wide scatter of explosion dots at screen center.
pub const WELCOME_BURST: EffectSpec = EffectSpec {
    count: 20,
    stagger_ms: 100.0,
    duration_ms: 1000.0,
    origin_jitter: Vec2::new(200.0, 200.0),
    trajectory: Trajectory::RadialRandom {
        distance: Jitter {
            base: 100.0,
            spread: 150.0,
        },
    },
    appearance: Appearance::Dot {
        size_px: 8.0,
        palette: WELCOME_PALETTE,
        pick: Pick::Random,
        glow_px: 10.0,
        opacity: 1.0,
    },
    easing: EXPLOSION_EASING,
    ..base("welcome-burst")
};

/// The small scattered burst a random cosmic event can fire.
pub const MINI_BURST: EffectSpec = EffectSpec {
    count: 3,
    stagger_ms: 200.0,
    duration_ms: 1000.0,
    origin_jitter: Vec2::new(50.0, 50.0),
    trajectory: Trajectory::RadialRandom {
        distance: Jitter {
            base: 100.0,
            spread: 150.0,
        },
    },
    appearance: Appearance::Dot {
        size_px: 8.0,
        palette: MINI_BURST_COLOR,
        pick: Pick::Random,
        glow_px: 10.0,
        opacity: 1.0,
    },
    easing: EXPLOSION_EASING,
    ..base("mini-burst")
};

/// The four effects a periodic cosmic event may pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CosmicEvent {
    Trail,
    AmbientLeaves,
    SoundWave,
    MiniBurst,
}

pub const COSMIC_EVENTS: [CosmicEvent; 4] = [
    CosmicEvent::Trail,
    CosmicEvent::AmbientLeaves,
    CosmicEvent::SoundWave,
    CosmicEvent::MiniBurst,
];

/// Decide whether a periodic tick fires an event, and which. Both draws are
/// uniform in [0, 1); the tick fires only when `fire_draw` clears the
/// threshold, then picks uniformly among the four events.
pub fn cosmic_pick(fire_draw: f64, which_draw: f64) -> Option<CosmicEvent> {
    if fire_draw <= COSMIC_FIRE_THRESHOLD {
        return None;
    }
    let i = ((which_draw * COSMIC_EVENTS.len() as f64) as usize).min(COSMIC_EVENTS.len() - 1);
    Some(COSMIC_EVENTS[i])
}
