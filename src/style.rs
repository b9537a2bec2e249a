use glam::Vec2;
use rand::Rng;

/// How a burst picks from its palette or glyph set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pick {
    /// Uniform random choice per particle.
    Random,
    /// `set[index % len]` (alternating greens, ordered icon sets).
    Cycle,
}

impl Pick {
    pub fn choose<'a>(&self, set: &[&'a str], index: usize, rng: &mut impl Rng) -> &'a str {
        match self {
            Pick::Random => set[rng.gen_range(0..set.len())],
            Pick::Cycle => set[index % set.len()],
        }
    }
}

/// Visual descriptor for one particle of a burst.
///
/// All style text is built here as plain strings so the exact CSS a particle
/// carries is checkable on the host without a DOM.
#[derive(Clone, Copy, Debug)]
pub enum Appearance {
    /// Glowing colored dot.
    Dot {
        size_px: f32,
        palette: &'static [&'static str],
        pick: Pick,
        glow_px: f32,
        opacity: f32,
    },
    /// Emoji / text glyph, optionally spinning, optionally halo-shadowed.
    Glyph {
        glyphs: &'static [&'static str],
        pick: Pick,
        font_px: f32,
        spin: bool,
        halo: &'static [&'static str],
    },
    /// Expanding circle outline (sound waves, gallery ring).
    Ring {
        end_px: f32,
        border_px: f32,
        color: &'static str,
    },
    /// Element styled entirely by page CSS; we only place it.
    Classed {
        class: &'static str,
        glyph: Option<&'static str>,
    },
}

impl Appearance {
    /// Inline style for the freshly spawned element at `pos` (viewport px).
    pub fn inline_style(&self, pos: Vec2, index: usize, rng: &mut impl Rng) -> String {
        let place = format!("position:fixed;left:{}px;top:{}px;", pos.x, pos.y);
        match self {
            Appearance::Dot {
                size_px,
                palette,
                pick,
                glow_px,
                opacity,
            } => {
                let color = pick.choose(palette, index, rng);
                let mut s = format!(
                    "{place}width:{size_px}px;height:{size_px}px;background-color:{color};\
                     border-radius:50%;pointer-events:none;z-index:9999;"
                );
                if *glow_px > 0.0 {
                    s.push_str(&format!("box-shadow:0 0 {glow_px}px {color};"));
                }
                if *opacity < 1.0 {
                    s.push_str(&format!("opacity:{opacity};"));
                }
                s
            }
            Appearance::Glyph {
                font_px,
                halo,
                pick,
                ..
            } => {
                let mut s =
                    format!("{place}font-size:{font_px}px;pointer-events:none;z-index:9999;");
                if !halo.is_empty() {
                    let color = pick.choose(halo, index, rng);
                    s.push_str(&format!("filter:drop-shadow(0 0 6px {color});"));
                }
                s
            }
            Appearance::Ring {
                end_px,
                border_px,
                color,
            } => format!(
                "{place}width:{end_px}px;height:{end_px}px;border:{border_px}px solid {color};\
                 border-radius:50%;pointer-events:none;z-index:9999;\
                 transform:translate(-50%,-50%) scale(0);"
            ),
            // Page CSS owns the rest of the look.
            Appearance::Classed { .. } => place,
        }
    }

    /// Text content for glyph particles.
    pub fn content(&self, index: usize, rng: &mut impl Rng) -> Option<&'static str> {
        match self {
            Appearance::Glyph { glyphs, pick, .. } => Some(pick.choose(glyphs, index, rng)),
            Appearance::Classed { glyph, .. } => *glyph,
            _ => None,
        }
    }

    /// CSS class, for particles the page stylesheet animates.
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Appearance::Classed { class, .. } => Some(class),
            _ => None,
        }
    }

    /// Start and end `transform` values for the flight animation.
    /// `dest` is the destination offset from the origin in px.
    pub fn flight_transforms(&self, dest: Vec2) -> (String, String) {
        match self {
            Appearance::Ring { .. } => (
                "translate(-50%,-50%) scale(0)".to_string(),
                "translate(-50%,-50%) scale(1)".to_string(),
            ),
            Appearance::Glyph { spin: true, .. } => (
                "translate(-50%,-50%) scale(1) rotate(0deg)".to_string(),
                format!("translate({}px,{}px) scale(0) rotate(360deg)", dest.x, dest.y),
            ),
            _ => (
                "translate(-50%,-50%) scale(1)".to_string(),
                format!("translate({}px,{}px) scale(0)", dest.x, dest.y),
            ),
        }
    }

    /// Opacity at the start of the flight; every particle fades to zero.
    pub fn start_opacity(&self) -> f64 {
        match self {
            Appearance::Dot { opacity, .. } => f64::from(*opacity),
            _ => 1.0,
        }
    }

    /// Classed particles are settled by a removal timer, not by `onfinish`.
    pub fn css_driven(&self) -> bool {
        matches!(self, Appearance::Classed { .. })
    }
}
