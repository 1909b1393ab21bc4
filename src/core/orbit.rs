use crate::constants::*;
use fnv::FnvHashSet;
use glam::DVec2;
use std::f64::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GlowColor {
    Cyan,
    Purple,
}

impl GlowColor {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "cyan" => Some(GlowColor::Cyan),
            "purple" => Some(GlowColor::Purple),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            GlowColor::Cyan => "cyan",
            GlowColor::Purple => "purple",
        }
    }

    /// Ring gradient colours: (primary, secondary, border).
    pub fn ring_colors(self) -> (&'static str, &'static str, &'static str) {
        match self {
            GlowColor::Cyan => (
                "rgba(6, 182, 212, 0.4)",
                "rgba(6, 182, 212, 0.2)",
                "rgba(6, 182, 212, 0.3)",
            ),
            GlowColor::Purple => (
                "rgba(147, 51, 234, 0.4)",
                "rgba(147, 51, 234, 0.2)",
                "rgba(147, 51, 234, 0.3)",
            ),
        }
    }

    pub fn hover_shadow(self) -> &'static str {
        match self {
            GlowColor::Cyan => "0 0 30px rgba(6, 182, 212, 0.25), 0 0 60px rgba(6, 182, 212, 0.125)",
            GlowColor::Purple => {
                "0 0 30px rgba(147, 51, 234, 0.25), 0 0 60px rgba(147, 51, 234, 0.125)"
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitItem {
    pub id: String,
    pub orbit_radius: f64,
    pub size: f64,
    /// Radians per second; negative runs clockwise-reversed.
    pub speed: f64,
    pub phase_shift: f64,
    pub glow_color: GlowColor,
    pub label: String,
}

impl OrbitItem {
    pub fn new(
        id: &str,
        orbit_radius: f64,
        size: f64,
        speed: f64,
        phase_shift: f64,
        glow_color: GlowColor,
        label: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            orbit_radius,
            size,
            speed,
            phase_shift,
            glow_color,
            label: label.to_string(),
        }
    }

    #[inline]
    pub fn angle_at(&self, t: f64) -> f64 {
        t * self.speed + self.phase_shift
    }

    /// Offset of the item's top-left corner from the orbit centre at time `t`.
    #[inline]
    pub fn offset_at(&self, t: f64) -> DVec2 {
        let a = self.angle_at(t);
        let half = self.size * 0.5;
        DVec2::new(
            a.cos() * self.orbit_radius - half,
            a.sin() * self.orbit_radius - half,
        )
    }
}

/// Three skills on the inner ring, four on the outer counter-rotating ring.
pub fn default_catalog() -> Vec<OrbitItem> {
    use GlowColor::*;
    let (r1, s1) = (ORBIT_INNER_RADIUS, ORBIT_INNER_SPEED);
    let (r2, s2) = (ORBIT_OUTER_RADIUS, ORBIT_OUTER_SPEED);
    vec![
        OrbitItem::new("python", r1, 45.0, s1, 0.0, Cyan, "Python"),
        OrbitItem::new("langchain", r1, 40.0, s1, 2.0 * PI / 3.0, Cyan, "LangChain"),
        OrbitItem::new("fastapi", r1, 40.0, s1, 4.0 * PI / 3.0, Cyan, "FastAPI"),
        OrbitItem::new("openai", r2, 50.0, s2, 0.0, Purple, "OpenAI"),
        OrbitItem::new("pinecone", r2, 45.0, s2, PI / 2.0, Purple, "Pinecone"),
        OrbitItem::new("huggingface", r2, 40.0, s2, PI, Purple, "Hugging Face"),
        OrbitItem::new("n8n", r2, 40.0, s2, 3.0 * PI / 2.0, Purple, "n8n"),
    ]
}

/// Decorative ring drawn under one orbit group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPath {
    pub radius: f64,
    pub glow_color: GlowColor,
    pub animation_delay_sec: f64,
}

/// One ring per distinct radius, in catalog order of first appearance.
pub fn orbit_paths(items: &[OrbitItem]) -> Vec<OrbitPath> {
    let mut paths: Vec<OrbitPath> = Vec::new();
    for item in items {
        if paths.iter().any(|p| p.radius == item.orbit_radius) {
            continue;
        }
        paths.push(OrbitPath {
            radius: item.orbit_radius,
            glow_color: item.glow_color,
            animation_delay_sec: paths.len() as f64 * ORBIT_PATH_DELAY_STEP_SEC,
        });
    }
    paths
}

/// Render pose for one item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPose {
    pub offset: DVec2,
    pub scale: f64,
    pub z_index: i32,
    pub label_visible: bool,
}

pub struct OrbitEngine {
    items: Vec<OrbitItem>,
    elapsed: f64,
    paused: bool,
    hovered: FnvHashSet<String>,
}

impl OrbitEngine {
    pub fn new(items: Vec<OrbitItem>) -> Self {
        Self {
            items,
            elapsed: 0.0,
            paused: false,
            hovered: FnvHashSet::default(),
        }
    }

    /// Advance the shared clock unless paused.
    /// Move the shared clock forward. Returns false when nothing moved
    /// (paused, or a non-positive delta), so callers can skip restyling.
    pub fn advance(&mut self, dt_sec: f64) -> bool {
        if self.paused || dt_sec <= 0.0 {
            return false;
        }
        self.elapsed += dt_sec;
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn items(&self) -> &[OrbitItem] {
        &self.items
    }

    /// Toggle hover on the item with `id`. Returns false for unknown ids.
    pub fn set_hovered(&mut self, id: &str, hovered: bool) -> bool {
        if !self.items.iter().any(|i| i.id == id) {
            return false;
        }
        if hovered {
            self.hovered.insert(id.to_string());
        } else {
            self.hovered.remove(id);
        }
        true
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.contains(id)
    }

    pub fn angle_of(&self, index: usize) -> Option<f64> {
        self.items.get(index).map(|i| i.angle_at(self.elapsed))
    }

    pub fn pose_of(&self, index: usize) -> Option<ItemPose> {
        let item = self.items.get(index)?;
        let hovered = self.is_hovered(&item.id);
        Some(ItemPose {
            offset: item.offset_at(self.elapsed),
            scale: if hovered { ORBIT_HOVER_SCALE } else { 1.0 },
            z_index: if hovered {
                ORBIT_HOVER_Z_INDEX
            } else {
                ORBIT_Z_INDEX
            },
            label_visible: hovered,
        })
    }

    pub fn poses(&self) -> impl Iterator<Item = (&OrbitItem, ItemPose)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter_map(move |(i, item)| self.pose_of(i).map(|p| (item, p)))
    }

    pub fn paths(&self) -> Vec<OrbitPath> {
        orbit_paths(&self.items)
    }
}
