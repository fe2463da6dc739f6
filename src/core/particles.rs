use super::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// One of the two fixed node hues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeColor {
    Cyan,
    Violet,
}

impl NodeColor {
    #[inline]
    pub fn css(self) -> &'static str {
        match self {
            NodeColor::Cyan => "#00f3ff",
            NodeColor::Violet => "#bc13fe",
        }
    }
}

/// A single decorative point in the background field.
///
/// `radius` and `color` are fixed at creation; position and velocity change
/// every frame.
#[derive(Clone, Debug)]
pub struct Node {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: NodeColor,
}

impl Node {
    /// Spawn a node uniformly inside `bounds` with a small random drift.
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * NODE_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * NODE_SPEED_SPAN,
        );
        let radius = if rng.gen_bool(NODE_LARGE_PROBABILITY) {
            NODE_LARGE_RADIUS
        } else {
            NODE_SMALL_RADIUS
        };
        let color = if rng.gen_bool(NODE_CYAN_PROBABILITY) {
            NodeColor::Cyan
        } else {
            NodeColor::Violet
        };
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Integrate, bounce off the walls, then get pushed by the pointer.
    ///
    /// The bounce only flips the velocity sign; the position is not clamped,
    /// so a node can sit outside `bounds` for the frame after crossing. A node
    /// left outside by a shrinking viewport turns inward and drifts back.
    pub fn update(&mut self, bounds: Vec2, pointer: Option<Vec2>, params: &FieldParams) {
        self.position += self.velocity;

        self.velocity.x = bounce_axis(self.position.x, self.velocity.x, bounds.x);
        self.velocity.y = bounce_axis(self.position.y, self.velocity.y, bounds.y);

        if let Some(p) = pointer {
            self.velocity -= repulsion(p - self.position, params);
        }

        if let Some(max) = params.max_speed {
            self.velocity = self.velocity.clamp_length_max(max);
        }
    }
}

/// Flip `vel` only while `pos` is outside `[0, max]` and still heading away.
#[inline]
pub fn bounce_axis(pos: f32, vel: f32, max: f32) -> f32 {
    if (pos < 0.0 && vel < 0.0) || (pos > max && vel > 0.0) {
        -vel
    } else {
        vel
    }
}

/// Velocity change toward `delta` (pointer minus node) that the caller
/// subtracts. Zero outside the repel radius and at zero distance.
#[inline]
pub fn repulsion(delta: Vec2, params: &FieldParams) -> Vec2 {
    let dist = delta.length();
    if dist >= params.repel_radius || dist <= f32::EPSILON {
        return Vec2::ZERO;
    }
    let force = (params.repel_radius - dist) / params.repel_radius;
    delta / dist * force * params.repel_strength
}

/// Stroke opacity of the line between two nodes `dist` apart.
#[inline]
pub fn link_alpha(dist: f32, link_distance: f32) -> f32 {
    if dist >= link_distance {
        0.0
    } else {
        (1.0 - dist / link_distance) * LINK_ALPHA_MAX
    }
}

/// Tuning for the background field.
#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub count: usize,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub link_distance: f32,
    /// Optional cap on node speed. `None` keeps the undamped behaviour where
    /// repeated close passes can keep adding speed.
    pub max_speed: Option<f32>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            link_distance: LINK_DISTANCE,
            max_speed: None,
        }
    }
}

/// A connecting line between two nearby nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub alpha: f32,
}

/// Fixed-size set of drifting nodes inside a `width x height` viewport.
pub struct ParticleField {
    nodes: Vec<Node>,
    bounds: Vec2,
    params: FieldParams,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let bounds = Vec2::new(width, height);
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = (0..params.count)
            .map(|_| Node::spawn(&mut rng, bounds))
            .collect();
        Self {
            nodes,
            bounds,
            params,
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Change the wall positions. Existing nodes keep their coordinates and
    /// drift back in through the normal bounce.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
    }

    /// Advance every node by one frame.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let bounds = self.bounds;
        let params = self.params;
        for node in &mut self.nodes {
            node.update(bounds, pointer, &params);
        }
    }

    /// Lines between every unordered pair closer than the link distance.
    ///
    /// Brute-force over all pairs; fine for a few dozen nodes.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let n = self.nodes.len();
        let link_distance = self.params.link_distance;
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| {
                let a = self.nodes[i].position;
                let b = self.nodes[j].position;
                let dist = a.distance(b);
                (dist < link_distance).then(|| Link {
                    from: a,
                    to: b,
                    alpha: link_alpha(dist, link_distance),
                })
            })
        })
    }
}
