use super::node::Node;

/// `U(s, a) = Q(s, a) + C * P(s, a) * sqrt(N(s)) / (1 + N(s, a))`
///
/// `Q` is the child's mean value seen from the parent, so the child's own
/// estimate enters negated; unvisited children count as zero.
pub fn upper_confidence_bound(exploration: f32, parent_visits: u32, child: &Node) -> f32 {
    let q_value = if child.visits == 0 {
        0.0
    } else {
        -child.value_sum / child.visits as f32
    };
    q_value + exploration * child.policy * (parent_visits as f32).sqrt() / (child.visits as f32 + 1.0)
}
