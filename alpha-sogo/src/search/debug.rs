use sogo::{Action, GameResult};

use super::{
    mcts::{SearchTree, ROOT},
    node::NodeId,
};

impl SearchTree {
    /// Tabulates the root children by visit count, with the most explored
    /// continuation for each.
    pub fn debug(&self, limit: Option<usize>) -> String {
        const MAX_CONTINUATION_LEN: usize = 8;
        const MIN_VISIT_COUNT: u32 = 10;
        let mut children: Vec<NodeId> = self.nodes[ROOT].children.to_vec();
        children.sort_by_key(|&id| std::cmp::Reverse(self.nodes[id].visits));
        format!("move      visited   reward   policy | continuation\n{}", {
            children
                .into_iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|id| {
                    let node = &self.nodes[id];
                    let continuation = self
                        .continuation(id, MIN_VISIT_COUNT, MAX_CONTINUATION_LEN)
                        .into_iter()
                        .map(|action| action.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    let action = node.action.map(|a| a.to_string()).unwrap_or_default();
                    format!(
                        "{: <8} {: >8} {: >8.4} {: >8.4} | {}\n",
                        action,
                        node.visits,
                        node.expected_reward(),
                        node.policy,
                        continuation,
                    )
                })
                .collect::<String>()
        })
    }

    fn continuation(&self, id: NodeId, min_visit_count: u32, depth: usize) -> Vec<Action> {
        let node = &self.nodes[id];
        if depth == 0
            || !node.is_expanded()
            || (node.game.result() == GameResult::Ongoing && node.visits <= min_visit_count)
        {
            return Vec::new();
        }
        let mut best = node.children[0];
        for &child in &node.children[1..] {
            if self.nodes[child].visits > self.nodes[best].visits {
                best = child;
            }
        }
        let mut actions = Vec::with_capacity(depth);
        if let Some(action) = self.nodes[best].action {
            actions.push(action);
        }
        actions.extend(self.continuation(best, min_visit_count, depth - 1));
        actions
    }
}
