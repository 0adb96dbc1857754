use headsup_engine::policy::{DecisionContext, DecisionPolicy};
use headsup_engine::round::Action;

/// Checks when it can, calls when it must. Never folds, never raises.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl DecisionPolicy for PassiveAI {
    fn decide(&mut self, _ctx: &DecisionContext) -> Action {
        Action::CheckCall
    }

    fn name(&self) -> &str {
        "PassiveAI"
    }
}
